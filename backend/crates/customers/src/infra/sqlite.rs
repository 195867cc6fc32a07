//! SQLite Repository Implementation

use crate::domain::entities::{Customer, CustomerChanges, NewCustomer};
use crate::domain::repository::CustomerRepository;
use crate::error::{CustomerError, CustomerResult, Operation};
use kernel::id::CustomerId;
use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;

/// SQLite-backed repository
#[derive(Clone)]
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply the bundled schema
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        sqlx::migrate!("../../../database/migrations")
            .run(&self.pool)
            .await
    }
}

impl CustomerRepository for SqliteCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> CustomerResult<Option<Customer>> {
        let row = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, CompanyName, ContactName FROM Customers WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(CustomerError::storage(Operation::FetchOne))?;

        Ok(row.map(CustomerRow::into_customer))
    }

    async fn list(&self) -> CustomerResult<Vec<Customer>> {
        let rows = sqlx::query_as::<_, CustomerRow>(
            "SELECT id, CompanyName, ContactName FROM Customers ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(CustomerError::storage(Operation::FetchAll))?;

        Ok(rows.into_iter().map(CustomerRow::into_customer).collect())
    }

    async fn create(&self, customer: &NewCustomer) -> CustomerResult<CustomerId> {
        let result =
            sqlx::query("INSERT INTO Customers (CompanyName, ContactName) VALUES (?, ?)")
                .bind(customer.company_name.as_str())
                .bind(customer.contact_name.as_str())
                .execute(&self.pool)
                .await
                .map_err(CustomerError::storage(Operation::Create))?;

        Ok(CustomerId::new(result.last_insert_rowid()))
    }

    async fn update(&self, id: CustomerId, changes: &CustomerChanges) -> CustomerResult<u64> {
        // NULL binds keep the stored value.
        let result = sqlx::query(
            r#"
            UPDATE Customers
            SET CompanyName = COALESCE(?, CompanyName),
                ContactName = COALESCE(?, ContactName)
            WHERE id = ?
            "#,
        )
        .bind(changes.company_name().map(|c| c.as_str()))
        .bind(changes.contact_name().map(|c| c.as_str()))
        .bind(id.get())
        .execute(&self.pool)
        .await
        .map_err(CustomerError::storage(Operation::Update))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: CustomerId) -> CustomerResult<u64> {
        let result = sqlx::query("DELETE FROM Customers WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(CustomerError::storage(Operation::Delete))?;

        Ok(result.rows_affected())
    }
}

#[derive(sqlx::FromRow)]
struct CustomerRow {
    id: i64,
    #[sqlx(rename = "CompanyName")]
    company_name: String,
    #[sqlx(rename = "ContactName")]
    contact_name: String,
}

impl CustomerRow {
    fn into_customer(self) -> Customer {
        Customer {
            id: CustomerId::new(self.id),
            company_name: self.company_name,
            contact_name: self.contact_name,
        }
    }
}
