//! Domain Entities

use crate::domain::value_objects::{CompanyName, ContactName};
use kernel::id::CustomerId;

/// A stored customer row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub company_name: String,
    pub contact_name: String,
}

/// A customer that has not been inserted yet; storage assigns the id
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub company_name: CompanyName,
    pub contact_name: ContactName,
}

/// Fields to overwrite on an existing customer
///
/// At least one field is always set; fields left `None` keep their stored value.
#[derive(Debug, Clone)]
pub struct CustomerChanges {
    company_name: Option<CompanyName>,
    contact_name: Option<ContactName>,
}

impl CustomerChanges {
    /// Returns `None` when there is nothing to change
    pub fn new(company_name: Option<CompanyName>, contact_name: Option<ContactName>) -> Option<Self> {
        if company_name.is_none() && contact_name.is_none() {
            return None;
        }
        Some(Self {
            company_name,
            contact_name,
        })
    }

    pub fn company_name(&self) -> Option<&CompanyName> {
        self.company_name.as_ref()
    }

    pub fn contact_name(&self) -> Option<&ContactName> {
        self.contact_name.as_ref()
    }
}
