//! API DTOs (Data Transfer Objects)

use crate::domain::entities::Customer;
use kernel::id::CustomerId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body for POST and PUT
///
/// `name` is the contact person, `company` the company name.
/// Missing fields and `null` both decode to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl CustomerPayload {
    /// Decode a request body.
    ///
    /// Fields are read by name only: an array or a scalar carries no named
    /// fields and decodes to an empty payload, left to field validation.
    /// `null` and invalid JSON are decoding errors.
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        match serde_json::from_slice::<Value>(body)? {
            value @ Value::Object(_) => serde_json::from_value(value),
            Value::Null => Err(serde::de::Error::custom("request body is null")),
            _ => Ok(Self::default()),
        }
    }
}

/// A customer row as returned by GET, keyed by its column names
#[derive(Debug, Clone, Serialize)]
pub struct CustomerResponse {
    pub id: CustomerId,
    #[serde(rename = "CompanyName")]
    pub company_name: String,
    #[serde(rename = "ContactName")]
    pub contact_name: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            company_name: customer.company_name,
            contact_name: customer.contact_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_fields_by_name() {
        let payload = CustomerPayload::from_json(br#"{"company":"Acme","name":"Alice"}"#).unwrap();
        assert_eq!(payload.name.as_deref(), Some("Alice"));
        assert_eq!(payload.company.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_array_is_not_decoded_positionally() {
        let payload = CustomerPayload::from_json(br#"["Alice","Acme"]"#).unwrap();
        assert!(payload.name.is_none());
        assert!(payload.company.is_none());
    }

    #[test]
    fn test_scalars_have_no_fields() {
        for body in ["42", r#""Alice""#, "true"] {
            let payload = CustomerPayload::from_json(body.as_bytes()).unwrap();
            assert!(payload.name.is_none() && payload.company.is_none());
        }
    }

    #[test]
    fn test_null_and_invalid_json_are_errors() {
        assert!(CustomerPayload::from_json(b"null").is_err());
        assert!(CustomerPayload::from_json(b"{").is_err());
        assert!(CustomerPayload::from_json(br#"{"name":1}"#).is_err());
    }
}
