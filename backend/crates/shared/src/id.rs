//! Common ID Types
//!
//! Type-safe wrappers around storage-assigned integer row ids.

use serde::{Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::num::ParseIntError;
use std::str::FromStr;

/// Generic typed ID wrapper over a row id
///
/// Usage:
/// ```
/// use kernel::id::CustomerId;
/// let id: CustomerId = "42".parse().unwrap();
/// assert_eq!(id.get(), 42);
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Wrap a row id assigned by storage
    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Get the underlying row id
    pub const fn get(&self) -> i64 {
        self.value
    }
}

// Manual impls: derives would require `T` itself to implement the traits.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Parses a decimal row id, as found in a URL path segment
///
/// Strict `i64` syntax: surrounding whitespace, fractions and trailing
/// garbage are rejected, so `" 7"`, `"1.0"` and `"7abc"` name no row.
impl<T> FromStr for Id<T> {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self::new)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Customer IDs
    pub struct Customer;
}

/// Type aliases for common IDs
pub type CustomerId = Id<markers::Customer>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_from_path_segment() {
        let id: CustomerId = "17".parse().unwrap();
        assert_eq!(id.get(), 17);
        assert_eq!(id.to_string(), "17");
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!("abc".parse::<CustomerId>().is_err());
        assert!("".parse::<CustomerId>().is_err());
        assert!("1.5".parse::<CustomerId>().is_err());
        assert!("99999999999999999999".parse::<CustomerId>().is_err());
    }

    #[test]
    fn test_parse_is_strict_decimal() {
        assert!(" 7".parse::<CustomerId>().is_err());
        assert!("7 ".parse::<CustomerId>().is_err());
        assert!("1.0".parse::<CustomerId>().is_err());
        assert!("7abc".parse::<CustomerId>().is_err());
        assert!("0x10".parse::<CustomerId>().is_err());
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        let id = CustomerId::new(5);
        assert_eq!(serde_json::to_string(&id).unwrap(), "5");
    }
}
