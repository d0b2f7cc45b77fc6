//! Strongly-typed identifier value objects.
//!
//! Store entities are keyed by positive integers. A value of zero or below
//! never names an entity, so construction from raw integers goes through
//! [`OrderId::new`] and friends, which reject it.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use super::ValidationError;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates an identifier, rejecting zero and negative values.
            pub fn new(value: i32) -> Result<Self, ValidationError> {
                if value <= 0 {
                    return Err(ValidationError::out_of_range($field, 1, i32::MAX, value));
                }
                Ok(Self(value))
            }

            /// Returns the raw integer value.
            pub fn value(&self) -> i32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = ValidationError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

entity_id!(
    /// Identifier of a store order. Sent to the gateway as `orderNumber`.
    OrderId,
    "order_id"
);

entity_id!(
    /// Identifier of a customer address.
    AddressId,
    "address_id"
);

entity_id!(
    /// Identifier of a country in the store directory.
    CountryId,
    "country_id"
);

entity_id!(
    /// Identifier of a state or province in the store directory.
    StateProvinceId,
    "state_province_id"
);

entity_id!(
    /// Identifier of a store currency.
    CurrencyId,
    "currency_id"
);

/// Error returned when an order number cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseOrderIdError {
    #[error("order number is not an integer: {0}")]
    NotAnInteger(#[from] ParseIntError),

    #[error("order number is out of range: {0}")]
    OutOfRange(#[from] ValidationError),
}

impl FromStr for OrderId {
    type Err = ParseOrderIdError;

    /// Parses a decimal order number, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i32 = s.trim().parse()?;
        Ok(Self::new(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_rejects_zero_and_negative() {
        assert!(OrderId::new(0).is_err());
        assert!(OrderId::new(-5).is_err());
        assert_eq!(OrderId::new(42).unwrap().value(), 42);
    }

    #[test]
    fn order_id_parses_decimal_string() {
        let id: OrderId = "42".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn order_id_parse_ignores_surrounding_whitespace() {
        let id: OrderId = " 42\n".parse().unwrap();
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn order_id_parse_rejects_non_integers() {
        assert!(matches!(
            "42abc".parse::<OrderId>(),
            Err(ParseOrderIdError::NotAnInteger(_))
        ));
        assert!("".parse::<OrderId>().is_err());
        assert!("4.2".parse::<OrderId>().is_err());
        assert!("99999999999".parse::<OrderId>().is_err());
    }

    #[test]
    fn order_id_parse_rejects_zero() {
        assert!(matches!(
            "0".parse::<OrderId>(),
            Err(ParseOrderIdError::OutOfRange(_))
        ));
    }

    #[test]
    fn order_id_displays_as_decimal() {
        assert_eq!(OrderId::new(1007).unwrap().to_string(), "1007");
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = CurrencyId::new(3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}
