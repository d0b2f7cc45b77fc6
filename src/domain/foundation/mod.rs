//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, money helpers, and error types
//! used by the order and hosted payment modules.

mod errors;
mod ids;
mod money;
mod state_machine;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AddressId, CountryId, CurrencyId, OrderId, ParseOrderIdError, StateProvinceId};
pub use money::format_two_decimals;
pub use state_machine::StateMachine;
pub use timestamp::Timestamp;
