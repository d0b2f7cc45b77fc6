//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;
mod payment_method;
mod settings;

pub use handlers::{
    BuildRedirectHandler, BuildRedirectQuery, HandleIpnCommand, HandleIpnHandler,
    HandleIpnResult, IpnRejection,
};
pub use payment_method::CyberSourcePaymentMethod;
pub use settings::PaymentSettings;
