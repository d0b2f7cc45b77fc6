//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod payment;

pub use payment::{
    BuildRedirectHandler, BuildRedirectQuery, HandleIpnCommand, HandleIpnHandler,
    HandleIpnResult, IpnRejection,
};
