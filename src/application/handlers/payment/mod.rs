//! Hosted order page payment handlers.
//!
//! ## Commands
//! - Handling gateway payment notifications (IPN)
//!
//! ## Queries
//! - Building the signed redirect form for a placed order

mod build_redirect;
mod handle_ipn;

// Commands
pub use handle_ipn::{HandleIpnCommand, HandleIpnHandler, HandleIpnResult, IpnRejection};

// Queries
pub use build_redirect::{BuildRedirectHandler, BuildRedirectQuery};
