//! CyberSource hosted order page integration.
//!
//! Builds signed checkout redirects to the gateway's hosted order page and
//! verifies the payment notifications it posts back, authorizing orders
//! whose notifications carry a valid signature and an approval.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
