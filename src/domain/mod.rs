//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, money, errors)
//! - `order` - Store orders, addresses and directory entities
//! - `hosted_payment` - Hosted order page signing, notification verification, re-post rule

pub mod foundation;
pub mod hosted_payment;
pub mod order;
