//! Inbound gateway notifications (IPN) and their signature verification.

use std::collections::HashMap;
use std::fmt;

use super::signature::verify_signature;

/// Notification field carrying the gateway's decision code.
pub const REASON_CODE: &str = "reasonCode";

/// Notification field carrying the merchant order reference.
pub const ORDER_NUMBER: &str = "orderNumber";

/// Notification field carrying the base64 signature.
pub const TRANSACTION_SIGNATURE: &str = "transactionSignature";

/// Notification field listing, comma-separated, the fields that were signed.
pub const SIGNED_FIELDS: &str = "signedFields";

/// Reason code the gateway sends for an approved transaction.
pub const APPROVED_REASON_CODE: &str = "100";

/// Name/value pairs posted by the gateway, in arrival order.
///
/// A name posted more than once is stored once, its values joined with `,`.
/// Lookups and appends are constant time; the body comes from an
/// unauthenticated caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InboundNotification {
    fields: Vec<(String, String)>,
    /// Position of each name in `fields`.
    index: HashMap<String, usize>,
}

impl InboundNotification {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a notification from raw form pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut notification = Self::new();
        for (name, value) in pairs {
            notification.append(name, value);
        }
        notification
    }

    /// Adds a value, joining it to an existing value of the same name.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.index.get(&name) {
            Some(&position) => {
                let slot = &mut self.fields[position].1;
                slot.push(',');
                slot.push_str(&value);
            }
            None => {
                self.index.insert(name.clone(), self.fields.len());
                self.fields.push((name, value));
            }
        }
    }

    /// Returns the value of a field, if present. Names are case-sensitive.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.index
            .get(name)
            .map(|&position| self.fields[position].1.as_str())
    }

    pub fn reason_code(&self) -> Option<&str> {
        self.get(REASON_CODE)
    }

    pub fn order_number(&self) -> Option<&str> {
        self.get(ORDER_NUMBER)
    }

    pub fn transaction_signature(&self) -> Option<&str> {
        self.get(TRANSACTION_SIGNATURE)
    }

    /// Names listed in `signedFields`, in order. Empty when absent.
    pub fn signed_field_names(&self) -> Vec<&str> {
        match self.get(SIGNED_FIELDS) {
            Some(list) if !list.is_empty() => list.split(',').collect(),
            _ => Vec::new(),
        }
    }

    /// Returns true when `signedFields` names `field`.
    pub fn is_signed(&self, field: &str) -> bool {
        self.signed_field_names().contains(&field)
    }

    /// Concatenates the values of the signed fields in listed order.
    ///
    /// A listed field that was not posted contributes nothing.
    pub fn signed_message(&self) -> String {
        self.signed_field_names()
            .into_iter()
            .map(|name| self.get(name).unwrap_or_default())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Why a notification failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSignature {
    /// `transactionSignature` absent or empty.
    MissingSignature,
    /// `signedFields` absent or empty.
    MissingSignedFields,
    /// Recomputed signature differs from the supplied one.
    Mismatch,
}

impl InvalidSignature {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidSignature::MissingSignature => "missing_signature",
            InvalidSignature::MissingSignedFields => "missing_signed_fields",
            InvalidSignature::Mismatch => "mismatch",
        }
    }
}

impl fmt::Display for InvalidSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of verifying a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Verified,
    Invalid(InvalidSignature),
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Verification::Verified)
    }
}

/// Verifies a notification against the merchant's shared secret.
///
/// Fails closed: anything short of an exact signature match is `Invalid`.
pub fn verify(notification: &InboundNotification, secret: &str) -> Verification {
    let supplied = match notification.transaction_signature() {
        Some(signature) if !signature.is_empty() => signature,
        _ => return Verification::Invalid(InvalidSignature::MissingSignature),
    };

    if notification.signed_field_names().is_empty() {
        return Verification::Invalid(InvalidSignature::MissingSignedFields);
    }

    if verify_signature(&notification.signed_message(), secret, supplied) {
        Verification::Verified
    } else {
        Verification::Invalid(InvalidSignature::Mismatch)
    }
}
