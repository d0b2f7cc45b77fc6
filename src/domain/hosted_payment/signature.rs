//! Hosted order page signatures.
//!
//! Both directions use the same primitive: HMAC-SHA1 over the UTF-8 message,
//! keyed with the merchant's shared secret, encoded as standard base64.
//! What differs is the message:
//!
//! - Outbound requests sign a fixed concatenation of five fields
//!   (see [`request_signature_message`]).
//! - Inbound notifications sign whatever fields the gateway lists in
//!   `signedFields`, in that order.
//!
//! Everything here is a pure function; no state is kept between calls.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use subtle::ConstantTimeEq;

use super::fields::{FieldName, OutboundFieldSet};

type HmacSha1 = Hmac<Sha1>;

/// Fields concatenated, in this order, to form the request signature input.
///
/// This order is part of the contract with the gateway.
pub const REQUEST_SIGNATURE_FIELDS: [FieldName; 5] = [
    FieldName::MerchantId,
    FieldName::Amount,
    FieldName::Currency,
    FieldName::OrderPageTimestamp,
    FieldName::OrderPageTransactionType,
];

/// Computes the base64 HMAC-SHA1 of `message` keyed with `secret`.
pub fn sign(message: &str, secret: &str) -> String {
    let mut mac = HmacSha1::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key");
    mac.update(message.as_bytes());
    let encoded = STANDARD.encode(mac.finalize().into_bytes());
    encoded.trim_end_matches('\n').to_string()
}

/// Builds the outbound signature input from a field set.
///
/// Concatenates the values of [`REQUEST_SIGNATURE_FIELDS`] with no
/// separators. A field missing from the set contributes nothing.
pub fn request_signature_message(fields: &OutboundFieldSet) -> String {
    REQUEST_SIGNATURE_FIELDS
        .iter()
        .map(|name| fields.get(*name).unwrap_or_default())
        .collect()
}

/// Signs an outbound field set.
pub fn sign_request(fields: &OutboundFieldSet, secret: &str) -> String {
    sign(&request_signature_message(fields), secret)
}

/// Recomputes the signature of `message` and compares it with `supplied`.
///
/// The comparison is exact (case-sensitive) and constant-time.
pub fn verify_signature(message: &str, secret: &str, supplied: &str) -> bool {
    let expected = sign(message, secret);
    constant_time_compare(expected.as_bytes(), supplied.as_bytes())
}

/// Performs constant-time comparison of two byte slices.
///
/// Only the length check short-circuits; equal-length inputs take the same
/// time regardless of where they differ.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ══════════════════════════════════════════════════════════════
    // Known Vectors
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn sign_matches_rfc2202_vector() {
        // RFC 2202 test case 2, base64 of effcdf6ae5eb2fa2d27416d5f184df9c259a7c79
        assert_eq!(
            sign("what do ya want for nothing?", "Jefe"),
            "7/zfauXrL6LSdBbV8YTfnCWafHk="
        );
    }

    #[test]
    fn sign_empty_message() {
        assert_eq!(sign("", "k"), "OoSiGO5mZSCbtw6EUl3YN2RaGWU=");
    }

    #[test]
    fn sign_has_no_newlines() {
        let signature = sign(&"x".repeat(10_000), "key");
        assert!(!signature.contains('\n'));
        assert_eq!(signature.len(), 28);
    }

    // ══════════════════════════════════════════════════════════════
    // Request Signature Input
    // ══════════════════════════════════════════════════════════════

    fn request_fields() -> OutboundFieldSet {
        let mut fields = OutboundFieldSet::new();
        fields.insert(FieldName::MerchantId, "M1");
        fields.insert(FieldName::OrderPageTimestamp, "1700000000000");
        fields.insert(FieldName::OrderPageTransactionType, "authorization");
        fields.insert(FieldName::OrderPageVersion, "4");
        fields.insert(FieldName::OrderPageSerialNumber, "SN-1");
        fields.insert(FieldName::Amount, "19.50");
        fields.insert(FieldName::Currency, "USD");
        fields.insert(FieldName::OrderNumber, "42");
        fields
    }

    #[test]
    fn request_message_uses_fixed_field_order() {
        assert_eq!(
            request_signature_message(&request_fields()),
            "M119.50USD1700000000000authorization"
        );
    }

    #[test]
    fn request_message_ignores_other_fields() {
        let mut fields = request_fields();
        fields.insert(FieldName::BillToEmail, "someone@example.com");
        fields.insert(FieldName::OrderNumber, "43");

        assert_eq!(
            request_signature_message(&fields),
            "M119.50USD1700000000000authorization"
        );
    }

    #[test]
    fn request_message_skips_missing_fields() {
        let mut fields = OutboundFieldSet::new();
        fields.insert(FieldName::MerchantId, "M1");
        fields.insert(FieldName::Currency, "USD");

        assert_eq!(request_signature_message(&fields), "M1USD");
    }

    #[test]
    fn sign_request_signs_the_five_field_message() {
        assert_eq!(sign_request(&request_fields(), "k"), "ITo9moIfmPTj0ZhxfvRYbwOZ2Bk=");
        assert_eq!(
            sign_request(&request_fields(), "key"),
            "VeXuMBzY3qi5FikgvftmtuBlMrI="
        );
    }

    // ══════════════════════════════════════════════════════════════
    // Verification
    // ══════════════════════════════════════════════════════════════

    #[test]
    fn verify_accepts_matching_signature() {
        assert!(verify_signature("10042", "k", "nZSB1xe6Z24cd/CtC6JcEziUpk0="));
    }

    #[test]
    fn verify_rejects_other_secret() {
        assert!(!verify_signature("10042", "secret", "nZSB1xe6Z24cd/CtC6JcEziUpk0="));
        assert!(verify_signature("10042", "secret", "GTa0qsHD4UvZ0uQJ0E5kRNlK7WY="));
    }

    #[test]
    fn verify_is_case_sensitive() {
        assert!(!verify_signature("10042", "k", "NZSB1XE6Z24CD/CTC6JCEZIUPK0="));
    }

    #[test]
    fn verify_rejects_empty_and_truncated_signatures() {
        assert!(!verify_signature("10042", "k", ""));
        assert!(!verify_signature("10042", "k", "nZSB1xe6Z24cd/CtC6JcEziUpk0"));
    }

    #[test]
    fn constant_time_compare_behaves_like_equality() {
        assert!(constant_time_compare(b"abc", b"abc"));
        assert!(!constant_time_compare(b"abc", b"abd"));
        assert!(!constant_time_compare(b"abc", b"abcd"));
        assert!(constant_time_compare(b"", b""));
    }

    // ══════════════════════════════════════════════════════════════
    // Properties
    // ══════════════════════════════════════════════════════════════

    proptest! {
        #[test]
        fn sign_is_deterministic(message in ".*", secret in ".*") {
            prop_assert_eq!(sign(&message, &secret), sign(&message, &secret));
        }

        #[test]
        fn sign_changes_when_message_changes(message in ".*", secret in ".*", extra in any::<char>()) {
            let mut altered = message.clone();
            altered.push(extra);
            prop_assert_ne!(sign(&message, &secret), sign(&altered, &secret));
        }

        #[test]
        fn sign_changes_when_secret_changes(message in ".*", secret in "[a-z]{1,32}") {
            let mut altered = secret.clone();
            altered.push('x');
            prop_assert_ne!(sign(&message, &secret), sign(&message, &altered));
        }

        #[test]
        fn own_signature_always_verifies(message in ".*", secret in ".*") {
            let signature = sign(&message, &secret);
            prop_assert!(verify_signature(&message, &secret, &signature));
        }
    }
}
