//! Outbound field vocabulary and the ordered field set posted to the gateway.

use std::fmt;

/// Names of the fields the hosted order page accepts.
///
/// Rendered with [`FieldName::as_str`] to the exact wire spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    MerchantId,
    OrderPageTimestamp,
    OrderPageTransactionType,
    OrderPageVersion,
    OrderPageSerialNumber,
    Amount,
    Currency,
    OrderNumber,
    BillToFirstName,
    BillToLastName,
    BillToStreet1,
    BillToCountry,
    BillToState,
    BillToCity,
    BillToPostalCode,
    BillToPhoneNumber,
    BillToEmail,
    ShipToFirstName,
    ShipToLastName,
    ShipToStreet1,
    ShipToCountry,
    ShipToState,
    ShipToCity,
    ShipToPostalCode,
    OrderPageReceiptResponseUrl,
    OrderPageReceiptLinkText,
    OrderPageSignaturePublic,
}

impl FieldName {
    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::MerchantId => "merchantID",
            FieldName::OrderPageTimestamp => "orderPage_timestamp",
            FieldName::OrderPageTransactionType => "orderPage_transactionType",
            FieldName::OrderPageVersion => "orderPage_version",
            FieldName::OrderPageSerialNumber => "orderPage_serialNumber",
            FieldName::Amount => "amount",
            FieldName::Currency => "currency",
            FieldName::OrderNumber => "orderNumber",
            FieldName::BillToFirstName => "billTo_firstName",
            FieldName::BillToLastName => "billTo_lastName",
            FieldName::BillToStreet1 => "billTo_street1",
            FieldName::BillToCountry => "billTo_country",
            FieldName::BillToState => "billTo_state",
            FieldName::BillToCity => "billTo_city",
            FieldName::BillToPostalCode => "billTo_postalCode",
            FieldName::BillToPhoneNumber => "billTo_phoneNumber",
            FieldName::BillToEmail => "billTo_email",
            FieldName::ShipToFirstName => "shipTo_firstName",
            FieldName::ShipToLastName => "shipTo_lastName",
            FieldName::ShipToStreet1 => "shipTo_street1",
            FieldName::ShipToCountry => "shipTo_country",
            FieldName::ShipToState => "shipTo_state",
            FieldName::ShipToCity => "shipTo_city",
            FieldName::ShipToPostalCode => "shipTo_postalCode",
            FieldName::OrderPageReceiptResponseUrl => "orderPage_receiptResponseURL",
            FieldName::OrderPageReceiptLinkText => "orderPage_receiptLinkText",
            FieldName::OrderPageSignaturePublic => "orderPage_signaturePublic",
        }
    }

    /// Returns true for the `shipTo_*` family.
    pub fn is_ship_to(&self) -> bool {
        self.as_str().starts_with("shipTo_")
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered set of outbound fields.
///
/// Insertion order is kept and is the order the fields are posted in.
/// Inserting a name twice replaces the value at its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutboundFieldSet {
    fields: Vec<(FieldName, String)>,
}

impl OutboundFieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field, or replaces the value of an existing one in place.
    pub fn insert(&mut self, name: FieldName, value: impl Into<String>) {
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    /// Returns the value of a field, if present.
    pub fn get(&self, name: FieldName) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: FieldName) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.fields.iter().map(|(n, v)| (*n, v.as_str()))
    }

    /// Field names in insertion order.
    pub fn names(&self) -> Vec<FieldName> {
        self.fields.iter().map(|(n, _)| *n).collect()
    }

    /// Wire-named pairs in insertion order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.fields
            .iter()
            .map(|(n, v)| (n.as_str(), v.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_insertion_order() {
        let mut fields = OutboundFieldSet::new();
        fields.insert(FieldName::MerchantId, "M1");
        fields.insert(FieldName::Amount, "19.50");
        fields.insert(FieldName::Currency, "USD");

        assert_eq!(
            fields.names(),
            vec![FieldName::MerchantId, FieldName::Amount, FieldName::Currency]
        );
    }

    #[test]
    fn insert_existing_name_replaces_in_place() {
        let mut fields = OutboundFieldSet::new();
        fields.insert(FieldName::MerchantId, "M1");
        fields.insert(FieldName::Amount, "1.00");
        fields.insert(FieldName::MerchantId, "M2");

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get(FieldName::MerchantId), Some("M2"));
        assert_eq!(fields.names()[0], FieldName::MerchantId);
    }

    #[test]
    fn get_missing_field_is_none() {
        let fields = OutboundFieldSet::new();
        assert!(fields.is_empty());
        assert_eq!(fields.get(FieldName::Currency), None);
        assert!(!fields.contains(FieldName::Currency));
    }

    #[test]
    fn to_pairs_uses_wire_names() {
        let mut fields = OutboundFieldSet::new();
        fields.insert(FieldName::OrderPageReceiptResponseUrl, "http://shop.test/checkout/completed");

        assert_eq!(
            fields.to_pairs(),
            vec![(
                "orderPage_receiptResponseURL",
                "http://shop.test/checkout/completed".to_string()
            )]
        );
    }

    #[test]
    fn ship_to_family_is_recognised() {
        assert!(FieldName::ShipToCountry.is_ship_to());
        assert!(!FieldName::BillToCountry.is_ship_to());
        assert_eq!(FieldName::MerchantId.to_string(), "merchantID");
    }
}
