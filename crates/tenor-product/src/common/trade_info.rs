//! Trade-level metadata.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use tenor_core::types::Date;

/// Additional information attached to a trade.
///
/// This is an opaque bag of record-keeping fields: the model never reads
/// it during resolution and carries it through to the resolved trade
/// unchanged. Defaults to an empty instance when omitted.
///
/// # Example
///
/// ```rust
/// use tenor_core::types::Date;
/// use tenor_product::common::TradeInfo;
///
/// let info = TradeInfo::empty()
///     .with_trade_date(Date::from_ymd(2024, 5, 28).unwrap())
///     .with_counterparty("Dealer A");
/// assert_eq!(info.counterparty(), Some("Dealer A"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TradeInfo {
    /// Trade identifier assigned by the booking system.
    id: Option<String>,
    /// Date the trade was agreed.
    trade_date: Option<Date>,
    /// Counterparty name or identifier.
    counterparty: Option<String>,
    /// Free-form key/value attributes.
    attributes: BTreeMap<String, String>,
}

impl TradeInfo {
    /// Creates an empty instance with no metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy with the trade identifier set.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Returns a copy with the trade date set.
    #[must_use]
    pub fn with_trade_date(mut self, trade_date: Date) -> Self {
        self.trade_date = Some(trade_date);
        self
    }

    /// Returns a copy with the counterparty set.
    #[must_use]
    pub fn with_counterparty(mut self, counterparty: impl Into<String>) -> Self {
        self.counterparty = Some(counterparty.into());
        self
    }

    /// Returns a copy with an attribute added.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Returns the trade identifier, if set.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Returns the trade date, if set.
    #[must_use]
    pub fn trade_date(&self) -> Option<Date> {
        self.trade_date
    }

    /// Returns the counterparty, if set.
    #[must_use]
    pub fn counterparty(&self) -> Option<&str> {
        self.counterparty.as_deref()
    }

    /// Returns an attribute value by key.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Checks whether any metadata is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.trade_date.is_none()
            && self.counterparty.is_none()
            && self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let info = TradeInfo::empty();
        assert!(info.is_empty());
        assert_eq!(info, TradeInfo::default());
    }

    #[test]
    fn test_with_fields() {
        let info = TradeInfo::empty()
            .with_id("T-0001")
            .with_trade_date(Date::from_ymd(2024, 5, 28).unwrap())
            .with_attribute("desk", "rates");

        assert!(!info.is_empty());
        assert_eq!(info.id(), Some("T-0001"));
        assert_eq!(info.attribute("desk"), Some("rates"));
        assert_eq!(info.attribute("missing"), None);
    }

    #[test]
    fn test_value_equality() {
        let a = TradeInfo::empty().with_counterparty("Dealer A");
        let b = TradeInfo::empty().with_counterparty("Dealer A");
        assert_eq!(a, b);
    }
}
