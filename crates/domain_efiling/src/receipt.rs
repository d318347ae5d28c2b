//! Synthetic receipt numbers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use core_kernel::CaseId;

/// Service-center prefix used on generated receipt numbers
const RECEIPT_PREFIX: &str = "MSC";

/// Modulus keeping the numeric part at exactly ten digits
const RECEIPT_MODULUS: u64 = 10_000_000_000;

/// A synthetic USCIS-style receipt number
///
/// Format: `MSC` followed by the ten least-significant digits of the
/// generation instant in Unix-epoch milliseconds, zero-padded. Two
/// generations within the same millisecond collide; the simulation accepts
/// that window rather than tracking issued numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptNumber(String);

impl ReceiptNumber {
    /// Generates a receipt number from the current wall clock
    pub fn generate() -> Self {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;
        Self::from_epoch_millis(millis)
    }

    /// Builds the receipt number for a given epoch-millisecond instant
    pub fn from_epoch_millis(millis: u64) -> Self {
        Self(format!(
            "{}{:010}",
            RECEIPT_PREFIX,
            millis % RECEIPT_MODULUS
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Storage path of the fabricated confirmation PDF
    pub fn confirmation_url(&self, case_id: CaseId) -> String {
        format!(
            "uscis_receipts/{}/confirmation_{}.pdf",
            case_id.as_uuid(),
            self.0
        )
    }
}

impl fmt::Display for ReceiptNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_has_prefix_and_ten_digits() {
        let receipt = ReceiptNumber::generate();
        let s = receipt.as_str();
        assert!(s.starts_with("MSC"));
        assert_eq!(s.len(), 13);
        assert!(s[3..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_from_epoch_millis_takes_last_ten_digits() {
        let receipt = ReceiptNumber::from_epoch_millis(1_712_345_678_901);
        assert_eq!(receipt.as_str(), "MSC2345678901");
    }

    #[test]
    fn test_small_timestamps_are_zero_padded() {
        let receipt = ReceiptNumber::from_epoch_millis(42);
        assert_eq!(receipt.as_str(), "MSC0000000042");
    }

    #[test]
    fn test_same_millisecond_collides() {
        let a = ReceiptNumber::from_epoch_millis(1_700_000_000_000);
        let b = ReceiptNumber::from_epoch_millis(1_700_000_000_000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_confirmation_url_uses_raw_uuid() {
        let case_id = CaseId::new();
        let receipt = ReceiptNumber::from_epoch_millis(1_712_345_678_901);
        let url = receipt.confirmation_url(case_id);

        assert_eq!(
            url,
            format!(
                "uscis_receipts/{}/confirmation_MSC2345678901.pdf",
                case_id.as_uuid()
            )
        );
        // Display prefix must never leak into the storage path
        assert!(!url.contains("CASE-"));
    }

    #[test]
    fn test_serde_is_transparent() {
        let receipt = ReceiptNumber::from_epoch_millis(42);
        let json = serde_json::to_string(&receipt).unwrap();
        assert_eq!(json, "\"MSC0000000042\"");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn format_holds_for_any_timestamp(millis in any::<u64>()) {
            let receipt = ReceiptNumber::from_epoch_millis(millis);
            let s = receipt.as_str();
            prop_assert!(s.starts_with("MSC"));
            prop_assert_eq!(s.len(), 13);
            prop_assert!(s[3..].chars().all(|c| c.is_ascii_digit()));
        }

        #[test]
        fn numeric_part_is_millis_mod_ten_digits(millis in any::<u64>()) {
            let receipt = ReceiptNumber::from_epoch_millis(millis);
            let numeric: u64 = receipt.as_str()[3..].parse().unwrap();
            prop_assert_eq!(numeric, millis % 10_000_000_000);
        }
    }
}
