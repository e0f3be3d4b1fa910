//! Payment vendors that notify this service.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A payment vendor with its own webhook envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentVendor {
    /// Pagar.me - orders API with Pix, also used for order creation.
    Pagarme,

    /// Kiwify - hosted checkout, webhook only.
    Kiwify,
}

impl PaymentVendor {
    /// Returns the identifier stored in the `payments.provider` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentVendor::Pagarme => "pagarme",
            PaymentVendor::Kiwify => "kiwify",
        }
    }
}

impl fmt::Display for PaymentVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentVendor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pagarme" => Ok(PaymentVendor::Pagarme),
            "kiwify" => Ok(PaymentVendor::Kiwify),
            other => Err(format!("Unknown payment vendor: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vendor_round_trips_through_str() {
        for vendor in [PaymentVendor::Pagarme, PaymentVendor::Kiwify] {
            assert_eq!(vendor.as_str().parse::<PaymentVendor>().unwrap(), vendor);
        }
    }

    #[test]
    fn vendor_parse_is_case_insensitive() {
        assert_eq!("Kiwify".parse::<PaymentVendor>().unwrap(), PaymentVendor::Kiwify);
    }

    #[test]
    fn unknown_vendor_is_rejected() {
        assert!("stripe".parse::<PaymentVendor>().is_err());
    }
}
