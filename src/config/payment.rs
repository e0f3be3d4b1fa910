//! Payment configuration (Pagar.me orders, webhook token)

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest Pix expiry the vendor accepts.
const MAX_PIX_EXPIRES_IN_SECS: u32 = 30 * 24 * 60 * 60;

/// Payment configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentConfig {
    /// Pagar.me secret key (sk_...)
    pub pagarme_secret_key: SecretString,

    /// Pagar.me API host
    #[serde(default = "default_api_base_url")]
    pub pagarme_api_base_url: String,

    /// Monthly fee in cents, used when an order has no explicit amount
    #[serde(default = "default_monthly_fee")]
    pub monthly_fee_cents: i64,

    /// Seconds until a Pix QR code expires
    #[serde(default = "default_pix_expires_in")]
    pub pix_expires_in_secs: u32,

    /// Line item description on created orders
    #[serde(default = "default_order_description")]
    pub order_description: String,

    /// Timeout for calls to the vendor API, in seconds
    #[serde(default = "default_vendor_timeout")]
    pub vendor_timeout_secs: u64,

    /// Shared token webhooks must send as `?token=`. Unset leaves them open.
    pub webhook_token: Option<SecretString>,
}

impl PaymentConfig {
    /// Check if using a Pagar.me test key
    pub fn is_test_mode(&self) -> bool {
        self.pagarme_secret_key.expose_secret().starts_with("sk_test_")
    }

    pub fn vendor_timeout(&self) -> Duration {
        Duration::from_secs(self.vendor_timeout_secs)
    }

    /// Validate payment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let key = self.pagarme_secret_key.expose_secret();
        if key.is_empty() {
            return Err(ValidationError::MissingRequired("PAYMENT__PAGARME_SECRET_KEY"));
        }
        if !key.starts_with("sk_") {
            return Err(ValidationError::InvalidPagarmeKey);
        }
        if !self.pagarme_api_base_url.starts_with("https://")
            && !self.pagarme_api_base_url.starts_with("http://")
        {
            return Err(ValidationError::InvalidApiBaseUrl);
        }
        if self.monthly_fee_cents <= 0 {
            return Err(ValidationError::InvalidMonthlyFee);
        }
        if self.pix_expires_in_secs == 0 || self.pix_expires_in_secs > MAX_PIX_EXPIRES_IN_SECS {
            return Err(ValidationError::InvalidPixExpiry);
        }
        if self.vendor_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        if let Some(token) = &self.webhook_token {
            if token.expose_secret().trim().is_empty() {
                return Err(ValidationError::EmptyWebhookToken);
            }
        }
        Ok(())
    }
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            pagarme_secret_key: SecretString::new(String::new()),
            pagarme_api_base_url: default_api_base_url(),
            monthly_fee_cents: default_monthly_fee(),
            pix_expires_in_secs: default_pix_expires_in(),
            order_description: default_order_description(),
            vendor_timeout_secs: default_vendor_timeout(),
            webhook_token: None,
        }
    }
}

fn default_api_base_url() -> String {
    "https://api.pagar.me".to_string()
}

fn default_monthly_fee() -> i64 {
    9990
}

fn default_pix_expires_in() -> u32 {
    3600
}

fn default_order_description() -> String {
    "Mensalidade do sistema escolar".to_string()
}

fn default_vendor_timeout() -> u64 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string())
    }

    fn valid() -> PaymentConfig {
        PaymentConfig {
            pagarme_secret_key: secret("sk_test_abcd1234"),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = PaymentConfig::default();
        assert_eq!(config.monthly_fee_cents, 9990);
        assert_eq!(config.pix_expires_in_secs, 3600);
        assert_eq!(config.pagarme_api_base_url, "https://api.pagar.me");
        assert!(config.webhook_token.is_none());
    }

    #[test]
    fn test_is_test_mode() {
        assert!(valid().is_test_mode());
        let live = PaymentConfig {
            pagarme_secret_key: secret("sk_live_xxx"),
            ..Default::default()
        };
        assert!(!live.is_test_mode());
    }

    #[test]
    fn test_validation_missing_secret_key() {
        assert!(matches!(
            PaymentConfig::default().validate(),
            Err(ValidationError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_validation_invalid_key_prefix() {
        let config = PaymentConfig {
            pagarme_secret_key: secret("pk_test_xxx"),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPagarmeKey)));
    }

    #[test]
    fn test_validation_non_positive_fee() {
        let config = PaymentConfig {
            monthly_fee_cents: 0,
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidMonthlyFee)));
    }

    #[test]
    fn test_validation_pix_expiry_bounds() {
        let zero = PaymentConfig {
            pix_expires_in_secs: 0,
            ..valid()
        };
        assert!(zero.validate().is_err());

        let too_long = PaymentConfig {
            pix_expires_in_secs: MAX_PIX_EXPIRES_IN_SECS + 1,
            ..valid()
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_validation_blank_webhook_token() {
        let config = PaymentConfig {
            webhook_token: Some(secret("  ")),
            ..valid()
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyWebhookToken)));
    }

    #[test]
    fn test_validation_valid_config() {
        let config = PaymentConfig {
            webhook_token: Some(secret("hook-token")),
            ..valid()
        };
        assert!(config.validate().is_ok());
    }
}
