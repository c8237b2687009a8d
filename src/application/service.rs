use crate::config::PixSettings;
use crate::domain::amount::Amount;
use crate::domain::pix::PixCharge;
use crate::domain::ports::MerchantStoreBox;
use crate::error::{PixError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A request to charge `amount` on behalf of an organization.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct PixRequest {
    pub organization_id: String,
    pub amount: Option<Decimal>,
}

impl PixRequest {
    pub fn new(organization_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            organization_id: organization_id.into(),
            amount: Some(amount),
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct PixResponse {
    pub payload: String,
}

/// JSON error shape returned to API callers, e.g. `{"error":"pix_key_not_configured"}`.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct ErrorBody {
    pub error: String,
}

impl From<&PixError> for ErrorBody {
    fn from(err: &PixError) -> Self {
        Self {
            error: err.error_code().to_string(),
        }
    }
}

/// Generates PIX payloads for merchants held in a [`MerchantStore`].
///
/// [`MerchantStore`]: crate::domain::ports::MerchantStore
pub struct PixService {
    merchants: MerchantStoreBox,
    settings: PixSettings,
}

impl PixService {
    pub fn new(merchants: MerchantStoreBox, settings: PixSettings) -> Self {
        Self {
            merchants,
            settings,
        }
    }

    /// Validates the request, looks up the merchant and renders its payload.
    ///
    /// # Errors
    ///
    /// * `ValidationError` if the organization id is blank or the amount is
    ///   missing or not positive once rounded to centavos.
    /// * `PixKeyNotConfigured` if the organization is unknown or has no key.
    pub async fn generate(&self, request: &PixRequest) -> Result<PixResponse> {
        let organization_id = request.organization_id.trim();
        let amount = match request.amount.map(Amount::new) {
            Some(Ok(amount)) if !organization_id.is_empty() => amount,
            _ => {
                return Err(PixError::ValidationError(
                    "organization_id and positive amount are required".to_string(),
                ));
            }
        };

        let merchant = self.merchants.get(organization_id).await?;
        let Some((merchant, pix_key)) = merchant
            .as_ref()
            .and_then(|m| m.pix_key().map(|key| (m, key)))
        else {
            debug!(organization_id, "no PIX key configured");
            return Err(PixError::PixKeyNotConfigured(organization_id.to_string()));
        };

        let city = merchant
            .city()
            .unwrap_or(self.settings.merchant_city.as_str());
        let payload = PixCharge::new(pix_key, amount.value(), merchant.name.as_str())
            .with_city(city)
            .with_reference(self.settings.reference_label.as_str())
            .to_payload()?;

        info!(organization_id, amount = %amount.value(), "generated PIX payload");
        Ok(PixResponse { payload })
    }
}
