use super::crc::crc16_hex;
use super::text::{
    DEFAULT_MERCHANT_CITY, DEFAULT_REFERENCE_LABEL, normalize_merchant_city,
    normalize_merchant_name, normalize_reference_label,
};
use super::tlv::emv_field;
use crate::error::{PixError, Result};
use rust_decimal::{Decimal, RoundingStrategy};

pub const PAYLOAD_FORMAT_INDICATOR: &str = "01";
/// Point of initiation "12": static QR carrying a fixed amount.
pub const POINT_OF_INITIATION: &str = "12";
pub const PIX_GUI: &str = "BR.GOV.BCB.PIX";
pub const MERCHANT_CATEGORY_CODE: &str = "0000";
/// ISO 4217 numeric code for BRL.
pub const CURRENCY_BRL: &str = "986";
pub const COUNTRY_CODE: &str = "BR";
/// Tag 63 with length 04, prefixed before the checksum is computed.
pub const CRC_FIELD_PREFIX: &str = "6304";

pub mod tags {
    pub const PAYLOAD_FORMAT: &str = "00";
    pub const POINT_OF_INITIATION: &str = "01";
    pub const MERCHANT_ACCOUNT: &str = "26";
    pub const MERCHANT_CATEGORY: &str = "52";
    pub const CURRENCY: &str = "53";
    pub const AMOUNT: &str = "54";
    pub const COUNTRY: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const ADDITIONAL_DATA: &str = "62";
    pub const CRC: &str = "63";

    pub const GUI: &str = "00";
    pub const PIX_KEY: &str = "01";
    pub const REFERENCE_LABEL: &str = "05";
}

/// Longest value tag 54 may carry.
pub const MAX_AMOUNT_LEN: usize = 13;

/// Rounds half away from zero to two decimal places.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Formats an amount in reais with exactly two decimals and a dot separator.
///
/// Fails when the rounded value cannot be written with two decimals in at
/// most [`MAX_AMOUNT_LEN`] characters.
pub fn format_amount(amount: Decimal) -> Result<String> {
    let mut rounded = round_amount(amount);
    // rescale leaves the value untouched when the mantissa would overflow
    rounded.rescale(2);
    let text = rounded.to_string();
    if rounded.scale() != 2 || text.len() > MAX_AMOUNT_LEN {
        return Err(PixError::ValidationError(format!(
            "amount does not fit the {MAX_AMOUNT_LEN}-character EMV limit"
        )));
    }
    Ok(text)
}

/// Everything needed to render one static PIX charge.
///
/// The PIX key is carried verbatim; display fields are normalized when the
/// payload is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct PixCharge {
    pub pix_key: String,
    pub amount: Decimal,
    pub merchant_name: String,
    pub merchant_city: String,
    pub reference_label: String,
}

impl PixCharge {
    pub fn new(
        pix_key: impl Into<String>,
        amount: Decimal,
        merchant_name: impl Into<String>,
    ) -> Self {
        Self {
            pix_key: pix_key.into(),
            amount,
            merchant_name: merchant_name.into(),
            merchant_city: DEFAULT_MERCHANT_CITY.to_string(),
            reference_label: DEFAULT_REFERENCE_LABEL.to_string(),
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.merchant_city = city.into();
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference_label = reference.into();
        self
    }

    /// Renders the "copia e cola" payload, checksum included.
    pub fn to_payload(&self) -> Result<String> {
        let merchant_account = emv_field(
            tags::MERCHANT_ACCOUNT,
            &(emv_field(tags::GUI, PIX_GUI)? + &emv_field(tags::PIX_KEY, &self.pix_key)?),
        )?;
        let additional_data = emv_field(
            tags::ADDITIONAL_DATA,
            &emv_field(
                tags::REFERENCE_LABEL,
                &normalize_reference_label(&self.reference_label),
            )?,
        )?;

        let mut payload = String::with_capacity(160);
        payload.push_str(&emv_field(tags::PAYLOAD_FORMAT, PAYLOAD_FORMAT_INDICATOR)?);
        payload.push_str(&emv_field(tags::POINT_OF_INITIATION, POINT_OF_INITIATION)?);
        payload.push_str(&merchant_account);
        payload.push_str(&emv_field(tags::MERCHANT_CATEGORY, MERCHANT_CATEGORY_CODE)?);
        payload.push_str(&emv_field(tags::CURRENCY, CURRENCY_BRL)?);
        payload.push_str(&emv_field(tags::AMOUNT, &format_amount(self.amount)?)?);
        payload.push_str(&emv_field(tags::COUNTRY, COUNTRY_CODE)?);
        payload.push_str(&emv_field(
            tags::MERCHANT_NAME,
            &normalize_merchant_name(&self.merchant_name),
        )?);
        payload.push_str(&emv_field(
            tags::MERCHANT_CITY,
            &normalize_merchant_city(&self.merchant_city),
        )?);
        payload.push_str(&additional_data);
        payload.push_str(CRC_FIELD_PREFIX);

        let crc = crc16_hex(&payload);
        payload.push_str(&crc);
        Ok(payload)
    }
}

/// Builds a static PIX payload with the default city and reference label.
pub fn build_pix_payload(pix_key: &str, amount: Decimal, store_name: &str) -> Result<String> {
    PixCharge::new(pix_key, amount, store_name).to_payload()
}
