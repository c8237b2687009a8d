use super::crc::crc16_hex;
use super::payload::{CRC_FIELD_PREFIX, PAYLOAD_FORMAT_INDICATOR, PIX_GUI, tags};
use super::tlv::{EmvField, find_field, parse_fields};
use crate::error::{PixError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// The fields of a static PIX payload, as read back from its text form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedPayload {
    pub pix_key: String,
    pub amount: Option<Decimal>,
    pub currency: String,
    pub country: String,
    pub merchant_name: String,
    pub merchant_city: String,
    pub reference_label: Option<String>,
    pub crc: String,
}

fn required<'a>(fields: &'a [EmvField], id: &str) -> Result<&'a str> {
    find_field(fields, id)
        .ok_or_else(|| PixError::InvalidPayload(format!("missing required tag {id}")))
}

impl DecodedPayload {
    /// Verifies the trailing checksum and decodes the payload fields.
    pub fn parse(payload: &str) -> Result<Self> {
        let payload = payload.trim();
        let split = payload
            .char_indices()
            .rev()
            .nth(3)
            .map(|(idx, _)| idx)
            .ok_or_else(|| PixError::InvalidPayload("payload too short".to_string()))?;
        let (body, found) = payload.split_at(split);
        if !body.ends_with(CRC_FIELD_PREFIX) {
            return Err(PixError::InvalidPayload(
                "payload does not end with a CRC field".to_string(),
            ));
        }

        let expected = crc16_hex(body);
        if !found.eq_ignore_ascii_case(&expected) {
            return Err(PixError::ChecksumMismatch {
                expected,
                found: found.to_string(),
            });
        }

        let fields = parse_fields(payload)?;
        if fields.first().map(|f| (f.id.as_str(), f.value.as_str()))
            != Some((tags::PAYLOAD_FORMAT, PAYLOAD_FORMAT_INDICATOR))
        {
            return Err(PixError::InvalidPayload(
                "payload format indicator must come first".to_string(),
            ));
        }

        let account = parse_fields(required(&fields, tags::MERCHANT_ACCOUNT)?)?;
        let gui = required(&account, tags::GUI)?;
        if !gui.eq_ignore_ascii_case(PIX_GUI) {
            return Err(PixError::InvalidPayload(format!(
                "unexpected merchant account GUI '{gui}'"
            )));
        }

        let amount = find_field(&fields, tags::AMOUNT)
            .map(|raw| {
                Decimal::from_str(raw)
                    .map_err(|e| PixError::InvalidPayload(format!("invalid amount '{raw}': {e}")))
            })
            .transpose()?;

        let reference_label = match find_field(&fields, tags::ADDITIONAL_DATA) {
            Some(raw) => find_field(&parse_fields(raw)?, tags::REFERENCE_LABEL).map(str::to_string),
            None => None,
        };

        Ok(Self {
            pix_key: required(&account, tags::PIX_KEY)?.to_string(),
            amount,
            currency: required(&fields, tags::CURRENCY)?.to_string(),
            country: required(&fields, tags::COUNTRY)?.to_string(),
            merchant_name: required(&fields, tags::MERCHANT_NAME)?.to_string(),
            merchant_city: required(&fields, tags::MERCHANT_CITY)?.to_string(),
            reference_label,
            crc: required(&fields, tags::CRC)?.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pix::payload::{PixCharge, build_pix_payload};
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_built_payload() {
        let payload = PixCharge::new("+5511999998888", dec!(42.9), "Pizzaria Bella Napoli")
            .with_city("Belo Horizonte")
            .with_reference("MESA7")
            .to_payload()
            .unwrap();

        let decoded = DecodedPayload::parse(&payload).unwrap();
        assert_eq!(decoded.pix_key, "+5511999998888");
        assert_eq!(decoded.amount, Some(dec!(42.90)));
        assert_eq!(decoded.currency, "986");
        assert_eq!(decoded.country, "BR");
        assert_eq!(decoded.merchant_name, "PIZZARIA BELLA NAPOLI");
        assert_eq!(decoded.merchant_city, "BELO HORIZONTE");
        assert_eq!(decoded.reference_label.as_deref(), Some("MESA7"));
        assert_eq!(decoded.crc.len(), 4);
    }

    #[test]
    fn test_tampered_payload_fails_checksum() {
        let payload = build_pix_payload("merchant@bank.com", dec!(25.5), "Burguer da Hora").unwrap();
        let tampered = payload.replace("25.50", "95.50");

        assert!(matches!(
            DecodedPayload::parse(&tampered),
            Err(PixError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_missing_crc_field() {
        assert!(matches!(
            DecodedPayload::parse("000201"),
            Err(PixError::InvalidPayload(_))
        ));
        assert!(matches!(
            DecodedPayload::parse("abc"),
            Err(PixError::InvalidPayload(_))
        ));
    }

    #[test]
    fn test_lowercase_crc_is_accepted() {
        let payload = build_pix_payload("merchant@bank.com", dec!(25.5), "Burguer da Hora").unwrap();
        let lower = format!("{}{}", &payload[..payload.len() - 4], payload[payload.len() - 4..].to_lowercase());
        assert!(DecodedPayload::parse(&lower).is_ok());
    }
}
