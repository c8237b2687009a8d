use crate::error::{PixError, Result};

/// Largest value a two-digit length prefix can describe.
pub const MAX_FIELD_LEN: usize = 99;

/// A single decoded `ID + LENGTH + VALUE` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmvField {
    pub id: String,
    pub value: String,
}

fn check_tag(id: &str) -> Result<()> {
    if id.len() == 2 && id.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(PixError::InvalidTag(id.to_string()))
    }
}

/// Encodes one EMV field as `ID (2 digits) + LENGTH (2 digits) + VALUE`.
///
/// The length counts characters, not bytes. Values longer than
/// [`MAX_FIELD_LEN`] are rejected rather than letting the prefix overflow.
pub fn emv_field(id: &str, value: &str) -> Result<String> {
    check_tag(id)?;
    let len = value.chars().count();
    if len > MAX_FIELD_LEN {
        return Err(PixError::FieldTooLong {
            tag: id.to_string(),
            len,
        });
    }
    Ok(format!("{id}{len:02}{value}"))
}

/// Splits a TLV string into its fields, in order.
///
/// Works for the top-level payload as well as nested templates such as the
/// merchant account information (tag 26).
pub fn parse_fields(input: &str) -> Result<Vec<EmvField>> {
    let chars: Vec<char> = input.chars().collect();
    let mut fields = Vec::new();
    let mut pos = 0;

    while pos < chars.len() {
        if pos + 4 > chars.len() {
            return Err(PixError::InvalidPayload(format!(
                "truncated field header at offset {pos}"
            )));
        }
        let id: String = chars[pos..pos + 2].iter().collect();
        check_tag(&id).map_err(|_| {
            PixError::InvalidPayload(format!("non-numeric tag '{id}' at offset {pos}"))
        })?;
        let len_str: String = chars[pos + 2..pos + 4].iter().collect();
        let len: usize = len_str
            .parse()
            .ok()
            .filter(|_| len_str.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| {
                PixError::InvalidPayload(format!("invalid length '{len_str}' for tag {id}"))
            })?;

        let start = pos + 4;
        let end = start + len;
        if end > chars.len() {
            return Err(PixError::InvalidPayload(format!(
                "tag {id} declares {len} characters but only {} remain",
                chars.len() - start
            )));
        }
        fields.push(EmvField {
            id,
            value: chars[start..end].iter().collect(),
        });
        pos = end;
    }

    Ok(fields)
}

/// Returns the value of the first field carrying `id`.
pub fn find_field<'a>(fields: &'a [EmvField], id: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|field| field.id == id)
        .map(|field| field.value.as_str())
}
