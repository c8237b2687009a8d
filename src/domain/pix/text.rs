use unicode_normalization::UnicodeNormalization;

pub const MERCHANT_NAME_MAX: usize = 25;
pub const MERCHANT_CITY_MAX: usize = 15;
pub const REFERENCE_LABEL_MAX: usize = 25;

pub const DEFAULT_MERCHANT_NAME: &str = "LOJA";
pub const DEFAULT_MERCHANT_CITY: &str = "SAO PAULO";
pub const DEFAULT_REFERENCE_LABEL: &str = "***";

/// Strips combining diacritical marks after canonical decomposition.
fn strip_diacritics(raw: &str) -> impl Iterator<Item = char> + '_ {
    raw.nfd().filter(|c| !('\u{0300}'..='\u{036f}').contains(c))
}

/// Keeps `[A-Za-z0-9 ]`, collapses space runs, trims, truncates, upper-cases.
fn clean_display_text(raw: &str, max: usize) -> String {
    let kept: String = strip_diacritics(raw)
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    let collapsed = kept.split_whitespace().collect::<Vec<_>>().join(" ");
    let truncated: String = collapsed.chars().take(max).collect();
    truncated.trim_end().to_ascii_uppercase()
}

/// Normalizes a store name for tag 59, falling back to `LOJA`.
pub fn normalize_merchant_name(raw: &str) -> String {
    let name = clean_display_text(raw, MERCHANT_NAME_MAX);
    if name.is_empty() {
        DEFAULT_MERCHANT_NAME.to_string()
    } else {
        name
    }
}

/// Normalizes a city for tag 60, falling back to `SAO PAULO`.
pub fn normalize_merchant_city(raw: &str) -> String {
    let city = clean_display_text(raw, MERCHANT_CITY_MAX);
    if city.is_empty() {
        DEFAULT_MERCHANT_CITY.to_string()
    } else {
        city
    }
}

/// Normalizes the transaction reference (tag 62, sub-tag 05).
///
/// Only ASCII letters and digits survive; an empty result means "no
/// reference" and becomes `***`.
pub fn normalize_reference_label(raw: &str) -> String {
    let label: String = strip_diacritics(raw)
        .filter(|c| c.is_ascii_alphanumeric())
        .take(REFERENCE_LABEL_MAX)
        .collect();
    if label.is_empty() {
        DEFAULT_REFERENCE_LABEL.to_string()
    } else {
        label
    }
}
