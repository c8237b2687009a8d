use serde::Deserialize;

/// The subset of an organization record needed to issue PIX charges.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct Merchant {
    pub organization_id: String,
    pub name: String,
    #[serde(default)]
    pub pix_key: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

impl Merchant {
    pub fn new(organization_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            name: name.into(),
            pix_key: None,
            city: None,
        }
    }

    pub fn with_pix_key(mut self, pix_key: impl Into<String>) -> Self {
        self.pix_key = Some(pix_key.into());
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// The configured PIX key, verbatim; blank keys count as missing.
    pub fn pix_key(&self) -> Option<&str> {
        self.pix_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn city(&self) -> Option<&str> {
        self.city
            .as_deref()
            .map(str::trim)
            .filter(|city| !city.is_empty())
    }
}
