use crate::domain::pix::round_amount;
use crate::error::PixError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A charge amount in reais that is still positive once rounded to centavos.
///
/// The encoder accepts any `Decimal`; requests coming from outside go through
/// this type so that zero and negative charges never reach it.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, PixError> {
        if round_amount(value) > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(PixError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = PixError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}
