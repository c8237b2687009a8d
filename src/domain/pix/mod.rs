//! BR Code "PIX copia e cola" payloads (EMV-QRCPS-MPM, Banco Central do Brasil).
//!
//! Everything here is pure: building or decoding a payload performs no I/O
//! and shares no state, so it can be called from any number of tasks.

pub mod crc;
pub mod decode;
pub mod payload;
pub mod text;
pub mod tlv;

pub use decode::DecodedPayload;
pub use payload::{PixCharge, build_pix_payload, format_amount, round_amount};
