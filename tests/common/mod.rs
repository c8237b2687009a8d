use assert_cmd::cargo_bin;
use std::io::{Error, Write};
use std::process::Command;
use tempfile::NamedTempFile;

pub const BURGUER_PAYLOAD: &str = "00020101021226390014BR.GOV.BCB.PIX0117merchant@bank.com520400005303986540525.505802BR5915BURGUER DA HORA6009SAO PAULO62070503***6304869F";
pub const ACAI_PAYLOAD: &str = "00020101021226360014BR.GOV.BCB.PIX0114+5511999998888520400005303986540542.905802BR5913CAFE ACAI CIA6014BELO HORIZONTE62070503***6304AE20";

/// The binary with PIX settings cleared from the inherited environment.
#[allow(dead_code)]
pub fn trendpix() -> Command {
    let mut cmd = Command::new(cargo_bin!("trendpix"));
    cmd.env_remove("PIX_MERCHANT_CITY")
        .env_remove("PIX_REFERENCE_LABEL")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `rows` under a header line into a temporary CSV file.
#[allow(dead_code)]
pub fn write_csv(header: &str, rows: &[&str]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    writeln!(file, "{header}")?;
    for row in rows {
        writeln!(file, "{row}")?;
    }
    file.flush()?;
    Ok(file)
}

/// Recomputes CRC-16/CCITT-FALSE independently of the library.
#[allow(dead_code)]
pub fn reference_crc(data: &str) -> String {
    let mut crc: u32 = 0xFFFF;
    for byte in data.bytes() {
        crc ^= (byte as u32) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                ((crc << 1) ^ 0x1021) & 0xFFFF
            } else {
                (crc << 1) & 0xFFFF
            };
        }
    }
    format!("{crc:04X}")
}
