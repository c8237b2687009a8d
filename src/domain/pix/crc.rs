const POLYNOMIAL: u16 = 0x1021;
const INITIAL: u16 = 0xFFFF;

/// CRC-16/CCITT-FALSE: poly 0x1021, init 0xFFFF, MSB first, no final XOR.
///
/// Each character contributes the low byte of its code point, so inputs are
/// expected to be ASCII.
pub fn crc16_ccitt(data: &str) -> u16 {
    let mut crc = INITIAL;
    for ch in data.chars() {
        crc ^= ((ch as u32 & 0xFF) as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ POLYNOMIAL
            } else {
                crc << 1
            };
        }
    }
    crc
}

/// Checksum rendered as four upper-case hex digits.
pub fn crc16_hex(data: &str) -> String {
    format!("{:04X}", crc16_ccitt(data))
}
