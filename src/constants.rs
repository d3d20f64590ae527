// Centralized fixed values
pub const OUTPUT_FILE_NAME: &str = "test_binary.bin";

/// Ascending control bytes followed by bytes that can never appear in UTF-8.
pub const PAYLOAD: [u8; 40] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, //
    0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, //
    0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, //
    0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D, 0x1E, 0x1F, //
    0xFF, 0xFE, 0xFD, 0xFC, 0xFB, 0xFA, 0xF9, 0xF8,
];

pub const PAYLOAD_LEN: usize = PAYLOAD.len();
