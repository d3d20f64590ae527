#![allow(dead_code)]
use assert_fs::TempDir;

/// Byte-for-byte contents the fixture file must have.
pub const EXPECTED: [u8; 40] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
    0x0F, 0x10, 0x11, 0x12, 0x13, 0x14, 0x15, 0x16, 0x17, 0x18, 0x19, 0x1A, 0x1B, 0x1C, 0x1D,
    0x1E, 0x1F, 0xFF, 0xFE, 0xFD, 0xFC, 0xFB, 0xFA, 0xF9, 0xF8,
];

pub const CONFIRMATION: &str = "Binary file 'test_binary.bin' created successfully!\nSize: 40 bytes\n";

/// `binary-fixture` command running inside `dir`.
pub fn fixture_cmd(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("binary-fixture");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}
