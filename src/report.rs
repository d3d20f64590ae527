use std::path::PathBuf;

/// Outcome of a fully successful write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub bytes: usize,
}

/// The two confirmation lines printed on success, newline-terminated.
pub fn confirmation(written: &Written) -> String {
    format!(
        "Binary file '{}' created successfully!\nSize: {} bytes\n",
        written.path.display(),
        written.bytes
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_names_file_and_size() {
        let w = Written {
            path: PathBuf::from("test_binary.bin"),
            bytes: 40,
        };
        assert_eq!(
            confirmation(&w),
            "Binary file 'test_binary.bin' created successfully!\nSize: 40 bytes\n"
        );
    }
}
