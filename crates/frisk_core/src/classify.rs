//! Text/binary classification heuristics.

use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Number of leading bytes inspected when deciding whether a file is text.
/// Binary files almost always carry a null byte within their header.
pub const TEXT_CHECK_BYTES: usize = 1024;

/// Returns `true` if the first [`TEXT_CHECK_BYTES`] of `bytes` contain no
/// null byte.
#[must_use]
pub fn is_text_bytes(bytes: &[u8]) -> bool {
    let check_len = bytes.len().min(TEXT_CHECK_BYTES);
    !bytes[..check_len].contains(&0)
}

/// Returns `true` if the file at `path` looks like text.
///
/// Reads at most [`TEXT_CHECK_BYTES`] from the file. Any I/O error
/// (missing file, permission denied) classifies the file as non-text so a
/// single unreadable file never aborts a scan.
#[must_use]
pub fn is_text_file(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };

    let mut prefix = Vec::with_capacity(TEXT_CHECK_BYTES);
    if file.take(TEXT_CHECK_BYTES as u64).read_to_end(&mut prefix).is_err() {
        return false;
    }

    is_text_bytes(&prefix)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn text_bytes_without_nulls_are_text() {
        assert!(is_text_bytes(b"hello world"));
        assert!(is_text_bytes(b"line1\nline2\nline3"));
        assert!(is_text_bytes(b""));
    }

    #[test]
    fn null_byte_marks_bytes_as_binary() {
        assert!(!is_text_bytes(b"hello\0world"));
        assert!(!is_text_bytes(b"\0binary"));
    }

    #[test]
    fn null_byte_past_check_window_is_ignored() {
        let mut bytes = vec![b'a'; TEXT_CHECK_BYTES + 100];
        bytes.push(0);
        assert!(is_text_bytes(&bytes));
    }

    #[test]
    fn text_file_is_classified_as_text() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "plain text content").unwrap();

        assert!(is_text_file(file.path()));
    }

    #[test]
    fn file_with_early_null_is_binary() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"text\x00more").unwrap();

        assert!(!is_text_file(file.path()));
    }

    #[test]
    fn file_with_null_after_window_is_text() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&vec![b'x'; TEXT_CHECK_BYTES]).unwrap();
        file.write_all(b"\x00").unwrap();

        assert!(is_text_file(file.path()));
    }

    #[test]
    fn missing_file_is_not_text() {
        assert!(!is_text_file(Path::new("/nonexistent/file.txt")));
    }

    #[test]
    fn empty_file_is_text() {
        let file = NamedTempFile::new().unwrap();
        assert!(is_text_file(file.path()));
    }
}
