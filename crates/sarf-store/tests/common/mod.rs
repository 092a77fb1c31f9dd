use std::io::Write;

use tempfile::NamedTempFile;

/// Write `content` to a fresh temporary file
#[allow(dead_code)]
pub fn data_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
