use crate::error::{ProcessingError, Result};
use std::path::Path;
use tracing::warn;

/// Read a spreadsheet export as text.
///
/// UTF-8 (with or without BOM) is taken as is; anything else is decoded as
/// Windows-1250, the code page older Albanian Excel installs export with.
pub fn read_source_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| ProcessingError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(decode_text(&bytes, path))
}

fn decode_text(bytes: &[u8], path: &Path) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.strip_prefix('\u{feff}').unwrap_or(text).to_string(),
        Err(_) => {
            let (text, encoding, had_errors) = encoding_rs::WINDOWS_1250.decode(bytes);
            if had_errors {
                warn!(
                    "{} is not valid {}; unmappable bytes were replaced",
                    path.display(),
                    encoding.name()
                );
            }
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_utf8_bom_is_stripped() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        file.write_all("\u{feff}Ngjyra,ë".as_bytes())?;

        assert_eq!(read_source_text(file.path())?, "Ngjyra,ë");
        Ok(())
    }

    #[test]
    fn test_windows_1250_fallback() -> Result<()> {
        let mut file = NamedTempFile::new()?;
        // "kthjellët" with 0xEB for 'ë'
        file.write_all(b"kthjell\xebt")?;

        assert_eq!(read_source_text(file.path())?, "kthjellët");
        Ok(())
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = read_source_text(Path::new("/nonexistent/sheet.csv")).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Read);
    }
}
