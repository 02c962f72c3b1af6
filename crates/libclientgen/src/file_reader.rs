use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

/// Read a GraphQL source file as UTF-8 text.
pub fn read_content(file_path: impl AsRef<Path>) -> Result<String, ReadContentError> {
    let file_path = file_path.as_ref();
    if !file_path.is_file() {
        return Err(ReadContentError::NotAFile(file_path.to_path_buf()));
    }

    std::fs::read_to_string(file_path).map_err(|err| ReadContentError::Io {
        file_path: file_path.to_path_buf(),
        source: err,
    })
}

#[derive(Debug, Error)]
pub enum ReadContentError {
    /// Includes content that is not valid UTF-8.
    #[error("Failed to read {file_path:?}: {source}")]
    Io {
        file_path: PathBuf,
        source: std::io::Error,
    },

    #[error("{0:?} is not a file")]
    NotAFile(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directories_are_not_files() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            read_content(&dir),
            Err(ReadContentError::NotAFile(path)) if path == dir,
        ));
    }

    #[test]
    fn reads_utf8_content() {
        let path = std::env::temp_dir().join("libclientgen_read_content_test.graphql");
        std::fs::write(&path, "type Query { a: String }").unwrap();

        assert_eq!(read_content(&path).unwrap(), "type Query { a: String }");

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let path = std::env::temp_dir().join("libclientgen_read_content_invalid.graphql");
        std::fs::write(&path, [0xff, 0xfe, 0xfd]).unwrap();

        assert!(matches!(read_content(&path), Err(ReadContentError::Io { .. })));

        std::fs::remove_file(&path).unwrap();
    }
}
