use serde::{Deserialize, Serialize};

/// A single accepted file with its path and decoded content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// The path relative to the scan root, always `/`-separated.
    pub path: String,
    /// The content of the file as a string.
    ///
    /// Decoded permissively: invalid UTF-8 sequences are replaced with
    /// U+FFFD rather than failing the read.
    pub content: String,
}

/// The complete result of a digest operation.
#[derive(Debug, Serialize, Deserialize)]
pub struct DigestResult {
    /// A visual tree representation of the accepted paths.
    ///
    /// Siblings are sorted case-insensitively, so this header is a pure
    /// function of the accepted-path set.
    pub tree: String,
    /// All accepted files, in the order traversal discovered them.
    pub files: Vec<FileRecord>,
}
