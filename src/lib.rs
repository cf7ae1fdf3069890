//! # Repocat
//!
//! `repocat` recursively walks a directory tree, filters files by include/exclude
//! glob patterns and heuristics (size limit, binary-content detection, ignored
//! directory names), and concatenates the surviving files' contents into one
//! text stream prefixed by a tree-style directory listing.
//!
//! The pipeline has three stages: pattern compilation ([`PatternSet`]), the
//! per-file inclusion decision ([`decide`]), and tree rendering
//! ([`render_tree`]). [`digest`] drives all three over a directory.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use repocat::{DigestBuilder, digest, output};
//!
//! let options = DigestBuilder::new(".")
//!     .include_patterns(vec!["*.rs".into(), "*.toml".into()])
//!     .max_file_size_mb(2.0)
//!     .build();
//!
//! let result = digest(options).expect("Failed to digest directory");
//!
//! print!("{}", output::format_result(&result, output::OutputFormat::Text, false));
//! ```

mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod patterns;
mod tree;
mod types;

pub use engine::digest;
pub use error::DigestError;
pub use filter::{DEFAULT_BINARY_EXTENSIONS, DEFAULT_IGNORE_DIRS, Decision, decide};
pub use options::{DigestBuilder, DigestOptions, MAX_FILE_SIZE_DEFAULT_MB};
pub use patterns::PatternSet;
pub use tree::render_tree;
pub use types::{DigestResult, FileRecord};
