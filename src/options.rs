use crate::filter::DEFAULT_IGNORE_DIRS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

/// Default per-file size limit, in megabytes.
pub const MAX_FILE_SIZE_DEFAULT_MB: f64 = 5.0;

const BYTES_IN_MB: f64 = (1024 * 1024) as f64;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigestOptions {
    pub root: PathBuf,
    pub include_patterns: Vec<String>,
    pub exclude_patterns: Vec<String>,
    /// Directory names pruned at traversal time. Initialized from
    /// [`DEFAULT_IGNORE_DIRS`](crate::DEFAULT_IGNORE_DIRS); per-run copies
    /// never feed back into the default.
    pub ignored_dirs: HashSet<String>,
    pub max_file_size_mb: f64,
    /// Suppresses the not-a-git-repository warning.
    pub no_git_check: bool,
    /// Emit per-file skip/include diagnostics on stderr.
    pub verbose: bool,
}
impl Default for DigestOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            include_patterns: Vec::new(),
            exclude_patterns: Vec::new(),
            ignored_dirs: DEFAULT_IGNORE_DIRS.iter().map(|d| d.to_string()).collect(),
            max_file_size_mb: MAX_FILE_SIZE_DEFAULT_MB,
            no_git_check: false,
            verbose: false,
        }
    }
}
impl DigestOptions {
    pub fn max_file_size_bytes(&self) -> u64 {
        (self.max_file_size_mb * BYTES_IN_MB) as u64
    }
}
#[derive(Debug, Default)]
pub struct DigestBuilder {
    options: DigestOptions,
}
impl DigestBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: DigestOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn include_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.include_patterns = patterns;
        self
    }
    pub fn exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.exclude_patterns = patterns;
        self
    }
    pub fn ignored_dirs(mut self, dirs: impl IntoIterator<Item = String>) -> Self {
        self.options.ignored_dirs = dirs.into_iter().collect();
        self
    }
    pub fn max_file_size_mb(mut self, mb: f64) -> Self {
        self.options.max_file_size_mb = mb;
        self
    }
    pub fn no_git_check(mut self, yes: bool) -> Self {
        self.options.no_git_check = yes;
        self
    }
    pub fn verbose(mut self, yes: bool) -> Self {
        self.options.verbose = yes;
        self
    }
    pub fn build(self) -> DigestOptions {
        self.options
    }
}
