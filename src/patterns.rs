//! Glob pattern compilation.
//!
//! User-supplied patterns are compiled once, up front, into a [`PatternSet`].
//! Matching is whole-path and anchored, with shell-glob semantics: `*` matches
//! any run of characters including path separators, `?` matches one character,
//! and `[...]` character classes are supported. A pattern that fails to
//! compile is fatal for the whole run; an invalid filter cannot safely be
//! dropped.

use crate::error::DigestError;
use globset::{Glob, GlobSet, GlobSetBuilder};

/// An ordered sequence of compiled glob patterns.
///
/// Order does not affect matching: a path matches the set if it matches any
/// member. Immutable once compiled.
#[derive(Debug, Clone)]
pub struct PatternSet {
    globs: Vec<Glob>,
    set: GlobSet,
}

impl PatternSet {
    /// Compiles a list of glob strings into a matchable set.
    ///
    /// # Errors
    ///
    /// Returns [`DigestError::Pattern`] on the first pattern that is not a
    /// valid glob expression.
    pub fn compile(patterns: &[String]) -> Result<Self, DigestError> {
        let mut builder = GlobSetBuilder::new();
        let mut globs = Vec::with_capacity(patterns.len());
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|e| DigestError::Pattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob.clone());
            globs.push(glob);
        }
        let set = builder.build().map_err(|e| DigestError::Pattern {
            pattern: e.glob().map(ToString::to_string).unwrap_or_default(),
            source: e,
        })?;
        Ok(Self { globs, set })
    }

    /// Whether any pattern in the set matches `path`.
    pub fn is_match(&self, path: &str) -> bool {
        self.set.is_match(path)
    }

    pub fn is_empty(&self) -> bool {
        self.globs.is_empty()
    }

    /// The compiled globs, in compilation order. Each exposes its source
    /// string and translated regex for diagnostics.
    pub fn globs(&self) -> &[Glob] {
        &self.globs
    }
}
