//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the creation step.
//! The only input is the parent directory taken from the command line; nothing is read from the
//! environment.

use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MkTmpDirConfig {
    parent_dir: PathBuf,
}

impl MkTmpDirConfig {
    /// Create a new `MkTmpDirConfig` from the raw positional argument.
    ///
    /// No filesystem access happens here, so a missing argument is reported before any directory
    /// is touched. An empty path is accepted and resolves against the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingArgument`] if `parent_dir` is `None`.
    pub fn new(parent_dir: Option<PathBuf>) -> CoreResult<Self> {
        let parent_dir = parent_dir.ok_or(CoreError::MissingArgument)?;
        Ok(Self { parent_dir })
    }

    pub fn parent_dir(&self) -> &Path {
        &self.parent_dir
    }
}
