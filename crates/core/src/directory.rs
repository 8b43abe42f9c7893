//! Directory creation.
//!
//! This module creates the randomly named directory beneath the configured parent. Missing
//! ancestors of the parent are created first; the leaf itself is created non-recursively so an
//! existing directory of the same name is reported as an error rather than silently reused.

use crate::{CoreError, CoreResult};
use mktmpdir_naming::DirName;
use rand::Rng;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Creates `parent_dir/<name>` and returns its path.
///
/// The returned path is exactly `name.dir_under(parent_dir)`; no canonicalisation is applied.
///
/// # Arguments
///
/// * `parent_dir` - Directory to create the new directory in. Created if missing.
/// * `name` - Leaf directory name.
///
/// # Errors
///
/// Returns [`CoreError::Filesystem`] if:
/// - the parent (or one of its ancestors) cannot be created, for example because a regular file
///   is in the way or permissions are insufficient,
/// - the leaf directory already exists or cannot be created.
#[tracing::instrument(skip_all, fields(parent_dir = %parent_dir.display(), name = %name))]
pub fn create_named_dir(parent_dir: &Path, name: &DirName) -> CoreResult<PathBuf> {
    let candidate = name.dir_under(parent_dir);

    fs::create_dir_all(parent_dir).map_err(|source| CoreError::Filesystem {
        path: parent_dir.to_path_buf(),
        source,
    })?;

    fs::create_dir(&candidate).map_err(|source| CoreError::Filesystem {
        path: candidate.clone(),
        source,
    })?;

    tracing::debug!(path = %candidate.display(), "created directory");
    Ok(candidate)
}

/// Generates a fresh [`DirName`] from `rng` and creates it beneath `parent_dir`.
///
/// There is no retry: a name collision surfaces as [`CoreError::Filesystem`].
pub fn create_random_dir<R: Rng>(parent_dir: &Path, rng: &mut R) -> CoreResult<PathBuf> {
    let name = DirName::generate(rng);
    create_named_dir(parent_dir, &name)
}
