//! Internal implementation of random directory names.

use crate::{NameError, NameResult};
use rand::Rng;
use std::path::{Path, PathBuf};
use std::fmt;

/// Number of characters in a generated directory name.
pub const DIR_NAME_LEN: usize = 15;

/// Characters a generated directory name is drawn from.
pub const DIR_NAME_ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// mktmpdir's canonical directory name (15 uppercase ASCII letters).
///
/// This wrapper type guarantees that once constructed, the contained name is in canonical form.
/// It is used both for freshly generated names and for names supplied by callers (for example,
/// a fixed name injected by a test).
///
/// # Construction
/// - [`DirName::generate`] draws a new name from a caller-supplied random source.
/// - [`DirName::parse`] validates an externally supplied name.
///
/// # Errors
/// [`DirName::parse`] returns [`NameError::InvalidInput`] if the input is not canonical.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DirName(String);

impl DirName {
    /// Generates a new name in canonical form.
    ///
    /// Each of the [`DIR_NAME_LEN`] characters is drawn independently and uniformly from
    /// [`DIR_NAME_ALPHABET`]. The random source is injected so tests can use a seeded RNG;
    /// production callers pass `rand::thread_rng()`.
    ///
    /// # Arguments
    ///
    /// * `rng` - Random source to draw characters from.
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let name = (0..DIR_NAME_LEN)
            .map(|_| char::from(DIR_NAME_ALPHABET[rng.gen_range(0..DIR_NAME_ALPHABET.len())]))
            .collect();
        Self(name)
    }

    /// Validates and wraps a name that must already be in canonical form.
    ///
    /// Lowercase letters are not normalised; callers must provide the canonical representation.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::InvalidInput`] if `input` is not in canonical form.
    pub fn parse(input: &str) -> NameResult<Self> {
        if Self::is_canonical(input) {
            return Ok(Self(input.to_owned()));
        }
        Err(NameError::InvalidInput(format!(
            "directory name must be {} uppercase ASCII letters, got: '{}'",
            DIR_NAME_LEN, input
        )))
    }

    /// Returns true if `input` is in canonical form.
    ///
    /// This is a purely syntactic check:
    /// - Exactly [`DIR_NAME_LEN`] bytes long
    /// - Contains only `A-Z`
    pub fn is_canonical(input: &str) -> bool {
        input.len() == DIR_NAME_LEN && input.bytes().all(|b| b.is_ascii_uppercase())
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `parent_dir/<name>` using platform path-join semantics.
    ///
    /// No normalisation is applied to `parent_dir`; relative parents stay relative.
    pub fn dir_under(&self, parent_dir: &Path) -> PathBuf {
        parent_dir.join(&self.0)
    }
}

impl fmt::Display for DirName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
