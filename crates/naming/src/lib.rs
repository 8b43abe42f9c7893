//! Random directory-name utilities.
//!
//! mktmpdir creates one directory per invocation whose leaf name is drawn at random. To keep
//! path derivation predictable and easy to match downstream, generated names always use a
//! *canonical* form: **15 uppercase ASCII letters**.
//!
//! This crate provides:
//! - A small wrapper type ([`DirName`]) that *guarantees* the canonical form once constructed.
//! - Name generation from an injected random source, so callers and tests control the RNG.
//! - Path derivation of the new directory beneath a parent directory.
//!
//! ## Canonical name form
//! - Length: 15
//! - Characters: `A-Z` only
//! - Example: `QWHZKDBTRMNAXOE`
//!
//! Notes:
//! - Each character is drawn independently and uniformly from the 26 letters, with replacement.
//! - Non-canonical values (lowercase, digits, wrong length) are rejected by [`DirName::parse`].
//!
//! ## Directory layout
//! For a canonical name `n`, the directory lives at `parent_dir/<n>/`.
//!
//! Example:
//! `/tmp/work/QWHZKDBTRMNAXOE/`

mod name;

// Re-export public types
pub use name::{DirName, DIR_NAME_ALPHABET, DIR_NAME_LEN};

/// Error type for name operations.
#[derive(Debug, thiserror::Error)]
pub enum NameError {
    /// Invalid input provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for name operations.
pub type NameResult<T> = Result<T, NameError>;
