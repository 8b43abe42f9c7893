//! # mktmpdir Core
//!
//! Core logic for the mktmpdir tool.
//!
//! This crate contains the filesystem and output operations:
//! - Configuration validation for the single parent-directory argument
//! - Creation of a randomly named directory beneath that parent
//! - Formatting of the `#@@#`-delimited success line
//!
//! **No CLI concerns**: argument parsing, logging setup and process exit codes belong in the
//! `mktmpdir` binary.

pub mod config;
pub mod constants;
pub mod directory;
pub mod error;
pub mod report;

pub use config::MkTmpDirConfig;
pub use constants::DELIMITER_MARKER;
pub use directory::{create_named_dir, create_random_dir};
pub use error::{CoreError, CoreResult};
pub use mktmpdir_naming::DirName;
pub use report::{format_report, write_report};
