//! Constants used throughout the mktmpdir core crate.

/// Token bracketing the machine-readable success line on stdout.
pub const DELIMITER_MARKER: &str = "#@@#";
