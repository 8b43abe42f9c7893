//! Success output.
//!
//! The created path is reported as a single stdout line, `#@@# <path> #@@#`. Consumers grep
//! stdout for this delimited pattern, so nothing else may be written alongside it.

use crate::constants::DELIMITER_MARKER;
use crate::{CoreError, CoreResult};
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

/// Formats the success line for `path`, without a trailing newline.
///
/// Non-UTF-8 paths are rendered lossily; [`write_report`] writes the raw bytes instead.
pub fn format_report(path: &Path) -> String {
    format!(
        "{marker} {path} {marker}",
        marker = DELIMITER_MARKER,
        path = path.display()
    )
}

/// Writes the success line for `path` to `out` and flushes it.
///
/// On unix the path bytes are written verbatim, so the reported path matches the created one
/// even when it is not valid UTF-8.
///
/// # Errors
///
/// Returns [`CoreError::Report`] if writing or flushing fails.
pub fn write_report<W: Write>(out: &mut W, path: &Path) -> CoreResult<()> {
    let mut line = Vec::new();
    line.extend_from_slice(DELIMITER_MARKER.as_bytes());
    line.push(b' ');
    line.extend_from_slice(&path_bytes(path));
    line.push(b' ');
    line.extend_from_slice(DELIMITER_MARKER.as_bytes());
    line.push(b'\n');

    out.write_all(&line).map_err(CoreError::Report)?;
    out.flush().map_err(CoreError::Report)
}

#[cfg(unix)]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_bytes(path: &Path) -> Cow<'_, [u8]> {
    Cow::Owned(path.display().to_string().into_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn formats_absolute_path() {
        let line = format_report(Path::new("/tmp/work/ABCDEFGHIJKLMNO"));

        assert_eq!(line, "#@@# /tmp/work/ABCDEFGHIJKLMNO #@@#");
    }

    #[cfg(unix)]
    #[test]
    fn formats_relative_path_as_given() {
        let line = format_report(&Path::new("./work").join("ABCDEFGHIJKLMNO"));

        assert_eq!(line, "#@@# ./work/ABCDEFGHIJKLMNO #@@#");
    }

    #[test]
    fn writes_exactly_one_line() {
        let mut out = Vec::new();

        write_report(&mut out, Path::new("/tmp/work/ABCDEFGHIJKLMNO")).unwrap();

        let written = String::from_utf8(out).unwrap();
        assert_eq!(written, "#@@# /tmp/work/ABCDEFGHIJKLMNO #@@#\n");
        assert_eq!(written.matches(DELIMITER_MARKER).count(), 2);
    }

    #[test]
    fn writes_bare_name_for_empty_parent() {
        let mut out = Vec::new();

        write_report(&mut out, &Path::new("").join("ABCDEFGHIJKLMNO")).unwrap();

        assert_eq!(out, b"#@@# ABCDEFGHIJKLMNO #@@#\n");
    }

    #[cfg(unix)]
    #[test]
    fn writes_non_utf8_path_bytes_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = Path::new(OsStr::from_bytes(b"/tmp/bad\xffdir/ABCDEFGHIJKLMNO"));
        let mut out = Vec::new();

        write_report(&mut out, path).unwrap();

        assert_eq!(out, b"#@@# /tmp/bad\xffdir/ABCDEFGHIJKLMNO #@@#\n".to_vec());
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn surfaces_write_failure() {
        let result = write_report(&mut BrokenPipe, Path::new("/tmp/x"));

        assert!(matches!(result, Err(CoreError::Report(_))));
    }
}
