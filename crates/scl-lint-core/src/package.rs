//! Narrow interfaces to the package and text I/O collaborators.

use std::collections::BTreeMap;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

/// A file shipped by a package, as recorded in its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Path of the file on disk.
    pub path: PathBuf,
}

impl FileRecord {
    /// Creates a new file record.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// The package abstraction the checker consumes.
///
/// Implemented by the archive-introspection collaborator; the core only
/// reads the source/binary distinction and the file map.
pub trait Package {
    /// Returns the package name.
    fn name(&self) -> &str;

    /// Returns true for source packages, false for built binary packages.
    fn is_source(&self) -> bool;

    /// Returns the package's files, keyed by relative path.
    fn files(&self) -> &BTreeMap<String, FileRecord>;
}

/// Reads a file as an ordered sequence of lines.
///
/// The checker joins the lines with `\n` to reconstitute the spec text.
///
/// # Errors
///
/// Returns any I/O error from opening or reading the file.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let file = std::fs::File::open(path)?;
    io::BufReader::new(file).lines().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn read_lines_preserves_order_and_drops_newlines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "Name: foo\n%install\n\n%scl_install\n").expect("write fixture");

        let lines = read_lines(file.path()).expect("read fixture");
        assert_eq!(lines, vec!["Name: foo", "%install", "", "%scl_install"]);
        assert_eq!(lines.join("\n"), "Name: foo\n%install\n\n%scl_install");
    }

    #[test]
    fn read_lines_missing_file_is_io_error() {
        let err = read_lines(Path::new("/nonexistent/definitely-missing.spec"))
            .expect_err("missing file must fail");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
