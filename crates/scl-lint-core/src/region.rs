//! Region extraction over raw spec text.
//!
//! Spec files are sliced into logical regions bounded by section markers
//! such as `%install` or `%files`. Markers are frequently missing or out of
//! the conventional order; a missing marker degenerates to an empty or
//! full-file region and is itself a fact rules may act on, never an error.

use regex::Regex;

/// A contiguous span of spec text, as byte offsets.
///
/// Regions may be empty or inverted when markers are missing or out of
/// order; [`Region::slice`] tolerates both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Start offset, inclusive.
    pub start: usize,
    /// End offset, exclusive.
    pub end: usize,
}

impl Region {
    /// Creates a region from explicit offsets.
    #[must_use]
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the text covered by this region.
    ///
    /// Empty, inverted, or out-of-range regions yield `""`.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        if self.start >= self.end {
            return "";
        }
        text.get(self.start..self.end.min(text.len())).unwrap_or("")
    }
}

/// Returns the offset of the first match of `pattern` in `text`.
///
/// An offset of 0 is a valid match; absence is `None`, never a sentinel
/// value that could be confused with a match at the start of the text.
#[must_use]
pub fn locate(text: &str, pattern: &Regex) -> Option<usize> {
    pattern.find(text).map(|m| m.start())
}

/// Returns the offset of the first occurrence of a literal marker.
#[must_use]
pub fn locate_literal(text: &str, marker: &str) -> Option<usize> {
    text.find(marker)
}

/// Returns the offset of the first occurrence of `marker` at or after `from`.
#[must_use]
pub fn locate_literal_from(text: &str, marker: &str, from: usize) -> Option<usize> {
    if from > text.len() {
        return None;
    }
    text[from..].find(marker).map(|offset| from + offset)
}

/// Markers that can terminate the `%install` section, in priority order.
///
/// The first *present* marker wins regardless of which appears earliest in
/// the text; this matches the conventional section ordering of spec files.
const INSTALL_END_MARKERS: &[&str] = &["%check", "%clean", "%files", "%changelog"];

/// Carves out the `%install` section of a spec file.
///
/// Starts at the first `%install` marker (or the start of the text when
/// absent) and ends at the first present marker of `%check`, `%clean`,
/// `%files`, `%changelog` tried in that fixed order, or at end of file when
/// none exist.
#[must_use]
pub fn install_region(text: &str) -> Region {
    let start = locate_literal(text, "%install").unwrap_or(0);
    let end = INSTALL_END_MARKERS
        .iter()
        .find_map(|marker| locate_literal(text, marker))
        .unwrap_or(text.len());
    Region::new(start, end)
}

/// Returns the main-package region: everything before the first `%package`
/// marker, or the whole text when no subpackage is declared.
#[must_use]
pub fn main_section(text: &str) -> &str {
    let end = locate_literal(text, "%package").unwrap_or(text.len());
    Region::new(0, end).slice(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_finds_match_at_offset_zero() {
        let pattern = Regex::new(r"%install").expect("valid pattern");
        assert_eq!(locate("%install\nmore", &pattern), Some(0));
        assert_eq!(locate("no markers here", &pattern), None);
    }

    #[test]
    fn slice_tolerates_inverted_region() {
        assert_eq!(Region::new(10, 5).slice("abcdef"), "");
        assert_eq!(Region::new(3, 3).slice("abcdef"), "");
        assert_eq!(Region::new(2, 100).slice("abcdef"), "cdef");
    }

    #[test]
    fn install_region_ends_at_check() {
        let text = "%install\ndo stuff\n%check\ntests\n%files\n";
        let region = install_region(text);
        assert_eq!(region.slice(text), "%install\ndo stuff\n");
    }

    #[test]
    fn install_region_priority_beats_textual_order() {
        // %files appears before %check in the text, but %check is earlier
        // in the fallback chain and therefore wins.
        let text = "%install\ncp foo\n%files\n/usr/foo\n%check\ntest\n";
        let region = install_region(text);
        assert_eq!(region.slice(text), "%install\ncp foo\n%files\n/usr/foo\n");
    }

    #[test]
    fn install_region_falls_back_through_chain() {
        let text = "%install\ncp foo\n%changelog\n* entry\n";
        let region = install_region(text);
        assert_eq!(region.slice(text), "%install\ncp foo\n");
    }

    #[test]
    fn install_region_extends_to_eof_without_markers() {
        let text = "%install\ncp foo\n";
        let region = install_region(text);
        assert_eq!(region.slice(text), text);
    }

    #[test]
    fn install_region_missing_install_starts_at_zero() {
        let text = "Name: x\n%files\n";
        let region = install_region(text);
        assert_eq!(region.start, 0);
        assert_eq!(region.slice(text), "Name: x\n");
    }

    #[test]
    fn main_section_stops_at_first_package() {
        let text = "Name: x\nBuildRequires: y\n%package runtime\nmore\n";
        assert_eq!(main_section(text), "Name: x\nBuildRequires: y\n");
        assert_eq!(main_section("Name: x\n"), "Name: x\n");
    }

    #[test]
    fn locate_literal_from_respects_offset() {
        let text = "%package runtime\n%package build\n";
        assert_eq!(locate_literal_from(text, "%package", 1), Some(17));
        assert_eq!(locate_literal_from(text, "%package", 18), None);
        assert_eq!(locate_literal_from(text, "%package", 999), None);
    }
}
