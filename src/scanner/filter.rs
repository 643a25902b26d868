use std::path::{MAIN_SEPARATOR, Path};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Build-output and package-cache directory segments excluded by default.
///
/// Segments carry native separators on both ends and are matched as plain
/// substrings against the path exactly as the walk discovers it.
#[must_use]
pub fn default_deny_segments() -> Vec<String> {
    let sep = MAIN_SEPARATOR;
    vec![
        format!("{sep}obj{sep}Debug{sep}"),
        format!("{sep}obj{sep}Release{sep}"),
        format!("{sep}bin{sep}Debug{sep}"),
        format!("{sep}bin{sep}Release{sep}"),
        format!("{sep}packages{sep}"),
    ]
}

/// Filters by extension membership and a substring denylist.
pub struct SegmentFilter {
    extensions: Vec<String>,
    deny_segments: Vec<String>,
}

impl SegmentFilter {
    #[must_use]
    pub const fn new(extensions: Vec<String>, deny_segments: Vec<String>) -> Self {
        Self {
            extensions,
            deny_segments,
        }
    }

    fn has_valid_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }

    // Case-sensitive, no separator normalization.
    fn is_denied(&self, path: &Path) -> bool {
        let text = path.to_string_lossy();
        self.deny_segments
            .iter()
            .any(|segment| text.contains(segment.as_str()))
    }
}

impl FileFilter for SegmentFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_valid_extension(path) && !self.is_denied(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
