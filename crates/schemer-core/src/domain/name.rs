//! Name and path resolution for generated artifacts.
//!
//! A caller asks for an artifact by a loose `name` that may carry sub-folders
//! (`sub/dir/widget`) relative to a base `path` that may or may not be
//! normalized. [`parse_name`] splits that pair into a bare artifact name and a
//! canonical absolute directory.
//!
//! ## Path model
//!
//! Tree paths are plain strings using `/` as separator. `\` is accepted on
//! input and treated as a separator. A normalized path:
//!
//! - starts with exactly one `/`
//! - never ends with `/` (except the root itself)
//! - contains no empty, `.` or `..` segments
//!
//! `..` above the root is clamped at the root, which keeps every function in
//! this module total over arbitrary strings.

use std::fmt;

/// Separator used in every normalized tree path.
pub const SEPARATOR: char = '/';

/// Result of splitting a raw artifact name against a base path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedName {
    /// Last segment of the raw name, taken verbatim (extensions are kept).
    pub name: String,
    /// Normalized absolute directory the artifact lives in.
    pub path: String,
}

impl ParsedName {
    /// `path` and `name` joined and normalized.
    pub fn full_path(&self) -> String {
        join(&self.path, &self.name)
    }
}

impl fmt::Display for ParsedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_path())
    }
}

/// Split `raw_name` into a bare name and the directory it resolves to under
/// `base_path`.
///
/// # Examples
///
/// ```
/// use schemer_core::domain::parse_name;
///
/// let parsed = parse_name("/custom", "sub/widget");
/// assert_eq!(parsed.name, "widget");
/// assert_eq!(parsed.path, "/custom/sub");
///
/// let parsed = parse_name("src/app", "widget");
/// assert_eq!(parsed.path, "/src/app");
/// ```
pub fn parse_name(base_path: &str, raw_name: &str) -> ParsedName {
    let name = basename(raw_name).to_string();
    let joined = format!("{base_path}{SEPARATOR}{raw_name}");
    let path = normalize(dirname(&joined));

    ParsedName { name, path }
}

/// Normalize a tree path.
///
/// Collapses repeated separators, drops `.` segments, resolves `..` against
/// the preceding segment and forces a single leading `/`.
pub fn normalize(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();

    for segment in path.split(is_separator) {
        match segment {
            "" | "." => {}
            ".." => {
                // Clamped at the root.
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    if segments.is_empty() {
        return SEPARATOR.to_string();
    }

    let mut out = String::with_capacity(path.len() + 1);
    for segment in segments {
        out.push(SEPARATOR);
        out.push_str(segment);
    }
    out
}

/// Join two path fragments and normalize the result.
pub fn join(base: &str, child: &str) -> String {
    normalize(&format!("{base}{SEPARATOR}{child}"))
}

/// Text after the last separator, or the whole input when there is none.
pub fn basename(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// Everything before the last separator, or `""` when there is none.
pub fn dirname(path: &str) -> &str {
    match path.rfind(is_separator) {
        Some(idx) => &path[..idx],
        None => "",
    }
}

/// `true` for `/` and `\`.
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}
