//! Template files and the context they render against.
//!
//! ## Syntax
//!
//! | Where          | Form                         | Example                                  |
//! |----------------|------------------------------|------------------------------------------|
//! | File contents  | `<%= expr %>`                | `export class <%= classify(name) %> {}`  |
//! | File names     | `__key__`, `__key@helper__`  | `__name@dasherize__.component.ts`        |
//!
//! In contents `expr` is a key or a helper call wrapping another expression
//! (`classify(dasherize(name))`). In file names helpers chain with `@` and
//! apply left to right. Angular interpolation (`{{ title }}`) is plain text
//! and passes through untouched.
//!
//! Rendering is strict: a key with no value or an unknown helper is an error,
//! never a silently preserved placeholder.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{
    error::DomainError,
    name,
    options::{ResolvedOptions, is_identifier},
    strings::StringHelper,
};

/// Suffix marking a file as a template; stripped by the rename step.
pub const TEMPLATE_SUFFIX: &str = ".template";

static CONTENT_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<%=(.*?)%>").expect("content placeholder pattern is valid"));

static PATH_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"__([^/]+?)__").expect("path marker pattern is valid"));

/// A single template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// `/`-separated path, relative to the template root until moved.
    pub path: String,
    pub content: String,
}

impl TemplateFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Ordered set of files flowing through the pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSet {
    files: Vec<TemplateFile>,
}

impl FileSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.push(TemplateFile::new(path, content));
        self
    }

    pub fn push(&mut self, file: TemplateFile) {
        self.files.push(file);
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateFile> {
        self.files.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Rebuild the set by transforming every file in order.
    pub fn try_map<F>(self, mut f: F) -> Result<Self, DomainError>
    where
        F: FnMut(TemplateFile) -> Result<TemplateFile, DomainError>,
    {
        let files = self
            .files
            .into_iter()
            .map(&mut f)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { files })
    }
}

impl FromIterator<TemplateFile> for FileSet {
    fn from_iter<I: IntoIterator<Item = TemplateFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for FileSet {
    type Item = TemplateFile;
    type IntoIter = std::vec::IntoIter<TemplateFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.into_iter()
    }
}

/// Values and helpers available to templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateContext {
    values: BTreeMap<String, String>,
    helpers: Vec<StringHelper>,
}

impl TemplateContext {
    /// Empty context with the full helper set.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
            helpers: StringHelper::ALL.to_vec(),
        }
    }

    /// Context for a resolved request: `name`, `path`, `project` and every
    /// caller variable.
    pub fn from_options(options: &ResolvedOptions) -> Self {
        let mut ctx = Self::new();
        for (key, value) in &options.variables {
            ctx.values.insert(key.clone(), value.clone());
        }
        ctx.values.insert("name".into(), options.name.clone());
        ctx.values.insert("path".into(), options.path.clone());
        ctx.values.insert("project".into(), options.project.clone());
        ctx
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Restrict the helpers templates may call.
    pub fn with_helpers(mut self, helpers: impl IntoIterator<Item = StringHelper>) -> Self {
        self.helpers = helpers.into_iter().collect();
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Replace every `<%= expr %>` in `content`.
    pub fn render_content(&self, file: &str, content: &str) -> Result<String, DomainError> {
        substitute(&CONTENT_PLACEHOLDER, content, |expr| {
            self.evaluate(expr).map_err(|reason| render_error(file, expr, reason))
        })
    }

    /// Replace every `__key@helper__` marker in `path`.
    ///
    /// Markers never span segments. A substituted value may not introduce a
    /// separator, and no rendered segment may be empty, `.` or `..`.
    pub fn render_path(&self, path: &str) -> Result<String, DomainError> {
        let rendered = substitute(&PATH_MARKER, path, |marker| {
            let value = self
                .evaluate_marker(marker)
                .map_err(|reason| render_error(path, marker, reason))?;
            if value.contains(name::is_separator) {
                return Err(render_error(
                    path,
                    marker,
                    format!("value '{value}' contains a path separator"),
                ));
            }
            Ok(value)
        })?;

        let relative = rendered.strip_prefix('/').unwrap_or(&rendered);
        if let Some(segment) = relative
            .split('/')
            .find(|s| s.is_empty() || *s == "." || *s == "..")
        {
            return Err(render_error(
                path,
                path,
                format!("rendered path '{rendered}' has an invalid segment '{segment}'"),
            ));
        }
        Ok(rendered)
    }

    fn helper(&self, name: &str) -> Result<StringHelper, String> {
        self.helpers
            .iter()
            .copied()
            .find(|h| h.as_str() == name)
            .ok_or_else(|| format!("unknown helper '{name}'"))
    }

    fn lookup(&self, key: &str) -> Result<String, String> {
        if !is_identifier(key) {
            return Err(format!("'{key}' is not a valid key"));
        }
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| format!("no value for '{key}'"))
    }

    /// `key` or `helper(expr)`.
    fn evaluate(&self, expr: &str) -> Result<String, String> {
        let expr = expr.trim();
        let Some(open) = expr.find('(') else {
            return self.lookup(expr);
        };
        let Some(call) = expr.strip_suffix(')') else {
            return Err(format!("unbalanced parentheses in '{expr}'"));
        };

        let helper = self.helper(call[..open].trim())?;
        let argument = self.evaluate(&call[open + 1..])?;
        Ok(helper.apply(&argument))
    }

    /// `key` followed by any number of `@helper`.
    fn evaluate_marker(&self, marker: &str) -> Result<String, String> {
        let mut parts = marker.split('@');
        let key = parts.next().unwrap_or_default();
        let mut value = self.lookup(key)?;
        for helper in parts {
            value = self.helper(helper)?.apply(&value);
        }
        Ok(value)
    }
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::new()
    }
}

fn substitute<F>(pattern: &Regex, input: &str, mut eval: F) -> Result<String, DomainError>
where
    F: FnMut(&str) -> Result<String, DomainError>,
{
    let mut out = String::with_capacity(input.len());
    let mut last = 0;

    for caps in pattern.captures_iter(input) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        out.push_str(&input[last..whole.start()]);
        out.push_str(&eval(inner.as_str())?);
        last = whole.end();
    }

    out.push_str(&input[last..]);
    Ok(out)
}

fn render_error(file: &str, placeholder: &str, reason: String) -> DomainError {
    DomainError::TemplateRender {
        file: file.to_string(),
        placeholder: placeholder.trim().to_string(),
        reason,
    }
}
