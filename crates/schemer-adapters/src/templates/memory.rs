//! Template source over a fixed file set.

use schemer_core::{application::ports::TemplateSource, domain::FileSet, error::SchemerResult};

use crate::builtin_templates;

/// Serves the same [`FileSet`] on every load.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTemplates {
    label: String,
    files: FileSet,
}

impl InMemoryTemplates {
    pub fn new(label: impl Into<String>, files: FileSet) -> Self {
        Self {
            label: label.into(),
            files,
        }
    }

    /// The built-in component templates.
    pub fn component() -> Self {
        Self::new("builtin:component", builtin_templates::component())
    }
}

impl TemplateSource for InMemoryTemplates {
    fn describe(&self) -> String {
        self.label.clone()
    }

    fn load(&self) -> SchemerResult<FileSet> {
        Ok(self.files.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_are_repeatable() {
        let source = InMemoryTemplates::new("test", FileSet::new().with_file("a", "1"));
        assert_eq!(source.load().unwrap(), source.load().unwrap());
        assert_eq!(source.describe(), "test");
    }

    #[test]
    fn component_source_is_not_empty() {
        assert!(!InMemoryTemplates::component().load().unwrap().is_empty());
    }
}
