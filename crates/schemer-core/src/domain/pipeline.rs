//! Ordered template pipeline.
//!
//! A pipeline is a list of discrete steps sharing one [`TemplateContext`]. The
//! runner applies them in insertion order to a [`FileSet`]; nothing touches a
//! project tree until the resulting [`ChangeSet`] is merged by the caller.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, instrument};

use crate::domain::{
    change_set::ChangeSet,
    error::DomainError,
    name,
    template::{FileSet, TEMPLATE_SUFFIX, TemplateContext, TemplateFile},
};

/// One transform over the whole file set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineStep {
    /// Substitute file-name markers and strip the `.template` suffix.
    RenameTemplateFiles,
    /// Substitute `<%= expr %>` placeholders in file contents.
    RenderContents,
    /// Prefix every path with an absolute directory.
    MoveTo(String),
}

impl PipelineStep {
    fn apply(&self, files: FileSet, ctx: &TemplateContext) -> Result<FileSet, DomainError> {
        match self {
            Self::RenameTemplateFiles => files.try_map(|file| {
                let path = ctx.render_path(&file.path)?;
                let path = match path.strip_suffix(TEMPLATE_SUFFIX) {
                    Some(stripped) if !stripped.is_empty() => stripped.to_string(),
                    _ => path,
                };
                Ok(TemplateFile { path, ..file })
            }),
            Self::RenderContents => files.try_map(|file| {
                let content = ctx.render_content(&file.path, &file.content)?;
                Ok(TemplateFile { content, ..file })
            }),
            Self::MoveTo(dir) => {
                let root = name::normalize(dir);
                files.try_map(|file| {
                    let path = name::join(&root, &file.path);
                    if !is_inside(&path, &root) {
                        return Err(DomainError::TemplateRender {
                            file: file.path,
                            placeholder: self.to_string(),
                            reason: format!("'{path}' falls outside '{root}'"),
                        });
                    }
                    Ok(TemplateFile { path, ..file })
                })
            }
        }
    }
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RenameTemplateFiles => write!(f, "rename-template-files"),
            Self::RenderContents => write!(f, "render-contents"),
            Self::MoveTo(dir) => write!(f, "move-to({dir})"),
        }
    }
}

/// Steps plus the context they render against.
#[derive(Debug, Clone)]
pub struct TemplatePipeline {
    context: TemplateContext,
    steps: Vec<PipelineStep>,
}

impl TemplatePipeline {
    pub fn new(context: TemplateContext) -> Self {
        Self {
            context,
            steps: Vec::new(),
        }
    }

    /// The standard rename → render → move pipeline targeting `destination`.
    pub fn standard(context: TemplateContext, destination: impl Into<String>) -> Self {
        Self::new(context)
            .step(PipelineStep::RenameTemplateFiles)
            .step(PipelineStep::RenderContents)
            .step(PipelineStep::MoveTo(destination.into()))
    }

    pub fn step(mut self, step: PipelineStep) -> Self {
        self.steps.push(step);
        self
    }

    pub fn steps(&self) -> &[PipelineStep] {
        &self.steps
    }

    pub fn context(&self) -> &TemplateContext {
        &self.context
    }

    /// Run every step in order and collect the output as a change set.
    ///
    /// Two template files rendering to the same path is an error naming both.
    #[instrument(skip_all, fields(files = files.len(), steps = self.steps.len()))]
    pub fn run(&self, files: FileSet) -> Result<ChangeSet, DomainError> {
        let sources: Vec<String> = files.paths().map(str::to_string).collect();
        let mut files = files;
        for step in &self.steps {
            debug!(step = %step, "applying pipeline step");
            files = step.apply(files, &self.context)?;
        }

        let mut changes = ChangeSet::new();
        let mut origin: BTreeMap<String, &str> = BTreeMap::new();
        for (file, source) in files.into_iter().zip(&sources) {
            let path = name::normalize(&file.path);
            if let Some(first) = origin.insert(path.clone(), source) {
                return Err(DomainError::TemplateRender {
                    file: source.clone(),
                    placeholder: first.to_string(),
                    reason: format!("'{first}' and '{source}' both render to '{path}'"),
                });
            }
            changes.insert(path, file.content);
        }
        Ok(changes)
    }
}

/// `path` lies strictly below the normalized directory `dir`.
fn is_inside(path: &str, dir: &str) -> bool {
    match path.strip_prefix(dir) {
        Some(rest) if dir == "/" => !rest.is_empty(),
        Some(rest) => rest.starts_with(name::SEPARATOR) && rest.len() > 1,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx() -> TemplateContext {
        TemplateContext::new().with_value("name", "widget")
    }

    fn files() -> FileSet {
        FileSet::new()
            .with_file(
                "__name@dasherize__.component.ts.template",
                "export class <%= classify(name) %>Component {}",
            )
            .with_file("README.md", "static")
    }

    #[test]
    fn standard_pipeline_renames_renders_and_moves() {
        let changes = TemplatePipeline::standard(ctx(), "/src/app/widget")
            .run(files())
            .unwrap();

        assert_eq!(
            changes.get("/src/app/widget/widget.component.ts"),
            Some("export class WidgetComponent {}")
        );
        assert_eq!(changes.get("/src/app/widget/README.md"), Some("static"));
        assert_eq!(changes.len(), 2);
    }

    #[test]
    fn steps_run_in_insertion_order() {
        // Moving first yields absolute paths; the later rename still works
        // because markers never span segments.
        let pipeline = TemplatePipeline::new(ctx())
            .step(PipelineStep::MoveTo("/out".into()))
            .step(PipelineStep::RenameTemplateFiles);
        let changes = pipeline.run(files()).unwrap();

        assert!(changes.contains("/out/widget.component.ts"));
        // Contents were never rendered.
        assert_eq!(
            changes.get("/out/widget.component.ts"),
            Some("export class <%= classify(name) %>Component {}")
        );
    }

    #[test]
    fn rename_keeps_bare_template_suffix_file() {
        let changes = TemplatePipeline::new(ctx())
            .step(PipelineStep::RenameTemplateFiles)
            .run(FileSet::new().with_file(".template", "x"))
            .unwrap();
        assert!(changes.contains("/.template"));
    }

    #[test]
    fn render_failure_aborts_whole_run() {
        let result = TemplatePipeline::standard(ctx(), "/out")
            .run(FileSet::new().with_file("a.ts", "<%= missing %>"));
        assert!(matches!(result, Err(DomainError::TemplateRender { .. })));
    }

    #[test]
    fn variable_cannot_move_files_out_of_destination() {
        let ctx = ctx().with_value("dir", "..");
        let result = TemplatePipeline::standard(ctx, "/src/app/widget")
            .run(FileSet::new().with_file("__dir__/evil.ts", "x"));
        assert!(matches!(result, Err(DomainError::TemplateRender { .. })));
    }

    #[test]
    fn move_rejects_paths_escaping_directory() {
        let result = TemplatePipeline::new(ctx())
            .step(PipelineStep::MoveTo("/src/app/widget".into()))
            .run(FileSet::new().with_file("../../evil.ts", "x"));
        match result {
            Err(DomainError::TemplateRender { file, reason, .. }) => {
                assert_eq!(file, "../../evil.ts");
                assert!(reason.contains("/src/evil.ts"), "{reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn files_rendering_to_same_path_fail() {
        let result = TemplatePipeline::standard(ctx(), "/out").run(
            FileSet::new()
                .with_file("a.ts", "first")
                .with_file("a.ts.template", "second"),
        );
        match result {
            Err(DomainError::TemplateRender { reason, .. }) => {
                assert!(reason.contains("'a.ts' and 'a.ts.template'"), "{reason}");
                assert!(reason.contains("/out/a.ts"), "{reason}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn markers_folding_to_same_name_fail() {
        let ctx = ctx().with_value("other", "Widget");
        let result = TemplatePipeline::standard(ctx, "/out").run(
            FileSet::new()
                .with_file("__name@classify__.ts", "a")
                .with_file("__other__.ts", "b"),
        );
        assert!(matches!(result, Err(DomainError::TemplateRender { .. })));
    }

    #[test]
    fn pipeline_exposes_steps() {
        let pipeline = TemplatePipeline::standard(ctx(), "/out");
        let names: Vec<String> = pipeline.steps().iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            vec!["rename-template-files", "render-contents", "move-to(/out)"]
        );
        assert_eq!(pipeline.context().get("name"), Some("widget"));
    }
}
