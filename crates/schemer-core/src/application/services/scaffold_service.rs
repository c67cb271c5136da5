//! Scaffold Service - main application orchestrator.
//!
//! This service runs one generation rule end to end:
//! 1. Load and parse the workspace file from the tree
//! 2. Resolve the project and its default output path
//! 3. Normalize name and path
//! 4. Render the template pipeline into a change set
//! 5. Merge the change set into the tree
//!
//! Steps 1-4 never write. Step 5 is a single atomic `ProjectTree::apply`, so a
//! failure anywhere leaves the tree exactly as it was.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ProjectTree, TemplateSource},
    },
    domain::{
        ChangeSet, DomainError, GenerationOptions, MergeReport, MergeStrategy, ResolvedOptions,
        TemplateContext, TemplatePipeline, WORKSPACE_CONFIG_PATH, WorkspaceConfig, name,
        parse_name,
    },
    error::SchemerResult,
};

/// Everything a run would write, computed without touching the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub options: ResolvedOptions,
    /// `path/name`, the directory every rendered file lands under.
    pub destination: String,
    pub changes: ChangeSet,
}

/// Main scaffolding service.
///
/// Orchestrates workspace resolution, template rendering, and the merge.
pub struct ScaffoldService {
    templates: Box<dyn TemplateSource>,
    merge_strategy: MergeStrategy,
}

impl ScaffoldService {
    /// Create a new scaffold service rendering files from `templates`.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use schemer_core::application::ScaffoldService;
    /// use schemer_core::domain::MergeStrategy;
    ///
    /// let service = ScaffoldService::new(templates) // impl TemplateSource
    ///     .with_merge_strategy(MergeStrategy::Error);
    /// ```
    pub fn new(templates: Box<dyn TemplateSource>) -> Self {
        Self {
            templates,
            merge_strategy: MergeStrategy::default(),
        }
    }

    pub fn with_merge_strategy(mut self, strategy: MergeStrategy) -> Self {
        self.merge_strategy = strategy;
        self
    }

    pub fn merge_strategy(&self) -> MergeStrategy {
        self.merge_strategy
    }

    /// Run the rule against `tree`.
    ///
    /// This is the main use case - render the templates for `options` and
    /// merge them into the host's tree.
    #[instrument(
        skip_all,
        fields(
            name = %options.name,
            project = options.project.as_deref().unwrap_or("<default>"),
            strategy = %self.merge_strategy
        )
    )]
    pub fn scaffold(
        &self,
        tree: &mut dyn ProjectTree,
        options: GenerationOptions,
    ) -> SchemerResult<MergeReport> {
        let plan = self.plan(&*tree, options)?;
        info!(
            destination = %plan.destination,
            files = plan.changes.len(),
            "Pipeline rendered"
        );

        let report = self.merge(tree, plan.changes)?;
        info!(
            created = report.created.len(),
            overwritten = report.overwritten.len(),
            "Scaffold completed successfully"
        );
        Ok(report)
    }

    /// Resolve options and render the pipeline without merging.
    pub fn plan(
        &self,
        tree: &dyn ProjectTree,
        options: GenerationOptions,
    ) -> SchemerResult<ScaffoldPlan> {
        // 1. Validate request
        options.validate()?;

        // 2. Load workspace
        let workspace = load_workspace(tree)?;
        debug!(projects = workspace.projects.len(), "Workspace loaded");

        // 3. Resolve project, path and name
        let resolved = resolve_options(&workspace, options)?;
        info!(
            project = %resolved.project,
            path = %resolved.path,
            name = %resolved.name,
            "Options resolved"
        );

        // 4. Build and run the pipeline
        let destination = name::join(&resolved.path, &resolved.name);
        let pipeline =
            TemplatePipeline::standard(TemplateContext::from_options(&resolved), &destination);

        debug!(source = %self.templates.describe(), "Loading templates");
        let files = self.templates.load()?;
        let changes = pipeline.run(files)?;

        Ok(ScaffoldPlan {
            options: resolved,
            destination,
            changes,
        })
    }

    /// Merge `changes` into `tree` according to the configured strategy.
    pub fn merge(
        &self,
        tree: &mut dyn ProjectTree,
        changes: ChangeSet,
    ) -> SchemerResult<MergeReport> {
        let report = changes.classify(|path| tree.exists(path));

        if report.has_conflicts() {
            match self.merge_strategy {
                MergeStrategy::Error => {
                    return Err(ApplicationError::MergeConflict {
                        paths: report.overwritten,
                    }
                    .into());
                }
                MergeStrategy::Overwrite => {
                    for path in &report.overwritten {
                        warn!(path = %path, "Overwriting existing file");
                    }
                }
            }
        }

        tree.apply(changes)?;
        Ok(report)
    }
}

// -------------------------------------------------------------------------
// Internal Helpers
// -------------------------------------------------------------------------

/// Read and parse the workspace file.
fn load_workspace(tree: &dyn ProjectTree) -> SchemerResult<WorkspaceConfig> {
    let content = tree
        .read(WORKSPACE_CONFIG_PATH)?
        .ok_or_else(|| ApplicationError::ConfigNotFound {
            path: WORKSPACE_CONFIG_PATH.to_string(),
        })?;

    WorkspaceConfig::from_json(&content).map_err(|e| {
        ApplicationError::ConfigParse {
            path: WORKSPACE_CONFIG_PATH.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Fill in project and path defaults, then split the name.
fn resolve_options(
    workspace: &WorkspaceConfig,
    options: GenerationOptions,
) -> SchemerResult<ResolvedOptions> {
    let (project, config) = workspace.resolve_project(options.project.as_deref())?;

    let base = match options.path {
        Some(path) => path,
        None => {
            let path = config.default_output_path();
            debug!(path = %path, project_type = %config.project_type, "Using default path");
            path
        }
    };

    let parsed = parse_name(&base, &options.name);
    if matches!(parsed.name.as_str(), "" | "." | "..") {
        return Err(DomainError::InvalidName { raw: options.name }.into());
    }

    Ok(ResolvedOptions {
        project: project.to_string(),
        name: parsed.name,
        path: parsed.path,
        variables: options.variables,
    })
}
