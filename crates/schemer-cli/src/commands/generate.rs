//! Implementation of the `schemer generate` command.
//!
//! Responsibility: translate CLI arguments into `GenerationOptions`, run the
//! rule against an in-memory snapshot of the workspace, and display the
//! resulting changes. Nothing is written to disk.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use schemer_adapters::{FilesystemTemplates, InMemoryTemplates, MemoryTree};
use schemer_core::{
    application::{ScaffoldService, ports::TemplateSource},
    domain::{ChangeSet, GenerationOptions, MergeReport, MergeStrategy, ResolvedOptions},
};

use crate::{
    cli::{GenerateArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult},
    output::{ChangeKind, OutputManager},
};

/// JSON document printed with `--output-format json`.
#[derive(Debug, Serialize)]
struct GenerateSummary<'a> {
    #[serde(flatten)]
    options: &'a ResolvedOptions,
    destination: &'a str,
    templates: String,
    strategy: MergeStrategy,
    created: &'a [String],
    overwritten: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<BTreeMap<&'a str, &'a str>>,
}

/// Execute the `schemer generate` command.
///
/// Dispatch sequence:
/// 1. Snapshot the workspace directory
/// 2. Pick the template source and merge strategy (flag, then config)
/// 3. Plan the generation (resolve, render)
/// 4. Merge into the snapshot
/// 5. Report
#[instrument(skip_all, fields(name = %args.name))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    // 1. Snapshot
    if !args.workspace.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!(
                "workspace directory '{}' does not exist",
                args.workspace.display()
            ),
        });
    }
    let mut tree = MemoryTree::load_dir(&args.workspace)?;
    debug!(files = tree.len(), "Workspace snapshot taken");

    // 2. Templates and strategy
    let templates = template_source(args.templates, &config);
    let describe = templates.describe();
    let strategy = args
        .on_conflict
        .map(MergeStrategy::from)
        .unwrap_or(config.merge.on_conflict);
    debug!(templates = %describe, strategy = %strategy, "Sources selected");

    let service = ScaffoldService::new(templates).with_merge_strategy(strategy);

    // 3. Plan
    let options = build_options(args.name, args.project, args.path, args.set);
    let plan = service.plan(&tree, options)?;

    // 4. Merge (keeps the rendered set for display)
    let report = service.merge(&mut tree, plan.changes.clone())?;
    info!(
        created = report.created.len(),
        overwritten = report.overwritten.len(),
        "Generation merged into snapshot"
    );

    // 5. Report
    if output.format() == OutputFormat::Json {
        let summary = GenerateSummary {
            options: &plan.options,
            destination: &plan.destination,
            templates: describe,
            strategy,
            created: &report.created,
            overwritten: &report.overwritten,
            files: args
                .show_content
                .then(|| plan.changes.iter().collect()),
        };
        return output.json(&summary);
    }

    show_report(
        &output,
        &plan.options,
        &plan.changes,
        &report,
        args.show_content,
    )
}

fn template_source(flag: Option<PathBuf>, config: &AppConfig) -> Box<dyn TemplateSource> {
    match flag.or_else(|| config.templates.local_path.clone()) {
        Some(dir) => Box::new(FilesystemTemplates::new(dir)),
        None => Box::new(InMemoryTemplates::component()),
    }
}

fn build_options(
    name: String,
    project: Option<String>,
    path: Option<String>,
    variables: Vec<(String, String)>,
) -> GenerationOptions {
    let mut options = GenerationOptions::new(name);
    if let Some(project) = project {
        options = options.project(project);
    }
    if let Some(path) = path {
        options = options.path(path);
    }
    variables
        .into_iter()
        .fold(options, |options, (key, value)| options.variable(key, value))
}

fn show_report(
    output: &OutputManager,
    options: &ResolvedOptions,
    changes: &ChangeSet,
    report: &MergeReport,
    show_content: bool,
) -> CliResult<()> {
    output.header(&format!(
        "Generating '{}' in project {} ({})",
        options.name, options.project, options.path
    ))?;

    for (path, content) in changes.iter() {
        let kind = if report.overwritten.iter().any(|p| p == path) {
            ChangeKind::Update
        } else {
            ChangeKind::Create
        };
        output.change(kind, path, content.len())?;
        if show_content {
            output.print(content)?;
        }
    }

    if report.has_conflicts() {
        output.warning(&format!(
            "{} existing file(s) would be overwritten",
            report.overwritten.len()
        ))?;
    }
    output.success(&format!(
        "{} file(s) generated ({} new, {} updated)",
        report.total(),
        report.created.len(),
        report.overwritten.len()
    ))?;
    output.info("Nothing was written to disk")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_carry_every_flag() {
        let options = build_options(
            "sub/widget".into(),
            Some("shop".into()),
            Some("/custom".into()),
            vec![("owner".into(), "core".into())],
        );
        assert_eq!(
            options,
            GenerationOptions::new("sub/widget")
                .project("shop")
                .path("/custom")
                .variable("owner", "core")
        );
    }

    #[test]
    fn builtin_templates_without_flag_or_config() {
        let source = template_source(None, &AppConfig::default());
        assert_eq!(source.describe(), "builtin:component");
    }

    #[test]
    fn flag_beats_config_template_dir() {
        let mut config = AppConfig::default();
        config.templates.local_path = Some(PathBuf::from("from-config"));

        assert_eq!(template_source(None, &config).describe(), "from-config");
        assert_eq!(
            template_source(Some(PathBuf::from("from-flag")), &config).describe(),
            "from-flag"
        );
    }
}
