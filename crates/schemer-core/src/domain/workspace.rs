//! Workspace model: the projects a rule can target.
//!
//! The workspace file is owned by the host tooling; only the handful of keys
//! this crate needs are modelled and everything else is ignored on
//! deserialization.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, name};

/// Well-known location of the workspace file inside a project tree.
pub const WORKSPACE_CONFIG_PATH: &str = "/angular.json";

/// Deserialized workspace file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceConfig {
    #[serde(default)]
    pub default_project: Option<String>,
    #[serde(default)]
    pub projects: BTreeMap<String, ProjectConfig>,
}

/// One workspace member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub project_type: ProjectType,
    pub source_root: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Application,
    Library,
}

impl ProjectType {
    /// Folder under `sourceRoot` that generated artifacts land in by default.
    pub const fn output_segment(self) -> &'static str {
        match self {
            Self::Application => "app",
            Self::Library => "lib",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => write!(f, "application"),
            Self::Library => write!(f, "library"),
        }
    }
}

impl ProjectConfig {
    /// Directory used when the caller does not pass an explicit path.
    pub fn default_output_path(&self) -> String {
        format!(
            "{}{}{}",
            self.source_root,
            name::SEPARATOR,
            self.project_type.output_segment()
        )
    }
}

impl WorkspaceConfig {
    /// Parse the JSON text of a workspace file.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Resolve the project a rule runs against.
    ///
    /// An explicit name wins; otherwise the workspace default is used. Either
    /// way the project must be declared in `projects`.
    pub fn resolve_project(
        &self,
        requested: Option<&str>,
    ) -> Result<(&str, &ProjectConfig), DomainError> {
        let project = match requested.or(self.default_project.as_deref()) {
            Some(project) => project,
            None => {
                return Err(DomainError::NoDefaultProject {
                    available: self.project_names(),
                });
            }
        };

        self.projects
            .get_key_value(project)
            .map(|(name, config)| (name.as_str(), config))
            .ok_or_else(|| DomainError::UnresolvedProject {
                project: project.to_string(),
                available: self.project_names(),
            })
    }

    /// Declared project names in sorted order.
    pub fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORKSPACE: &str = r#"{
        "version": 1,
        "newProjectRoot": "projects",
        "defaultProject": "demo",
        "projects": {
            "demo": {
                "root": "",
                "projectType": "application",
                "sourceRoot": "src",
                "architect": {}
            },
            "ui-kit": {
                "projectType": "library",
                "sourceRoot": "projects/ui-kit/src"
            }
        }
    }"#;

    #[test]
    fn parses_and_ignores_unknown_keys() {
        let ws = WorkspaceConfig::from_json(WORKSPACE).unwrap();
        assert_eq!(ws.default_project.as_deref(), Some("demo"));
        assert_eq!(ws.projects.len(), 2);
        assert_eq!(ws.projects["ui-kit"].project_type, ProjectType::Library);
    }

    #[test]
    fn rejects_unknown_project_type() {
        let json = r#"{"projects":{"x":{"projectType":"plugin","sourceRoot":"src"}}}"#;
        assert!(WorkspaceConfig::from_json(json).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(WorkspaceConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn omitted_project_falls_back_to_default() {
        let ws = WorkspaceConfig::from_json(WORKSPACE).unwrap();
        let (implicit, implicit_cfg) = ws.resolve_project(None).unwrap();
        let (explicit, explicit_cfg) = ws.resolve_project(Some("demo")).unwrap();
        assert_eq!(implicit, "demo");
        assert_eq!(implicit, explicit);
        assert_eq!(implicit_cfg, explicit_cfg);
    }

    #[test]
    fn explicit_project_wins_over_default() {
        let ws = WorkspaceConfig::from_json(WORKSPACE).unwrap();
        let (name, _) = ws.resolve_project(Some("ui-kit")).unwrap();
        assert_eq!(name, "ui-kit");
    }

    #[test]
    fn missing_project_is_reported_with_known_names() {
        let ws = WorkspaceConfig::from_json(WORKSPACE).unwrap();
        let err = ws.resolve_project(Some("missing")).unwrap_err();
        assert_eq!(
            err,
            DomainError::UnresolvedProject {
                project: "missing".into(),
                available: vec!["demo".into(), "ui-kit".into()],
            }
        );
    }

    #[test]
    fn missing_default_is_reported() {
        let ws = WorkspaceConfig::from_json(r#"{"projects":{}}"#).unwrap();
        assert!(matches!(
            ws.resolve_project(None),
            Err(DomainError::NoDefaultProject { .. })
        ));
    }

    #[test]
    fn default_output_path_depends_on_type() {
        let ws = WorkspaceConfig::from_json(WORKSPACE).unwrap();
        assert_eq!(ws.projects["demo"].default_output_path(), "src/app");
        assert_eq!(
            ws.projects["ui-kit"].default_output_path(),
            "projects/ui-kit/src/lib"
        );
    }
}
