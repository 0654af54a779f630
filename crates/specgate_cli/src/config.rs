//! `specgate.toml` discovery and parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use specgate_lint::LintConfig;

/// Spec documents probed when neither `--spec` nor `spec_path` is set.
const DEFAULT_SPEC_PATHS: &[&str] = &[
    "libspec.json",
    "libspec.yaml",
    "libspec.yml",
    "specs/libspec.json",
    "specs/libspec.yaml",
];

/// Contents of `specgate.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the spec document, relative to the config file.
    pub spec_path: Option<PathBuf>,
    /// The `[lint]` table.
    pub lint: LintConfig,
}

impl AppConfig {
    /// Load the nearest `specgate.toml`, walking up from `start`.
    /// Returns defaults when no config file exists.
    pub fn discover(start: &Path) -> Result<Self> {
        let mut dir = Some(start);
        while let Some(current) = dir {
            let candidate = current.join("specgate.toml");
            if candidate.exists() {
                debug!(path = %candidate.display(), "loading config");
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let mut config: AppConfig = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                if let Some(spec_path) = config.spec_path.take() {
                    config.spec_path = Some(current.join(spec_path));
                }
                return Ok(config);
            }
            dir = current.parent();
        }
        Ok(Self::default())
    }

    /// Load config from the working directory.
    pub fn load() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::discover(&cwd)
    }

    /// Resolve the spec document path: explicit argument, configured
    /// `spec_path`, then the conventional locations.
    pub fn resolve_spec(&self, arg: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = arg {
            return Ok(path);
        }
        if let Some(path) = &self.spec_path {
            return Ok(path.clone());
        }
        for candidate in DEFAULT_SPEC_PATHS {
            let path = PathBuf::from(candidate);
            if path.exists() {
                return Ok(path);
            }
        }
        anyhow::bail!("No spec document found (pass --spec or set spec_path in specgate.toml)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discover_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("specgate.toml"),
            "spec_path = \"specs/libspec.json\"\n\n[lint]\ndisable = [\"S007\"]\n",
        )
        .unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = AppConfig::discover(&nested).unwrap();
        assert_eq!(
            config.spec_path.as_deref(),
            Some(dir.path().join("specs/libspec.json").as_path())
        );
        assert_eq!(config.lint.disable, vec!["S007"]);
    }

    #[test]
    fn test_missing_config_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::discover(dir.path()).unwrap();
        assert!(config.spec_path.is_none());
        assert_eq!(config.lint.enable, vec!["all"]);
    }
}
