//! # specgate_lint
//!
//! The spec validation engine: a registry of pluggable lint rules, the
//! reference index and requirement graph they share, and the runner
//! that executes a configured selection of rules over a loaded library.
//!
//! ## Features
//!
//! - **Rules**: ~40 built-in rules across structural, naming,
//!   completeness, consistency, maturity, extension, lifecycle, and
//!   version categories
//! - **Reference index**: the set of canonical pointers a document
//!   declares, shared by every consistency check
//! - **Requirement graph**: `requires` dependencies with cycle
//!   detection
//! - **Configuration**: enable/disable lists, per-rule severity
//!   overrides, and a minimum-severity output filter
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use specgate_model::DocumentLoader;
//! use specgate_lint::{LintConfig, LintRunner};
//!
//! let doc = DocumentLoader::load(Path::new("spec.json")).unwrap();
//! let runner = LintRunner::new(LintConfig::default());
//! for issue in runner.run(&doc.library, None, None) {
//!     println!("{} [{}] {}", issue.rule, issue.severity, issue.message);
//! }
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod index;
pub mod issue;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod runner;

pub use config::{LintConfig, RuleOverride};
pub use error::{LintError, LintResult};
pub use graph::RequirementGraph;
pub use index::ReferenceIndex;
pub use issue::{Issue, Severity};
pub use registry::RuleRegistry;
pub use rule::{Rule, RuleCategory};
pub use runner::{LintRunner, RuleInfo};
