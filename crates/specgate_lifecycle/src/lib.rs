//! # specgate_lifecycle
//!
//! Lifecycle and workflow engine for spec documents.
//!
//! Given a loaded library, this crate resolves each entity's effective
//! workflow, matches transition gates against declared evidence, checks
//! cross-entity maturity requirements, validates legacy state graphs,
//! and produces the ready/blocked report the CLI presents.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use specgate_model::DocumentLoader;
//! use specgate_lifecycle::LifecycleReport;
//!
//! let doc = DocumentLoader::load(Path::new("spec.json")).unwrap();
//! let report = LifecycleReport::assess(&doc.library).unwrap();
//! for status in report.blocked() {
//!     println!("{}: {:?}", status.entity.entity_ref, status.blocked_reasons);
//! }
//! ```

pub mod diagnostics;
pub mod error;
pub mod gates;
pub mod report;
pub mod requirements;
pub mod tracked;

pub use diagnostics::{workflow_diagnostics, WorkflowDiagnostic};
pub use error::{LifecycleError, LifecycleResult};
pub use gates::{evidence_kinds, gate_evidence_kind, gate_statuses, GateStatus};
pub use report::{EntityStatus, LifecycleReport};
pub use requirements::requirement_satisfied;
pub use tracked::{collect_maturities, collect_tracked, EntityKind, TrackedEntity};
