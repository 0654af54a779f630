//! # specgate_model
//!
//! Typed data model for library spec documents.
//!
//! A spec document describes a library as structured data: its types,
//! functions, features, modules, and principles, each optionally
//! carrying a maturity stage, lifecycle state, evidence, and
//! requirements on other entities.
//!
//! ## Features
//!
//! - **Entities**: Typed definitions for types, methods, functions,
//!   features, modules, and principles
//! - **Maturity**: The eight-stage ordered lifecycle shared by all entities
//! - **Evidence**: Tagged evidence entries validated at load time
//! - **Workflows**: State machines and maturity gates governing progression
//! - **Loading**: JSON and YAML document loading by file extension
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use specgate_model::DocumentLoader;
//!
//! let doc = DocumentLoader::load(Path::new("spec.json")).unwrap();
//! for type_def in &doc.library.types {
//!     println!("{}: {:?}", type_def.name, type_def.maturity);
//! }
//! ```

pub mod entity;
pub mod error;
pub mod evidence;
pub mod library;
pub mod loader;
pub mod maturity;
pub mod refs;
pub mod workflow;

pub use entity::{
    Constructor, EnumValue, Feature, FeatureStatus, FunctionDef, GenericParam,
    GenericParamKind, Method, Module, Principle, Property, RaisesClause, Requirement,
    TypeDef, TypeKind,
};
pub use error::{ModelError, ModelResult};
pub use evidence::Evidence;
pub use library::{Document, Library};
pub use loader::DocumentLoader;
pub use maturity::Maturity;
pub use refs::CrossRef;
pub use workflow::{
    EvidenceTypeSpec, GateSpec, MaturityGate, StateSpec, TransitionSpec, Workflow,
};
