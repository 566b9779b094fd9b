//! Build-time generator for fluent builders.
//!
//! This crate scans your source files for structs annotated with
//! `#[swagger_builder(target = ...)]` and generates, for every request, a
//! builder that collects the struct's fields and produces the target type by
//! calling its setters.
//!
//! # Example
//!
//! In your `build.rs`:
//!
//! ```ignore
//! fn main() {
//!     swagger_builder_build::generate_builders()
//!         .scan_path("src/")
//!         .run()
//!         .expect("Failed to generate builders");
//!
//!     println!("cargo:rerun-if-changed=src/");
//! }
//! ```
//!
//! Each builder lands in `$OUT_DIR/swagger_builders/<module>.<Builder>.rs` and
//! is pulled into the source module with `include!`.

mod diagnostics;
mod discovery;
mod emit;
mod error;
mod generator;
mod model;
mod resolver;
mod scanner;
mod synth;

pub use diagnostics::{CargoDiagnostics, CollectingDiagnostics, Diagnostic, Diagnostics, Level, LogDiagnostics};
pub use discovery::{
    Discovered, RENAME_ATTR, REQUEST_ATTR, REQUEST_LIST_ATTR, builder_requests, discover, discover_declaration,
    has_builder_metadata, rename_directive,
};
pub use emit::{DirectorySink, MemorySink, OutputSink, builder_tokens, emit, render};
pub use error::GenerateError;
pub use generator::{BuilderGenerator, DEFAULT_OUTPUT_SUBDIR, GenerationReport, generate};
pub use model::{
    BuilderField, BuilderRequest, BuilderSpec, DEFAULT_BUILDER_SUFFIX, Declaration, FieldDescriptor, GenerationOptions,
    OutputSlot, SetterStyle, SourceType, TargetRef, path_to_string, type_to_string,
};
pub use resolver::{capitalize, resolve_target_field, setter_name};
pub use scanner::{parse_source, scan_directory};
pub use synth::{RESERVED_FIELD_NAMES, builder_class_name, synthesize};

/// Create a new builder generator with default settings.
///
/// # Example
///
/// ```ignore
/// swagger_builder_build::generate_builders()
///     .scan_path("src/models")
///     .crate_name("crate::models")
///     .run()
///     .expect("Failed to generate builders");
/// ```
pub fn generate_builders() -> BuilderGenerator {
    BuilderGenerator::new()
}
