//! Generation pass driver and its build-script facing configuration.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::diagnostics::{CargoDiagnostics, Diagnostics};
use crate::discovery::discover;
use crate::emit::{DirectorySink, OutputSink, emit};
use crate::model::{Declaration, GenerationOptions, SetterStyle};
use crate::scanner::scan_directory;
use crate::synth::synthesize;

/// Directory (below `OUT_DIR`) that builders are written to by default.
pub const DEFAULT_OUTPUT_SUBDIR: &str = "swagger_builders";

/// Outcome of one generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Fully qualified names of the builders written, in request order.
    pub generated: Vec<String>,
    /// One message per failed request.
    pub failures: Vec<String>,
}

impl GenerationReport {
    /// Requests seen by the pass, successful or not.
    pub fn total(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Run discovery, synthesis and emission over `declarations`.
///
/// A failing request is reported through `diagnostics` and does not stop the
/// remaining ones; the pass itself always completes.
pub fn generate(
    declarations: &[Declaration],
    options: &GenerationOptions,
    sink: &mut dyn OutputSink,
    diagnostics: &mut dyn Diagnostics,
) -> GenerationReport {
    let mut report = GenerationReport::default();

    for entry in discover(declarations) {
        let discovered = match entry {
            Ok(discovered) => discovered,
            Err(err) => {
                log::warn!("{err}");
                diagnostics.error(&err.to_string());
                report.failures.push(err.to_string());
                continue;
            }
        };

        diagnostics.note(&format!(
            "Processing `{}::{}`",
            discovered.source.module_path, discovered.source.name
        ));

        let written = synthesize(&discovered.source, &discovered.request, options).and_then(|spec| emit(&spec, &mut *sink));

        match written {
            Ok(slot) => {
                log::info!("generated {slot}");
                diagnostics.note(&format!("Generated builder `{slot}`"));
                report.generated.push(slot.fully_qualified_name().to_string());
            }
            Err(err) => {
                log::warn!("{err}");
                diagnostics.error(&err.to_string());
                report.failures.push(err.to_string());
            }
        }
    }

    report
}

/// Builder for configuring and running the generator from a build script.
pub struct BuilderGenerator {
    scan_paths: Vec<PathBuf>,
    output_dir: Option<PathBuf>,
    crate_name: String,
    setter_style: SetterStyle,
}

impl BuilderGenerator {
    /// Create a new generator with default settings.
    pub fn new() -> Self {
        Self {
            scan_paths: Vec::new(),
            output_dir: None,
            crate_name: "crate".to_string(),
            setter_style: SetterStyle::default(),
        }
    }

    /// Add a path to scan for annotated structs.
    ///
    /// Can be called multiple times to scan multiple directories.
    pub fn scan_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scan_paths.push(path.into());
        self
    }

    /// Set the directory generated builders are written to.
    ///
    /// Default: `$OUT_DIR/swagger_builders`, or `target/swagger_builders`
    /// outside of a build script.
    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(path.into());
        self
    }

    /// Set the module path prefix of the scanned directory.
    ///
    /// Default: `crate`
    pub fn crate_name(mut self, name: impl Into<String>) -> Self {
        self.crate_name = name.into();
        self
    }

    /// Set how target setters are named.
    ///
    /// Default: [`SetterStyle::Prefixed`]
    pub fn setter_style(mut self, style: SetterStyle) -> Self {
        self.setter_style = style;
        self
    }

    pub fn resolved_scan_paths(&self) -> Vec<PathBuf> {
        if self.scan_paths.is_empty() {
            vec![PathBuf::from("src/")]
        } else {
            self.scan_paths.clone()
        }
    }

    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) => dir.clone(),
            None => std::env::var_os("OUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("target"))
                .join(DEFAULT_OUTPUT_SUBDIR),
        }
    }

    /// Options applied to every request of a pass.
    pub fn options(&self) -> GenerationOptions {
        GenerationOptions {
            setter_style: self.setter_style,
        }
    }

    /// Collect the declarations of every configured scan path.
    pub fn scan(&self, diagnostics: &mut dyn Diagnostics) -> Result<Vec<Declaration>> {
        let mut declarations = Vec::new();
        for path in self.resolved_scan_paths() {
            let found = scan_directory(&path, &self.crate_name, diagnostics)
                .with_context(|| format!("Failed to scan {}", path.display()))?;
            declarations.extend(found);
        }
        Ok(declarations)
    }

    /// Run the generator, writing to the output directory and reporting to cargo.
    pub fn run(self) -> Result<GenerationReport> {
        let mut sink = DirectorySink::new(self.resolved_output_dir());
        self.run_with(&mut sink, &mut CargoDiagnostics)
    }

    /// Run the generator against an explicit sink and diagnostics channel.
    ///
    /// Only scanning can fail the whole run; per-request failures end up in
    /// the report.
    pub fn run_with(&self, sink: &mut dyn OutputSink, diagnostics: &mut dyn Diagnostics) -> Result<GenerationReport> {
        diagnostics.note("swagger-builder generator is running");

        let declarations = self.scan(diagnostics)?;
        let report = generate(&declarations, &self.options(), sink, diagnostics);

        log::info!(
            "swagger-builder: generated {} of {} builders",
            report.generated.len(),
            report.total()
        );

        Ok(report)
    }
}

impl Default for BuilderGenerator {
    fn default() -> Self {
        Self::new()
    }
}
