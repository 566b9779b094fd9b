use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Table};
use serde::Serialize;
use std::path::PathBuf;

use swagger_builder_build::{
    CollectingDiagnostics, DirectorySink, GenerationReport, Level, MemorySink, OutputSlot,
};

use super::ScanArgs;
use crate::context::ProjectContext;
use crate::output::{OutputManager, TableDisplay};

pub const EXAMPLES: &str = "\
Examples:
  swagger-builder generate                          # use swagger-builder.toml or defaults
  swagger-builder generate --scan src/models        # scan a single directory
  swagger-builder generate --out src/generated      # write builders somewhere else
  swagger-builder generate --dry-run                # print builders without writing
  swagger-builder --output json generate --dry-run  # machine-readable preview
";

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub scan: ScanArgs,

    /// Directory generated builders are written to
    #[arg(long = "out", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Print the generated builders instead of writing them
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Serialize)]
struct GeneratedBuilder {
    builder: String,
    file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

#[derive(Debug, Serialize)]
struct GenerateSummary {
    output_dir: String,
    dry_run: bool,
    generated: Vec<GeneratedBuilder>,
    failures: Vec<String>,
}

impl GenerateSummary {
    fn new(report: &GenerationReport, output_dir: String, preview: Option<&MemorySink>) -> Self {
        let generated = report
            .generated
            .iter()
            .map(|name| GeneratedBuilder {
                builder: name.clone(),
                file: OutputSlot::new(name.as_str()).file_name(),
                code: preview.and_then(|sink| sink.get(name)).map(str::to_string),
            })
            .collect();

        Self {
            output_dir,
            dry_run: preview.is_some(),
            generated,
            failures: report.failures.clone(),
        }
    }
}

impl TableDisplay for GenerateSummary {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.table(&["Builder", "File"]);
        for builder in &self.generated {
            table.add_row(vec![Cell::new(&builder.builder), Cell::new(&builder.file)]);
        }
        table
    }

    fn to_compact(&self) -> String {
        format!(
            "generated={} failed={} dry_run={}",
            self.generated.len(),
            self.failures.len(),
            self.dry_run
        )
    }
}

pub fn handle_generate(args: GenerateArgs, output: &OutputManager) -> Result<()> {
    let ctx = ProjectContext::find()?;
    if ctx.config.is_some() {
        output.verbose(&format!("Using {}", ctx.config_path.display()));
    }

    let mut overrides = args.scan.overrides();
    overrides.output_dir = args.output_dir.clone();
    let generator = ctx.generator(&overrides)?;
    let output_dir = generator.resolved_output_dir();

    output.heading("Generating builders");
    for path in generator.resolved_scan_paths() {
        output.path(&path.display().to_string());
    }

    let mut diagnostics = CollectingDiagnostics::new();
    let (report, preview) = if args.dry_run {
        let mut sink = MemorySink::new();
        let report = generator.run_with(&mut sink, &mut diagnostics)?;
        (report, Some(sink))
    } else {
        let mut sink = DirectorySink::new(&output_dir);
        (generator.run_with(&mut sink, &mut diagnostics)?, None)
    };

    for diagnostic in &diagnostics.messages {
        match diagnostic.level {
            Level::Note => output.verbose(&diagnostic.message),
            Level::Error => output.error(&diagnostic.message),
        }
    }

    let summary = GenerateSummary::new(&report, output_dir.display().to_string(), preview.as_ref());

    if report.total() == 0 {
        output.warning("No builder requests found");
        return Ok(());
    }

    output.display(&summary)?;

    if output.is_human() {
        if args.dry_run {
            for builder in &summary.generated {
                if let Some(code) = &builder.code {
                    output.heading(&builder.file);
                    println!("{code}");
                }
            }
        } else {
            output.key_value("Output", &summary.output_dir);
        }
    }

    if report.has_failures() {
        output.warning(&format!(
            "{} of {} builder requests failed",
            report.failures.len(),
            report.total()
        ));
    } else {
        output.success(&format!("Generated {} builders", report.generated.len()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_files_and_preview() {
        let report = GenerationReport {
            generated: vec!["crate::custom::MyUserBuilder".to_string()],
            failures: vec!["broken".to_string()],
        };
        let mut sink = MemorySink::new();
        swagger_builder_build::OutputSink::write_slot(
            &mut sink,
            &OutputSlot::new("crate::custom::MyUserBuilder"),
            "pub struct MyUserBuilder {}\n",
        )
        .unwrap();

        let summary = GenerateSummary::new(&report, "out".to_string(), Some(&sink));
        assert!(summary.dry_run);
        assert_eq!(summary.generated[0].file, "custom.MyUserBuilder.rs");
        assert_eq!(
            summary.generated[0].code.as_deref(),
            Some("pub struct MyUserBuilder {}\n")
        );
        assert_eq!(summary.to_compact(), "generated=1 failed=1 dry_run=true");
    }

    #[test]
    fn test_summary_without_preview_omits_code() {
        let report = GenerationReport {
            generated: vec!["crate::AccountBuilder".to_string()],
            failures: Vec::new(),
        };
        let summary = GenerateSummary::new(&report, "out".to_string(), None);
        assert!(!summary.dry_run);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["generated"][0]["file"], "AccountBuilder.rs");
        assert!(json["generated"][0].get("code").is_none());
    }
}
