use anyhow::Result;
use clap::Args;
use comfy_table::{Cell, Color as TableColor, Table};
use serde::Serialize;

use swagger_builder_build::{
    CollectingDiagnostics, Declaration, GenerationOptions, discover, synthesize, type_to_string,
};

use super::ScanArgs;
use crate::context::ProjectContext;
use crate::output::{OutputManager, TableDisplay};

pub const EXAMPLES: &str = "\
Examples:
  swagger-builder list                              # show every builder request
  swagger-builder list --scan src/models            # limit to one directory
  swagger-builder --output json list                # field-to-setter mappings as JSON
";

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    #[command(flatten)]
    pub scan: ScanArgs,
}

#[derive(Debug, Serialize)]
struct FieldMapping {
    field: String,
    #[serde(rename = "type")]
    ty: String,
    setter: String,
}

#[derive(Debug, Serialize)]
struct RequestRow {
    source: String,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    builder: Option<String>,
    fields: Vec<FieldMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(transparent)]
struct RequestListing(Vec<RequestRow>);

impl RequestListing {
    fn collect(declarations: &[Declaration], options: &GenerationOptions) -> Self {
        let rows = discover(declarations)
            .into_iter()
            .map(|entry| match entry {
                Ok(discovered) => {
                    let source = format!("{}::{}", discovered.source.module_path, discovered.source.name);
                    let target = discovered.request.target.display();
                    match synthesize(&discovered.source, &discovered.request, options) {
                        Ok(spec) => RequestRow {
                            source,
                            target,
                            builder: Some(spec.fully_qualified_name()),
                            fields: spec
                                .fields
                                .iter()
                                .map(|field| FieldMapping {
                                    field: field.ident.to_string(),
                                    ty: type_to_string(&field.ty),
                                    setter: field.setter.to_string(),
                                })
                                .collect(),
                            error: None,
                        },
                        Err(err) => RequestRow {
                            source,
                            target,
                            builder: None,
                            fields: Vec::new(),
                            error: Some(err.to_string()),
                        },
                    }
                }
                Err(err) => RequestRow {
                    source: "-".to_string(),
                    target: "-".to_string(),
                    builder: None,
                    fields: Vec::new(),
                    error: Some(err.to_string()),
                },
            })
            .collect();

        Self(rows)
    }
}

impl TableDisplay for RequestListing {
    fn to_table(&self, output: &OutputManager) -> Table {
        let mut table = output.table(&["Source", "Builder", "Target", "Setters"]);

        for row in &self.0 {
            let setters = row
                .fields
                .iter()
                .map(|mapping| format!("{} -> {}", mapping.field, mapping.setter))
                .collect::<Vec<_>>()
                .join("\n");

            let builder = match (&row.builder, &row.error) {
                (Some(builder), _) => Cell::new(builder),
                (None, Some(error)) if output.options.no_color => Cell::new(error),
                (None, Some(error)) => Cell::new(error).fg(TableColor::Red),
                (None, None) => Cell::new("-"),
            };

            table.add_row(vec![Cell::new(&row.source), builder, Cell::new(&row.target), Cell::new(setters)]);
        }

        table
    }

    fn to_compact(&self) -> String {
        self.0
            .iter()
            .map(|row| match &row.builder {
                Some(builder) => format!("{builder} -> {}", row.target),
                None => format!("{} !! {}", row.source, row.error.as_deref().unwrap_or("unknown error")),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn handle_list(args: ListArgs, output: &OutputManager) -> Result<()> {
    let ctx = ProjectContext::find()?;
    let generator = ctx.generator(&args.scan.overrides())?;

    let mut diagnostics = CollectingDiagnostics::new();
    let declarations = generator.scan(&mut diagnostics)?;
    for message in diagnostics.errors() {
        output.error(message);
    }

    let listing = RequestListing::collect(&declarations, &generator.options());
    log::debug!("{} declarations, {} requests", declarations.len(), listing.0.len());
    if listing.0.is_empty() {
        output.warning("No builder requests found");
        return Ok(());
    }

    output.heading("Builder requests");
    output.display(&listing)?;
    Ok(())
}
