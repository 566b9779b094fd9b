use anyhow::Result;
use clap::ValueEnum;
use colored::{Color, Colorize};
use comfy_table::{Attribute, Cell, Color as TableColor, Table, presets};
use serde::Serialize;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted table output (default)
    #[default]
    Table,
    /// JSON output for scripting
    Json,
    /// One line per item
    Compact,
}

/// Flags shared by every subcommand.
#[derive(Clone, Debug, Default)]
pub struct GlobalOptions {
    pub output_format: OutputFormat,
    pub quiet: bool,
    pub verbose: bool,
    pub no_color: bool,
}

/// Command results that can be printed in every [`OutputFormat`].
pub trait TableDisplay {
    fn to_table(&self, output: &OutputManager) -> Table;
    fn to_compact(&self) -> String;
}

pub struct OutputManager {
    pub options: GlobalOptions,
}

impl OutputManager {
    pub fn new(options: GlobalOptions) -> Self {
        Self { options }
    }

    /// Status lines are only printed for people: never with `--quiet` or JSON.
    pub fn is_human(&self) -> bool {
        !self.options.quiet && self.options.output_format != OutputFormat::Json
    }

    pub fn display<T>(&self, data: &T) -> Result<()>
    where
        T: Serialize + TableDisplay,
    {
        if self.options.quiet {
            return Ok(());
        }

        match self.options.output_format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
            OutputFormat::Table => println!("{}", data.to_table(self)),
            OutputFormat::Compact => println!("{}", data.to_compact()),
        }
        Ok(())
    }

    pub fn success(&self, message: &str) {
        if self.is_human() {
            println!("{}", self.status("✓", Color::Green, message));
        }
    }

    pub fn warning(&self, message: &str) {
        if self.is_human() {
            println!("{}", self.status("⚠", Color::Yellow, message));
        }
    }

    /// Errors go to stderr even in quiet mode.
    pub fn error(&self, message: &str) {
        eprintln!("{}", self.status("✗", Color::Red, message));
    }

    /// Generator notes, shown with `--verbose`.
    pub fn verbose(&self, message: &str) {
        if self.options.verbose && !self.options.quiet {
            eprintln!("{}", self.status("→", Color::BrightBlack, message));
        }
    }

    pub fn heading(&self, text: &str) {
        if !self.is_human() {
            return;
        }
        if self.options.no_color {
            println!("\n{text}\n{}", "=".repeat(text.chars().count()));
        } else {
            println!("\n{}", text.color(Color::BrightBlue).bold());
        }
    }

    pub fn key_value(&self, key: &str, value: &str) {
        if self.is_human() {
            println!("{}: {value}", self.paint(key, Color::BrightCyan));
        }
    }

    /// An indented path, as listed under a heading.
    pub fn path(&self, path: &str) {
        if self.is_human() {
            println!("  {}", self.paint(path, Color::BrightBlack));
        }
    }

    /// A table with the given bold header row.
    pub fn table(&self, headers: &[&str]) -> Table {
        let mut table = Table::new();
        table.load_preset(if self.options.no_color {
            presets::ASCII_FULL
        } else {
            presets::UTF8_FULL_CONDENSED
        });

        table.set_header(headers.iter().map(|header| {
            let cell = Cell::new(header).add_attribute(Attribute::Bold);
            if self.options.no_color {
                cell
            } else {
                cell.fg(TableColor::Cyan)
            }
        }));
        table
    }

    fn status(&self, icon: &str, color: Color, message: &str) -> String {
        if self.options.no_color {
            format!("{icon} {message}")
        } else {
            format!("{} {}", icon.color(color), message.color(color))
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.options.no_color {
            text.to_string()
        } else {
            text.color(color).bold().to_string()
        }
    }
}
