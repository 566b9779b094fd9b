mod commands;
mod context;
mod output;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

use commands::generate::{self, GenerateArgs, handle_generate};
use commands::list::{self, ListArgs, handle_list};
use output::{GlobalOptions, OutputFormat, OutputManager};

const HELP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::BrightBlue.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Magenta.on_default())
    .placeholder(AnsiColor::BrightBlack.on_default());

const AFTER_HELP: &str = "\
Environment:
  RUST_LOG   log filter for generator internals, e.g. swagger_builder_build=debug
  NO_COLOR   disable colored output

Configuration is read from swagger-builder.toml next to the nearest Cargo.toml.";

#[derive(Parser)]
#[command(name = "swagger-builder", version)]
#[command(about = "Generate fluent builders for swagger-style models")]
#[command(
    long_about = "Scans Rust sources for #[swagger_builder(target = ...)] requests and \
                  generates one fluent builder per request. Each builder calls \
                  set<Field> on the target type; #[map_to(\"...\")] renames the property."
)]
#[command(styles = HELP_STYLES, after_long_help = AFTER_HELP)]
#[command(subcommand_required = true, arg_required_else_help = true)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// Suppress output (only errors will be shown)
    #[arg(short = 'q', long, global = true)]
    quiet: bool,

    /// Show generator notes
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builders for every request found in the scanned sources
    #[command(after_long_help = generate::EXAMPLES)]
    Generate(GenerateArgs),

    /// List builder requests and their field-to-setter mappings
    #[command(after_long_help = list::EXAMPLES)]
    List(ListArgs),
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = execute(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn execute(cli: Cli) -> Result<()> {
    let output = OutputManager::new(GlobalOptions {
        output_format: cli.output,
        quiet: cli.quiet,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    match cli.command {
        Commands::Generate(args) => handle_generate(args, &output),
        Commands::List(args) => handle_list(args, &output),
    }
}
