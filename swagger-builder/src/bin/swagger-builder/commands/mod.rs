pub mod generate;
pub mod list;

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use swagger_builder_build::SetterStyle;

use crate::context::Overrides;

/// Setter naming on the target type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SetterStyleArg {
    /// `setUserAge`
    Prefixed,
    /// `set_user_age`
    Snake,
}

impl From<SetterStyleArg> for SetterStyle {
    fn from(style: SetterStyleArg) -> Self {
        match style {
            SetterStyleArg::Prefixed => SetterStyle::Prefixed,
            SetterStyleArg::Snake => SetterStyle::Snake,
        }
    }
}

/// Scan settings shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct ScanArgs {
    /// Directory to scan for annotated structs (repeatable)
    #[arg(long = "scan", value_name = "DIR")]
    pub scan_paths: Vec<PathBuf>,

    /// Module path prefix of the scanned directory
    #[arg(long, value_name = "PATH")]
    pub crate_name: Option<String>,

    /// Setter naming on the target type
    #[arg(long, value_enum, value_name = "STYLE")]
    pub setter_style: Option<SetterStyleArg>,
}

impl ScanArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            scan_paths: self.scan_paths.clone(),
            output_dir: None,
            crate_name: self.crate_name.clone(),
            setter_style: self.setter_style.map(SetterStyle::from),
        }
    }
}
