//! Message channel for notes and per-request errors.

use std::fmt;

/// Sink for messages produced during a generation pass.
pub trait Diagnostics {
    fn note(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Build-script sink: errors become `cargo:warning=` lines, notes go to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct CargoDiagnostics;

impl Diagnostics for CargoDiagnostics {
    fn note(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
        println!("cargo:warning=swagger-builder: {message}");
    }
}

/// Routes everything through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn note(&mut self, message: &str) {
        log::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        log::error!("{message}");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Note,
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Note => f.write_str("note"),
            Level::Error => f.write_str("error"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

/// Records every message, in order.
#[derive(Debug, Default, Clone)]
pub struct CollectingDiagnostics {
    pub messages: Vec<Diagnostic>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|d| d.level == Level::Error)
            .map(|d| d.message.as_str())
    }

    pub fn notes(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|d| d.level == Level::Note)
            .map(|d| d.message.as_str())
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn note(&mut self, message: &str) {
        self.messages.push(Diagnostic {
            level: Level::Note,
            message: message.to_string(),
        });
    }

    fn error(&mut self, message: &str) {
        self.messages.push(Diagnostic {
            level: Level::Error,
            message: message.to_string(),
        });
    }
}
