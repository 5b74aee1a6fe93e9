//! Core types for dependency violations.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for dependency violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail analysis.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file (for miette integration).
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a new location from span information.
    #[must_use]
    pub fn from_span(file: PathBuf, span: proc_macro2::Span) -> Self {
        let start = span.start();
        Self {
            file,
            line: start.line,
            column: start.column + 1,
            offset: 0,
            length: 0,
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }
}

/// A dependency violation reported by an analyzer.
///
/// Violations are produced by [`DependencyAnalyzer`](crate::DependencyAnalyzer)
/// implementations; the facade never constructs them itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "DC001").
    pub code: String,
    /// Rule name (e.g., "deny-module-dependency").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Module path the illegal dependency originates from.
    pub source_module: String,
    /// Module path the illegal dependency points to.
    pub target_module: String,
    /// Human-readable message.
    pub message: String,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            source_module: String::new(),
            target_module: String::new(),
            message: message.into(),
        }
    }

    /// Sets the illegal dependency this violation reports.
    #[must_use]
    pub fn with_dependency(
        mut self,
        source_module: impl Into<String>,
        target_module: impl Into<String>,
    ) -> Self {
        self.source_module = source_module.into();
        self.target_module = target_module.into();
        self
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let _ = writeln!(output, "  {}: {}", self.severity, self.message);
        if !self.source_module.is_empty() {
            let _ = writeln!(
                output,
                "  = dependency: {} -> {}",
                self.source_module, self.target_module
            );
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )?;
        if !self.source_module.is_empty() {
            write!(f, " ({} -> {})", self.source_module, self.target_module)?;
        }
        Ok(())
    }
}

/// Converts a Violation to a miette Diagnostic for rich error display.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        let help = if v.source_module.is_empty() {
            None
        } else {
            Some(format!(
                "illegal dependency: {} -> {}",
                v.source_module, v.target_module
            ))
        };
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help,
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}
