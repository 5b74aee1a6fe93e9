//! # depcop-core
//!
//! Configuration-guarded facade for module dependency analysis.
//!
//! The crate couples "current configuration" to "current analysis engine"
//! and keeps the pair consistent under concurrency:
//!
//! - [`ConfigProvider`] trait for externally-loaded configuration
//! - [`DependencyAnalyzer`] / [`AnalyzerFactory`] traits for the rule engine
//! - [`ConfiguredAnalyzer`] for serializing config refreshes against
//!   concurrent analysis reads via atomically swapped binding snapshots
//! - [`Violation`] for representing detected rule breaches
//!
//! ## Example
//!
//! ```ignore
//! use depcop_core::{ConfiguredAnalyzer, Parser};
//!
//! let analyzer = ConfiguredAnalyzer::new(provider, factory, Some(Parser::Syn))?;
//! let violations = analyzer.analyze_project(&source_files, &referenced_crates);
//!
//! // Later, e.g. from a file-watch callback:
//! analyzer.refresh_config()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod binding;
mod config;
mod configured;
mod context;
mod types;

pub use analyzer::{AnalyzerError, AnalyzerFactory, DependencyAnalyzer};
pub use binding::AnalyzerBinding;
pub use config::{
    effective_config, ConfigError, ConfigProvider, ConfigState, DependencyRule, Parser,
    ProjectConfig, RuleKind,
};
pub use configured::ConfiguredAnalyzer;
pub use context::FileContext;
pub use types::{Location, Severity, Violation, ViolationDiagnostic};
