//! Analyzer and factory contracts consumed by the facade.

use crate::config::ProjectConfig;
use crate::context::FileContext;
use crate::types::Violation;

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by the configured analyzer.
///
/// Configuration load failures never appear here; those live in the
/// provider's state. This covers only synchronous engine construction.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The analyzer factory failed to construct an engine.
    #[error("failed to construct dependency analyzer: {message}")]
    Factory {
        /// Factory failure message.
        message: String,
    },
}

/// A dependency rule engine.
///
/// Instances are stateless per construction: built once from a
/// [`ProjectConfig`] and then queried concurrently, so implementations must
/// be `Send + Sync`.
pub trait DependencyAnalyzer: Send + Sync {
    /// Analyzes a whole project and returns all detected violations.
    ///
    /// Empty input collections are legal and yield no violations.
    fn analyze_project(
        &self,
        source_files: &[PathBuf],
        referenced_crates: &[PathBuf],
    ) -> Vec<Violation>;

    /// Analyzes one parsed source file with its resolved context.
    fn analyze_syntax(&self, ast: &syn::File, ctx: &FileContext<'_>) -> Vec<Violation>;
}

/// Constructs [`DependencyAnalyzer`] instances from validated configuration.
///
/// Invoked only when the configuration state is usable. Failures propagate
/// to whoever triggered the (re)build; they are not swallowed into state.
pub trait AnalyzerFactory: Send + Sync {
    /// Builds an engine for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Factory`] when the engine cannot be built.
    fn create_dependency_analyzer(
        &self,
        config: &ProjectConfig,
    ) -> Result<Arc<dyn DependencyAnalyzer>, AnalyzerError>;
}
