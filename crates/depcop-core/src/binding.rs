//! The immutable (config, analyzer) snapshot.

use crate::analyzer::DependencyAnalyzer;
use crate::config::{ConfigState, ProjectConfig};

use std::sync::Arc;

/// The paired (configuration, analyzer) unit the facade publishes.
///
/// A binding is built as a whole and replaced as a whole; readers hold an
/// `Arc` to it and can never observe a config/analyzer mismatch. Invariant:
/// a `Usable` binding's analyzer was constructed from exactly its config.
pub enum AnalyzerBinding {
    /// Configuration is usable and an engine is bound.
    Usable {
        /// The effective configuration the engine was built from.
        config: ProjectConfig,
        /// The engine itself.
        analyzer: Arc<dyn DependencyAnalyzer>,
    },
    /// Configuration is absent, disabled, or broken; no engine exists.
    Unusable {
        /// The effective configuration, when one exists despite being unusable.
        config: Option<ProjectConfig>,
        /// Why no engine is bound.
        state: ConfigState,
    },
}

impl AnalyzerBinding {
    /// Returns the bound effective configuration, if any.
    #[must_use]
    pub fn config(&self) -> Option<&ProjectConfig> {
        match self {
            Self::Usable { config, .. } => Some(config),
            Self::Unusable { config, .. } => config.as_ref(),
        }
    }

    /// Returns the bound engine, present only in the usable variant.
    #[must_use]
    pub fn analyzer(&self) -> Option<&Arc<dyn DependencyAnalyzer>> {
        match self {
            Self::Usable { analyzer, .. } => Some(analyzer),
            Self::Unusable { .. } => None,
        }
    }

    /// Returns true when an engine is bound.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        matches!(self, Self::Usable { .. })
    }
}

impl std::fmt::Debug for AnalyzerBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usable { config, .. } => f
                .debug_struct("Usable")
                .field("config", config)
                .finish_non_exhaustive(),
            Self::Unusable { config, state } => f
                .debug_struct("Unusable")
                .field("config", config)
                .field("state", state)
                .finish(),
        }
    }
}
