//! The configuration-guarded analyzer facade.

use crate::analyzer::{AnalyzerError, AnalyzerFactory};
use crate::binding::AnalyzerBinding;
use crate::config::{
    effective_config, ConfigError, ConfigProvider, ConfigState, Parser, ProjectConfig,
};
use crate::context::FileContext;
use crate::types::Violation;

use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

/// A dependency analyzer that manages its own configuration.
///
/// Couples the current configuration to the engine built from it and
/// publishes both as one immutable [`AnalyzerBinding`] snapshot. Any number
/// of analysis calls run concurrently against the snapshot they grabbed;
/// [`ConfiguredAnalyzer::refresh_config`] swaps the snapshot atomically, so
/// a read can never see a new configuration with an old engine or vice
/// versa. Readers hold the lock only long enough to clone an `Arc` — the
/// analysis itself runs outside the lock and cannot be starved by refreshes.
pub struct ConfiguredAnalyzer {
    provider: Arc<dyn ConfigProvider>,
    factory: Arc<dyn AnalyzerFactory>,
    overriding_parser: Option<Parser>,
    binding: RwLock<Arc<AnalyzerBinding>>,
}

impl ConfiguredAnalyzer {
    /// Creates a facade and immediately computes its initial binding.
    ///
    /// There is no observable unconfigured state: the provider's current
    /// configuration is bound (and an engine built, when usable) before
    /// this returns. The provider is not asked to reload here.
    ///
    /// # Errors
    ///
    /// Propagates [`AnalyzerError`] when the factory fails to build the
    /// initial engine.
    pub fn new(
        provider: Arc<dyn ConfigProvider>,
        factory: Arc<dyn AnalyzerFactory>,
        overriding_parser: Option<Parser>,
    ) -> Result<Self, AnalyzerError> {
        let candidate = effective_config(provider.config(), overriding_parser);
        let state = provider.state();
        let initial = build_binding(factory.as_ref(), candidate, state)?;

        Ok(Self {
            provider,
            factory,
            overriding_parser,
            binding: RwLock::new(Arc::new(initial)),
        })
    }

    /// Analyzes a whole project with the currently bound engine.
    ///
    /// Concurrent calls are unrestricted. When the binding is unusable
    /// (no configuration, disabled, or broken) this returns no violations;
    /// use [`ConfiguredAnalyzer::config_state`] to tell that case apart
    /// from a genuinely clean project.
    pub fn analyze_project(
        &self,
        source_files: &[PathBuf],
        referenced_crates: &[PathBuf],
    ) -> Vec<Violation> {
        let binding = self.snapshot();
        match binding.analyzer() {
            Some(analyzer) => analyzer.analyze_project(source_files, referenced_crates),
            None => {
                debug!("analysis requested with unusable configuration, reporting no violations");
                Vec::new()
            }
        }
    }

    /// Analyzes one parsed source file with the currently bound engine.
    ///
    /// Same concurrency and unusable-binding policy as
    /// [`ConfiguredAnalyzer::analyze_project`].
    pub fn analyze_syntax(&self, ast: &syn::File, ctx: &FileContext<'_>) -> Vec<Violation> {
        let binding = self.snapshot();
        match binding.analyzer() {
            Some(analyzer) => analyzer.analyze_syntax(ast, ctx),
            None => {
                debug!("analysis requested with unusable configuration, reporting no violations");
                Vec::new()
            }
        }
    }

    /// Reloads configuration and rebinds the engine if anything changed.
    ///
    /// Holds exclusive access for the whole reload/rebuild/publish
    /// sequence, which also serializes concurrent refreshes. An unchanged
    /// effective configuration keeps the existing engine instance; a
    /// changed one gets a freshly built engine, or no engine when the new
    /// state is not usable. Provider reload failures surface through
    /// [`ConfiguredAnalyzer::config_state`], not as an error here.
    ///
    /// # Errors
    ///
    /// Propagates [`AnalyzerError`] when the factory fails to build the
    /// replacement engine.
    pub fn refresh_config(&self) -> Result<(), AnalyzerError> {
        let mut slot = self.binding.write();

        self.provider.refresh();
        let candidate = effective_config(self.provider.config(), self.overriding_parser);
        let state = self.provider.state();

        if binding_matches(&slot, candidate.as_ref(), state) {
            debug!("configuration unchanged, keeping bound analyzer");
            return Ok(());
        }

        let next = build_binding(self.factory.as_ref(), candidate, state)?;
        info!(usable = next.is_usable(), "configuration changed, rebinding analyzer");
        *slot = Arc::new(next);
        Ok(())
    }

    /// The currently bound effective configuration, if any.
    #[must_use]
    pub fn config(&self) -> Option<ProjectConfig> {
        let binding = self.snapshot();
        binding.config().cloned()
    }

    /// The provider's current configuration status.
    #[must_use]
    pub fn config_state(&self) -> ConfigState {
        self.provider.state()
    }

    /// The provider's last configuration error, if any.
    #[must_use]
    pub fn config_error(&self) -> Option<ConfigError> {
        self.provider.error()
    }

    /// Clones the current binding snapshot; the lock is released before
    /// the caller touches the binding.
    fn snapshot(&self) -> Arc<AnalyzerBinding> {
        Arc::clone(&self.binding.read())
    }
}

/// Builds the binding for a candidate effective configuration.
///
/// An engine is only ever constructed in the usable state; every other
/// state binds the configuration (when present) without an engine.
fn build_binding(
    factory: &dyn AnalyzerFactory,
    candidate: Option<ProjectConfig>,
    state: ConfigState,
) -> Result<AnalyzerBinding, AnalyzerError> {
    match candidate {
        Some(config) if state.is_usable() => {
            let analyzer = factory.create_dependency_analyzer(&config)?;
            Ok(AnalyzerBinding::Usable { config, analyzer })
        }
        config => Ok(AnalyzerBinding::Unusable { config, state }),
    }
}

/// Whether the bound snapshot already reflects the candidate configuration
/// and state, meaning a refresh has nothing to do.
fn binding_matches(
    bound: &AnalyzerBinding,
    candidate: Option<&ProjectConfig>,
    state: ConfigState,
) -> bool {
    match bound {
        AnalyzerBinding::Usable { config, .. } => {
            state.is_usable() && Some(config) == candidate
        }
        AnalyzerBinding::Unusable {
            config,
            state: bound_state,
        } => !state.is_usable() && *bound_state == state && config.as_ref() == candidate,
    }
}
