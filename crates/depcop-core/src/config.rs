//! Configuration value model and the provider contract.
//!
//! This crate never loads or parses configuration itself; a
//! [`ConfigProvider`] owns that and hands out immutable [`ProjectConfig`]
//! values plus a [`ConfigState`] describing whether analysis is possible.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Parser engine used to turn source text into analyzable syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Parser {
    /// Full-fidelity AST via `syn`.
    Syn,
    /// Incremental grammar-based parsing.
    TreeSitter,
}

impl std::fmt::Display for Parser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syn => write!(f, "syn"),
            Self::TreeSitter => write!(f, "tree-sitter"),
        }
    }
}

/// Whether a dependency rule permits or forbids the dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    /// The dependency is explicitly permitted.
    Allow,
    /// The dependency is forbidden.
    Deny,
}

/// A single module dependency rule.
///
/// Pure value type; evaluation against source code is the analyzer's job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyRule {
    /// Whether this rule allows or denies the dependency.
    pub kind: RuleKind,
    /// Module path pattern the dependency originates from.
    pub source: String,
    /// Module path pattern the dependency points to.
    pub target: String,
}

impl DependencyRule {
    /// Creates a rule permitting `source` to depend on `target`.
    #[must_use]
    pub fn allow(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Allow,
            source: source.into(),
            target: target.into(),
        }
    }

    /// Creates a rule forbidding `source` from depending on `target`.
    #[must_use]
    pub fn deny(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind: RuleKind::Deny,
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Immutable project configuration for dependency analysis.
///
/// Equality is structural; the facade compares configs by value to decide
/// whether a refresh actually changed anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Parser engine to analyze with.
    pub parser: Parser,
    /// Dependency rules, in declaration order.
    pub rules: Vec<DependencyRule>,
    /// Whether a child module may depend on its parent without an explicit rule.
    #[serde(default)]
    pub child_can_depend_on_parent_implicitly: bool,
}

impl ProjectConfig {
    /// Creates a configuration with the given parser and rules.
    #[must_use]
    pub fn new(parser: Parser, rules: Vec<DependencyRule>) -> Self {
        Self {
            parser,
            rules,
            child_can_depend_on_parent_implicitly: false,
        }
    }

    /// Returns a copy of this configuration with only the parser replaced.
    #[must_use]
    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }
}

/// Status of the externally-loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigState {
    /// Configuration is present and valid; analysis is possible.
    Enabled,
    /// Configuration explicitly disables analysis.
    Disabled,
    /// No configuration was found.
    NoConfig,
    /// The last load or validation attempt failed.
    Error,
}

impl ConfigState {
    /// Returns true for the single state in which an analyzer may exist.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self == Self::Enabled
    }
}

/// Error encountered while loading or validating configuration.
///
/// Messages are stored as strings so the value is `Clone`: providers hand
/// out the last error repeatedly until the next successful reload clears it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Could not read the configuration source.
    #[error("failed to read config from {path}: {message}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error message.
        message: String,
    },

    /// Configuration source was malformed.
    #[error("malformed config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// Configuration parsed but failed validation.
    #[error("invalid config: {message}")]
    Invalid {
        /// Validation error message.
        message: String,
    },
}

/// Source of validated project configuration.
///
/// Implementations own all loading, parsing, validation, and file watching.
/// `refresh` must not panic on load failure; failures surface through
/// [`ConfigProvider::state`] and [`ConfigProvider::error`] instead.
pub trait ConfigProvider: Send + Sync {
    /// Returns the current validated configuration, if any.
    fn config(&self) -> Option<ProjectConfig>;

    /// Returns the current configuration status.
    fn state(&self) -> ConfigState;

    /// Returns the last load/validation error, present only when
    /// [`ConfigProvider::state`] is [`ConfigState::Error`].
    fn error(&self) -> Option<ConfigError>;

    /// Reloads configuration from its source, updating the other three
    /// observables as a side effect.
    fn refresh(&self);
}

/// Applies an optional parser override to a provider's configuration.
///
/// The override takes effect only when a configuration is present and its
/// parser actually differs; otherwise the provider's value passes through
/// unchanged. The result is the effective configuration the facade binds.
#[must_use]
pub fn effective_config(
    provider_config: Option<ProjectConfig>,
    overriding_parser: Option<Parser>,
) -> Option<ProjectConfig> {
    match (provider_config, overriding_parser) {
        (Some(config), Some(parser)) if config.parser != parser => {
            Some(config.with_parser(parser))
        }
        (config, _) => config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(parser: Parser) -> ProjectConfig {
        ProjectConfig::new(
            parser,
            vec![DependencyRule::deny("crate::app", "crate::infra")],
        )
    }

    #[test]
    fn with_parser_replaces_only_the_parser() {
        let config = sample_config(Parser::Syn);
        let derived = config.clone().with_parser(Parser::TreeSitter);
        assert_eq!(derived.parser, Parser::TreeSitter);
        assert_eq!(derived.rules, config.rules);
        assert_eq!(
            derived.child_can_depend_on_parent_implicitly,
            config.child_can_depend_on_parent_implicitly
        );
    }

    #[test]
    fn configs_compare_by_value() {
        let a = sample_config(Parser::Syn);
        let mut b = sample_config(Parser::Syn);
        assert_eq!(a, b);

        b.rules.push(DependencyRule::allow("crate::app", "crate::domain"));
        assert_ne!(a, b);
    }

    #[test]
    fn effective_config_passes_through_without_override() {
        let config = sample_config(Parser::Syn);
        assert_eq!(
            effective_config(Some(config.clone()), None),
            Some(config)
        );
    }

    #[test]
    fn effective_config_applies_differing_override() {
        let config = sample_config(Parser::Syn);
        let effective = effective_config(Some(config), Some(Parser::TreeSitter));
        assert_eq!(effective.map(|c| c.parser), Some(Parser::TreeSitter));
    }

    #[test]
    fn effective_config_skips_override_matching_parser() {
        let config = sample_config(Parser::TreeSitter);
        let effective = effective_config(Some(config.clone()), Some(Parser::TreeSitter));
        assert_eq!(effective, Some(config));
    }

    #[test]
    fn effective_config_of_none_is_none() {
        assert_eq!(effective_config(None, Some(Parser::Syn)), None);
        assert_eq!(effective_config(None, None), None);
    }

    #[test]
    fn only_enabled_is_usable() {
        assert!(ConfigState::Enabled.is_usable());
        assert!(!ConfigState::Disabled.is_usable());
        assert!(!ConfigState::NoConfig.is_usable());
        assert!(!ConfigState::Error.is_usable());
    }

    #[test]
    fn config_error_is_cloneable_and_displays_message() {
        let err = ConfigError::Parse {
            message: "unexpected token at line 3".to_string(),
        };
        let copy = err.clone();
        assert_eq!(err, copy);
        assert!(format!("{copy}").contains("unexpected token"));
    }
}
