//! Meteor Blaze lint rules
//!
//! This crate provides lint rules for Meteor's Blaze templates ported from
//! eslint-plugin-meteor. Rules run over an oxc AST:
//! 1. Standalone through [`lint`] / [`LintRunner`] for custom tooling
//! 2. Rule by rule, calling each rule's `check` on the nodes it listens to

pub mod error;
pub mod rules;
pub mod utils;
pub mod visitor;
mod context;
mod diagnostic;

pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity};
pub use error::ConfigError;
pub use rules::*;
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category for Blaze rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that encourage best practices
    Style,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!(
            "https://github.com/dferber90/eslint-plugin-meteor/blob/master/docs/rules/{}.md",
            Self::NAME
        )
    }
}
