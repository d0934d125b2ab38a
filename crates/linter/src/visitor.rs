//! Unified visitor pattern for running all lint rules in a single AST pass
//!
//! This module provides a `LintRunner` that traverses the AST once and runs
//! all enabled rules during the traversal, collecting diagnostics efficiently.

use log::debug;
use oxc_ast::ast::{CallExpression, Program};
use oxc_ast_visit::{walk, Visit};

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::rules::EventmapParams;

/// Configuration for which rules are enabled
#[derive(Debug, Clone)]
pub struct RulesConfig {
    pub eventmap_params: Option<EventmapParams>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            eventmap_params: Some(EventmapParams::new()),
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            eventmap_params: None,
        }
    }

    pub fn with_eventmap_params(mut self, rule: EventmapParams) -> Self {
        self.eventmap_params = Some(rule);
        self
    }

    pub fn enabled_rule_count(&self) -> usize {
        usize::from(self.eventmap_params.is_some())
    }
}

/// Unified visitor that runs all enabled rules during a single AST traversal
pub struct LintRunner<'a> {
    ctx: LintContext<'a>,
    config: RulesConfig,
}

impl<'a> LintRunner<'a> {
    pub fn new(ctx: LintContext<'a>, config: RulesConfig) -> Self {
        Self { ctx, config }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> LintResult {
        debug!(
            "linting {} bytes with {} rule(s)",
            self.ctx.source_text().len(),
            self.config.enabled_rule_count()
        );
        self.visit_program(program);
        LintResult {
            diagnostics: self.ctx.into_diagnostics(),
        }
    }

    /// Check a call expression with all applicable rules
    fn check_call_expression(&mut self, call: &CallExpression<'a>) {
        // eventmap-params
        if let Some(rule) = &self.config.eventmap_params {
            for diagnostic in rule.check(call) {
                self.ctx.report(diagnostic);
            }
        }
    }
}

impl<'a> Visit<'a> for LintRunner<'a> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        self.check_call_expression(call);
        walk::walk_call_expression(self, call);
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, program: &Program<'a>) -> LintResult {
    let ctx = LintContext::new(source_text);
    let config = RulesConfig::default();
    LintRunner::new(ctx, config).run(program)
}

/// Convenience function to lint a program with custom configuration
pub fn lint_with_config<'a>(
    source_text: &'a str,
    program: &Program<'a>,
    config: RulesConfig,
) -> LintResult {
    let ctx = LintContext::new(source_text);
    LintRunner::new(ctx, config).run(program)
}
