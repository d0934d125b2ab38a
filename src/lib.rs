//! Blaze Lint OXC
//!
//! Parses JavaScript/TypeScript with OXC and runs the Meteor Blaze lint rules
//! from `blaze-linter` over it.
//!
//! ## Usage
//!
//! ```rust
//! use blaze_lint_oxc::lint_source;
//!
//! let source = r#"Template.list.events({ 'click .item'(e) {} });"#;
//! let output = lint_source(source, "list.js", None).unwrap();
//! assert_eq!(output.messages.len(), 1);
//! ```

pub use blaze_linter::{
    ConfigError, Diagnostic, DiagnosticSeverity, EventmapParams, EventmapParamsConfig, RuleMeta,
    RulesConfig,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use log::debug;
use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use blaze_linter::{lint_with_config, LintContext};

/// Errors that stop a file from being linted at all
#[derive(Debug, Error)]
pub enum LintError {
    /// The source could not be parsed
    #[error("failed to parse {filename}: {}", messages.join("; "))]
    Parse {
        filename: String,
        messages: Vec<String>,
    },

    /// The rule options were rejected
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A diagnostic resolved to line/column positions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintMessage {
    pub rule_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    pub severity: DiagnosticSeverity,
    /// 1-based
    pub line: usize,
    /// 1-based, in characters
    pub column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

/// Result of linting one file
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintOutput {
    pub messages: Vec<LintMessage>,
}

impl LintOutput {
    pub fn is_clean(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Lint `source` with the given rules (all rules with defaults if `None`).
///
/// The source type is taken from the file extension, falling back to an
/// ES module.
pub fn lint_source(
    source: &str,
    filename: &str,
    config: Option<RulesConfig>,
) -> Result<LintOutput, LintError> {
    let config = config.unwrap_or_default();
    let allocator = Allocator::default();
    let source_type = SourceType::from_path(filename).unwrap_or(SourceType::mjs());

    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
        return Err(LintError::Parse {
            filename: filename.to_string(),
            messages: ret.errors.iter().map(|e| e.to_string()).collect(),
        });
    }

    let result = lint_with_config(source, &ret.program, config);
    debug!("{}: {} diagnostic(s)", filename, result.diagnostics.len());

    let positions = LintContext::new(source);
    let messages = result
        .diagnostics
        .into_iter()
        .map(|diagnostic| {
            let (line, column) = positions.line_col(diagnostic.start);
            let (end_line, end_column) = positions.line_col(diagnostic.end);
            LintMessage {
                rule_id: diagnostic.rule,
                message: diagnostic.message,
                help: diagnostic.help,
                severity: diagnostic.severity,
                line,
                column,
                end_line,
                end_column,
            }
        })
        .collect();

    Ok(LintOutput { messages })
}

/// Lint `source` with `eventmap-params` configured from its options array
pub fn lint_source_with_options(
    source: &str,
    filename: &str,
    rule_options: &[Value],
) -> Result<LintOutput, LintError> {
    let rule = EventmapParams::from_options(rule_options)?;
    lint_source(
        source,
        filename,
        Some(RulesConfig::none().with_eventmap_params(rule)),
    )
}

/// Lint options exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
#[derive(Default)]
pub struct JsLintOptions {
    /// Source filename, used to pick the source type
    /// @default "input.js"
    pub filename: Option<String>,

    /// The rule's options array as JSON, e.g. `[{"eventParamName":"e"}]`
    pub rule_options: Option<String>,
}

/// A lint message exposed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsLintMessage {
    pub rule_id: String,
    pub message: String,
    pub severity: String,
    pub line: u32,
    pub column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

/// Lint source code with the eventmap-params rule
#[cfg(feature = "napi")]
#[napi]
pub fn lint_eventmap_params(
    source: String,
    options: Option<JsLintOptions>,
) -> napi::Result<Vec<JsLintMessage>> {
    let js_options = options.unwrap_or_default();
    let filename = js_options.filename.as_deref().unwrap_or("input.js");

    let rule = match js_options.rule_options.as_deref() {
        Some(json) => EventmapParams::from_options_json(json),
        None => Ok(EventmapParams::new()),
    }
    .map_err(|e| napi::Error::from_reason(e.to_string()))?;

    let output = lint_source(
        &source,
        filename,
        Some(RulesConfig::none().with_eventmap_params(rule)),
    )
    .map_err(|e| napi::Error::from_reason(e.to_string()))?;

    Ok(output
        .messages
        .into_iter()
        .map(|m| JsLintMessage {
            rule_id: m.rule_id,
            message: m.message,
            severity: format!("{:?}", m.severity).to_lowercase(),
            line: m.line as u32,
            column: m.column as u32,
            end_line: m.end_line as u32,
            end_column: m.end_column as u32,
        })
        .collect())
}
