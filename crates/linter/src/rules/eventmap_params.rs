//! meteor/eventmap-params
//!
//! Enforce consistent parameter names in Blaze event maps. Handlers declared
//! in `Template.<name>.events({...})` should call their first parameter
//! `event` and their second `templateInstance` (both configurable).

use log::{debug, trace};
use oxc_ast::ast::{CallExpression, Expression, ObjectPropertyKind};
use oxc_span::GetSpan;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::diagnostic::Diagnostic;
use crate::error::ConfigError;
use crate::utils::{function_params, is_template_prop, leading_params, HandlerParam, ParamName};
use crate::{RuleCategory, RuleMeta};

fn default_event_param_name() -> String {
    "event".to_string()
}

fn default_template_instance_param_name() -> String {
    "templateInstance".to_string()
}

/// Configuration for eventmap-params rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EventmapParamsConfig {
    /// Expected name of a handler's first parameter
    #[serde(default = "default_event_param_name")]
    pub event_param_name: String,
    /// Expected name of a handler's second parameter
    #[serde(default = "default_template_instance_param_name")]
    pub template_instance_param_name: String,
}

impl Default for EventmapParamsConfig {
    fn default() -> Self {
        Self {
            event_param_name: default_event_param_name(),
            template_instance_param_name: default_template_instance_param_name(),
        }
    }
}

impl EventmapParamsConfig {
    pub fn with_event_param_name(mut self, name: impl Into<String>) -> Self {
        self.event_param_name = name.into();
        self
    }

    pub fn with_template_instance_param_name(mut self, name: impl Into<String>) -> Self {
        self.template_instance_param_name = name.into();
        self
    }

    /// Read the config from a rule options array, where only the first
    /// entry is meaningful. An empty array or a `null` entry gives defaults.
    pub fn from_options(options: &[Value]) -> Result<Self, ConfigError> {
        match options.first() {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(value @ Value::Object(_)) => Ok(serde_json::from_value(value.clone())?),
            Some(Value::Array(_)) => Err(ConfigError::NotAnObject("an array")),
            Some(Value::String(_)) => Err(ConfigError::NotAnObject("a string")),
            Some(Value::Number(_)) => Err(ConfigError::NotAnObject("a number")),
            Some(Value::Bool(_)) => Err(ConfigError::NotAnObject("a boolean")),
        }
    }
}

/// eventmap-params rule
#[derive(Debug, Clone, Default)]
pub struct EventmapParams {
    pub config: EventmapParamsConfig,
}

impl RuleMeta for EventmapParams {
    const NAME: &'static str = "eventmap-params";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl EventmapParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EventmapParamsConfig) -> Self {
        Self { config }
    }

    /// Build the rule from its options array (see [`EventmapParams::schema`])
    pub fn from_options(options: &[Value]) -> Result<Self, ConfigError> {
        EventmapParamsConfig::from_options(options).map(Self::with_config)
    }

    /// Build the rule from an options array serialized as JSON
    pub fn from_options_json(options: &str) -> Result<Self, ConfigError> {
        let options: Vec<Value> = serde_json::from_str(options)?;
        Self::from_options(&options)
    }

    /// JSON schema of the options array accepted by [`EventmapParams::from_options`]
    pub fn schema() -> Value {
        json!([
            {
                "type": "object",
                "properties": {
                    "eventParamName": { "type": "string" },
                    "templateInstanceParamName": { "type": "string" }
                },
                "additionalProperties": false
            }
        ])
    }

    /// Check a call expression for a Blaze event map with misnamed handler parameters
    pub fn check<'a>(&self, call: &CallExpression<'a>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if call.arguments.is_empty() || !is_template_prop(&call.callee, "events") {
            return diagnostics;
        }

        let event_map = call
            .arguments
            .first()
            .and_then(|arg| arg.as_expression())
            .map(|expr| expr.without_parentheses());

        let Some(Expression::ObjectExpression(event_map)) = event_map else {
            debug!(
                "{}: event map at {:?} is not an object literal, skipping",
                Self::NAME,
                call.span
            );
            return diagnostics;
        };

        for property in &event_map.properties {
            // Spread entries carry no handler
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            self.check_event_definition(
                property.key.span(),
                property.value.without_parentheses(),
                &mut diagnostics,
            );
        }

        diagnostics
    }

    fn check_event_definition(
        &self,
        key_span: oxc_span::Span,
        handler: &Expression,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(params) = function_params(handler) else {
            trace!("{}: handler at {:?} is not a function", Self::NAME, handler.span());
            return;
        };

        let expected = [
            self.config.event_param_name.as_str(),
            self.config.template_instance_param_name.as_str(),
        ];

        for (param, expected_name) in leading_params(params, expected.len()).iter().zip(expected) {
            if param.name.as_str() == Some(expected_name) {
                continue;
            }
            diagnostics.push(Self::invalid_param(param, expected_name, key_span));
        }
    }

    fn invalid_param(param: &HandlerParam, expected_name: &str, key_span: oxc_span::Span) -> Diagnostic {
        let help = match &param.name {
            ParamName::SimpleName(name) => format!("Rename `{}` to `{}`.", name, expected_name),
            ParamName::Other => format!(
                "Bind this parameter to a plain identifier named `{}`.",
                expected_name
            ),
        };

        Diagnostic::warning(
            Self::NAME,
            param.span,
            format!("Invalid parameter name, use \"{}\" instead", expected_name),
        )
        .with_help(help)
        .with_label(key_span, "event handler declared here")
    }
}
