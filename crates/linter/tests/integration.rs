//! Integration tests for blaze-linter rules

use oxc_allocator::Allocator;
use oxc_ast::ast::{CallExpression, Expression, Statement};
use oxc_parser::Parser;
use oxc_span::SourceType;
use serde_json::json;

use blaze_linter::rules::{EventmapParams, EventmapParamsConfig};
use blaze_linter::{lint, lint_with_config, Diagnostic, RuleMeta, RulesConfig};

fn parse_program<'a>(allocator: &'a Allocator, source: &'a str) -> Option<oxc_ast::ast::Program<'a>> {
    let source_type = SourceType::mjs();
    let ret = Parser::new(allocator, source, source_type).parse();
    if ret.errors.is_empty() {
        Some(ret.program)
    } else {
        None
    }
}

/// Helper to find the first top-level call expression in a program
fn find_call<'a>(program: &'a oxc_ast::ast::Program<'a>) -> Option<&'a CallExpression<'a>> {
    for stmt in &program.body {
        if let Statement::ExpressionStatement(expr_stmt) = stmt {
            if let Expression::CallExpression(call) = &expr_stmt.expression {
                return Some(call);
            }
        }
    }
    None
}

fn check_with(rule: &EventmapParams, source: &str) -> Vec<Diagnostic> {
    let allocator = Allocator::default();
    let program = parse_program(&allocator, source).expect("should parse");
    let call = find_call(&program).expect("should find call");
    rule.check(call)
}

fn check(source: &str) -> Vec<Diagnostic> {
    check_with(&EventmapParams::new(), source)
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| format!("{}..{} {}", d.start, d.end, d.message))
        .collect::<Vec<_>>()
        .join("\n")
}

fn custom_rule() -> EventmapParams {
    EventmapParams::with_config(
        EventmapParamsConfig::default()
            .with_event_param_name("e")
            .with_template_instance_param_name("tmpl"),
    )
}

#[test]
fn test_eventmap_params_both_misnamed() {
    let diagnostics = check("Template.foo.events({ 'click .btn': function (e, t) {} });");

    insta::assert_snapshot!(render(&diagnostics), @r###"
    46..47 Invalid parameter name, use "event" instead
    49..50 Invalid parameter name, use "templateInstance" instead
    "###);
    assert_eq!(diagnostics[0].rule, EventmapParams::NAME);
    assert_eq!(diagnostics[0].help.as_deref(), Some("Rename `e` to `event`."));
    assert_eq!(
        diagnostics[0].labels,
        vec![(22, 34, "event handler declared here".to_string())]
    );
}

#[test]
fn test_eventmap_params_method_arrow_destructure_and_rest() {
    let source = "Template.foo.events({\n  'click .a'(evt, tmpl) {},\n  'submit form': ({ target }, ...rest) => {},\n});\n";
    let diagnostics = check(source);

    insta::assert_snapshot!(render(&diagnostics), @r###"
    35..38 Invalid parameter name, use "event" instead
    40..44 Invalid parameter name, use "templateInstance" instead
    68..78 Invalid parameter name, use "event" instead
    80..87 Invalid parameter name, use "templateInstance" instead
    "###);
}

#[test]
fn test_eventmap_params_valid_names() {
    let sources = [
        "Template.foo.events({ 'click': function (event, templateInstance) {} });",
        "Template.foo.events({ 'click': function (event, templateInstance, extra) {} });",
        "Template.foo.events({ 'click': function (event) {} });",
        "Template.foo.events({ 'click': function named(event, templateInstance) {} });",
        "Template.foo.events({ 'click': (event, templateInstance) => {} });",
        "Template.foo.events({ 'click'(event, templateInstance) {} });",
        "Template.body.events({ 'click'(event) {} });",
        "Template['my-template'].events({ 'click'(event) {} });",
    ];
    for source in sources {
        assert!(check(source).is_empty(), "expected no diagnostics for {source}");
    }
}

#[test]
fn test_eventmap_params_no_params() {
    assert!(check("Template.foo.events({ 'click': function () {} });").is_empty());
    assert!(check("Template.foo.events({ 'click': () => {} });").is_empty());
}

#[test]
fn test_eventmap_params_default_values_never_match() {
    let diagnostics =
        check("Template.foo.events({ 'click'(event = null, templateInstance = null) {} });");
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message, "Invalid parameter name, use \"event\" instead");
    assert_eq!(
        diagnostics[1].message,
        "Invalid parameter name, use \"templateInstance\" instead"
    );
    assert_eq!(
        diagnostics[0].help.as_deref(),
        Some("Bind this parameter to a plain identifier named `event`.")
    );
}

#[test]
fn test_eventmap_params_destructured_and_rest_never_match() {
    let diagnostics = check("Template.foo.events({ 'click'([a], { b }, ...c) {} });");
    assert_eq!(diagnostics.len(), 2);
}

#[test]
fn test_eventmap_params_template_literal_key() {
    let diagnostics = check("Template.foo[`events`]({ 'click'(e) {} });");
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("\"event\""));
}

#[test]
fn test_eventmap_params_parenthesized_callee() {
    let diagnostics = check("(Template.foo.events)({ 'click'(e) {} });");
    assert_eq!(diagnostics.len(), 1);
}

#[test]
fn test_eventmap_params_only_second_misnamed() {
    let diagnostics = check("Template.foo.events({ 'click'(event, instance) {} });");
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(
        diagnostics[0].message,
        "Invalid parameter name, use \"templateInstance\" instead"
    );
}

#[test]
fn test_eventmap_params_custom_config() {
    let rule = custom_rule();

    let diagnostics = check_with(
        &rule,
        "Template.foo.events({ 'click': function (event, templateInstance) {} });",
    );
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].message, "Invalid parameter name, use \"e\" instead");
    assert_eq!(diagnostics[1].message, "Invalid parameter name, use \"tmpl\" instead");

    assert!(check_with(&rule, "Template.foo.events({ 'click': function (e, tmpl) {} });").is_empty());
}

#[test]
fn test_eventmap_params_custom_config_from_options() {
    let rule = EventmapParams::from_options(&[json!({
        "eventParamName": "e",
        "templateInstanceParamName": "tmpl"
    })])
    .expect("valid options");
    assert_eq!(rule.config, custom_rule().config);
    assert!(EventmapParams::from_options(&[json!({ "other": true })]).is_err());
}

#[test]
fn test_eventmap_params_ignores_other_callees() {
    let sources = [
        "foo.other({ 'click': function (a, b) {} });",
        "foo.events({ 'click': function (a, b) {} });",
        "Template.foo.helpers({ name: function (a, b) {} });",
        "Template.events({ 'click': function (a, b) {} });",
        "events({ 'click': function (a, b) {} });",
    ];
    for source in sources {
        assert!(check(source).is_empty(), "expected no diagnostics for {source}");
    }
}

#[test]
fn test_eventmap_params_ignores_non_object_event_maps() {
    assert!(check("Template.foo.events(eventMap);").is_empty());
    assert!(check("Template.foo.events(makeEvents());").is_empty());
    assert!(check("Template.foo.events(...maps);").is_empty());
    assert!(check("Template.foo.events();").is_empty());
}

#[test]
fn test_eventmap_params_ignores_non_function_handlers() {
    let diagnostics = check(
        "Template.foo.events({ 'click': handler, 'keyup': 'string', ...shared, 'blur'(e) {} });",
    );
    assert_eq!(diagnostics.len(), 1);
    assert!(diagnostics[0].message.contains("\"event\""));
}

#[test]
fn test_eventmap_params_only_first_argument_checked() {
    let diagnostics = check(
        "Template.foo.events({ 'click'(event) {} }, { 'keyup'(a, b) {} });",
    );
    assert!(diagnostics.is_empty());
}

#[test]
fn test_eventmap_params_diagnostics_in_source_order() {
    let diagnostics = check(
        "Template.foo.events({ 'a'(x) {}, 'b'(event, y) {}, 'c'(z) {} });",
    );
    let starts: Vec<u32> = diagnostics.iter().map(|d| d.start).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(diagnostics.len(), 3);
    assert_eq!(starts, sorted);
}

#[test]
fn test_eventmap_params_idempotent() {
    let source = "Template.foo.events({ 'click'(a, b) {}, 'keyup': (x) => {} });";
    let allocator = Allocator::default();
    let program = parse_program(&allocator, source).expect("should parse");

    let first = lint(source, &program).diagnostics;
    let second = lint(source, &program).diagnostics;
    assert_eq!(first.len(), 3);
    assert_eq!(first, second);
}

#[test]
fn test_lint_with_config_finds_nested_calls() {
    let _ = env_logger::builder().is_test(true).try_init();

    let source = r#"
        if (Meteor.isClient) {
            Template.list.onCreated(function () {
                Template.item.events({ 'click'(e) {} });
            });
        }
    "#;
    let allocator = Allocator::default();
    let program = parse_program(&allocator, source).expect("should parse");

    let result = lint_with_config(
        source,
        &program,
        RulesConfig::none().with_eventmap_params(custom_rule()),
    );
    assert!(result.diagnostics.is_empty());

    let result = lint(source, &program);
    assert_eq!(result.diagnostics.len(), 1);
}
