//! Syntactic predicates shared by Blaze rules

use oxc_ast::ast::{
    BindingPattern, Expression, FormalParameter, FormalParameters, MemberExpression,
};
use oxc_span::{GetSpan, Span};

/// Identifier that Blaze templates hang off (`Template.foo`)
pub const TEMPLATE_GLOBAL: &str = "Template";

/// Parameter list of a function-like expression
pub fn function_params<'s, 'a>(expr: &'s Expression<'a>) -> Option<&'s FormalParameters<'a>> {
    match expr {
        Expression::FunctionExpression(func) => Some(&*func.params),
        Expression::ArrowFunctionExpression(arrow) => Some(&*arrow.params),
        _ => None,
    }
}

/// Check if an expression is a function expression or an arrow function
pub fn is_function(expr: &Expression) -> bool {
    function_params(expr).is_some()
}

/// Property name of a member access, if it is statically known
///
/// `a.b`, `a['b']` and ``a[`b`]`` all give `b`; private fields and other
/// computed keys give `None`.
pub fn member_property_name<'s>(member: &'s MemberExpression<'_>) -> Option<&'s str> {
    match member {
        MemberExpression::StaticMemberExpression(static_member) => {
            Some(static_member.property.name.as_str())
        }
        MemberExpression::ComputedMemberExpression(computed) => {
            match &computed.expression {
                Expression::StringLiteral(lit) => Some(lit.value.as_str()),
                Expression::TemplateLiteral(tpl) if tpl.expressions.is_empty() => tpl
                    .quasis
                    .first()
                    .and_then(|quasi| quasi.value.cooked.as_ref())
                    .map(|cooked| cooked.as_str()),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Check if an expression is `Template.<name>` (or `Template[<key>]`)
pub fn is_template(expr: &Expression) -> bool {
    let Some(member) = expr.without_parentheses().as_member_expression() else {
        return false;
    };
    if matches!(member, MemberExpression::PrivateFieldExpression(_)) {
        return false;
    }
    matches!(member.object(), Expression::Identifier(ident) if ident.name == TEMPLATE_GLOBAL)
}

/// Check if a callee is the `prop_name` property of a template,
/// e.g. `Template.foo.events` for `prop_name == "events"`
pub fn is_template_prop(callee: &Expression, prop_name: &str) -> bool {
    let Some(member) = callee.without_parentheses().as_member_expression() else {
        return false;
    };
    member_property_name(member) == Some(prop_name) && is_template(member.object())
}

/// Name of a handler parameter as far as it can be read statically
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamName {
    /// A plain identifier binding
    SimpleName(String),
    /// Destructuring, default value or rest element
    Other,
}

impl ParamName {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::SimpleName(name) => Some(name.as_str()),
            Self::Other => None,
        }
    }
}

/// A positional parameter of a function-like expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerParam {
    pub span: Span,
    pub name: ParamName,
}

impl HandlerParam {
    fn from_formal(param: &FormalParameter<'_>) -> Self {
        let name = match &param.pattern {
            BindingPattern::BindingIdentifier(ident) if param.initializer.is_none() => {
                ParamName::SimpleName(ident.name.to_string())
            }
            _ => ParamName::Other,
        };
        Self {
            span: param.span,
            name,
        }
    }
}

/// The first `count` positional parameters, counting a trailing rest
/// element (`...args`) as occupying the position after the last item
pub fn leading_params(params: &FormalParameters<'_>, count: usize) -> Vec<HandlerParam> {
    let mut result: Vec<HandlerParam> = params
        .items
        .iter()
        .take(count)
        .map(HandlerParam::from_formal)
        .collect();

    if result.len() < count {
        if let Some(rest) = &params.rest {
            result.push(HandlerParam {
                span: rest.span(),
                name: ParamName::Other,
            });
        }
    }

    result
}
