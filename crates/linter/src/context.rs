//! Lint context for rule execution

use crate::Diagnostic;

/// Per-file context owned by the runner while rules execute
pub struct LintContext<'a> {
    /// Source code being linted
    source_text: &'a str,
    /// Collected diagnostics
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LintContext<'a> {
    pub fn new(source_text: &'a str) -> Self {
        Self {
            source_text,
            diagnostics: Vec::new(),
        }
    }

    /// Get the source text
    pub fn source_text(&self) -> &'a str {
        self.source_text
    }

    /// Report a diagnostic
    pub fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// 1-based line and column (in chars) of a byte offset
    pub fn line_col(&self, offset: u32) -> (usize, usize) {
        let offset = (offset as usize).min(self.source_text.len());
        let before = &self.source_text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }

    /// Consume the context and return all diagnostics
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_span::Span;

    #[test]
    fn test_line_col() {
        let ctx = LintContext::new("ab\ncd\n\u{e9}f");
        assert_eq!(ctx.line_col(0), (1, 1));
        assert_eq!(ctx.line_col(1), (1, 2));
        assert_eq!(ctx.line_col(3), (2, 1));
        assert_eq!(ctx.line_col(4), (2, 2));
        // 'é' is two bytes but one column
        assert_eq!(ctx.line_col(8), (3, 2));
        assert_eq!(ctx.line_col(100), (3, 3));
    }

    #[test]
    fn test_report_keeps_order() {
        let mut ctx = LintContext::new("function (e, t) {}");
        ctx.report(Diagnostic::warning("eventmap-params", Span::new(10, 11), "first"));
        ctx.report(Diagnostic::warning("eventmap-params", Span::new(13, 14), "second"));
        let diagnostics = ctx.into_diagnostics();
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].message, "first");
        assert_eq!(diagnostics[1].span(), Span::new(13, 14));
    }
}
