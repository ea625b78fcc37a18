//! Source spans attached to a diagnostic.

use crate::span::Span;

/// A message pinned to a range of the chord file.
///
/// A primary label marks the statement or argument at fault. A secondary
/// label points at related context, such as the first `dot` on a string
/// that is fretted twice.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    pub(crate) fn primary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, true)
    }

    pub(crate) fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self::new(span, message, false)
    }

    fn new(span: Span, message: impl Into<String>, is_primary: bool) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_kinds() {
        let primary = Label::primary(Span::new(0..3), "here");
        let secondary = Label::secondary(Span::new(4..8), "there");

        assert!(primary.is_primary());
        assert!(!secondary.is_primary());
        assert_eq!(secondary.span(), Span::new(4..8));
        assert_eq!(secondary.message(), "there");
    }
}
