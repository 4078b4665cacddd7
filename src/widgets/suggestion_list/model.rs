use crate::search::engine::Origin;
use crate::ui::span::{Span, SpanLine, line_text};

/// One rendered row, tagged with its variant so hosts can recycle it.
/// A row keeps its span buffer across refills; reuse is an allocation
/// reuse, not just an identity trick.
#[derive(Debug, Clone)]
pub struct Row {
    variant: Origin,
    spans: SpanLine,
}

impl Row {
    pub(super) fn new(variant: Origin) -> Self {
        Self {
            variant,
            spans: Vec::new(),
        }
    }

    pub fn variant(&self) -> Origin {
        self.variant
    }

    pub fn spans(&self) -> &[Span] {
        self.spans.as_slice()
    }

    pub fn text(&self) -> String {
        line_text(self.spans.as_slice())
    }

    pub(super) fn spans_mut(&mut self) -> &mut SpanLine {
        &mut self.spans
    }
}
