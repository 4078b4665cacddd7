pub mod span;
pub mod style;
pub mod truncate;

pub use span::{Span, SpanLine, line_text};
pub use style::{Color, Style};
