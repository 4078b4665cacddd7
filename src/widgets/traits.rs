use crate::terminal::KeyEvent;
use crate::ui::span::SpanLine;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMode {
    /// Node does not participate in focus cycling.
    None,
    /// A single focusable leaf.
    Leaf,
    /// A component that manages focus internally among its children.
    Group,
}

// ---------------------------------------------------------------------------
// Render context & output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct RenderContext {
    pub focused_id: Option<String>,
    /// Available columns. Zero means unknown; widgets skip truncation.
    pub width: u16,
}

impl RenderContext {
    pub fn new(width: u16) -> Self {
        Self {
            focused_id: None,
            width,
        }
    }

    pub fn with_focus(mut self, id: impl Into<String>) -> Self {
        self.focused_id = Some(id.into());
        self
    }

    pub fn is_focused(&self, id: &str) -> bool {
        self.focused_id.as_deref().is_some_and(|focused| focused == id)
    }
}

#[derive(Debug, Clone, Default)]
pub struct DrawOutput {
    pub lines: Vec<SpanLine>,
}

// ---------------------------------------------------------------------------
// Drawable
// ---------------------------------------------------------------------------

pub trait Drawable {
    fn id(&self) -> &str;
    fn draw(&self, ctx: &RenderContext) -> DrawOutput;
}

// ---------------------------------------------------------------------------
// InteractionResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    Submitted { value: String },
}

#[derive(Debug, Clone, Default)]
pub struct InteractionResult {
    pub handled: bool,
    pub request_render: bool,
    pub actions: Vec<WidgetAction>,
}

impl InteractionResult {
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn handled() -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: Vec::new(),
        }
    }

    pub fn with_action(action: WidgetAction) -> Self {
        Self {
            handled: true,
            request_render: true,
            actions: vec![action],
        }
    }

    pub fn merge(&mut self, other: Self) {
        self.handled |= other.handled;
        self.request_render |= other.request_render;
        self.actions.extend(other.actions);
    }
}

// ---------------------------------------------------------------------------
// Interactive
// ---------------------------------------------------------------------------

pub trait Interactive {
    fn focus_mode(&self) -> FocusMode;

    fn on_key(&mut self, key: KeyEvent) -> InteractionResult;

    fn value(&self) -> Option<String> {
        None
    }
}
