mod model;
mod pool;
mod render;

pub use model::Row;
pub use pool::RowPool;

use crate::config::{Icon, SearchBoxConfig};
use crate::search::engine::{Origin, ResultSet};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::base::ComponentBase;
use crate::widgets::traits::{DrawOutput, Drawable, RenderContext};
use render::{RowState, fill_row};

/// The dropdown under a search box: holds the latest published
/// [`ResultSet`] and turns positions into rendered rows, dispatching on
/// each entry's origin for layout and icon.
pub struct SuggestionList {
    base: ComponentBase,
    results: ResultSet,
    history_icon: Option<Icon>,
    suggestion_icon: Option<Icon>,
    ellipsize: bool,
    max_visible: Option<usize>,
    active_index: usize,
    scroll_offset: usize,
}

impl SuggestionList {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            base: ComponentBase::new(id, ""),
            results: ResultSet::default(),
            history_icon: None,
            suggestion_icon: None,
            ellipsize: false,
            max_visible: None,
            active_index: 0,
            scroll_offset: 0,
        }
    }

    pub fn from_config(id: impl Into<String>, config: &SearchBoxConfig) -> Self {
        let mut list = Self::new(id);
        list.history_icon = config.history_icon.clone();
        list.suggestion_icon = config.suggestion_icon.clone();
        list.ellipsize = config.ellipsize;
        list.max_visible = config.max_visible;
        list
    }

    pub fn with_history_icon(mut self, icon: Icon) -> Self {
        self.history_icon = Some(icon);
        self
    }

    pub fn with_suggestion_icon(mut self, icon: Icon) -> Self {
        self.suggestion_icon = Some(icon);
        self
    }

    pub fn with_ellipsize(mut self, ellipsize: bool) -> Self {
        self.ellipsize = ellipsize;
        self
    }

    pub fn with_max_visible(mut self, max_visible: usize) -> Self {
        if max_visible == 0 {
            self.max_visible = None;
        } else {
            self.max_visible = Some(max_visible);
        }
        self
    }

    /// Publish a freshly filtered result set, replacing the previous one.
    /// Selection and scroll restart at the top.
    pub fn set_results(&mut self, results: ResultSet) {
        self.results = results;
        self.active_index = 0;
        self.scroll_offset = 0;
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    // --- row/view boundary ---

    pub fn row_count(&self) -> usize {
        self.results.len()
    }

    pub fn row_at(&self, position: usize) -> Option<(&str, Origin)> {
        self.results.get(position)
    }

    pub fn variant_count(&self) -> usize {
        Origin::COUNT
    }

    pub fn variant_of(&self, position: usize) -> Option<Origin> {
        self.results.get(position).map(|(_, origin)| origin)
    }

    /// Render the row at `position`, reusing `recycled` when its variant
    /// matches; a mismatched or absent recycled row yields a fresh one.
    /// `width` is the column budget for ellipsizing, zero for unlimited.
    pub fn render_row(&self, position: usize, recycled: Option<Row>, width: usize) -> Option<Row> {
        let (text, origin) = self.results.get(position)?;
        let mut row = match recycled {
            Some(row) if row.variant() == origin => row,
            _ => Row::new(origin),
        };
        fill_row(
            &mut row,
            text,
            self.icon_for(origin),
            RowState {
                active: position == self.active_index,
                ellipsize: self.ellipsize,
                width,
            },
        );
        Some(row)
    }

    // --- selection ---

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_text(&self) -> Option<&str> {
        self.results.get(self.active_index).map(|(text, _)| text)
    }

    pub fn move_active(&mut self, delta: isize) -> bool {
        if self.results.is_empty() {
            return false;
        }
        let len = self.results.len() as isize;
        let current = self.active_index as isize;
        let next = ((current + delta + len) % len) as usize;
        if next == self.active_index {
            return false;
        }
        self.active_index = next;
        self.ensure_visible();
        true
    }

    fn icon_for(&self, origin: Origin) -> Option<&Icon> {
        match origin {
            Origin::History => self.history_icon.as_ref(),
            Origin::Suggestion => self.suggestion_icon.as_ref(),
        }
    }

    fn ensure_visible(&mut self) {
        let Some(max_visible) = self.max_visible else {
            return;
        };
        if self.active_index < self.scroll_offset {
            self.scroll_offset = self.active_index;
        } else if self.active_index >= self.scroll_offset + max_visible {
            self.scroll_offset = self.active_index + 1 - max_visible;
        }
    }

    fn visible_range(&self) -> (usize, usize) {
        let total = self.results.len();
        match self.max_visible {
            Some(max_visible) => {
                let start = self.scroll_offset.min(total.saturating_sub(1));
                (start, (start + max_visible).min(total))
            }
            None => (0, total),
        }
    }
}

impl Drawable for SuggestionList {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = ctx.is_focused(self.base.id());
        let row_width = usize::from(ctx.width).saturating_sub(2);
        let mut lines = Vec::<SpanLine>::new();

        let (start, end) = self.visible_range();
        for position in start..end {
            let Some(row) = self.render_row(position, None, row_width) else {
                break;
            };
            let active = position == self.active_index;
            let cursor = if focused && active {
                Span::styled("❯ ", Style::new().color(Color::Yellow))
            } else {
                Span::styled("  ", Style::new().color(Color::DarkGrey))
            };
            let mut spans = vec![cursor];
            spans.extend(row.spans().iter().cloned());
            lines.push(spans);
        }

        let total = self.results.len();
        if end - start < total {
            lines.push(vec![Span::styled(
                format!("  {}-{} of {}", start + 1, end, total),
                Style::new().color(Color::DarkGrey),
            )]);
        }

        DrawOutput { lines }
    }
}
