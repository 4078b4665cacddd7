use super::model::Row;
use crate::config::Icon;
use crate::ui::span::Span;
use crate::ui::style::{Color, Style};
use crate::ui::truncate;

#[derive(Debug, Clone, Copy)]
pub(super) struct RowState {
    pub active: bool,
    pub ellipsize: bool,
    /// Columns available for the row. Zero disables truncation.
    pub width: usize,
}

/// Refill `row` in place: optional icon slot first, then the entry text in
/// its original case, single-line ellipsized when configured.
pub(super) fn fill_row(row: &mut Row, text: &str, icon: Option<&Icon>, state: RowState) {
    let spans = row.spans_mut();
    spans.clear();

    let mut used = 0usize;
    if let Some(icon) = icon {
        let style = icon
            .color
            .map(|color| Style::new().color(color))
            .unwrap_or_default();
        spans.push(Span::styled(format!("{} ", icon.glyph), style));
        used += truncate::display_width(icon.glyph.as_str()) + 1;
    }

    let base_style = if state.active {
        Style::new().color(Color::Cyan).bold()
    } else {
        Style::default()
    };

    let body = if state.ellipsize && state.width > used {
        truncate::ellipsize(text, state.width - used)
    } else {
        text.to_string()
    };
    spans.push(Span::styled(body, base_style));
}

#[cfg(test)]
mod tests {
    use super::{RowState, fill_row};
    use crate::config::Icon;
    use crate::search::engine::Origin;
    use crate::ui::style::Color;
    use crate::widgets::suggestion_list::model::Row;

    fn state() -> RowState {
        RowState {
            active: false,
            ellipsize: false,
            width: 0,
        }
    }

    #[test]
    fn icon_slot_is_omitted_without_an_icon() {
        let mut row = Row::new(Origin::Suggestion);
        fill_row(&mut row, "apple", None, state());
        assert_eq!(row.text(), "apple");
        assert_eq!(row.spans().len(), 1);
    }

    #[test]
    fn icon_glyph_leads_the_row() {
        let mut row = Row::new(Origin::History);
        let icon = Icon::new("⌚").with_color(Color::Yellow);
        fill_row(&mut row, "apple pie", Some(&icon), state());
        assert_eq!(row.text(), "⌚ apple pie");
        assert_eq!(row.spans()[0].style.color, Some(Color::Yellow));
    }

    #[test]
    fn ellipsize_accounts_for_the_icon_slot() {
        let mut row = Row::new(Origin::Suggestion);
        let icon = Icon::new("◌");
        fill_row(
            &mut row,
            "application",
            Some(&icon),
            RowState {
                active: false,
                ellipsize: true,
                width: 8,
            },
        );
        // Icon plus space take 2 columns, leaving 6 for the text.
        assert_eq!(row.text(), "◌ appli…");
    }

    #[test]
    fn zero_width_disables_truncation() {
        let mut row = Row::new(Origin::Suggestion);
        fill_row(
            &mut row,
            "application",
            None,
            RowState {
                active: false,
                ellipsize: true,
                width: 0,
            },
        );
        assert_eq!(row.text(), "application");
    }

    #[test]
    fn refill_replaces_previous_content() {
        let mut row = Row::new(Origin::History);
        fill_row(&mut row, "milk", None, state());
        fill_row(&mut row, "bread", None, state());
        assert_eq!(row.text(), "bread");
        assert_eq!(row.spans().len(), 1);
    }
}
