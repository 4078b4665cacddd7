use crate::config::SearchBoxConfig;
use crate::search::engine::MatchEngine;
use crate::terminal::{KeyCode, KeyEvent};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use crate::widgets::base::ComponentBase;
use crate::widgets::suggestion_list::SuggestionList;
use crate::widgets::text_edit;
use crate::widgets::traits::{
    DrawOutput, Drawable, FocusMode, InteractionResult, Interactive, RenderContext, WidgetAction,
};

/// A query line with a live suggestion dropdown. Every edit re-runs the
/// match engine and republishes rows to the list; Enter submits the active
/// row, or the raw query when nothing matches.
pub struct SearchBox {
    base: ComponentBase,
    query: String,
    cursor: usize,
    placeholder: Option<String>,
    engine: MatchEngine,
    list: SuggestionList,
}

impl SearchBox {
    pub fn new(id: impl Into<String>, label: impl Into<String>, config: SearchBoxConfig) -> Self {
        let id = id.into();
        let list = SuggestionList::from_config(format!("{id}__list"), &config);
        let engine = MatchEngine::new(config.history, config.suggestions);
        let mut search_box = Self {
            base: ComponentBase::new(id, label),
            query: String::new(),
            cursor: 0,
            placeholder: config.placeholder,
            engine,
            list,
        };
        search_box.refresh();
        search_box
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.cursor = text_edit::char_count(&self.query);
        self.refresh();
    }

    pub fn list(&self) -> &SuggestionList {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut SuggestionList {
        &mut self.list
    }

    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    fn refresh(&mut self) {
        self.list.set_results(self.engine.filter(&self.query));
    }

    fn accept_active(&mut self) -> Option<String> {
        let text = self.list.active_text()?.to_string();
        self.set_query(text.clone());
        Some(text)
    }

    fn handle_edit(&mut self, edited: bool) -> InteractionResult {
        if !edited {
            return InteractionResult::ignored();
        }
        self.refresh();
        InteractionResult::handled()
    }
}

impl Drawable for SearchBox {
    fn id(&self) -> &str {
        self.base.id()
    }

    fn draw(&self, ctx: &RenderContext) -> DrawOutput {
        let focused = ctx.is_focused(self.base.id());
        let mut lines = Vec::<SpanLine>::new();

        let mut query_line = vec![Span::new(format!(
            "{} ",
            self.base.focus_marker(focused)
        ))];
        if !self.base.label().is_empty() {
            query_line.push(Span::styled(
                format!("{}: ", self.base.label()),
                Style::new().bold(),
            ));
        }
        if self.query.is_empty() {
            if let Some(placeholder) = &self.placeholder {
                query_line.push(Span::styled(
                    placeholder.clone(),
                    Style::new().color(Color::DarkGrey),
                ));
            }
        } else {
            query_line.push(Span::new(self.query.clone()));
        }
        lines.push(query_line);

        let list_ctx = RenderContext {
            focused_id: if focused {
                Some(self.list.id().to_string())
            } else {
                None
            },
            width: ctx.width,
        };
        lines.extend(self.list.draw(&list_ctx).lines);

        DrawOutput { lines }
    }
}

impl Interactive for SearchBox {
    fn focus_mode(&self) -> FocusMode {
        FocusMode::Group
    }

    fn on_key(&mut self, key: KeyEvent) -> InteractionResult {
        if !key.modifiers.is_empty() {
            return InteractionResult::ignored();
        }

        match key.code {
            KeyCode::Up => {
                if self.list.move_active(-1) {
                    InteractionResult::handled()
                } else {
                    InteractionResult::ignored()
                }
            }
            KeyCode::Down => {
                if self.list.move_active(1) {
                    InteractionResult::handled()
                } else {
                    InteractionResult::ignored()
                }
            }
            KeyCode::Enter => {
                let value = match self.accept_active() {
                    Some(text) => text,
                    None => self.query.clone(),
                };
                InteractionResult::with_action(WidgetAction::Submitted { value })
            }
            KeyCode::Char(ch) => {
                if ch.is_control() {
                    return InteractionResult::ignored();
                }
                text_edit::insert_char(&mut self.query, &mut self.cursor, ch);
                self.refresh();
                InteractionResult::handled()
            }
            KeyCode::Backspace => {
                let edited = text_edit::backspace_char(&mut self.query, &mut self.cursor);
                self.handle_edit(edited)
            }
            KeyCode::Delete => {
                let edited = text_edit::delete_char(&mut self.query, &mut self.cursor);
                self.handle_edit(edited)
            }
            KeyCode::Left => {
                if text_edit::move_left(&mut self.cursor, &self.query) {
                    InteractionResult::handled()
                } else {
                    InteractionResult::ignored()
                }
            }
            KeyCode::Right => {
                if text_edit::move_right(&mut self.cursor, &self.query) {
                    InteractionResult::handled()
                } else {
                    InteractionResult::ignored()
                }
            }
            KeyCode::Home => {
                self.cursor = 0;
                InteractionResult::handled()
            }
            KeyCode::End => {
                self.cursor = text_edit::char_count(&self.query);
                InteractionResult::handled()
            }
            _ => InteractionResult::ignored(),
        }
    }

    fn value(&self) -> Option<String> {
        Some(self.query.clone())
    }
}
