use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    DarkGrey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: bool,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Overlay `other` on top of `self`; unset fields fall through.
    pub fn merge(self, other: Style) -> Style {
        Style {
            color: other.color.or(self.color),
            background: other.background.or(self.background),
            bold: self.bold || other.bold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Color, Style};

    #[test]
    fn merge_overlays_set_fields() {
        let base = Style::new().color(Color::DarkGrey);
        let merged = base.merge(Style::new().color(Color::Cyan).bold());
        assert_eq!(merged.color, Some(Color::Cyan));
        assert!(merged.bold);
    }

    #[test]
    fn merge_keeps_base_when_other_unset() {
        let base = Style::new().color(Color::Yellow).background(Color::Black);
        let merged = base.merge(Style::new());
        assert_eq!(merged.color, Some(Color::Yellow));
        assert_eq!(merged.background, Some(Color::Black));
        assert!(!merged.bold);
    }
}
