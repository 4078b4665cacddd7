use crate::terminal::input_event::{KeyCode, KeyEvent, KeyModifiers};
use crate::terminal::terminal_event::TerminalEvent;
use crate::ui::span::SpanLine;
use crate::ui::style::{Color, Style};
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::style::{
    Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Stdout, Write};
use std::time::Duration;

/// Thin crossterm backend: raw-mode lifecycle, key mapping, and span-line
/// painting. Everything above this module speaks crate types only.
pub struct Terminal {
    stdout: Stdout,
    width: u16,
    height: u16,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let stdout = io::stdout();
        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            width,
            height,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn enter_raw_mode(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()
    }

    pub fn exit_raw_mode(&mut self) -> io::Result<()> {
        terminal::disable_raw_mode()
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        execute!(self.stdout, cursor::Show)
    }

    pub fn poll(&mut self, timeout: Duration) -> io::Result<bool> {
        event::poll(timeout)
    }

    /// Read one event, mapping crossterm keys onto crate key types. Key
    /// release events and event kinds this crate does not model come back
    /// as `None`.
    pub fn read_event(&mut self) -> io::Result<Option<TerminalEvent>> {
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Ok(Some(TerminalEvent::Key(map_key(key))))
            }
            Event::Resize(width, height) => {
                self.width = width;
                self.height = height;
                Ok(Some(TerminalEvent::Resize { width, height }))
            }
            _ => Ok(None),
        }
    }

    /// Repaint the whole screen from `lines`, top-left anchored. Lines past
    /// the bottom edge are dropped.
    pub fn draw_lines(&mut self, lines: &[SpanLine]) -> io::Result<()> {
        queue!(
            self.stdout,
            cursor::MoveTo(0, 0),
            terminal::Clear(terminal::ClearType::All)
        )?;
        for (row, line) in lines.iter().enumerate() {
            if row >= usize::from(self.height) {
                break;
            }
            queue!(self.stdout, cursor::MoveTo(0, row as u16))?;
            for span in line {
                apply_style(&mut self.stdout, span.style)?;
                queue!(
                    self.stdout,
                    Print(span.text.as_str()),
                    ResetColor,
                    SetAttribute(Attribute::Reset)
                )?;
            }
        }
        self.stdout.flush()
    }
}

fn apply_style(stdout: &mut Stdout, style: Style) -> io::Result<()> {
    if let Some(color) = style.color {
        queue!(stdout, SetForegroundColor(map_color(color)))?;
    }
    if let Some(color) = style.background {
        queue!(stdout, SetBackgroundColor(map_color(color)))?;
    }
    if style.bold {
        queue!(stdout, SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn map_color(color: Color) -> crossterm::style::Color {
    match color {
        Color::Reset => crossterm::style::Color::Reset,
        Color::Black => crossterm::style::Color::Black,
        Color::Red => crossterm::style::Color::Red,
        Color::Green => crossterm::style::Color::Green,
        Color::Yellow => crossterm::style::Color::Yellow,
        Color::Blue => crossterm::style::Color::Blue,
        Color::Magenta => crossterm::style::Color::Magenta,
        Color::Cyan => crossterm::style::Color::Cyan,
        Color::White => crossterm::style::Color::White,
        Color::DarkGrey => crossterm::style::Color::DarkGrey,
    }
}

fn map_key(key: event::KeyEvent) -> KeyEvent {
    let code = match key.code {
        event::KeyCode::Char(ch) => KeyCode::Char(ch),
        event::KeyCode::Backspace => KeyCode::Backspace,
        event::KeyCode::Delete => KeyCode::Delete,
        event::KeyCode::Enter => KeyCode::Enter,
        event::KeyCode::Esc => KeyCode::Esc,
        event::KeyCode::Left => KeyCode::Left,
        event::KeyCode::Right => KeyCode::Right,
        event::KeyCode::Up => KeyCode::Up,
        event::KeyCode::Down => KeyCode::Down,
        event::KeyCode::Home => KeyCode::Home,
        event::KeyCode::End => KeyCode::End,
        event::KeyCode::Tab => KeyCode::Tab,
        _ => KeyCode::Other,
    };

    let mut modifiers = KeyModifiers::NONE;
    if key.modifiers.contains(event::KeyModifiers::SHIFT) {
        modifiers |= KeyModifiers::SHIFT;
    }
    if key.modifiers.contains(event::KeyModifiers::CONTROL) {
        modifiers |= KeyModifiers::CONTROL;
    }
    if key.modifiers.contains(event::KeyModifiers::ALT) {
        modifiers |= KeyModifiers::ALT;
    }

    KeyEvent::new(code, modifiers)
}
