use std::io;
use std::time::Duration;

use suggestbox::config::SearchBoxConfig;
use suggestbox::terminal::{KeyCode, KeyModifiers, Terminal, TerminalEvent};
use suggestbox::ui::span::Span;
use suggestbox::ui::style::{Color, Style};
use suggestbox::widgets::search_box::SearchBox;
use suggestbox::widgets::traits::{Drawable, Interactive, RenderContext, WidgetAction};

const DEMO_CONFIG: &str = r#"
history:
  - green tea
  - ginger ale
  - espresso
suggestions:
  - green smoothie
  - grapefruit juice
  - ginger beer
  - espresso tonic
  - earl grey
  - matcha latte
history_icon:
  glyph: "↺"
  color: yellow
suggestion_icon:
  glyph: "◌"
  color: darkgrey
ellipsize: true
max_visible: 5
placeholder: Type to search, Enter to submit, Esc to quit
"#;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = SearchBoxConfig::from_yaml(DEMO_CONFIG)?;
    let mut search_box = SearchBox::new("demo", "Search", config);

    let mut terminal = Terminal::new()?;
    terminal.enter_raw_mode()?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, &mut search_box);

    terminal.show_cursor()?;
    terminal.exit_raw_mode()?;

    result.map_err(Into::into)
}

fn event_loop(terminal: &mut Terminal, search_box: &mut SearchBox) -> io::Result<()> {
    let mut last_submitted: Option<String> = None;
    let mut render_requested = true;

    loop {
        if terminal.poll(Duration::from_millis(100))? {
            match terminal.read_event()? {
                Some(TerminalEvent::Key(key)) => {
                    if key.code == KeyCode::Esc {
                        break;
                    }
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    let result = search_box.on_key(key);
                    for action in &result.actions {
                        let WidgetAction::Submitted { value } = action;
                        last_submitted = Some(value.clone());
                    }
                    if result.request_render {
                        render_requested = true;
                    }
                }
                Some(TerminalEvent::Resize { .. }) => {
                    render_requested = true;
                }
                None => {}
            }
        }

        if render_requested {
            let (width, _) = terminal.size();
            let ctx = RenderContext::new(width).with_focus("demo");
            let mut lines = search_box.draw(&ctx).lines;
            if let Some(value) = &last_submitted {
                lines.push(Vec::new());
                lines.push(vec![Span::styled(
                    format!("submitted: {value}"),
                    Style::new().color(Color::DarkGrey),
                )]);
            }
            terminal.draw_lines(&lines)?;
            render_requested = false;
        }
    }

    Ok(())
}
