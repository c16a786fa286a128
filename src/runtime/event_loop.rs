use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Mode, Prompt};
use crate::clipboard::ClipboardPort;
use crate::config;
use crate::ui;

/// Main terminal event loop: draws the grid and dispatches key input by
/// the current mode. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    clip: &mut dyn ClipboardPort,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Structural changes (loads, clears) can leave the cursor behind.
        if !app.store.take_events().is_empty() {
            app.sync_cursor();
        }

        terminal.draw(|f| ui::draw(f, app, &settings.ui))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, clip) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Dispatch one key press. Returns true when the loop should exit.
fn handle_key_event(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    clip: &mut dyn ClipboardPort,
) -> bool {
    if matches!(app.mode, Mode::Edit { .. }) {
        match key.code {
            KeyCode::Esc => app.cancel_edit(),
            KeyCode::Enter => app.enter_pressed(),
            KeyCode::Tab => app.tab_pressed(),
            KeyCode::BackTab => app.backtab_pressed(),
            KeyCode::Backspace => {
                if let Mode::Edit { buffer } = &mut app.mode {
                    buffer.pop();
                }
            }
            KeyCode::Char(c) if !c.is_control() => {
                if let Mode::Edit { buffer } = &mut app.mode {
                    buffer.push(c);
                }
            }
            _ => {}
        }
        return false;
    }

    if let Mode::Prompt(prompt) = app.mode.clone() {
        return handle_prompt_key(key, prompt, settings, app);
    }

    handle_browse_key(key, settings, app, clip)
}

fn handle_prompt_key(
    key: KeyEvent,
    prompt: Prompt,
    settings: &config::Settings,
    app: &mut App,
) -> bool {
    match prompt {
        Prompt::AddPath { mut buffer } => match key.code {
            KeyCode::Esc => app.mode = Mode::Browse,
            KeyCode::Enter => {
                app.mode = Mode::Browse;
                let input = buffer.trim();
                if !input.is_empty() {
                    app.add_inputs(&[PathBuf::from(input)], &settings.loader);
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                app.mode = Mode::Prompt(Prompt::AddPath { buffer });
            }
            KeyCode::Char(c) if !c.is_control() => {
                buffer.push(c);
                app.mode = Mode::Prompt(Prompt::AddPath { buffer });
            }
            _ => {}
        },
        Prompt::CoverPath { mut buffer } => match key.code {
            KeyCode::Esc => app.mode = Mode::Browse,
            KeyCode::Enter => {
                app.mode = Mode::Browse;
                let input = buffer.trim();
                if !input.is_empty() {
                    app.apply_cover(std::path::Path::new(input));
                }
            }
            KeyCode::Backspace => {
                buffer.pop();
                app.mode = Mode::Prompt(Prompt::CoverPath { buffer });
            }
            KeyCode::Char(c) if !c.is_control() => {
                buffer.push(c);
                app.mode = Mode::Prompt(Prompt::CoverPath { buffer });
            }
            _ => {}
        },
        Prompt::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                app.mode = Mode::Browse;
                app.clear_all();
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.mode = Mode::Browse;
            }
            _ => {}
        },
        Prompt::ConfirmQuit => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => return true,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.mode = Mode::Browse;
            }
            _ => {}
        },
    }

    false
}

fn handle_browse_key(
    key: KeyEvent,
    _settings: &config::Settings,
    app: &mut App,
    clip: &mut dyn ClipboardPort,
) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        KeyCode::Char('q') if ctrl => {
            if app.modified_count() > 0 {
                app.mode = Mode::Prompt(Prompt::ConfirmQuit);
            } else {
                return true;
            }
        }
        KeyCode::Char('s') if ctrl => app.save(),
        KeyCode::Char('c') if ctrl => app.copy_selection(clip),
        KeyCode::Char('v') if ctrl => app.paste_selection(clip),
        KeyCode::Char('o') if ctrl => {
            app.mode = Mode::Prompt(Prompt::AddPath {
                buffer: String::new(),
            });
        }
        KeyCode::Char('g') if ctrl => {
            app.mode = Mode::Prompt(Prompt::CoverPath {
                buffer: String::new(),
            });
        }
        KeyCode::Char('x') if ctrl => {
            if !app.has_tracks() {
                return false;
            }
            if app.modified_count() > 0 {
                app.mode = Mode::Prompt(Prompt::ConfirmClear);
            } else {
                app.clear_all();
            }
        }
        KeyCode::Up if shift => app.extend_cursor(crate::nav::Dir::Up),
        KeyCode::Down if shift => app.extend_cursor(crate::nav::Dir::Down),
        KeyCode::Left if shift => app.extend_cursor(crate::nav::Dir::Left),
        KeyCode::Right if shift => app.extend_cursor(crate::nav::Dir::Right),
        KeyCode::Up => app.move_cursor(crate::nav::Dir::Up),
        KeyCode::Down => app.move_cursor(crate::nav::Dir::Down),
        KeyCode::Left => app.move_cursor(crate::nav::Dir::Left),
        KeyCode::Right => app.move_cursor(crate::nav::Dir::Right),
        KeyCode::Enter => app.enter_pressed(),
        KeyCode::Tab => app.tab_pressed(),
        KeyCode::BackTab => app.backtab_pressed(),
        KeyCode::F(2) => app.begin_edit(None),
        KeyCode::Delete | KeyCode::Backspace => app.delete_selection(),
        KeyCode::Char(c) if !ctrl && !c.is_control() => app.begin_edit(Some(c)),
        _ => {}
    }

    false
}
