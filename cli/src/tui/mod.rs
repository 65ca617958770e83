pub mod app;
pub mod ui;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use taskboard_core::{BoardService, HttpTaskStore};

use crate::tui::app::{App, InputMode};

pub fn run(service: BoardService<HttpTaskStore>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state; a failed first fetch surfaces as a notification
    let mut app = App::new(service);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err);
    }

    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| io::Error::other(e.to_string()))?;

        if !event::poll(Duration::from_millis(250))? {
            // Idle tick; catches the day rolling over at midnight
            app.tick();
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::Normal => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    KeyCode::Down | KeyCode::Char('j') => app.next(),
                    KeyCode::Up | KeyCode::Char('k') => app.previous(),
                    KeyCode::Right | KeyCode::Char('l') => app.cycle_category(true),
                    KeyCode::Left | KeyCode::Char('h') => app.cycle_category(false),
                    KeyCode::Char('s') => app.toggle_sort(),
                    KeyCode::Char('f') => app.toggle_favorite(),
                    KeyCode::Char('x') => app.toggle_archived(),
                    KeyCode::Char('d') | KeyCode::Delete => app.delete_task(),
                    KeyCode::Char('a') => app.enter_add_mode(),
                    KeyCode::Char('e') => app.enter_edit_mode(),
                    KeyCode::Char('r') => app.refresh(),
                    _ => {}
                },
                InputMode::Adding | InputMode::Editing(_) => match key.code {
                    KeyCode::Enter => app.submit_command(),
                    KeyCode::Esc => app.exit_input_mode(),
                    KeyCode::Char(c) => app.input_char(c),
                    KeyCode::Backspace => app.delete_char(),
                    KeyCode::Left => app.move_cursor_left(),
                    KeyCode::Right => app.move_cursor_right(),
                    _ => {}
                },
            }
        }
    }
}
