//! Terminal UI for the chat screen, using ratatui.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};

use pesan_shared::constants::APP_NAME;
use pesan_shared::SessionRecord;
use pesan_store::Database;

use crate::chat::ChatScreen;
use crate::gallery::PathGallery;
use crate::render::{bubble, Align};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// How the chat screen was left.
#[derive(Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    /// User asked to log out; the session record should be cleared.
    Logout,
    /// User quit the application.
    Quit,
}

enum Action {
    Continue,
    PickImage(Option<String>),
    Logout,
    Quit,
}

/// Initialize the terminal.
fn init() -> io::Result<Tui> {
    execute!(io::stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    let backend = CrosstermBackend::new(io::stdout());
    Terminal::new(backend)
}

/// Restore the terminal to its original state.
fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the chat screen until logout or quit.
pub fn run_chat(db: &Database, session: SessionRecord) -> anyhow::Result<ChatOutcome> {
    let mut chat = ChatScreen::mount(db, session);
    let mut terminal = init()?;

    run_then_restore(|| run_loop(&mut terminal, &mut chat), restore)
}

/// Run `body`, then run `cleanup` whether or not `body` failed.
///
/// A draw or input error must not leave the terminal in raw mode on the
/// alternate screen, so cleanup happens before the error propagates.
fn run_then_restore<T>(
    body: impl FnOnce() -> anyhow::Result<T>,
    cleanup: impl FnOnce() -> io::Result<()>,
) -> anyhow::Result<T> {
    let result = body();
    cleanup()?;
    result
}

fn run_loop(terminal: &mut Tui, chat: &mut ChatScreen) -> anyhow::Result<ChatOutcome> {
    loop {
        terminal.draw(|frame| draw(frame, chat))?;

        match handle_events(chat)? {
            Action::Continue => {}
            Action::PickImage(selection) => {
                let mut gallery = PathGallery::new(selection);
                chat.send_image(&mut gallery);
            }
            Action::Logout => return Ok(ChatOutcome::Logout),
            Action::Quit => return Ok(ChatOutcome::Quit),
        }
    }
}

/// Poll for and handle one batch of input events.
fn handle_events(chat: &mut ChatScreen) -> io::Result<Action> {
    if !event::poll(Duration::from_millis(250))? {
        return Ok(Action::Continue);
    }

    let Event::Key(key) = event::read()? else {
        return Ok(Action::Continue);
    };
    if key.kind != KeyEventKind::Press {
        return Ok(Action::Continue);
    }

    // A pending alert is a blocking dialog: swallow keys until dismissed.
    if chat.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            chat.alert = None;
        }
        return Ok(Action::Continue);
    }

    match key.code {
        KeyCode::Enter => {
            if chat.input.trim_start().starts_with('/') {
                return Ok(run_command(chat));
            }
            chat.send_text();
            Ok(Action::Continue)
        }
        KeyCode::Backspace => {
            chat.input.pop();
            Ok(Action::Continue)
        }
        KeyCode::Char(c) => {
            chat.input.push(c);
            Ok(Action::Continue)
        }
        KeyCode::Esc => Ok(Action::Quit),
        _ => Ok(Action::Continue),
    }
}

/// Execute a slash command typed into the composer.
fn run_command(chat: &mut ChatScreen) -> Action {
    let input = std::mem::take(&mut chat.input);
    let trimmed = input.trim();
    let (command, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (trimmed, ""),
    };

    match command {
        "/quit" => Action::Quit,
        "/logout" => Action::Logout,
        "/image" => {
            let selection = if rest.is_empty() {
                None
            } else {
                Some(rest.to_string())
            };
            Action::PickImage(selection)
        }
        other => {
            chat.alert = Some(format!("Perintah tidak dikenal: {other}"));
            Action::Continue
        }
    }
}

/// Draw the chat screen.
fn draw(frame: &mut Frame, chat: &ChatScreen) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(frame.area());

    draw_header(frame, chat, chunks[0]);
    draw_messages(frame, chat, chunks[1]);
    draw_input(frame, chat, chunks[2]);

    if let Some(ref alert) = chat.alert {
        draw_alert(frame, alert);
    }
}

fn draw_header(frame: &mut Frame, chat: &ChatScreen, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" Login sebagai: {} ", chat.session().email),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "| /image <path>  /logout  /quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {APP_NAME} ")),
    );
    frame.render_widget(header, area);
}

fn draw_messages(frame: &mut Frame, chat: &ChatScreen, area: Rect) {
    let own_email = chat.session().email.clone();
    let mut lines: Vec<Line> = Vec::new();

    // Newest-first in memory; the list reads top-down oldest to newest so
    // the latest message sits just above the composer.
    for message in chat.messages().iter().rev() {
        let b = bubble(message, message.sender == own_email);
        let alignment = match b.align {
            Align::Left => Alignment::Left,
            Align::Right => Alignment::Right,
        };
        let body_style = if b.tinted {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };

        if let Some(ref uri) = b.image {
            lines.push(
                Line::from(Span::styled(
                    format!("[gambar] {uri}"),
                    body_style.add_modifier(Modifier::ITALIC),
                ))
                .alignment(alignment),
            );
        }
        if let Some(ref text) = b.text {
            lines.push(Line::from(Span::styled(text.clone(), body_style)).alignment(alignment));
        }
        lines.push(
            Line::from(Span::styled(
                b.time,
                Style::default().fg(Color::DarkGray),
            ))
            .alignment(alignment),
        );
    }

    // Keep the tail that fits inside the bordered area.
    let visible = area.height.saturating_sub(2) as usize;
    if lines.len() > visible {
        lines.drain(..lines.len() - visible);
    }

    let list = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn draw_input(frame: &mut Frame, chat: &ChatScreen, area: Rect) {
    let content = if chat.input.is_empty() {
        Line::from(Span::styled(
            "Ketik pesan...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(chat.input.as_str())
    };

    let input = Paragraph::new(content).block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn draw_alert(frame: &mut Frame, alert: &str) {
    let area = centered_rect(60, 5, frame.area());
    let dialog = Paragraph::new(vec![
        Line::from(alert.to_string()).alignment(Alignment::Center),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// A `width_percent` wide, `height` tall rectangle centered in `base`.
fn centered_rect(width_percent: u16, height: u16, base: Rect) -> Rect {
    let width = (base.width as u32 * width_percent as u32 / 100) as u16;
    let x = base.x + (base.width.saturating_sub(width)) / 2;
    let y = base.y + (base.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height: height.min(base.height),
    }
}
