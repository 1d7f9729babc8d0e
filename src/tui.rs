use std::io;

use anyhow::Result;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    self, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph};

use crate::pitch;
use crate::session::{Event, Session, State, KIND_LIST};

/// Run the interactive session until the user quits.
pub fn run() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal);

    // Restore the terminal even when the loop failed.
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
    let _ = terminal.show_cursor();

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut session = Session::new();

    let (width, height) = terminal::size()?;
    session.handle(Event::Resize(width, height));

    loop {
        terminal.draw(|frame| render(frame, &session))?;

        if let Some(ev) = map_event(event::read()?) {
            session.handle(ev);
        }
        if session.state == State::Quitting {
            return Ok(());
        }
    }
}

/// Map a terminal event onto the session's input alphabet. Unmapped
/// events are dropped.
fn map_event(ev: TermEvent) -> Option<Event> {
    match ev {
        TermEvent::Key(key) if key.kind == KeyEventKind::Press => match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Event::Cancel)
            }
            KeyCode::Esc | KeyCode::Char('q') => Some(Event::Cancel),
            KeyCode::Enter => Some(Event::Confirm),
            KeyCode::Up | KeyCode::Char('k') => Some(Event::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(Event::Down),
            KeyCode::PageUp => Some(Event::PageUp),
            KeyCode::PageDown => Some(Event::PageDown),
            _ => None,
        },
        TermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

fn render(frame: &mut Frame, session: &Session) {
    match session.state {
        State::SelectTonic => {
            let items: Vec<ListItem> = pitch::all()
                .iter()
                .enumerate()
                .map(|(i, p)| ListItem::new(format!("[{:02}] {}", i + 1, p.full_name())))
                .collect();
            render_list(frame, "Select Tonic", items, session.tonic_cursor);
        }
        State::SelectChordKind => {
            let items: Vec<ListItem> = KIND_LIST
                .iter()
                .enumerate()
                .map(|(i, k)| ListItem::new(format!("[{:02}] {}", i + 1, k.name())))
                .collect();
            render_list(frame, &session.chord_list_title(), items, session.chord_cursor);
        }
        State::ShowDetail => render_detail(frame, session),
        State::Quitting => {}
    }
}

fn render_list(frame: &mut Frame, title: &str, items: Vec<ListItem>, cursor: usize) {
    let list = List::new(items)
        .block(Block::new().title(Line::styled(title, title_style())))
        .highlight_style(Style::new().fg(Color::Magenta))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(list, frame.area(), &mut state);
}

fn render_detail(frame: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Paragraph::new(session.header_text()).style(title_style());
    frame.render_widget(header, chunks[0]);

    let body = Paragraph::new(session.detail.as_str()).scroll((session.scroll, 0));
    frame.render_widget(body, chunks[1]);

    let footer = Paragraph::new(format!("{:3.0}%", session.scroll_percent() * 100.0))
        .style(title_style());
    frame.render_widget(footer, chunks[2]);
}

fn title_style() -> Style {
    Style::new()
        .add_modifier(Modifier::BOLD)
        .fg(Color::White)
        .bg(Color::Magenta)
}
