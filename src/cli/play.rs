//! Play command implementation - interactive TUI.

use super::output::print_summary;
use super::{CliError, OutputFormat, game_config};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use merge2048::{Cell, Command, Coord, Direction, EndReason, Session, SessionState};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::io::stdout;

/// Tile width in terminal columns, borders included.
const TILE_WIDTH: u16 = 10;
/// Tile height in terminal rows, borders included.
const TILE_HEIGHT: u16 = 5;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the session cannot be created or the TUI fails.
pub(crate) fn execute(
    rows: u16,
    cols: u16,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut session = Session::from_config(&game_config(rows, cols, seed))?;

    run_tui(&mut session)?;

    print_summary(&session, format)
}

fn run_tui(session: &mut Session) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, session);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop<B: Backend>(terminal: &mut Terminal<B>, session: &mut Session) -> Result<(), CliError> {
    loop {
        terminal.draw(|f| ui(f, session))?;

        // Blocks until the next terminal event
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match key_command(key.code) {
            Some(Command::Quit) => {
                session.quit();
                return Ok(());
            }
            Some(Command::Move(direction)) if !session.is_terminated() => {
                session.apply_player_move(direction)?;
            }
            _ => {}
        }
    }
}

/// Map a key press to a command: arrows, WASD or hjkl move, q or Esc quits.
fn key_command(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Command::Move(Direction::Up),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Command::Move(Direction::Left),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Command::Move(Direction::Down),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Command::Move(Direction::Right),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn ui(f: &mut Frame, session: &Session) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Board
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], session);
    render_board(f, chunks[1], session);
    render_footer(f, chunks[2], session);
}

fn render_header(f: &mut Frame, area: Rect, session: &Session) {
    let status = match session.state() {
        SessionState::InProgress => "PLAYING",
        SessionState::Terminated(EndReason::BoardFull) => "GAME OVER",
        SessionState::Terminated(EndReason::Quit) => "QUIT",
    };

    let title = format!(
        " SCORE: {} | Moves: {} | {} ",
        session.score(),
        session.moves(),
        status
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, area: Rect, session: &Session) {
    let grid = session.grid();

    let board_w = grid.cols().saturating_mul(TILE_WIDTH).saturating_add(2);
    let board_h = grid.rows().saturating_mul(TILE_HEIGHT).saturating_add(2);
    let board_area = Rect {
        x: area.x + area.width.saturating_sub(board_w) / 2,
        y: area.y + area.height.saturating_sub(board_h) / 2,
        width: board_w,
        height: board_h,
    }
    .intersection(area);

    let board_block = Block::default().borders(Borders::ALL).title(" MERGE 2048 ");
    f.render_widget(board_block, board_area);

    for (coord, cell) in grid.iter() {
        let cell_area = tile_rect(board_area, coord).intersection(board_area);
        if cell_area.is_empty() {
            continue;
        }
        f.render_widget(tile_widget(cell), cell_area);
    }

    if session.state() == SessionState::Terminated(EndReason::BoardFull) {
        let banner = " GAME OVER - Press 'q' ";
        let width = u16::try_from(banner.len())
            .unwrap_or(u16::MAX)
            .min(board_area.width);
        let mid = Rect {
            x: board_area.x + board_area.width.saturating_sub(width) / 2,
            y: board_area.y + board_area.height / 2,
            width,
            height: 1,
        }
        .intersection(board_area);

        let p = Paragraph::new(banner)
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        f.render_widget(Clear, mid);
        f.render_widget(p, mid);
    }
}

/// Screen area of the tile at `coord`, inside the board border.
fn tile_rect(board_area: Rect, coord: Coord) -> Rect {
    Rect {
        x: board_area
            .x
            .saturating_add(1)
            .saturating_add(coord.col.saturating_mul(TILE_WIDTH)),
        y: board_area
            .y
            .saturating_add(1)
            .saturating_add(coord.row.saturating_mul(TILE_HEIGHT)),
        width: TILE_WIDTH,
        height: TILE_HEIGHT,
    }
}

fn tile_widget(cell: Cell) -> Paragraph<'static> {
    match cell.value() {
        Some(value) => {
            // Center the value vertically inside the bordered tile
            let lines = vec![Line::from(""), Line::from(value.to_string())];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL))
                .style(tile_style(value))
        }
        None => Paragraph::new("").block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::DarkGray)),
        ),
    }
}

/// Distinct colors for each tile tier.
fn tile_style(value: u64) -> Style {
    let (fg, bg) = match value {
        2 => (Color::Black, Color::White),
        4 => (Color::Black, Color::Yellow),
        8 => (Color::White, Color::LightRed),
        16 => (Color::White, Color::Red),
        32 => (Color::White, Color::Magenta),
        64 => (Color::White, Color::Blue),
        128 => (Color::White, Color::Cyan),
        256 => (Color::Black, Color::LightCyan),
        512 => (Color::Black, Color::Green),
        1024 => (Color::White, Color::DarkGray),
        2048 => (Color::Yellow, Color::Black),
        _ => (Color::Red, Color::Black),
    };
    Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn render_footer(f: &mut Frame, area: Rect, session: &Session) {
    let controls = if session.is_terminated() {
        " [q] Quit "
    } else {
        " [←↑↓→ / WASD / hjkl] Move  [q] Quit "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}
