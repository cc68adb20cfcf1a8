//! TUI rendering with ratatui
//!
//! Draws the maze as a table of words beside the sentence progress.

use super::app::{MazeApp, MessageStyle};
use crate::core::Pos;
use crate::puzzles::maze::MazeCell;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &MazeApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Maze and side panel
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_maze(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🧭 SENTENCE MAZE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(cell: &MazeCell, on_hint: bool) -> Style {
    let base = Style::default();
    if cell.is_current {
        base.fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else if cell.is_start {
        base.fg(Color::Green).add_modifier(Modifier::BOLD)
    } else if cell.is_end {
        base.fg(Color::Red).add_modifier(Modifier::BOLD)
    } else if on_hint {
        base.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
    } else if cell.is_visited {
        base.fg(Color::Blue)
    } else if cell.is_path {
        base.fg(Color::White)
    } else {
        base.fg(Color::DarkGray)
    }
}

fn render_maze(f: &mut Frame, app: &MazeApp, area: Rect) {
    let grid = &app.game.maze().grid;
    let width = grid
        .iter()
        .filter_map(|(_, cell)| cell.word.as_ref().map(String::len))
        .max()
        .unwrap_or(1);
    let hint = app.hint.as_deref().unwrap_or_default();

    let lines: Vec<Line> = (0..grid.rows())
        .map(|row| {
            let spans: Vec<Span> = (0..grid.cols())
                .filter_map(|col| {
                    let pos = Pos::new(row, col);
                    let cell = grid.get(pos)?;
                    let word = cell.word.as_deref().unwrap_or("");
                    Some(Span::styled(
                        format!(" {word:^width$} "),
                        cell_style(cell, hint.contains(&pos)),
                    ))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let maze = Paragraph::new(lines).block(
        Block::default()
            .title(" Maze ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(maze, area);
}

fn render_side_panel(f: &mut Frame, app: &MazeApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Sentence
            Constraint::Length(3), // Progress
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    render_sentence(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_sentence(f: &mut Frame, app: &MazeApp, area: Rect) {
    let collected = app.game.collected().len();
    let spans: Vec<Span> = app
        .game
        .maze()
        .sentence
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i < collected {
                Span::styled(
                    format!("{word} "),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::styled(
                    format!("{} ", "_".repeat(word.len())),
                    Style::default().fg(Color::DarkGray),
                )
            }
        })
        .collect();

    let paragraph = Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .title(" Sentence ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_progress(f: &mut Frame, app: &MazeApp, area: Rect) {
    let collected = app.game.collected().len();
    let needed = app.game.maze().sentence.len().max(1);
    let percent = u16::try_from(collected * 100 / needed).unwrap_or(100).min(100);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Words Collected ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if app.game.is_complete() {
            Color::Green
        } else {
            Color::Cyan
        }))
        .percent(percent)
        .label(format!("{collected}/{needed} words"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &MazeApp, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));
    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &MazeApp, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(area);

    let moves = Paragraph::new(format!("Moves: {}", app.game.moves())).alignment(Alignment::Center);
    f.render_widget(moves, chunks[0]);

    let best = app
        .stats
        .best_moves
        .map_or_else(|| "-".to_string(), |b| b.to_string());
    let stats = Paragraph::new(format!(
        "Solved: {}/{} | Best: {best}",
        app.stats.mazes_solved, app.stats.mazes_played
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("←↑↓→/WASD: Move | h: Hint | n: New Maze | q: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
