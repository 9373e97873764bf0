use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color as TuiColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Actor, Color, Player, Round};
use crate::metrics::MatchMetrics;

/// Terminal columns used per grid cell
const CELL_WIDTH: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    symbol: char,
    style: Style,
}

impl Cell {
    fn empty() -> Self {
        Self {
            symbol: ' ',
            style: Style::default(),
        }
    }
}

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, round: &Round, metrics: &MatchMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Field
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(chunks[0], round, metrics);
        frame.render_widget(stats, chunks[0]);

        let field = self.render_field(chunks[1], round);
        frame.render_widget(field, chunks[1]);

        let controls = self.render_controls(chunks[2], round);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_field(&self, _area: Rect, round: &Round) -> Paragraph<'_> {
        let lines: Vec<Line> = self
            .paint(round)
            .into_iter()
            .map(|row| {
                Line::from(
                    row.into_iter()
                        .map(|cell| Span::styled(cell.symbol.to_string(), cell.style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(TuiColor::White))
                    .title(" Light Cycles "),
            )
            .alignment(Alignment::Center)
    }

    /// Lay the cast out on a character grid, trails first, then heads,
    /// then any messages on top
    fn paint(&self, round: &Round) -> Vec<Vec<Cell>> {
        let config = round.config();
        let columns = config.columns().max(0) as usize;
        let rows = config.rows().max(0) as usize;
        let mut grid = vec![vec![Cell::empty(); columns * CELL_WIDTH]; rows];

        let mut put = |x: i32, y: i32, symbol: char, style: Style| {
            if x < 0 || y < 0 {
                return;
            }
            let (x, y) = (x as usize, y as usize);
            if y < rows && x < columns * CELL_WIDTH {
                grid[y][x] = Cell { symbol, style };
            }
        };

        let cast = round.cast();
        for cycle in cast.cycles() {
            for segment in cycle.tail() {
                let (cx, cy) = segment.position().to_cell(config.cell_size);
                let symbol = segment.text().chars().next().unwrap_or('#');
                put(
                    cx * CELL_WIDTH as i32,
                    cy,
                    symbol,
                    Style::default().fg(to_tui(segment.color())),
                );
            }
        }

        for cycle in cast.cycles() {
            let head = cycle.head();
            let (cx, cy) = head.position().to_cell(config.cell_size);
            let symbol = head.text().chars().next().unwrap_or('8');
            put(
                cx * CELL_WIDTH as i32,
                cy,
                symbol,
                Style::default()
                    .fg(to_tui(cycle.color()))
                    .add_modifier(Modifier::BOLD),
            );
        }

        for message in cast.messages() {
            let (cx, cy) = message.position().to_cell(config.cell_size);
            let text = message.text();
            let start = cx * CELL_WIDTH as i32 - text.chars().count() as i32 / 2;
            let style = Style::default()
                .fg(to_tui(message.color()))
                .add_modifier(Modifier::BOLD);
            for (i, symbol) in text.chars().enumerate() {
                put(start + i as i32, cy, symbol, style);
            }
        }

        grid
    }

    fn render_stats(&self, _area: Rect, round: &Round, metrics: &MatchMetrics) -> Paragraph<'_> {
        let colors = round.config().player_colors;
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(TuiColor::Yellow)),
            Span::styled(
                round.cast().score().points().to_string(),
                Style::default()
                    .fg(TuiColor::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("P1 wins: ", Style::default().fg(to_tui(colors[0]))),
            Span::raw(metrics.wins_for(Player::One).to_string()),
            Span::raw("    "),
            Span::styled("P2 wins: ", Style::default().fg(to_tui(colors[1]))),
            Span::raw(metrics.wins_for(Player::Two).to_string()),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(TuiColor::Yellow)),
            Span::raw(metrics.best_score.to_string()),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(TuiColor::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(TuiColor::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self, _area: Rect, round: &Round) -> Paragraph<'_> {
        let line = if round.is_over() {
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(TuiColor::Gray)),
                Span::styled(
                    "R",
                    Style::default()
                        .fg(TuiColor::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to restart or ", Style::default().fg(TuiColor::Gray)),
                Span::styled(
                    "Q",
                    Style::default()
                        .fg(TuiColor::Red)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(TuiColor::Gray)),
            ])
        } else {
            Line::from(vec![
                Span::styled("WASD", Style::default().fg(TuiColor::Cyan)),
                Span::raw(" player 1 | "),
                Span::styled("IJKL", Style::default().fg(TuiColor::Cyan)),
                Span::raw(" or "),
                Span::styled("↑↓←→", Style::default().fg(TuiColor::Cyan)),
                Span::raw(" player 2 | "),
                Span::styled("Q", Style::default().fg(TuiColor::Red)),
                Span::raw(" to quit"),
            ])
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_tui(color: Color) -> TuiColor {
    TuiColor::Rgb(color.r, color.g, color.b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, Turn};

    fn row_text(row: &[Cell]) -> String {
        row.iter().map(|c| c.symbol).collect()
    }

    #[test]
    fn test_paint_places_heads_and_trails() {
        let config = GameConfig {
            initial_cycle_length: 3,
            ..Default::default()
        };
        let round = Round::new(config);
        let grid = Renderer::new().paint(&round);

        assert_eq!(grid.len(), 40);
        assert_eq!(grid[0].len(), 60 * CELL_WIDTH);

        // player one's head is at (300, 195) -> cell (20, 13)
        let head = grid[13][20 * CELL_WIDTH];
        assert_eq!(head.symbol, '8');
        assert_eq!(head.style.fg, Some(TuiColor::Rgb(255, 0, 0)));
        assert_eq!(grid[13][19 * CELL_WIDTH].symbol, '#');
        assert_eq!(grid[13][18 * CELL_WIDTH].symbol, '#');
        assert_eq!(grid[13][17 * CELL_WIDTH].symbol, ' ');
    }

    #[test]
    fn test_paint_shows_game_over_banner() {
        let config = GameConfig {
            initial_cycle_length: 1,
            ..Default::default()
        };
        let mut round = Round::new(config);
        for direction in [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ] {
            round.queue_turn(Turn::new(Player::One, direction));
            round.tick();
        }
        assert!(round.is_over());

        let grid = Renderer::new().paint(&round);

        // banner sits on the middle row
        assert!(row_text(&grid[20]).contains("Game Over!"));
        // the crashed head is drawn in the dead color
        let head = grid[13][20 * CELL_WIDTH];
        assert_eq!(head.style.fg, Some(TuiColor::Rgb(255, 255, 255)));
    }
}
