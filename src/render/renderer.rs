use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::metrics::SessionMetrics;

use super::painter::BACKGROUND_COLOR;
use super::surface::{RasterSurface, Rgb};

const HEADER_ROWS: u16 = 3;
const FOOTER_ROWS: u16 = 3;

/// Lays a painted [`RasterSurface`] out in the terminal with a score header
/// and a controls footer.
///
/// Two board rows share one terminal row using the upper-half block glyph,
/// which keeps cells roughly square.
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Terminal size (columns, rows) needed to show a board of this size
    pub fn required_size(columns: usize, rows: usize) -> (u16, u16) {
        let board_rows = rows.div_ceil(2) as u16;
        (
            columns as u16 + 2,
            board_rows + 2 + HEADER_ROWS + FOOTER_ROWS,
        )
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        raster: &RasterSurface,
        score: u32,
        metrics: &SessionMetrics,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_ROWS), // Header
                Constraint::Min(0),              // Board
                Constraint::Length(FOOTER_ROWS), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(score, metrics);
        frame.render_widget(stats, chunks[0]);

        let board_area = Self::center(chunks[1], raster);
        match raster.message() {
            Some(message) => {
                let game_over = self.render_game_over(message, score);
                frame.render_widget(game_over, board_area);
            }
            None => {
                let board = self.render_board(raster);
                frame.render_widget(board, board_area);
            }
        }

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn center(area: Rect, raster: &RasterSurface) -> Rect {
        let (width, height) = Self::required_size(raster.columns(), raster.rows());
        let [column] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [board] = Layout::vertical([Constraint::Length(height - HEADER_ROWS - FOOTER_ROWS)])
            .flex(Flex::Center)
            .areas(column);
        board
    }

    fn render_board(&self, raster: &RasterSurface) -> Paragraph<'static> {
        let lines: Vec<Line> = (0..raster.rows())
            .step_by(2)
            .map(|row| {
                let spans: Vec<Span> = (0..raster.columns())
                    .map(|column| {
                        let top = raster.cell(column, row).unwrap_or(BACKGROUND_COLOR);
                        let bottom = raster.cell(column, row + 1).unwrap_or(BACKGROUND_COLOR);
                        Span::styled(
                            "▀",
                            Style::default().fg(to_color(top)).bg(to_color(bottom)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_stats(&self, score: u32, metrics: &SessionMetrics) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, message: &str, score: u32) -> Paragraph<'static> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "any key",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Q",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'static> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to steer | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
