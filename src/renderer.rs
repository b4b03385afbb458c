use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::entities::{
    Bounds, Canvas, EnemyType, GameState, MovingDirection, ProjectileOwner, Sprite, Surface,
};

const PLAYER_SPRITE: [&str; 3] = [" /^\\ ", "<|||>", " ||| "];

/// [`Surface`] over a ratatui buffer. Canvas pixels are scaled onto `area`.
pub struct TerminalSurface<'a> {
    buffer: &'a mut Buffer,
    area: Rect,
    canvas: Canvas,
}

impl<'a> TerminalSurface<'a> {
    pub fn new(buffer: &'a mut Buffer, area: Rect, canvas: Canvas) -> Self {
        Self {
            buffer,
            area,
            canvas,
        }
    }

    /// Maps a canvas rectangle to the cells it covers, clipped to the play area.
    /// Every visible sprite covers at least one cell.
    pub fn project(&self, bounds: Bounds) -> Option<Rect> {
        let scale_x = |x: i32| x as i64 * self.area.width as i64 / self.canvas.width as i64;
        let scale_y = |y: i32| y as i64 * self.area.height as i64 / self.canvas.height as i64;

        let left = scale_x(bounds.x);
        let top = scale_y(bounds.y);
        let right = scale_x(bounds.x + bounds.width).max(left + 1);
        let bottom = scale_y(bounds.y + bounds.height).max(top + 1);

        let left = left.max(0);
        let top = top.max(0);
        let right = right.min(self.area.width as i64);
        let bottom = bottom.min(self.area.height as i64);
        if left >= right || top >= bottom {
            return None;
        }

        Some(Rect {
            x: self.area.x + left as u16,
            y: self.area.y + top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }

    fn draw_lines(&mut self, cells: Rect, lines: &[&str], style: Style) {
        for (row, line) in lines.iter().take(cells.height as usize).enumerate() {
            self.buffer.set_stringn(
                cells.x,
                cells.y + row as u16,
                line,
                cells.width as usize,
                style,
            );
        }
    }
}

impl Surface for TerminalSurface<'_> {
    fn draw_sprite(&mut self, sprite: Sprite, bounds: Bounds) {
        let Some(cells) = self.project(bounds) else {
            return;
        };

        match sprite {
            Sprite::Enemy(enemy_type) => {
                let color = match enemy_type {
                    EnemyType::Basic => Color::Red,
                    EnemyType::Fast => Color::Magenta,
                    EnemyType::Tank => Color::Yellow,
                };
                let lines = enemy_type.get_sprite_lines();
                self.draw_lines(
                    cells,
                    &lines,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                );
            }
            Sprite::Player => {
                self.draw_lines(
                    cells,
                    &PLAYER_SPRITE,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                );
            }
            Sprite::Projectile(owner) => {
                let (glyph, color) = match owner {
                    ProjectileOwner::Player => ("|", Color::Red),
                    ProjectileOwner::Enemy => ("!", Color::White),
                };
                self.buffer.set_string(
                    cells.x + cells.width / 2,
                    cells.y,
                    glyph,
                    Style::default().fg(color),
                );
            }
        }
    }
}

/// View struct that holds the HUD state needed for rendering
pub struct RenderView {
    pub game_state: GameState,
    pub enemies_left: usize,
    pub direction: MovingDirection,
    pub area: Rect,
    pub fps: u32,
    pub elapsed_time_secs: u64,
}

/// Handles the chrome around the play field: borders, HUD and overlays
#[derive(Default)]
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Play field inside the border, below the HUD line and above the hint line
    pub fn play_area(&self, area: Rect) -> Rect {
        Block::default()
            .borders(Borders::ALL)
            .inner(Rect {
                x: area.x,
                y: area.y + 1,
                width: area.width,
                height: area.height.saturating_sub(2),
            })
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        self.render_chrome(frame, view);
        match view.game_state {
            GameState::Playing => {}
            GameState::Paused => self.render_paused(frame, view),
            GameState::GameOver => self.render_finished(frame, view, "GAME OVER!", Color::Red),
            GameState::Won => self.render_finished(frame, view, "YOU WIN!", Color::Green),
        }
    }

    fn render_chrome(&self, frame: &mut Frame, view: &RenderView) {
        let area = view.area;

        let border_area = Rect {
            x: area.x,
            y: area.y + 1,
            width: area.width,
            height: area.height.saturating_sub(2),
        };
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
            border_area,
        );

        let minutes = view.elapsed_time_secs / 60;
        let seconds = view.elapsed_time_secs % 60;
        let stats = Line::from(vec![
            Span::styled("Enemies: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.enemies_left),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Moving: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:?}", view.direction),
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Time: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:02}:{:02}", minutes, seconds),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(
            Paragraph::new(stats),
            Rect {
                x: area.x + 1,
                y: area.y,
                width: area.width.saturating_sub(2),
                height: 1,
            },
        );

        let controls = Line::from(vec![Span::styled(
            "[A/D/Arrows: Move] [Space: Fire] [P: Pause] [Q: Quit]",
            Style::default().fg(Color::DarkGray),
        )]);
        frame.render_widget(
            Paragraph::new(controls).centered(),
            Rect {
                x: area.x + 1,
                y: area.y + area.height.saturating_sub(1),
                width: area.width.saturating_sub(2),
                height: 1,
            },
        );
    }

    fn render_paused(&self, frame: &mut Frame, view: &RenderView) {
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Press P to resume").centered().white(),
        ];

        let overlay = centered(view.area, 30, 6);
        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            overlay,
        );
    }

    fn render_finished(&self, frame: &mut Frame, view: &RenderView, title: &str, color: Color) {
        let minutes = view.elapsed_time_secs / 60;
        let seconds = view.elapsed_time_secs % 60;

        let text = vec![
            Line::from(""),
            Line::from(title.to_string()).centered().fg(color).bold(),
            Line::from(""),
            Line::from(format!("Time: {:02}:{:02}", minutes, seconds))
                .centered()
                .cyan()
                .bold(),
            Line::from(""),
            Line::from("Press R to restart").centered().white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        let overlay = centered(view.area, 34, 9);
        frame.render_widget(Clear, overlay);
        frame.render_widget(
            Paragraph::new(text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(color)),
                )
                .alignment(Alignment::Center),
            overlay,
        );
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
