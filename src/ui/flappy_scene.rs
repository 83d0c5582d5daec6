//! UI rendering for the game: playfield, start screen and game-over box.

use super::game_common::{
    fit_aspect, render_info_panel_frame, render_message_box, render_status_bar, split_screen,
    StatusLine,
};
use super::raster::{Cell, Raster};
use crate::core::bird::Bird;
use crate::core::constants::{GROUND_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::pipe::{Pipe, Rect as WorldRect};
use crate::core::session::{GamePhase, SessionView};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SKY: Color = Color::Rgb(135, 206, 235);
const CLOUD: Color = Color::Rgb(255, 255, 255);
const PIPE_BODY: Color = Color::Rgb(0, 160, 0);
const PIPE_RIM: Color = Color::Rgb(0, 200, 0);
const GROUND: Color = Color::Rgb(139, 69, 19);
const GRASS: Color = Color::Rgb(0, 150, 0);
const BIRD_BODY: Color = Color::Rgb(255, 255, 0);
const BEAK: Color = Color::Rgb(255, 165, 0);
const PANEL: Color = Color::Rgb(200, 200, 200);
const BOX: Color = Color::Rgb(240, 240, 240);
const BOX_BORDER: Color = Color::Rgb(180, 180, 180);

const CLOUD_COUNT: u64 = 3;
const PIPE_RIM_HEIGHT: f64 = 20.0;
const PIPE_RIM_OVERHANG: f64 = 3.0;
const INFO_PANEL_WIDTH: u16 = 22;
const GRASS_SPACING: f64 = 5.0;
const GRASS_HEIGHT_RANGE: std::ops::RangeInclusive<u8> = 1..=5;
const GRASS_SEED: u64 = 0x6772_6173;

/// Render the whole game screen for the current phase.
pub fn render_flappy(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let layout = split_screen(frame, area, " Flappy Bird ", Color::Cyan, INFO_PANEL_WIDTH);
    let field = fit_aspect(layout.content, SCREEN_WIDTH, SCREEN_HEIGHT);

    if field.width > 0 && field.height > 0 {
        let raster = paint_playfield(field.width, field.height, view);
        frame.render_widget(Paragraph::new(raster.into_lines()), field);
        render_overlay(frame, field, view);
    }

    render_status_bar_content(frame, layout.status_bar, view);
    render_info_panel(frame, layout.info_panel, view);
}

/// Paint the world for one frame. Mirrors what each phase shows: the
/// start screen has clouds, ground and a sample bird; play adds pipes and
/// the real bird; the game-over screen keeps only the sky and a resting bird.
pub fn paint_playfield(cols: u16, rows: u16, view: &SessionView<'_>) -> Raster {
    let mut raster = Raster::new(cols, rows, SCREEN_WIDTH, SCREEN_HEIGHT, Cell::solid(SKY));
    paint_clouds(&mut raster, view.clock.as_millis() as u64);

    match view.phase {
        GamePhase::Start => {
            paint_ground(&mut raster);
            paint_bird(&mut raster, &Bird::at(SCREEN_WIDTH / 2.0, 400.0));
        }
        GamePhase::Playing => {
            for pipe in view.pipes {
                paint_pipe(&mut raster, pipe);
            }
            paint_bird(&mut raster, view.bird);
            paint_ground(&mut raster);
        }
        GamePhase::GameOver => {
            paint_bird(
                &mut raster,
                &Bird::at(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0 + 120.0),
            );
        }
    }
    raster
}

fn paint_clouds(raster: &mut Raster, millis: u64) {
    let span = SCREEN_WIDTH as u64 + 100;
    for i in 0..CLOUD_COUNT {
        let x = ((millis / 20 + i * 200) % span) as f64 - 50.0;
        let y = 50.0 + i as f64 * 80.0;
        for (dx, dy) in [(0.0, 0.0), (30.0, -10.0), (60.0, 0.0)] {
            raster.fill_ellipse(
                WorldRect {
                    x: x + dx,
                    y: y + dy,
                    width: 60.0,
                    height: 40.0,
                },
                Cell::solid(CLOUD),
            );
        }
    }
}

fn paint_pipe(raster: &mut Raster, pipe: &Pipe) {
    raster.fill_rect(pipe.top_rect(), Cell::solid(PIPE_BODY));
    raster.fill_rect(pipe.bottom_rect(), Cell::solid(PIPE_BODY));

    let rim = |y: f64| WorldRect {
        x: pipe.x - PIPE_RIM_OVERHANG,
        y,
        width: pipe.width + 2.0 * PIPE_RIM_OVERHANG,
        height: PIPE_RIM_HEIGHT,
    };
    raster.fill_rect(rim(pipe.top_height - PIPE_RIM_HEIGHT), Cell::solid(PIPE_RIM));
    raster.fill_rect(rim(pipe.gap_bottom()), Cell::solid(PIPE_RIM));
}

fn paint_bird(raster: &mut Raster, bird: &Bird) {
    let (x, y, r) = (bird.x, bird.y, bird.radius);
    let wing_y = y + bird.wing_offset();
    let beak = bird.beak_length();

    raster.fill_circle(x, y, r, Cell::solid(BIRD_BODY));
    raster.fill_polygon(
        &[(x - 10.0, wing_y), (x - 20.0, wing_y - 10.0), (x - 15.0, wing_y)],
        Cell::solid(BIRD_BODY),
    );
    raster.fill_polygon(
        &[(x + r, y), (x + r + beak, y - 5.0), (x + r + beak, y + 5.0)],
        Cell::solid(BEAK),
    );
    // Sub-cell details are too small to sample, so stamp them as glyphs.
    raster.plot(x + r + beak / 2.0, y, Cell::new('▸', BEAK).on(SKY));
    raster.plot(x + 8.0, y - 5.0, Cell::new('•', Color::Black).on(BIRD_BODY));
}

fn paint_ground(raster: &mut Raster) {
    let ground_top = SCREEN_HEIGHT - GROUND_HEIGHT;
    raster.fill_rect(
        WorldRect {
            x: 0.0,
            y: ground_top,
            width: SCREEN_WIDTH,
            height: GROUND_HEIGHT,
        },
        Cell::solid(GROUND),
    );

    // Blades of 1-5 px every 5 px, as lower-block glyphs in the row above
    // the ground. A fixed seed keeps the grass still between frames.
    let Some(row) = raster.last_row_above(ground_top) else {
        return;
    };
    let mut rng = StdRng::seed_from_u64(GRASS_SEED);
    let mut x = 0.0;
    while x < SCREEN_WIDTH {
        let height = rng.gen_range(GRASS_HEIGHT_RANGE);
        if let Some(col) = raster.column_at(x) {
            raster.overlay(col, row, grass_glyph(height), GRASS);
        }
        x += GRASS_SPACING;
    }
}

/// Lower-block glyph for a blade `height` px tall.
fn grass_glyph(height: u8) -> char {
    const BLADES: [char; 5] = ['▁', '▂', '▃', '▄', '▅'];
    BLADES[usize::from(height.clamp(1, 5)) - 1]
}

/// Terminal row for a world y inside the fitted playfield.
fn world_row(field: Rect, y: f64) -> u16 {
    let row = (y / SCREEN_HEIGHT * field.height as f64) as u16;
    field.y + row.min(field.height.saturating_sub(1))
}

fn render_overlay(frame: &mut Frame, field: Rect, view: &SessionView<'_>) {
    match view.phase {
        GamePhase::Start => render_start_screen(frame, field),
        GamePhase::Playing => render_score_badge(frame, field, view.score),
        GamePhase::GameOver => render_game_over_box(frame, field, view),
    }
}

fn render_start_screen(frame: &mut Frame, field: Rect) {
    let black = Style::default().fg(Color::Black);
    render_message_box(
        frame,
        field,
        world_row(field, 145.0),
        vec![Line::from(Span::styled(
            "FLAPPY BIRD",
            black.add_modifier(Modifier::BOLD),
        ))],
        PANEL,
        PANEL,
    );
    render_message_box(
        frame,
        field,
        world_row(field, 245.0),
        vec![Line::from(Span::styled("Press SPACE to start", black))],
        PANEL,
        PANEL,
    );
    render_message_box(
        frame,
        field,
        world_row(field, 310.0),
        vec![Line::from(Span::styled("Q to quit", black))],
        PANEL,
        PANEL,
    );
}

fn render_score_badge(frame: &mut Frame, field: Rect, score: u32) {
    render_message_box(
        frame,
        field,
        field.y,
        vec![Line::from(Span::styled(
            score.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))],
        Color::Black,
        Color::DarkGray,
    );
}

fn render_game_over_box(frame: &mut Frame, field: Rect, view: &SessionView<'_>) {
    let black = Style::default().fg(Color::Black);
    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            black.add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("Score: {}", view.score), black)),
        Line::from(Span::styled(
            format!("High Score: {}", view.high_score),
            black,
        )),
        Line::from(""),
        Line::from(Span::styled("Press SPACE or R to restart", black)),
        Line::from(Span::styled("Q to quit", black)),
    ];
    render_message_box(
        frame,
        field,
        world_row(field, SCREEN_HEIGHT / 2.0 - 150.0),
        lines,
        BOX,
        BOX_BORDER,
    );
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let status = match view.phase {
        GamePhase::Start => StatusLine {
            message: "Press Space to start!".to_string(),
            color: Color::Yellow,
            keys: &[("[Space]", "Start"), ("[Q]", "Quit")],
        },
        GamePhase::Playing => StatusLine {
            message: format!("Score: {}", view.score),
            color: Color::Green,
            keys: &[("[Space]", "Flap"), ("[Q]", "Quit")],
        },
        GamePhase::GameOver => StatusLine {
            message: format!("Crashed after {} pipes", view.score),
            color: Color::Red,
            keys: &[("[Space/R]", "Restart"), ("[Q]", "Quit")],
        },
    };
    render_status_bar(frame, area, &status);
}

fn render_info_panel(frame: &mut Frame, area: Rect, view: &SessionView<'_>) {
    let inner = render_info_panel_frame(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let phase = match view.phase {
        GamePhase::Start => "Ready",
        GamePhase::Playing => "Flying",
        GamePhase::GameOver => "Grounded",
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" {} ", phase),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                view.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                view.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:.1}", view.pipe_speed),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Pipes: ", label),
            Span::styled(view.pipes.len().to_string(), Style::default().fg(Color::Green)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
