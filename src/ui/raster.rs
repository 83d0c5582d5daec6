//! Cell raster for drawing world-space shapes into a terminal area.
//!
//! Each terminal cell samples the world point at its centre; shapes are
//! painted in call order so later shapes cover earlier ones.

use crate::core::pipe::Rect as WorldRect;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: char,
    pub style: Style,
}

impl Cell {
    pub fn new(glyph: char, fg: Color) -> Self {
        Self {
            glyph,
            style: Style::default().fg(fg),
        }
    }

    /// A blank cell filled with `bg`.
    pub fn solid(bg: Color) -> Self {
        Self {
            glyph: ' ',
            style: Style::default().bg(bg),
        }
    }

    pub fn on(mut self, bg: Color) -> Self {
        self.style = self.style.bg(bg);
        self
    }
}

pub struct Raster {
    cols: usize,
    rows: usize,
    /// World px per column / row.
    scale_x: f64,
    scale_y: f64,
    cells: Vec<Cell>,
}

impl Raster {
    /// A `cols` x `rows` raster covering a world of `world_w` x `world_h`.
    pub fn new(cols: u16, rows: u16, world_w: f64, world_h: f64, background: Cell) -> Self {
        let cols = cols as usize;
        let rows = rows as usize;
        Self {
            cols,
            rows,
            scale_x: world_w / cols.max(1) as f64,
            scale_y: world_h / rows.max(1) as f64,
            cells: vec![background; cols * rows],
        }
    }

    /// World coordinates of a cell's centre.
    fn sample(&self, col: usize, row: usize) -> (f64, f64) {
        (
            (col as f64 + 0.5) * self.scale_x,
            (row as f64 + 0.5) * self.scale_y,
        )
    }

    /// Cell containing a world point, if inside the raster.
    pub fn cell_at(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.scale_x) as usize;
        let row = (y / self.scale_y) as usize;
        (col < self.cols && row < self.rows).then_some((col, row))
    }

    pub fn get(&self, col: usize, row: usize) -> Option<&Cell> {
        if col < self.cols && row < self.rows {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    fn set(&mut self, col: usize, row: usize, cell: Cell) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = cell;
        }
    }

    /// Paint every cell whose centre satisfies `inside`.
    fn fill_where(&mut self, cell: Cell, inside: impl Fn(f64, f64) -> bool) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let (x, y) = self.sample(col, row);
                if inside(x, y) {
                    self.set(col, row, cell);
                }
            }
        }
    }

    /// Index of the last row whose sample point lies above world `y`.
    pub fn last_row_above(&self, y: f64) -> Option<usize> {
        let rows_above = (y / self.scale_y - 0.5).ceil();
        if rows_above < 1.0 {
            return None;
        }
        Some((rows_above as usize).min(self.rows) - 1)
    }

    /// Column containing world `x`, if inside the raster.
    pub fn column_at(&self, x: f64) -> Option<usize> {
        self.cell_at(x, 0.0).map(|(col, _)| col)
    }

    /// Draw `glyph` in `fg` over a cell, keeping its background.
    pub fn overlay(&mut self, col: usize, row: usize, glyph: char, fg: Color) {
        if let Some(existing) = self.get(col, row).copied() {
            let mut cell = Cell::new(glyph, fg);
            cell.style.bg = existing.style.bg;
            self.set(col, row, cell);
        }
    }

    /// Paint the single cell under a world point.
    pub fn plot(&mut self, x: f64, y: f64, cell: Cell) {
        if let Some((col, row)) = self.cell_at(x, y) {
            self.set(col, row, cell);
        }
    }

    pub fn fill_rect(&mut self, rect: WorldRect, cell: Cell) {
        self.fill_where(cell, |x, y| {
            x >= rect.x && x < rect.right() && y >= rect.y && y < rect.bottom()
        });
    }

    /// Axis-aligned ellipse inscribed in `rect`.
    pub fn fill_ellipse(&mut self, rect: WorldRect, cell: Cell) {
        let rx = rect.width / 2.0;
        let ry = rect.height / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let cx = rect.x + rx;
        let cy = rect.y + ry;
        self.fill_where(cell, |x, y| {
            let dx = (x - cx) / rx;
            let dy = (y - cy) / ry;
            dx * dx + dy * dy <= 1.0
        });
    }

    /// Filled circle. The centre cell is always painted so small shapes
    /// stay visible at low resolution.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, cell: Cell) {
        self.fill_where(cell, |x, y| {
            let dx = x - cx;
            let dy = y - cy;
            dx * dx + dy * dy <= radius * radius
        });
        self.plot(cx, cy, cell);
    }

    /// Filled convex polygon (vertices in either winding order).
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], cell: Cell) {
        if points.len() < 3 {
            return;
        }
        self.fill_where(cell, |x, y| point_in_convex(points, x, y));
    }

    pub fn into_lines(self) -> Vec<Line<'static>> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|cell| Span::styled(cell.glyph.to_string(), cell.style))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }
}

fn point_in_convex(points: &[(f64, f64)], x: f64, y: f64) -> bool {
    let mut sign = 0.0_f64;
    for i in 0..points.len() {
        let (x1, y1) = points[i];
        let (x2, y2) = points[(i + 1) % points.len()];
        let cross = (x2 - x1) * (y - y1) - (y2 - y1) * (x - x1);
        if cross != 0.0 {
            if sign != 0.0 && cross.signum() != sign {
                return false;
            }
            sign = cross.signum();
        }
    }
    true
}
