//! Board rendering for the tic-tac-toe GUI

use crate::{Board, Mark, Pos, BOARD_SIZE, TOTAL_CELLS};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 120.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell index, if any.
    ///
    /// Clicks are only reported for empty cells while `accepting_input`.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        human: Mark,
        last_move: Option<usize>,
        winning_line: Option<[usize; 3]>,
        accepting_input: bool,
    ) -> Option<usize> {
        let available_size = ui.available_size();

        // Square board that fits the available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(150.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(8), BOARD_BG);

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(idx) = last_move {
            self.draw_last_move_marker(&painter, idx);
        }

        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        // Handle hover preview and click
        let mut clicked = None;

        if accepting_input {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(idx) = self.screen_to_cell(pointer_pos) {
                    if board.is_empty(idx) {
                        self.draw_hover_preview(&painter, idx, human);

                        if response.clicked() {
                            clicked = Some(idx);
                        }
                    }
                }
            }
        }

        clicked
    }

    /// Draw the two inner vertical and horizontal lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = BOARD_SIZE as f32 * self.cell_size;

        for i in 1..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for idx in 0..TOTAL_CELLS {
            if let Some(mark) = board.get(idx) {
                self.draw_mark(painter, idx, mark, mark_color(mark));
            }
        }
    }

    /// X as a cross, O as a ring
    fn draw_mark(&self, painter: &Painter, idx: usize, mark: Mark, color: Color32) {
        let center = self.cell_center(idx);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        match mark {
            Mark::X => {
                painter.line_segment(
                    [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
                    stroke,
                );
                painter.line_segment(
                    [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
                    stroke,
                );
            }
            Mark::O => {
                painter.circle_stroke(center, half, stroke);
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, idx: usize) {
        let corner = self.cell_center(idx) + Vec2::splat(self.cell_size * 0.38);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Strike through the three winning cells
    fn draw_winning_line(&self, painter: &Painter, line: &[usize; 3]) {
        let stroke = Stroke::new(6.0, WIN_HIGHLIGHT);
        let start = self.cell_center(line[0]);
        let end = self.cell_center(line[2]);
        painter.line_segment([start, end], stroke);
    }

    fn draw_hover_preview(&self, painter: &Painter, idx: usize, mark: Mark) {
        let rect = Rect::from_center_size(self.cell_center(idx), Vec2::splat(self.cell_size * 0.9));
        painter.rect_filled(rect, CornerRadius::same(6), hover_valid());
        self.draw_mark(painter, idx, mark, mark_color(mark).gamma_multiply(0.35));
    }

    /// Convert screen coordinates to a cell index
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<usize> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).floor() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8).to_index())
        } else {
            None
        }
    }

    /// Center of a cell in screen coordinates
    pub fn cell_center(&self, idx: usize) -> Pos2 {
        let pos = Pos::from_index(idx);
        let x = self.board_rect.min.x + BOARD_MARGIN + (pos.col as f32 + 0.5) * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}

fn mark_color(mark: Mark) -> Color32 {
    match mark {
        Mark::X => X_MARK,
        Mark::O => O_MARK,
    }
}
