//! Board rendering for the game window

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::rules::GameOutcome;
use crate::{Board, Marker, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Side of one cell in points
    cell_size: f32,
    /// Number of cells per side
    size: usize,
    /// Grid area, inside the margin
    grid_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            size: 3,
            grid_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any.
    ///
    /// Clicks on occupied cells are reported too; the game state decides
    /// what to do with them.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        outcome: Option<GameOutcome>,
        winning_line: Option<&[Pos]>,
    ) -> Option<Pos> {
        let available_size = ui.available_size();
        let side = (available_size.x.min(available_size.y) - 20.0).max(60.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.layout(response.rect, board.size());

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BG);

        if let Some(outcome) = outcome {
            self.draw_outcome(&painter, board, outcome, winning_line);
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        let pointer = response.hover_pos().and_then(|p| self.screen_to_board(p));

        if outcome.is_none() {
            if let Some(pos) = pointer.filter(|&p| board.is_empty(p)) {
                painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::ZERO, hover_valid());
            }
        }

        if response.clicked() {
            pointer
        } else {
            None
        }
    }

    /// Fit a `size` x `size` grid into `rect`
    fn layout(&mut self, rect: Rect, size: usize) {
        self.size = size;
        self.grid_rect = rect.shrink(BOARD_MARGIN);
        self.cell_size = self.grid_rect.width() / size as f32;
    }

    /// Background of the finished game: the winning line in the winner's
    /// color, every cell in orange for a draw
    fn draw_outcome(
        &self,
        painter: &Painter,
        board: &Board,
        outcome: GameOutcome,
        winning_line: Option<&[Pos]>,
    ) {
        let color = outcome_color(outcome);
        match (outcome, winning_line) {
            (GameOutcome::Draw, _) | (_, None) => {
                for pos in board.positions() {
                    painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, color);
                }
            }
            (_, Some(line)) => {
                for &pos in line {
                    painter.rect_filled(self.cell_rect(pos), CornerRadius::ZERO, color);
                }
            }
        }
    }

    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let min = self.grid_rect.min;
        let extent = self.cell_size * self.size as f32;

        // Inner lines only
        for i in 1..self.size {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [min + Vec2::new(offset, 0.0), min + Vec2::new(offset, extent)],
                stroke,
            );
            painter.line_segment(
                [min + Vec2::new(0.0, offset), min + Vec2::new(extent, offset)],
                stroke,
            );
        }
    }

    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            match board.get(pos) {
                Marker::Player => self.draw_cross(painter, pos),
                Marker::Engine => self.draw_nought(painter, pos),
                Marker::Empty => {}
            }
        }
    }

    fn draw_cross(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let half = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, PLAYER_MARK);

        painter.line_segment(
            [center + Vec2::new(-half, -half), center + Vec2::new(half, half)],
            stroke,
        );
        painter.line_segment(
            [center + Vec2::new(-half, half), center + Vec2::new(half, -half)],
            stroke,
        );
    }

    fn draw_nought(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * MARK_SIZE_RATIO;
        let stroke = Stroke::new(self.cell_size * MARK_STROKE_RATIO, ENGINE_MARK);
        painter.circle_stroke(center, radius, stroke);
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let corner = rect.right_top() + Vec2::new(-8.0, 8.0);
        painter.circle_filled(corner, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn cell_rect(&self, pos: Pos) -> Rect {
        let min = self.grid_rect.min
            + Vec2::new(
                pos.col as f32 * self.cell_size,
                pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) || self.cell_size <= 0.0 {
            return None;
        }
        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;

        // The far edge belongs to the grid rect but not to any cell
        if row < self.size && col < self.size {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the center of its cell on screen
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }
}

/// Background color for a finished game
pub fn outcome_color(outcome: GameOutcome) -> Color32 {
    match outcome {
        GameOutcome::PlayerWin => WIN_HIGHLIGHT,
        GameOutcome::EngineWin => LOSS_HIGHLIGHT,
        GameOutcome::Draw => DRAW_HIGHLIGHT,
    }
}
