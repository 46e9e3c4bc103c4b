//! Board rendering for the GUI
//!
//! The cube is drawn as four 4x4 layers side by side, bottom layer (z = 0) on
//! the left. Clicking any cell picks its column; the stone lands by gravity.

use crate::{Board, Column, Coord, Player, BOARD_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Markers drawn on top of the stones
pub struct Markers<'a> {
    pub last_move: Option<Coord>,
    pub suggested: Option<Column>,
    pub winning_line: &'a [Coord],
    /// Per-column scores, indexed `[y][x]`, printed on the landing cells
    pub scores: Option<&'a [[Option<u8>; BOARD_SIZE]; BOARD_SIZE]>,
}

/// Board view handles rendering and input for the four layers
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Top-left corner of layer 0's grid
    origin: Pos2,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            origin: Pos2::ZERO,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked column if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Player,
        markers: &Markers<'_>,
        game_over: bool,
    ) -> Option<Column> {
        let available = ui.available_size();
        let n = BOARD_SIZE as f32;

        // Four square layers in a row, with gaps and a label strip above
        let by_width = (available.x - LAYER_GAP * (n - 1.0) - 20.0) / n;
        let by_height = available.y - LAYER_LABEL_HEIGHT - 20.0;
        let layer_size = by_width.min(by_height).max(80.0);
        self.cell_size = layer_size / n;

        let total = Vec2::new(layer_size * n + LAYER_GAP * (n - 1.0), layer_size + LAYER_LABEL_HEIGHT);
        let (response, painter) = ui.allocate_painter(total, Sense::click());
        self.origin = response.rect.min + Vec2::new(0.0, LAYER_LABEL_HEIGHT);

        let hovered = if game_over {
            None
        } else {
            response.hover_pos().and_then(|p| self.screen_to_cell(p)).map(Coord::column)
        };

        for z in 0..BOARD_SIZE as u8 {
            self.draw_layer(&painter, z);
        }

        if let Some(column) = hovered {
            self.draw_column_highlight(&painter, column);
        }

        if let Some(scores) = markers.scores {
            self.draw_scores(&painter, board, scores);
        }

        self.draw_stones(&painter, board);

        if let Some(pos) = markers.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        if !markers.winning_line.is_empty() {
            self.draw_winning_line(&painter, markers.winning_line);
        }

        if let Some(column) = markers.suggested {
            if let Some(pos) = board.landing(column) {
                self.draw_suggestion(&painter, pos, current_turn);
            }
        }

        // Hover preview at the landing cell, and click
        let mut clicked = None;
        if let Some(column) = hovered {
            if let Some(pos) = board.landing(column) {
                self.draw_hover_preview(&painter, pos, current_turn);
                if response.clicked() {
                    clicked = Some(column);
                }
            }
        }

        clicked
    }

    fn layer_rect(&self, z: u8) -> Rect {
        let layer_size = self.cell_size * BOARD_SIZE as f32;
        let min = self.origin + Vec2::new(z as f32 * (layer_size + LAYER_GAP), 0.0);
        Rect::from_min_size(min, Vec2::splat(layer_size))
    }

    fn cell_rect(&self, pos: Coord) -> Rect {
        let layer = self.layer_rect(pos.z);
        let min = layer.min + Vec2::new(pos.x as f32, pos.y as f32) * self.cell_size;
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Draw one layer background, grid and label
    fn draw_layer(&self, painter: &Painter, z: u8) {
        let rect = self.layer_rect(z);
        painter.rect_filled(rect, CornerRadius::same(4), LAYER_BG);

        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        for i in 1..BOARD_SIZE {
            let offset = i as f32 * self.cell_size;
            painter.line_segment(
                [rect.min + Vec2::new(offset, 0.0), Pos2::new(rect.min.x + offset, rect.max.y)],
                stroke,
            );
            painter.line_segment(
                [rect.min + Vec2::new(0.0, offset), Pos2::new(rect.max.x, rect.min.y + offset)],
                stroke,
            );
        }

        painter.text(
            Pos2::new(rect.center().x, rect.min.y - LAYER_LABEL_HEIGHT * 0.5),
            egui::Align2::CENTER_CENTER,
            format!("z = {}", z),
            egui::FontId::proportional(13.0),
            LAYER_LABEL,
        );
    }

    /// Tint every cell of the hovered column across all layers
    fn draw_column_highlight(&self, painter: &Painter, column: Column) {
        for z in 0..BOARD_SIZE as u8 {
            painter.rect_filled(self.cell_rect(column.at(z)), CornerRadius::same(0), column_highlight());
        }
    }

    /// Print potential scores on the landing cells
    fn draw_scores(&self, painter: &Painter, board: &Board, scores: &[[Option<u8>; BOARD_SIZE]; BOARD_SIZE]) {
        for column in Column::all() {
            let (Some(score), Some(pos)) = (scores[column.y as usize][column.x as usize], board.landing(column)) else {
                continue;
            };
            painter.text(
                self.cell_rect(pos).center(),
                egui::Align2::CENTER_CENTER,
                score.to_string(),
                egui::FontId::monospace(12.0),
                SCORE_TEXT,
            );
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for z in 0..BOARD_SIZE as u8 {
            for y in 0..BOARD_SIZE as u8 {
                for x in 0..BOARD_SIZE as u8 {
                    let pos = Coord::new(x, y, z);
                    if let Some(player) = board.get(pos) {
                        self.draw_stone(painter, pos, player);
                    }
                }
            }
        }
    }

    /// Draw a single stone with visual polish
    fn draw_stone(&self, painter: &Painter, pos: Coord, player: Player) {
        let center = self.cell_rect(pos).center();
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match player {
            Player::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Player::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
            }
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Coord) {
        painter.circle_filled(self.cell_rect(pos).center(), LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Ring every stone of the winning line
    fn draw_winning_line(&self, painter: &Painter, line: &[Coord]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);
        let radius = self.cell_size * STONE_RADIUS_RATIO + 3.0;
        for &pos in line {
            painter.circle_stroke(self.cell_rect(pos).center(), radius, stroke);
        }
    }

    fn draw_suggestion(&self, painter: &Painter, pos: Coord, turn: Player) {
        let center = self.cell_rect(pos).center();
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let (fill, text) = match turn {
            Player::Black => (Color32::from_rgba_unmultiplied(20, 20, 20, 100), WHITE_STONE),
            Player::White => (Color32::from_rgba_unmultiplied(240, 240, 240, 100), BLACK_STONE),
        };

        painter.circle_filled(center, radius, fill);
        painter.text(center, egui::Align2::CENTER_CENTER, "?", egui::FontId::proportional(14.0), text);
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Coord, turn: Player) {
        let center = self.cell_rect(pos).center();
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let color = match turn {
            Player::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 80),
            Player::White => Color32::from_rgba_unmultiplied(240, 240, 240, 80),
        };
        painter.circle_filled(center, radius, color);
        painter.circle_stroke(center, radius, Stroke::new(1.0, hover_valid()));
    }

    /// Convert screen coordinates to a cell, if the pointer is over a layer
    pub fn screen_to_cell(&self, screen_pos: Pos2) -> Option<Coord> {
        (0..BOARD_SIZE as u8).find_map(|z| {
            let rect = self.layer_rect(z);
            if !rect.contains(screen_pos) {
                return None;
            }
            let relative = screen_pos - rect.min;
            let x = ((relative.x / self.cell_size) as u8).min(BOARD_SIZE as u8 - 1);
            let y = ((relative.y / self.cell_size) as u8).min(BOARD_SIZE as u8 - 1);
            Some(Coord::new(x, y, z))
        })
    }
}
