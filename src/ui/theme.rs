//! Theme constants for the game window

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 245, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Mark colors
pub const PLAYER_MARK: Color32 = Color32::from_rgb(75, 0, 130); // Indigo
pub const ENGINE_MARK: Color32 = Color32::from_rgb(70, 130, 180); // Steel blue

// Outcome backgrounds
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(173, 255, 47); // Green yellow
pub const LOSS_HIGHLIGHT: Color32 = Color32::from_rgb(220, 20, 60); // Crimson
pub const DRAW_HIGHLIGHT: Color32 = Color32::from_rgb(255, 165, 0); // Orange

pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 12.0;
pub const MARK_SIZE_RATIO: f32 = 0.35;
pub const MARK_STROKE_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
