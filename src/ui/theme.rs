//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(245, 240, 230);
pub const GRID_LINE: Color32 = Color32::from_rgb(60, 62, 66);

// Mark colors
pub const X_MARK: Color32 = Color32::from_rgb(220, 70, 70);
pub const O_MARK: Color32 = Color32::from_rgb(60, 120, 220);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 80, 80, 60)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_TURN: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WAITING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 20.0;
pub const GRID_LINE_WIDTH: f32 = 4.0;
pub const MARK_STROKE_WIDTH: f32 = 8.0;
pub const MARK_SIZE_RATIO: f32 = 0.3;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 5.0;
