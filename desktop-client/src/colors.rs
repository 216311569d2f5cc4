use eframe::egui::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x1F, 0x1F, 0x1F);
pub const CELL: Color32 = Color32::from_rgb(0x2E, 0x2E, 0x2E);
pub const CELL_WINNING: Color32 = Color32::from_rgb(0x2E, 0x5E, 0x3E);
pub const MARK: Color32 = Color32::WHITE;
pub const SCORE: Color32 = Color32::LIGHT_GRAY;
pub const STATUS_HUMAN: Color32 = Color32::LIGHT_GREEN;
pub const STATUS_OPPONENT: Color32 = Color32::from_rgb(0xFF, 0xA5, 0x00);
pub const STATUS_FINISHED: Color32 = Color32::WHITE;
pub const RESTART: Color32 = Color32::from_rgb(0xE7, 0x4C, 0x3C);
