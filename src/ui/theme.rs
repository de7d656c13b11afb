// ipscmon - ui/theme.rs
//
// Colour scheme, role colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::health::IssueSeverity;
use crate::core::model::Role;
use egui::Color32;

/// Foreground colour for a role (Master red, Peer green).
pub fn role_colour(role: Role) -> Color32 {
    match role {
        Role::Master => Color32::from_rgb(153, 27, 27), // Red 800
        Role::Peer => Color32::from_rgb(22, 101, 52),   // Green 800
    }
}

/// Row background tint for a role (subtle, whole-row highlight).
pub fn role_bg_colour(role: Role) -> Color32 {
    match role {
        Role::Master => Color32::from_rgb(254, 242, 242), // Red 50
        Role::Peer => Color32::from_rgb(240, 253, 244),   // Green 50
    }
}

/// Strong foreground colour for matrix cells.
pub fn matrix_cell_colour(role: Role) -> Color32 {
    match role {
        Role::Master => Color32::from_rgb(185, 28, 28), // Red 700
        Role::Peer => Color32::from_rgb(21, 128, 61),   // Green 700
    }
}

/// Colour for an empty matrix cell placeholder.
pub const MATRIX_EMPTY: Color32 = Color32::from_rgb(156, 163, 175); // Gray 400

/// Colour for a health finding by severity.
pub fn severity_colour(severity: IssueSeverity) -> Color32 {
    match severity {
        IssueSeverity::Error => Color32::from_rgb(220, 38, 38),   // Red 600
        IssueSeverity::Warning => Color32::from_rgb(217, 119, 6), // Amber 600
    }
}

/// Accent colour for KPI cards and selected tabs.
pub const ACCENT: Color32 = Color32::from_rgb(37, 99, 235); // Blue 600

/// Status bar colours.
pub const STATUS_BG: Color32 = Color32::from_rgb(31, 41, 55); // Gray 800
pub const STATUS_TEXT: Color32 = Color32::from_rgb(209, 213, 219); // Gray 300

/// Warning banner colour (stale source, load problems).
pub const WARNING_TEXT: Color32 = Color32::from_rgb(253, 186, 116); // Orange 300

/// Layout constants.
pub const SIDEBAR_WIDTH: f32 = 230.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const KPI_CARD_WIDTH: f32 = 160.0;
pub const CHART_BAR_HEIGHT: f32 = 18.0;
pub const CHART_MAX_BAR_WIDTH: f32 = 320.0;
