// ipscmon - ui/panels/mod.rs

pub mod charts;
pub mod filters;
pub mod health;
pub mod kpi;
pub mod logical;
pub mod matrix;
pub mod physical;
pub mod summary;

use crate::core::model::RepeaterRecord;
use crate::ui::theme;

/// Render one table cell with the row's role tint applied.
///
/// Mirrors the inventory sheet convention: Master rows carry a soft red
/// wash, Peer rows a soft green one, so masters stand out in any table.
pub(crate) fn tinted_cell(ui: &mut egui::Ui, rec: &RepeaterRecord, text: &str) {
    let rich = egui::RichText::new(text)
        .color(theme::role_colour(rec.role))
        .background_color(theme::role_bg_colour(rec.role));
    ui.label(if rec.role == crate::core::model::Role::Master {
        rich.strong()
    } else {
        rich
    });
}
