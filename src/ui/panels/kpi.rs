// ipscmon - ui/panels/kpi.rs
//
// KPI card strip at the top of the dashboard: system, site, and repeater
// counts plus the gateway address from config.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render the KPI cards for the current snapshot.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let summary = state
        .repository
        .as_ref()
        .map(|repo| repo.snapshot().summary.clone())
        .unwrap_or_default();

    ui.horizontal(|ui| {
        card(ui, "Systems", &summary.system_count.to_string());
        card(ui, "Sites", &summary.site_count.to_string());
        card(ui, "Repeaters", &summary.total_records.to_string());
        card(ui, "Masters", &summary.master_count.to_string());
        card(ui, "Gateway", &state.config.ui.gateway);
    });
}

fn card(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(egui::Margin::symmetric(12, 8))
        .show(ui, |ui| {
            ui.set_min_width(theme::KPI_CARD_WIDTH);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(label).small().weak());
                ui.label(
                    egui::RichText::new(value)
                        .heading()
                        .color(theme::ACCENT),
                );
            });
        });
}
