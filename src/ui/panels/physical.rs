// ipscmon - ui/panels/physical.rs
//
// Physical view: one collapsible card per site with a hosting summary and
// the repeaters installed there. Sites hosting a Master are flagged as
// critical.

use crate::app::state::AppState;
use crate::core::model::Role;
use crate::ui::panels::tinted_cell;
use crate::ui::theme;
use std::collections::BTreeSet;

/// Render the physical (per-site) view over the filtered record set.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let records = state.records();

    let sites: BTreeSet<&str> = state
        .filtered_indices
        .iter()
        .map(|&idx| records[idx].site.as_str())
        .collect();

    egui::ScrollArea::vertical()
        .id_salt("physical_view")
        .show(ui, |ui| {
            for site in sites {
                let members: Vec<usize> = state
                    .filtered_indices
                    .iter()
                    .copied()
                    .filter(|&idx| records[idx].site == site)
                    .collect();
                let master_count = members
                    .iter()
                    .filter(|&&idx| records[idx].role == Role::Master)
                    .count();

                egui::CollapsingHeader::new(format!("📍 {site}"))
                    .id_salt(site)
                    .default_open(false)
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(format!("Repeaters: {}", members.len()));
                            ui.label(format!("Masters: {master_count}"));
                            if master_count > 0 {
                                ui.label(
                                    egui::RichText::new("⚠ Critical site (hosts a Master)")
                                        .color(theme::WARNING_TEXT),
                                );
                            }
                        });
                        ui.add_space(4.0);

                        egui::Grid::new(format!("physical_{site}"))
                            .num_columns(5)
                            .striped(true)
                            .spacing([14.0, 3.0])
                            .show(ui, |ui| {
                                ui.strong("System");
                                ui.strong("Alias");
                                ui.strong("ID");
                                ui.strong("Role");
                                ui.strong("RX (MHz)");
                                ui.end_row();

                                for idx in members {
                                    let rec = &records[idx];
                                    tinted_cell(ui, rec, rec.system_group.label());
                                    tinted_cell(ui, rec, &rec.alias);
                                    tinted_cell(ui, rec, &rec.id.to_string());
                                    tinted_cell(ui, rec, rec.role.label());
                                    let rx = rec
                                        .rx_mhz
                                        .map(|v| format!("{v:.4}"))
                                        .unwrap_or_else(|| "--".to_string());
                                    tinted_cell(ui, rec, &rx);
                                    ui.end_row();
                                }
                            });
                    });
            }
        });
}
