// ipscmon - ui/panels/logical.rs
//
// Logical view: one collapsible card per system group showing its master
// location and a role-tinted member table.

use crate::app::state::AppState;
use crate::core::matrix;
use crate::core::model::SystemGroup;
use crate::ui::panels::tinted_cell;

/// Render the logical (per-system) view over the filtered record set.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let records = state.records();

    ui.label("Red rows mark the MASTER repeater of each system.");
    ui.add_space(4.0);

    egui::ScrollArea::vertical()
        .id_salt("logical_view")
        .show(ui, |ui| {
            for group in SystemGroup::all() {
                let members: Vec<usize> = state
                    .filtered_indices
                    .iter()
                    .copied()
                    .filter(|&idx| records[idx].system_group == *group)
                    .collect();
                if members.is_empty() {
                    continue;
                }

                let master_loc =
                    matrix::find_master_site(records, *group).unwrap_or("N/A");
                let header = format!("{}  (Master at {})", group.label(), master_loc);

                egui::CollapsingHeader::new(header)
                    .id_salt(group.label())
                    .default_open(true)
                    .show(ui, |ui| {
                        egui::Grid::new(format!("logical_{}", group.label()))
                            .num_columns(5)
                            .striped(true)
                            .spacing([14.0, 3.0])
                            .show(ui, |ui| {
                                ui.strong("Site");
                                ui.strong("Alias");
                                ui.strong("ID");
                                ui.strong("IP Ethernet");
                                ui.strong("Role");
                                ui.end_row();

                                for idx in members {
                                    let rec = &records[idx];
                                    tinted_cell(ui, rec, &rec.site);
                                    tinted_cell(ui, rec, &rec.alias);
                                    tinted_cell(ui, rec, &rec.id.to_string());
                                    tinted_cell(ui, rec, &rec.ip_ethernet);
                                    tinted_cell(ui, rec, rec.role.label());
                                    ui.end_row();
                                }
                            });
                    });
            }
        });
}
