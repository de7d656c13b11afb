// ipscmon - ui/panels/matrix.rs
//
// Role matrix tab: system groups as rows, sites as columns, the dominant
// role in each populated cell. Empty cells render as a dash placeholder.

use crate::app::state::AppState;
use crate::core::matrix::{matrix_groups, matrix_sites};
use crate::core::model::Role;
use crate::ui::theme;

/// Render the system × site role matrix.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.strong("Role map");
    ui.label("A cell shows MASTER when the system's clock reference sits at that site.");
    ui.add_space(6.0);

    let sites = matrix_sites(&state.matrix);
    let groups = matrix_groups(&state.matrix);

    if sites.is_empty() {
        ui.label("No data loaded.");
        return;
    }

    egui::ScrollArea::horizontal()
        .id_salt("matrix_view")
        .show(ui, |ui| {
            egui::Grid::new("role_matrix")
                .num_columns(sites.len() + 1)
                .striped(true)
                .spacing([16.0, 5.0])
                .show(ui, |ui| {
                    ui.strong("System");
                    for site in &sites {
                        ui.strong(site);
                    }
                    ui.end_row();

                    for group in &groups {
                        ui.strong(group.label());
                        for site in &sites {
                            match state.matrix.get(&(*group, site.clone())) {
                                Some(Role::Master) => {
                                    ui.label(
                                        egui::RichText::new("👑 MASTER")
                                            .strong()
                                            .color(theme::matrix_cell_colour(Role::Master)),
                                    );
                                }
                                Some(Role::Peer) => {
                                    ui.label(
                                        egui::RichText::new("Peer")
                                            .color(theme::matrix_cell_colour(Role::Peer)),
                                    );
                                }
                                None => {
                                    ui.label(
                                        egui::RichText::new("—").color(theme::MATRIX_EMPTY),
                                    );
                                }
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}
