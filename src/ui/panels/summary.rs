// ipscmon - ui/panels/summary.rs
//
// Load summary modal window: row statistics and the outcome of the most
// recent load, including dropped-row and failure details.

use crate::app::state::AppState;
use crate::core::model::LoadOutcome;
use crate::ui::theme;

/// Render the load summary dialog (if state.show_load_summary is true).
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_load_summary {
        return;
    }

    let mut open = true;
    egui::Window::new("Load Summary")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(380.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let Some(repo) = state.repository.as_ref() else {
                ui.label("No inventory has been loaded yet.");
                return;
            };
            let snapshot = repo.snapshot();

            ui.strong("Source");
            ui.label(repo.source().display().to_string());
            if let Some(loaded_at) = snapshot.loaded_at {
                ui.label(format!(
                    "Loaded at {}",
                    loaded_at.format("%Y-%m-%d %H:%M:%S UTC")
                ));
            }

            ui.add_space(8.0);
            ui.separator();

            match &snapshot.outcome {
                LoadOutcome::Failed(message) => {
                    ui.colored_label(theme::severity_colour(
                        crate::core::health::IssueSeverity::Error,
                    ), format!("Load failed: {message}"));
                }
                outcome => {
                    let summary = &snapshot.summary;
                    egui::Grid::new("load_summary_grid")
                        .num_columns(2)
                        .spacing([16.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Outcome:");
                            ui.label(if *outcome == LoadOutcome::Empty {
                                "Empty (no usable rows)"
                            } else {
                                "Loaded"
                            });
                            ui.end_row();

                            ui.label("Records:");
                            ui.label(summary.total_records.to_string());
                            ui.end_row();

                            ui.label("Rows dropped:");
                            let drop_colour = if summary.rows_dropped > 0 {
                                theme::WARNING_TEXT
                            } else {
                                ui.style().visuals.text_color()
                            };
                            ui.colored_label(drop_colour, summary.rows_dropped.to_string());
                            ui.end_row();

                            ui.label("Systems:");
                            ui.label(summary.system_count.to_string());
                            ui.end_row();

                            ui.label("Sites:");
                            ui.label(summary.site_count.to_string());
                            ui.end_row();

                            ui.label("Masters / Peers:");
                            ui.label(format!(
                                "{} / {}",
                                summary.master_count, summary.peer_count
                            ));
                            ui.end_row();

                            ui.label("Duration:");
                            ui.label(format!("{:.2}s", summary.duration.as_secs_f64()));
                            ui.end_row();
                        });
                }
            }

            ui.add_space(8.0);
            ui.separator();
            if ui.button("Close").clicked() {
                state.show_load_summary = false;
            }
        });

    if !open {
        state.show_load_summary = false;
    }
}
