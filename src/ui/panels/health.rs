// ipscmon - ui/panels/health.rs
//
// Health tab: configuration anomalies detected by the audit, grouped by
// severity. Findings are advisory and never block the other views.

use crate::app::state::AppState;
use crate::core::health::IssueSeverity;
use crate::ui::theme;

/// Render the health findings for the current snapshot.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    ui.strong("Configuration audit");
    ui.add_space(4.0);

    if state.records().is_empty() {
        ui.label("No data loaded.");
        return;
    }

    if state.health_issues.is_empty() {
        ui.label(
            egui::RichText::new("✔ No anomalies found")
                .color(theme::matrix_cell_colour(crate::core::model::Role::Peer)),
        );
        return;
    }

    let errors = state
        .health_issues
        .iter()
        .filter(|i| i.severity() == IssueSeverity::Error)
        .count();
    let warnings = state.health_issues.len() - errors;
    ui.label(format!("{errors} error(s), {warnings} warning(s)"));
    ui.add_space(6.0);

    egui::ScrollArea::vertical()
        .id_salt("health_view")
        .show(ui, |ui| {
            // Errors first, warnings after.
            for severity in [IssueSeverity::Error, IssueSeverity::Warning] {
                for issue in state
                    .health_issues
                    .iter()
                    .filter(|i| i.severity() == severity)
                {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(severity.label())
                                .strong()
                                .color(theme::severity_colour(severity)),
                        );
                        ui.label(issue.describe());
                    });
                }
            }
        });
}
