// ipscmon - ui/panels/charts.rs
//
// Distribution tab: repeaters per system group and the Master/Peer share,
// drawn as simple horizontal bars.

use crate::app::state::AppState;
use crate::core::model::{Role, SystemGroup};
use crate::ui::theme;

/// Render the distribution bars for the current snapshot.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let Some(repo) = state.repository.as_ref() else {
        ui.label("No data loaded.");
        return;
    };
    let summary = &repo.snapshot().summary;
    if summary.total_records == 0 {
        ui.label("No data loaded.");
        return;
    }

    ui.strong("Repeaters per system");
    ui.add_space(4.0);

    let max_count = summary
        .records_by_group
        .values()
        .copied()
        .max()
        .unwrap_or(1);

    egui::Grid::new("group_bars")
        .num_columns(3)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for group in SystemGroup::all() {
                let Some(&count) = summary.records_by_group.get(group) else {
                    continue;
                };
                ui.label(group.label());
                bar(ui, count, max_count, theme::ACCENT);
                ui.label(count.to_string());
                ui.end_row();
            }
        });

    ui.add_space(12.0);
    ui.separator();
    ui.strong("Role share");
    ui.add_space(4.0);

    egui::Grid::new("role_bars")
        .num_columns(3)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            let total = summary.total_records;
            for (role, count) in [
                (Role::Master, summary.master_count),
                (Role::Peer, summary.peer_count),
            ] {
                ui.label(role.label());
                bar(ui, count, total, theme::matrix_cell_colour(role));
                ui.label(format!(
                    "{count} ({:.0}%)",
                    100.0 * count as f64 / total as f64
                ));
                ui.end_row();
            }
        });
}

/// Draw one horizontal bar scaled against `max`.
fn bar(ui: &mut egui::Ui, value: usize, max: usize, colour: egui::Color32) {
    let fraction = if max == 0 {
        0.0
    } else {
        value as f32 / max as f32
    };
    let width = theme::CHART_MAX_BAR_WIDTH * fraction;
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(theme::CHART_MAX_BAR_WIDTH, theme::CHART_BAR_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter();
    painter.rect_filled(rect, 3.0, ui.style().visuals.faint_bg_color);
    let fill = egui::Rect::from_min_size(rect.min, egui::vec2(width, rect.height()));
    painter.rect_filled(fill, 3.0, colour);
}
