// ipscmon - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the menu bar, KPI strip, filter sidebar, dashboard tabs,
// and status bar.

use crate::app::state::{ActiveTab, AppState};
use crate::core::export;
use crate::core::model::{LoadOutcome, RepeaterRecord};
use crate::ui::{panels, theme};
use std::path::Path;

/// The ipscmon application.
pub struct IpscMonApp {
    pub state: AppState,
}

impl IpscMonApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    /// Records of the filtered view, cloned for export.
    fn filtered_records(&self) -> Vec<RepeaterRecord> {
        let records = self.state.records();
        self.state
            .filtered_indices
            .iter()
            .map(|&idx| records[idx].clone())
            .collect()
    }

    fn export(&mut self, format: ExportFormat) {
        let records = self.filtered_records();
        if records.len() > self.state.config.export.large_export_threshold {
            tracing::warn!(
                count = records.len(),
                threshold = self.state.config.export.large_export_threshold,
                "Large export requested"
            );
        }

        let dialog = rfd::FileDialog::new().set_file_name(match format {
            ExportFormat::Csv => "inventory_export.csv",
            ExportFormat::Json => "inventory_export.json",
        });
        let Some(path) = dialog.save_file() else {
            return;
        };

        self.state.status_message = match write_export(&records, &path, format) {
            Ok(count) => format!("Exported {count} records to '{}'", path.display()),
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("Export failed: {e}")
            }
        };
    }

    fn open_dialog(&mut self) {
        let dialog = rfd::FileDialog::new().add_filter("CSV inventory", &["csv"]);
        if let Some(path) = dialog.pick_file() {
            self.state.open_inventory(path);
        }
    }

    fn menu_bar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Inventory…").clicked() {
                    ui.close_menu();
                    self.open_dialog();
                }
                let has_data = self.state.repository.is_some();
                if ui
                    .add_enabled(has_data, egui::Button::new("Reload"))
                    .clicked()
                {
                    ui.close_menu();
                    self.state.reload();
                }
                ui.separator();
                if ui
                    .add_enabled(has_data, egui::Button::new("Export Filtered as CSV…"))
                    .clicked()
                {
                    ui.close_menu();
                    self.export(ExportFormat::Csv);
                }
                if ui
                    .add_enabled(has_data, egui::Button::new("Export Filtered as JSON…"))
                    .clicked()
                {
                    ui.close_menu();
                    self.export(ExportFormat::Json);
                }
                ui.separator();
                if ui.button("Load Summary").clicked() {
                    ui.close_menu();
                    self.state.show_load_summary = true;
                }
                if ui.button("Close Inventory").clicked() {
                    ui.close_menu();
                    self.state.clear();
                }
                ui.separator();
                if ui.button("Quit").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });
    }

    fn tab_bar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for (tab, label) in [
                (ActiveTab::Logical, "🌐 Logical"),
                (ActiveTab::Physical, "🏔 Physical"),
                (ActiveTab::Matrix, "📊 Matrix"),
                (ActiveTab::Charts, "📈 Charts"),
                (ActiveTab::Health, "🩺 Health"),
            ] {
                ui.selectable_value(&mut self.state.active_tab, tab, label);
            }
        });
    }

    fn warning_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(repo) = self.state.repository.as_ref() {
            match &repo.snapshot().outcome {
                LoadOutcome::Failed(message) => {
                    ui.colored_label(
                        theme::WARNING_TEXT,
                        format!("⚠ Inventory could not be loaded: {message}"),
                    );
                }
                LoadOutcome::Empty => {
                    ui.colored_label(
                        theme::WARNING_TEXT,
                        "⚠ Inventory loaded but contains no usable rows.",
                    );
                }
                LoadOutcome::Loaded => {}
            }
        }
        if self.state.source_is_stale() {
            ui.horizontal(|ui| {
                ui.colored_label(
                    theme::WARNING_TEXT,
                    "⚠ Source file changed on disk.",
                );
                if ui.small_button("Reload now").clicked() {
                    self.state.reload();
                }
            });
        }
    }
}

impl eframe::App for IpscMonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.menu_bar(ctx, ui);
        });

        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(theme::STATUS_BAR_HEIGHT)
            .frame(egui::Frame::new().fill(theme::STATUS_BG))
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.colored_label(theme::STATUS_TEXT, &self.state.status_message);
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.colored_label(
                            theme::STATUS_TEXT,
                            format!(
                                "{} / {} shown",
                                self.state.filtered_indices.len(),
                                self.state.records().len()
                            ),
                        );
                    });
                });
            });

        egui::SidePanel::left("filter_sidebar")
            .default_width(theme::SIDEBAR_WIDTH)
            .show(ctx, |ui| {
                panels::filters::render(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.warning_banner(ui);
            panels::kpi::render(ui, &self.state);
            ui.add_space(6.0);
            self.tab_bar(ui);
            ui.separator();

            match self.state.active_tab {
                ActiveTab::Logical => panels::logical::render(ui, &self.state),
                ActiveTab::Physical => panels::physical::render(ui, &self.state),
                ActiveTab::Matrix => panels::matrix::render(ui, &self.state),
                ActiveTab::Charts => panels::charts::render(ui, &self.state),
                ActiveTab::Health => panels::health::render(ui, &self.state),
            }
        });

        panels::summary::render(ctx, &mut self.state);
    }
}

#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

fn write_export(
    records: &[RepeaterRecord],
    path: &Path,
    format: ExportFormat,
) -> crate::util::error::Result<usize> {
    let file = std::fs::File::create(path).map_err(|e| crate::util::error::InventoryError::Io {
        path: path.to_path_buf(),
        operation: "export",
        source: e,
    })?;
    let writer = std::io::BufWriter::new(file);
    let count = match format {
        ExportFormat::Csv => export::export_csv(records, writer, path)?,
        ExportFormat::Json => export::export_json(records, writer, path)?,
    };
    Ok(count)
}
