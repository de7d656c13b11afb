// ipscmon - ui/panels/filters.rs
//
// Sidebar filter controls: system groups, roles, sites, text and regex
// search. Any change reapplies the filters immediately.

use crate::app::state::AppState;
use crate::core::model::{Role, SystemGroup};
use std::collections::BTreeSet;

/// Render the filter sidebar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let mut changed = false;

    ui.strong("Filters");
    ui.separator();

    // ---------------------------------------------------------------------
    // Text and regex search
    // ---------------------------------------------------------------------
    ui.label("Search");
    if ui
        .text_edit_singleline(&mut state.filter_state.text_search)
        .changed()
    {
        changed = true;
    }

    ui.label("Regex");
    if ui.text_edit_singleline(&mut state.regex_input).changed() {
        match state.filter_state.set_regex(&state.regex_input) {
            Ok(()) => {
                state.regex_error = None;
                changed = true;
            }
            Err(e) => state.regex_error = Some(e.to_string()),
        }
    }
    if let Some(ref error) = state.regex_error {
        ui.label(
            egui::RichText::new(error)
                .small()
                .color(crate::ui::theme::severity_colour(
                    crate::core::health::IssueSeverity::Error,
                )),
        );
    }

    ui.add_space(6.0);
    ui.separator();

    // ---------------------------------------------------------------------
    // Systems
    // ---------------------------------------------------------------------
    ui.strong("Systems");
    for group in SystemGroup::all() {
        let mut selected = state.filter_state.groups.contains(group);
        if ui.checkbox(&mut selected, group.label()).changed() {
            if selected {
                state.filter_state.groups.insert(*group);
            } else {
                state.filter_state.groups.remove(group);
            }
            changed = true;
        }
    }

    ui.add_space(6.0);
    ui.separator();

    // ---------------------------------------------------------------------
    // Roles
    // ---------------------------------------------------------------------
    ui.strong("Roles");
    for role in Role::all() {
        let mut selected = state.filter_state.roles.contains(role);
        if ui.checkbox(&mut selected, role.label()).changed() {
            if selected {
                state.filter_state.roles.insert(*role);
            } else {
                state.filter_state.roles.remove(role);
            }
            changed = true;
        }
    }

    ui.add_space(6.0);
    ui.separator();

    // ---------------------------------------------------------------------
    // Sites (from the current snapshot)
    // ---------------------------------------------------------------------
    ui.strong("Sites");
    let sites: BTreeSet<String> = state
        .records()
        .iter()
        .map(|rec| rec.site.clone())
        .collect();
    egui::ScrollArea::vertical()
        .id_salt("filter_sites")
        .max_height(180.0)
        .show(ui, |ui| {
            for site in &sites {
                let mut selected = state.filter_state.sites.contains(site);
                if ui.checkbox(&mut selected, site).changed() {
                    if selected {
                        state.filter_state.sites.insert(site.clone());
                    } else {
                        state.filter_state.sites.remove(site);
                    }
                    changed = true;
                }
            }
        });

    ui.add_space(8.0);
    if ui.button("Clear filters").clicked() {
        state.filter_state = Default::default();
        state.regex_input.clear();
        state.regex_error = None;
        changed = true;
    }

    if changed {
        state.apply_filters();
    }
}
