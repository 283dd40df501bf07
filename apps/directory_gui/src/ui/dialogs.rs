use directory_client::{DirectoryState, FieldChange};
use eframe::egui;
use shared::domain::{wire_date, Gender};

use crate::controller::events::UiAction;

/// Field change for the date-of-birth text box. Blank or unparseable text clears the
/// draft's date, so a submit is refused until the text holds a full date again.
pub fn dob_change(input: &str) -> FieldChange {
    FieldChange::DateOfBirth(wire_date::parse(input).ok())
}

pub fn show_employee_form(
    ctx: &egui::Context,
    state: &DirectoryState,
    dob_input: &mut String,
    actions: &mut Vec<UiAction>,
) {
    if !state.form_open() {
        return;
    }

    let (title, submit_label) = if state.is_editing() {
        ("Edit Employee", "Update")
    } else {
        ("Add Employee", "Add")
    };
    let draft = state.draft();
    let mut open = true;

    egui::Window::new(title)
        .id(egui::Id::new("employee_form_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            egui::Grid::new("employee_form_fields")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Name");
                    let mut name = draft.name.clone();
                    if ui.text_edit_singleline(&mut name).changed() {
                        actions.push(UiAction::ChangeField(FieldChange::Name(name)));
                    }
                    ui.end_row();

                    ui.label("Age");
                    let mut age = draft.age.map(|age| age.to_string()).unwrap_or_default();
                    ui.add_enabled(false, egui::TextEdit::singleline(&mut age));
                    ui.end_row();

                    ui.label("Date of Birth");
                    let dob_edit =
                        egui::TextEdit::singleline(&mut *dob_input).hint_text("YYYY-MM-DD");
                    if ui.add(dob_edit).changed() {
                        actions.push(UiAction::ChangeField(dob_change(dob_input.as_str())));
                    }
                    ui.end_row();

                    ui.label("Gender");
                    let mut gender = draft.gender;
                    egui::ComboBox::from_id_salt("employee_gender")
                        .selected_text(gender.map_or("Select gender", Gender::label))
                        .show_ui(ui, |ui| {
                            for option in Gender::ALL {
                                ui.selectable_value(&mut gender, Some(option), option.label());
                            }
                        });
                    if gender != draft.gender {
                        if let Some(gender) = gender {
                            actions.push(UiAction::ChangeField(FieldChange::Gender(gender)));
                        }
                    }
                    ui.end_row();

                    ui.label("Department");
                    let mut department = draft.department.clone();
                    if ui.text_edit_singleline(&mut department).changed() {
                        actions.push(UiAction::ChangeField(FieldChange::Department(department)));
                    }
                    ui.end_row();
                });

            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(submit_label).clicked() {
                    actions.push(UiAction::Submit);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CloseDialog);
                }
            });
        });

    if !open {
        actions.push(UiAction::CloseDialog);
    }
}

pub fn show_delete_prompt(
    ctx: &egui::Context,
    state: &DirectoryState,
    actions: &mut Vec<UiAction>,
) {
    if !state.delete_open() {
        return;
    }

    let name = state
        .delete_candidate()
        .map(|employee| employee.name.as_str())
        .unwrap_or_default();
    let mut open = true;

    egui::Window::new("Confirm Delete")
        .id(egui::Id::new("delete_prompt_window"))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete {name}?"));
            ui.separator();
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let delete = egui::Button::new(
                    egui::RichText::new("Delete").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(176, 48, 48));
                if ui.add(delete).clicked() {
                    actions.push(UiAction::ConfirmDelete);
                }
                if ui.button("Cancel").clicked() {
                    actions.push(UiAction::CloseDeletePrompt);
                }
            });
        });

    if !open {
        actions.push(UiAction::CloseDeletePrompt);
    }
}
