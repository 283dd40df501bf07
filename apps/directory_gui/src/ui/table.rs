use eframe::egui;
use shared::domain::Employee;

use crate::controller::events::UiAction;

pub const COLUMNS: [&str; 6] = [
    "Name",
    "Age",
    "Date of Birth",
    "Gender",
    "Department",
    "Actions",
];

pub fn display_dob(employee: &Employee) -> String {
    employee.dob.format("%-m/%-d/%Y").to_string()
}

pub fn show_employee_table(
    ui: &mut egui::Ui,
    employees: &[Employee],
    actions: &mut Vec<UiAction>,
) {
    if employees.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.label("No Employees Found");
        });
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        egui::Grid::new("employee_table")
            .num_columns(COLUMNS.len())
            .striped(true)
            .spacing([18.0, 8.0])
            .show(ui, |ui| {
                for column in COLUMNS {
                    ui.label(egui::RichText::new(column).strong());
                }
                ui.end_row();

                for employee in employees {
                    ui.label(&employee.name);
                    ui.label(employee.age.to_string());
                    ui.label(display_dob(employee));
                    ui.label(employee.gender.to_string());
                    ui.label(&employee.department);
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            actions.push(UiAction::OpenEditDialog(employee.clone()));
                        }
                        if ui.button("Delete").clicked() {
                            actions.push(UiAction::OpenDeletePrompt(employee.clone()));
                        }
                    });
                    ui.end_row();
                }
            });
    });
}
