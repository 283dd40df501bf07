use std::time::Duration;

use chrono::Local;
use crossbeam_channel::{Receiver, Sender};
use directory_client::DirectoryState;
use eframe::egui;
use shared::domain::wire_date;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::{
    events::{UiAction, UiEvent},
    orchestration::dispatch_backend_command,
    reducer::{apply_ui_action, process_ui_events},
};
use crate::ui::{dialogs, table};

pub struct DirectoryApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    api_base_url: String,
    state: DirectoryState,

    // Raw date-of-birth text; only complete dates reach the draft.
    dob_input: String,
}

impl DirectoryApp {
    /// Builds the view and queues the initial fetch of the collection.
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        api_base_url: String,
    ) -> Self {
        dispatch_backend_command(&cmd_tx, BackendCommand::LoadEmployees);
        Self {
            cmd_tx,
            ui_rx,
            api_base_url,
            state: DirectoryState::new(),
            dob_input: String::new(),
        }
    }

    pub fn state(&self) -> &DirectoryState {
        &self.state
    }

    pub fn dob_input(&self) -> &str {
        &self.dob_input
    }

    pub fn process_ui_events(&mut self) {
        process_ui_events(&mut self.state, &self.ui_rx, &self.cmd_tx);
    }

    pub fn handle_actions(&mut self, actions: Vec<UiAction>) {
        let today = Local::now().date_naive();
        for action in actions {
            let opens_form = matches!(
                action,
                UiAction::OpenCreateDialog | UiAction::OpenEditDialog(_)
            );
            apply_ui_action(&mut self.state, action, today, &self.cmd_tx);
            if opens_form {
                self.dob_input = self
                    .state
                    .draft()
                    .dob
                    .map(|dob| dob.format(wire_date::FORMAT).to_string())
                    .unwrap_or_default();
            }
        }
    }

    fn show_header(&self, ctx: &egui::Context, actions: &mut Vec<UiAction>) {
        egui::TopBottomPanel::top("directory_header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.heading("Employee Directory");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Add Employee").clicked() {
                        actions.push(UiAction::OpenCreateDialog);
                    }
                });
            });
            ui.weak(&self.api_base_url);
            ui.add_space(4.0);
        });
    }
}

impl eframe::App for DirectoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let mut actions = Vec::new();
        self.show_header(ctx, &mut actions);
        egui::CentralPanel::default().show(ctx, |ui| {
            table::show_employee_table(ui, self.state().employees(), &mut actions);
        });
        dialogs::show_employee_form(ctx, &self.state, &mut self.dob_input, &mut actions);
        dialogs::show_delete_prompt(ctx, &self.state, &mut actions);
        self.handle_actions(actions);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
