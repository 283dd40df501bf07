//! State transitions for backend events and UI intents.

use chrono::NaiveDate;
use crossbeam_channel::Sender;
use directory_client::{DirectoryState, Resync};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiAction, UiError, UiEvent};
use crate::controller::orchestration::{confirm_delete, dispatch_backend_command, submit_draft};

/// Applies one backend result. Returns the reload to queue when a mutation went through.
pub fn apply_ui_event(state: &mut DirectoryState, event: UiEvent) -> Option<BackendCommand> {
    match event {
        UiEvent::EmployeesLoaded(employees) => {
            tracing::info!(count = employees.len(), "loaded employee directory");
            state.apply_loaded(employees);
            None
        }
        UiEvent::EmployeeSaved(employee) => {
            tracing::info!(employee_id = %employee.id, "saved employee");
            Some(resync_command(state.submit_succeeded()))
        }
        UiEvent::EmployeeDeleted(id) => {
            tracing::info!(employee_id = %id, "deleted employee");
            Some(resync_command(state.delete_succeeded()))
        }
        UiEvent::Error(err) => {
            log_ui_error(&err);
            None
        }
    }
}

pub fn apply_ui_action(
    state: &mut DirectoryState,
    action: UiAction,
    today: NaiveDate,
    cmd_tx: &Sender<BackendCommand>,
) {
    match action {
        UiAction::OpenCreateDialog => state.open_create_dialog(),
        UiAction::OpenEditDialog(employee) => state.open_edit_dialog(&employee),
        UiAction::CloseDialog => state.close_dialog(),
        UiAction::ChangeField(change) => state.change_field(change, today),
        UiAction::Submit => {
            submit_draft(state, cmd_tx);
        }
        UiAction::OpenDeletePrompt(employee) => state.open_delete_prompt(&employee),
        UiAction::CloseDeletePrompt => state.close_delete_prompt(),
        UiAction::ConfirmDelete => {
            confirm_delete(state, cmd_tx);
        }
    }
}

/// Drains every pending backend event and queues the reloads they ask for.
pub fn process_ui_events(
    state: &mut DirectoryState,
    ui_rx: &crossbeam_channel::Receiver<UiEvent>,
    cmd_tx: &Sender<BackendCommand>,
) {
    while let Ok(event) = ui_rx.try_recv() {
        if let Some(cmd) = apply_ui_event(state, event) {
            dispatch_backend_command(cmd_tx, cmd);
        }
    }
}

fn resync_command(_resync: Resync) -> BackendCommand {
    BackendCommand::LoadEmployees
}

pub fn log_ui_error(err: &UiError) {
    tracing::error!(
        context = ?err.context(),
        category = ?err.category(),
        "{}",
        err.message()
    );
}
