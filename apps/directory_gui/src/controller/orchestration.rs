//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use directory_client::DirectoryState;
use shared::domain::EmployeeId;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext};
use crate::controller::reducer::log_ui_error;

pub fn dispatch_backend_command(cmd_tx: &Sender<BackendCommand>, cmd: BackendCommand) -> bool {
    let cmd_name = cmd.name();
    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            true
        }
        Err(TrySendError::Full(_)) => {
            log_ui_error(&UiError::new(
                UiErrorContext::CommandQueue,
                UiErrorCategory::Internal,
                format!("ui command queue is full; dropped {cmd_name}"),
            ));
            false
        }
        Err(TrySendError::Disconnected(_)) => {
            log_ui_error(&UiError::new(
                UiErrorContext::CommandQueue,
                UiErrorCategory::Internal,
                format!("backend command processor disconnected; dropped {cmd_name}"),
            ));
            false
        }
    }
}

/// Queues a create or update for the current draft. An incomplete draft is logged and
/// the dialog stays as it is.
pub fn submit_draft(state: &DirectoryState, cmd_tx: &Sender<BackendCommand>) -> bool {
    match state.prepare_submit() {
        Ok(request) => dispatch_backend_command(cmd_tx, request.into()),
        Err(err) => {
            tracing::warn!(error = %err, "not submitting incomplete employee draft");
            false
        }
    }
}

pub fn confirm_delete(
    state: &DirectoryState,
    cmd_tx: &Sender<BackendCommand>,
) -> Option<EmployeeId> {
    let Some(id) = state.delete_target() else {
        tracing::warn!("delete confirmed without a selected employee");
        return None;
    };
    dispatch_backend_command(cmd_tx, BackendCommand::DeleteEmployee { id }).then_some(id)
}
