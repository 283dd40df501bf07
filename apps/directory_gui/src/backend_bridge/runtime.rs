//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use crossbeam_channel::{Receiver, Sender};
use directory_client::{EmployeeApi, HttpEmployeeApi};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorCategory, UiErrorContext, UiEvent};

/// Starts the backend worker thread. Every command runs as its own task, so requests
/// overlap freely and the UI never waits on one.
pub fn launch(api_base_url: String, cmd_rx: Receiver<BackendCommand>, ui_tx: Sender<UiEvent>) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::new(
                    UiErrorContext::BackendStartup,
                    UiErrorCategory::Internal,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let api = HttpEmployeeApi::new(api_base_url);
            tracing::info!(api_base_url = api.base_url(), "backend worker ready");

            while let Ok(cmd) = cmd_rx.recv() {
                let api = api.clone();
                let ui_tx = ui_tx.clone();
                tokio::spawn(async move {
                    let event = execute(&api, cmd).await;
                    if let Err(err) = ui_tx.try_send(event) {
                        tracing::warn!("dropping backend result for ui: {err}");
                    }
                });
            }
            tracing::info!("ui command queue closed; backend worker stopping");
        });
    });
}

pub async fn execute<A: EmployeeApi>(api: &A, cmd: BackendCommand) -> UiEvent {
    match cmd {
        BackendCommand::LoadEmployees => match api.list_employees().await {
            Ok(employees) => UiEvent::EmployeesLoaded(employees),
            Err(err) => UiEvent::Error(UiError::from_client(UiErrorContext::Load, &err)),
        },
        BackendCommand::CreateEmployee { payload } => match api.create_employee(&payload).await {
            Ok(employee) => UiEvent::EmployeeSaved(employee),
            Err(err) => UiEvent::Error(UiError::from_client(UiErrorContext::Save, &err)),
        },
        BackendCommand::UpdateEmployee { id, payload } => {
            match api.update_employee(id, &payload).await {
                Ok(employee) => UiEvent::EmployeeSaved(employee),
                Err(err) => UiEvent::Error(UiError::from_client(UiErrorContext::Save, &err)),
            }
        }
        BackendCommand::DeleteEmployee { id } => match api.delete_employee(id).await {
            Ok(()) => UiEvent::EmployeeDeleted(id),
            Err(err) => UiEvent::Error(UiError::from_client(UiErrorContext::Delete, &err)),
        },
    }
}
