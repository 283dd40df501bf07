use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Employee, EmployeeId},
    error::ApiErrorBody,
    protocol::{EmployeeListing, EmployeePayload},
};
use tracing::debug;

pub mod config;
pub mod draft;
pub mod error;
mod session;
pub mod state;

pub use draft::{DraftError, EmployeeDraft, FieldChange};
pub use error::{ClientError, SessionError};
pub use session::DirectorySession;
pub use state::{DirectoryState, Resync, SubmitRequest};

/// The `/employees/` REST resource.
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError>;
    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, ClientError>;
    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ClientError>;
    async fn update_employee(
        &self,
        id: EmployeeId,
        payload: &EmployeePayload,
    ) -> Result<Employee, ClientError>;
    async fn delete_employee(&self, id: EmployeeId) -> Result<(), ClientError>;
}

#[async_trait]
impl<T: EmployeeApi + ?Sized> EmployeeApi for Arc<T> {
    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        (**self).list_employees().await
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, ClientError> {
        (**self).get_employee(id).await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ClientError> {
        (**self).create_employee(payload).await
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        payload: &EmployeePayload,
    ) -> Result<Employee, ClientError> {
        (**self).update_employee(id, payload).await
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), ClientError> {
        (**self).delete_employee(id).await
    }
}

#[derive(Clone)]
pub struct HttpEmployeeApi {
    http: Client,
    base_url: String,
}

impl HttpEmployeeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn collection_url(&self) -> String {
        format!("{}/employees/", self.base_url)
    }

    pub fn record_url(&self, id: EmployeeId) -> String {
        format!("{}/employees/{id}", self.base_url)
    }

    async fn send(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<Response, ClientError> {
        debug!(method, url, "directory api request");
        let response = request
            .send()
            .await
            .map_err(|source| ClientError::Request {
                method,
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .map(|body| body.summary());
        Err(ClientError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
            detail,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: &'static str,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        self.send(method, url, request)
            .await?
            .json::<T>()
            .await
            .map_err(|source| ClientError::Decode {
                method,
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl EmployeeApi for HttpEmployeeApi {
    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let url = self.collection_url();
        let listing: EmployeeListing = self.send_json("GET", &url, self.http.get(&url)).await?;
        Ok(listing.into_records())
    }

    async fn get_employee(&self, id: EmployeeId) -> Result<Employee, ClientError> {
        let url = self.record_url(id);
        self.send_json("GET", &url, self.http.get(&url)).await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee, ClientError> {
        let url = self.collection_url();
        self.send_json("POST", &url, self.http.post(&url).json(payload))
            .await
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        payload: &EmployeePayload,
    ) -> Result<Employee, ClientError> {
        let url = self.record_url(id);
        self.send_json("PUT", &url, self.http.put(&url).json(payload))
            .await
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<(), ClientError> {
        let url = self.record_url(id);
        self.send("DELETE", &url, self.http.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
