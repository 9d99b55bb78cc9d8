//! TriSense backend REST client
//!
//! One method per backend operation, all single-shot: no retry, no backoff,
//! no request queueing. A failed call is reported to the operator, who
//! re-runs the command. Concurrent invocations are permitted and rely on
//! backend-side idempotency.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use trisense_common::models::{Competition, MappingStatus, UnmappedSummary, UploadBatch};
use trisense_common::upload::{self, RawUploadResponse, UploadReport};
use trisense_common::{Error, Result, SensorKind};

const USER_AGENT: &str = concat!("trisense-admin/", env!("CARGO_PKG_VERSION"));

/// Request timeout: a hung backend request fails the command instead of
/// pinning it until the operator kills the process.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Response to `POST /auth/login`
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// TriSense backend API client
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client for the given backend URL
    ///
    /// `token` is attached as `Authorization: Bearer <token>` to every
    /// admin request when present.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            token,
        })
    }

    /// Replace the bearer token (after a fresh login)
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Map a response to an error unless it is 2xx
    ///
    /// Non-2xx responses surface the JSON body's `detail` field verbatim
    /// when present, otherwise the raw body text.
    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(str::to_string))
            .unwrap_or_else(|| {
                if body.is_empty() {
                    status.to_string()
                } else {
                    body.clone()
                }
            });

        Err(Error::Api {
            status: status.as_u16(),
            detail,
        })
    }

    /// GET a JSON resource; query pairs go through reqwest's URL encoder
    /// so opaque backend ids survive characters like `&` or `=` intact
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let mut builder = self.authorized(self.http.get(self.url(path)));
        if !query.is_empty() {
            builder = builder.query(query);
        }
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))
    }

    // ========================================
    // Auth
    // ========================================

    /// Authenticate and return a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let login: LoginResponse = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        tracing::info!(username, "Login successful");
        Ok(login.access_token)
    }

    // ========================================
    // Competitions
    // ========================================

    /// List competitions available for scoping uploads
    pub async fn list_competitions(&self) -> Result<Vec<Competition>> {
        self.get_json("/admin/competitions", &[]).await
    }

    // ========================================
    // Uploads
    // ========================================

    /// Upload one or more sensor data files for a competition
    ///
    /// Builds a multipart form with the modality's documented field name,
    /// a `competition_id` text part, and `sensor_id` when the modality
    /// requires one. Guards run before any network I/O.
    pub async fn upload(
        &self,
        kind: SensorKind,
        competition_id: &str,
        files: &[PathBuf],
        sensor_id: Option<&str>,
    ) -> Result<UploadReport> {
        validate_upload(kind, competition_id, files, sensor_id)?;

        let mut form =
            reqwest::multipart::Form::new().text("competition_id", competition_id.to_string());

        if let Some(id) = sensor_id {
            form = form.text("sensor_id", id.to_string());
        }

        for path in files {
            let bytes = tokio::fs::read(path).await?;
            let file_name = display_file_name(path);
            let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
            form = form.part(kind.field_name(), part);
        }

        tracing::info!(
            sensor_type = %kind,
            competition_id,
            file_count = files.len(),
            "Uploading sensor data"
        );

        let response = self
            .authorized(self.http.post(self.url(&kind.endpoint_path())))
            .multipart(form)
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let raw: RawUploadResponse = Self::check(response)
            .await?
            .json()
            .await
            .map_err(|e| Error::Parse(e.to_string()))?;

        let report = upload::normalize(kind, raw);
        tracing::info!(
            sensor_type = %kind,
            success = report.success,
            failed = report.failed,
            "Upload processed"
        );
        Ok(report)
    }

    // ========================================
    // Mapping
    // ========================================

    /// Aggregate mapping counts, scoped to one competition or all
    pub async fn mapping_status(&self, competition_id: Option<&str>) -> Result<MappingStatus> {
        self.get_json("/admin/mapping/status", &scope_query(competition_id))
            .await
    }

    /// Per-sensor-type breakdown of records lacking a user mapping
    pub async fn unmapped_summary(&self, competition_id: Option<&str>) -> Result<UnmappedSummary> {
        self.get_json("/admin/mapping/unmapped", &scope_query(competition_id))
            .await
    }

    /// Apply pending mappings: bind sensor ids (and bib numbers) to user ids
    ///
    /// Irreversible; the matching itself runs server-side. Callers must
    /// hold a [`MappingStatus`] with `can_apply()` and have confirmed with
    /// the operator.
    pub async fn apply_mapping(&self, competition_id: &str) -> Result<()> {
        if competition_id.trim().is_empty() {
            return Err(Error::InvalidInput(
                "a competition must be selected before applying mappings".to_string(),
            ));
        }

        tracing::info!(competition_id, "Applying mappings");

        let response = self
            .authorized(self.http.post(self.url("/admin/mapping/apply")))
            .form(&[("competition_id", competition_id)])
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }

    // ========================================
    // Batch history
    // ========================================

    /// List upload batches for a competition
    pub async fn list_batches(&self, competition_id: &str) -> Result<Vec<UploadBatch>> {
        self.get_json("/admin/batches", &[("competition_id", competition_id)])
            .await
    }

    /// Delete a batch and, server-side, its derived sensor records
    pub async fn delete_batch(&self, batch_id: &str) -> Result<()> {
        tracing::info!(batch_id, "Deleting upload batch");

        let response = self
            .authorized(
                self.http
                    .delete(self.url(&format!("/admin/batches/{}", batch_id))),
            )
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }
}

/// Optional competition scope as query pairs (empty = all competitions)
fn scope_query(competition_id: Option<&str>) -> Vec<(&'static str, &str)> {
    match competition_id {
        Some(id) => vec![("competition_id", id)],
        None => Vec::new(),
    }
}

/// Pre-flight guards, checked before any bytes leave the machine
fn validate_upload(
    kind: SensorKind,
    competition_id: &str,
    files: &[PathBuf],
    sensor_id: Option<&str>,
) -> Result<()> {
    if competition_id.trim().is_empty() {
        return Err(Error::InvalidInput(
            "a competition must be selected before uploading".to_string(),
        ));
    }

    if files.is_empty() {
        return Err(Error::InvalidInput(format!(
            "{} upload requires at least one file",
            kind.label()
        )));
    }

    if !kind.accepts_multiple_files() && files.len() > 1 {
        return Err(Error::InvalidInput(format!(
            "{} upload accepts a single file, got {}",
            kind.label(),
            files.len()
        )));
    }

    if kind.requires_sensor_id() && sensor_id.map_or(true, |s| s.trim().is_empty()) {
        return Err(Error::InvalidInput(
            "heart-rate uploads require --sensor-id (TCX files do not identify their device)"
                .to_string(),
        ));
    }

    Ok(())
}

fn display_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
