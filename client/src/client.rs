//! Document QA service client implementation

use crate::{
    error::ApiError,
    types::{Answer, AskRequest, ErrorBody, PdfUpload, UploadReceipt},
};
use reqwest::{
    Client, Response,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;

/// Default service address used when `DOCQA_BASE_URL` is not set
///
/// The service listens on port 5000 in development.
const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Document QA service client
#[derive(Clone)]
pub struct DocQaClient {
    client: Client,
    base_url: String,
}

impl DocQaClient {
    /// Create a new client with base URL from the `DOCQA_BASE_URL`
    /// environment variable, falling back to the development default
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("DOCQA_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Self::new(base_url)
    }

    /// Create a new client with an explicit base URL
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            client: Client::new(),
            base_url,
        }
    }

    /// Upload a PDF for indexing
    ///
    /// Issues a single multipart POST with the file bytes under the form
    /// field `file`. The service answers `{"message": ...}` on success and
    /// `{"error": ...}` otherwise.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, service-reported errors, or
    /// undecodable response bodies
    pub async fn upload_pdf(&self, upload: PdfUpload) -> Result<UploadReceipt, ApiError> {
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str("application/pdf")
            .map_err(|e| ApiError::Request(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(format!("{}/uploadPdf", self.base_url))
            .multipart(form)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Self::decode_json(response).await
    }

    /// Ask a question about the uploaded document (or the wider world;
    /// routing is the service's concern)
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, service-reported errors, or
    /// undecodable response bodies
    pub async fn ask(&self, query: &str) -> Result<Answer, ApiError> {
        let response = self
            .client
            .post(format!("{}/ask", self.base_url))
            .json(&AskRequest::new(query))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Self::decode_json(response).await
    }

    /// Fetch the service's trace log as plaintext
    ///
    /// The body is returned as-is for any HTTP status; the service reports
    /// its own "log file not found" text with a 404 and callers render it
    /// verbatim. Only transport failures are errors.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Request` for network failures and `ApiError::Parse`
    /// when the body cannot be read
    pub async fn fetch_logs(&self) -> Result<String, ApiError> {
        let response = self
            .client
            .get(format!("{}/logs", self.base_url))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        response
            .text()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Decode a JSON response, mapping non-success statuses to
    /// `ApiError::Service`
    ///
    /// The body is parsed before the status is classified, so a non-success
    /// response that is not JSON surfaces as a parse failure.
    async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))
        } else {
            let body = response
                .json::<ErrorBody>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string()))?;

            Err(ApiError::Service {
                status: status.as_u16(),
                message: body.error,
            })
        }
    }
}
