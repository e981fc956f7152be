//! Wire types for the document QA service

use serde::{Deserialize, Serialize};

/// A PDF file selected for upload
///
/// Created at submit time and consumed by the upload call; the filename is
/// preserved so the service sees the original name.
#[derive(Clone, PartialEq, Eq)]
pub struct PdfUpload {
    /// Original filename, including the `.pdf` extension
    pub file_name: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

// Manual Debug: the file contents are elided, only their size is shown
impl std::fmt::Debug for PdfUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfUpload")
            .field("file_name", &self.file_name)
            .field("bytes", &format_args!("<{} bytes>", self.bytes.len()))
            .finish()
    }
}

impl PdfUpload {
    /// Create an upload from a filename and raw bytes
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }
}

/// Request body for the question endpoint
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct AskRequest {
    /// The user's question, already trimmed
    pub query: String,
}

impl AskRequest {
    /// Create a request for the given query
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Successful response from the question endpoint
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    /// The synthesized answer text
    pub answer: String,
    /// Why the controller routed the query the way it did
    pub rationale: String,
    /// Identifier of the agent that produced the answer
    pub agent_used: String,
}

/// Successful response from the upload endpoint
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Human-readable confirmation from the service
    pub message: String,
}

/// Shape probed on non-success JSON bodies
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: Option<String>,
}
