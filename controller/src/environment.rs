//! Injected dependencies for the page reducer
//!
//! The environment returns effects, not clients: reducers stay pure and the
//! single suspension point of each flow lives inside the effect.

use crate::{action::PageAction, effect::Effect};
use docqa_client::{DocQaClient, PdfUpload};
use std::sync::Arc;

/// Network capabilities of the page, one per flow
///
/// Each method issues (when its effect is executed) exactly one request and
/// resolves to the matching completion action. Implementations decide what
/// "the network" is; tests substitute canned outcomes.
pub trait PageEnvironment: Send + Sync {
    /// Upload a PDF; resolves to `PageAction::UploadFinished`
    fn upload_pdf(&self, upload: PdfUpload) -> Effect<PageAction>;

    /// Ask a question; resolves to `PageAction::AskFinished`
    fn ask(&self, query: String) -> Effect<PageAction>;

    /// Fetch the trace log; resolves to `PageAction::LogsFinished`
    fn fetch_logs(&self) -> Effect<PageAction>;
}

/// Production environment backed by the document QA service client
#[derive(Clone)]
pub struct ServiceEnvironment {
    /// Shared service client
    client: Arc<DocQaClient>,
}

impl ServiceEnvironment {
    /// Create an environment around an existing client
    #[must_use]
    pub fn new(client: DocQaClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Create an environment with the client configured from `DOCQA_BASE_URL`
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(DocQaClient::from_env())
    }
}

impl PageEnvironment for ServiceEnvironment {
    fn upload_pdf(&self, upload: PdfUpload) -> Effect<PageAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move {
            let outcome = client.upload_pdf(upload).await;
            Some(PageAction::UploadFinished { outcome })
        }))
    }

    fn ask(&self, query: String) -> Effect<PageAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move {
            let outcome = client.ask(&query).await;
            Some(PageAction::AskFinished { outcome })
        }))
    }

    fn fetch_logs(&self) -> Effect<PageAction> {
        let client = Arc::clone(&self.client);

        Effect::Future(Box::pin(async move {
            let outcome = client.fetch_logs().await;
            Some(PageAction::LogsFinished { outcome })
        }))
    }
}
