//! # Document QA Service Client
//!
//! Rust client library for the document question-answering service: PDF
//! upload, question answering, and the plaintext trace log.
//!
//! ## Example
//!
//! ```no_run
//! use docqa_client::{DocQaClient, PdfUpload};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create client from DOCQA_BASE_URL environment variable
//!     let client = DocQaClient::from_env();
//!
//!     // Upload a document
//!     let upload = PdfUpload::new("paper.pdf", std::fs::read("paper.pdf")?);
//!     let receipt = client.upload_pdf(upload).await?;
//!     println!("{}", receipt.message);
//!
//!     // Ask a question about it
//!     let answer = client.ask("What is the methodology?").await?;
//!     println!("{} (via {})", answer.answer, answer.agent_used);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - Multipart PDF upload
//! - JSON question answering with agent attribution
//! - Plaintext trace log retrieval
//! - Typed error taxonomy separating service-reported errors from transport
//!   and decoding failures

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::DocQaClient;
pub use error::ApiError;
pub use types::{Answer, AskRequest, PdfUpload, UploadReceipt};
