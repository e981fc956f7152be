//! Actions processed by the page reducer

use docqa_client::{Answer, ApiError, PdfUpload, UploadReceipt};

/// All inputs to the page: user triggers and request completions
///
/// Completions are fed back by the effects the triggers produce; each flow
/// has exactly one completion per trigger.
#[derive(Clone, Debug)]
pub enum PageAction {
    /// The upload form was submitted, with the selected file if any
    UploadSubmitted {
        /// Selected file; `None` when the picker is empty
        file: Option<PdfUpload>,
    },
    /// The upload request completed
    UploadFinished {
        /// Service receipt or the error to render
        outcome: Result<UploadReceipt, ApiError>,
    },
    /// The ask form was submitted with the raw query text
    AskSubmitted {
        /// Untrimmed query text as entered
        query: String,
    },
    /// The ask request completed
    AskFinished {
        /// Answer or the error to render
        outcome: Result<Answer, ApiError>,
    },
    /// The load-logs button was clicked
    LogsRequested,
    /// The logs request completed
    LogsFinished {
        /// Plaintext snapshot or the transport failure
        outcome: Result<String, ApiError>,
    },
}
