//! The page reducer: pure flow logic for Upload, Ask, and Load Logs

use crate::{
    action::PageAction,
    effect::Effect,
    environment::PageEnvironment,
    state::{FlowPhase, PageState, Tone},
};
use smallvec::{SmallVec, smallvec};

/// Status text shown when the upload form is submitted with no file
const SELECT_FILE_TEXT: &str = "Please select a file first.";

/// Rendered when the logs request fails in transit
const LOGS_FAILURE_TEXT: &str = "Failed to load logs.";

/// Fallback reason for an upload failure the service did not explain
const UNKNOWN_UPLOAD_ERROR: &str = "Unknown upload error";

/// Fallback reason for an ask failure the service did not explain
const UNKNOWN_ASK_ERROR: &str = "Failed to get an answer";

/// Page reducer
///
/// Handles the three flows:
/// 1. Upload: validate selection, optimistic status, one multipart POST
/// 2. Ask: trim query, loader on, one JSON POST, unconditional cleanup
/// 3. Load Logs: one GET, replace snapshot, follow the tail
///
/// Each flow is `Idle → Pending → {Succeeded, Failed}`, ready again for the
/// next trigger. Every failure is converted to rendered text here; nothing
/// propagates further.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageReducer;

impl PageReducer {
    /// Create a new page reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Reduce an action into state changes and effects
    #[allow(clippy::too_many_lines)] // One match arm per flow step
    pub fn reduce<E: PageEnvironment>(
        &self,
        state: &mut PageState,
        action: PageAction,
        env: &E,
    ) -> SmallVec<[Effect<PageAction>; 2]> {
        match action {
            PageAction::UploadSubmitted { file: None } => {
                // Validation error: no request leaves the page
                state.upload.text = SELECT_FILE_TEXT.to_string();
                state.upload.tone = Tone::Error;
                smallvec![Effect::None]
            },

            PageAction::UploadSubmitted { file: Some(file) } => {
                state.phases.upload = FlowPhase::Pending;

                // Optimistic status before the call resolves
                state.upload.text = format!("Uploading \"{}\"...", file.file_name);
                state.upload.tone = Tone::Muted;

                smallvec![env.upload_pdf(file)]
            },

            PageAction::UploadFinished { outcome } => {
                match outcome {
                    Ok(receipt) => {
                        state.phases.upload = FlowPhase::Succeeded;
                        state.upload.text = receipt.message;
                        state.upload.tone = Tone::Success;
                    },
                    Err(error) => {
                        state.phases.upload = FlowPhase::Failed;
                        state.upload.text =
                            format!("Upload failed: {}", error.reason(UNKNOWN_UPLOAD_ERROR));
                        state.upload.tone = Tone::Error;
                    },
                }

                smallvec![Effect::None]
            },

            PageAction::AskSubmitted { query } => {
                let query = query.trim();
                if query.is_empty() {
                    // Silently ignored: no request, no render
                    return smallvec![Effect::None];
                }

                state.phases.ask = FlowPhase::Pending;
                state.ask.loader_visible = true;
                state.ask.result_visible = false;

                smallvec![env.ask(query.to_string())]
            },

            PageAction::AskFinished { outcome } => {
                match outcome {
                    Ok(answer) => {
                        state.phases.ask = FlowPhase::Succeeded;
                        state.ask.rationale = Some(format!(
                            "Agent Used: {} | Rationale: {}",
                            answer.agent_used, answer.rationale
                        ));
                        state.ask.answer = answer.answer;
                    },
                    Err(error) => {
                        state.phases.ask = FlowPhase::Failed;
                        state.ask.rationale = None;
                        state.ask.answer =
                            format!("An error occurred: {}", error.reason(UNKNOWN_ASK_ERROR));
                    },
                }

                // Cleanup runs on every outcome
                state.ask.loader_visible = false;
                state.ask.result_visible = true;

                smallvec![Effect::None]
            },

            PageAction::LogsRequested => {
                // No loading indicator for this flow
                state.phases.logs = FlowPhase::Pending;
                smallvec![env.fetch_logs()]
            },

            PageAction::LogsFinished { outcome } => {
                match outcome {
                    Ok(text) => {
                        state.phases.logs = FlowPhase::Succeeded;
                        state.logs.text = text;
                        state.logs.visible = true;
                        state.logs.follow_tail = true;
                    },
                    Err(_) => {
                        state.phases.logs = FlowPhase::Failed;
                        state.logs.text = LOGS_FAILURE_TEXT.to_string();
                        state.logs.follow_tail = false;
                    },
                }

                smallvec![Effect::None]
            },
        }
    }
}
