//! Integration tests for the interaction controller
//!
//! Flows are driven end to end through a recording view, with outcomes
//! scripted at the environment seam; the last tests go through the real
//! service client against a mock HTTP server.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use docqa_client::{Answer, ApiError, DocQaClient, PdfUpload, UploadReceipt};
use docqa_controller::state::{AskRegion, LogsRegion, UploadRegion};
use docqa_controller::{
    Effect, FlowPhase, InteractionController, PageAction, PageEnvironment, PageView,
    ServiceEnvironment, Tone,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// View that records every render call
#[derive(Default)]
struct RecordingView {
    status: Vec<UploadRegion>,
    results: Vec<AskRegion>,
    logs: Vec<LogsRegion>,
}

impl PageView for RecordingView {
    fn render_status(&mut self, status: &UploadRegion) {
        self.status.push(status.clone());
    }

    fn render_result(&mut self, result: &AskRegion) {
        self.results.push(result.clone());
    }

    fn render_logs(&mut self, logs: &LogsRegion) {
        self.logs.push(logs.clone());
    }
}

/// Environment with canned outcomes; panics on a request no test scripted
#[derive(Clone, Default)]
struct ScriptedEnvironment {
    upload_outcome: Option<Result<UploadReceipt, ApiError>>,
    ask_outcome: Option<Result<Answer, ApiError>>,
    logs_outcome: Option<Result<String, ApiError>>,
}

impl PageEnvironment for ScriptedEnvironment {
    fn upload_pdf(&self, _upload: PdfUpload) -> Effect<PageAction> {
        let outcome = self
            .upload_outcome
            .clone()
            .expect("no upload request was scripted");
        Effect::Future(Box::pin(async move {
            Some(PageAction::UploadFinished { outcome })
        }))
    }

    fn ask(&self, _query: String) -> Effect<PageAction> {
        let outcome = self
            .ask_outcome
            .clone()
            .expect("no ask request was scripted");
        Effect::Future(Box::pin(async move {
            Some(PageAction::AskFinished { outcome })
        }))
    }

    fn fetch_logs(&self) -> Effect<PageAction> {
        let outcome = self
            .logs_outcome
            .clone()
            .expect("no logs request was scripted");
        Effect::Future(Box::pin(async move {
            Some(PageAction::LogsFinished { outcome })
        }))
    }
}

fn controller_with(
    env: ScriptedEnvironment,
) -> InteractionController<ScriptedEnvironment, RecordingView> {
    InteractionController::new(env, RecordingView::default())
}

#[tokio::test]
async fn test_upload_without_file_renders_error_and_stays_offline() {
    // Unscripted environment: any request would panic
    let mut controller = controller_with(ScriptedEnvironment::default());

    controller.submit_upload(None).await;

    let status = &controller.view().status;
    assert_eq!(status.len(), 1);
    assert_eq!(status[0].text, "Please select a file first.");
    assert_eq!(status[0].tone, Tone::Error);
}

#[tokio::test]
async fn test_upload_renders_optimistic_then_final_status() {
    let mut controller = controller_with(ScriptedEnvironment {
        upload_outcome: Some(Ok(UploadReceipt {
            message: "OK".to_string(),
        })),
        ..ScriptedEnvironment::default()
    });

    controller
        .submit_upload(Some(PdfUpload::new("paper.pdf", vec![1])))
        .await;

    let status = &controller.view().status;
    assert_eq!(status.len(), 2);
    assert_eq!(status[0].text, "Uploading \"paper.pdf\"...");
    assert_eq!(status[0].tone, Tone::Muted);
    assert_eq!(status[1].text, "OK");
    assert_eq!(status[1].tone, Tone::Success);
    assert_eq!(controller.state().phases.upload, FlowPhase::Succeeded);
}

#[tokio::test]
async fn test_upload_failure_renders_reason() {
    let mut controller = controller_with(ScriptedEnvironment {
        upload_outcome: Some(Err(ApiError::Service {
            status: 422,
            message: Some("bad pdf".to_string()),
        })),
        ..ScriptedEnvironment::default()
    });

    controller
        .submit_upload(Some(PdfUpload::new("paper.pdf", vec![1])))
        .await;

    let status = &controller.view().status;
    assert_eq!(status.last().map(|s| s.text.as_str()), Some("Upload failed: bad pdf"));
    assert_eq!(status.last().map(|s| s.tone), Some(Tone::Error));
    assert_eq!(controller.state().phases.upload, FlowPhase::Failed);
}

#[tokio::test]
async fn test_blank_query_produces_no_render() {
    let mut controller = controller_with(ScriptedEnvironment::default());

    controller.submit_question("   ").await;

    assert!(controller.view().status.is_empty());
    assert!(controller.view().results.is_empty());
    assert!(controller.view().logs.is_empty());
}

#[tokio::test]
async fn test_ask_loader_visible_while_pending_hidden_after() {
    let mut controller = controller_with(ScriptedEnvironment {
        ask_outcome: Some(Ok(Answer {
            answer: "42".to_string(),
            rationale: "r".to_string(),
            agent_used: "A1".to_string(),
        })),
        ..ScriptedEnvironment::default()
    });

    controller.submit_question("What is X?").await;

    let results = &controller.view().results;
    assert_eq!(results.len(), 2);
    // First render happens before the response resolves
    assert!(results[0].loader_visible);
    assert!(!results[0].result_visible);
    // Final render shows the outcome with the loader gone
    assert!(!results[1].loader_visible);
    assert!(results[1].result_visible);
    assert_eq!(results[1].answer, "42");
    assert_eq!(
        results[1].rationale.as_deref(),
        Some("Agent Used: A1 | Rationale: r")
    );
}

#[tokio::test]
async fn test_ask_failure_cleanup_is_unconditional() {
    let mut controller = controller_with(ScriptedEnvironment {
        ask_outcome: Some(Err(ApiError::Request("timeout".to_string()))),
        ..ScriptedEnvironment::default()
    });

    controller.submit_question("What is X?").await;

    let results = &controller.view().results;
    let last = results.last().unwrap();
    assert_eq!(last.answer, "An error occurred: timeout");
    assert_eq!(last.rationale, None);
    assert!(!last.loader_visible);
    assert!(last.result_visible);
}

#[tokio::test]
async fn test_logs_success_follows_tail() {
    let mut controller = controller_with(ScriptedEnvironment {
        logs_outcome: Some(Ok("line1\nline2".to_string())),
        ..ScriptedEnvironment::default()
    });

    controller.load_logs().await;

    let logs = &controller.view().logs;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].text, "line1\nline2");
    assert!(logs[0].visible);
    assert!(logs[0].follow_tail);
}

#[tokio::test]
async fn test_logs_failure_renders_fixed_text() {
    let mut controller = controller_with(ScriptedEnvironment {
        logs_outcome: Some(Err(ApiError::Request("connection refused".to_string()))),
        ..ScriptedEnvironment::default()
    });

    controller.load_logs().await;

    let logs = &controller.view().logs;
    assert_eq!(logs.last().map(|l| l.text.as_str()), Some("Failed to load logs."));
    assert_eq!(logs.last().map(|l| l.follow_tail), Some(false));
}

#[tokio::test]
async fn test_failed_flow_leaves_page_usable() {
    let mut controller = controller_with(ScriptedEnvironment {
        ask_outcome: Some(Err(ApiError::Request("timeout".to_string()))),
        logs_outcome: Some(Ok("trace".to_string())),
        ..ScriptedEnvironment::default()
    });

    controller.submit_question("What is X?").await;
    controller.load_logs().await;

    // The ask failure did not poison the logs flow
    assert_eq!(controller.state().phases.ask, FlowPhase::Failed);
    assert_eq!(controller.state().phases.logs, FlowPhase::Succeeded);
    assert_eq!(controller.view().logs.last().map(|l| l.text.as_str()), Some("trace"));
}

#[tokio::test]
async fn test_end_to_end_ask_through_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/ask"))
        .and(body_json(json!({"query": "What is X?"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "answer": "42",
            "rationale": "r",
            "agentUsed": "A1"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let env = ServiceEnvironment::new(DocQaClient::new(server.uri()));
    let mut controller = InteractionController::new(env, RecordingView::default());

    // Leading/trailing whitespace is trimmed before the request
    controller.submit_question("  What is X?  ").await;

    let last = controller.view().results.last().unwrap();
    assert_eq!(last.answer, "42");
    assert_eq!(controller.state().phases.ask, FlowPhase::Succeeded);
}

#[tokio::test]
async fn test_end_to_end_upload_through_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/uploadPdf"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"message": "File 'paper.pdf' processed successfully."})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let env = ServiceEnvironment::new(DocQaClient::new(server.uri()));
    let mut controller = InteractionController::new(env, RecordingView::default());

    controller
        .submit_upload(Some(PdfUpload::new("paper.pdf", b"%PDF-1.4".to_vec())))
        .await;

    let status = &controller.view().status;
    assert_eq!(
        status.last().map(|s| s.text.as_str()),
        Some("File 'paper.pdf' processed successfully.")
    );
    assert_eq!(status.last().map(|s| s.tone), Some(Tone::Success));
}
