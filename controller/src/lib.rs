//! # Document QA Interaction Controller
//!
//! Wires the three user-initiated flows of the document QA page (Upload,
//! Ask, and Load Logs) to the service client, and reflects outcomes in the
//! page's regions through an injected view.
//!
//! ## Architecture
//!
//! - **State**: [`PageState`] (the named regions plus per-flow lifecycle)
//! - **Actions**: [`PageAction`] (user triggers and request completions)
//! - **Reducer**: [`PageReducer`], a pure function
//!   `(state, action, env) → effects`
//! - **Effects**: [`Effect`] (side effect descriptions, executed by the
//!   controller driver)
//! - **Environment**: [`PageEnvironment`] (injected network capabilities)
//! - **View**: [`PageView`] (injected rendering capabilities)
//!
//! ## Example
//!
//! ```no_run
//! use docqa_controller::{InteractionController, PageView, ServiceEnvironment};
//! use docqa_controller::state::{AskRegion, LogsRegion, UploadRegion};
//!
//! struct PrintView;
//!
//! impl PageView for PrintView {
//!     fn render_status(&mut self, status: &UploadRegion) {
//!         println!("[status] {}", status.text);
//!     }
//!     fn render_result(&mut self, result: &AskRegion) {
//!         println!("[answer] {}", result.answer);
//!     }
//!     fn render_logs(&mut self, logs: &LogsRegion) {
//!         println!("[logs] {}", logs.text);
//!     }
//! }
//!
//! # async fn example() {
//! let env = ServiceEnvironment::from_env();
//! let mut controller = InteractionController::new(env, PrintView);
//! controller.submit_question("What is the methodology?").await;
//! # }
//! ```

pub mod action;
pub mod controller;
pub mod effect;
pub mod environment;
pub mod reducer;
pub mod state;
pub mod view;

// Re-export main types for convenience
pub use action::PageAction;
pub use controller::InteractionController;
pub use effect::Effect;
pub use environment::{PageEnvironment, ServiceEnvironment};
pub use reducer::PageReducer;
pub use state::{FlowPhase, PageState, Tone};
pub use view::PageView;
