//! View abstraction over the page's named regions
//!
//! The controller never touches a document tree; it renders through this
//! trait, injected at construction time. Tests substitute a recording fake.

use crate::state::{AskRegion, LogsRegion, UploadRegion};

/// Rendering capabilities of the page, one per region group
///
/// The controller calls a method only when that region's state changed under
/// an action, so implementations may apply every call unconditionally.
pub trait PageView {
    /// Render the upload status label
    fn render_status(&mut self, status: &UploadRegion);

    /// Render the question result area (loader, rationale line, answer)
    fn render_result(&mut self, result: &AskRegion);

    /// Render the logs region
    ///
    /// When `logs.follow_tail` is set the view scrolls the region to its
    /// bottom edge, so the most recent content is in view.
    fn render_logs(&mut self, logs: &LogsRegion);
}
