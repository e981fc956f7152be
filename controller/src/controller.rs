//! The interaction controller: binds triggers to the reducer, executes
//! effects, and reflects state changes through the view

use crate::{
    action::PageAction, effect::Effect, environment::PageEnvironment, reducer::PageReducer,
    state::PageState, view::PageView,
};
use docqa_client::PdfUpload;
use std::collections::VecDeque;

/// Interaction controller for the document QA page
///
/// Owns the page state and mediates the three flows. The environment and the
/// view are injected at construction time; the controller performs no I/O
/// and touches no document tree itself.
///
/// Handlers run to completion before returning: each trigger is reduced, the
/// changed regions are rendered, and the flow's single network effect is
/// awaited and its completion reduced and rendered in turn. Failures never
/// escape a handler; they are already rendered outcomes by the time the
/// reducer is done with them.
pub struct InteractionController<E, V> {
    state: PageState,
    reducer: PageReducer,
    environment: E,
    view: V,
}

impl<E, V> InteractionController<E, V>
where
    E: PageEnvironment,
    V: PageView,
{
    /// Create a controller with injected environment and view
    #[must_use]
    pub fn new(environment: E, view: V) -> Self {
        Self {
            state: PageState::default(),
            reducer: PageReducer::new(),
            environment,
            view,
        }
    }

    /// Current page state
    #[must_use]
    pub const fn state(&self) -> &PageState {
        &self.state
    }

    /// The injected view
    #[must_use]
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Upload flow trigger: the form was submitted with `file` selected
    pub async fn submit_upload(&mut self, file: Option<PdfUpload>) {
        self.send(PageAction::UploadSubmitted { file }).await;
    }

    /// Ask flow trigger: the form was submitted with the raw query text
    pub async fn submit_question(&mut self, query: &str) {
        self.send(PageAction::AskSubmitted {
            query: query.to_string(),
        })
        .await;
    }

    /// Load-logs flow trigger: the button was clicked
    pub async fn load_logs(&mut self) {
        self.send(PageAction::LogsRequested).await;
    }

    /// Process an action to quiescence
    ///
    /// Reduces the action, renders whichever regions changed, then executes
    /// the returned effects in order and feeds their actions back in. The
    /// await on an effect is the flow's single suspension point; no timeout
    /// is applied, so an unresponsive endpoint leaves the flow pending.
    pub async fn send(&mut self, action: PageAction) {
        let mut queue = VecDeque::new();
        queue.push_back(action);

        while let Some(action) = queue.pop_front() {
            tracing::debug!(?action, "processing action");

            let before = self.state.clone();
            let effects = self.reducer.reduce(&mut self.state, action, &self.environment);
            self.render_changed(&before);

            for effect in effects {
                match effect {
                    Effect::None => {},
                    Effect::Future(future) => {
                        if let Some(next) = future.await {
                            queue.push_back(next);
                        }
                    },
                }
            }
        }
    }

    /// Render only the regions the last action changed
    fn render_changed(&mut self, before: &PageState) {
        if self.state.upload != before.upload {
            self.view.render_status(&self.state.upload);
        }
        if self.state.ask != before.ask {
            self.view.render_result(&self.state.ask);
        }
        if self.state.logs != before.logs {
            self.view.render_logs(&self.state.logs);
        }
    }
}
