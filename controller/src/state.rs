//! Page state: the named regions the controller writes and the per-flow
//! request lifecycle

/// Outcome polarity applied to status text
///
/// The view decides how polarity looks (a colour on the page, a prefix on a
/// terminal); the controller only records it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tone {
    /// In-progress or neutral text
    #[default]
    Muted,
    /// Successful outcome
    Success,
    /// Failed outcome
    Error,
}

/// The upload status label
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UploadRegion {
    /// Status text
    pub text: String,
    /// Outcome polarity of the text
    pub tone: Tone,
}

/// The question result area: loading indicator, result container, rationale
/// line, and answer text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AskRegion {
    /// Whether the loading indicator is shown
    pub loader_visible: bool,
    /// Whether the result container is shown
    pub result_visible: bool,
    /// Agent attribution line; `None` means the line is hidden
    pub rationale: Option<String>,
    /// Raw answer text (or the rendered error)
    pub answer: String,
}

/// The logs region
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogsRegion {
    /// Log snapshot text; each fetch replaces the previous snapshot
    pub text: String,
    /// Whether the region is shown
    pub visible: bool,
    /// Whether the view should scroll to the bottom edge on this render
    pub follow_tail: bool,
}

/// Request lifecycle of a single flow
///
/// Any non-`Pending` phase is ready for the next trigger. A trigger while
/// `Pending` is not guarded against: overlapping requests each complete
/// independently and the last write wins.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlowPhase {
    /// No request has run, or the last one has been rendered
    #[default]
    Idle,
    /// A request is in flight
    Pending,
    /// The last request completed successfully
    Succeeded,
    /// The last request failed
    Failed,
}

impl FlowPhase {
    /// Whether a request is currently in flight
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Phases of the three flows
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlowPhases {
    /// Upload flow
    pub upload: FlowPhase,
    /// Ask flow
    pub ask: FlowPhase,
    /// Load-logs flow
    pub logs: FlowPhase,
}

/// Complete page state
///
/// Regions are what the view renders; phases track request lifecycles and
/// are not rendered directly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// Upload status label
    pub upload: UploadRegion,
    /// Question result area
    pub ask: AskRegion,
    /// Logs region
    pub logs: LogsRegion,
    /// Per-flow request lifecycles
    pub phases: FlowPhases,
}
