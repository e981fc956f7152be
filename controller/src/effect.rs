//! Side effect descriptions returned by the reducer
//!
//! Effects are NOT executed where they are created. The reducer returns
//! descriptions and the controller driver executes them, feeding any
//! resulting action back into the reducer.

use std::future::Future;
use std::pin::Pin;

/// Effect type - describes a side effect to be executed
///
/// # Type Parameters
///
/// - `Action`: The action type that effects can produce (feedback loop)
pub enum Effect<Action> {
    /// No-op effect
    None,

    /// Arbitrary async computation
    ///
    /// Returns `Option<Action>` - if Some, the action is fed back into the
    /// reducer
    Future(Pin<Box<dyn Future<Output = Option<Action>> + Send>>),
}

// Manual Debug implementation since Future doesn't implement Debug
impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "Effect::None"),
            Effect::Future(_) => write!(f, "Effect::Future(<future>)"),
        }
    }
}
