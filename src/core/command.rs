//! Command pattern trait
//!
//! Every editor action is a named `Command` object in the registry. Key
//! chords, menu items, and toolbar buttons all resolve to command names,
//! so there is exactly one mapping table per input surface and one handler
//! per action. Handlers mutate the application state and describe their
//! side effects through the returned `DispatchResult` rather than touching
//! the terminal themselves, which keeps them testable without a UI.

use crate::core::app::App;
use crate::core::dispatcher::DispatchResult;

/// An editor action invocable by name
pub trait Command: Send + Sync + CloneCommand {
    /// Run the action against the application state
    fn execute(&self, app: &mut App) -> DispatchResult;
}

/// Object-safe cloning for boxed commands. Blanket-implemented below, so
/// handlers only derive `Clone`.
pub trait CloneCommand {
    fn clone_box(&self) -> Box<dyn Command>;
}

impl<T> CloneCommand for T
where
    T: 'static + Command + Clone,
{
    fn clone_box(&self) -> Box<dyn Command> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Command> {
    fn clone(&self) -> Box<dyn Command> {
        self.as_ref().clone_box()
    }
}
