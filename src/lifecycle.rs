//! How page lifecycle events drive the frame loop.
//!
//! Kept free of DOM types so the decisions can be tested on the host.

/// Page-level lifecycle notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageEvent {
    Hidden,
    Visible,
    /// `persisted` is set when the page is entering the back/forward cache.
    PageHide { persisted: bool },
    /// `persisted` is set when the page is restored from the back/forward cache.
    PageShow { persisted: bool },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopAction {
    /// Stop the stage and cancel the pending frame.
    Stop,
    /// Restart the stage and schedule a frame.
    Resume,
    /// Stop, then release listeners and GPU resources.
    Shutdown,
    Ignore,
}

pub fn loop_action(event: PageEvent, user_paused: bool) -> LoopAction {
    match event {
        PageEvent::Hidden | PageEvent::PageHide { persisted: true } => LoopAction::Stop,
        PageEvent::PageHide { persisted: false } => LoopAction::Shutdown,
        PageEvent::Visible | PageEvent::PageShow { persisted: true } if !user_paused => {
            LoopAction::Resume
        }
        // a fresh load starts the loop from `init`
        PageEvent::Visible | PageEvent::PageShow { .. } => LoopAction::Ignore,
    }
}
