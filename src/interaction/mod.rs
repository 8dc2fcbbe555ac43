//! Gesture translation.
//!
//! Thin layer between a presentation toolkit and `BoardState`:
//! - `BoardEvent`: click, drag-start and drop gestures
//! - `DragPayload`: what travels from a drag start to its drop
//! - `dispatch`: routes an event to board operations
//! - `EventOutcome`: what happened, for the caller to re-render

mod dispatch;
mod event;

pub use dispatch::dispatch;
pub use event::{BoardEvent, DragPayload, DragSource, EventOutcome};
