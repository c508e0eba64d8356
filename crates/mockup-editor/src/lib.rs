//! Multi-view canvas state engine for garment mockups.
//!
//! - [`history`]: bounded per-view snapshot stacks
//! - [`state`]: the view registry (element lists, selection, active view)
//! - [`action`] + [`dispatch`]: the pure transition function
//! - [`session`]: the named-operation facade hosts call into

pub mod action;
pub mod dispatch;
pub mod history;
pub mod session;
pub mod state;

pub use action::Action;
pub use dispatch::{Ignored, Outcome, Transition, dispatch};
pub use history::{History, Snapshot};
pub use session::CanvasSession;
pub use state::{CanvasState, Interaction};
