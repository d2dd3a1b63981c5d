//! Activities and their per-session state.

pub mod session;
pub mod types;

pub use session::{ActivitySession, SessionState, SessionTick};
pub use types::{
    resolve_action, ActionInput, ActionResolution, ActivityKind, BlockKind, DropKind, Language,
    StackResult,
};
