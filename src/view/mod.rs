//! Proposal view synchronization.
//!
//! The view holds a read-only snapshot of the contract's proposal list,
//! replaced wholesale on every refresh, plus the draft input and the
//! in-flight write phase. `Synchronizer` drives it: refresh the snapshot,
//! submit writes through a connected session, and refresh exactly once after
//! each settled write.

pub mod render;
pub mod state;
pub mod sync;

pub use render::render_board;
pub use state::{ViewState, WriteKind, WritePhase};
pub use sync::{SyncError, SyncResult, Synchronizer};
