//! Work/break session timing
//!
//! Each subtask walks `WorkPending -> Working -> BreakPending -> OnBreak`,
//! and the list ends in `Done` with one final announcement. Time and the
//! announcement sink are injected so runs can be driven without waiting.

mod announce;
mod clock;
mod runner;
mod types;

pub use announce::create_announcer;
pub use clock::TokioClock;
pub use runner::SessionRunner;
pub use types::SessionOutcome;
