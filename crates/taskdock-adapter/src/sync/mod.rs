/*
[INPUT]:  Task operations from the presentation layer
[OUTPUT]: Synchronized local/remote task state
[POS]:    Sync layer - module wiring
[UPDATE]: When sync components change
*/

pub mod synchronizer;

pub use synchronizer::{ClearOutcome, TaskSynchronizer};
