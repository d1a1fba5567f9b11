/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public taskdock adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod sync;
pub mod types;

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    Result,
    TodoClient,
    TodoError,
    DEFAULT_BASE_URL,
};

// Re-export commonly used types from sync
pub use sync::{
    ClearOutcome,
    TaskSynchronizer,
};

// Re-export all types
pub use types::*;
