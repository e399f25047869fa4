//! Crash reporting: the boundary, its state machine and the reports it builds
//!
//! - `state`: `CrashReporter` and the error/stack descriptors
//! - `report`: Markdown report, user agent and issue URL
//! - `events`: process-wide listener registry for escaped failures
//! - `hooks`: panic hook and render scope tracking
//! - `boundary`: `ErrorBoundary`, which ties the above to the message loop

pub mod boundary;
pub mod events;
pub mod hooks;
pub mod report;
pub mod state;

pub use boundary::{CaughtRender, ErrorBoundary};
pub use events::{GlobalEvent, GlobalEventKind, GlobalEvents, Subscription};
pub use hooks::{install_panic_hook, PanicReport};
pub use report::{encode_uri_component, user_agent};
pub use state::{
    CrashAction, CrashReporter, ErrorDescriptor, StackDescriptor, GLOBAL_ERROR_STACK,
    UNHANDLED_REJECTION_STACK,
};
