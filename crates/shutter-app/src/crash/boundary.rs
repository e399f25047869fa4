//! The error boundary wrapping the application view
//!
//! While mounted it holds one error listener and one rejection listener on
//! the global registry; both are released when the boundary is dropped.

use std::panic::{self, AssertUnwindSafe};

use tokio::sync::mpsc;

use super::events::{GlobalEvent, GlobalEventKind, GlobalEvents, Subscription};
use super::hooks::{PanicReport, RenderScope};
use super::state::{ErrorDescriptor, StackDescriptor};
use crate::message::Message;

/// A panic caught while rendering the boundary's subtree
#[derive(Debug, Clone)]
pub struct CaughtRender {
    pub error: ErrorDescriptor,
    pub stack: StackDescriptor,
}

pub struct ErrorBoundary {
    _on_error: Subscription,
    _on_rejection: Subscription,
}

impl std::fmt::Debug for ErrorBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorBoundary").finish_non_exhaustive()
    }
}

impl ErrorBoundary {
    /// Subscribe to global failures, forwarding them into the message loop
    pub fn mount(events: &GlobalEvents, msg_tx: mpsc::UnboundedSender<Message>) -> Self {
        let tx = msg_tx.clone();
        let on_error = events.add_listener(GlobalEventKind::Error, move |event| {
            if let GlobalEvent::Error(error) = event {
                let _ = tx.send(Message::GlobalError(error.clone()));
            }
        });

        let tx = msg_tx;
        let on_rejection = events.add_listener(GlobalEventKind::UnhandledRejection, move |event| {
            if let GlobalEvent::UnhandledRejection(reason) = event {
                let _ = tx.send(Message::UnhandledRejection(reason.clone()));
            }
        });

        tracing::debug!("Error boundary mounted");
        Self {
            _on_error: on_error,
            _on_rejection: on_rejection,
        }
    }

    /// Run `render`, converting a panic into a [`CaughtRender`]
    ///
    /// `component` names the subtree in the synthesised stack.
    pub fn catch_render<R>(
        &self,
        component: &str,
        render: impl FnOnce() -> R,
    ) -> Result<R, CaughtRender> {
        let scope = RenderScope::enter();
        let outcome = panic::catch_unwind(AssertUnwindSafe(render));
        let parked = scope.take_caught();
        drop(scope);

        outcome.map_err(|payload| {
            let report = parked.unwrap_or_else(|| PanicReport::from_payload(payload.as_ref()));
            CaughtRender {
                error: report.descriptor(),
                stack: report.component_stack(component),
            }
        })
    }
}

impl Drop for ErrorBoundary {
    fn drop(&mut self) {
        tracing::debug!("Error boundary unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crash::hooks::install_panic_hook;
    use serial_test::serial;

    #[test]
    fn test_mount_registers_one_listener_per_kind() {
        let events = GlobalEvents::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let boundary = ErrorBoundary::mount(&events, tx);

        assert_eq!(events.listener_count(GlobalEventKind::Error), 1);
        assert_eq!(events.listener_count(GlobalEventKind::UnhandledRejection), 1);

        drop(boundary);
        assert_eq!(events.listener_count(GlobalEventKind::Error), 0);
        assert_eq!(events.listener_count(GlobalEventKind::UnhandledRejection), 0);
    }

    #[test]
    fn test_events_become_messages() {
        let events = GlobalEvents::new();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _boundary = ErrorBoundary::mount(&events, tx);

        events.dispatch(GlobalEvent::Error(ErrorDescriptor::new("Panic", "a")));
        events.dispatch(GlobalEvent::UnhandledRejection(ErrorDescriptor::new(
            "Error", "b",
        )));

        assert!(matches!(rx.try_recv(), Ok(Message::GlobalError(e)) if e.message == "a"));
        assert!(matches!(rx.try_recv(), Ok(Message::UnhandledRejection(e)) if e.message == "b"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_remount_delivers_once() {
        let events = GlobalEvents::new();
        let (tx, mut rx) = mpsc::unbounded_channel();

        let first = ErrorBoundary::mount(&events, tx.clone());
        drop(first);
        let _second = ErrorBoundary::mount(&events, tx);

        events.dispatch(GlobalEvent::Error(ErrorDescriptor::new("Panic", "again")));

        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_catch_render_passes_through_value() {
        let events = GlobalEvents::new();
        let (tx, _rx) = mpsc::unbounded_channel();
        let boundary = ErrorBoundary::mount(&events, tx);

        assert_eq!(boundary.catch_render("App", || 7).unwrap(), 7);
    }

    #[test]
    #[serial]
    fn test_catch_render_captures_panic_without_global_event() {
        install_panic_hook();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let boundary = ErrorBoundary::mount(GlobalEvents::global(), tx);

        let caught = boundary
            .catch_render("App", || -> u8 { panic!("widget exploded") })
            .unwrap_err();

        assert_eq!(caught.error.to_string(), "Panic: widget exploded");
        assert!(caught.stack.component_stack.starts_with("\n    at App ("));
        assert!(caught.stack.component_stack.contains("boundary.rs"));
        // Handled by the boundary, so no global error was raised
        assert!(rx.try_recv().is_err());
    }

    #[test]
    #[serial]
    fn test_panic_on_other_thread_is_global_error() {
        install_panic_hook();
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _boundary = ErrorBoundary::mount(GlobalEvents::global(), tx);

        let handle = std::thread::spawn(|| panic!("worker died"));
        assert!(handle.join().is_err());

        match rx.try_recv() {
            Ok(Message::GlobalError(e)) => assert_eq!(e.message, "worker died"),
            other => panic!("expected GlobalError, got {:?}", other),
        }
    }
}
