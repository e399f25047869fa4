//! Panic hook feeding the crash reporter
//!
//! Panics raised inside a render boundary are parked in a thread-local slot
//! for the boundary to pick up. Every other panic, on any thread, becomes a
//! [`GlobalEvent::Error`]. The default hook is not chained: it would print
//! over the alternate screen.

use std::any::Any;
use std::backtrace::{Backtrace, BacktraceStatus};
use std::cell::{Cell, RefCell};
use std::panic::PanicHookInfo;
use std::sync::Once;

use super::events::{GlobalEvent, GlobalEvents};
use super::state::{ErrorDescriptor, StackDescriptor};

thread_local! {
    static RENDER_DEPTH: Cell<u32> = const { Cell::new(0) };
    static CAUGHT: RefCell<Option<PanicReport>> = const { RefCell::new(None) };
}

static INSTALL: Once = Once::new();

/// What the hook learned about a panic
#[derive(Debug, Clone)]
pub struct PanicReport {
    pub message: String,
    /// `file:line:column`, when known
    pub location: Option<String>,
    pub backtrace: Option<String>,
}

impl PanicReport {
    fn from_hook(info: &PanicHookInfo<'_>) -> Self {
        let backtrace = Backtrace::capture();
        Self {
            message: payload_message(info.payload()),
            location: info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column())),
            backtrace: (backtrace.status() == BacktraceStatus::Captured)
                .then(|| backtrace.to_string()),
        }
    }

    /// Fallback when no hook ran (e.g. the hook is not installed)
    pub fn from_payload(payload: &(dyn Any + Send)) -> Self {
        Self {
            message: payload_message(payload),
            location: None,
            backtrace: None,
        }
    }

    pub fn descriptor(&self) -> ErrorDescriptor {
        ErrorDescriptor::new("Panic", self.message.clone())
    }

    /// Best-effort component stack: the boundary's child, then the panic site
    pub fn component_stack(&self, component: &str) -> StackDescriptor {
        let mut stack = match &self.location {
            Some(location) => format!("\n    at {component} ({location})"),
            None => format!("\n    at {component}"),
        };
        if let Some(backtrace) = &self.backtrace {
            stack.push('\n');
            stack.push_str(backtrace.trim_end());
        }
        StackDescriptor::new(stack)
    }
}

fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Install the process-wide hook (idempotent)
pub fn install_panic_hook() {
    INSTALL.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let report = PanicReport::from_hook(info);
            if in_render_scope() {
                CAUGHT.with(|slot| *slot.borrow_mut() = Some(report));
                return;
            }

            let thread = std::thread::current();
            tracing::error!(
                "Panic on thread '{}': {} at {}",
                thread.name().unwrap_or("<unnamed>"),
                report.message,
                report.location.as_deref().unwrap_or("<unknown>")
            );
            GlobalEvents::global().dispatch(GlobalEvent::Error(report.descriptor()));
        }));
    });
}

pub fn in_render_scope() -> bool {
    RENDER_DEPTH.with(|d| d.get() > 0)
}

/// Marks the current thread as rendering inside a boundary
pub(crate) struct RenderScope(());

impl RenderScope {
    pub(crate) fn enter() -> Self {
        RENDER_DEPTH.with(|d| d.set(d.get() + 1));
        Self(())
    }

    /// Take the report the hook parked for this thread, if any
    pub(crate) fn take_caught(&self) -> Option<PanicReport> {
        CAUGHT.with(|slot| slot.borrow_mut().take())
    }
}

impl Drop for RenderScope {
    fn drop(&mut self) {
        RENDER_DEPTH.with(|d| d.set(d.get().saturating_sub(1)));
    }
}
