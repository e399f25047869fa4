//! Process-wide failure events and their listeners
//!
//! Two kinds of event exist: [`GlobalEventKind::Error`] (a panic that escaped
//! every render boundary, on any thread) and
//! [`GlobalEventKind::UnhandledRejection`] (a supervised background task that
//! finished with an error nobody observed). Listeners are registered with
//! [`GlobalEvents::add_listener`] and stay registered exactly as long as the
//! returned [`Subscription`] lives.

use std::sync::{Arc, LazyLock, Mutex, PoisonError, Weak};

use super::state::ErrorDescriptor;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalEventKind {
    Error,
    UnhandledRejection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GlobalEvent {
    Error(ErrorDescriptor),
    UnhandledRejection(ErrorDescriptor),
}

impl GlobalEvent {
    pub fn kind(&self) -> GlobalEventKind {
        match self {
            GlobalEvent::Error(_) => GlobalEventKind::Error,
            GlobalEvent::UnhandledRejection(_) => GlobalEventKind::UnhandledRejection,
        }
    }
}

type Listener = Arc<dyn Fn(&GlobalEvent) + Send + Sync>;

#[derive(Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, GlobalEventKind, Listener)>,
}

static GLOBAL: LazyLock<GlobalEvents> = LazyLock::new(GlobalEvents::new);

/// Listener registry, cheap to clone
#[derive(Clone, Default)]
pub struct GlobalEvents {
    registry: Arc<Mutex<Registry>>,
}

impl GlobalEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry the panic hook and supervised tasks report to
    pub fn global() -> &'static GlobalEvents {
        &GLOBAL
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[must_use = "dropping the subscription removes the listener immediately"]
    pub fn add_listener(
        &self,
        kind: GlobalEventKind,
        listener: impl Fn(&GlobalEvent) + Send + Sync + 'static,
    ) -> Subscription {
        let mut registry = self.lock();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, kind, Arc::new(listener)));
        tracing::debug!("Added {:?} listener #{}", kind, id);
        Subscription {
            registry: Arc::downgrade(&self.registry),
            id,
        }
    }

    /// Deliver an event to every listener of its kind.
    ///
    /// Returns how many listeners were invoked.
    pub fn dispatch(&self, event: GlobalEvent) -> usize {
        let kind = event.kind();
        let targets: Vec<Listener> = self
            .lock()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .map(|(_, _, l)| Arc::clone(l))
            .collect();

        if targets.is_empty() {
            tracing::warn!("{:?} event with no listeners: {:?}", kind, event);
        }
        for listener in &targets {
            listener(&event);
        }
        targets.len()
    }

    pub fn listener_count(&self, kind: GlobalEventKind) -> usize {
        self.lock()
            .listeners
            .iter()
            .filter(|(_, k, _)| *k == kind)
            .count()
    }
}

/// Registration handle; dropping it removes the listener
pub struct Subscription {
    registry: Weak<Mutex<Registry>>,
    id: u64,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            let mut registry = registry.lock().unwrap_or_else(PoisonError::into_inner);
            registry.listeners.retain(|(id, _, _)| *id != self.id);
            tracing::debug!("Removed listener #{}", self.id);
        }
    }
}
