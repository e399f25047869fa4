//! Shared settings cell (the "settings context")
//!
//! One `SettingsStore` owns the current [`Settings`]. Widgets never mutate it
//! in place: they request a replacement through [`SettingsStore::update`],
//! and every subscriber is told about the new value. Clones share the same
//! cell.

use std::sync::{Arc, Mutex, PoisonError};

use crate::config::Settings;

type Listener = Arc<dyn Fn(&Settings) + Send + Sync>;

#[derive(Default)]
struct StoreInner {
    settings: Settings,
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Externally owned, observable settings cell
#[derive(Clone, Default)]
pub struct SettingsStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl std::fmt::Debug for SettingsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettingsStore")
            .field("settings", &self.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl SettingsStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner: Arc::new(Mutex::new(StoreInner {
                settings,
                ..StoreInner::default()
            })),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of the current settings
    pub fn get(&self) -> Settings {
        self.lock().settings.clone()
    }

    /// Read a single field without cloning the whole object
    pub fn with<R>(&self, f: impl FnOnce(&Settings) -> R) -> R {
        f(&self.lock().settings)
    }

    /// Replace the settings wholesale and notify subscribers
    pub fn set(&self, settings: Settings) {
        let listeners = {
            let mut inner = self.lock();
            if inner.settings == settings {
                return;
            }
            inner.settings = settings.clone();
            inner
                .listeners
                .iter()
                .map(|(_, l)| Arc::clone(l))
                .collect::<Vec<_>>()
        };

        // Listeners run outside the lock so they may read the store
        for listener in listeners {
            listener(&settings);
        }
    }

    /// Derive a replacement from the current value, then [`set`](Self::set) it
    pub fn update(&self, f: impl FnOnce(&Settings) -> Settings) {
        let next = f(&self.lock().settings);
        self.set(next);
    }

    /// Register a change listener; dropping the guard unsubscribes
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, listener: impl Fn(&Settings) + Send + Sync + 'static) -> StoreSubscription {
        let mut inner = self.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Arc::new(listener)));
        StoreSubscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

/// Guard returned by [`SettingsStore::subscribe`]
pub struct StoreSubscription {
    store: std::sync::Weak<Mutex<StoreInner>>,
    id: u64,
}

impl Drop for StoreSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            let mut inner = inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.listeners.retain(|(id, _)| *id != self.id);
        }
    }
}
