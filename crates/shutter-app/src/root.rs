//! The mounted application root
//!
//! Composition, outermost first: the settings store, the crash boundary, the
//! application state. Dropping an `AppRoot` releases every subscription it
//! made, so a reload is simply "drop, then mount again".

use tokio::sync::mpsc;

use crate::crash::{ErrorBoundary, GlobalEvents};
use crate::message::Message;
use crate::settings_store::{SettingsStore, StoreSubscription};
use crate::state::AppState;

pub struct AppRoot {
    pub state: AppState,
    pub boundary: ErrorBoundary,
    _settings_changes: StoreSubscription,
}

impl AppRoot {
    /// Mount against the process-wide event registry
    pub fn mount(store: SettingsStore, msg_tx: mpsc::UnboundedSender<Message>) -> Self {
        Self::mount_on(store, GlobalEvents::global(), msg_tx)
    }

    pub fn mount_on(
        store: SettingsStore,
        events: &GlobalEvents,
        msg_tx: mpsc::UnboundedSender<Message>,
    ) -> Self {
        let tx = msg_tx.clone();
        let settings_changes = store.subscribe(move |settings| {
            let _ = tx.send(Message::SettingsChanged(settings.clone()));
        });
        let boundary = ErrorBoundary::mount(events, msg_tx);
        let state = AppState::new(store);

        tracing::info!("Mounted application root (theme {})", state.theme());
        Self {
            state,
            boundary,
            _settings_changes: settings_changes,
        }
    }
}

impl std::fmt::Debug for AppRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRoot")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
