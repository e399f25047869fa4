//! Supervised background tasks
//!
//! A supervised task reports an `Err` it finishes with as an unhandled
//! rejection on the global event registry, so the crash overlay sees
//! failures nobody awaited. Panics inside the task reach the panic hook
//! like any other panic.

use std::future::Future;

use tokio::task::JoinHandle;

use crate::crash::{ErrorDescriptor, GlobalEvent, GlobalEvents};
use shutter_core::prelude::*;

/// Spawn `task`, reporting its error to the process-wide registry
pub fn spawn_supervised<F>(name: &'static str, task: F) -> JoinHandle<()>
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    spawn_supervised_on(GlobalEvents::global().clone(), name, task)
}

/// Spawn `task`, reporting its error to `events`
pub fn spawn_supervised_on<F>(events: GlobalEvents, name: &'static str, task: F) -> JoinHandle<()>
where
    F: Future<Output = Result<()>> + Send + 'static,
{
    tokio::spawn(async move {
        debug!("Task '{}' started", name);
        match task.await {
            Ok(()) => debug!("Task '{}' finished", name),
            Err(e) => {
                warn!("Task '{}' failed: {}", name, e);
                events.dispatch(GlobalEvent::UnhandledRejection(
                    ErrorDescriptor::from_error(&e),
                ));
            }
        }
    })
}
