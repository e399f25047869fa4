//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::Path;

use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::browser::open_url_in_browser;
use crate::clipboard::{self, CopyPlan, CopyStatus};
use crate::config::save_settings;
use crate::message::Message;
use crate::spawn::spawn_supervised;
use crate::UpdateAction;
use shutter_core::Error;

/// Execute an action, spawning background work where it may block
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::UnboundedSender<Message>, config_path: &Path) {
    match action {
        UpdateAction::CopyToClipboard { report } => {
            // OSC 52 goes straight to the terminal, between frames
            let plan = CopyPlan::detect();
            match clipboard::start_copy(&mut std::io::stdout(), &report, plan) {
                CopyStatus::Done(result) => {
                    let _ = msg_tx.send(Message::ReportCopied {
                        result: result.map_err(|e| e.to_string()),
                    });
                }
                CopyStatus::NeedsTool { osc52_sent } => {
                    tokio::spawn(async move {
                        let result = clipboard::finish_with_tool(&report, osc52_sent)
                            .await
                            .map_err(|e| {
                                error!("{}", e);
                                e.to_string()
                            });
                        let _ = msg_tx.send(Message::ReportCopied { result });
                    });
                }
            }
        }

        UpdateAction::OpenUrl { url, browser } => {
            tokio::spawn(async move {
                let result = open_url_in_browser(&url, &browser).map_err(|e| {
                    error!("{}", Error::browser(e.to_string()));
                    e.to_string()
                });
                if result.is_ok() {
                    debug!("Opened {}", url);
                }
                let _ = msg_tx.send(Message::IssueOpened { result });
            });
        }

        UpdateAction::PersistSettings { settings } => {
            let config_path = config_path.to_path_buf();
            spawn_supervised("persist-settings", async move {
                save_settings(&config_path, &settings)
            });
        }
    }
}
