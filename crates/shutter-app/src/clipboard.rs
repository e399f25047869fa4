//! Copying text to the user's clipboard from inside a terminal
//!
//! Two mechanisms exist: an OSC 52 escape sequence written to the terminal
//! (wrapped for tmux / GNU screen when running inside one), and a platform
//! clipboard tool fed through stdin. A terminal gives no acknowledgement for
//! OSC 52, so it only counts as a successful copy on terminals known to
//! honour it. Everywhere else a clipboard tool decides the outcome.

use std::io::Write;
use std::process::Stdio;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use shutter_core::prelude::*;

/// Common OSC 52 limit on the base64 payload
pub const MAX_OSC52_PAYLOAD: usize = 74_994;

/// Upper bound on one clipboard tool run
pub const TOOL_TIMEOUT: Duration = Duration::from_secs(2);

/// Terminal programs that honour OSC 52 clipboard writes
const OSC52_TERMINALS: &[&str] = &[
    "iTerm.app",
    "WezTerm",
    "Alacritty",
    "Ghostty",
    "kitty",
    "Rio",
    "Contour",
    "vscode",
];

/// Multiplexer wrapping needed for the escape sequence to reach the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Passthrough {
    #[default]
    None,
    Tmux,
    Screen,
}

impl Passthrough {
    /// Wrap `seq` in a DCS passthrough; tmux needs every ESC doubled
    pub fn wrap(&self, seq: &str) -> String {
        match self {
            Passthrough::None => seq.to_string(),
            Passthrough::Tmux => format!("\x1bPtmux;{}\x1b\\", seq.replace('\x1b', "\x1b\x1b")),
            Passthrough::Screen => format!("\x1bP{}\x1b\\", seq),
        }
    }
}

/// The environment variables clipboard selection looks at
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardEnv {
    pub term: String,
    pub term_program: String,
    pub in_tmux: bool,
    pub in_screen: bool,
    pub in_zellij: bool,
    pub kitty_window_id: bool,
    pub wt_session: bool,
}

impl ClipboardEnv {
    pub fn from_env() -> Self {
        Self {
            term: std::env::var("TERM").unwrap_or_default(),
            term_program: std::env::var("TERM_PROGRAM").unwrap_or_default(),
            in_tmux: std::env::var_os("TMUX").is_some(),
            in_screen: std::env::var_os("STY").is_some(),
            in_zellij: std::env::var_os("ZELLIJ").is_some(),
            kitty_window_id: std::env::var_os("KITTY_WINDOW_ID").is_some(),
            wt_session: std::env::var_os("WT_SESSION").is_some(),
        }
    }

    fn in_multiplexer(&self) -> bool {
        self.in_tmux || self.in_screen || self.in_zellij
    }

    /// True only for terminals known to apply OSC 52 writes.
    ///
    /// Multiplexers filter the sequence unless configured otherwise, so
    /// running inside one never counts as supported.
    pub fn osc52_supported(&self) -> bool {
        if self.term == "dumb" || self.in_multiplexer() {
            return false;
        }
        self.wt_session
            || self.kitty_window_id
            || OSC52_TERMINALS.iter().any(|t| {
                self.term_program.contains(t) || self.term.contains(&t.to_lowercase())
            })
    }

    pub fn passthrough(&self) -> Passthrough {
        if self.in_tmux {
            Passthrough::Tmux
        } else if self.in_screen {
            Passthrough::Screen
        } else {
            Passthrough::None
        }
    }
}

/// How a copy is attempted and what decides whether it worked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyPlan {
    /// OSC 52 settles the copy; a tool is tried only if the write fails
    Osc52 { passthrough: Passthrough },
    /// A clipboard tool settles the copy. The OSC 52 sequence is still sent,
    /// but an unconfirmed write is never reported as success.
    ToolFirst { passthrough: Passthrough },
}

impl CopyPlan {
    pub fn for_env(env: &ClipboardEnv) -> Self {
        let passthrough = env.passthrough();
        if env.osc52_supported() {
            CopyPlan::Osc52 { passthrough }
        } else {
            CopyPlan::ToolFirst { passthrough }
        }
    }

    pub fn detect() -> Self {
        let plan = Self::for_env(&ClipboardEnv::from_env());
        debug!("Clipboard plan: {:?}", plan);
        plan
    }
}

/// Result of the terminal half of a copy
#[derive(Debug)]
pub enum CopyStatus {
    /// The copy is settled
    Done(Result<()>),
    /// A clipboard tool must run; `osc52_sent` records whether the
    /// sequence reached the terminal
    NeedsTool { osc52_sent: bool },
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn osc52_sequence(text: &str) -> Result<String> {
    let encoded = STANDARD.encode(text.as_bytes());
    if encoded.len() > MAX_OSC52_PAYLOAD {
        return Err(Error::clipboard(format!(
            "OSC 52 payload too large ({} > {})",
            encoded.len(),
            MAX_OSC52_PAYLOAD
        )));
    }
    Ok(format!("\x1b]52;c;{}\x07", encoded))
}

pub fn write_osc52(writer: &mut impl Write, text: &str, passthrough: Passthrough) -> Result<()> {
    let seq = passthrough.wrap(&osc52_sequence(text)?);
    writer
        .write_all(seq.as_bytes())
        .and_then(|_| writer.flush())
        .map_err(|e| Error::clipboard(format!("Failed to write OSC 52: {}", e)))
}

/// Write the OSC 52 part of `plan` to `terminal`.
///
/// Runs synchronously so the sequence lands between two frames.
pub fn start_copy(terminal: &mut impl Write, text: &str, plan: CopyPlan) -> CopyStatus {
    match plan {
        CopyPlan::Osc52 { passthrough } => match write_osc52(terminal, text, passthrough) {
            Ok(()) => CopyStatus::Done(Ok(())),
            Err(e) => {
                warn!("{}, trying a clipboard tool", e);
                CopyStatus::NeedsTool { osc52_sent: false }
            }
        },
        CopyPlan::ToolFirst { passthrough } => {
            let osc52_sent = match write_osc52(terminal, text, passthrough) {
                Ok(()) => true,
                Err(e) => {
                    debug!("{}", e);
                    false
                }
            };
            CopyStatus::NeedsTool { osc52_sent }
        }
    }
}

/// Finish a copy that [`start_copy`] could not settle
pub async fn finish_with_tool(text: &str, osc52_sent: bool) -> Result<()> {
    copy_with_external_tool(text)
        .await
        .map_err(|e| unconfirmed_copy_error(e, osc52_sent))
}

fn unconfirmed_copy_error(err: Error, osc52_sent: bool) -> Error {
    if osc52_sent {
        Error::clipboard(format!(
            "{}; an OSC 52 copy was sent but the terminal may have ignored it",
            err
        ))
    } else {
        err
    }
}

/// Clipboard programs to try, most specific first
fn external_tools() -> Vec<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "macos") {
        vec![("pbcopy", &[])]
    } else if cfg!(target_os = "windows") {
        vec![("clip", &[])]
    } else {
        let mut tools: Vec<(&'static str, &'static [&'static str])> = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            tools.push(("wl-copy", &[]));
        }
        tools.push(("xclip", &["-selection", "clipboard"]));
        tools.push(("xsel", &["--clipboard", "--input"]));
        tools
    }
}

async fn run_with_input(
    program: &str,
    args: &[&str],
    input: &str,
    timeout: Duration,
) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| Error::clipboard(format!("{}: {}", program, e)))?;

    let run = async {
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(input.as_bytes()).await?;
            // Dropping stdin sends EOF
        }
        child.wait().await
    };

    let status = tokio::time::timeout(timeout, run)
        .await
        .map_err(|_| Error::clipboard(format!("{} timed out after {:?}", program, timeout)))?
        .map_err(|e| Error::clipboard(format!("{}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(Error::clipboard(format!("{} exited with {}", program, status)))
    }
}

/// Copy through the first platform clipboard tool that succeeds
pub async fn copy_with_external_tool(text: &str) -> Result<()> {
    let mut last_error = Error::clipboard("no clipboard tool available");
    for (program, args) in external_tools() {
        match run_with_input(program, args, text, TOOL_TIMEOUT).await {
            Ok(()) => {
                debug!("Copied {} bytes with {}", text.len(), program);
                return Ok(());
            }
            Err(e) => {
                debug!("Clipboard tool failed: {}", e);
                last_error = e;
            }
        }
    }
    Err(last_error)
}
