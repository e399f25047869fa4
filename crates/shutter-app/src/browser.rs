//! Opening URLs in the user's browser

use std::process::{Command, Stdio};

/// Launch `url` with `browser`, or the platform opener when `browser` is empty
pub fn open_url_in_browser(url: &str, browser: &str) -> std::io::Result<()> {
    if !browser.is_empty() {
        launch(Command::new(browser).arg(url))?;
        return Ok(());
    }

    #[cfg(target_os = "macos")]
    {
        launch(Command::new("open").arg(url))?;
        return Ok(());
    }

    #[cfg(target_os = "linux")]
    {
        launch(Command::new("xdg-open").arg(url))?;
        return Ok(());
    }

    #[cfg(target_os = "windows")]
    {
        launch(Command::new("cmd").args(["/C", "start", "", url]))?;
        return Ok(());
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        return Err(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "no browser opener available for this platform",
        ));
    }

    #[allow(unreachable_code)]
    Ok(())
}

/// Detached from the terminal so the opener cannot draw over the UI
fn launch(command: &mut Command) -> std::io::Result<()> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
