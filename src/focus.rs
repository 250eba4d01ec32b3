//! Bringing the browser window to the front while the user authorizes.
//!
//! Purely cosmetic: every implementation swallows failures after printing a
//! warning, so authorization never depends on it.

use std::process::Command;

use crate::{config, info, warning};

pub trait BrowserFocus {
    /// Tries to focus the browser window. Returns whether a focus command ran
    /// successfully.
    fn focus(&self) -> bool;
}

/// Focuses a named application with the platform's own tooling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemFocus {
    platform: Platform,
    app_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

/// Used where no focus mechanism is known.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFocus;

impl Platform {
    pub fn current() -> Option<Platform> {
        match std::env::consts::OS {
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }

    pub fn default_browser(&self) -> &'static str {
        match self {
            Platform::MacOs => "Safari",
            Platform::Linux | Platform::Windows => "Chrome",
        }
    }
}

impl SystemFocus {
    pub fn new(platform: Platform, app_name: impl Into<String>) -> Self {
        Self {
            platform,
            app_name: app_name.into(),
        }
    }

    /// Program and arguments that activate the application window.
    pub fn command(&self) -> (&'static str, Vec<String>) {
        match self.platform {
            Platform::MacOs => (
                "osascript",
                vec![
                    "-e".to_string(),
                    format!("tell application \"{}\" to activate", self.app_name),
                ],
            ),
            Platform::Linux => ("wmctrl", vec!["-a".to_string(), self.app_name.clone()]),
            Platform::Windows => (
                "powershell",
                vec![
                    "-NoProfile".to_string(),
                    "-Command".to_string(),
                    format!(
                        "(New-Object -ComObject WScript.Shell).AppActivate('{}')",
                        self.app_name.replace('\'', "''")
                    ),
                ],
            ),
        }
    }
}

impl BrowserFocus for SystemFocus {
    fn focus(&self) -> bool {
        let (program, args) = self.command();
        match Command::new(program).args(&args).status() {
            Ok(status) if status.success() => true,
            Ok(status) => {
                warning!("Could not focus {}: {} exited with {}", self.app_name, program, status);
                false
            }
            Err(e) => {
                warning!("Could not focus {}: failed to run {}: {}", self.app_name, program, e);
                false
            }
        }
    }
}

impl BrowserFocus for NoopFocus {
    fn focus(&self) -> bool {
        info!("Automatic focus switching not supported on this operating system.");
        false
    }
}

/// Picks the focus implementation for the running OS.
///
/// The application name comes from `BROWSER_APP_NAME` and falls back to the
/// platform's usual browser.
pub fn for_platform() -> Box<dyn BrowserFocus> {
    match Platform::current() {
        Some(platform) => {
            let app_name =
                config::browser_app_name().unwrap_or_else(|| platform.default_browser().to_string());
            Box::new(SystemFocus::new(platform, app_name))
        }
        None => Box::new(NoopFocus),
    }
}
