// 🗺️ Map links - build a maps URL for a provider and hand it to a browser

use anyhow::{bail, Context, Result};
use std::process::Command;

use crate::entities::Location;

pub const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/?api=1&query=";

pub fn map_url(location: &Location) -> String {
    let query = format!("{},{}", location.lat, location.lng);
    format!("{}{}", MAPS_SEARCH_BASE, urlencoding::encode(&query))
}

/// Something that can show a URL to the user
pub trait UrlOpener {
    fn open(&self, url: &str) -> Result<()>;
}

/// Platform default browser
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl UrlOpener for SystemBrowser {
    /// Runs the platform launcher to completion; the launchers hand the URL
    /// to the browser and exit, so waiting here also reaps the child.
    fn open(&self, url: &str) -> Result<()> {
        let status = browser_command(url)
            .status()
            .with_context(|| format!("failed to launch browser for {}", url))?;

        if !status.success() {
            bail!("browser launcher exited with {} for {}", status, url);
        }
        Ok(())
    }
}

fn browser_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(url);
        c
    } else if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(escape_for_cmd(url));
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(url);
        c
    }
}

/// `cmd` treats `&`, `|`, `<`, `>` and `^` as operators unless caret-escaped
fn escape_for_cmd(url: &str) -> String {
    let mut out = String::with_capacity(url.len());
    for c in url.chars() {
        if matches!(c, '&' | '|' | '<' | '>' | '^') {
            out.push('^');
        }
        out.push(c);
    }
    out
}

/// Opener used when browsing is disabled; the URL is only printed
#[derive(Debug, Default, Clone, Copy)]
pub struct NoBrowser;

impl UrlOpener for NoBrowser {
    fn open(&self, url: &str) -> Result<()> {
        log::debug!("Browser disabled, not opening {}", url);
        Ok(())
    }
}

pub fn select_opener(open_browser: bool) -> Box<dyn UrlOpener> {
    if open_browser {
        Box::new(SystemBrowser)
    } else {
        Box::new(NoBrowser)
    }
}
