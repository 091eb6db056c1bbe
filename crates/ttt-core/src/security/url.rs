use std::io;
use std::process::{Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};

use thiserror::Error;
use tracing::{debug, warn};

/// Schemes that must never be followed, regardless of anything else.
const BLOCKED_SCHEMES: [&str; 4] = ["javascript:", "data:", "vbscript:", "file:"];

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("Refusing to open unsafe URL: {0}")]
    Unsafe(String),

    #[error("Failed to launch browser: {0}")]
    Launch(#[from] io::Error),
}

fn starts_with_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Whether a link target may be followed.
///
/// Absolute `http(s)://` URLs and site-relative targets (`/path`, `#anchor`)
/// pass; everything else, and the blocked schemes in particular, fails.
pub fn is_safe_url(url: &str) -> bool {
    if BLOCKED_SCHEMES.iter().any(|s| starts_with_ignore_case(url, s)) {
        return false;
    }
    starts_with_ignore_case(url, "http://")
        || starts_with_ignore_case(url, "https://")
        || url.starts_with('/')
        || url.starts_with('#')
}

/// The url itself if safe, otherwise an empty string.
pub fn sanitize_url(url: &str) -> &str {
    if is_safe_url(url) {
        url
    } else {
        ""
    }
}

/// Something that can hand a URL to the outside world.
pub trait LinkOpener {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> io::Result<()> {
        let program = if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        };
        let mut command = Command::new(program);
        command.arg(url);
        spawn_reaped(command)?;
        Ok(())
    }
}

/// Spawn `command` detached from the terminal and wait for it on a
/// background thread, so finished launchers do not pile up as zombies.
fn spawn_reaped(mut command: Command) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
    let mut child = command
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(thread::spawn(move || {
        let status = child.wait();
        if let Err(e) = &status {
            debug!(error = %e, "Failed to wait for browser launcher");
        }
        status
    }))
}

/// Open an external link in a new browsing context, refusing unsafe targets.
pub fn open_external<O: LinkOpener + ?Sized>(opener: &O, url: &str) -> Result<(), LinkError> {
    if !is_safe_url(url) {
        warn!(url = url, "Blocked unsafe external link");
        return Err(LinkError::Unsafe(url.to_string()));
    }
    debug!(url = url, "Opening external link");
    opener.open(url)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingOpener {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for RecordingOpener {
        fn open(&self, url: &str) -> io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct BrokenOpener;

    impl LinkOpener for BrokenOpener {
        fn open(&self, _url: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::NotFound, "no browser"))
        }
    }

    #[test]
    fn test_safe_urls() {
        assert!(is_safe_url("https://discord.gg/example"));
        assert!(is_safe_url("HTTP://EXAMPLE.ORG"));
        assert!(is_safe_url("/impressum"));
        assert!(is_safe_url("#top"));
    }

    #[test]
    fn test_unsafe_urls() {
        assert!(!is_safe_url("javascript:alert(1)"));
        assert!(!is_safe_url("JavaScript:alert(1)"));
        assert!(!is_safe_url("data:text/html;base64,AAAA"));
        assert!(!is_safe_url("vbscript:msgbox"));
        assert!(!is_safe_url("file:///etc/passwd"));
        assert!(!is_safe_url("ftp://example.org"));
        assert!(!is_safe_url("mailto:info@example.org"));
        assert!(!is_safe_url(""));
    }

    #[test]
    fn test_sanitize_url() {
        assert_eq!(sanitize_url("https://tacticalteam.de"), "https://tacticalteam.de");
        assert_eq!(sanitize_url("javascript:void(0)"), "");
    }

    #[test]
    fn test_open_external_refuses_unsafe() {
        let opener = RecordingOpener::default();
        let result = open_external(&opener, "javascript:alert(1)");
        assert!(matches!(result, Err(LinkError::Unsafe(_))));
        assert!(opener.opened.borrow().is_empty());

        open_external(&opener, "https://www.twitch.tv/tacticaltrainingteam").unwrap();
        assert_eq!(opener.opened.borrow().len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_spawned_launcher_is_reaped() {
        let handle = spawn_reaped(Command::new("true")).unwrap();
        let status = handle.join().unwrap().unwrap();
        assert!(status.success());

        assert!(spawn_reaped(Command::new("ttt-no-such-launcher")).is_err());
    }

    #[test]
    fn test_open_external_reports_launch_failure() {
        let result = open_external(&BrokenOpener, "https://example.org");
        assert!(matches!(result, Err(LinkError::Launch(_))));
    }
}
