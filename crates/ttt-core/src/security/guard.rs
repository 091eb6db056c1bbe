//! Navigation guard.
//!
//! Every route change goes through `RouteGuard::check` before the page is
//! shown. Rejected navigations are logged; they never surface as errors.

use std::borrow::Cow;
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use percent_encoding::percent_decode_str;
use tracing::warn;

use crate::routes::Route;

/// Minimum spacing between accepted navigations.
pub const MIN_NAVIGATION_INTERVAL: Duration = Duration::from_millis(100);

/// Substrings that mark a route parameter as an injection attempt.
const SUSPICIOUS_PATTERNS: [&str; 6] = [
    "<script",
    "javascript:",
    "vbscript:",
    "onload=",
    "onerror=",
    "onclick=",
];

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    start: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Cell::new(Duration::ZERO),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.start + self.offset.get()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

impl<C: Clock + ?Sized> Clock for Rc<C> {
    fn now(&self) -> Instant {
        (**self).now()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Allow(Route),
    /// Navigation replaced by a redirect to the given route.
    Redirect(Route),
    /// Too soon after the previous navigation; stay where we are.
    Throttled,
}

pub fn is_suspicious(value: &str) -> bool {
    let lower = value.to_lowercase();
    SUSPICIOUS_PATTERNS.iter().any(|p| lower.contains(p))
}

/// Percent-decode a raw query key or value; invalid UTF-8 is replaced.
fn decode_param(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

pub struct RouteGuard<C: Clock = SystemClock> {
    clock: C,
    last_access: Option<Instant>,
}

impl RouteGuard<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for RouteGuard<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> RouteGuard<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            last_access: None,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Decide whether a navigation to `path` with the given parameters
    /// may proceed. Parameters may be raw query text; they are
    /// percent-decoded before inspection.
    pub fn check(&mut self, path: &str, params: &[(&str, &str)]) -> GuardDecision {
        if params.iter().any(|(key, value)| {
            is_suspicious(&decode_param(key)) || is_suspicious(&decode_param(value))
        }) {
            warn!(path = path, "Suspicious route parameters detected, redirecting to home");
            return GuardDecision::Redirect(Route::Home);
        }

        let now = self.clock.now();
        if let Some(last) = self.last_access {
            if now.saturating_duration_since(last) < MIN_NAVIGATION_INTERVAL {
                warn!(path = path, "Too many rapid route changes detected");
                return GuardDecision::Throttled;
            }
        }
        self.last_access = Some(now);

        match Route::lookup(path) {
            Some(route) => GuardDecision::Allow(route),
            None => {
                warn!(path = path, "Invalid route detected, redirecting to home");
                GuardDecision::Redirect(Route::Home)
            }
        }
    }
}
