//! Link safety, navigation guard and request hardening.

pub mod guard;
pub mod interceptor;
pub mod url;

pub use guard::{Clock, GuardDecision, ManualClock, RouteGuard, SystemClock};
pub use interceptor::{check_transport, default_headers};
pub use url::{is_safe_url, open_external, sanitize_url, LinkError, LinkOpener, SystemOpener};
