//! Navigation guard.
//!
//! Runs synchronously before every route transition. Access is binary:
//! public routes are always reachable, everything else needs a session.

use crate::config::LOGIN_PATH;
use crate::models::AppRoute;

/// Outcome of guarding a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    Redirect(&'static str),
}

/// Decide whether navigation to `target` may proceed.
pub fn guard(target: &AppRoute, logged_in: bool) -> Navigation {
    if !target.is_public() && !logged_in {
        Navigation::Redirect(LOGIN_PATH)
    } else {
        Navigation::Proceed
    }
}
