use super::User;
use crate::config::labels;

/// Authentication lifecycle of the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    #[default]
    LoggedOut,
    LoggingIn,
    LoggedIn,
}

impl SessionPhase {
    pub fn is_logged_in(self) -> bool {
        matches!(self, Self::LoggedIn)
    }
}

/// Point-in-time view of the session, published to the UI.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub user: Option<User>,
}

impl SessionSnapshot {
    /// Name shown in the profile header.
    pub fn display_name(&self) -> String {
        match (&self.phase, &self.user) {
            (SessionPhase::LoggedIn, Some(user)) => user.username.clone(),
            (SessionPhase::LoggedIn, None) => labels::LOADING_PROFILE.to_string(),
            (SessionPhase::LoggingIn, _) => labels::LOGGING_IN.to_string(),
            (SessionPhase::LoggedOut, _) => labels::GUEST.to_string(),
        }
    }
}
