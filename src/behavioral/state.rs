// State: the presenter's behaviour follows a two-variant authorization state.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthorizationState {
    #[default]
    Unauthorized,
    Authorized {
        user_name: String,
    },
}

#[derive(Debug, Default)]
pub struct AuthorizationPresenter {
    state: AuthorizationState,
}

impl AuthorizationPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_user(&mut self, user_login: impl Into<String>) {
        self.state = AuthorizationState::Authorized {
            user_name: user_login.into(),
        };
    }

    pub fn logout_user(&mut self) {
        self.state = AuthorizationState::Unauthorized;
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self.state, AuthorizationState::Authorized { .. })
    }

    pub fn user_login(&self) -> &str {
        match &self.state {
            AuthorizationState::Authorized { user_name } => user_name,
            AuthorizationState::Unauthorized => "Unknown",
        }
    }

    pub fn state(&self) -> &AuthorizationState {
        &self.state
    }
}

impl fmt::Display for AuthorizationPresenter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "User '{}' is logged in: {}",
            self.user_login(),
            self.is_authorized()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_logout() {
        let mut presenter = AuthorizationPresenter::new();

        presenter.login_user("admin");
        assert!(presenter.is_authorized());
        assert_eq!(presenter.user_login(), "admin");
        assert_eq!(presenter.to_string(), "User 'admin' is logged in: true");

        presenter.logout_user();
        assert!(!presenter.is_authorized());
        assert_eq!(presenter.user_login(), "Unknown");
        assert_eq!(presenter.to_string(), "User 'Unknown' is logged in: false");
    }

    #[test]
    fn test_starts_unauthorized() {
        let presenter = AuthorizationPresenter::new();
        assert_eq!(presenter.state(), &AuthorizationState::Unauthorized);
    }

    #[test]
    fn test_relogin_replaces_user() {
        let mut presenter = AuthorizationPresenter::new();
        presenter.login_user("alice");
        presenter.login_user("bob");
        assert_eq!(presenter.user_login(), "bob");
    }
}
