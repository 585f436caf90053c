//! Gate for role-restricted navigation.

use gig_shared::config::RoutesConfig;

use crate::domain::entities::session::{DerivedIdentity, Role};
use crate::domain::value_objects::navigation::Navigation;

/// Outcome of checking an identity against a guarded route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the protected subtree
    Allow,
    /// No session: send the visitor to login
    RedirectToLogin,
    /// Authenticated, but not with the required role: send the user home
    RedirectToHome,
}

/// Decides whether a protected subtree may render
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
    home_path: String,
}

impl RouteGuard {
    /// Create a guard redirecting to the configured entry points
    pub fn new(routes: &RoutesConfig) -> Self {
        Self {
            login_path: routes.login_path.clone(),
            home_path: routes.home_path.clone(),
        }
    }

    /// Login entry point
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Home entry point
    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Checks the identity against an optional required role
    pub fn decide(&self, identity: &DerivedIdentity, required_role: Option<Role>) -> GuardDecision {
        if !identity.is_logged_in {
            return GuardDecision::RedirectToLogin;
        }
        match required_role {
            Some(role) if role != identity.role => GuardDecision::RedirectToHome,
            _ => GuardDecision::Allow,
        }
    }

    /// Where a decision sends the user, `None` for `Allow`
    pub fn redirect_target(&self, decision: GuardDecision) -> Option<&str> {
        match decision {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(self.login_path.as_str()),
            GuardDecision::RedirectToHome => Some(self.home_path.as_str()),
        }
    }

    /// Renders the subtree if allowed, otherwise redirects.
    ///
    /// `render` is only called when access is allowed.
    pub fn guard<T>(
        &self,
        identity: &DerivedIdentity,
        required_role: Option<Role>,
        render: impl FnOnce() -> T,
    ) -> Navigation<T> {
        let decision = self.decide(identity, required_role);
        match self.redirect_target(decision) {
            None => Navigation::Render(render()),
            Some(target) => {
                tracing::debug!(?decision, ?required_role, redirect = target, "Route guard redirect");
                Navigation::Redirect(target.to_string())
            }
        }
    }
}

impl Default for RouteGuard {
    fn default() -> Self {
        Self::new(&RoutesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::session::Session;

    fn identity(role: Role) -> DerivedIdentity {
        let session = Session::new("abc", role, "u1").unwrap();
        DerivedIdentity::from_session(Some(&session))
    }

    #[test]
    fn test_anonymous_always_redirects_to_login() {
        let guard = RouteGuard::default();
        let anonymous = DerivedIdentity::anonymous();

        for required in [None, Some(Role::Freelancer), Some(Role::Company)] {
            let mut rendered = false;
            let outcome = guard.guard(&anonymous, required, || rendered = true);

            assert_eq!(outcome, Navigation::Redirect("/login".to_string()));
            assert!(!rendered);
        }
    }

    #[test]
    fn test_role_mismatch_redirects_home() {
        let guard = RouteGuard::default();
        let outcome = guard.guard(&identity(Role::Freelancer), Some(Role::Company), || "dashboard");

        assert_eq!(outcome.redirect_target(), Some("/"));
    }

    #[test]
    fn test_matching_role_renders_unchanged() {
        let guard = RouteGuard::default();
        let outcome = guard.guard(&identity(Role::Company), Some(Role::Company), || "dashboard");

        assert_eq!(outcome, Navigation::Render("dashboard"));
    }

    #[test]
    fn test_no_required_role_allows_any_session() {
        let guard = RouteGuard::default();

        assert_eq!(guard.decide(&identity(Role::Company), None), GuardDecision::Allow);
        assert_eq!(guard.decide(&identity(Role::Freelancer), None), GuardDecision::Allow);
    }

    #[test]
    fn test_configured_entry_points() {
        let guard = RouteGuard::new(&RoutesConfig {
            login_path: "/auth/sign-in".to_string(),
            home_path: "/home".to_string(),
        });

        let outcome = guard.guard(&DerivedIdentity::anonymous(), None, || ());
        assert_eq!(outcome.redirect_target(), Some("/auth/sign-in"));

        let outcome = guard.guard(&identity(Role::Company), Some(Role::Freelancer), || ());
        assert_eq!(outcome.redirect_target(), Some("/home"));
    }
}
