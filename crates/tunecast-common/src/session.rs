/// Session and navigation capabilities consumed by the dashboard shell
///
/// The shell never owns session state. It reads the signed-in email, asks the
/// session provider to sign out, and tells the navigator where to go next.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::error::Result;
use crate::navigation::LOGIN_ROUTE;

/// Identity provider for the customer area.
#[async_trait(?Send)]
pub trait SessionProvider {
    /// Email of the signed-in user, if any.
    fn current_email(&self) -> Option<String>;

    /// End the session with the auth provider.
    async fn sign_out(&self) -> Result<()>;
}

/// Client-side router capability.
pub trait Navigator {
    fn current_path(&self) -> String;

    fn navigate(&self, path: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoutPhase {
    #[default]
    Idle,
    LoggingOut,
}

/// Sign out, then redirect to the login route.
///
/// The redirect is issued once `sign_out` settles, whether it succeeded or
/// not. A failure is logged and handed back to the caller. If `sign_out`
/// never resolves there is no redirect.
pub async fn sign_out_and_redirect(
    session: &dyn SessionProvider,
    navigator: &dyn Navigator,
) -> Result<()> {
    let email = session.current_email();
    info!(email = email.as_deref().unwrap_or(""), "Signing out");

    let result = session.sign_out().await;
    if let Err(e) = &result {
        warn!("Sign-out failed, redirecting anyway: {}", e);
    }

    navigator.navigate(LOGIN_ROUTE);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TunecastError;
    use std::cell::{Cell, RefCell};
    use std::time::Duration;

    struct MockSession {
        email: Option<String>,
        fail: bool,
        hang: bool,
        sign_outs: Cell<u32>,
    }

    impl MockSession {
        fn new(fail: bool) -> Self {
            Self {
                email: Some("artist@example.com".to_string()),
                fail,
                hang: false,
                sign_outs: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl SessionProvider for MockSession {
        fn current_email(&self) -> Option<String> {
            self.email.clone()
        }

        async fn sign_out(&self) -> Result<()> {
            self.sign_outs.set(self.sign_outs.get() + 1);
            if self.hang {
                std::future::pending::<()>().await;
            }
            if self.fail {
                Err(TunecastError::auth("token revoked"))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct MockNavigator {
        visits: RefCell<Vec<String>>,
    }

    impl Navigator for MockNavigator {
        fn current_path(&self) -> String {
            self.visits
                .borrow()
                .last()
                .cloned()
                .unwrap_or_else(|| "/dashboard".to_string())
        }

        fn navigate(&self, path: &str) {
            self.visits.borrow_mut().push(path.to_string());
        }
    }

    #[tokio::test]
    async fn test_logout_redirects_after_success() {
        let session = MockSession::new(false);
        let navigator = MockNavigator::default();

        sign_out_and_redirect(&session, &navigator).await.unwrap();

        assert_eq!(session.sign_outs.get(), 1);
        assert_eq!(*navigator.visits.borrow(), vec![LOGIN_ROUTE.to_string()]);
        assert_eq!(navigator.current_path(), "/login");
    }

    #[tokio::test]
    async fn test_logout_redirects_after_failure() {
        let session = MockSession::new(true);
        let navigator = MockNavigator::default();

        let result = sign_out_and_redirect(&session, &navigator).await;

        assert!(matches!(result, Err(TunecastError::Auth(_))));
        assert_eq!(session.sign_outs.get(), 1);
        assert_eq!(*navigator.visits.borrow(), vec![LOGIN_ROUTE.to_string()]);
    }

    #[tokio::test]
    async fn test_logout_without_email() {
        let mut session = MockSession::new(false);
        session.email = None;
        let navigator = MockNavigator::default();

        sign_out_and_redirect(&session, &navigator).await.unwrap();
        assert_eq!(navigator.visits.borrow().len(), 1);
    }

    #[tokio::test]
    async fn test_pending_sign_out_never_redirects() {
        let mut session = MockSession::new(false);
        session.hang = true;
        let navigator = MockNavigator::default();

        let outcome = tokio::time::timeout(
            Duration::from_millis(20),
            sign_out_and_redirect(&session, &navigator),
        )
        .await;

        assert!(outcome.is_err());
        assert_eq!(session.sign_outs.get(), 1);
        assert!(navigator.visits.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_logout_flow_issues_the_only_redirect() {
        use crate::navigation::{shell_access, ShellAccess};

        // Session that forgets the user as soon as sign-out starts
        struct ClearingSession {
            email: RefCell<Option<String>>,
        }

        #[async_trait(?Send)]
        impl SessionProvider for ClearingSession {
            fn current_email(&self) -> Option<String> {
                self.email.borrow().clone()
            }

            async fn sign_out(&self) -> Result<()> {
                self.email.borrow_mut().take();
                Ok(())
            }
        }

        let session = ClearingSession {
            email: RefCell::new(Some("artist@example.com".to_string())),
        };
        let navigator = MockNavigator::default();
        let phase = LogoutPhase::LoggingOut;

        sign_out_and_redirect(&session, &navigator).await.unwrap();

        assert!(session.current_email().is_none());
        assert_eq!(
            shell_access(true, session.current_email().is_some(), phase),
            ShellAccess::Shell
        );
        assert_eq!(*navigator.visits.borrow(), vec![LOGIN_ROUTE.to_string()]);
    }

    #[test]
    fn test_logout_phase_default() {
        assert_eq!(LogoutPhase::default(), LogoutPhase::Idle);
    }
}
