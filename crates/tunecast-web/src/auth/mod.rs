/// Session management for the customer area
///
/// Keeps the signed-in email in localStorage and exposes it to the app through
/// `AuthContext`, which is also the `SessionProvider` handed to the dashboard
/// shell.

use std::rc::Rc;

use async_trait::async_trait;
use leptos::*;
use serde::{Deserialize, Serialize};
use tracing::info;

use tunecast_common::session::SessionProvider;
use tunecast_common::Result;

const SESSION_KEY: &str = "tunecast_session";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredSession {
    pub email: String,
}

/// Session provider backed by the browser's localStorage.
///
/// Outside the browser there is never a session.
#[derive(Debug, Clone, Default)]
pub struct BrowserSession;

impl BrowserSession {
    pub fn sign_in(&self, email: &str) -> Result<()> {
        let stored = StoredSession {
            email: email.to_string(),
        };
        let json = serde_json::to_string(&stored)?;
        storage::set(SESSION_KEY, &json)?;
        info!(email = email, "Signed in");
        Ok(())
    }

    pub fn stored(&self) -> Option<StoredSession> {
        storage::get(SESSION_KEY).and_then(|json| serde_json::from_str(&json).ok())
    }
}

#[async_trait(?Send)]
impl SessionProvider for BrowserSession {
    fn current_email(&self) -> Option<String> {
        self.stored().map(|s| s.email)
    }

    async fn sign_out(&self) -> Result<()> {
        storage::remove(SESSION_KEY)?;
        info!("Session cleared");
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
mod storage {
    use tunecast_common::{Result, TunecastError};

    fn local_storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| TunecastError::storage("No browser window"))?
            .local_storage()
            .ok()
            .flatten()
            .ok_or_else(|| TunecastError::storage("localStorage unavailable"))
    }

    pub fn get(key: &str) -> Option<String> {
        local_storage().ok()?.get_item(key).ok().flatten()
    }

    pub fn set(key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|_| TunecastError::storage(format!("Failed to write {}", key)))
    }

    pub fn remove(key: &str) -> Result<()> {
        local_storage()?
            .remove_item(key)
            .map_err(|_| TunecastError::storage(format!("Failed to remove {}", key)))
    }
}

#[cfg(not(feature = "hydrate"))]
mod storage {
    use tunecast_common::{Result, TunecastError};

    pub fn get(_key: &str) -> Option<String> {
        None
    }

    pub fn set(key: &str, _value: &str) -> Result<()> {
        Err(TunecastError::storage(format!("Cannot store {} outside the browser", key)))
    }

    pub fn remove(_key: &str) -> Result<()> {
        Ok(())
    }
}

/// Authentication context shared by the app
#[derive(Clone)]
pub struct AuthContext {
    pub session: Rc<BrowserSession>,
    pub email: RwSignal<Option<String>>,
    /// Set once the stored session has been read on the client
    pub loaded: RwSignal<bool>,
}

impl AuthContext {
    pub fn sign_in(&self, email: &str) -> Result<()> {
        self.session.sign_in(email)?;
        self.email.set(Some(email.to_string()));
        Ok(())
    }
}

#[async_trait(?Send)]
impl SessionProvider for AuthContext {
    /// Tracked read, so memos built on it follow sign-in and sign-out.
    fn current_email(&self) -> Option<String> {
        self.email.get()
    }

    async fn sign_out(&self) -> Result<()> {
        let result = self.session.sign_out().await;
        let _ = self.email.try_set(None);
        result
    }
}

/// Authentication provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = Rc::new(BrowserSession);
    let email = create_rw_signal::<Option<String>>(None);
    let loaded = create_rw_signal(false);

    // Effects only run in the browser, so SSR and the first hydrated render agree
    {
        let session = session.clone();
        create_effect(move |_| {
            email.set(session.current_email());
            loaded.set(true);
        });
    }

    provide_context(AuthContext {
        session,
        email,
        loaded,
    });

    children()
}

/// Hook to access authentication context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext must be provided by AuthProvider")
}

#[cfg(all(test, not(feature = "hydrate")))]
mod tests {
    use super::*;
    use tunecast_common::TunecastError;

    #[test]
    fn test_no_session_outside_browser() {
        let session = BrowserSession;
        assert!(session.stored().is_none());
        assert!(session.current_email().is_none());
    }

    #[test]
    fn test_sign_in_needs_browser_storage() {
        let err = BrowserSession.sign_in("artist@example.com").unwrap_err();
        assert!(matches!(err, TunecastError::Storage(_)));
    }

    #[tokio::test]
    async fn test_sign_out_without_session_succeeds() {
        assert!(BrowserSession.sign_out().await.is_ok());
    }

    fn context() -> AuthContext {
        AuthContext {
            session: Rc::new(BrowserSession),
            email: create_rw_signal(Some("artist@example.com".to_string())),
            loaded: create_rw_signal(true),
        }
    }

    #[test]
    fn test_current_email_is_reactive() {
        let runtime = create_runtime();
        let ctx = context();
        let label = {
            let ctx = ctx.clone();
            create_memo(move |_| ctx.current_email())
        };

        assert_eq!(label.get(), Some("artist@example.com".to_string()));
        ctx.email.set(Some("label@example.com".to_string()));
        assert_eq!(label.get(), Some("label@example.com".to_string()));
        ctx.email.set(None);
        assert_eq!(label.get(), None);

        runtime.dispose();
    }

    #[tokio::test]
    async fn test_context_sign_out_clears_email() {
        let runtime = create_runtime();
        let ctx = context();

        ctx.sign_out().await.unwrap();
        assert!(ctx.email.get_untracked().is_none());

        runtime.dispose();
    }

    #[test]
    fn test_stored_session_json() {
        let stored: StoredSession = serde_json::from_str(r#"{"email":"artist@example.com"}"#).unwrap();
        assert_eq!(stored.email, "artist@example.com");
    }
}
