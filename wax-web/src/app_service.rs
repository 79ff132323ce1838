//! AppService - owns the reactive state and drives the API facade.
//!
//! AppService owns the `Store<AppState>` and is responsible for:
//! - Issuing session transitions (`begin_*`) and dispatching the matching
//!   API call in a spawned task
//! - Resolving transitions with the tagged sequence number so stale
//!   responses never clobber fresher ones
//! - The one-shot catalog fetch at startup, plus explicit refresh
//!
//! UI components access AppService via `use_app()` and read state reactively
//! through `app.state` lenses.

use crate::api::{ApiClient, ApiError};
use dioxus::prelude::*;
use tracing::{debug, info, warn};
use wax_ui::display_types::Credentials;
use wax_ui::stores::{
    AppState, AppStateStoreExt, SessionDomain, SessionError, SessionOutcome, SessionState,
    UiStateStoreExt,
};

/// Map a facade failure onto the session store's error type.
fn session_error(err: ApiError) -> SessionError {
    match err {
        ApiError::Http(e) => SessionError::Network(e.to_string()),
        ApiError::Auth(m) | ApiError::Validation(m) => SessionError::InvalidCredentials(m),
        ApiError::Unauthenticated => {
            SessionError::InvalidCredentials("invalid email or password".to_string())
        }
        ApiError::NotFound => SessionError::Server {
            status: 404,
            message: "not found".to_string(),
        },
        ApiError::Server { status, message } => SessionError::Server { status, message },
    }
}

/// Main application service.
///
/// Created inside the Dioxus component tree because `Store<AppState>` is not
/// Send-safe. Access via `use_app()` from any component.
#[derive(Clone)]
pub struct AppService {
    /// Reactive application state (Store for fine-grained reactivity).
    pub state: Store<AppState>,
    /// HTTP client facade.
    pub api: ApiClient,
}

impl AppService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            state: Store::new(AppState::default()),
            api,
        }
    }

    /// Kick off the app-start work: silent verification of both session
    /// domains and the one-shot catalog fetch. The three are independent;
    /// a catalog failure says nothing about authentication.
    pub fn start(&self) {
        self.verify(SessionDomain::Artist);
        self.verify(SessionDomain::Admin);
        self.load_catalog();
    }

    /// Run `f` against the given domain's session store.
    fn with_session<R>(
        &self,
        domain: SessionDomain,
        f: impl FnOnce(&mut SessionState) -> R,
    ) -> R {
        match domain {
            SessionDomain::Artist => {
                let mut binding = self.state.artist_session();
                let mut s = binding.write();
                f(&mut s)
            }
            SessionDomain::Admin => {
                let mut binding = self.state.admin_session();
                let mut s = binding.write();
                f(&mut s)
            }
        }
    }

    // =========================================================================
    // Sessions
    // =========================================================================

    /// (Re-)verify one domain against its cookie. Safe to call repeatedly;
    /// overlapping calls collapse to the latest outcome via the sequence tag.
    pub fn verify(&self, domain: SessionDomain) {
        let seq = self.with_session(domain, |s| s.begin_verify());
        debug!(domain = domain.label(), seq, "verifying session");

        let service = self.clone();
        spawn(async move {
            let outcome = match service.api.verify_session(domain).await {
                Ok(profile) => {
                    info!(domain = domain.label(), "session verified");
                    SessionOutcome::Authenticated(profile)
                }
                Err(ApiError::Unauthenticated) => {
                    debug!(domain = domain.label(), "no active session");
                    SessionOutcome::Unauthenticated
                }
                Err(e) => {
                    warn!(domain = domain.label(), "session verification failed: {e}");
                    SessionOutcome::Failed(session_error(e))
                }
            };
            service.with_session(domain, |s| s.resolve(seq, outcome));
        });
    }

    /// Log in to one domain. Failure leaves the store `Unauthenticated` with
    /// `last_error` set; no partial profile is ever stored.
    pub fn login(&self, domain: SessionDomain, credentials: Credentials) {
        let seq = self.with_session(domain, |s| s.begin_login());
        debug!(domain = domain.label(), seq, "logging in");

        let service = self.clone();
        spawn(async move {
            let outcome = match service.api.login(domain, &credentials).await {
                Ok(profile) => {
                    info!(domain = domain.label(), "login succeeded");
                    SessionOutcome::Authenticated(profile)
                }
                Err(e) => {
                    warn!(domain = domain.label(), "login failed: {e}");
                    SessionOutcome::Failed(session_error(e))
                }
            };
            service.with_session(domain, |s| s.resolve(seq, outcome));
        });
    }

    /// Log out of one domain. Best-effort: local state clears even when the
    /// server call fails, leaving at worst an orphaned server-side cookie.
    pub fn logout(&self, domain: SessionDomain) {
        let seq = self.with_session(domain, |s| s.begin_logout());
        debug!(domain = domain.label(), seq, "logging out");

        let service = self.clone();
        spawn(async move {
            if let Err(e) = service.api.logout(domain).await {
                warn!(domain = domain.label(), "logout request failed: {e}");
            }
            service.with_session(domain, |s| s.resolve(seq, SessionOutcome::LoggedOut));
        });
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Bulk-fetch the artist listing. On failure the cache stays empty with
    /// the failure flag set; there is no automatic retry.
    pub fn load_catalog(&self) {
        self.state.catalog().write().begin_fetch();

        let service = self.clone();
        spawn(async move {
            match service.api.list_artists().await {
                Ok(artists) => {
                    info!(count = artists.len(), "catalog loaded");
                    service.state.catalog().write().fetch_succeeded(artists);
                }
                Err(e) => {
                    warn!("catalog fetch failed: {e}");
                    service.state.catalog().write().fetch_failed(e.to_string());
                }
            }
        });
    }

    /// Explicit refresh for consumers; same wholesale replacement as the
    /// startup fetch.
    pub fn refresh_catalog(&self) {
        self.load_catalog();
    }

    // =========================================================================
    // Notices
    // =========================================================================

    /// Show a dismissible notice for an unexpected error.
    pub fn notify(&self, message: impl Into<String>) {
        self.state.ui().notice().set(Some(message.into()));
    }

    pub fn dismiss_notice(&self) {
        self.state.ui().notice().set(None);
    }
}

/// Hook to access the AppService from any component.
pub fn use_app() -> AppService {
    use_context::<AppService>()
}
