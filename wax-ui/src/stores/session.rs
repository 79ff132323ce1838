//! Session state store
//!
//! One login domain's authentication state machine. The app holds two
//! independent instances (artist and admin) that share this code but no
//! state. All mutation goes through `begin_*` / `resolve`; async callers tag
//! each dispatched request with the sequence number returned by `begin_*` and
//! hand it back on resolution so stale responses can be discarded.

use crate::display_types::Profile;
use dioxus::prelude::*;
use tracing::debug;

/// Which login surface a session store authenticates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SessionDomain {
    Artist,
    Admin,
}

impl SessionDomain {
    /// Lowercase name used in logs and endpoint prefixes.
    pub fn label(&self) -> &'static str {
        match self {
            SessionDomain::Artist => "artist",
            SessionDomain::Admin => "admin",
        }
    }
}

/// Authentication status of one session domain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Nothing known yet; silent verification has not started.
    #[default]
    Unknown,
    /// A verify/login/logout call is in flight.
    Verifying,
    /// A valid session exists; `profile` is set.
    Authenticated,
    /// No valid session; `profile` is absent.
    Unauthenticated,
}

/// Failure recorded on the session after an attempt resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// Rejected credentials. Shown at the login form; not retryable as-is.
    InvalidCredentials(String),
    /// Transport failure. The UI offers a retry.
    Network(String),
    /// Unexpected server response.
    Server { status: u16, message: String },
}

impl SessionError {
    /// Whether the UI should offer a retry affordance for this error.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, SessionError::InvalidCredentials(_))
    }

    pub fn message(&self) -> &str {
        match self {
            SessionError::InvalidCredentials(m) => m,
            SessionError::Network(m) => m,
            SessionError::Server { message, .. } => message,
        }
    }
}

/// How a dispatched auth call resolved.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    /// Verify or login succeeded with this profile.
    Authenticated(Profile),
    /// The server reported no valid session (expected case, kept silent).
    Unauthenticated,
    /// Bad credentials or transport/server failure.
    Failed(SessionError),
    /// Logout finished. Local state clears regardless of the server outcome.
    LoggedOut,
}

/// One login domain's session state.
///
/// `profile` is `Some` iff `status == Authenticated`; `begin_*`/`resolve`
/// preserve that invariant across every transition.
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct SessionState {
    pub status: SessionStatus,
    pub profile: Option<Profile>,
    /// Last failure, cleared on any new attempt.
    pub last_error: Option<SessionError>,
    /// Tag handed to the most recently dispatched call.
    pub issued_seq: u64,
    /// Tag of the response that last committed state.
    pub committed_seq: u64,
}

impl SessionState {
    fn begin_attempt(&mut self) -> u64 {
        self.status = SessionStatus::Verifying;
        self.profile = None;
        self.last_error = None;
        self.issued_seq += 1;
        self.issued_seq
    }

    /// Start a (re-)verification against the session cookie.
    pub fn begin_verify(&mut self) -> u64 {
        self.begin_attempt()
    }

    /// Start a login attempt. Dispatching the call is the caller's job.
    pub fn begin_login(&mut self) -> u64 {
        self.begin_attempt()
    }

    /// Start a logout. The eventual outcome is always `Unauthenticated`.
    pub fn begin_logout(&mut self) -> u64 {
        self.begin_attempt()
    }

    /// Commit the outcome of the call tagged `seq`.
    ///
    /// Only the most recently issued call may commit, and never twice:
    /// superseded calls are not cancelled, their responses are dropped here.
    /// Returns whether the outcome was committed.
    pub fn resolve(&mut self, seq: u64, outcome: SessionOutcome) -> bool {
        if seq != self.issued_seq || seq <= self.committed_seq {
            debug!(
                seq,
                issued = self.issued_seq,
                committed = self.committed_seq,
                "discarding stale session response"
            );
            return false;
        }
        self.committed_seq = seq;

        match outcome {
            SessionOutcome::Authenticated(profile) => {
                self.status = SessionStatus::Authenticated;
                self.profile = Some(profile);
            }
            SessionOutcome::Unauthenticated => {
                self.status = SessionStatus::Unauthenticated;
                self.profile = None;
            }
            SessionOutcome::Failed(error) => {
                self.status = SessionStatus::Unauthenticated;
                self.profile = None;
                self.last_error = Some(error);
            }
            SessionOutcome::LoggedOut => {
                self.status = SessionStatus::Unauthenticated;
                self.profile = None;
            }
        }
        true
    }

    /// Back to the initial state (page-level teardown).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The current principal's profile, present only while authenticated.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// True while the first resolution is still pending (`Unknown`) or a call
    /// is in flight (`Verifying`). Guards show a placeholder in this window.
    pub fn is_resolving(&self) -> bool {
        matches!(self.status, SessionStatus::Unknown | SessionStatus::Verifying)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn profile(id: i64) -> Profile {
        Profile {
            id,
            username: format!("user{id}"),
            email: format!("user{id}@example.com"),
            role: None,
        }
    }

    fn invariant_holds(s: &SessionState) -> bool {
        s.profile.is_some() == (s.status == SessionStatus::Authenticated)
    }

    #[test]
    fn starts_unknown() {
        let s = SessionState::default();
        assert_eq!(s.status, SessionStatus::Unknown);
        assert!(s.profile.is_none());
        assert!(s.is_resolving());
    }

    #[test]
    fn verify_success_authenticates() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        assert_eq!(s.status, SessionStatus::Verifying);
        assert!(s.resolve(seq, SessionOutcome::Authenticated(profile(1))));
        assert_eq!(s.status, SessionStatus::Authenticated);
        assert_eq!(s.profile().map(|p| p.id), Some(1));
        assert!(s.last_error.is_none());
    }

    #[test]
    fn verify_without_cookie_is_silent() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        assert!(s.resolve(seq, SessionOutcome::Unauthenticated));
        assert_eq!(s.status, SessionStatus::Unauthenticated);
        assert!(s.profile.is_none());
        // Expected "no session" records no error.
        assert!(s.last_error.is_none());
    }

    #[test]
    fn verify_transport_failure_records_error() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        let err = SessionError::Network("connection refused".into());
        assert!(s.resolve(seq, SessionOutcome::Failed(err.clone())));
        assert_eq!(s.status, SessionStatus::Unauthenticated);
        assert_eq!(s.last_error, Some(err));
        assert!(s.last_error.as_ref().unwrap().is_retryable());
    }

    #[test]
    fn login_failure_keeps_no_partial_profile() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        s.resolve(seq, SessionOutcome::Unauthenticated);

        let seq = s.begin_login();
        assert_eq!(s.status, SessionStatus::Verifying);
        let err = SessionError::InvalidCredentials("wrong password".into());
        assert!(s.resolve(seq, SessionOutcome::Failed(err.clone())));
        assert_eq!(s.status, SessionStatus::Unauthenticated);
        assert!(s.profile.is_none());
        assert_eq!(s.last_error, Some(err));
        assert!(!s.last_error.as_ref().unwrap().is_retryable());
    }

    #[test]
    fn new_attempt_clears_last_error() {
        let mut s = SessionState::default();
        let seq = s.begin_login();
        s.resolve(
            seq,
            SessionOutcome::Failed(SessionError::InvalidCredentials("nope".into())),
        );
        assert!(s.last_error.is_some());
        s.begin_login();
        assert!(s.last_error.is_none());
    }

    #[test]
    fn logout_clears_profile_regardless_of_server_outcome() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        s.resolve(seq, SessionOutcome::Authenticated(profile(7)));

        // Even when the server call failed, the caller resolves LoggedOut.
        let seq = s.begin_logout();
        assert_eq!(s.status, SessionStatus::Verifying);
        assert!(s.resolve(seq, SessionOutcome::LoggedOut));
        assert_eq!(s.status, SessionStatus::Unauthenticated);
        assert!(s.profile.is_none());
    }

    #[test]
    fn manual_reverify_from_authenticated() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        s.resolve(seq, SessionOutcome::Authenticated(profile(2)));

        let seq = s.begin_verify();
        assert_eq!(s.status, SessionStatus::Verifying);
        assert!(invariant_holds(&s));
        s.resolve(seq, SessionOutcome::Authenticated(profile(2)));
        assert!(s.is_authenticated());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut s = SessionState::default();
        let first = s.begin_verify();
        let second = s.begin_verify();

        // The fresher call resolves first and commits.
        assert!(s.resolve(second, SessionOutcome::Authenticated(profile(3))));
        // The superseded call resolves last chronologically; it must not
        // clobber the fresher result.
        assert!(!s.resolve(first, SessionOutcome::Unauthenticated));
        assert!(s.is_authenticated());
    }

    #[test]
    fn early_response_to_superseded_call_is_discarded() {
        let mut s = SessionState::default();
        let first = s.begin_verify();
        let _second = s.begin_verify();

        // The older call resolves before the newer one: still discarded.
        assert!(!s.resolve(first, SessionOutcome::Authenticated(profile(4))));
        assert_eq!(s.status, SessionStatus::Verifying);
        assert!(s.profile.is_none());
    }

    #[test]
    fn resolve_commits_at_most_once() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        assert!(s.resolve(seq, SessionOutcome::Authenticated(profile(5))));
        assert!(!s.resolve(seq, SessionOutcome::Unauthenticated));
        assert!(s.is_authenticated());
    }

    #[test]
    fn domain_isolation() {
        let mut artist = SessionState::default();
        let mut admin = SessionState::default();

        let seq = artist.begin_verify();
        artist.resolve(seq, SessionOutcome::Authenticated(profile(1)));
        let seq = admin.begin_verify();
        admin.resolve(seq, SessionOutcome::Authenticated(profile(2)));

        let seq = artist.begin_logout();
        artist.resolve(seq, SessionOutcome::LoggedOut);

        assert_eq!(artist.status, SessionStatus::Unauthenticated);
        assert_eq!(admin.status, SessionStatus::Authenticated);
        assert_eq!(admin.profile().map(|p| p.id), Some(2));
    }

    #[test]
    fn reset_returns_to_unknown() {
        let mut s = SessionState::default();
        let seq = s.begin_verify();
        s.resolve(seq, SessionOutcome::Authenticated(profile(9)));
        s.reset();
        assert_eq!(s, SessionState::default());
    }

    fn arb_outcome() -> impl Strategy<Value = SessionOutcome> {
        prop_oneof![
            (1i64..100).prop_map(|id| SessionOutcome::Authenticated(profile(id))),
            Just(SessionOutcome::Unauthenticated),
            Just(SessionOutcome::Failed(SessionError::Network("down".into()))),
            Just(SessionOutcome::LoggedOut),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: for any set of in-flight calls resolving in any order,
        /// the committed state corresponds to the call with the highest
        /// issuance sequence number.
        #[test]
        fn last_issued_call_wins(
            outcomes in prop::collection::vec(arb_outcome(), 1..8),
            order in prop::collection::vec(0usize..8, 1..16),
        ) {
            let mut s = SessionState::default();
            let seqs: Vec<u64> = outcomes.iter().map(|_| s.begin_verify()).collect();
            let last = *seqs.last().unwrap();

            // Resolve in an arbitrary (possibly repeating) order.
            for &i in order.iter() {
                let i = i % seqs.len();
                s.resolve(seqs[i], outcomes[i].clone());
                prop_assert!(invariant_holds(&s));
            }
            // Make sure the freshest call resolves at some point.
            s.resolve(last, outcomes[outcomes.len() - 1].clone());
            prop_assert!(invariant_holds(&s));

            let expected = match &outcomes[outcomes.len() - 1] {
                SessionOutcome::Authenticated(p) => {
                    (SessionStatus::Authenticated, Some(p.clone()))
                }
                _ => (SessionStatus::Unauthenticated, None),
            };
            prop_assert_eq!(s.status, expected.0);
            prop_assert_eq!(s.profile, expected.1);
        }

        /// Property: the profile/status invariant holds after every event in
        /// any interleaving of begins and resolutions.
        #[test]
        fn invariant_holds_under_any_interleaving(
            ops in prop::collection::vec((0u8..4, arb_outcome()), 1..32),
        ) {
            let mut s = SessionState::default();
            let mut in_flight: Vec<u64> = Vec::new();

            for (op, outcome) in ops {
                match op {
                    0 => in_flight.push(s.begin_verify()),
                    1 => in_flight.push(s.begin_login()),
                    2 => in_flight.push(s.begin_logout()),
                    _ => {
                        if let Some(seq) = in_flight.pop() {
                            s.resolve(seq, outcome);
                        }
                    }
                }
                prop_assert!(invariant_holds(&s));
            }
        }
    }
}
