use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use crate::config;
use crate::models::notice::Notice;
use crate::models::pending_deployment::PendingDeployment;
use crate::utils::random_token;

/// Records older than the notice delay plus this are dropped unvisited.
pub const STALE_RECORD_GRACE: Duration = Duration::from_secs(600);

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// How a finished submission ended, kept so a repeated POST or a waiting
/// page can find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Tracked(String),
    Failed(String),
}

#[derive(Clone)]
pub struct AppState {
    /// Notices waiting to be shown, keyed by session id.
    pub flash_store: Arc<Mutex<HashMap<String, Vec<Notice>>>>,
    /// Submission tokens whose API call is outstanding, with the app name.
    pub in_flight: Arc<Mutex<HashMap<String, String>>>,
    /// Finished submissions, keyed by submission token.
    pub submissions: Arc<Mutex<HashMap<String, (Instant, SubmissionOutcome)>>>,
    /// Deployments awaiting their success notice, keyed by tracking id.
    pub pending_deployments: Arc<Mutex<HashMap<String, PendingDeployment>>>,
    pub api_base_url: String,
    pub public_base_url: String,
    pub client: reqwest::Client,
    pub notice_delay: Duration,
    pub poll_interval: Duration,
}

impl AppState {
    pub fn new(api_base_url: impl Into<String>, public_base_url: impl Into<String>, client: reqwest::Client) -> Self {
        AppState {
            flash_store: Arc::new(Mutex::new(HashMap::new())),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
            submissions: Arc::new(Mutex::new(HashMap::new())),
            pending_deployments: Arc::new(Mutex::new(HashMap::new())),
            api_base_url: config::sanitize_base_url(&api_base_url.into()),
            public_base_url: public_base_url.into(),
            client,
            notice_delay: Duration::from_secs(config::DEFAULT_NOTICE_DELAY_SECS),
            poll_interval: Duration::from_secs(config::DEFAULT_POLL_INTERVAL_SECS),
        }
    }

    pub fn with_timing(mut self, notice_delay: Duration, poll_interval: Duration) -> Self {
        self.notice_delay = notice_delay;
        self.poll_interval = poll_interval;
        self
    }

    fn retention(&self) -> Duration {
        self.notice_delay + STALE_RECORD_GRACE
    }

    pub fn push_notice(&self, session_id: &str, notice: Notice) {
        lock(&self.flash_store).entry(session_id.to_string()).or_default().push(notice);
    }

    pub fn take_notices(&self, session_id: &str) -> Vec<Notice> {
        lock(&self.flash_store).remove(session_id).unwrap_or_default()
    }

    pub fn is_submitting(&self, token: &str) -> bool {
        lock(&self.in_flight).contains_key(token)
    }

    /// App name of the submission in flight under `token`.
    pub fn submitting_app(&self, token: &str) -> Option<String> {
        lock(&self.in_flight).get(token).cloned()
    }

    /// Marks `token` as in flight. `None` when it already is.
    pub fn begin_submission(&self, token: &str, app_name: &str) -> Option<SubmissionGuard> {
        let mut in_flight = lock(&self.in_flight);
        if in_flight.contains_key(token) {
            return None;
        }
        in_flight.insert(token.to_string(), app_name.to_string());
        Some(SubmissionGuard { in_flight: Arc::clone(&self.in_flight), token: token.to_string() })
    }

    pub fn record_submission(&self, token: &str, outcome: SubmissionOutcome) {
        let retention = self.retention();
        let mut submissions = lock(&self.submissions);
        submissions.retain(|_, (at, _)| at.elapsed() < retention);
        submissions.insert(token.to_string(), (Instant::now(), outcome));
    }

    pub fn submission_outcome(&self, token: &str) -> Option<SubmissionOutcome> {
        lock(&self.submissions).get(token).map(|(_, outcome)| outcome.clone())
    }

    /// Removes and returns a failed outcome so its notice is shown once.
    /// Tracked outcomes stay so repeated lookups keep redirecting.
    pub fn take_failed_submission(&self, token: &str) -> Option<String> {
        let mut submissions = lock(&self.submissions);
        match submissions.get(token) {
            Some((_, SubmissionOutcome::Failed(_))) => match submissions.remove(token) {
                Some((_, SubmissionOutcome::Failed(message))) => Some(message),
                _ => None,
            },
            _ => None,
        }
    }

    /// Stores a pending deployment and returns its tracking id. Records
    /// nobody came back for are swept here.
    pub fn track_deployment(&self, pending: PendingDeployment) -> String {
        let id = random_token();
        let retention = self.retention();
        let mut pending_deployments = lock(&self.pending_deployments);
        pending_deployments.retain(|_, p| p.started_at.elapsed() < retention);
        pending_deployments.insert(id.clone(), pending);
        id
    }

    pub fn pending_deployment(&self, tracking_id: &str) -> Option<PendingDeployment> {
        lock(&self.pending_deployments).get(tracking_id).cloned()
    }

    pub fn forget_deployment(&self, tracking_id: &str) -> Option<PendingDeployment> {
        lock(&self.pending_deployments).remove(tracking_id)
    }
}

/// Clears the in-flight mark when dropped.
pub struct SubmissionGuard {
    in_flight: Arc<Mutex<HashMap<String, String>>>,
    token: String,
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        lock(&self.in_flight).remove(&self.token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState::new("http://localhost:5000/", "", reqwest::Client::new())
    }

    #[test]
    fn api_base_is_sanitized() {
        assert_eq!(state().api_base_url, "http://localhost:5000");
    }

    #[test]
    fn notices_are_shown_once() {
        let s = state();
        s.push_notice("sid", Notice::info("Deployment Started!", "x"));
        assert_eq!(s.take_notices("sid").len(), 1);
        assert!(s.take_notices("sid").is_empty());
        assert!(s.take_notices("other").is_empty());
    }

    #[test]
    fn duplicate_submission_is_refused_until_guard_drops() {
        let s = state();
        let guard = s.begin_submission("tok", "demo").expect("first submission");
        assert!(s.is_submitting("tok"));
        assert_eq!(s.submitting_app("tok").as_deref(), Some("demo"));
        assert!(s.begin_submission("tok", "demo").is_none());
        drop(guard);
        assert!(!s.is_submitting("tok"));
        assert!(s.begin_submission("tok", "demo").is_some());
    }

    #[test]
    fn tracked_deployments_can_be_forgotten() {
        let s = state();
        let id = s.track_deployment(PendingDeployment::new("demo", None, None));
        assert_eq!(s.pending_deployment(&id).map(|p| p.app_name), Some("demo".to_string()));
        assert!(s.forget_deployment(&id).is_some());
        assert!(s.pending_deployment(&id).is_none());
    }

    #[test]
    fn failed_outcome_is_taken_once() {
        let s = state();
        s.record_submission("a", SubmissionOutcome::Tracked("t1".into()));
        s.record_submission("b", SubmissionOutcome::Failed("boom".into()));
        assert_eq!(s.take_failed_submission("a"), None);
        assert_eq!(s.submission_outcome("a"), Some(SubmissionOutcome::Tracked("t1".into())));
        assert_eq!(s.take_failed_submission("b").as_deref(), Some("boom"));
        assert_eq!(s.submission_outcome("b"), None);
    }

    #[test]
    fn stale_records_are_swept_on_insert() {
        let s = state().with_timing(Duration::ZERO, Duration::from_secs(1));
        let Some(long_ago) = Instant::now().checked_sub(STALE_RECORD_GRACE + Duration::from_secs(1)) else {
            return;
        };
        let old = PendingDeployment { started_at: long_ago, ..PendingDeployment::new("abandoned", None, None) };
        let old_id = s.track_deployment(old);
        assert!(s.pending_deployment(&old_id).is_some());
        let new_id = s.track_deployment(PendingDeployment::new("fresh", None, None));
        assert!(s.pending_deployment(&old_id).is_none());
        assert!(s.pending_deployment(&new_id).is_some());
    }
}
