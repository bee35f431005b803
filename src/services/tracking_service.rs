use crate::api::{fetch_webapp_status, WebappStatus};
use crate::models::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackingOutcome {
    Pending { app_name: String, status: String },
    Live { public_ip: Option<String> },
    Failed { message: String },
}

impl TrackingOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TrackingOutcome::Pending { .. })
    }
}

/// Works out where a tracked deployment stands. Returns `None` for an
/// unknown tracking id. Terminal outcomes drop the record, and only the
/// caller that drops it gets the outcome.
///
/// When the create response carried an id the API is queried for the
/// instance status; without a terminal status the deployment is reported
/// live once the notice delay has passed.
pub async fn resolve_deployment(state: &AppState, tracking_id: &str) -> Option<TrackingOutcome> {
    let pending = state.pending_deployment(tracking_id)?;
    let mut outcome = TrackingOutcome::Pending { app_name: pending.app_name.clone(), status: String::new() };

    if let Some(webapp_id) = pending.webapp_id.as_deref() {
        match fetch_webapp_status(&state.client, &state.api_base_url, webapp_id).await {
            Ok(WebappStatus::Live { public_ip }) => {
                outcome = TrackingOutcome::Live { public_ip: public_ip.or_else(|| pending.public_ip.clone()) };
            }
            Ok(WebappStatus::Failed(message)) => {
                outcome = TrackingOutcome::Failed { message };
            }
            Ok(WebappStatus::Pending(status)) => {
                outcome = TrackingOutcome::Pending { app_name: pending.app_name.clone(), status };
            }
            Err(e) => {
                tracing::warn!(%e, webapp_id, "Deployment status lookup failed");
            }
        }
    }

    if !outcome.is_terminal() && pending.started_at.elapsed() >= state.notice_delay {
        outcome = TrackingOutcome::Live { public_ip: pending.public_ip.clone() };
    }
    if outcome.is_terminal() {
        state.forget_deployment(tracking_id)?;
        tracing::info!(tracking_id, app = %pending.app_name, ?outcome, "Deployment tracking finished");
    }
    Some(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PendingDeployment;
    use std::time::Duration;

    fn state(delay: Duration) -> AppState {
        AppState::new("http://127.0.0.1:9", "", reqwest::Client::new()).with_timing(delay, Duration::from_secs(1))
    }

    #[tokio::test]
    async fn unknown_tracking_id_is_none() {
        assert_eq!(resolve_deployment(&state(Duration::ZERO), "nope").await, None);
    }

    #[tokio::test]
    async fn without_id_waits_for_the_notice_delay() {
        let s = state(Duration::from_secs(3600));
        let id = s.track_deployment(PendingDeployment::new("demo", Some("1.2.3.4".into()), None));
        let outcome = resolve_deployment(&s, &id).await;
        assert_eq!(outcome, Some(TrackingOutcome::Pending { app_name: "demo".into(), status: String::new() }));
        assert!(s.pending_deployment(&id).is_some());
    }

    #[tokio::test]
    async fn elapsed_delay_reports_live_and_forgets() {
        let s = state(Duration::ZERO);
        let id = s.track_deployment(PendingDeployment::new("demo", Some("1.2.3.4".into()), None));
        let outcome = resolve_deployment(&s, &id).await;
        assert_eq!(outcome, Some(TrackingOutcome::Live { public_ip: Some("1.2.3.4".into()) }));
        assert!(s.pending_deployment(&id).is_none());
    }

    #[tokio::test]
    async fn concurrent_refreshes_report_once() {
        let s = state(Duration::ZERO);
        let id = s.track_deployment(PendingDeployment::new("demo", None, None));
        let (a, b) = tokio::join!(resolve_deployment(&s, &id), resolve_deployment(&s, &id));
        assert_eq!([a, b].iter().filter(|o| o.is_some()).count(), 1);
    }
}
