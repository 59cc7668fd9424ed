use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::time::{interval, Duration, MissedTickBehavior};

use super::engine::ExamSession;
use super::grading::GradeSummary;

/// Once-per-second driver over a shared session. Stops as soon as the
/// session finishes by any path, so an explicit submit from another caller
/// cancels the countdown and a timeout can never double-submit. Returns the
/// grade summary when the countdown itself expired the session, `None` when
/// someone else finished it first.
pub async fn drive(session: Arc<Mutex<ExamSession>>) -> Option<GradeSummary> {
    let mut ticker = interval(Duration::from_secs(1));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first interval tick fires immediately; skip it so each later tick
    // marks one elapsed second.
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let mut session = session.lock().await;
        if session.is_finished() {
            tracing::debug!("Countdown cancelled; session already finished");
            return None;
        }
        if let Some(summary) = session.tick() {
            tracing::info!(score = summary.percentage, "Exam time exhausted; auto-submitted");
            return Some(summary);
        }
    }
}
