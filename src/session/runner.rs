use crate::config::SessionConfig;
use crate::planner::{SubtaskList, Task};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::announce::Announcer;
use super::clock::Clock;
use super::types::{Announcement, Interval, SessionOutcome, SessionReport, SessionState};

/// Runs one work interval and one break per subtask, strictly in order
pub struct SessionRunner {
    work_duration: Duration,
    break_duration: Duration,
    reminder_every: Option<Duration>,
    clock: Arc<dyn Clock>,
    announcer: Arc<dyn Announcer>,
    cancel: CancellationToken,
}

impl SessionRunner {
    pub fn new(
        config: &SessionConfig,
        clock: Arc<dyn Clock>,
        announcer: Arc<dyn Announcer>,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            work_duration: config.work_duration(),
            break_duration: config.break_duration(),
            reminder_every: config.reminder_interval(),
            clock,
            announcer,
            cancel,
        }
    }

    pub async fn run(&self, subtasks: SubtaskList) -> SessionReport {
        let tasks: Vec<Task> = subtasks.into_tasks();
        let mut report = SessionReport {
            outcome: SessionOutcome::Cancelled,
            completed_tasks: 0,
            announcements: Vec::new(),
        };

        info!("Starting sessions for {} subtasks", tasks.len());

        let mut state = SessionState::WorkPending { index: 0 };
        loop {
            debug!(?state, "Session state");
            state = match state {
                SessionState::WorkPending { index } => {
                    if self.cancel.is_cancelled() {
                        return report;
                    }
                    self.emit(
                        &mut report,
                        Announcement::WorkStarted {
                            task: tasks[index].description().to_string(),
                            minutes: whole_minutes(self.work_duration),
                        },
                    )
                    .await;
                    SessionState::Working { index }
                }
                SessionState::Working { index } => {
                    let interval =
                        Interval::work(tasks[index].clone(), self.work_duration, self.reminder_every);
                    if !self.run_interval(&interval, &mut report).await {
                        return report;
                    }
                    self.emit(
                        &mut report,
                        Announcement::WorkFinished {
                            break_minutes: whole_minutes(self.break_duration),
                        },
                    )
                    .await;
                    SessionState::BreakPending { index }
                }
                SessionState::BreakPending { index } => SessionState::OnBreak { index },
                SessionState::OnBreak { index } => {
                    let interval = Interval::rest(self.break_duration);
                    if !self.run_interval(&interval, &mut report).await {
                        return report;
                    }
                    self.emit(&mut report, Announcement::BreakFinished).await;
                    report.completed_tasks += 1;

                    if index + 1 < tasks.len() {
                        SessionState::WorkPending { index: index + 1 }
                    } else {
                        SessionState::Done
                    }
                }
                SessionState::Done => {
                    self.emit(&mut report, Announcement::AllCompleted).await;
                    report.outcome = SessionOutcome::Completed;
                    return report;
                }
            };
        }
    }

    /// Sleep through the interval, announcing a reminder at each checkpoint.
    /// Returns false if cancelled.
    async fn run_interval(&self, interval: &Interval, report: &mut SessionReport) -> bool {
        debug!(
            kind = ?interval.kind,
            duration = ?interval.duration,
            checkpoints = interval.checkpoints.len(),
            "Interval started"
        );

        let segments = interval.segments();
        let last = segments.len() - 1;

        for (i, segment) in segments.into_iter().enumerate() {
            if !self.wait(segment).await {
                info!("Session cancelled");
                return false;
            }
            if i < last {
                if let Some(task) = &interval.task {
                    self.emit(
                        report,
                        Announcement::Reminder {
                            task: task.description().to_string(),
                        },
                    )
                    .await;
                }
            }
        }

        true
    }

    async fn wait(&self, duration: Duration) -> bool {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => false,
            _ = self.clock.sleep(duration) => true,
        }
    }

    async fn emit(&self, report: &mut SessionReport, announcement: Announcement) {
        let text = announcement.to_string();
        if let Err(e) = self.announcer.announce(&text).await {
            warn!("Announcement failed: {}", e);
        }
        report.announcements.push(announcement);
    }
}

fn whole_minutes(duration: Duration) -> u64 {
    duration.as_secs() / 60
}
