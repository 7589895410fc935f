//! Interval, announcement and session state types

use crate::planner::Task;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    Work,
    Break,
}

/// A timed span. Work intervals belong to a task; breaks belong to none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interval {
    pub kind: IntervalKind,
    pub task: Option<Task>,
    pub duration: Duration,
    /// Offsets from the start at which a reminder fires, all strictly before `duration`
    pub checkpoints: Vec<Duration>,
}

impl Interval {
    pub fn work(task: Task, duration: Duration, reminder_every: Option<Duration>) -> Self {
        let checkpoints = match reminder_every {
            Some(step) if !step.is_zero() => {
                std::iter::successors(Some(step), |at| at.checked_add(step))
                    .take_while(|at| *at < duration)
                    .collect()
            }
            _ => Vec::new(),
        };

        Self {
            kind: IntervalKind::Work,
            task: Some(task),
            duration,
            checkpoints,
        }
    }

    pub fn rest(duration: Duration) -> Self {
        Self {
            kind: IntervalKind::Break,
            task: None,
            duration,
            checkpoints: Vec::new(),
        }
    }

    /// Lengths of the sleeps between consecutive checkpoints, ending at `duration`
    pub fn segments(&self) -> Vec<Duration> {
        let mut previous = Duration::ZERO;
        self.checkpoints
            .iter()
            .copied()
            .chain(std::iter::once(self.duration))
            .map(|boundary| {
                let segment = boundary - previous;
                previous = boundary;
                segment
            })
            .collect()
    }
}

/// A user-facing notification tied to a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Announcement {
    WorkStarted { task: String, minutes: u64 },
    Reminder { task: String },
    WorkFinished { break_minutes: u64 },
    BreakFinished,
    AllCompleted,
}

impl std::fmt::Display for Announcement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Announcement::WorkStarted { task, minutes } => write!(
                f,
                "ATTENTION! Starting {}-minute focus session for: {}",
                minutes, task
            ),
            Announcement::Reminder { task } => write!(f, "REMINDER! You're working on: {}", task),
            Announcement::WorkFinished { break_minutes } => {
                write!(f, "TIME'S UP! Take a {}-minute break!", break_minutes)
            }
            Announcement::BreakFinished => write!(f, "BREAK'S OVER! Get back to work!"),
            Announcement::AllCompleted => write!(f, "ALL TASKS COMPLETED! Great job, soldier!"),
        }
    }
}

/// Where the runner is, per subtask index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    WorkPending { index: usize },
    Working { index: usize },
    BreakPending { index: usize },
    OnBreak { index: usize },
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed,
    Cancelled,
}

/// What a run did, in the order it happened
#[derive(Debug, Clone)]
pub struct SessionReport {
    pub outcome: SessionOutcome,
    pub completed_tasks: usize,
    pub announcements: Vec<Announcement>,
}
