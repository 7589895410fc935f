//! Interactive subtask review menu
//!
//! Shows the current list and loops on start / edit / regenerate until the
//! user starts the sessions. Bad input is reported and the menu shown again.

use crate::error::PlannerError;
use crate::planner::{SubtaskList, TaskPlanner};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

/// Line-based prompt over any reader/writer pair
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one trimmed line. `None` means end of input.
    pub fn prompt(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Start,
    Edit,
    Regenerate,
}

impl std::str::FromStr for MenuChoice {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::Start),
            "2" => Ok(MenuChoice::Edit),
            "3" => Ok(MenuChoice::Regenerate),
            other => Err(PlannerError::InvalidMenuChoice(other.to_string())),
        }
    }
}

pub fn print_subtasks<W: Write>(output: &mut W, list: &SubtaskList) -> io::Result<()> {
    for (i, task) in list.iter().enumerate() {
        writeln!(output, "{}. {}", i + 1, task)?;
    }
    Ok(())
}

/// Run the menu until the user starts the sessions. Returns `None` if input ends first.
pub async fn review_subtasks<R: BufRead, W: Write>(
    planner: &TaskPlanner,
    main_task: &str,
    initial: SubtaskList,
    console: &mut Console<R, W>,
) -> anyhow::Result<Option<SubtaskList>> {
    let mut list = initial;

    loop {
        console.say("\nGenerated subtasks:")?;
        print_subtasks(&mut console.output, &list)?;
        console.say("\nOptions:")?;
        console.say("1. Start Pomodoro sessions")?;
        console.say("2. Edit a task")?;
        console.say("3. Regenerate tasks")?;

        let Some(answer) = console.prompt("\nEnter your choice (1-3): ")? else {
            return Ok(None);
        };

        match answer.parse::<MenuChoice>() {
            Ok(MenuChoice::Start) => return Ok(Some(TaskPlanner::confirm(list))),
            Ok(MenuChoice::Edit) => match edit_task(console, &list)? {
                None => return Ok(None),
                Some(Ok(edited)) => list = edited,
                Some(Err(e)) => console.say(&format!("{}!", e))?,
            },
            Ok(MenuChoice::Regenerate) => {
                console.say("Regenerating subtasks...")?;
                match planner.generate(main_task).await {
                    Ok(fresh) => list = fresh,
                    Err(e) => {
                        warn!("Regeneration failed: {}", e);
                        console.say(&format!(
                            "Failed to regenerate tasks: {}. Keeping the current list.",
                            e
                        ))?;
                    }
                }
            }
            Err(e) => {
                debug!("Rejected menu input {:?}", answer);
                console.say(&format!("{}!", e))?;
            }
        }
    }
}

/// Ask for a task number and its new text. Outer `None` means end of input.
fn edit_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    list: &SubtaskList,
) -> io::Result<Option<Result<SubtaskList, PlannerError>>> {
    let Some(raw) = console.prompt("Enter task number to edit: ")? else {
        return Ok(None);
    };

    let index = match raw.parse::<usize>() {
        Ok(n) => n,
        Err(_) => return Ok(Some(Err(PlannerError::InvalidNumber(raw)))),
    };

    let Some(current) = list.get(index) else {
        return Ok(Some(Err(PlannerError::IndexOutOfRange {
            index,
            len: list.len(),
        })));
    };

    let question = format!("Edit task {} (currently: {}): ", index, current);
    let Some(new_text) = console.prompt(&question)? else {
        return Ok(None);
    };

    Ok(Some(TaskPlanner::edit(list, index, &new_text)))
}
