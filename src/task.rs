//! Coursework tasks, as derived from calendar events

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::classify::{classify, Classification};
use crate::event::EventRecord;
use crate::ical::Timestamp;
use crate::settings::UNTITLED_TASK;

/// What kind of coursework a task is
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Exam,
    Lecture,
    Assignment,
    Quiz,
    Task,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Exam => "exam",
            TaskType::Lecture => "lecture",
            TaskType::Assignment => "assignment",
            TaskType::Quiz => "quiz",
            TaskType::Task => "task",
        }
    }
}

impl Default for TaskType {
    fn default() -> Self {
        TaskType::Task
    }
}

impl Display for TaskType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}


/// A piece of coursework.
///
/// Tasks are read-only views over an [`EventRecord`]: they are never modified once created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// The event summary, or a placeholder if it had none
    title: String,
    /// When this task is due (or starts). `None` if the feed contained an unparseable date
    date: Timestamp,
    /// The event description, or an empty string
    description: String,
    /// A link to the task, or an empty string
    url: String,
    /// The course code, or [`crate::settings::UNKNOWN_COURSE`]
    course: String,
    #[serde(rename = "type")]
    task_type: TaskType,
}

impl Task {
    pub fn new(title: String, date: Timestamp, description: String, url: String, course: String, task_type: TaskType) -> Self {
        Self { title, date, description, url, course, task_type }
    }

    pub fn title(&self) -> &str           { &self.title       }
    pub fn date(&self) -> Timestamp       { self.date         }
    pub fn description(&self) -> &str     { &self.description }
    pub fn url(&self) -> &str             { &self.url         }
    pub fn course(&self) -> &str          { &self.course      }
    pub fn task_type(&self) -> TaskType   { self.task_type    }

    /// Whether a renderer can offer to open this task in a browser
    pub fn has_url(&self) -> bool {
        self.url.is_empty() == false
    }
}

impl From<&EventRecord> for Task {
    fn from(record: &EventRecord) -> Self {
        let Classification { course, task_type } = classify(record.summary());
        let title = record.summary().unwrap_or(UNTITLED_TASK).to_string();

        Self::new(
            title,
            record.start(),
            record.description().unwrap_or_default().to_string(),
            record.url().unwrap_or_default().to_string(),
            course,
            task_type,
        )
    }
}
