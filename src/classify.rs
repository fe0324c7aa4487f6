//! Guess which course a task belongs to, and what kind of task it is, from its title

use once_cell::sync::Lazy;
use regex::Regex;

use crate::settings::UNKNOWN_COURSE;
use crate::task::TaskType;

static BRACKETED_COURSE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\]]+)\]").unwrap(/* this is a valid regex */)
});

static COURSE_CODE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:eng|ece|rhet|cs|math)_\d+").unwrap(/* this is a valid regex */)
});

/// Keywords that identify a task type. The first matching row wins
const TYPE_KEYWORDS: &[(&[&str], TaskType)] = &[
    (&["exam", "final"], TaskType::Exam),
    (&["lecture", "class"], TaskType::Lecture),
    (&["assignment", "homework"], TaskType::Assignment),
    (&["quiz", "test"], TaskType::Quiz),
];

/// The result of [`classify`]
#[derive(Clone, Debug, PartialEq)]
pub struct Classification {
    pub course: String,
    pub task_type: TaskType,
}

/// Classify a task title. This never fails, a missing title gives default values.
pub fn classify(title: Option<&str>) -> Classification {
    match title {
        None => Classification {
            course: UNKNOWN_COURSE.to_string(),
            task_type: TaskType::default(),
        },
        Some(title) => Classification {
            course: course_of(title),
            task_type: type_of(title),
        },
    }
}

/// A `[bracketed]` course has priority over a known course code
fn course_of(title: &str) -> String {
    if let Some(caps) = BRACKETED_COURSE.captures(title) {
        return caps[1].to_string();
    }
    if let Some(code) = COURSE_CODE.find(title) {
        return code.as_str().to_string();
    }
    UNKNOWN_COURSE.to_string()
}

fn type_of(title: &str) -> TaskType {
    let title = title.to_lowercase();
    TYPE_KEYWORDS.iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| title.contains(kw)))
        .map(|(_, task_type)| *task_type)
        .unwrap_or_default()
}
