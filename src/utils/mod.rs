//! Some utility functions, mostly to display tasks

use chrono::Local;

use crate::settings::DESCRIPTION_PREVIEW_LEN;
use crate::task::TaskType;
use crate::Task;

/// The first [`DESCRIPTION_PREVIEW_LEN`] characters of a description, followed by `...` if it had to be shortened
pub fn description_preview(description: &str) -> String {
    truncate_with_ellipsis(description, DESCRIPTION_PREVIEW_LEN)
}

/// Shorten a string to `max_chars` characters (not bytes), adding `...` if anything was cut
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((cut, _)) => format!("{}...", &text[..cut]),
    }
}

fn type_marker(task_type: TaskType) -> &'static str {
    match task_type {
        TaskType::Exam => "!",
        TaskType::Lecture => "@",
        TaskType::Assignment => "*",
        TaskType::Quiz => "?",
        TaskType::Task => "-",
    }
}

/// A one-line summary of a task
pub fn format_task(task: &Task) -> String {
    let date = match task.date() {
        Some(date) => date.with_timezone(&Local).format("%a %d %b %H:%M").to_string(),
        None => String::from("<no date>      "),
    };
    format!("{} {}  {:<12} {}", type_marker(task.task_type()), date, task.course(), task.title())
}

/// A debug utility that pretty-prints a task
pub fn print_task(task: &Task) {
    println!("    {}", format_task(task));
    if task.description().is_empty() == false {
        println!("        {}", description_preview(task.description()).replace('\n', " "));
    }
    if task.has_url() {
        println!("        {}", task.url());
    }
}

/// A debug utility that pretty-prints a task list
pub fn print_task_list(tasks: &[Task]) {
    if tasks.is_empty() {
        println!("    (nothing to do)");
    }
    for task in tasks {
        print_task(task);
    }
}
