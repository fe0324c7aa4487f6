//! Tests of a Provider, fed by mocked feed sources

use std::error::Error;
use std::io::Write;

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone, Utc};

use course_feed::local::LocalFile;
use course_feed::provider::LoadState;
use course_feed::traits::FeedSource;
use course_feed::{Provider, TaskType};

const EXAMPLE_FEED: &str = r#"BEGIN:VCALENDAR
VERSION:2.0
PRODID:-//Instructure//Canvas//EN
X-WR-CALNAME:Spring 2024
BEGIN:VEVENT
DTSTART:20240120
SUMMARY:Final project [rhet_105]
END:VEVENT
BEGIN:VEVENT
DTSTART:20240108T150000Z
SUMMARY:CS_225 Lecture 2
URL:https://canvas.example.edu/calendar?event=2
END:VEVENT
BEGIN:VEVENT
DTSTART:20240103
SUMMARY:Homework 1 [math_241]
DESCRIPTION:Problems 1-10\; show your work\nDue at midnight
END:VEVENT
BEGIN:VEVENT
DTSTART:20231220
SUMMARY:Quiz 0 [math_241]
END:VEVENT
BEGIN:VEVENT
DTSTART:20240105
DESCRIPTION:An event without summary is not a task
END:VEVENT
BEGIN:VEVENT
DTSTART:20240104
SUMMARY:Reading group
END:VEVENT
END:VCALENDAR
"#;

struct MockSource {
    content: Option<&'static str>,
}

#[async_trait]
impl FeedSource for MockSource {
    async fn fetch_feed(&self) -> Result<String, Box<dyn Error>> {
        match self.content {
            Some(content) => Ok(content.to_string()),
            None => Err("Mocked behaviour requires this fetch to fail".into()),
        }
    }

    fn location(&self) -> String {
        String::from("mock://feed")
    }
}

fn new_year() -> DateTime<Utc> {
    Local.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).earliest().unwrap().with_timezone(&Utc)
}

#[tokio::test]
async fn test_load_upcoming_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut provider = Provider::new(MockSource { content: Some(EXAMPLE_FEED) });
    assert_eq!(provider.state(), &LoadState::NotLoaded);

    let tasks = provider.load(new_year()).await.unwrap();
    let titles: Vec<&str> = tasks.iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec!["Homework 1 [math_241]", "Reading group", "CS_225 Lecture 2"]);

    assert_eq!(tasks[0].course(), "math_241");
    assert_eq!(tasks[0].task_type(), TaskType::Assignment);
    assert_eq!(tasks[0].description(), "Problems 1-10; show your work\nDue at midnight");
    assert_eq!(tasks[1].course(), "Unknown Course");
    assert_eq!(tasks[1].task_type(), TaskType::Task);
    assert_eq!(tasks[2].course(), "CS_225");
    assert_eq!(tasks[2].task_type(), TaskType::Lecture);
    assert!(tasks[2].has_url());

    assert_eq!(provider.state(), &LoadState::Loaded(tasks));
}

#[tokio::test]
async fn test_load_all_tasks() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut provider = Provider::new(MockSource { content: Some(EXAMPLE_FEED) });
    let tasks = provider.load_all().await.unwrap();

    // Feed order is kept, and only the event without SUMMARY is missing
    let titles: Vec<&str> = tasks.iter().map(|t| t.title()).collect();
    assert_eq!(titles, vec![
        "Final project [rhet_105]",
        "CS_225 Lecture 2",
        "Homework 1 [math_241]",
        "Quiz 0 [math_241]",
        "Reading group",
    ]);
    assert_eq!(tasks[0].task_type(), TaskType::Exam);
}

#[tokio::test]
async fn test_failing_source() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut provider = Provider::new(MockSource { content: None });
    let result = provider.load(new_year()).await;
    assert!(result.is_err());
    match provider.state() {
        LoadState::Failed(msg) => assert!(msg.contains("fail")),
        other => panic!("Unexpected state {:?}", other),
    }
}

#[tokio::test]
async fn test_local_file() {
    let _ = env_logger::builder().is_test(true).try_init();

    let path = std::env::temp_dir().join(format!("course-feed-test-{}.ics", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(EXAMPLE_FEED.as_bytes()).unwrap();
    drop(file);

    let mut provider = Provider::new(LocalFile::new(&path));
    let tasks = provider.load(new_year()).await.unwrap();
    assert_eq!(tasks.len(), 3);
    std::fs::remove_file(&path).unwrap();

    let mut missing = Provider::new(LocalFile::new(&path));
    assert!(missing.load(new_year()).await.is_err());
}
