use std::error::Error;
use std::path::Path;

use clap::Parser;

use course_feed::client::Client;
use course_feed::local::LocalFile;
use course_feed::settings::FEED_URL_ENV_VAR;
use course_feed::traits::FeedSource;
use course_feed::{Provider, Task};

/// Print the coursework of the next two weeks, as found in an iCal feed
#[derive(Parser, Debug)]
#[command(name = "upcoming", version)]
struct Cli {
    /// URL (http, https or webcal) or local path of the iCal feed
    #[arg(env = FEED_URL_ENV_VAR)]
    feed: String,

    /// Show every task of the feed, not only the upcoming ones
    #[arg(long)]
    all: bool,

    /// Print tasks as JSON instead of a human-readable list
    #[arg(long)]
    json: bool,

    /// Print the tasks as an iCal feed
    #[arg(long, conflicts_with = "json")]
    ical: bool,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = if Path::new(&cli.feed).exists() {
        run(&cli, LocalFile::new(Path::new(&cli.feed))).await
    } else {
        match Client::new(&cli.feed) {
            Ok(client) => run(&cli, client).await,
            Err(err) => Err(err),
        }
    };

    if let Err(err) = result {
        log::error!("Unable to load tasks: {}", err);
        eprintln!("Unable to load tasks: {}", err);
        std::process::exit(1);
    }
}

async fn run<S: FeedSource>(cli: &Cli, source: S) -> Result<(), Box<dyn Error>> {
    let mut provider = Provider::new(source);
    let tasks = if cli.all {
        provider.load_all().await?
    } else {
        provider.load_now().await?
    };

    print(cli, &tasks)
}

fn print(cli: &Cli, tasks: &[Task]) -> Result<(), Box<dyn Error>> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(tasks)?);
    } else if cli.ical {
        print!("{}", course_feed::ical::build_from(tasks));
    } else {
        course_feed::utils::print_task_list(tasks);
    }
    Ok(())
}
