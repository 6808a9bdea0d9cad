use std::path::PathBuf;

use clap::{Parser, Subcommand};
use knowledge_quiz::results::evaluate_url;
use knowledge_quiz::{Quiz, QuizError, QuizOptions, Route, builtin_bank, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Do not ring the terminal bell for sound cues
    #[arg(long, global = true, env = "QUIZ_MUTE")]
    mute: bool,

    /// Directory to write quiz.log into
    #[arg(long, global = true, env = "QUIZ_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play the quiz in the terminal (default)
    Play {
        /// Route to open first, e.g. "/" or "/result?ans=..."
        #[arg(long, default_value = "/")]
        route: String,
    },
    /// Score a results URL and print the evaluation as JSON
    Score {
        /// Results URL, e.g. "/result?ans=%5B%22Meow-Meow%22%5D"
        url: String,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _log_guard = match &cli.log_dir {
        Some(dir) => match logging::init_file(dir) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Failed to open log directory {}: {}", dir.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            if matches!(cli.command, Some(Command::Score { .. })) {
                logging::init_stderr();
            }
            None
        }
    };

    let result = match cli.command {
        Some(Command::Score { url }) => score(&url),
        Some(Command::Play { route }) => play(&route, cli.mute).await,
        None => play("/", cli.mute).await,
    };

    if let Err(e) = result {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}

async fn play(route: &str, muted: bool) -> Result<(), QuizError> {
    let options = QuizOptions {
        start_route: Route::parse(route)?,
        muted,
    };
    Quiz::new(options)?.run().await
}

fn score(url: &str) -> Result<(), QuizError> {
    let bank = builtin_bank()?;
    let evaluation = evaluate_url(url, &bank)?;
    println!("{}", serde_json::to_string_pretty(&evaluation)?);
    Ok(())
}
