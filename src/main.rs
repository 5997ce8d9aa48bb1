use std::path::{Path, PathBuf};

use clap::Parser;
use quiz_game::QuizGame;
use quiz_game::protocol::{DEFAULT_HOST, DEFAULT_PORT, api_base_url};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "quiz-game.log";

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Host of the quizzer API
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port of the quizzer API
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Directory to write log files to
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn log_file_appender(log_dir: &Path) -> Result<RollingFileAppender, InitError> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(log_dir)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // The terminal belongs to the game, so logs only go to a file.
    let file_appender = match log_file_appender(&args.log_dir) {
        Ok(appender) => appender,
        Err(e) => {
            eprintln!(
                "Error setting up logging in {}: {}",
                args.log_dir.display(),
                e
            );
            std::process::exit(1);
        }
    };
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    let base_url = api_base_url(&args.host, args.port);
    tracing::info!(%base_url, "starting quiz game");

    let result = match QuizGame::new(&base_url) {
        Ok(game) => game.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(score) => tracing::info!(score, "quiz game finished"),
        Err(e) => {
            tracing::error!("quiz game failed: {}", e);
            eprintln!("Error running quiz game: {}", e);
            drop(guard);
            std::process::exit(1);
        }
    }
}
