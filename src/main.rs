use std::{ffi::OsString, path::PathBuf, process::ExitCode};

use activity::{ActivityError, Config};
use clap::{error::ErrorKind, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

static USAGE: &str = "Uso: github-activity <nombre_de_usuario_github>";

/// Shows the recent public activity of a GitHub user.
#[derive(Parser, Debug)]
#[command(name = "github-activity", version)]
struct Cli {
    /// GitHub username
    username: String,

    /// TOML file with a [github] table overriding base_url or user_agent
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let Some(cli) = parse_args(std::env::args_os()) else {
        return ExitCode::SUCCESS;
    };

    let mut out = std::io::stdout().lock();
    let result = show_activity(&cli, &mut out).await;

    ExitCode::from(exit_status(result))
}

/// `None` once help, version or the usage line has been printed.
fn parse_args<I, T>(args: I) -> Option<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Some(cli),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            let _ = e.print();
            None
        }
        Err(e) => {
            debug!(task = "parse arguments", err = e.to_string());
            println!("{}", USAGE);
            None
        }
    }
}

async fn show_activity<W: std::io::Write>(
    cli: &Cli,
    out: &mut W,
) -> Result<(), ActivityError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    activity::run(&cli.username, &config, out).await
}

/// Prints the error once on stderr and maps it to a failing status.
fn exit_status(result: Result<(), ActivityError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            debug!(task = "show activity", err = format!("{:?}", e));
            eprintln!("{}", e);
            1
        }
    }
}
