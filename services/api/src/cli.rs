use crate::demo::{run_demo, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use jobboard::error::AppError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "jobboard",
    about = "Run the job board API or walk through a scripted hiring round",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Post a job, apply to it, review the application, and print the results
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the directory uploaded resumes are written to
    #[arg(long)]
    pub(crate) resume_dir: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["jobboard"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from([
            "jobboard",
            "serve",
            "--port",
            "8080",
            "--resume-dir",
            "/tmp/resumes",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert_eq!(args.resume_dir, Some(PathBuf::from("/tmp/resumes")));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve, got {other:?}"),
        }
    }

    #[test]
    fn demo_flags_parse() {
        let cli = Cli::try_parse_from(["jobboard", "demo", "--query", "firmware"])
            .expect("parses");
        match cli.command {
            Some(Command::Demo(args)) => assert_eq!(args.query, "firmware"),
            other => panic!("expected demo, got {other:?}"),
        }
    }
}
