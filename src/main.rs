use clap::{Args, Parser, Subcommand};
use labdesk::app::{self, App, RegisterApp, RoutesApp};
use labdesk::config::{CONFIG_ENV, Config};
use labdesk::logging;
use labdesk::terminal::{Terminal, TerminalSize};
use std::path::PathBuf;
use std::process::ExitCode;

/// Student registration form and a small routed page demo, in the terminal.
#[derive(Parser)]
#[command(name = "labdesk", version, about, long_about = None)]
struct Cli {
    /// YAML config file
    #[arg(short, long, global = true, env = CONFIG_ENV)]
    config: Option<PathBuf>,

    /// Append tracing output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Registration form with the table of registered students
    Register {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Home, About and Contact pages behind a navigation bar
    Routes {
        /// Path to open first, e.g. /about
        #[arg(long)]
        path: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Clone, Copy)]
struct OutputArgs {
    /// Print one frame as plain text and exit
    #[arg(long)]
    print: bool,

    /// Print one frame as JSON and exit
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "labdesk failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> labdesk::Result<()> {
    logging::init(cli.log_file.as_deref(), cli.verbose)?;
    let config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Register { output } => {
            let mut app = RegisterApp::new(&config.courses, &config.clear_all_prompt);
            drive(&mut app, output)
        }
        Command::Routes { path, output } => {
            let start = path.unwrap_or(config.start_path);
            let mut app = RoutesApp::new(&start);
            drive(&mut app, output)
        }
    }
}

fn drive(screen: &mut dyn App, output: OutputArgs) -> labdesk::Result<()> {
    if output.print || output.json {
        let text = app::render_once(screen, TerminalSize::default(), output.json)?;
        println!("{text}");
        return Ok(());
    }

    let mut terminal = Terminal::new()?;
    app::run(screen, &mut terminal)?;
    tracing::info!("session ended");
    Ok(())
}
