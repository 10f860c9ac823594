// Entrypoint for the CLI application.
// Keeps `main` small: parse arguments, build the API client and hand both
// to `ui::run`. Every failure ends with exit status 1.

use clap::Parser;
use formation_cli::prompt::{AutoConfirm, Prompt, TerminalPrompt};
use formation_cli::ui::{self, RunOptions};
use formation_cli::{api, args, logger, persist, ApiClient, UsageError};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Upload documents to the course generation API and export the result"
)]
struct Cli {
    /// Documents (.pdf, .docx, .txt, .doc) and an optional industry label
    #[arg(value_name = "FILE|INDUSTRY")]
    args: Vec<String>,

    #[arg(long, env = "API_BASE_URL", default_value = api::DEFAULT_BASE_URL)]
    base_url: String,

    /// Where to write the exported deck
    #[arg(long, default_value = persist::DEFAULT_EXPORT_FILE)]
    output: PathBuf,

    /// Where to write the curriculum JSON
    #[arg(long, default_value = persist::DEFAULT_CURRICULUM_FILE)]
    curriculum_out: PathBuf,

    /// Export without asking
    #[arg(short, long)]
    yes: bool,

    #[arg(short, long, help = "Enable verbose output")]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    let invocation = match args::classify(&cli.args) {
        Ok(invocation) => invocation,
        Err(e) => {
            print_usage(&e);
            process::exit(1);
        }
    };
    tracing::debug!("invocation: {:?}", invocation);

    let api = match ApiClient::new(&cli.base_url) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("{:#}", e);
            process::exit(1);
        }
    };

    let options = RunOptions {
        curriculum_path: cli.curriculum_out,
        export_path: cli.output,
        styled: std::io::stdout().is_terminal(),
    };
    let mut prompt: Box<dyn Prompt> = if cli.yes {
        Box::new(AutoConfirm)
    } else {
        Box::new(TerminalPrompt)
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = ui::run(&api, &invocation, &options, prompt.as_mut(), &mut out) {
        tracing::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn print_usage(err: &UsageError) {
    let bin = env!("CARGO_PKG_NAME");
    println!("Error: {}", err);
    println!("Usage: {} <file1> <file2> ... [industry]", bin);
    println!();
    println!("Examples:");
    println!("  {} doc1.pdf doc2.docx doc3.pdf", bin);
    println!("  {} doc1.pdf doc2.docx Insurance", bin);
    println!();
    println!("Supported industries: General, Insurance, Healthcare, Technology, etc.");
}
