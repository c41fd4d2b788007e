use std::{path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use log::debug;

use retoken::{
    analyzer::analyzer::analyze_file,
    format_error,
    report::{
        summary::{render_summary, Summary},
        table::render_table,
    },
    rules::Rules,
};

#[derive(Parser)]
#[command(name = "retoken")]
#[command(version, about = "Validador de tokens con expresiones regulares", long_about = None)]
struct Cli {
    /// Text file to analyze, one statement or paragraph per line
    input: PathBuf,

    /// Only print the token table
    #[arg(long)]
    no_summary: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let start = Instant::now();
    let rules = Rules::builtin();

    let rows = match analyze_file(&cli.input, rules) {
        Ok(rows) => rows,
        Err(error) => {
            eprintln!("{}", format_error(&error));
            return ExitCode::FAILURE;
        }
    };

    debug!("analyzed in {:?}", start.elapsed());

    print!("{}", render_table(&rows));

    if !cli.no_summary {
        print!("{}", render_summary(&Summary::from_rows(&rows)));
    }

    ExitCode::SUCCESS
}
