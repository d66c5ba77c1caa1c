use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use colored::Colorize;
use mpeginfo::inspect::DEFAULT_MAX_SCAN;
use mpeginfo::report::{self, text, Format};
use mpeginfo::Inspector;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mpeginfo", version)]
#[command(about = "Print MPEG audio frame header information", long_about = None)]
struct Cli {
    /// Audio files to inspect
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// On a rejected header, rescan from the byte after its lead byte
    #[arg(long)]
    resync: bool,

    /// Give up resyncing after this many bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_SCAN)]
    max_scan: u64,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<Shell>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli, inspector: &Inspector) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut results = Vec::new();

    for path in &cli.files {
        let result = inspector.inspect(path);

        match &result.header {
            Some(header) if cli.format == Format::Text => {
                text::write_header(&mut out, &result.file_path, header)?;
            }
            Some(_) => {}
            None => {
                let msg = format!("{}: invalid/missing header, ignoring", path.display());
                eprintln!("{}", msg.as_str().red());
            }
        }

        if cli.format != Format::Text {
            results.push(result);
        }
    }

    if cli.format != Format::Text {
        report::write(&mut out, cli.format, &results)?;
    }

    out.flush()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "mpeginfo", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    if cli.files.is_empty() {
        let program = std::env::args()
            .next()
            .unwrap_or_else(|| "mpeginfo".to_string());
        eprintln!("USAGE: {} <file(s)>", program);
        return ExitCode::from(1);
    }

    init_logging(cli.verbose);

    let inspector = Inspector::new()
        .with_resync(cli.resync)
        .with_max_scan(cli.max_scan);

    match run(&cli, &inspector) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
