use std::{
    io::{BufRead, Write, stdin, stdout},
    path::PathBuf,
};

use clap::Parser;
use miette::{IntoDiagnostic, Result, miette};
use tracing::info;
use tracing_subscriber::EnvFilter;

use chain_db::{
    Database, DatabaseError,
    shell::{self, Command, Outcome},
};

/// Interactive queries over the faculty and admin employee tables.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Whitespace-separated faculty records.
    #[arg(long, default_value = "faculty.txt")]
    faculty: PathBuf,

    /// Whitespace-separated admin records.
    #[arg(long, default_value = "admin.txt")]
    admin: PathBuf,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .into_diagnostic()?;
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(filter)
        .init();

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(false)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .build(),
        )
    }))
    .into_diagnostic()?;
    miette::set_panic_hook();

    let mut db = Database::new();
    db.load_table("Faculty", &cli.faculty)?;
    db.load_table("Admin", &cli.admin)?;
    info!(tables = ?db.table_names(), "database ready");

    println!("Welcome to Chain DB");
    println!("{}", shell::HELP);

    let mut buf = String::new();

    let mut stdin = stdin().lock();
    let mut stdout = stdout().lock();

    loop {
        stdout.write_all(b"\nDB> ").into_diagnostic()?;
        stdout.flush().into_diagnostic()?;

        buf.clear();
        let Ok(read) = stdin.read_line(&mut buf) else {
            return Err(miette!("Input reading failed"));
        };
        if read == 0 {
            break;
        }

        let input = buf.trim();
        if input.is_empty() {
            continue;
        }

        let result = Command::parse(input)
            .map_err(DatabaseError::from)
            .and_then(|command| shell::execute(&mut db, command));

        match result {
            Ok(Outcome::Output(text)) => {
                stdout.write_all(text.as_bytes()).into_diagnostic()?;
                stdout.write_all(b"\n").into_diagnostic()?;
            }
            Ok(Outcome::Quit) => break,
            Err(err) => {
                let report = miette::Report::new(err);
                writeln!(stdout, "{report:?}").into_diagnostic()?;
            }
        }
    }

    println!("\nGoodbye!");

    Ok(())
}
