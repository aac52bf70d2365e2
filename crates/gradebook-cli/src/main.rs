//! gradebook CLI — track one student's grades and print their report.

use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Single-student grade tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the sample session for student S001 and print the report
    Demo {
        /// Output format: text, json, table
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Build a record, apply operations in order and print the report
    Run {
        /// Student identifier
        #[arg(long)]
        id: String,

        /// Student display name
        #[arg(long)]
        name: String,

        /// Output format: text, json, table
        #[arg(long, default_value = "text")]
        format: String,

        /// Exit code 1 if any operation was rejected
        #[arg(long)]
        fail_on_rejected: bool,

        /// Operations such as add=95, remove-index=2, remove-value=50
        operations: Vec<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().expect("static log directive")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Demo { format } => commands::demo::execute(format),
        Commands::Run {
            id,
            name,
            format,
            fail_on_rejected,
            operations,
        } => commands::run::execute(id, name, format, fail_on_rejected, operations),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
