mod agents;
mod cli;
mod error;
mod pubspec;
mod workflow;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        unsafe {
            std::env::set_var(workflow::VERBOSE_ENV, "1");
        }
    }

    let new_version = match workflow::require_version(cli.new_version.as_deref()) {
        Ok(version) => version,
        Err(e) => {
            eprintln!("{}", e.to_string().red().bold());
            process::exit(1);
        }
    };

    if !cli.json {
        println!(
            "{}",
            format!("Updating Flutter version to {}", new_version)
                .cyan()
                .bold()
        );
    }

    if let Err(e) = workflow::execute_bump(&cli.path, &cli.file, new_version, cli.json) {
        eprintln!("{} {}", "Error updating version:".red().bold(), e);
        process::exit(1);
    }
}
