//! Command line driver: read a schedule file and print who is eliminated.
//! Run with: cargo run --bin eliminate -- data/teams5.txt [--team Detroit] [--json]

use clap::Parser;
use division_elimination::{elimination_report, read_schedule, team_status};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "eliminate", about = "Check which division teams can no longer finish first")]
struct Args {
    /// Schedule file: team count, then one row per team.
    schedule: PathBuf,
    /// Only report this team.
    #[arg(long)]
    team: Option<String>,
    /// Print JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let division = read_schedule(&args.schedule)?;
    log::info!(
        "Loaded {} teams from {}",
        division.number_of_teams(),
        args.schedule.display()
    );
    match &args.team {
        Some(team) => {
            let status = team_status(&division, team)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&status)?);
            } else {
                println!("{}", status);
            }
        }
        None => {
            let report = elimination_report(&division)?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{}", report);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
