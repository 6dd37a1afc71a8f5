use chrono::{Local, NaiveTime};
use clap::Args;
use ops_desk::error::AppError;
use ops_desk::identity::{parse_clock_time, resolve, OperatorProfile, RosterImporter};
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ResolveArgs {
    /// Email addresses to resolve
    #[arg(required = true)]
    pub(crate) emails: Vec<String>,
    /// Emit full operator profiles (initials and greeting) instead of names
    #[arg(long)]
    pub(crate) profile: bool,
    /// Clock time used for greetings (HH:MM, defaults to now)
    #[arg(long, value_parser = parse_clock_time)]
    pub(crate) time: Option<NaiveTime>,
}

#[derive(Args, Debug)]
pub(crate) struct RosterArgs {
    /// Roster CSV export with an `Email` column and optional `Team` column
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Clock time used for greetings (HH:MM, defaults to now)
    #[arg(long, value_parser = parse_clock_time)]
    pub(crate) time: Option<NaiveTime>,
}

pub(crate) fn run_resolve(args: ResolveArgs) -> Result<(), AppError> {
    println!("{}", render_resolve(&args)?);
    Ok(())
}

pub(crate) fn run_roster(args: RosterArgs) -> Result<(), AppError> {
    let now = args.time.unwrap_or_else(|| Local::now().time());
    let reader = BufReader::new(File::open(&args.csv)?);
    let operators = RosterImporter::from_reader(reader, now)?;
    println!("{}", serde_json::to_string_pretty(&operators)?);
    Ok(())
}

fn render_resolve(args: &ResolveArgs) -> Result<String, AppError> {
    let now = args.time.unwrap_or_else(|| Local::now().time());
    let entries = args
        .emails
        .iter()
        .map(|email| {
            if args.profile {
                serde_json::to_value(OperatorProfile::from_email(email, now))
            } else {
                serde_json::to_value(resolve(email))
            }
        })
        .collect::<Result<Vec<Value>, _>>()?;

    Ok(serde_json::to_string_pretty(&entries)?)
}
