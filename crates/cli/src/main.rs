#![warn(clippy::pedantic)]

mod config;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug};
use trainer_domain::{Exercise, Trainer};
use trainer_storage::JsonFile;

const LONG_ABOUT: &str = "\
Trainer is your personal programming trainer. It helps you improve your
programming abilities by providing a random list of programming exercises
for you to complete.

You first have to define a set of programming exercises for Trainer to
choose from. Without an action, all exercises that have been added are
listed.";

#[derive(Parser, Debug)]
#[command(version, about = "Trainer - personal programming trainer", long_about = LONG_ABOUT)]
struct Args {
    /// Exercise data file
    #[arg(long, env = "TRAINER_DATA", value_name = "PATH")]
    data: Option<PathBuf>,

    /// Print debug messages
    #[arg(short, long)]
    verbose: bool,

    #[command(flatten)]
    action: Action,
}

#[derive(clap::Args, Debug)]
#[group(multiple = false)]
struct Action {
    /// Add a programming exercise
    #[arg(short, long, value_name = "EXERCISE")]
    add: Option<String>,

    /// Remove a programming exercise
    #[arg(short, long, value_name = "EXERCISE")]
    remove: Option<String>,

    /// Generate a list of programming exercises
    #[arg(short = 'n', long = "newlist", value_name = "N")]
    new_list: Option<usize>,

    /// Replace a programming exercise
    #[arg(short, long, num_args = 2, value_names = ["OLD", "NEW"])]
    update: Option<Vec<String>>,

    /// Add all programming exercises of a CSV file
    #[arg(short, long, value_name = "CSV")]
    import: Option<PathBuf>,

    /// Write all programming exercises to a CSV file
    #[arg(short, long, value_name = "CSV")]
    export: Option<PathBuf>,

    /// Create an empty data file
    #[arg(long)]
    init: bool,
}

#[derive(Debug, PartialEq)]
enum Command {
    List,
    NewList(usize),
    Add(String),
    Remove(String),
    Update(String, String),
    Import(PathBuf),
    Export(PathBuf),
    Init,
}

impl From<Action> for Command {
    fn from(value: Action) -> Self {
        if let Some(description) = value.add {
            Command::Add(description)
        } else if let Some(description) = value.remove {
            Command::Remove(description)
        } else if let Some(n) = value.new_list {
            Command::NewList(n)
        } else if let Some([old, new]) = value
            .update
            .and_then(|values| <[String; 2]>::try_from(values).ok())
        {
            Command::Update(old, new)
        } else if let Some(path) = value.import {
            Command::Import(path)
        } else if let Some(path) = value.export {
            Command::Export(path)
        } else if value.init {
            Command::Init
        } else {
            Command::List
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_target(false);

    let _ = builder.try_init();
}

fn run(args: Args) -> Result<()> {
    let path = config::data_path(args.data)?;
    debug!("using data file {}", path.display());

    let load = || {
        Trainer::load(JsonFile::new(&path)).with_context(|| {
            format!(
                "Failed to load exercises from {} (run with --init to create it)",
                path.display()
            )
        })
    };

    match Command::from(args.action) {
        Command::Init => {
            JsonFile::create(&path)?;
            println!("Created {}", path.display());
        }
        Command::List => print_exercises(&load()?.get_all_exercises()),
        Command::NewList(n) => print_exercises(&load()?.get_new_list(n)?),
        Command::Add(description) => load()?.add_exercise(Exercise::new(description))?,
        Command::Remove(description) => {
            load()?.remove_exercise(&Exercise::new(description))?;
        }
        Command::Update(old, new) => {
            load()?.update_exercise(&Exercise::new(old), Exercise::new(new))?;
        }
        Command::Import(source) => {
            let count = load()?.add_exercises_from_csv(&source)?;
            println!("Imported {count} exercises");
        }
        Command::Export(destination) => load()?.export_exercises_to_csv(&destination)?,
    }

    Ok(())
}

fn print_exercises<'a>(exercises: impl IntoIterator<Item = &'a Exercise>) {
    for (i, exercise) in exercises.into_iter().enumerate() {
        println!("{i}: {exercise}");
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;
    use trainer_domain::ExerciseRepository;

    use super::*;

    fn parse(args: &[&str]) -> Result<Command, clap::Error> {
        Args::try_parse_from(std::iter::once("trainer").chain(args.iter().copied()))
            .map(|args| Command::from(args.action))
    }

    #[test]
    fn test_args() {
        Args::command().debug_assert();
    }

    #[rstest]
    #[case(&[], Command::List)]
    #[case(&["-n", "3"], Command::NewList(3))]
    #[case(&["--newlist", "3"], Command::NewList(3))]
    #[case(&["-a", "Implement FizzBuzz"], Command::Add("Implement FizzBuzz".to_string()))]
    #[case(&["--remove", "Implement FizzBuzz"], Command::Remove("Implement FizzBuzz".to_string()))]
    #[case(&["-u", "A", "B"], Command::Update("A".to_string(), "B".to_string()))]
    #[case(&["-i", "new.csv"], Command::Import(PathBuf::from("new.csv")))]
    #[case(&["--export", "all.csv"], Command::Export(PathBuf::from("all.csv")))]
    #[case(&["--init"], Command::Init)]
    #[case(&["-v", "--data", "own.json", "-n", "1"], Command::NewList(1))]
    fn test_parse(#[case] args: &[&str], #[case] expected: Command) {
        assert_eq!(parse(args).unwrap(), expected);
    }

    #[rstest]
    #[case(&["-a", "A", "-r", "B"])]
    #[case(&["-n", "3", "--init"])]
    #[case(&["-u", "A"])]
    #[case(&["-n", "many"])]
    fn test_parse_invalid(#[case] args: &[&str]) {
        assert!(parse(args).is_err());
    }

    #[test]
    fn test_run_init_then_add() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exercises.json");
        let data = path.to_str().unwrap();

        run(Args::try_parse_from(["trainer", "--data", data, "--init"]).unwrap()).unwrap();
        run(Args::try_parse_from(["trainer", "--data", data, "-a", "Implement FizzBuzz"]).unwrap())
            .unwrap();

        assert_eq!(
            JsonFile::new(&path).read_exercises().unwrap().len(),
            1
        );
        assert!(run(Args::try_parse_from(["trainer", "--data", data, "--init"]).unwrap()).is_err());
    }

    #[test]
    fn test_run_without_data_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("exercises.json");

        let error = run(
            Args::try_parse_from(["trainer", "--data", path.to_str().unwrap(), "-n", "1"]).unwrap(),
        )
        .unwrap_err();

        assert_eq!(
            format!("{error:#}"),
            format!(
                "Failed to load exercises from {} (run with --init to create it): Could not connect to data",
                path.display()
            )
        );
    }
}
