use anyhow::Context;
use catalog::GroupManager;
use clap::Parser;
use exercises::build_catalog;
use report::RunReport;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use workflow::config::ExerciseConfig;

mod catalog;
mod exercises;
mod report;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Problem-menu driver for the dense arithmetic core")]
struct Args {
    /// Print the problem menu and exit
    #[arg(long, default_value_t = false)]
    list: bool,
    /// Run every registered problem in menu order
    #[arg(long, default_value_t = false)]
    all: bool,
    /// Problem group to run
    #[arg(long)]
    group: Option<usize>,
    /// Problem number within the group
    #[arg(long)]
    problem: Option<usize>,
    /// Read menu selections from stdin until 0 is entered
    #[arg(long, default_value_t = false)]
    interactive: bool,
    /// Load an exercise config from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 16)]
    width: usize,
    #[arg(long, default_value_t = 16)]
    height: usize,
    #[arg(long, default_value_t = 2.0)]
    scalar: f32,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Write a JSON run report
    #[arg(long)]
    report: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        ExerciseConfig::load(path)?
    } else {
        ExerciseConfig::from_args(args.width, args.height, args.scalar, args.seed)
    };

    let manager = build_catalog(&config);

    if args.list {
        manager.print_menu();
        return Ok(());
    }

    let mut report = RunReport::new(config);

    if args.all {
        for outcome in manager.run_all()? {
            println!(
                "{}.{} {} -> {:.6}",
                outcome.group, outcome.problem, outcome.annotation, outcome.value
            );
            report.push(outcome);
        }
    } else if let Some(group) = args.group {
        match args.problem {
            Some(problem) => {
                let outcome = manager.run(group, problem)?;
                println!(
                    "{}.{} {} -> {:.6}",
                    outcome.group, outcome.problem, outcome.annotation, outcome.value
                );
                report.push(outcome);
            }
            None => manager.print_group_menu(group),
        }
    } else if args.interactive {
        run_interactive(&manager, &mut report)?;
    } else {
        manager.print_menu();
    }

    if let Some(path) = args.report {
        report.write(&path)?;
    }
    Ok(())
}

/// Menu loop matching the legacy console harness: pick a group, pick a
/// problem, 0 backs out.
fn run_interactive(manager: &GroupManager, report: &mut RunReport) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        manager.print_menu();
        let Some(group) = prompt_selection(&mut lines, "Select a group (0 to exit): ")? else {
            break;
        };
        if group == 0 {
            break;
        }
        if manager.group(group).is_none() {
            println!("unknown group {}", group);
            continue;
        }

        manager.print_group_menu(group);
        let Some(problem) = prompt_selection(&mut lines, "Select a problem (0 to go back): ")?
        else {
            break;
        };
        if problem == 0 {
            continue;
        }

        match manager.run(group, problem) {
            Ok(outcome) => {
                println!(
                    "{}.{} {} -> {:.6}",
                    outcome.group, outcome.problem, outcome.annotation, outcome.value
                );
                report.push(outcome);
            }
            Err(err) => println!("problem failed: {}", err),
        }
    }
    Ok(())
}

/// Reads one menu selection; returns None when stdin is exhausted.
fn prompt_selection(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    prompt: &str,
) -> anyhow::Result<Option<usize>> {
    loop {
        print!("{}", prompt);
        io::stdout().flush().context("flushing menu prompt")?;

        let Some(line) = lines.next() else {
            return Ok(None);
        };
        let line = line.context("reading menu selection")?;
        match line.trim().parse::<usize>() {
            Ok(selection) => return Ok(Some(selection)),
            Err(_) => println!("enter a number"),
        }
    }
}
