//! Command-line runner for the quincunx simulator
//!
//! Runs the machine in text mode with no bells and whistles: drops the
//! requested beans, steps to termination, and prints the slot bean
//! counts (or a JSON summary).

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use quincunx_core::{board_string, build_beans, slot_string, BeanMachine, Mode, RunSummary};

/// Decision mode for the bean population
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Every bean takes an independent random path
    Luck,
    /// Every bean has a fixed skill level; runs are reproducible
    Skill,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Luck => Mode::Luck,
            ModeArg::Skill => Mode::Skill,
        }
    }
}

/// Galton board simulator: drop beans through pegs, count the slots.
#[derive(Debug, Parser)]
#[command(name = "quincunx", version, about, long_about = None)]
struct Args {
    /// Number of slots at the bottom of the board
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    slot_count: u32,

    /// Number of beans to drop through the machine
    bean_count: u32,

    /// Decision mode
    #[arg(value_enum)]
    mode: ModeArg,

    /// Print the full board after the reset and after every step
    #[arg(long)]
    debug: bool,

    /// Master RNG seed (time-derived when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the final slot counts as a JSON summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(entropy_seed);

    let mut machine = BeanMachine::new(args.slot_count as usize)?;
    let beans = build_beans(
        args.slot_count as usize,
        args.bean_count as usize,
        args.mode.into(),
        seed,
    );
    machine.reset(beans);

    if args.debug {
        println!("{}", board_string(&machine));
    }
    while machine.advance_step()? {
        if args.debug {
            println!("{}", board_string(&machine));
        }
    }

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&RunSummary::capture(&machine))?
        );
    } else {
        println!("Slot bean counts:");
        println!("{}", slot_string(&machine));
    }
    Ok(())
}

/// Seed drawn from the wall clock for luck-style entropy
fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0x9E37_79B9_7F4A_7C15)
}
