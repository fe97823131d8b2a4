use anyhow::anyhow;
use rand::Rng as _;
use serde::Serialize;
use statlab_chart::{ChartDataset, project};
use statlab_prob::dice::{DiceRoller, FACES, RollSeed};

use crate::util::{self, ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DiceArg {
    /// Number of dice rolled together
    #[arg(long, default_value_t = 1)]
    dice: usize,
    /// Number of rolls to perform
    #[arg(long, default_value_t = 10)]
    rolls: usize,
    /// 32-character hex seed for reproducible rolls
    #[arg(long)]
    seed: Option<String>,
    /// Number of recent rolls kept for the frequency display
    #[arg(long)]
    history_cap: Option<usize>,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct DiceReport {
    seed: RollSeed,
    rolls: Vec<Vec<u8>>,
    face_counts: [u64; FACES],
    face_frequencies: [f64; FACES],
    frequencies: ChartDataset,
}

pub(crate) fn run(arg: &DiceArg) -> anyhow::Result<()> {
    let seed = match &arg.seed {
        Some(hex) => RollSeed::from_hex(hex).map_err(|e| anyhow!(e))?,
        None => rand::rng().random(),
    };
    let mut roller = DiceRoller::with_seed(arg.dice, seed);
    if let Some(cap) = arg.history_cap {
        roller.set_history_cap(cap);
    }

    let rolls = (0..arg.rolls).map(|_| roller.roll()).collect::<Vec<_>>();
    tracing::debug!("rolled {} dice {} times", arg.dice, arg.rolls);

    let report = DiceReport {
        seed,
        face_counts: roller.face_counts(),
        face_frequencies: roller.face_frequencies(),
        frequencies: project::dice_faces(&roller),
        rolls,
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    for (i, roll) in report.rolls.iter().enumerate() {
        let faces = roll
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("roll {:>3}  {faces}", i + 1);
    }
    println!();
    util::print_chart(&report.frequencies);
    Ok(())
}
