use anyhow::bail;
use serde::Serialize;
use statlab_prob::counting;

use crate::util::ReportArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum KindArg {
    /// n!
    Factorial,
    /// Ordered selections of r from n
    Permutations,
    /// Unordered selections of r from n
    Combinations,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CountArg {
    /// What to count
    #[arg(long, value_enum)]
    kind: KindArg,
    /// Number of items available
    #[arg(long)]
    n: u64,
    /// Number of items selected (ignored for factorial)
    #[arg(long)]
    r: Option<u64>,
    /// Select with replacement
    #[arg(long)]
    replacement: bool,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct CountReport {
    n: u64,
    r: Option<u64>,
    replacement: bool,
    count: f64,
}

pub(crate) fn run(arg: &CountArg) -> anyhow::Result<()> {
    let count = match arg.kind {
        KindArg::Factorial => {
            if arg.replacement {
                bail!("--replacement does not apply to factorials");
            }
            counting::factorial(arg.n)
        }
        KindArg::Permutations => {
            let Some(r) = arg.r else {
                bail!("--r is required for permutations");
            };
            if arg.replacement {
                counting::permutations_with_replacement(arg.n, r)
            } else {
                counting::permutations(arg.n, r)
            }
        }
        KindArg::Combinations => {
            let Some(r) = arg.r else {
                bail!("--r is required for combinations");
            };
            if arg.replacement {
                counting::combinations_with_replacement(arg.n, r)
            } else {
                counting::combinations(arg.n, r)
            }
        }
    };

    let report = CountReport {
        n: arg.n,
        r: arg.r,
        replacement: arg.replacement,
        count,
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    println!("{count}");
    Ok(())
}
