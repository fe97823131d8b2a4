use anyhow::bail;
use serde::Serialize;
use statlab_inference::{Deviation, MeanTest, ProportionTest, Tail, TestReport};

use crate::util::ReportArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum TailArg {
    /// Reject in both tails
    TwoSided,
    /// Reject in the left tail
    Left,
    /// Reject in the right tail
    Right,
}

impl From<TailArg> for Tail {
    fn from(arg: TailArg) -> Self {
        match arg {
            TailArg::TwoSided => Tail::TwoSided,
            TailArg::Left => Tail::Left,
            TailArg::Right => Tail::Right,
        }
    }
}

#[derive(Debug, Clone, clap::Subcommand)]
pub(crate) enum TestCommand {
    /// One-sample z-test for a proportion
    Proportion(ProportionArg),
    /// One-sample z- or t-test for a mean
    Mean(MeanArg),
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ProportionArg {
    /// Observed sample proportion
    #[arg(long)]
    sample_prop: f64,
    /// Hypothesized proportion under H0
    #[arg(long)]
    hypothesized: f64,
    /// Sample size
    #[arg(long)]
    n: u64,
    /// Tail direction
    #[arg(long, value_enum, default_value = "two-sided")]
    tail: TailArg,
    /// Significance level
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct MeanArg {
    /// Observed sample mean
    #[arg(long)]
    sample_mean: f64,
    /// Hypothesized mean under H0
    #[arg(long)]
    hypothesized: f64,
    /// Sample size
    #[arg(long)]
    n: u64,
    /// Tail direction
    #[arg(long, value_enum, default_value = "two-sided")]
    tail: TailArg,
    /// Significance level
    #[arg(long, default_value_t = 0.05)]
    alpha: f64,
    /// Known population standard deviation (z-test)
    #[arg(long, conflicts_with = "sample_sd")]
    sigma: Option<f64>,
    /// Sample standard deviation (t-test, df = n - 1)
    #[arg(long)]
    sample_sd: Option<f64>,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct HypothesisReport {
    report: TestReport,
    decision: &'static str,
}

pub(crate) fn run(cmd: &TestCommand) -> anyhow::Result<()> {
    let (report_arg, outcome) = match cmd {
        TestCommand::Proportion(arg) => {
            let test = ProportionTest {
                sample_prop: arg.sample_prop,
                hypothesized: arg.hypothesized,
                sample_size: arg.n,
                tail: arg.tail.into(),
                alpha: arg.alpha,
            };
            (&arg.report, test.run()?)
        }
        TestCommand::Mean(arg) => {
            let deviation = match (arg.sigma, arg.sample_sd) {
                (Some(sigma), None) => Deviation::Population(sigma),
                (None, Some(s)) => Deviation::Sample(s),
                (None, None) => bail!("one of --sigma or --sample-sd is required"),
                (Some(_), Some(_)) => unreachable!("clap rejects conflicting flags"),
            };
            let test = MeanTest {
                sample_mean: arg.sample_mean,
                hypothesized: arg.hypothesized,
                sample_size: arg.n,
                tail: arg.tail.into(),
                alpha: arg.alpha,
                deviation,
            };
            (&arg.report, test.run()?)
        }
    };

    let report = HypothesisReport {
        decision: if outcome.reject_null {
            "reject H0"
        } else {
            "fail to reject H0"
        },
        report: outcome,
    };

    if report_arg.wants_json() {
        return report_arg.save(&report);
    }

    let r = &report.report;
    println!("statistic       {:.4}", r.statistic);
    println!("critical value  {:.4}", r.critical_value);
    println!("p-value         {:.6}", r.p_value);
    println!("alpha           {}", r.alpha);
    println!("decision        {}", report.decision);
    let (lo, hi) = r.confidence_interval;
    println!("CI              [{lo:.4}, {hi:.4}]");
    Ok(())
}
