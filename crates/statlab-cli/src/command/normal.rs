use anyhow::bail;
use serde::Serialize;
use statlab_chart::{ChartDataset, project};
use statlab_dist::{MAX_CURVE_POINTS, Normal, NormalQuery};

use crate::util::{self, ReportArg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ModeArg {
    /// P(X <= value)
    LeftTail,
    /// P(X >= value)
    RightTail,
    /// P(from <= X <= to)
    Between,
    /// P(X <= from or X >= to)
    Outside,
    /// The value at cumulative probability p
    Inverse,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct NormalArg {
    /// Mean μ
    #[arg(long)]
    mean: f64,
    /// Standard deviation σ
    #[arg(long)]
    sd: f64,
    /// Calculation mode
    #[arg(long, value_enum)]
    mode: ModeArg,
    /// The value for tail modes
    #[arg(long)]
    value: Option<f64>,
    /// Lower bound for between/outside modes
    #[arg(long)]
    from: Option<f64>,
    /// Upper bound for between/outside modes
    #[arg(long)]
    to: Option<f64>,
    /// Cumulative probability for inverse mode
    #[arg(long)]
    p: Option<f64>,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct NormalReport {
    dist: Normal,
    /// The probability for tail/interval modes, or the input p for inverse.
    probability: f64,
    /// The looked-up value in inverse mode.
    value: Option<f64>,
    /// z-scores of every bound involved.
    z_scores: Vec<f64>,
    curve: ChartDataset,
}

fn tail_value(arg: &NormalArg) -> anyhow::Result<f64> {
    match arg.value {
        Some(value) => Ok(value),
        None => bail!("--value is required for this mode"),
    }
}

fn bounds(arg: &NormalArg) -> anyhow::Result<(f64, f64)> {
    match (arg.from, arg.to) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => bail!("--from and --to are required for this mode"),
    }
}

pub(crate) fn run(arg: &NormalArg) -> anyhow::Result<()> {
    let dist = Normal::new(arg.mean, arg.sd);

    let report = if arg.mode == ModeArg::Inverse {
        let Some(p) = arg.p else {
            bail!("--p is required for inverse mode");
        };
        if !(0.0..=1.0).contains(&p) {
            bail!("--p must be in [0, 1], got {p}");
        }
        let value = dist.value_at(p);
        NormalReport {
            dist,
            probability: p,
            value: Some(value),
            z_scores: vec![dist.z_score(value)],
            curve: project::normal_curve(
                &dist,
                MAX_CURVE_POINTS,
                Some(NormalQuery::LeftTail(value)),
            ),
        }
    } else {
        let query = match arg.mode {
            ModeArg::LeftTail => NormalQuery::LeftTail(tail_value(arg)?),
            ModeArg::RightTail => NormalQuery::RightTail(tail_value(arg)?),
            ModeArg::Between => {
                let (from, to) = bounds(arg)?;
                NormalQuery::Between(from, to)
            }
            ModeArg::Outside => {
                let (from, to) = bounds(arg)?;
                NormalQuery::Outside(from, to)
            }
            ModeArg::Inverse => unreachable!("handled above"),
        };
        let z_scores = match query {
            NormalQuery::LeftTail(x) | NormalQuery::RightTail(x) => vec![dist.z_score(x)],
            NormalQuery::Between(a, b) | NormalQuery::Outside(a, b) => {
                vec![dist.z_score(a), dist.z_score(b)]
            }
        };
        NormalReport {
            dist,
            probability: dist.probability(query),
            value: None,
            z_scores,
            curve: project::normal_curve(&dist, MAX_CURVE_POINTS, Some(query)),
        }
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    println!("Normal(μ = {}, σ = {})", dist.mean(), dist.std_dev());
    match report.value {
        Some(value) => {
            println!("p       {}", report.probability);
            println!("value   {value:.6}");
        }
        None => println!("probability  {:.6}", report.probability),
    }
    let z_list = report
        .z_scores
        .iter()
        .map(|z| format!("{z:.4}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("z-scores     {z_list}");
    println!();
    util::print_chart(&report.curve);
    Ok(())
}
