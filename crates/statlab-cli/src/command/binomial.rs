use serde::Serialize;
use statlab_chart::{ChartDataset, project};
use statlab_dist::{Binomial, ProbabilityQuery};

use crate::util::{self, ReportArg};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum QueryArg {
    /// P(X = x)
    Exact,
    /// P(X <= x)
    AtMost,
    /// P(X >= x)
    AtLeast,
}

impl From<QueryArg> for ProbabilityQuery {
    fn from(arg: QueryArg) -> Self {
        match arg {
            QueryArg::Exact => ProbabilityQuery::Exact,
            QueryArg::AtMost => ProbabilityQuery::AtMost,
            QueryArg::AtLeast => ProbabilityQuery::AtLeast,
        }
    }
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BinomialArg {
    /// Number of trials
    #[arg(long)]
    trials: u64,
    /// Per-trial success probability
    #[arg(long)]
    prob: f64,
    /// Number of successes asked about
    #[arg(long)]
    x: u64,
    /// How the probability question is phrased
    #[arg(long, value_enum, default_value = "exact")]
    query: QueryArg,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct BinomialReport {
    dist: Binomial,
    x: u64,
    query: ProbabilityQuery,
    probability: f64,
    mean: f64,
    variance: f64,
    std_dev: f64,
    pmf: ChartDataset,
}

pub(crate) fn run(arg: &BinomialArg) -> anyhow::Result<()> {
    let dist = Binomial::new(arg.trials, arg.prob);
    let query = ProbabilityQuery::from(arg.query);
    let report = BinomialReport {
        dist,
        x: arg.x,
        query,
        probability: dist.probability(arg.x, query),
        mean: dist.mean(),
        variance: dist.variance(),
        std_dev: dist.std_dev(),
        pmf: project::binomial_pmf(&dist, arg.x, query),
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    println!(
        "Binomial(n = {}, p = {})",
        dist.trials(),
        dist.success_prob()
    );
    println!("probability  {:.6}", report.probability);
    println!("mean         {}", report.mean);
    println!("variance     {}", report.variance);
    println!("std dev      {:.6}", report.std_dev);
    println!();
    util::print_chart(&report.pmf);
    Ok(())
}
