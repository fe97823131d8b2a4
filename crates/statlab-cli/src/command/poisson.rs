use serde::Serialize;
use statlab_chart::{ChartDataset, project};
use statlab_dist::{Poisson, ProbabilityQuery};

use crate::{
    command::binomial::QueryArg,
    util::{self, ReportArg},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PoissonArg {
    /// Rate parameter λ
    #[arg(long)]
    rate: f64,
    /// Number of events asked about
    #[arg(long)]
    x: u64,
    /// How the probability question is phrased
    #[arg(long, value_enum, default_value = "exact")]
    query: QueryArg,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct PoissonReport {
    dist: Poisson,
    x: u64,
    query: ProbabilityQuery,
    probability: f64,
    mean: f64,
    variance: f64,
    std_dev: f64,
    pmf: ChartDataset,
}

pub(crate) fn run(arg: &PoissonArg) -> anyhow::Result<()> {
    let dist = Poisson::new(arg.rate);
    if dist.is_degenerate() {
        tracing::info!("degenerate rate {}; all probabilities are zero", arg.rate);
    }
    let query = ProbabilityQuery::from(arg.query);
    let report = PoissonReport {
        dist,
        x: arg.x,
        query,
        probability: dist.probability(arg.x, query),
        mean: dist.mean(),
        variance: dist.variance(),
        std_dev: dist.std_dev(),
        pmf: project::poisson_pmf(&dist, arg.x, query),
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    println!("Poisson(λ = {})", dist.rate());
    println!("probability  {:.6}", report.probability);
    println!("mean         {}", report.mean);
    println!("variance     {}", report.variance);
    println!("std dev      {:.6}", report.std_dev);
    println!();
    util::print_chart(&report.pmf);
    Ok(())
}
