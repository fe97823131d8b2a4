use serde::Serialize;
use statlab_chart::{ChartDataset, project};
use statlab_stats::{descriptive::DescriptiveSummary, sample::Sample};

use crate::util::{self, ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct DescribeArg {
    /// Whitespace-delimited sample values, e.g. "12 15.5 9 22"
    #[arg(long)]
    data: String,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct DescribeReport {
    summary: DescriptiveSummary,
    outliers: Vec<f64>,
    box_plot: ChartDataset,
}

pub(crate) fn run(arg: &DescribeArg) -> anyhow::Result<()> {
    let sample = Sample::parse(&arg.data)?;
    tracing::debug!("parsed {} sample values", sample.len());

    let summary = DescriptiveSummary::from_sorted(&sample.sorted())
        .expect("a parsed sample always has at least one value");
    let outliers = summary.outliers(sample.values());
    let box_plot = project::box_plot(&summary, sample.values());
    let report = DescribeReport {
        summary,
        outliers,
        box_plot,
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    let s = &report.summary;
    println!("n         {}", s.count);
    println!("min       {}", s.min);
    println!("max       {}", s.max);
    println!("range     {}", s.range);
    println!("mean      {}", s.mean);
    println!("median    {}", s.median);
    println!("variance  {}", s.variance);
    println!("std dev   {}", s.std_dev);
    println!("Q1        {}", s.q1);
    println!("Q3        {}", s.q3);
    println!("IQR       {}", s.iqr);
    println!("fences    [{}, {}]", s.lower_fence, s.upper_fence);
    if report.outliers.is_empty() {
        println!("outliers  none");
    } else {
        let list = report
            .outliers
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        println!("outliers  {list}");
    }
    println!();
    util::print_chart(&report.box_plot);
    Ok(())
}
