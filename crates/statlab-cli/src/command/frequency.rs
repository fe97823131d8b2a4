use serde::Serialize;
use statlab_chart::{ChartDataset, project};
use statlab_stats::{frequency::FrequencyTable, sample::Sample};

use crate::util::{self, ReportArg};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FrequencyArg {
    /// Whitespace-delimited sample values
    #[arg(long)]
    data: String,
    /// Lower boundary of the first class
    #[arg(long)]
    lower: f64,
    /// Width of each class
    #[arg(long)]
    width: f64,
    /// Number of classes
    #[arg(long, default_value_t = 5)]
    classes: usize,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct FrequencyReport {
    table: FrequencyTable,
    bars: ChartDataset,
    cumulative: ChartDataset,
}

pub(crate) fn run(arg: &FrequencyArg) -> anyhow::Result<()> {
    let sample = Sample::parse(&arg.data)?;
    let table = FrequencyTable::new(sample.values(), arg.lower, arg.width, arg.classes)?;
    let report = FrequencyReport {
        bars: project::frequency_bars(&table),
        cumulative: project::cumulative_line(&table),
        table,
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    println!("{:>12}  {:>5}  {:>8}  {:>5}  {:>8}", "class", "count", "rel", "cum", "cum rel");
    for class in report.table.classes() {
        println!(
            "{:>5.1}..{:<5.1}  {:>5}  {:>8.4}  {:>5}  {:>8.4}",
            class.range.start,
            class.range.end,
            class.count,
            class.relative,
            class.cumulative,
            class.cumulative_relative,
        );
    }
    println!();
    util::print_chart(&report.bars);
    Ok(())
}
