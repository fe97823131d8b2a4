use anyhow::bail;
use serde::Serialize;
use statlab_prob::events::{EventAlgebra, EventPair, Joint};

use crate::util::ReportArg;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct EventsArg {
    /// P(A)
    #[arg(long)]
    p_a: f64,
    /// P(B)
    #[arg(long)]
    p_b: f64,
    /// P(A∩B)
    #[arg(long, conflicts_with = "exclusive")]
    intersection: Option<f64>,
    /// Treat A and B as mutually exclusive
    #[arg(long)]
    exclusive: bool,
    #[command(flatten)]
    report: ReportArg,
}

#[derive(Debug, Serialize)]
struct EventsReport {
    algebra: EventAlgebra,
}

pub(crate) fn run(arg: &EventsArg) -> anyhow::Result<()> {
    let joint = match (arg.intersection, arg.exclusive) {
        (Some(p_ab), false) => Joint::Intersection(p_ab),
        (None, true) => Joint::MutuallyExclusive,
        (None, false) => bail!("one of --intersection or --exclusive is required"),
        (Some(_), true) => unreachable!("clap rejects conflicting flags"),
    };
    let pair = EventPair::new(arg.p_a, arg.p_b, joint)?;
    let report = EventsReport {
        algebra: pair.algebra(),
    };

    if arg.report.wants_json() {
        return arg.report.save(&report);
    }

    let a = &report.algebra;
    println!("P(A)     {}", a.p_a);
    println!("P(B)     {}", a.p_b);
    println!("P(A∩B)   {}", a.intersection);
    println!("P(¬A)    {}", a.complement_a);
    println!("P(¬B)    {}", a.complement_b);
    println!("P(A∪B)   {}", a.union);
    println!("P(A|B)   {}", a.a_given_b);
    println!("P(B|A)   {}", a.b_given_a);
    Ok(())
}
