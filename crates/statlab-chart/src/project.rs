//! Projections from engine results to chart datasets.

use statlab_dist::{Binomial, Normal, NormalQuery, Poisson, ProbabilityQuery};
use statlab_prob::dice::DiceRoller;
use statlab_stats::{descriptive::DescriptiveSummary, frequency::FrequencyTable};

use crate::{ChartDataset, PointColor};

/// Bars of per-class counts from a frequency table.
#[expect(clippy::cast_precision_loss)]
#[must_use]
pub fn frequency_bars(table: &FrequencyTable) -> ChartDataset {
    let mut dataset = ChartDataset::new();
    for class in table.classes() {
        dataset.push(
            format!("{:.1}..{:.1}", class.range.start, class.range.end),
            class.count as f64,
            PointColor::Base,
        );
    }
    dataset
}

/// A rising line of cumulative relative frequencies.
#[must_use]
pub fn cumulative_line(table: &FrequencyTable) -> ChartDataset {
    let mut dataset = ChartDataset::new();
    for class in table.classes() {
        dataset.push(
            format!("<{:.1}", class.range.end),
            class.cumulative_relative,
            PointColor::Base,
        );
    }
    dataset
}

/// The five-number summary as labeled points, with outliers accented and
/// appended after the summary points.
#[must_use]
pub fn box_plot(summary: &DescriptiveSummary, values: &[f64]) -> ChartDataset {
    let (min, q1, median, q3, max) = summary.five_number_summary();
    let mut dataset = ChartDataset::new();
    dataset.push("min", min, PointColor::Base);
    dataset.push("q1", q1, PointColor::Base);
    dataset.push("median", median, PointColor::Base);
    dataset.push("q3", q3, PointColor::Base);
    dataset.push("max", max, PointColor::Base);
    for outlier in summary.outliers(values) {
        dataset.push(format!("{outlier}"), outlier, PointColor::Accent);
    }
    dataset
}

/// Whether outcome `x` lies in the region a discrete query asks about.
fn in_discrete_region(x: u64, target: u64, query: ProbabilityQuery) -> bool {
    match query {
        ProbabilityQuery::Exact => x == target,
        ProbabilityQuery::AtMost => x <= target,
        ProbabilityQuery::AtLeast => x >= target,
    }
}

/// PMF bars over the full binomial support, with the queried region accented.
#[must_use]
pub fn binomial_pmf(dist: &Binomial, target: u64, query: ProbabilityQuery) -> ChartDataset {
    let mut dataset = ChartDataset::new();
    for x in 0..=dist.trials() {
        let color = if in_discrete_region(x, target, query) {
            PointColor::Accent
        } else {
            PointColor::Base
        };
        dataset.push(x.to_string(), dist.pmf(x), color);
    }
    dataset
}

/// PMF bars over the bulk of the Poisson support, queried region accented.
///
/// The unbounded support is cut where the mass becomes negligible
/// (λ + 4√λ), but always reaches the queried value.
#[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn poisson_pmf(dist: &Poisson, target: u64, query: ProbabilityQuery) -> ChartDataset {
    let rate = dist.rate().max(0.0);
    let bulk_end = (rate + 4.0 * rate.sqrt()).ceil() as u64;
    let support_end = bulk_end.max(target).max(1);
    let mut dataset = ChartDataset::new();
    for x in 0..=support_end {
        let color = if in_discrete_region(x, target, query) {
            PointColor::Accent
        } else {
            PointColor::Base
        };
        dataset.push(x.to_string(), dist.pmf(x), color);
    }
    dataset
}

/// Whether `x` lies in the region a normal query shades.
fn in_normal_region(x: f64, query: NormalQuery) -> bool {
    match query {
        NormalQuery::LeftTail(bound) => x <= bound,
        NormalQuery::RightTail(bound) => x >= bound,
        NormalQuery::Between(a, b) => {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            (lo..=hi).contains(&x)
        }
        NormalQuery::Outside(a, b) => !in_normal_region(x, NormalQuery::Between(a, b)),
    }
}

/// The density curve sampled across μ ± 4σ, shaded region accented.
#[must_use]
pub fn normal_curve(dist: &Normal, resolution: usize, query: Option<NormalQuery>) -> ChartDataset {
    let mut dataset = ChartDataset::new();
    for (x, density) in dist.curve(resolution) {
        let color = match query {
            Some(query) if in_normal_region(x, query) => PointColor::Accent,
            _ => PointColor::Base,
        };
        dataset.push(format!("{x:.2}"), density, color);
    }
    dataset
}

/// Empirical face-frequency bars from the roller's history window.
#[must_use]
pub fn dice_faces(roller: &DiceRoller) -> ChartDataset {
    let mut dataset = ChartDataset::new();
    for (face, frequency) in roller.face_frequencies().iter().enumerate() {
        dataset.push((face + 1).to_string(), *frequency, PointColor::Base);
    }
    dataset
}
