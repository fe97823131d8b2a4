use clap::{Parser, Subcommand};

mod binomial;
mod count;
mod describe;
mod dice;
mod events;
mod frequency;
mod normal;
mod poisson;
mod test;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Which calculator to run
    #[command(subcommand)]
    calculator: Calculator,
}

#[derive(Debug, Clone, Subcommand)]
enum Calculator {
    /// Descriptive statistics for a numeric sample
    Describe(describe::DescribeArg),
    /// Frequency table over user-chosen classes
    Frequency(frequency::FrequencyArg),
    /// Binomial probabilities and moments
    Binomial(binomial::BinomialArg),
    /// Poisson probabilities and moments
    Poisson(poisson::PoissonArg),
    /// Normal probabilities, z-scores, and inverse lookups
    Normal(normal::NormalArg),
    /// One-sample hypothesis tests
    #[command(subcommand)]
    Test(test::TestCommand),
    /// Factorials, permutations, and combinations
    Count(count::CountArg),
    /// Two-event probability rules
    Events(events::EventsArg),
    /// Roll dice and track empirical face frequencies
    Dice(dice::DiceArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    match args.calculator {
        Calculator::Describe(arg) => describe::run(&arg)?,
        Calculator::Frequency(arg) => frequency::run(&arg)?,
        Calculator::Binomial(arg) => binomial::run(&arg)?,
        Calculator::Poisson(arg) => poisson::run(&arg)?,
        Calculator::Normal(arg) => normal::run(&arg)?,
        Calculator::Test(cmd) => test::run(&cmd)?,
        Calculator::Count(arg) => count::run(&arg)?,
        Calculator::Events(arg) => events::run(&arg)?,
        Calculator::Dice(arg) => dice::run(&arg)?,
    }
    Ok(())
}
