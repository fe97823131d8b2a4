mod command;
mod util;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    command::run()
}
