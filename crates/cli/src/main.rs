use clap::Parser;

use ricefinder_cli::config::Args;

fn main() -> anyhow::Result<()> {
    ricefinder_observability::init();

    let args = Args::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    ricefinder_cli::run(&args, &mut out)
}
