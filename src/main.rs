//! CLI entry point for inspecting 3DBodyTex lesion annotations

use clap::Parser;
use skin3d::io::cli::{Cli, run};
use skin3d::io::logging::init_logging;

fn main() -> skin3d::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}
