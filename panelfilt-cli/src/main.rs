mod denovo;
mod panel;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "panelfilt";
    pub const BIN_NAME: &str = "panelfilt";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Filter trio variant reports against gene panels and extract de novo calls.")
        .subcommand_required(true)
        .subcommand(panel::cli::create_panel_cli())
        .subcommand(denovo::cli::create_denovo_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // PANEL APPLICATION
        //
        Some((panel::cli::PANEL_CMD, matches)) => {
            panel::handlers::run_panel(matches)?;
        }

        //
        // DE NOVO EXTRACTION
        //
        Some((denovo::cli::DENOVO_CMD, matches)) => {
            denovo::handlers::run_denovo(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
