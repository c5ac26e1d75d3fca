use clap::{Arg, ArgAction, Command, arg};

pub const PANEL_CMD: &str = "apply";

pub fn create_panel_cli() -> Command {
    Command::new(PANEL_CMD)
        .about("Filter a trio variant report down to the variants overlapping one or more panels")
        .arg_required_else_help(true)
        .arg(Arg::new("report").required(true).help("The trio variant report to filter"))
        .arg(
            Arg::new("panels")
                .required(true)
                .num_args(1..)
                .help("One or more panel region files (bed)"),
        )
        .arg(arg!(--bedtools <path> "Path to the bedtools executable"))
        .arg(
            Arg::new("denovo")
                .long("denovo")
                .action(ArgAction::SetTrue)
                .help("Also extract the de novo calls from the same report"),
        )
}
