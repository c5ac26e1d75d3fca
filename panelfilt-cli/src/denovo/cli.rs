use clap::{Arg, Command};

pub const DENOVO_CMD: &str = "denovo";

pub fn create_denovo_cli() -> Command {
    Command::new(DENOVO_CMD)
        .about("Extract the de novo calls from a trio variant report")
        .arg_required_else_help(true)
        .arg(Arg::new("report").required(true).help("The trio variant report to filter"))
}
