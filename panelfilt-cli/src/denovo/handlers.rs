use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use panelfilt_core::filter::filter_de_novo;
use panelfilt_core::models::VariantReport;

pub fn run_denovo(matches: &ArgMatches) -> Result<()> {
    let report_path = matches
        .get_one::<String>("report")
        .expect("A path to a variant report is required.");

    println!("Extracting de novo calls...\n");
    println!("Report:      {}", report_path);

    let report = VariantReport::try_from(Path::new(report_path))?;
    let out = filter_de_novo(&report)?;

    println!("Output:      {}", out.display());
    println!("\nDone.");

    Ok(())
}
