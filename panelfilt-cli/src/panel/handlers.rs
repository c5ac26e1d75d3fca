use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ArgMatches;

use panelfilt_bedtools::{Bedtools, IntervalStore, unique_overlaps};
use panelfilt_core::filter::{apply_panel, filter_de_novo, panel_label};
use panelfilt_core::models::VariantReport;

pub fn run_panel(matches: &ArgMatches) -> Result<()> {
    let report_path = matches
        .get_one::<String>("report")
        .expect("A path to a variant report is required.");

    let panels: Vec<PathBuf> = matches
        .get_many::<String>("panels")
        .expect("At least one panel file is required.")
        .map(PathBuf::from)
        .collect();

    let default_bedtools = "bedtools".to_string();
    let bedtools = matches
        .get_one::<String>("bedtools")
        .unwrap_or(&default_bedtools);

    println!("Applying panels...\n");
    println!("Report:      {}", report_path);
    for panel in &panels {
        println!("Panel:       {}", panel.display());
    }

    let engine = Bedtools::new(bedtools);
    let report = VariantReport::try_from(Path::new(report_path))?;

    let store = IntervalStore::from_report(&report)?;
    let sorted = store.sorted_bed(&engine)?;
    let keep = unique_overlaps(&engine, sorted, &panels)?;

    let out = apply_panel(&report, &panel_label(&panels), &keep)?;
    println!("Output:      {}", out.display());

    if matches.get_flag("denovo") {
        let out = filter_de_novo(&report)?;
        println!("Output:      {}", out.display());
    }

    println!("\nDone.");

    Ok(())
}
