use std::fs::File;
use std::io::{BufRead, BufWriter};
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;

use riboscore_core::models::Region;
use riboscore_core::utils::get_dynamic_reader;
use riboscore_scoring::{ExclusionSet, filter_stream};

use super::cli;

fn read_exclusions(path: &Path) -> Result<ExclusionSet> {
    let reader = get_dynamic_reader(path)?;

    let mut regions: Vec<Region> = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.is_empty() {
            continue;
        }
        regions.push(line.parse()?);
    }

    Ok(ExclusionSet::new(&regions))
}

pub fn run_filter(matches: &ArgMatches) -> Result<()> {
    let input = matches
        .get_one::<String>("input")
        .expect("A path to a transcript summary file is required.");

    let exclusions_file = matches
        .get_one::<String>("exclusions")
        .expect("A path to an exclusion intervals file is required.");

    let default_out = cli::DEFAULT_OUT.to_string();
    let output = matches.get_one::<String>("output").unwrap_or(&default_out);

    let exclusions = read_exclusions(Path::new(exclusions_file))?;
    if exclusions.is_empty() {
        eprintln!("Warning: exclusion list {} is empty", exclusions_file);
    } else {
        eprintln!("Loaded {} exclusion intervals", exclusions.len());
    }

    // stream the summaries: only the exclusion side is held in memory
    let reader = get_dynamic_reader(Path::new(input))?;
    let writer = BufWriter::new(File::create(output)?);
    let report = filter_stream(reader, &exclusions, writer)?;

    eprintln!(
        "Kept {} summaries, dropped {} overlapping an exclusion",
        report.kept, report.dropped
    );

    Ok(())
}
