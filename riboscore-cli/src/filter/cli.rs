use clap::{Command, arg};

pub const FILTER_CMD: &str = "filter";
pub const DEFAULT_OUT: &str = "tx_summary_filtered.tsv";

pub fn create_filter_cli() -> Command {
    Command::new(FILTER_CMD)
        .author("Databio")
        .about("Drop transcript summaries whose span overlaps an exclusion interval")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <input> "Transcript summary file to filter").required(true))
        .arg(arg!(-x --exclusions <exclusions> "Exclusion intervals (chr, start, end)").required(true))
        .arg(arg!(-o --output [output] "Output file for the surviving summaries"))
}
