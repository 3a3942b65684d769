use clap::{Command, arg};

pub const SCORE_CMD: &str = "score";
pub const DEFAULT_OUT: &str = "region_scores.tsv";

pub fn create_score_cli() -> Command {
    Command::new(SCORE_CMD)
        .author("Databio")
        .about("Score signal support for a set of query regions against a signal track")
        .arg_required_else_help(true)
        .arg(arg!(-g --regions <regions> "Query regions file (name, chr, start, end)").required(true))
        .arg(
            arg!(-r --signal <signal> "Signal track: scored BED (chr, start, end, value) or BigWig")
                .required(true),
        )
        .arg(arg!(-o --output [output] "Output file for per-region scores"))
        .arg(arg!(-c --cutoff [cutoff] "Minimum region length to score; shorter regions are dropped"))
        .arg(arg!(-f --format [format] "Force the track format (sparse or dense) instead of auto-detecting"))
        .arg(arg!(-t --threads [threads] "Number of scoring threads"))
}
