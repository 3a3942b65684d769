use clap::{Command, arg};

pub const SUMMARIZE_CMD: &str = "summarize";
pub const DEFAULT_OUT: &str = "tx_summary.tsv";

pub fn create_summarize_cli() -> Command {
    Command::new(SUMMARIZE_CMD)
        .author("Databio")
        .about("Roll per-region scores up into one summary row per transcript")
        .arg_required_else_help(true)
        .arg(
            arg!(-i --input <input> "Region scores file (name, chr, start, end, sum, score)")
                .required(true),
        )
        .arg(arg!(-o --output [output] "Output file for the transcript summary"))
}
