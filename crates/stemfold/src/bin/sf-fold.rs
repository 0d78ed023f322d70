use std::io::Write;
use log::info;
use colored::*;
use env_logger::Builder;
use clap::Args;
use clap::Parser;
use clap::ArgAction;
use anyhow::Result;

use stemfold::fold::{fold, free_energy, structure_to_dot_bracket};
use stemfold::input_parsers::ruler;
use stemfold::input_parsers::read_fold_input;
use stemfold::fold_parsers::FoldArguments;


#[derive(Debug, Args)]
pub struct FoldInput {
    /// Input file (FASTA-like), or "-" for stdin
    #[arg(value_name = "INPUT", default_value = "-")]
    pub input: String,

    /// Print the feature list as JSON
    #[arg(long)]
    pub json: bool,

    /// Verbosity (-v = info, -vv = debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}


#[derive(Debug, Parser)]
#[command(name = "sf-fold")]
#[command(author, version, about)]
pub struct Cli {
    #[command(flatten)]
    pub fold: FoldInput,

    #[command(flatten, next_help_heading = "Folding parameters")]
    pub params: FoldArguments,
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format(|buf, record| {
            // no prefix, just the message
            writeln!(buf, "{}", record.args())
        })
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.fold.verbose);

    let options = cli.params.build_options()?;

    let (header, sequence) = read_fold_input(&cli.fold.input)?;
    if let Some(h) = header {
        println!("{}", h.yellow())
    }

    let structs = fold(&sequence, &options);
    if cli.fold.json {
        println!("{}", serde_json::to_string(&structs)?);
        return Ok(());
    }

    let structure = structure_to_dot_bracket(&sequence, &structs);
    let energy = free_energy(&structs);

    info!("{}", ruler(sequence.len().saturating_sub(1)).magenta());
    println!("{}\n{} {}", sequence, structure, format!("{:>6.2}", energy).green());
    info!("{}", ruler(sequence.len().saturating_sub(1)).magenta());

    for s in &structs {
        info!("{}", s);
    }

    Ok(())
}
