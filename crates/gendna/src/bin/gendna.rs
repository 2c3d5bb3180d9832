use std::io;
use std::io::BufWriter;
use std::io::Write;
use env_logger::Builder;
use clap::Parser;
use anyhow::Result;
use rand::rng;

use gendna::run;
use gendna::input_parsers::GenerateArguments;
use gendna::input_parsers::LengthArgument;


#[derive(Debug, Parser)]
#[command(name = "gendna")]
#[command(author, version, about = "Generate a random DNA sequence in FASTA-like format")]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArguments,
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
    init_logging(cli.generate.verbose);

    // Nothing reaches stdout unless the length is valid.
    let length = LengthArgument::parse(&cli.generate.length)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&length, &mut rng(), &mut out)?;
    Ok(())
}
