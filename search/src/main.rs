use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use corpus::Encoding;
use search::{BoyerMoore, Kmp, RabinKarp, RkConfig, SubstringSearch};

#[derive(Debug, Clone, clap::ValueEnum)]
enum Algorithm {
    BoyerMoore,
    Kmp,
    RabinKarp,
}

/// Example:
/// cargo run --release -- -t data/article1.txt -t data/article2.txt --pattern "unrolled" -a boyer-moore --measure-time -n 100
/// cargo run --release -- -t data/article1.txt --pattern "dementor" -a rabin-karp --rk-modulus 101
#[derive(Debug, clap::Parser)]
#[command(
    name = "substring-search",
    about = "Run a substring search algorithm on one pattern and one or more texts"
)]
struct Cli {
    #[arg(short, long, value_enum)]
    algo: Algorithm,

    #[arg(short = 't', long = "text", value_name = "TEXT", required = true)]
    texts: Vec<PathBuf>,

    #[arg(
        long,
        conflicts_with = "pattern_file",
        required_unless_present = "pattern_file"
    )]
    pattern: Option<String>,

    #[arg(
        long = "pattern-file",
        value_name = "PATTERN_FILE",
        conflicts_with = "pattern",
        required_unless_present = "pattern"
    )]
    pattern_file: Option<PathBuf>,

    #[arg(short = 'e', long = "encoding", default_value = "utf8")]
    encoding: Encoding,

    /// Base for the Rabin-Karp polynomial hash (only used with --algo rabin-karp)
    #[arg(long = "rk-base", default_value_t = 256)]
    rk_base: u64,

    /// Modulus for the Rabin-Karp polynomial hash (only used with --algo rabin-karp)
    #[arg(long = "rk-modulus", default_value_t = 101)]
    rk_modulus: u64,

    /// Run the search this many times over each text (for timing)
    #[arg(short = 'n', long = "repeat", default_value_t = 1)]
    repeat: u32,

    /// Optional output file; if omitted, results are written to stdout
    #[arg(short = 'o', long = "output", value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Measure and print execution time for the repeat loop
    #[arg(long)]
    measure_time: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();

    let pattern = load_pattern(&cli)?;
    if pattern.is_empty() {
        return Err("Pattern must not be empty".into());
    }
    if cli.repeat == 0 {
        return Err("--repeat must be at least 1".into());
    }
    if cli.rk_modulus == 0 {
        return Err("--rk-modulus must be at least 1".into());
    }

    let mut out: Box<dyn Write> = match cli.output {
        Some(ref path) => Box::new(File::create(path)?),
        None => Box::new(io::stdout()),
    };

    writeln!(
        out,
        "# algorithm={:?}, encoding={}, pattern-length={}, repeat={}",
        cli.algo,
        cli.encoding,
        pattern.len(),
        cli.repeat
    )?;

    for text_path in &cli.texts {
        let text = corpus::load_text(text_path, cli.encoding)?;
        log::info!(
            "loaded {:?}: {} bytes, searching with {:?}",
            text_path,
            text.len(),
            cli.algo
        );

        let (found, duration) = run_algorithm(&cli, &text, &pattern);

        writeln!(out, "text={:?}", text_path)?;

        if let Some(d) = duration {
            writeln!(
                out,
                "elapsed: {:.6} s ({} ns/iter)",
                d.as_secs_f64(),
                d.as_nanos() / u128::from(cli.repeat)
            )?;
        }

        match found {
            Some(idx) => writeln!(out, "match: Some({idx})")?,
            None => writeln!(out, "match: not found")?,
        }
        writeln!(out)?;
    }

    Ok(())
}

fn load_pattern(cli: &Cli) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(ref pat) = cli.pattern {
        Ok(pat.clone())
    } else if let Some(ref path) = cli.pattern_file {
        Ok(corpus::load_text(path, cli.encoding)?)
    } else {
        Err("Either --pattern or --pattern-file must be provided".into())
    }
}

fn run_algorithm(cli: &Cli, text: &str, pattern: &str) -> (Option<usize>, Option<Duration>) {
    let searcher: Box<dyn SubstringSearch> = match cli.algo {
        Algorithm::BoyerMoore => Box::new(BoyerMoore),
        Algorithm::Kmp => Box::new(Kmp),
        Algorithm::RabinKarp => Box::new(RabinKarp::new(RkConfig {
            base: cli.rk_base,
            modulus: cli.rk_modulus,
        })),
    };

    let start = if cli.measure_time {
        Some(Instant::now())
    } else {
        None
    };

    let mut result = None;
    for _ in 0..cli.repeat {
        result = searcher.find(text, pattern);
    }

    let duration = start.map(|s| s.elapsed());

    (result, duration)
}
