//! bedkit: BED, BEDPE and FASTA transformations
//!
//! Usage: bedkit <COMMAND> [OPTIONS]

use clap::{Args, Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use std::process;

use bedkit::bed::BedError;
use bedkit::commands::{
    BedpeFilterCommand, BedpeToBedCommand, FastaSizesCommand, MoveCommand, ResizeCommand,
};
use bedkit::io::{open_output, open_reader};

#[derive(Parser)]
#[command(name = "bedkit")]
#[command(version)]
#[command(about = "bedkit: BED, BEDPE and FASTA transformations", long_about = None)]
struct Cli {
    /// Print run statistics to stderr
    #[arg(long, global = true)]
    stats: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IoArgs {
    /// Input file. Defaults to standard input for piping
    #[arg(short, long, value_parser = existing_file)]
    input: Option<PathBuf>,

    /// Output file. Defaults to standard output for piping
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Set annotations' size
    #[command(alias = "setannotationssize")]
    Resize {
        #[command(flatten)]
        io: IoArgs,

        /// Annotations size
        #[arg(short, long, value_parser = clap::value_parser!(i64).range(1..))]
        size: i64,

        /// Change start position instead of end
        #[arg(short = 'c', long = "changeStart")]
        change_start: bool,

        /// Change start position instead of end for negative strand.
        /// If --changeStart is used, change end instead of start
        #[arg(short = 'r', long = "reverseForNegativeStrand")]
        reverse_for_negative_strand: bool,
    },

    /// Move annotations by a signed distance
    #[command(alias = "moveannotations")]
    Move {
        #[command(flatten)]
        io: IoArgs,

        /// Distance to move annotations, may be negative
        #[arg(short, long, allow_negative_numbers = true)]
        distance: i64,

        /// Move annotations in the opposite direction on the negative strand
        #[arg(short = 'r', long = "reverseForNegativeStrand")]
        reverse_for_negative_strand: bool,

        /// Discard annotations whose start or end becomes negative (-dn)
        #[arg(long = "discardNegatives")]
        discard_negatives: bool,
    },

    /// Convert FASTA to chromosome sizes
    #[command(name = "fasta-to-sizes", alias = "fasta2sizes")]
    FastaToSizes {
        #[command(flatten)]
        io: IoArgs,
    },

    /// Filter BEDPE records by insert size
    #[command(name = "bedpe-filter", alias = "filterbedpe")]
    BedpeFilter {
        #[command(flatten)]
        io: IoArgs,

        /// Maximum insert size between mates
        #[arg(long = "maximumInsertSize", value_parser = clap::value_parser!(i64).range(1..))]
        maximum_insert_size: Option<i64>,
    },

    /// Convert BEDPE to BED using the first mate
    #[command(name = "bedpe-to-bed", alias = "bedpe2bed")]
    BedpeToBed {
        #[command(flatten)]
        io: IoArgs,
    },
}

/// Reject input paths that do not exist before any processing starts.
///
/// Device files and pipes such as `/dev/stdin` or `<(zcat x.bed.gz)` are
/// accepted.
fn existing_file(value: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(value);
    if path.exists() {
        Ok(path)
    } else {
        Err(format!("file {} does not exist", value))
    }
}

/// Long option names, matched without regard to case.
const LONG_FLAGS: &[&str] = &[
    "size",
    "changeStart",
    "reverseForNegativeStrand",
    "distance",
    "discardNegatives",
    "maximumInsertSize",
    "input",
    "output",
    "stats",
    "help",
    "version",
];

/// Single-letter options, matched without regard to case.
const SHORT_FLAGS: &[char] = &['s', 'c', 'r', 'd', 'i', 'o', 'h'];

/// Subcommand names and aliases, matched without regard to case.
const SUBCOMMANDS: &[&str] = &[
    "resize",
    "setannotationssize",
    "move",
    "moveannotations",
    "fasta-to-sizes",
    "fasta2sizes",
    "bedpe-filter",
    "filterbedpe",
    "bedpe-to-bed",
    "bedpe2bed",
    "help",
];

fn lookup<'a>(table: &[&'a str], name: &str) -> Option<&'a str> {
    table
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(name))
}

/// Rewrite one option to the spelling clap expects, or `None` when it is
/// not a known option.
fn normalize_flag(arg: &str) -> Option<String> {
    if arg.eq_ignore_ascii_case("-dn") {
        return Some("--discardNegatives".to_string());
    }
    if let Some(rest) = arg.strip_prefix("--") {
        let (name, value) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest, None),
        };
        let canonical = lookup(LONG_FLAGS, name)?;
        return Some(match value {
            Some(value) => format!("--{}={}", canonical, value),
            None => format!("--{}", canonical),
        });
    }
    let rest = arg.strip_prefix('-')?;
    let mut chars = rest.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) => {
            let lower = letter.to_ascii_lowercase();
            SHORT_FLAGS.contains(&lower).then(|| format!("-{}", lower))
        }
        _ => lookup(LONG_FLAGS, rest).map(|canonical| format!("--{}", canonical)),
    }
}

/// Preprocess CLI arguments so option and subcommand names are not case
/// sensitive. Converts -dn to --discardNegatives and single-dash long
/// names such as -distance to their double-dash form. Values are never
/// rewritten.
fn preprocess_args<I: IntoIterator<Item = String>>(args: I) -> Vec<String> {
    let mut args = args.into_iter();
    let mut processed: Vec<String> = args.next().into_iter().collect();
    let mut command_seen = false;

    for arg in args.by_ref() {
        if arg == "--" {
            processed.push(arg);
            break;
        }
        if let Some(flag) = normalize_flag(&arg) {
            processed.push(flag);
        } else if !command_seen && !arg.starts_with('-') {
            command_seen = true;
            processed.push(lookup(SUBCOMMANDS, &arg).map_or(arg, str::to_string));
        } else {
            processed.push(arg);
        }
    }
    processed.extend(args);
    processed
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse_from(preprocess_args(std::env::args()));

    let result = match cli.command {
        Commands::Resize {
            io,
            size,
            change_start,
            reverse_for_negative_strand,
        } => run_resize(io, size, change_start, reverse_for_negative_strand, cli.stats),
        Commands::Move {
            io,
            distance,
            reverse_for_negative_strand,
            discard_negatives,
        } => run_move(
            io,
            distance,
            reverse_for_negative_strand,
            discard_negatives,
            cli.stats,
        ),
        Commands::FastaToSizes { io } => run_fasta_to_sizes(io, cli.stats),
        Commands::BedpeFilter {
            io,
            maximum_insert_size,
        } => run_bedpe_filter(io, maximum_insert_size, cli.stats),
        Commands::BedpeToBed { io } => run_bedpe_to_bed(io, cli.stats),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_resize(
    io: IoArgs,
    size: i64,
    change_start: bool,
    reverse_for_negative_strand: bool,
    stats: bool,
) -> Result<(), BedError> {
    debug!("Set annotations size to {}", size);
    let cmd = ResizeCommand::new(size)
        .with_change_start(change_start)
        .with_reverse_for_negative_strand(reverse_for_negative_strand);

    let reader = open_reader(io.input.as_deref())?;
    let output = open_output(io.output.as_deref())?;
    let result = cmd.run(reader, output)?;

    if stats {
        eprintln!("Resize stats: {}", result);
    }
    Ok(())
}

fn run_move(
    io: IoArgs,
    distance: i64,
    reverse_for_negative_strand: bool,
    discard_negatives: bool,
    stats: bool,
) -> Result<(), BedError> {
    debug!("Move annotations by {} bases", distance);
    let cmd = MoveCommand::new(distance)
        .with_reverse_for_negative_strand(reverse_for_negative_strand)
        .with_discard_negative(discard_negatives);

    let reader = open_reader(io.input.as_deref())?;
    let output = open_output(io.output.as_deref())?;
    let result = cmd.run(reader, output)?;

    if stats {
        eprintln!("Move stats: {}", result);
    }
    Ok(())
}

fn run_fasta_to_sizes(io: IoArgs, stats: bool) -> Result<(), BedError> {
    debug!("Fasta to sizes");
    let reader = open_reader(io.input.as_deref())?;
    let output = open_output(io.output.as_deref())?;
    let result = FastaSizesCommand::new().run(reader, output)?;

    if stats {
        eprintln!("Fasta to sizes stats: {}", result);
    }
    Ok(())
}

fn run_bedpe_filter(
    io: IoArgs,
    maximum_insert_size: Option<i64>,
    stats: bool,
) -> Result<(), BedError> {
    debug!("Filter BEDPE, maximum insert size {:?}", maximum_insert_size);
    let cmd = BedpeFilterCommand::new().with_maximum_insert_size(maximum_insert_size);

    let reader = open_reader(io.input.as_deref())?;
    let output = open_output(io.output.as_deref())?;
    let result = cmd.run(reader, output)?;

    if stats {
        eprintln!("BEDPE filter stats: {}", result);
    }
    Ok(())
}

fn run_bedpe_to_bed(io: IoArgs, stats: bool) -> Result<(), BedError> {
    debug!("BEDPE to BED");
    let reader = open_reader(io.input.as_deref())?;
    let output = open_output(io.output.as_deref())?;
    let result = BedpeToBedCommand::new().run(reader, output)?;

    if stats {
        eprintln!("BEDPE to BED stats: {}", result);
    }
    Ok(())
}
