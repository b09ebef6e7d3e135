//! trizip - file compression with static Huffman, BWT + run-length and adaptive LZW.
//!
//! Compressed files keep the original name plus a method tag, e.g.
//! `notes.txt` becomes `notes_txtY_lzw.opt_lzw`.

mod commands;
mod naming;
mod utils;

use clap::{ArgAction, Parser, Subcommand};
use commands::{Method, cmd_codes, cmd_compress, cmd_decompress, cmd_test, lzw_config};
use std::path::PathBuf;
use utils::{init_logger, log_level};

#[derive(Parser)]
#[command(name = "trizip")]
#[command(author, version, about = "Pure Rust file compressor: Huffman, BWT + RLE, LZW")]
#[command(long_about = "
trizip compresses files with one of three methods and restores them.

Examples:
  trizip compress --method lzw notes.txt
  trizip compress --method rle -o out/ a.bin b.bin
  trizip decompress notes_txtY_lzw.opt_lzw
  trizip test notes.txt
  trizip codes --json notes.txt
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress files
    #[command(alias = "c")]
    Compress {
        /// Files to compress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Compression method
        #[arg(short, long, value_enum)]
        method: Method,

        /// Directory for the compressed files (next to the input if omitted)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Largest LZW code width in bits (9-24)
        #[arg(long)]
        max_bits: Option<u8>,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,
    },

    /// Decompress files
    #[command(alias = "d")]
    Decompress {
        /// Files to decompress
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Compression method - detected from the file name if not specified
        #[arg(short, long, value_enum)]
        method: Option<Method>,

        /// Directory for the restored files (next to the input if omitted)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Largest LZW code width in bits (9-24)
        #[arg(long)]
        max_bits: Option<u8>,

        /// Overwrite existing output files
        #[arg(short, long)]
        force: bool,
    },

    /// Round-trip files through every method and report the ratios
    #[command(alias = "t")]
    Test {
        /// Files to test
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Largest LZW code width in bits (9-24)
        #[arg(long)]
        max_bits: Option<u8>,
    },

    /// Show the Huffman code table of a file
    Codes {
        /// File to analyze
        file: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logger(log_level(cli.verbose, cli.quiet));

    let result = match cli.command {
        Commands::Compress {
            files,
            method,
            output_dir,
            max_bits,
            force,
        } => cmd_compress(
            &files,
            method,
            output_dir.as_deref(),
            lzw_config(max_bits),
            force,
        ),
        Commands::Decompress {
            files,
            method,
            output_dir,
            max_bits,
            force,
        } => cmd_decompress(
            &files,
            method,
            output_dir.as_deref(),
            lzw_config(max_bits),
            force,
        ),
        Commands::Test { files, max_bits } => cmd_test(&files, lzw_config(max_bits)),
        Commands::Codes { file, json } => cmd_codes(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
