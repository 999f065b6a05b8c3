use clap::Parser;
use log::{info, warn};
use std::{fmt::Display, fmt::Formatter};

use crate::compression::{Codec, Mode};

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

impl Verbosity {
    fn level(&self) -> log::LevelFilter {
        match self {
            Verbosity::Quiet => log::LevelFilter::Off,
            Verbosity::Errors => log::LevelFilter::Error,
            Verbosity::Warnings => log::LevelFilter::Warn,
            Verbosity::Info => log::LevelFilter::Info,
            Verbosity::Debug => log::LevelFilter::Debug,
            Verbosity::Trace => log::LevelFilter::Trace,
        }
    }
}

impl From<u8> for Verbosity {
    fn from(v: u8) -> Self {
        match v {
            0 => Verbosity::Quiet,
            1 => Verbosity::Errors,
            2 => Verbosity::Warnings,
            3 => Verbosity::Info,
            4 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Define the two output channels. A file with no name gets one derived from the input.
pub enum Output {
    File(Option<String>),
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::File(Some(name)) => write!(f, "File({})", name),
            Output::File(None) => write!(f, "File"),
            Output::Stdout => write!(f, "Stdout"),
        }
    }
}

/// Define all user settable options to control program behavior
#[derive(Debug)]
pub struct Opts {
    /// Codec used
    pub algorithm: Codec,
    /// Name of file to read for input (standard input if None)
    pub input: Option<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Compress/Expand
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl Opts {
    pub fn new() -> Self {
        Self {
            algorithm: Codec::Huffman,
            input: None,
            force_overwrite: false,
            op_mode: Mode::Compress,
            output: Output::File(None),
            verbose: Verbosity::Warnings,
        }
    }
}

impl Default for Opts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman, LZW and run-length compression of files",
    long_about = "
    Compresses or expands one file (or standard input) with one of three classical codecs:
    static Huffman coding, LZW with 12 bit codewords, or bit level run-length coding.

    Compressed files carry no header. Expand a file with the same codec that compressed it."
)]
pub struct Args {
    /// Filename of file to process. Standard input is used if absent.
    #[clap()]
    filename: Option<String>,

    /// Perform compression on the input file (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform expansion on the input file
    #[clap(short = 'd', long = "decompress", conflicts_with = "compress")]
    decompress: bool,

    /// Codec to use
    #[clap(short = 'a', long = "algorithm", arg_enum, default_value = "huffman")]
    algorithm: Codec,

    /// Write output to this file instead of a name derived from the input
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout", conflicts_with = "output")]
    stdout: bool,

    /// Force overwriting output file
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', long = "verbose", default_value_t = 2)]
    v: u8,
}

impl From<Args> for Opts {
    fn from(args: Args) -> Self {
        let output = if args.stdout {
            Output::Stdout
        } else {
            Output::File(args.output)
        };
        Opts {
            algorithm: args.algorithm,
            input: args.filename,
            force_overwrite: args.force,
            op_mode: if args.decompress {
                Mode::Expand
            } else {
                Mode::Compress
            },
            output,
            verbose: Verbosity::from(args.v),
        }
    }
}

/// Parse the command line into Opts and set the log level from it.
pub fn opts_init() -> Opts {
    let opts = Opts::from(Args::parse());

    // Set the log level
    log::set_max_level(opts.verbose.level());

    // Below we report initialization status to the user
    info!("---- Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Codec set to {}", opts.algorithm);
    match &opts.input {
        Some(s) => info!("Getting input from the file {}", s),
        None => warn!("Getting input from stdin"),
    }
    info!("Output set to {}", opts.output);
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    info!("---- Initialization End ----\n");
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, Opts, Output, Verbosity};
    use crate::compression::{Codec, Mode};
    use clap::Parser;

    fn parse(args: &[&str]) -> Opts {
        Opts::from(Args::try_parse_from(args.iter().copied()).unwrap())
    }

    #[test]
    fn defaults_test() {
        let opts = parse(&["bytepress", "notes.txt"]);
        assert_eq!(opts.algorithm, Codec::Huffman);
        assert_eq!(opts.op_mode, Mode::Compress);
        assert_eq!(opts.input.as_deref(), Some("notes.txt"));
        assert_eq!(opts.output, Output::File(None));
        assert_eq!(opts.verbose, Verbosity::Warnings);
        assert!(!opts.force_overwrite);
    }

    #[test]
    fn flags_test() {
        let opts = parse(&["bytepress", "-d", "-a", "lzw", "-c", "-f", "-v4", "notes.txt.lzw"]);
        assert_eq!(opts.algorithm, Codec::Lzw);
        assert_eq!(opts.op_mode, Mode::Expand);
        assert_eq!(opts.output, Output::Stdout);
        assert_eq!(opts.verbose, Verbosity::Debug);
        assert!(opts.force_overwrite);

        let opts = parse(&["bytepress", "--algorithm", "run-length", "-o", "out.rle"]);
        assert_eq!(opts.algorithm, Codec::RunLength);
        assert_eq!(opts.output, Output::File(Some("out.rle".to_string())));
        assert_eq!(opts.input, None);
    }

    #[test]
    fn conflicting_flags_test() {
        assert!(Args::try_parse_from(["bytepress", "-z", "-d"]).is_err());
        assert!(Args::try_parse_from(["bytepress", "-c", "-o", "x"]).is_err());
        assert!(Args::try_parse_from(["bytepress", "-a", "zip"]).is_err());
    }
}
