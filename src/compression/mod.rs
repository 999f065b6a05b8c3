//! The compression module drives the codecs for the command line tool.
//!
//! Each codec works on one complete in-memory buffer. The driver reads the whole input (a file or
//! standard input), hands it to the chosen codec, and writes the whole result (a file or standard
//! output). It never touches codec state.
//!
//! - Huffman: static Huffman coding with the trie stored ahead of the data.
//! - Lzw: Lempel-Ziv-Welch with fixed 12 bit codewords.
//! - RunLength: bit level run-length coding.
//!

pub mod compress;
pub mod decompress;

use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use log::{info, warn};

use crate::error::Result;
use crate::huffman_coding::huffman;
use crate::lzw::codec as lzw;
use crate::tools::cli::{Opts, Output};
use crate::tools::run_length;

/// The available codecs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ArgEnum)]
pub enum Codec {
    /// Static Huffman coding
    Huffman,
    /// Lempel-Ziv-Welch, 12 bit codewords
    Lzw,
    /// Bit level run-length coding
    RunLength,
}

impl Codec {
    /// File extension added on compression and removed on expansion.
    pub fn extension(&self) -> &'static str {
        match self {
            Codec::Huffman => ".huf",
            Codec::Lzw => ".lzw",
            Codec::RunLength => ".rle",
        }
    }
}

impl Display for Codec {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Compress or Expand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Compress,
    Expand,
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Run one codec over a complete buffer.
pub fn run(codec: Codec, mode: Mode, data: &[u8]) -> Result<Vec<u8>> {
    match (codec, mode) {
        (Codec::Huffman, Mode::Compress) => huffman::compress(data),
        (Codec::Huffman, Mode::Expand) => huffman::expand(data),
        (Codec::Lzw, Mode::Compress) => lzw::compress(data),
        (Codec::Lzw, Mode::Expand) => lzw::expand(data),
        (Codec::RunLength, Mode::Compress) => run_length::compress(data),
        (Codec::RunLength, Mode::Expand) => run_length::expand(data),
    }
}

/// Name of the file to write, or None for standard output.
pub fn output_name(opts: &Opts) -> Option<String> {
    match &opts.output {
        Output::Stdout => None,
        Output::File(Some(name)) => Some(name.clone()),
        Output::File(None) => {
            let input = opts.input.as_ref()?;
            let ext = opts.algorithm.extension();
            Some(match opts.op_mode {
                Mode::Compress => format!("{}{}", input, ext),
                Mode::Expand => match input.strip_suffix(ext) {
                    Some(stem) if !stem.is_empty() => stem.to_string(),
                    _ => format!("{}.out", input),
                },
            })
        }
    }
}

/// Read the whole input named in opts, or standard input.
fn read_input(opts: &Opts) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    match &opts.input {
        Some(name) => {
            info!("Reading {}.", name);
            File::open(name)?.read_to_end(&mut data)?;
        }
        None => {
            info!("Reading standard input.");
            io::stdin().lock().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

/// Write the whole result to the output named in opts, or standard output.
fn write_output(opts: &Opts, data: &[u8]) -> io::Result<()> {
    match output_name(opts) {
        Some(name) => {
            if Path::new(&name).exists() && !opts.force_overwrite {
                warn!("{} exists. Use --force to overwrite it.", name);
                return Err(io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    format!("output file {} already exists", name),
                ));
            }
            info!("Writing {}.", name);
            let mut f_out = File::create(&name)?;
            f_out.write_all(data)?;
            f_out.flush()
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            out.write_all(data)?;
            out.flush()
        }
    }
}

#[cfg(test)]
mod test {
    use super::{output_name, run, Codec, Mode};
    use crate::tools::cli::{Opts, Output};

    fn opts(codec: Codec, mode: Mode, input: Option<&str>) -> Opts {
        Opts {
            algorithm: codec,
            op_mode: mode,
            input: input.map(|s| s.to_string()),
            ..Opts::default()
        }
    }

    #[test]
    fn run_round_trip_test() {
        let data = b"she sells sea shells by the sea shore".to_vec();
        for codec in [Codec::Huffman, Codec::Lzw, Codec::RunLength] {
            let packed = run(codec, Mode::Compress, &data).unwrap();
            assert_eq!(run(codec, Mode::Expand, &packed).unwrap(), data, "{}", codec);
        }
    }

    #[test]
    fn output_name_test() {
        let o = opts(Codec::Huffman, Mode::Compress, Some("notes.txt"));
        assert_eq!(output_name(&o), Some("notes.txt.huf".to_string()));
        let o = opts(Codec::Lzw, Mode::Expand, Some("notes.txt.lzw"));
        assert_eq!(output_name(&o), Some("notes.txt".to_string()));
        let o = opts(Codec::Lzw, Mode::Expand, Some("notes.txt.huf"));
        assert_eq!(output_name(&o), Some("notes.txt.huf.out".to_string()));
        let o = opts(Codec::RunLength, Mode::Compress, None);
        assert_eq!(output_name(&o), None);

        let mut o = opts(Codec::Huffman, Mode::Compress, Some("a"));
        o.output = Output::Stdout;
        assert_eq!(output_name(&o), None);
        o.output = Output::File(Some("b".to_string()));
        assert_eq!(output_name(&o), Some("b".to_string()));
    }
}
