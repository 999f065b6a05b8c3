//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use bytepress::compression::compress::compress;
use bytepress::compression::decompress::decompress;
use bytepress::compression::Mode;
use bytepress::tools::cli::opts_init;

use log::{info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace. The real level is set from the
    // command line. Log to stderr, since compressed data may be going to stdout.
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;

    let options = opts_init();

    //----- Figure how what we need to do and go do it
    let result = match options.op_mode {
        Mode::Compress => compress(&options),
        Mode::Expand => decompress(&options),
    };

    info!("Done.\n");
    result
}
