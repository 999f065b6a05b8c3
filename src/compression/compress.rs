use std::io;

use log::info;

use super::{read_input, run, write_output, Mode};
use crate::tools::cli::Opts;

/// Compress the input defined in opts <Opts> with the selected codec.
pub fn compress(opts: &Opts) -> io::Result<()> {
    let data = read_input(opts)?;
    let packed = run(opts.algorithm, Mode::Compress, &data)?;

    // Report how well we did. Empty input cannot shrink, so skip the ratio.
    if data.is_empty() {
        info!("{}: empty input, wrote {} bytes.", opts.algorithm, packed.len());
    } else {
        info!(
            "{}: {} bytes -> {} bytes ({:.1}%).",
            opts.algorithm,
            data.len(),
            packed.len(),
            packed.len() as f64 * 100.0 / data.len() as f64
        );
    }

    write_output(opts, &packed)
}
