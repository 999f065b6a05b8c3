use std::io;

use log::{error, info};

use super::{read_input, run, write_output, Mode};
use crate::tools::cli::Opts;

/// Expand the input defined in opts <Opts> with the selected codec. A corrupt or truncated
/// input fails as a whole; nothing is written.
pub fn decompress(opts: &Opts) -> io::Result<()> {
    let packed = read_input(opts)?;
    let data = match run(opts.algorithm, Mode::Expand, &packed) {
        Ok(data) => data,
        Err(e) => {
            error!(
                "Fatal error: {} is not a valid {} stream: {}",
                opts.input.as_deref().unwrap_or("standard input"),
                opts.algorithm,
                e
            );
            return Err(e.into());
        }
    };
    info!(
        "{}: {} bytes -> {} bytes.",
        opts.algorithm,
        packed.len(),
        data.len()
    );

    write_output(opts, &data)
}
