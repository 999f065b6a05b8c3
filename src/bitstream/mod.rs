//! The bitstream module forms the I/O subsystem shared by every codec in the toolkit.
//!
//! Bits are packed most significant bit first. A BitWriter pads its last partial byte with zero
//! bits when it is closed; a BitReader reports EndOfStream when asked for bits it does not have.
//!
//! Neither side knows anything about the codecs. They are pure bit plumbing over any
//! std::io::Write sink or std::io::Read source.
//!
pub mod bitreader;
pub mod bitwriter;
