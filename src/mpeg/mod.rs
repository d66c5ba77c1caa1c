pub mod header;
pub mod locate;

pub use header::{ChannelMode, Emphasis, FrameHeader, Layer, ModeExtension, MpegVersion};
pub use locate::{header_word, locate};
