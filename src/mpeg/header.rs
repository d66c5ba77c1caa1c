//! MPEG audio frame header decoding
//!
//! A frame header is a 32-bit word, most significant byte first in the file:
//! AAAAAAAA AAABBCCD EEEEFFGH IIJJKLMM
//!
//! A = sync (11 bits, all ones)
//! B = MPEG version (2 bits): 00=2.5, 01=reserved, 10=2, 11=1
//! C = Layer (2 bits): 00=reserved, 01=III, 10=II, 11=I
//! D = Protection bit (0 means CRC protected)
//! E = Bitrate index (4 bits)
//! F = Sample rate index (2 bits)
//! G = Padding bit
//! H = Private bit
//! I = Channel mode (2 bits)
//! J = Mode extension (2 bits)
//! K = Copyright
//! L = Original
//! M = Emphasis (2 bits)

use crate::error::{Error, InvalidReason, Result};
use crate::mpeg::locate::header_word;
use serde::Serialize;
use std::fmt;

pub const SYNC_MASK: u32 = 0xFFE0_0000;

const VERSION_MASK: u32 = 0x0018_0000;
const VERSION_SHIFT: u32 = 19;
const LAYER_MASK: u32 = 0x0006_0000;
const LAYER_SHIFT: u32 = 17;
const PROTECTION_MASK: u32 = 0x0001_0000;
const PROTECTION_SHIFT: u32 = 16;
const BITRATE_MASK: u32 = 0x0000_F000;
const BITRATE_SHIFT: u32 = 12;
const SAMPLE_RATE_MASK: u32 = 0x0000_0C00;
const SAMPLE_RATE_SHIFT: u32 = 10;
const PADDING_MASK: u32 = 0x0000_0200;
const PADDING_SHIFT: u32 = 9;
const PRIVATE_MASK: u32 = 0x0000_0100;
const PRIVATE_SHIFT: u32 = 8;
const CHANNEL_MASK: u32 = 0x0000_00C0;
const CHANNEL_SHIFT: u32 = 6;
const MODE_EXT_MASK: u32 = 0x0000_0030;
const MODE_EXT_SHIFT: u32 = 4;
const COPYRIGHT_MASK: u32 = 0x0000_0008;
const COPYRIGHT_SHIFT: u32 = 3;
const ORIGINAL_MASK: u32 = 0x0000_0004;
const ORIGINAL_SHIFT: u32 = 2;
const EMPHASIS_MASK: u32 = 0x0000_0003;
const EMPHASIS_SHIFT: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MpegVersion {
    #[serde(rename = "1")]
    Mpeg1,
    #[serde(rename = "2")]
    Mpeg2,
    #[serde(rename = "2.5")]
    Mpeg25,
}

impl MpegVersion {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            0 => Some(MpegVersion::Mpeg25),
            2 => Some(MpegVersion::Mpeg2),
            3 => Some(MpegVersion::Mpeg1),
            _ => None,
        }
    }
}

impl fmt::Display for MpegVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MpegVersion::Mpeg1 => write!(f, "1"),
            MpegVersion::Mpeg2 => write!(f, "2"),
            MpegVersion::Mpeg25 => write!(f, "2.5"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Layer {
    #[serde(rename = "I")]
    Layer1,
    #[serde(rename = "II")]
    Layer2,
    #[serde(rename = "III")]
    Layer3,
}

impl Layer {
    fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            1 => Some(Layer::Layer3),
            2 => Some(Layer::Layer2),
            3 => Some(Layer::Layer1),
            _ => None,
        }
    }

    /// Multiplier in the slot formula: 384/32 for Layer I, 1152/32 otherwise.
    fn slot_factor(self) -> u32 {
        match self {
            Layer::Layer1 => 12,
            Layer::Layer2 | Layer::Layer3 => 36,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layer::Layer1 => write!(f, "I"),
            Layer::Layer2 => write!(f, "II"),
            Layer::Layer3 => write!(f, "III"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    SingleChannel,
}

impl ChannelMode {
    fn from_bits(bits: u32) -> Self {
        match bits & 0x03 {
            0 => ChannelMode::Stereo,
            1 => ChannelMode::JointStereo,
            2 => ChannelMode::DualChannel,
            _ => ChannelMode::SingleChannel,
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelMode::Stereo => write!(f, "Stereo"),
            ChannelMode::JointStereo => write!(f, "Joint stereo (Stereo)"),
            ChannelMode::DualChannel => write!(f, "Dual channel (Stereo)"),
            ChannelMode::SingleChannel => write!(f, "Single channel (Mono)"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    None,
    Ms50_15,
    Reserved,
    CcitJ17,
}

impl Emphasis {
    fn from_bits(bits: u32) -> Self {
        match bits & 0x03 {
            0 => Emphasis::None,
            1 => Emphasis::Ms50_15,
            2 => Emphasis::Reserved,
            _ => Emphasis::CcitJ17,
        }
    }
}

impl fmt::Display for Emphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Emphasis::None => write!(f, "none"),
            Emphasis::Ms50_15 => write!(f, "50/15 ms"),
            Emphasis::Reserved => write!(f, "reserved"),
            Emphasis::CcitJ17 => write!(f, "CCIT J.17"),
        }
    }
}

/// What the 2-bit mode extension means for a given layer and channel mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeExtension {
    /// Layer III joint stereo.
    IntensityMs { intensity: bool, ms: bool },
    /// Layer I/II joint stereo: subbands `first..=31` are intensity coded.
    Bands { first: u8 },
    /// Any channel mode other than joint stereo.
    NotApplicable,
}

impl fmt::Display for ModeExtension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |b: bool| if b { "on" } else { "off" };
        match self {
            ModeExtension::IntensityMs { intensity, ms } => write!(
                f,
                "intensity stereo {}, MS stereo {}",
                on_off(*intensity),
                on_off(*ms)
            ),
            ModeExtension::Bands { first } => write!(f, "bands {} to 31", first),
            ModeExtension::NotApplicable => write!(f, "no mode extension"),
        }
    }
}

/// A decoded frame header. Immutable once decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FrameHeader {
    pub version: MpegVersion,
    pub layer: Layer,
    /// True when the protection bit is 0 (a CRC follows the header)
    pub protection_enabled: bool,
    /// kbit/s; 0 means free format
    pub bitrate: u32,
    /// Hz
    pub sample_rate: u32,
    pub padding: bool,
    pub private: bool,
    pub channel_mode: ChannelMode,
    pub mode_extension: u8,
    pub copyright: bool,
    pub original: bool,
    pub emphasis: Emphasis,
}

// Bitrate lookup tables (kbps), one row per (version class, layer).
// The MPEG 2/2.5 Layer II/III rows hold 14 entries, the rest 15. Index 0 is
// free format and never reaches a table; indices past a row's end are invalid.
const BITRATES_V1_L3: &[u32] = &[0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320];
const BITRATES_V1_L2: &[u32] = &[0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384];
const BITRATES_V1_L1: &[u32] = &[0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448];
const BITRATES_V2_L3: &[u32] = &[8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160];
const BITRATES_V2_L2: &[u32] = &[8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160];
const BITRATES_V2_L1: &[u32] = &[0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256];

// Sample rate lookup tables (Hz); index 3 is reserved
const SAMPLE_RATES_V1: [u32; 3] = [44100, 48000, 32000];
const SAMPLE_RATES_V2: [u32; 3] = [22050, 24000, 16000];
const SAMPLE_RATES_V25: [u32; 3] = [11025, 12000, 8000];

fn field(word: u32, mask: u32, shift: u32) -> u32 {
    (word & mask) >> shift
}

fn bitrate_kbps(version: MpegVersion, layer: Layer, index: usize) -> Option<u32> {
    if index == 0 {
        return Some(0);
    }

    // MPEG 2.5 shares the MPEG 2 rows
    let row = match (version, layer) {
        (MpegVersion::Mpeg1, Layer::Layer1) => BITRATES_V1_L1,
        (MpegVersion::Mpeg1, Layer::Layer2) => BITRATES_V1_L2,
        (MpegVersion::Mpeg1, Layer::Layer3) => BITRATES_V1_L3,
        (_, Layer::Layer1) => BITRATES_V2_L1,
        (_, Layer::Layer2) => BITRATES_V2_L2,
        (_, Layer::Layer3) => BITRATES_V2_L3,
    };

    row.get(index).copied()
}

fn sample_rate_hz(version: MpegVersion, index: usize) -> Option<u32> {
    let row = match version {
        MpegVersion::Mpeg1 => &SAMPLE_RATES_V1,
        MpegVersion::Mpeg2 => &SAMPLE_RATES_V2,
        MpegVersion::Mpeg25 => &SAMPLE_RATES_V25,
    };

    row.get(index).copied()
}

impl FrameHeader {
    /// Decode a header word in canonical (big-endian) bit order.
    ///
    /// Fails with [`Error::InvalidHeader`] on a sync mismatch, a reserved
    /// version, layer or sample-rate code, or a bitrate index past the end of
    /// its table row. There is no partial result.
    pub fn decode(word: u32) -> Result<Self> {
        if word & SYNC_MASK != SYNC_MASK {
            return Err(Error::invalid(word, InvalidReason::BadSync));
        }

        let version = MpegVersion::from_bits(field(word, VERSION_MASK, VERSION_SHIFT))
            .ok_or_else(|| Error::invalid(word, InvalidReason::ReservedVersion))?;

        let layer = Layer::from_bits(field(word, LAYER_MASK, LAYER_SHIFT))
            .ok_or_else(|| Error::invalid(word, InvalidReason::ReservedLayer))?;

        let bitrate_idx = field(word, BITRATE_MASK, BITRATE_SHIFT) as usize;
        let bitrate = bitrate_kbps(version, layer, bitrate_idx)
            .ok_or_else(|| Error::invalid(word, InvalidReason::BitrateIndexOutOfRange))?;

        let sample_rate_idx = field(word, SAMPLE_RATE_MASK, SAMPLE_RATE_SHIFT) as usize;
        let sample_rate = sample_rate_hz(version, sample_rate_idx)
            .ok_or_else(|| Error::invalid(word, InvalidReason::ReservedSampleRate))?;

        Ok(FrameHeader {
            version,
            layer,
            protection_enabled: field(word, PROTECTION_MASK, PROTECTION_SHIFT) == 0,
            bitrate,
            sample_rate,
            padding: field(word, PADDING_MASK, PADDING_SHIFT) != 0,
            private: field(word, PRIVATE_MASK, PRIVATE_SHIFT) != 0,
            channel_mode: ChannelMode::from_bits(field(word, CHANNEL_MASK, CHANNEL_SHIFT)),
            mode_extension: field(word, MODE_EXT_MASK, MODE_EXT_SHIFT) as u8,
            copyright: field(word, COPYRIGHT_MASK, COPYRIGHT_SHIFT) != 0,
            original: field(word, ORIGINAL_MASK, ORIGINAL_SHIFT) != 0,
            emphasis: Emphasis::from_bits(field(word, EMPHASIS_MASK, EMPHASIS_SHIFT)),
        })
    }

    /// Decode the four header bytes as they appear in the file
    pub fn parse(header: [u8; 4]) -> Result<Self> {
        Self::decode(header_word(header))
    }

    /// Frame length in slots: `factor * bitrate * 1000 / sample_rate + padding`,
    /// floor division, factor 12 for Layer I and 36 for Layer II/III.
    pub fn frame_length_slots(&self) -> u32 {
        self.layer.slot_factor() * self.bitrate * 1000 / self.sample_rate + u32::from(self.padding)
    }

    /// Frame size in bytes, always four times the slot count.
    ///
    /// For Layer II/III the padding slot is one byte on disk, so a padded
    /// frame of those layers reports three bytes more than it occupies.
    pub fn frame_size_bytes(&self) -> u32 {
        4 * self.frame_length_slots()
    }

    pub fn mode_extension_info(&self) -> ModeExtension {
        if self.channel_mode != ChannelMode::JointStereo {
            return ModeExtension::NotApplicable;
        }

        match self.layer {
            Layer::Layer3 => ModeExtension::IntensityMs {
                intensity: self.mode_extension & 0x01 != 0,
                ms: self.mode_extension & 0x02 != 0,
            },
            Layer::Layer1 | Layer::Layer2 => ModeExtension::Bands {
                first: (self.mode_extension + 1) * 4,
            },
        }
    }
}
