//! Frame encoder configuration.

/// How the 16-bit payload length is written at offsets 4..6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LengthEncoding {
    /// Low byte then true high byte.
    #[default]
    Corrected,
    /// High byte always zero, as emitted by the legacy driver. Only lengths
    /// that fit in the low byte are accepted, so a frame never claims a
    /// length it does not carry.
    LegacyLowByteOnly,
}

impl LengthEncoding {
    pub const fn max_payload_len(self) -> usize {
        match self {
            Self::Corrected => u16::MAX as usize,
            Self::LegacyLowByteOnly => u8::MAX as usize,
        }
    }

    /// Bytes written at offsets 4 and 5 for `len`.
    pub(crate) fn encode(self, len: u16) -> [u8; 2] {
        let [low, high] = len.to_le_bytes();
        match self {
            Self::Corrected => [low, high],
            Self::LegacyLowByteOnly => [low, 0],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FrameConfig {
    pub length_encoding: LengthEncoding,
}

impl FrameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_length_encoding(mut self, length_encoding: LengthEncoding) -> Self {
        self.length_encoding = length_encoding;
        self
    }

    /// Configuration matching the legacy driver's wire output.
    pub fn legacy() -> Self {
        Self::new().with_length_encoding(LengthEncoding::LegacyLowByteOnly)
    }
}
