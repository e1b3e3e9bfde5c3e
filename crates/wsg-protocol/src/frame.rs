//! WSG command frame encoding.
//!
//! Every command travels in a frame with this layout:
//! - Bytes 0-2: Preamble `0xAA 0xAA 0xAA`
//! - Byte 3: Command code
//! - Bytes 4-5: Payload length (little-endian, see [`LengthEncoding`])
//! - Bytes 6..6+N: Payload, verbatim
//! - Bytes 6+N..8+N: CRC-16 over bytes 0..6+N (little-endian)

use tracing::{debug, trace};

use crate::commands::WsgCommand;
use crate::config::{FrameConfig, LengthEncoding};
use crate::crc::{Crc16, checksum};
use crate::error::{WsgError, WsgResult};

pub const PREAMBLE: [u8; 3] = [0xAA, 0xAA, 0xAA];
pub const HEADER_LEN: usize = 6;
pub const CHECKSUM_LEN: usize = 2;
/// Bytes added around the payload.
pub const FRAME_OVERHEAD: usize = HEADER_LEN + CHECKSUM_LEN;
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// A single outgoing command.
///
/// The payload is copied in at construction and never exposed mutably, so
/// repeated serialization of one frame always yields the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsgFrame {
    command: WsgCommand,
    payload: Vec<u8>,
    payload_len: u16,
    length_encoding: LengthEncoding,
}

impl WsgFrame {
    /// Frame with the default [`FrameConfig`].
    ///
    /// # Errors
    ///
    /// [`WsgError::PayloadTooLong`] if `payload` exceeds [`MAX_PAYLOAD_LEN`].
    pub fn new(command: WsgCommand, payload: &[u8]) -> WsgResult<Self> {
        Self::with_config(command, payload, &FrameConfig::default())
    }

    /// Frame whose length field follows `config`. The payload is copied.
    ///
    /// # Errors
    ///
    /// [`WsgError::PayloadTooLong`] if `payload` is longer than
    /// [`LengthEncoding::max_payload_len`] for the configured encoding.
    pub fn with_config(
        command: WsgCommand,
        payload: &[u8],
        config: &FrameConfig,
    ) -> WsgResult<Self> {
        let max = config.length_encoding.max_payload_len();
        let payload_len = u16::try_from(payload.len())
            .ok()
            .filter(|&len| usize::from(len) <= max)
            .ok_or_else(|| {
                debug!(
                    "Rejected {:?} frame: payload of {} bytes exceeds {} ({:?})",
                    command,
                    payload.len(),
                    max,
                    config.length_encoding
                );
                WsgError::PayloadTooLong {
                    actual: payload.len(),
                    max,
                }
            })?;

        Ok(Self {
            command,
            payload: payload.to_vec(),
            payload_len,
            length_encoding: config.length_encoding,
        })
    }

    /// Frame for a raw integer command code handed down by an outer layer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_code_with_config`] with the default config.
    pub fn from_code(code: i64, payload: &[u8]) -> WsgResult<Self> {
        Self::from_code_with_config(code, payload, &FrameConfig::default())
    }

    /// [`Self::from_code`] with an explicit length encoding.
    ///
    /// # Errors
    ///
    /// - [`WsgError::CommandOutOfRange`] if `code` is outside 0..=255.
    /// - [`WsgError::UnknownCommand`] if `code` is not in the command set.
    /// - [`WsgError::PayloadTooLong`] as for [`Self::with_config`].
    pub fn from_code_with_config(
        code: i64,
        payload: &[u8],
        config: &FrameConfig,
    ) -> WsgResult<Self> {
        let Ok(byte) = u8::try_from(code) else {
            debug!("Rejected command code {} outside 0..=255", code);
            return Err(WsgError::CommandOutOfRange(code));
        };
        let command = WsgCommand::try_from(byte).inspect_err(|_| {
            debug!("Rejected unknown command code 0x{:02X}", byte);
        })?;
        Self::with_config(command, payload, config)
    }

    /// Frame without arguments, as used by most queries.
    pub fn empty(command: WsgCommand) -> Self {
        Self {
            command,
            payload: Vec::new(),
            payload_len: 0,
            length_encoding: LengthEncoding::default(),
        }
    }

    pub fn command(&self) -> WsgCommand {
        self.command
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn length_encoding(&self) -> LengthEncoding {
        self.length_encoding
    }

    /// Total number of bytes [`Self::to_bytes`] produces.
    pub fn encoded_len(&self) -> usize {
        self.payload.len() + FRAME_OVERHEAD
    }

    fn header(&self) -> [u8; HEADER_LEN] {
        let [len_low, len_high] = self.length_encoding.encode(self.payload_len);
        let [p0, p1, p2] = PREAMBLE;
        [p0, p1, p2, self.command.code(), len_low, len_high]
    }

    /// Checksum the frame trailer will carry.
    pub fn checksum(&self) -> u16 {
        Crc16::new()
            .update(&self.header())
            .update(&self.payload)
            .value()
    }

    /// Encodes the whole frame into a new buffer of [`Self::encoded_len`] bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        out.extend_from_slice(&self.header());
        out.extend_from_slice(&self.payload);
        let crc = checksum(&out);
        out.extend_from_slice(&crc.to_le_bytes());

        trace!(
            "Encoded {:?} frame: payload={} bytes, crc=0x{:04X}",
            self.command,
            self.payload.len(),
            crc
        );
        out
    }

    /// Writes the frame to the start of `out` and returns the number of bytes
    /// written. Bytes past that count are left untouched; nothing is written
    /// if `out` is too short.
    ///
    /// # Errors
    ///
    /// [`WsgError::BufferTooSmall`] if `out` is shorter than
    /// [`Self::encoded_len`].
    pub fn serialize_into(&self, out: &mut [u8]) -> WsgResult<usize> {
        let total = self.encoded_len();
        let actual = out.len();
        let dst = out
            .get_mut(..total)
            .ok_or(WsgError::BufferTooSmall {
                expected: total,
                actual,
            })?;

        let (header, rest) = dst.split_at_mut(HEADER_LEN);
        let (body, trailer) = rest.split_at_mut(self.payload.len());
        header.copy_from_slice(&self.header());
        body.copy_from_slice(&self.payload);
        let crc = Crc16::new().update(header).update(body).value();
        trailer.copy_from_slice(&crc.to_le_bytes());

        trace!(
            "Encoded {:?} frame in place: payload={} bytes, crc=0x{:04X}",
            self.command,
            self.payload.len(),
            crc
        );
        Ok(total)
    }
}

impl TryFrom<(WsgCommand, &[u8])> for WsgFrame {
    type Error = WsgError;

    fn try_from((command, payload): (WsgCommand, &[u8])) -> WsgResult<Self> {
        Self::new(command, payload)
    }
}
