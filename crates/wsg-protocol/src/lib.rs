//! WSG gripper command-set vocabulary and command frame encoder.
//!
//! This crate is intentionally I/O-free. It turns a command code and an
//! opaque payload into the exact bytes that go on the serial or Ethernet
//! link, and carries the command, status and state-flag enumerations shared
//! with the response side.
//!
//! # Key Features
//! - CRC-16 (poly 0x1021, init 0xFFFF) with a compile-time lookup table
//! - Command frame encoding into an owned `Vec` or a caller buffer
//! - Configurable length-field encoding for legacy peers
//!
//! # Example
//!
//! ```
//! use wsg_protocol::{WsgCommand, WsgFrame};
//!
//! let frame = WsgFrame::new(WsgCommand::Grasp, &[])?;
//! assert_eq!(frame.to_bytes(), [0xAA, 0xAA, 0xAA, 0x25, 0x00, 0x00, 0x71, 0x40]);
//! # Ok::<(), wsg_protocol::WsgError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(static_mut_refs)]

pub mod commands;
pub mod config;
pub mod crc;
pub mod error;
pub mod frame;
pub mod state;
pub mod status;

pub use commands::{WsgCommand, WsgCommandCategory};
pub use config::{FrameConfig, LengthEncoding};
pub use crc::{CRC_INIT, CRC_POLY, CRC_TABLE, Crc16, checksum};
pub use error::{WsgError, WsgResult};
pub use frame::{
    CHECKSUM_LEN, FRAME_OVERHEAD, HEADER_LEN, MAX_PAYLOAD_LEN, PREAMBLE, WsgFrame,
};
pub use state::WsgStateFlags;
pub use status::WsgStatus;
