//! WSG status codes returned in response frames.
//!
//! The encoder never produces these; they are shared vocabulary for the
//! response decoder that sits on the other side of the transport.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u16)]
pub enum WsgStatus {
    #[default]
    Success = 0,
    NotAvailable = 1,
    NoSensor = 2,
    NotInitialized = 3,
    AlreadyRunning = 4,
    FeatureNotSupported = 5,
    InconsistentData = 6,
    Timeout = 7,
    ReadError = 8,
    WriteError = 9,
    InsufficientResources = 10,
    ChecksumError = 11,
    NoParamExpected = 12,
    NotEnoughParams = 13,
    CmdUnknown = 14,
    CmdFormatError = 15,
    AccessDenied = 16,
    AlreadyOpen = 17,
    CmdFailed = 18,
    CmdAborted = 19,
    InvalidHandle = 20,
    NotFound = 21,
    NotOpen = 22,
    IoError = 23,
    InvalidParameter = 24,
    IndexOutOfBounds = 25,
    CmdPending = 26,
    Overrun = 27,
    RangeError = 28,
    AxisBlocked = 29,
    FileExists = 30,
}

impl WsgStatus {
    pub fn from_u16(val: u16) -> Option<Self> {
        match val {
            0 => Some(Self::Success),
            1 => Some(Self::NotAvailable),
            2 => Some(Self::NoSensor),
            3 => Some(Self::NotInitialized),
            4 => Some(Self::AlreadyRunning),
            5 => Some(Self::FeatureNotSupported),
            6 => Some(Self::InconsistentData),
            7 => Some(Self::Timeout),
            8 => Some(Self::ReadError),
            9 => Some(Self::WriteError),
            10 => Some(Self::InsufficientResources),
            11 => Some(Self::ChecksumError),
            12 => Some(Self::NoParamExpected),
            13 => Some(Self::NotEnoughParams),
            14 => Some(Self::CmdUnknown),
            15 => Some(Self::CmdFormatError),
            16 => Some(Self::AccessDenied),
            17 => Some(Self::AlreadyOpen),
            18 => Some(Self::CmdFailed),
            19 => Some(Self::CmdAborted),
            20 => Some(Self::InvalidHandle),
            21 => Some(Self::NotFound),
            22 => Some(Self::NotOpen),
            23 => Some(Self::IoError),
            24 => Some(Self::InvalidParameter),
            25 => Some(Self::IndexOutOfBounds),
            26 => Some(Self::CmdPending),
            27 => Some(Self::Overrun),
            28 => Some(Self::RangeError),
            29 => Some(Self::AxisBlocked),
            30 => Some(Self::FileExists),
            _ => None,
        }
    }

    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// `CmdPending` means the device accepted the command and will answer
    /// again once it completes.
    pub fn is_pending(self) -> bool {
        self == Self::CmdPending
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Success => "No error",
            Self::NotAvailable => "Device, service or data is not available",
            Self::NoSensor => "No sensor connected",
            Self::NotInitialized => "The device is not initialized",
            Self::AlreadyRunning => "Service is already running",
            Self::FeatureNotSupported => "The asked feature is not supported",
            Self::InconsistentData => "One or more dependent parameters mismatch",
            Self::Timeout => "Timeout error",
            Self::ReadError => "Error while reading from a device",
            Self::WriteError => "Error while writing to a device",
            Self::InsufficientResources => "No memory available",
            Self::ChecksumError => "Checksum error",
            Self::NoParamExpected => "No parameters expected",
            Self::NotEnoughParams => "Not enough parameters",
            Self::CmdUnknown => "Unknown command",
            Self::CmdFormatError => "Command format error",
            Self::AccessDenied => "Access denied",
            Self::AlreadyOpen => "The interface is already open",
            Self::CmdFailed => "Command failed",
            Self::CmdAborted => "Command aborted",
            Self::InvalidHandle => "Invalid handle",
            Self::NotFound => "Device not found",
            Self::NotOpen => "Device not open",
            Self::IoError => "I/O error",
            Self::InvalidParameter => "Invalid parameter",
            Self::IndexOutOfBounds => "Index out of bounds",
            Self::CmdPending => "Command execution needs more time",
            Self::Overrun => "Data overrun",
            Self::RangeError => "Range error",
            Self::AxisBlocked => "Axis is blocked",
            Self::FileExists => "File already exists",
        }
    }
}

impl fmt::Display for WsgStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.to_u16())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        for val in 0u16..=30 {
            let status = WsgStatus::from_u16(val);
            assert_eq!(status.map(WsgStatus::to_u16), Some(val));
        }
    }

    #[test]
    fn test_status_out_of_range() {
        assert_eq!(WsgStatus::from_u16(31), None);
        assert_eq!(WsgStatus::from_u16(0xFFFF), None);
    }

    #[test]
    fn test_anchor_values() {
        assert_eq!(WsgStatus::Success.to_u16(), 0);
        assert_eq!(WsgStatus::ChecksumError.to_u16(), 11);
        assert_eq!(WsgStatus::CmdPending.to_u16(), 26);
        assert_eq!(WsgStatus::FileExists.to_u16(), 30);
    }

    #[test]
    fn test_default_is_success() {
        assert!(WsgStatus::default().is_success());
        assert!(!WsgStatus::Timeout.is_success());
    }

    #[test]
    fn test_pending() {
        assert!(WsgStatus::CmdPending.is_pending());
        assert!(!WsgStatus::Success.is_pending());
    }

    #[test]
    fn test_display() {
        assert_eq!(WsgStatus::AxisBlocked.to_string(), "Axis is blocked (29)");
    }
}
