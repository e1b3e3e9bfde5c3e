//! WSG command codes.
//!
//! Values follow the WSG command set reference and must not be renumbered;
//! the device dispatches on the byte at offset 3 of every frame.

use crate::error::{WsgError, WsgResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum WsgCommand {
    Loop = 0x06,
    DisconnectAnnounce = 0x07,
    Home = 0x20,
    PrePosition = 0x21,
    Stop = 0x22,
    FastStop = 0x23,
    AcknowledgeStopOrFault = 0x24,
    Grasp = 0x25,
    Release = 0x26,
    SetAccel = 0x30,
    GetAccel = 0x31,
    SetForceLimit = 0x32,
    GetForceLimit = 0x33,
    SetSoftLimits = 0x34,
    GetSoftLimits = 0x35,
    ClearSoftLimits = 0x36,
    TareForceSensor = 0x38,
    GetSystemState = 0x40,
    GetGraspState = 0x41,
    GetGraspStats = 0x42,
    GetOpeningWidth = 0x43,
    GetSpeed = 0x44,
    GetForce = 0x45,
    GetTemperature = 0x46,
    GetSystemInfo = 0x50,
    SetDeviceTag = 0x51,
    GetDeviceTag = 0x52,
    GetSystemLimits = 0x53,
    GetFingerInfo = 0x60,
    GetFingerFlags = 0x61,
    FingerPowerControl = 0x62,
    GetFingerData = 0x63,
}

/// Command groups as laid out in the command set reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WsgCommandCategory {
    Connection,
    Motion,
    Parameter,
    Status,
    System,
    Finger,
}

impl WsgCommand {
    pub const ALL: [Self; 32] = [
        Self::Loop,
        Self::DisconnectAnnounce,
        Self::Home,
        Self::PrePosition,
        Self::Stop,
        Self::FastStop,
        Self::AcknowledgeStopOrFault,
        Self::Grasp,
        Self::Release,
        Self::SetAccel,
        Self::GetAccel,
        Self::SetForceLimit,
        Self::GetForceLimit,
        Self::SetSoftLimits,
        Self::GetSoftLimits,
        Self::ClearSoftLimits,
        Self::TareForceSensor,
        Self::GetSystemState,
        Self::GetGraspState,
        Self::GetGraspStats,
        Self::GetOpeningWidth,
        Self::GetSpeed,
        Self::GetForce,
        Self::GetTemperature,
        Self::GetSystemInfo,
        Self::SetDeviceTag,
        Self::GetDeviceTag,
        Self::GetSystemLimits,
        Self::GetFingerInfo,
        Self::GetFingerFlags,
        Self::FingerPowerControl,
        Self::GetFingerData,
    ];

    pub fn from_u8(val: u8) -> Option<Self> {
        match val {
            0x06 => Some(Self::Loop),
            0x07 => Some(Self::DisconnectAnnounce),
            0x20 => Some(Self::Home),
            0x21 => Some(Self::PrePosition),
            0x22 => Some(Self::Stop),
            0x23 => Some(Self::FastStop),
            0x24 => Some(Self::AcknowledgeStopOrFault),
            0x25 => Some(Self::Grasp),
            0x26 => Some(Self::Release),
            0x30 => Some(Self::SetAccel),
            0x31 => Some(Self::GetAccel),
            0x32 => Some(Self::SetForceLimit),
            0x33 => Some(Self::GetForceLimit),
            0x34 => Some(Self::SetSoftLimits),
            0x35 => Some(Self::GetSoftLimits),
            0x36 => Some(Self::ClearSoftLimits),
            0x38 => Some(Self::TareForceSensor),
            0x40 => Some(Self::GetSystemState),
            0x41 => Some(Self::GetGraspState),
            0x42 => Some(Self::GetGraspStats),
            0x43 => Some(Self::GetOpeningWidth),
            0x44 => Some(Self::GetSpeed),
            0x45 => Some(Self::GetForce),
            0x46 => Some(Self::GetTemperature),
            0x50 => Some(Self::GetSystemInfo),
            0x51 => Some(Self::SetDeviceTag),
            0x52 => Some(Self::GetDeviceTag),
            0x53 => Some(Self::GetSystemLimits),
            0x60 => Some(Self::GetFingerInfo),
            0x61 => Some(Self::GetFingerFlags),
            0x62 => Some(Self::FingerPowerControl),
            0x63 => Some(Self::GetFingerData),
            _ => None,
        }
    }

    /// Wire value of the command byte.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn category(self) -> WsgCommandCategory {
        match self {
            Self::Loop | Self::DisconnectAnnounce => WsgCommandCategory::Connection,
            Self::Home
            | Self::PrePosition
            | Self::Stop
            | Self::FastStop
            | Self::AcknowledgeStopOrFault
            | Self::Grasp
            | Self::Release => WsgCommandCategory::Motion,
            Self::SetAccel
            | Self::GetAccel
            | Self::SetForceLimit
            | Self::GetForceLimit
            | Self::SetSoftLimits
            | Self::GetSoftLimits
            | Self::ClearSoftLimits
            | Self::TareForceSensor => WsgCommandCategory::Parameter,
            Self::GetSystemState
            | Self::GetGraspState
            | Self::GetGraspStats
            | Self::GetOpeningWidth
            | Self::GetSpeed
            | Self::GetForce
            | Self::GetTemperature => WsgCommandCategory::Status,
            Self::GetSystemInfo
            | Self::SetDeviceTag
            | Self::GetDeviceTag
            | Self::GetSystemLimits => WsgCommandCategory::System,
            Self::GetFingerInfo
            | Self::GetFingerFlags
            | Self::FingerPowerControl
            | Self::GetFingerData => WsgCommandCategory::Finger,
        }
    }
}

impl TryFrom<u8> for WsgCommand {
    type Error = WsgError;

    fn try_from(val: u8) -> WsgResult<Self> {
        Self::from_u8(val).ok_or(WsgError::UnknownCommand(val))
    }
}

impl From<WsgCommand> for u8 {
    fn from(cmd: WsgCommand) -> Self {
        cmd.code()
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(500))]

        #[test]
        fn prop_from_u8_consistent_with_code(val in 0u8..=255) {
            if let Some(cmd) = WsgCommand::from_u8(val) {
                prop_assert_eq!(cmd.code(), val);
            } else {
                prop_assert!(WsgCommand::ALL.iter().all(|c| c.code() != val));
            }
        }
    }
}
