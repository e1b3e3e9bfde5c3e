//! WSG system state flags.
//!
//! Returned by `GetSystemState` as a 32-bit little-endian word. The encoder
//! only carries the bit positions; decoding the word is left to the response
//! side.

use bitflags::bitflags;

bitflags! {
    /// System state bits.
    ///
    /// Bits 8, 10, 11 and 21..=31 are reserved by the device and kept in
    /// [`WsgStateFlags::RESERVED`] so that `from_bits` rejects them.
    #[repr(transparent)]
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WsgStateFlags: u32 {
        /// Fingers are referenced.
        const REFERENCED         = 1 << 0;
        /// Fingers are currently moving.
        const MOVING             = 1 << 1;
        /// Axis is blocked in negative moving direction.
        const BLOCKED_MINUS      = 1 << 2;
        /// Axis is blocked in positive moving direction.
        const BLOCKED_PLUS       = 1 << 3;
        /// Negative direction soft limit reached.
        const SOFT_LIMIT_MINUS   = 1 << 4;
        /// Positive direction soft limit reached.
        const SOFT_LIMIT_PLUS    = 1 << 5;
        /// Axis stopped.
        const AXIS_STOPPED       = 1 << 6;
        /// Target position reached.
        const TARGET_POS_REACHED = 1 << 7;
        /// Force control mode active.
        const FORCECNTL_MODE     = 1 << 9;
        /// Fast stop engaged.
        const FAST_STOP          = 1 << 12;
        const TEMP_WARNING       = 1 << 13;
        const TEMP_FAULT         = 1 << 14;
        const POWER_FAULT        = 1 << 15;
        const CURR_FAULT         = 1 << 16;
        const FINGER_FAULT       = 1 << 17;
        /// The last command returned an error.
        const CMD_FAILURE        = 1 << 18;
        const SCRIPT_RUNNING     = 1 << 19;
        const SCRIPT_FAILURE     = 1 << 20;
    }
}

impl WsgStateFlags {
    /// Bits the device reserves.
    pub const RESERVED: u32 = !Self::all().bits();

    /// Conditions that need an explicit acknowledge before motion resumes.
    pub const FAULTS: Self = Self::TEMP_FAULT
        .union(Self::POWER_FAULT)
        .union(Self::CURR_FAULT)
        .union(Self::FINGER_FAULT)
        .union(Self::FAST_STOP);

    pub fn has_fault(self) -> bool {
        self.intersects(Self::FAULTS)
    }

    pub fn is_blocked(self) -> bool {
        self.intersects(Self::BLOCKED_MINUS | Self::BLOCKED_PLUS)
    }

    pub fn from_le_bytes(bytes: [u8; 4]) -> Self {
        Self::from_bits_truncate(u32::from_le_bytes(bytes))
    }
}
