//! CRC-16 checksum used as the WSG frame trailer.
//!
//! Table-driven, polynomial 0x1021, initial value 0xFFFF, no final XOR.
//! The table holds the MSB-first CCITT entries published in the device's
//! command-set reference, while the update step shifts the accumulator right:
//!
//! ```text
//! acc = TABLE[(acc ^ byte) & 0xFF] ^ (acc >> 8)
//! ```
//!
//! That combination is what the firmware checks, so it is reproduced exactly
//! rather than replaced by one of the catalogued CRC-16 variants.

/// Generator polynomial.
pub const CRC_POLY: u16 = 0x1021;

/// Accumulator value before the first byte.
pub const CRC_INIT: u16 = 0xFFFF;

/// Lookup table, built at compile time.
pub static CRC_TABLE: [u16; 256] = build_table();

const fn build_table() -> [u16; 256] {
    let mut table = [0u16; 256];
    let mut i: u16 = 0;
    while i < 256 {
        let mut crc = i << 8;
        let mut bit = 0;
        while bit < 8 {
            crc = if crc & 0x8000 != 0 {
                (crc << 1) ^ CRC_POLY
            } else {
                crc << 1
            };
            bit += 1;
        }
        table[i as usize] = crc;
        i += 1;
    }
    table
}

#[inline]
#[expect(
    clippy::indexing_slicing,
    reason = "a u8 index is always within the 256-entry table"
)]
fn table_entry(index: u8) -> u16 {
    CRC_TABLE[usize::from(index)]
}

#[inline]
fn step(acc: u16, byte: u8) -> u16 {
    let [low, _] = (acc ^ u16::from(byte)).to_le_bytes();
    table_entry(low) ^ (acc >> 8)
}

/// Checksum of `data`. Empty input yields [`CRC_INIT`].
pub fn checksum(data: &[u8]) -> u16 {
    data.iter().fold(CRC_INIT, |acc, &byte| step(acc, byte))
}

/// Incremental form of [`checksum`] for callers that produce a frame in pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crc16 {
    acc: u16,
}

impl Crc16 {
    /// Accumulator at [`CRC_INIT`].
    pub const fn new() -> Self {
        Self { acc: CRC_INIT }
    }

    /// Feeds `data` and returns `self` for chaining.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.acc = data.iter().fold(self.acc, |acc, &byte| step(acc, byte));
        self
    }

    /// Checksum of everything fed so far.
    pub fn value(&self) -> u16 {
        self.acc
    }
}

impl Default for Crc16 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_returns_init() {
        assert_eq!(checksum(&[]), 0xFFFF);
    }

    #[test]
    fn test_table_matches_published_entries() {
        assert_eq!(CRC_TABLE[0x00], 0x0000);
        assert_eq!(CRC_TABLE[0x01], 0x1021);
        assert_eq!(CRC_TABLE[0x02], 0x2042);
        assert_eq!(CRC_TABLE[0x10], 0x1231);
        assert_eq!(CRC_TABLE[0x80], 0x9188);
        assert_eq!(CRC_TABLE[0xF8], 0x6E17);
        assert_eq!(CRC_TABLE[0xFF], 0x1EF0);
    }

    #[test]
    fn test_check_string() {
        assert_eq!(checksum(b"123456789"), 0x6EB4);
    }

    #[test]
    fn test_preamble_only() {
        assert_eq!(checksum(&[0xAA, 0xAA, 0xAA]), 0x50F5);
    }

    #[test]
    fn test_grasp_header() {
        assert_eq!(checksum(&[0xAA, 0xAA, 0xAA, 0x25, 0x00, 0x00]), 0x4071);
    }

    #[test]
    fn test_incremental_matches_one_shot() {
        let data = [0xAA, 0xAA, 0xAA, 0x21, 0x08, 0x00, 1, 2, 3, 4, 5, 6, 7, 8];
        let mut crc = Crc16::new();
        crc.update(&data[..3]).update(&data[3..6]).update(&data[6..]);
        assert_eq!(crc.value(), checksum(&data));
        assert_eq!(crc.value(), 0x5A5C);
    }

    #[test]
    fn test_default_is_init() {
        assert_eq!(Crc16::default().value(), CRC_INIT);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(500))]

        #[test]
        fn prop_checksum_is_deterministic(ref data in proptest::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(checksum(data), checksum(data));
        }

        #[test]
        fn prop_incremental_any_split(
            ref data in proptest::collection::vec(any::<u8>(), 0..512),
            split in any::<prop::sample::Index>(),
        ) {
            let at = split.index(data.len() + 1);
            let (head, tail) = data.split_at(at);
            let mut crc = Crc16::new();
            crc.update(head).update(tail);
            prop_assert_eq!(crc.value(), checksum(data));
        }

        #[test]
        fn prop_last_byte_flip_changes_checksum(
            ref data in proptest::collection::vec(any::<u8>(), 1..256),
            mask in 1u8..=255,
        ) {
            let mut corrupted = data.clone();
            if let Some(last) = corrupted.last_mut() {
                *last ^= mask;
            }
            prop_assert_ne!(checksum(data), checksum(&corrupted));
        }
    }
}
