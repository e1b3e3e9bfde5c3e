//! Fuzzes the WSG CRC-16 incremental path against the one-shot function.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_wsg_checksum
#![no_main]
use libfuzzer_sys::fuzz_target;
use wsg_protocol::{Crc16, checksum};

fuzz_target!(|data: &[u8]| {
    let split = data.first().map_or(0, |&b| usize::from(b)).min(data.len());
    let (head, tail) = data.split_at(split);
    let mut crc = Crc16::new();
    crc.update(head).update(tail);
    assert_eq!(crc.value(), checksum(data));
});
