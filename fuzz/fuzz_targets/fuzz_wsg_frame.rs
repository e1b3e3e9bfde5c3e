//! Fuzzes WSG frame construction and encoding.
//!
//! The first byte selects the length encoding (bit 0) and an offset applied to
//! the raw command code (bits 1..), so negative and out-of-range codes reach
//! `from_code_with_config` as well as valid ones.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_wsg_frame
#![no_main]
use libfuzzer_sys::fuzz_target;
use wsg_protocol::{
    FrameConfig, HEADER_LEN, LengthEncoding, PREAMBLE, WsgCommand, WsgError, WsgFrame, checksum,
};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Some((&code, payload)) = rest.split_first() else {
        return;
    };
    let config = if selector & 1 == 0 {
        FrameConfig::default()
    } else {
        FrameConfig::legacy()
    };
    let raw_code = i64::from(code) - 128 * i64::from(selector >> 1);

    let frame = match WsgFrame::from_code_with_config(raw_code, payload, &config) {
        Ok(frame) => frame,
        Err(WsgError::CommandOutOfRange(rejected)) => {
            assert_eq!(rejected, raw_code);
            assert!(u8::try_from(raw_code).is_err());
            return;
        }
        Err(WsgError::UnknownCommand(rejected)) => {
            assert_eq!(i64::from(rejected), raw_code);
            assert!(WsgCommand::from_u8(rejected).is_none());
            return;
        }
        Err(WsgError::PayloadTooLong { actual, max }) => {
            assert_eq!(actual, payload.len());
            assert_eq!(max, config.length_encoding.max_payload_len());
            assert!(actual > max);
            return;
        }
        Err(err) => panic!("unexpected construction error: {err}"),
    };

    let out = frame.to_bytes();
    let n = payload.len();
    assert_eq!(out.len(), frame.encoded_len());
    assert_eq!(out.get(..3), Some(&PREAMBLE[..]));
    assert_eq!(out.get(3).map(|&b| i64::from(b)), Some(raw_code));

    let Some(&[len_low, len_high]) = out.get(4..6) else {
        panic!("frame shorter than its header");
    };
    match config.length_encoding {
        LengthEncoding::Corrected => {
            assert_eq!(usize::from(u16::from_le_bytes([len_low, len_high])), n);
        }
        LengthEncoding::LegacyLowByteOnly => {
            assert_eq!(usize::from(len_low), n);
            assert_eq!(len_high, 0);
        }
    }

    assert_eq!(out.get(HEADER_LEN..HEADER_LEN + n), Some(payload));
    let (body, trailer) = out.split_at(HEADER_LEN + n);
    assert_eq!(trailer, checksum(body).to_le_bytes());

    let mut in_place = vec![0u8; frame.encoded_len()];
    assert_eq!(frame.serialize_into(&mut in_place), Ok(out.len()));
    assert_eq!(in_place, out);
});
