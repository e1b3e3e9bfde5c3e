//! Log output of the frame encoder.
//!
//! Rejections are logged at `debug`, successful encodes at `trace`. The
//! subscriber writes into a shared buffer so the emitted text can be checked.

use std::io;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use wsg_protocol::{WsgCommand, WsgError, WsgFrame};

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> io::Result<String> {
        let buf = self
            .0
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self
            .0
            .lock()
            .map_err(|e| io::Error::other(e.to_string()))?;
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture<T>(level: Level, f: impl FnOnce() -> T) -> io::Result<(T, String)> {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(log.clone())
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    Ok((value, log.contents()?))
}

#[test]
fn test_encode_emits_trace_event() -> Result<(), Box<dyn std::error::Error>> {
    let (out, log) = capture(Level::TRACE, || -> Result<Vec<u8>, WsgError> {
        Ok(WsgFrame::new(WsgCommand::Loop, &[0xDE, 0xAD])?.to_bytes())
    })?;
    assert_eq!(out?.len(), 10);
    assert!(log.contains("Encoded Loop frame"), "{log}");
    assert!(log.contains("payload=2 bytes"), "{log}");
    assert!(log.contains("TRACE"), "{log}");
    Ok(())
}

#[test]
fn test_serialize_into_emits_trace_event() -> Result<(), Box<dyn std::error::Error>> {
    let (written, log) = capture(Level::TRACE, || -> Result<usize, WsgError> {
        let mut buf = [0u8; 16];
        WsgFrame::empty(WsgCommand::Stop).serialize_into(&mut buf)
    })?;
    assert_eq!(written?, 8);
    assert!(log.contains("Encoded Stop frame in place"), "{log}");
    Ok(())
}

#[test]
fn test_out_of_range_code_logged_at_debug() -> Result<(), Box<dyn std::error::Error>> {
    let (result, log) = capture(Level::DEBUG, || WsgFrame::from_code(-5, &[]))?;
    assert_eq!(result, Err(WsgError::CommandOutOfRange(-5)));
    assert!(log.contains("Rejected command code -5"), "{log}");
    assert!(log.contains("DEBUG"), "{log}");
    Ok(())
}

#[test]
fn test_unknown_code_logged_at_debug() -> Result<(), Box<dyn std::error::Error>> {
    let (result, log) = capture(Level::DEBUG, || WsgFrame::from_code(0x37, &[]))?;
    assert_eq!(result, Err(WsgError::UnknownCommand(0x37)));
    assert!(log.contains("Rejected unknown command code 0x37"), "{log}");
    Ok(())
}

#[test]
fn test_oversized_payload_logged_at_debug() -> Result<(), Box<dyn std::error::Error>> {
    let payload = vec![0u8; 256];
    let (result, log) = capture(Level::DEBUG, || {
        WsgFrame::with_config(
            WsgCommand::SetDeviceTag,
            &payload,
            &wsg_protocol::FrameConfig::legacy(),
        )
    })?;
    assert!(result.is_err());
    assert!(
        log.contains("Rejected SetDeviceTag frame: payload of 256 bytes exceeds 255"),
        "{log}"
    );
    Ok(())
}

#[test]
fn test_encode_events_filtered_above_trace() -> Result<(), Box<dyn std::error::Error>> {
    let (_, log) = capture(Level::DEBUG, || WsgFrame::empty(WsgCommand::Loop).to_bytes())?;
    assert!(!log.contains("Encoded"), "{log}");
    Ok(())
}
