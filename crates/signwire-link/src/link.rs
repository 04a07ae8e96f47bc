use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use bytes::Bytes;
use tracing::{debug, trace};

use signwire_protocol::CommandSequence;

use crate::error::{LinkError, Result};

const RESPONSE_CHUNK_SIZE: usize = 256;

/// Delivery configuration.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Pause after each command before reading feedback, giving the device
    /// time to process the payload.
    pub inter_command_delay: Duration,
    /// Whether to read one feedback chunk after each command. Disable for
    /// write-only streams such as files.
    pub read_responses: bool,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            inter_command_delay: Duration::from_millis(100),
            read_responses: true,
        }
    }
}

/// Device feedback captured after one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub bytes: Bytes,
}

impl Response {
    /// True when the device sent nothing before the stream's read timeout.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Writes command sequences to any `Read + Write` stream.
pub struct SignLink<T> {
    inner: T,
    config: LinkConfig,
}

impl<T: Read + Write> SignLink<T> {
    /// Create a link with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, LinkConfig::default())
    }

    /// Create a link with explicit configuration.
    pub fn with_config(inner: T, config: LinkConfig) -> Self {
        Self { inner, config }
    }

    /// Deliver every command in order, returning the per-command feedback.
    ///
    /// Commands are written completely before the next one starts; the
    /// device relies on that ordering (acknowledgment frames finalize the
    /// payload they follow).
    pub fn send_sequence(&mut self, sequence: &CommandSequence) -> Result<Vec<Response>> {
        let mut responses = Vec::with_capacity(sequence.len());
        for (index, command) in sequence.iter().enumerate() {
            trace!(index, len = command.len(), "writing command");
            self.write_command(command)?;

            if !self.config.inter_command_delay.is_zero() {
                std::thread::sleep(self.config.inter_command_delay);
            }

            let response = if self.config.read_responses {
                self.read_response()?
            } else {
                Response {
                    bytes: Bytes::new(),
                }
            };
            responses.push(response);
        }
        debug!(
            commands = sequence.len(),
            wire_len = sequence.total_len(),
            "sequence delivered"
        );
        Ok(responses)
    }

    fn write_command(&mut self, command: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < command.len() {
            match self.inner.write(&command[offset..]) {
                Ok(0) => return Err(LinkError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(LinkError::Io(err)),
            }
        }
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(LinkError::Io(err)),
            }
        }
    }

    /// One best-effort read; the stream's own timeout bounds the wait.
    fn read_response(&mut self) -> Result<Response> {
        let mut chunk = [0u8; RESPONSE_CHUNK_SIZE];
        loop {
            match self.inner.read(&mut chunk) {
                Ok(n) => {
                    return Ok(Response {
                        bytes: Bytes::copy_from_slice(&chunk[..n]),
                    })
                }
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err)
                    if err.kind() == ErrorKind::TimedOut
                        || err.kind() == ErrorKind::WouldBlock =>
                {
                    return Ok(Response {
                        bytes: Bytes::new(),
                    })
                }
                Err(err) => return Err(LinkError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the link and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_delay() -> LinkConfig {
        LinkConfig {
            inter_command_delay: Duration::ZERO,
            read_responses: true,
        }
    }

    fn sequence(parts: &[&'static [u8]]) -> CommandSequence {
        let mut seq = CommandSequence::new();
        for part in parts {
            seq.push(Bytes::from_static(part));
        }
        seq
    }

    /// Scripted device: records writes, replays canned responses.
    struct FakeDevice {
        written: Vec<u8>,
        responses: Vec<&'static [u8]>,
    }

    impl Read for FakeDevice {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.responses.is_empty() {
                return Err(std::io::Error::from(ErrorKind::TimedOut));
            }
            let response = self.responses.remove(0);
            buf[..response.len()].copy_from_slice(response);
            Ok(response.len())
        }
    }

    impl Write for FakeDevice {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn commands_written_in_order_with_responses() {
        let device = FakeDevice {
            written: Vec::new(),
            responses: vec![b"ok1", b"ok2"],
        };
        let mut link = SignLink::with_config(device, no_delay());

        let seq = sequence(&[b"first", b"second"]);
        let responses = link.send_sequence(&seq).unwrap();

        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].bytes.as_ref(), b"ok1");
        assert_eq!(responses[1].bytes.as_ref(), b"ok2");
        assert_eq!(link.into_inner().written, b"firstsecond");
    }

    #[test]
    fn read_timeout_yields_empty_response() {
        let device = FakeDevice {
            written: Vec::new(),
            responses: vec![],
        };
        let mut link = SignLink::with_config(device, no_delay());

        let responses = link.send_sequence(&sequence(&[b"cmd"])).unwrap();
        assert_eq!(responses.len(), 1);
        assert!(responses[0].is_empty());
    }

    #[test]
    fn zero_length_write_is_closed() {
        struct ZeroWriter;
        impl Read for ZeroWriter {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Ok(0)
            }
        }
        impl Write for ZeroWriter {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Ok(0)
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut link = SignLink::with_config(ZeroWriter, no_delay());
        let err = link.send_sequence(&sequence(&[b"x"])).unwrap_err();
        assert!(matches!(err, LinkError::Closed));
    }

    #[test]
    fn interrupted_write_is_retried() {
        struct InterruptedOnce {
            interrupted: bool,
            written: Vec<u8>,
        }
        impl Read for InterruptedOnce {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Ok(0)
            }
        }
        impl Write for InterruptedOnce {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if !self.interrupted {
                    self.interrupted = true;
                    return Err(std::io::Error::from(ErrorKind::Interrupted));
                }
                self.written.extend_from_slice(buf);
                Ok(buf.len())
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let device = InterruptedOnce {
            interrupted: false,
            written: Vec::new(),
        };
        let mut link = SignLink::with_config(device, no_delay());
        link.send_sequence(&sequence(&[b"retry"])).unwrap();
        assert_eq!(link.into_inner().written, b"retry");
    }

    #[test]
    fn responses_skipped_for_write_only_streams() {
        let device = FakeDevice {
            written: Vec::new(),
            responses: vec![b"should not be read"],
        };
        let config = LinkConfig {
            inter_command_delay: Duration::ZERO,
            read_responses: false,
        };
        let mut link = SignLink::with_config(device, config);

        let responses = link.send_sequence(&sequence(&[b"cmd"])).unwrap();
        assert!(responses[0].is_empty());
        assert_eq!(link.get_ref().responses.len(), 1);
    }
}
