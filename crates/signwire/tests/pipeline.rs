//! Library-level tests covering the render-then-frame path end to end.

use signwire::link::{LinkConfig, SignLink};
use signwire::protocol::{image_command, DeviceConfig, DeviceWidth, ACK, WRITE_END};
use signwire::render::{render_frames, RenderOptions, TextColor, TextSize};

fn config_128() -> DeviceConfig {
    DeviceConfig::new(DeviceWidth::W128)
}

#[test]
fn short_banner_becomes_one_packet_transmission() {
    let options = RenderOptions {
        size: TextSize::Full,
        color: TextColor::Red,
        font_path: None,
        invert: false,
    };
    let frames = render_frames("OPEN", &options, config_128());
    assert_eq!(frames.len(), 1);

    let seq = image_command(&frames, config_128()).expect("one frame fits");
    // header, one pixel packet, trailing acknowledgment
    assert_eq!(seq.len(), 3);

    let header = &seq.as_slice()[0];
    assert!(header.ends_with(WRITE_END));
    assert!(header.contains(&b'a'));

    // lead-in(9) + id(1) + width marker(2) + 2 channels * 16 rows * 32 bytes + end(4)
    let packet = &seq.as_slice()[1];
    assert_eq!(packet.len(), 9 + 1 + 2 + 1024 + 4);

    assert_eq!(seq.as_slice()[2].as_ref(), ACK);
}

#[test]
fn empty_message_still_produces_a_closed_transmission() {
    let options = RenderOptions::default();
    let frames = render_frames("", &options, config_128());
    assert!(frames.is_empty());

    let seq = image_command(&frames, config_128()).expect("zero frames are valid");
    assert_eq!(seq.len(), 2);
    assert_eq!(seq.as_slice()[1].as_ref(), ACK);
}

#[test]
fn yellow_banner_lights_both_channels_in_packed_output() {
    let options = RenderOptions {
        size: TextSize::Full,
        color: TextColor::Yellow,
        font_path: None,
        invert: false,
    };
    let frames = render_frames("X", &options, config_128());
    assert_eq!(frames.len(), 1);
    let frame = &frames[0];
    assert!(frame.red.lit_count() > 0);
    assert_eq!(frame.red.lit_count(), frame.green.lit_count());
}

#[test]
fn rendered_sequence_travels_over_a_stream_unchanged() {
    struct Capture {
        written: Vec<u8>,
    }
    impl std::io::Read for Capture {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Ok(0)
        }
    }
    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let frames = render_frames("GO", &RenderOptions::default(), config_128());
    let seq = image_command(&frames, config_128()).expect("frames fit");

    let config = LinkConfig {
        inter_command_delay: std::time::Duration::ZERO,
        read_responses: false,
    };
    let mut link = SignLink::with_config(Capture { written: Vec::new() }, config);
    link.send_sequence(&seq).expect("delivery should succeed");

    let expected: Vec<u8> = seq.iter().flat_map(|c| c.iter().copied()).collect();
    assert_eq!(link.into_inner().written, expected);
}
