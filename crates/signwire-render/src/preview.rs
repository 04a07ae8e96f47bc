//! ASCII rendering of frames for debug output.

use signwire_protocol::{Frame, MATRIX_HEIGHT};

/// Render a frame as 16 lines of `R`/`G`/`Y`/`.` characters.
///
/// `Y` marks pixels lit in both channels, `.` marks unlit pixels.
pub fn frame_to_ascii(frame: &Frame) -> String {
    let width = frame.width();
    let mut out = String::with_capacity(MATRIX_HEIGHT * (width + 1));
    for row in 0..MATRIX_HEIGHT {
        for col in 0..width {
            let ch = match (frame.red.get(row, col), frame.green.get(row, col)) {
                (true, true) => 'Y',
                (true, false) => 'R',
                (false, true) => 'G',
                (false, false) => '.',
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_combinations_map_to_characters() {
        let mut frame = Frame::blank(4);
        frame.red.set(0, 0, true);
        frame.green.set(0, 1, true);
        frame.red.set(0, 2, true);
        frame.green.set(0, 2, true);

        let ascii = frame_to_ascii(&frame);
        let first_line = ascii.lines().next().unwrap();
        assert_eq!(first_line, "RGY.");
        assert_eq!(ascii.lines().count(), MATRIX_HEIGHT);
    }
}
