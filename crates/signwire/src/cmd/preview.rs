use signwire_protocol::{DeviceConfig, DeviceWidth};
use signwire_render::{frame_to_ascii, render_frames};

use crate::cmd::PreviewArgs;
use crate::exit::{protocol_error, CliResult, SUCCESS};

pub fn run(args: PreviewArgs) -> CliResult<i32> {
    let width = DeviceWidth::try_from(args.render.width)
        .map_err(|err| protocol_error("invalid width", err))?;
    let config = DeviceConfig::new(width);

    let frames = render_frames(&args.message, &args.render.to_options(), config);
    if frames.is_empty() {
        println!("(no lit pixels)");
        return Ok(SUCCESS);
    }

    for (index, frame) in frames.iter().enumerate() {
        println!("frame {} of {}", index + 1, frames.len());
        print!("{}", frame_to_ascii(frame));
        if index + 1 < frames.len() {
            println!();
        }
    }
    Ok(SUCCESS)
}
