use signwire_protocol::{image_command, DeviceConfig, DeviceWidth};
use signwire_render::render_frames;
use tracing::warn;

use crate::cmd::{deliver, BannerArgs};
use crate::exit::{protocol_error, CliResult};
use crate::output::OutputFormat;

pub fn run(args: BannerArgs, format: OutputFormat) -> CliResult<i32> {
    let width = DeviceWidth::try_from(args.render.width)
        .map_err(|err| protocol_error("invalid width", err))?;
    let config = DeviceConfig::new(width);

    let frames = render_frames(&args.message, &args.render.to_options(), config);
    if frames.is_empty() {
        warn!("message rendered to no lit pixels");
    }

    let sequence =
        image_command(&frames, config).map_err(|err| protocol_error("framing failed", err))?;
    deliver("banner", &sequence, &args.delivery, format)
}
