use signwire_protocol::width_command;

use crate::cmd::{deliver, WidthArgs};
use crate::exit::{protocol_error, CliResult};
use crate::output::OutputFormat;

pub fn run(args: WidthArgs, format: OutputFormat) -> CliResult<i32> {
    let sequence =
        width_command(args.width).map_err(|err| protocol_error("invalid width", err))?;
    deliver("width", &sequence, &args.delivery, format)
}
