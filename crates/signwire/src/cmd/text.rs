use signwire_protocol::text_command;

use crate::cmd::{deliver, TextArgs};
use crate::exit::{protocol_error, CliResult};
use crate::output::OutputFormat;

pub fn run(args: TextArgs, format: OutputFormat) -> CliResult<i32> {
    let sequence =
        text_command(&args.message).map_err(|err| protocol_error("encoding failed", err))?;
    deliver("text", &sequence, &args.delivery, format)
}
