use signwire_protocol::clock_command;

use crate::cmd::{deliver, ClockArgs};
use crate::exit::{protocol_error, CliResult};
use crate::output::OutputFormat;

pub fn run(args: ClockArgs, format: OutputFormat) -> CliResult<i32> {
    let sequence = clock_command(args.time.as_deref(), args.date.as_deref())
        .map_err(|err| protocol_error("invalid clock field", err))?;
    deliver("clock", &sequence, &args.delivery, format)
}
