use signwire_protocol::clear_command;

use crate::cmd::{deliver, ClearArgs};
use crate::exit::CliResult;
use crate::output::OutputFormat;

pub fn run(args: ClearArgs, format: OutputFormat) -> CliResult<i32> {
    let sequence = clear_command();
    deliver("clear", &sequence, &args.delivery, format)
}
