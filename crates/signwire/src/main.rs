mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "signwire", version, about = "LED sign command-line tool")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use signwire_render::{TextColor, TextSize};

    #[test]
    fn parses_text_subcommand() {
        let cli = Cli::try_parse_from(["signwire", "text", "{color-red}HELLO"])
            .expect("text args should parse");
        assert!(matches!(cli.command, Command::Text(_)));
    }

    #[test]
    fn parses_banner_render_options() {
        let cli = Cli::try_parse_from([
            "signwire", "banner", "OPEN", "--size", "small", "--color", "yellow", "--width",
            "256", "--invert",
        ])
        .expect("banner args should parse");

        let Command::Banner(args) = cli.command else {
            panic!("expected banner subcommand");
        };
        assert_eq!(args.render.size, TextSize::Small);
        assert_eq!(args.render.color, TextColor::Yellow);
        assert_eq!(args.render.width, 256);
        assert!(args.render.invert);
    }

    #[test]
    fn rejects_unknown_size_label() {
        let err = Cli::try_parse_from(["signwire", "banner", "OPEN", "--size", "huge"])
            .expect_err("unknown size should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn parses_clock_fields() {
        let cli = Cli::try_parse_from([
            "signwire", "clock", "--time", "120000", "--date", "010125",
        ])
        .expect("clock args should parse");

        let Command::Clock(args) = cli.command else {
            panic!("expected clock subcommand");
        };
        assert_eq!(args.time.as_deref(), Some("120000"));
        assert_eq!(args.date.as_deref(), Some("010125"));
    }

    #[test]
    fn parses_width_positional() {
        let cli =
            Cli::try_parse_from(["signwire", "width", "256"]).expect("width args should parse");
        let Command::Width(args) = cli.command else {
            panic!("expected width subcommand");
        };
        assert_eq!(args.width, 256);
    }
}
