use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use signwire_protocol::CommandSequence;

const PREVIEW_BYTES: usize = 24;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct SequenceOutput<'a> {
    label: &'a str,
    commands: usize,
    wire_len: usize,
    items: Vec<CommandOutput>,
}

#[derive(Serialize)]
struct CommandOutput {
    index: usize,
    size: usize,
    bytes: String,
}

/// Print an encoded command sequence without sending it.
pub fn print_sequence(label: &str, sequence: &CommandSequence, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = SequenceOutput {
                label,
                commands: sequence.len(),
                wire_len: sequence.total_len(),
                items: sequence
                    .iter()
                    .enumerate()
                    .map(|(index, command)| CommandOutput {
                        index,
                        size: command.len(),
                        bytes: hex_string(command),
                    })
                    .collect(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["#", "SIZE", "BYTES"]);
            for (index, command) in sequence.iter().enumerate() {
                table.add_row(vec![
                    index.to_string(),
                    command.len().to_string(),
                    hex_preview(command),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "{label}: {} commands, {} bytes on the wire",
                sequence.len(),
                sequence.total_len()
            );
            for (index, command) in sequence.iter().enumerate() {
                println!(
                    "  [{index}] len={} bytes={}",
                    command.len(),
                    hex_preview(command)
                );
            }
        }
        OutputFormat::Raw => {
            let mut out = std::io::stdout();
            for command in sequence.iter() {
                let _ = out.write_all(command);
            }
            let _ = out.flush();
        }
    }
}

pub fn hex_string(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 3);
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&format!("{byte:02X}"));
    }
    out
}

fn hex_preview(data: &[u8]) -> String {
    if data.len() <= PREVIEW_BYTES {
        hex_string(data)
    } else {
        format!(
            "{} .. (+{} bytes)",
            hex_string(&data[..PREVIEW_BYTES]),
            data.len() - PREVIEW_BYTES
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_string_is_uppercase_spaced() {
        assert_eq!(hex_string(&[0x5D, 0x21, 0x0A]), "5D 21 0A");
        assert_eq!(hex_string(&[]), "");
    }

    #[test]
    fn long_commands_are_truncated_in_previews() {
        let data = vec![0x30u8; PREVIEW_BYTES + 8];
        let preview = hex_preview(&data);
        assert!(preview.ends_with("(+8 bytes)"));
        assert!(hex_preview(&data[..PREVIEW_BYTES]).ends_with("30"));
    }
}
