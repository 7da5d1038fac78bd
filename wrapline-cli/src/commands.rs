//! Subcommand execution.

use std::fs;
use std::io::{self, Read};

use log::{debug, info};
use wrapline_lib::{TextWrapper, center, dedent, indent};

use crate::args::{Command, InputArgs, WrapArgs};
use crate::error::CliError;

/// Runs `command` and returns what should be printed.
pub fn run(command: &Command) -> Result<String, CliError> {
    let input = match command {
        Command::Wrap(args) | Command::Fill(args) | Command::Shorten(args) => {
            if args.options.dump_config {
                let options = args.options.resolve()?;
                return Ok(serde_json::to_string_pretty(&options)?);
            }
            &args.input
        }
        Command::Dedent(input) => input,
        Command::Indent(args) => &args.input,
        Command::Center(args) => &args.input,
    };

    let text = read_input(input)?;
    info!("read {} bytes of input", text.len());
    execute(command, &text)
}

/// Applies `command` to `text`.
pub fn execute(command: &Command, text: &str) -> Result<String, CliError> {
    match command {
        Command::Wrap(args) => {
            let lines = wrapper(args)?.wrap(text)?;
            Ok(serde_json::to_string_pretty(&lines)?)
        }
        Command::Fill(args) => Ok(wrapper(args)?.fill(text)?),
        Command::Shorten(args) => Ok(wrapper(args)?.shorten(text)?),
        Command::Dedent(_) => Ok(dedent(text)),
        Command::Indent(args) => {
            let output = match &args.matching {
                Some(needle) => {
                    let contains = |line: &str| line.contains(needle.as_str());
                    indent(text, &args.prefix, Some(&contains))
                }
                None => indent(text, &args.prefix, None),
            };
            Ok(output)
        }
        Command::Center(args) => Ok(text
            .split('\n')
            .map(|line| match line {
                "" => String::new(),
                line => center(line, args.pad, args.width),
            })
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

fn wrapper(args: &WrapArgs) -> Result<TextWrapper, CliError> {
    let options = args.options.resolve()?;
    debug!("effective options: {:?}", options);
    Ok(TextWrapper::new(options))
}

fn read_input(input: &InputArgs) -> Result<String, CliError> {
    match &input.file {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
