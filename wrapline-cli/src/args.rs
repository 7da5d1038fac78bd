//! Command-line arguments.

use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use wrapline_lib::WrapOptions;

use crate::error::CliError;

#[derive(Parser, Debug)]
#[command(name = "wrapline")]
#[command(about = "Wrap, fill, shorten, dedent, indent and center text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Write diagnostics to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Log every packed line (trace level) instead of info
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the wrapped lines as a JSON array
    Wrap(WrapArgs),
    /// Print the wrapped text, one line per row
    Fill(WrapArgs),
    /// Print the text collapsed and truncated to a single line
    Shorten(WrapArgs),
    /// Remove the indentation common to all lines
    Dedent(InputArgs),
    /// Prefix non-blank lines
    Indent(IndentArgs),
    /// Center every line
    Center(CenterArgs),
}

#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input file, stdin when absent or "-"
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct WrapArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub options: OptionArgs,
}

#[derive(Args, Debug)]
pub struct IndentArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Prefix to add
    #[arg(long)]
    pub prefix: String,

    /// Only indent lines containing this text
    #[arg(long, value_name = "TEXT")]
    pub matching: Option<String>,
}

#[derive(Args, Debug)]
pub struct CenterArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Target width
    #[arg(long)]
    pub width: usize,

    /// Padding character
    #[arg(long, default_value_t = ' ')]
    pub pad: char,
}

/// Wrapping options, layered over `--config` or the defaults.
#[derive(Args, Debug, Default)]
pub struct OptionArgs {
    /// JSON file with wrapping options
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective options as JSON and exit
    #[arg(long)]
    pub dump_config: bool,

    #[arg(long, short)]
    pub width: Option<usize>,

    #[arg(long)]
    pub tab_size: Option<usize>,

    #[arg(long)]
    pub no_expand_tabs: bool,

    #[arg(long)]
    pub no_replace_whitespace: bool,

    /// Keep whitespace around line breaks
    #[arg(long)]
    pub keep_whitespace: bool,

    #[arg(long, value_name = "TEXT")]
    pub initial_indent: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub subsequent_indent: Option<String>,

    #[arg(long)]
    pub fix_sentence_endings: bool,

    #[arg(long)]
    pub no_break_long_words: bool,

    #[arg(long)]
    pub no_break_on_hyphens: bool,

    /// Maximum number of lines, 0 for no limit
    #[arg(long)]
    pub max_lines: Option<usize>,

    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub placeholder: Option<String>,
}

impl OptionArgs {
    /// Loads `--config` (or the defaults) and applies the flags on top.
    pub fn resolve(&self) -> Result<WrapOptions, CliError> {
        let mut options = match &self.config {
            Some(path) => {
                let raw = fs::read_to_string(path)?;
                serde_json::from_str(&raw).map_err(|source| CliError::Config {
                    path: path.clone(),
                    source,
                })?
            }
            None => WrapOptions::default(),
        };

        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(tab_size) = self.tab_size {
            options.tab_size = tab_size;
        }
        if self.no_expand_tabs {
            options.expand_tabs = false;
        }
        if self.no_replace_whitespace {
            options.replace_whitespace = false;
        }
        if self.keep_whitespace {
            options.drop_whitespace = false;
        }
        if let Some(indent) = &self.initial_indent {
            options.initial_indent = indent.clone();
        }
        if let Some(indent) = &self.subsequent_indent {
            options.subsequent_indent = indent.clone();
        }
        if self.fix_sentence_endings {
            options.fix_sentence_endings = true;
        }
        if self.no_break_long_words {
            options.break_long_words = false;
        }
        if self.no_break_on_hyphens {
            options.break_on_hyphens = false;
        }
        if let Some(max_lines) = self.max_lines {
            options.max_lines = max_lines;
        }
        if let Some(placeholder) = &self.placeholder {
            options.placeholder = placeholder.clone();
        }

        Ok(options)
    }
}
