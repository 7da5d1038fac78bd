use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use wrapline_lib::{TextWrapper, WrapOptions, center};

const TEXT: &str = "The wrapper packs words greedily into lines, splits words that are \
    wider than a line, and can cut the text short with a placeholder once a \
    maximum number of lines is reached.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Set up file logging
    let log_file = File::create("fill.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)?;

    for width in [30, 45, 60] {
        let wrapper = TextWrapper::new(
            WrapOptions::new()
                .with_width(width)
                .with_initial_indent("  * ")
                .with_subsequent_indent("    "),
        );
        println!("{}", center(&format!(" width {} ", width), '=', width));
        println!("{}", wrapper.fill(TEXT)?);
    }

    let truncated = WrapOptions::new().with_width(30).with_max_lines(2);
    println!("{}", center(" max_lines 2 ", '=', 30));
    println!("{}", wrapline_lib::fill(TEXT, &truncated)?);

    Ok(())
}
