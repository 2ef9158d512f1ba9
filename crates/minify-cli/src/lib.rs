//! Command-line front end: reads source text from a file or stdin, writes the
//! minified text to a file or stdout.

use clap::{ArgAction, Parser};
use minify_core::{MinifyConfig, MinifyError, Profile, Result};
use minify_engine::{Minifier, MinifyResult};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Strip comments and insignificant whitespace from source text.
#[derive(Parser, Debug)]
#[command(name = "minify", author, version, about)]
pub struct Cli {
    /// Input file (default: stdin)
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// JSON configuration file; takes the place of --profile
    #[arg(short, long, env = "MINIFY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Preset: base, regions or corrected
    #[arg(short, long, default_value = "base")]
    pub profile: Profile,

    /// Also elide regions with this name (repeatable)
    #[arg(long = "skip-region", value_name = "NAME")]
    pub skip_regions: Vec<String>,

    /// Print size statistics to stderr
    #[arg(long, action = ArgAction::SetTrue)]
    pub stats: bool,

    /// More logging (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

pub fn load_config(cli: &Cli) -> Result<MinifyConfig> {
    let mut config = match &cli.config {
        Some(path) => MinifyConfig::from_file(path)?,
        None => MinifyConfig::for_profile(cli.profile),
    };
    for name in &cli.skip_regions {
        if !config.regions.skip.contains(name) {
            config.regions.skip.push(name.clone());
        }
    }
    config.validate()?;
    Ok(config)
}

/// Read the whole input; empty input is [`MinifyError::InputUnavailable`].
pub fn read_input(input: Option<&Path>, stdin: impl Read) -> Result<String> {
    let text = match input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            let mut stdin = stdin;
            stdin.read_to_string(&mut buf)?;
            buf
        }
    };
    if text.is_empty() {
        return Err(MinifyError::InputUnavailable);
    }
    Ok(text)
}

pub fn write_output(output: Option<&Path>, text: &str, stdout: impl Write) -> Result<()> {
    match output {
        Some(path) => fs::write(path, text)?,
        None => {
            let mut stdout = stdout;
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Run one invocation. Returns `None` when there was no input to minify.
pub fn run(cli: &Cli, stdin: impl Read, stdout: impl Write) -> Result<Option<MinifyResult>> {
    let minifier = Minifier::new(load_config(cli)?)?;

    let text = match read_input(cli.input.as_deref(), stdin) {
        Ok(text) => text,
        Err(err) if err.is_input_unavailable() => {
            tracing::warn!("no input text, nothing written");
            return Ok(None);
        }
        Err(err) => return Err(err),
    };

    let result = minifier.minify_detailed(&text);
    tracing::info!(
        original_len = result.original_len,
        minified_len = result.minified_len,
        "minified {:.1}%",
        result.reduction_pct
    );
    write_output(cli.output.as_deref(), &result.output, stdout)?;
    Ok(Some(result))
}

pub fn format_stats(r: &MinifyResult) -> String {
    let mut s = format!(
        "{} -> {} bytes ({:.1}% smaller), {} lines read, {} dropped, {} directives",
        r.original_len, r.minified_len, r.reduction_pct, r.lines_in, r.lines_dropped, r.directive_lines
    );
    if r.unterminated_comment {
        s.push_str(", input ends inside a comment");
    }
    if r.unterminated_region {
        s.push_str(", input ends inside a skipped region");
    }
    s
}

#[cfg(test)]
mod tests;
