use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use luhnix::{Completer, DEFAULT_WILDCARD, MaskConfig, validate_masked_number};

/// Masked number completed when none is given on the command line
pub const DEFAULT_INPUT: &str = "3798721411?????";

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Luhnix - List every Luhn-valid completion of a masked number
#[derive(Parser, Debug)]
#[command(name = "luhnix")]
#[command(about = "Recover unknown digits of a Luhn-checked number")]
#[command(version)]
pub struct CliArgs {
    /// Number with a wildcard for each unknown digit
    #[arg(default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Character marking an unknown digit
    #[arg(short, long, default_value_t = DEFAULT_WILDCARD)]
    pub wildcard: char,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub input: String,
    pub mask: MaskConfig,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    build_config(CliArgs::parse())
}

fn build_config(args: CliArgs) -> Result<CliConfig> {
    let mask = MaskConfig::new(args.wildcard).context("Invalid wildcard")?;
    validate_masked_number(&args.input, mask.wildcard()).context("Invalid masked number")?;

    Ok(CliConfig {
        input: args.input,
        mask,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Print the input, the candidate count and each candidate on its own line
pub fn render_candidates<W: Write>(
    out: &mut W,
    input: &str,
    candidates: &[String],
) -> io::Result<()> {
    writeln!(out, "Input: {}", input)?;
    writeln!(out, "Total Possible Combinations: {}", candidates.len())?;
    writeln!(out, "List of Possible Values:")?;
    for candidate in candidates {
        writeln!(out, "{}", candidate)?;
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let completer = Completer::with_config(config.mask);

    info!("Completing '{}'", config.input);

    let completion = completer.complete(&config.input);
    for note in completion.diagnostics() {
        warn!("{}", note);
    }

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    render_candidates(&mut out, &config.input, completion.candidates())
        .context("Failed to write candidates")?;
    out.flush().context("Failed to write candidates")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str, wildcard: char) -> CliArgs {
        CliArgs {
            input: input.to_string(),
            wildcard,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_build_config() {
        let config = build_config(args("12?4", '?'));
        assert!(config.is_ok());
        if let Ok(config) = config {
            assert_eq!(config.input, "12?4");
            assert_eq!(config.mask.wildcard(), '?');
            assert!(matches!(config.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_build_config_rejects_bad_input() {
        assert!(build_config(args("12a4", '?')).is_err());
        assert!(build_config(args("", '?')).is_err());
        assert!(build_config(args("12?4", '3')).is_err());
        assert!(build_config(args("12x4", 'x')).is_ok());
    }

    #[test]
    fn test_default_input_parses() {
        let parsed = CliArgs::try_parse_from(["luhnix"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.input, DEFAULT_INPUT);
            assert_eq!(parsed.wildcard, '?');
        }
    }

    #[test]
    fn test_flags_parse() {
        let parsed = CliArgs::try_parse_from(["luhnix", "12**", "-w", "*", "-l", "debug"]);
        assert!(parsed.is_ok());
        if let Ok(parsed) = parsed {
            assert_eq!(parsed.input, "12**");
            assert_eq!(parsed.wildcard, '*');
            assert!(matches!(parsed.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_render_candidates() {
        let mut out = Vec::new();
        let candidates = vec!["79927398713".to_string()];
        assert!(render_candidates(&mut out, "7992739871?", &candidates).is_ok());
        assert_eq!(
            String::from_utf8_lossy(&out),
            "Input: 7992739871?\nTotal Possible Combinations: 1\nList of Possible Values:\n79927398713\n"
        );
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
