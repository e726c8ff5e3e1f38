//! ArgMatches → CliAction conversion.
//!
//! Numeric arguments are parsed here rather than by clap so that bad values
//! surface as `InvalidConfiguration`, the same as a bad config file.

use std::path::PathBuf;

use clap::ArgMatches;
use kvharness_core::{Error, Result};
use kvharness_workload::WorkloadConfig;

/// The result of parsing the command line.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Generate a stream.
    Generate(GeneratePlan),
    /// Replay a stream through the oracle.
    Oracle {
        input: Option<PathBuf>,
        output: Option<PathBuf>,
    },
    /// Score an implementation's output.
    Check {
        stream: PathBuf,
        actual: PathBuf,
        json: bool,
    },
}

/// Generator settings gathered from flags and an optional config file.
///
/// Flags win over the file. The count may still be missing, in which case it
/// is read interactively.
#[derive(Debug, PartialEq)]
pub struct GeneratePlan {
    pub file: Option<WorkloadConfig>,
    pub count: Option<usize>,
    pub length: Option<usize>,
    pub seed: Option<u64>,
    pub output: Option<PathBuf>,
}

impl GeneratePlan {
    /// True when neither the flags nor the config file give a count.
    pub fn needs_count(&self) -> bool {
        self.count.is_none() && self.file.is_none()
    }

    /// Produce the final config. `prompt` supplies the count when
    /// [`needs_count`](Self::needs_count) is true and is not called otherwise.
    pub fn resolve(self, prompt: impl FnOnce() -> Result<usize>) -> Result<WorkloadConfig> {
        let mut config = match (self.file, self.count) {
            (Some(mut file), Some(count)) => {
                file.request_count = count;
                file
            }
            (Some(file), None) => file,
            (None, Some(count)) => WorkloadConfig::new(count),
            (None, None) => WorkloadConfig::new(prompt()?),
        };
        if let Some(length) = self.length {
            config.key_value_length = length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config.validate()?;
        Ok(config)
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction> {
    let (sub_name, sub) = matches
        .subcommand()
        .ok_or_else(|| Error::invalid_configuration("no command provided"))?;

    match sub_name {
        "generate" => parse_generate(sub),
        "oracle" => Ok(CliAction::Oracle {
            input: path_arg(sub, "input"),
            output: path_arg(sub, "output"),
        }),
        "check" => Ok(CliAction::Check {
            stream: required_path(sub, "stream")?,
            actual: required_path(sub, "actual")?,
            json: sub.get_flag("json"),
        }),
        other => Err(Error::invalid_configuration(format!(
            "unknown command: {}",
            other
        ))),
    }
}

fn parse_generate(m: &ArgMatches) -> Result<CliAction> {
    let file = match path_arg(m, "config") {
        Some(path) => Some(WorkloadConfig::from_file(&path)?),
        None => None,
    };
    Ok(CliAction::Generate(GeneratePlan {
        file,
        count: m.get_one::<String>("count").map(|s| parse_count(s)).transpose()?,
        length: m.get_one::<String>("length").map(|s| parse_length(s)).transpose()?,
        seed: m.get_one::<String>("seed").map(|s| parse_seed(s)).transpose()?,
        output: path_arg(m, "output"),
    }))
}

/// Parse a request count: a non-negative decimal integer.
pub fn parse_count(s: &str) -> Result<usize> {
    s.trim().parse::<usize>().map_err(|_| {
        Error::invalid_configuration(format!(
            "request count must be a non-negative integer, got '{}'",
            s.trim()
        ))
    })
}

/// Parse a key/value length: a positive decimal integer.
pub fn parse_length(s: &str) -> Result<usize> {
    match s.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::invalid_configuration(format!(
            "key/value length must be a positive integer, got '{}'",
            s.trim()
        ))),
    }
}

/// Parse a generator seed.
pub fn parse_seed(s: &str) -> Result<u64> {
    s.trim().parse::<u64>().map_err(|_| {
        Error::invalid_configuration(format!(
            "seed must be an unsigned 64-bit integer, got '{}'",
            s.trim()
        ))
    })
}

fn path_arg(m: &ArgMatches, name: &str) -> Option<PathBuf> {
    m.get_one::<String>(name).map(PathBuf::from)
}

fn required_path(m: &ArgMatches, name: &str) -> Result<PathBuf> {
    path_arg(m, name).ok_or_else(|| Error::invalid_configuration(format!("--{} is required", name)))
}
