use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

use crate::engine::DEFAULT_WINDOW_MONTHS;

pub const DEFAULT_PROJECTION_MONTHS: u32 = 12;

pub const ENV_DATA_DIR: &str = "CARDWISE_DATA_DIR";
pub const ENV_WINDOW_MONTHS: &str = "CARDWISE_WINDOW_MONTHS";
pub const ENV_PROJECTION_MONTHS: &str = "CARDWISE_PROJECTION_MONTHS";

/// Flags that take a value; everything else starting with `--` is a switch.
const VALUE_FLAGS: &[&str] = &["--data", "--window", "--months", "--as-of", "--from", "--to"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub window_months: u32,
    pub projection_months: u32,
    pub as_of: NaiveDate,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub json: bool,
}

impl Settings {
    /// Defaults, then environment, then command-line flags.
    pub fn resolve<F>(args: &[String], env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = match flag_value(args, "--data") {
            Some(dir) => PathBuf::from(shellexpand(dir)),
            None => match env(ENV_DATA_DIR) {
                Some(dir) => PathBuf::from(shellexpand(&dir)),
                None => default_data_dir()?,
            },
        };

        let window_months = months_setting(args, "--window", &env, ENV_WINDOW_MONTHS)?
            .unwrap_or(DEFAULT_WINDOW_MONTHS);
        if window_months == 0 {
            anyhow::bail!("Trailing window must be at least 1 month");
        }
        let projection_months = months_setting(args, "--months", &env, ENV_PROJECTION_MONTHS)?
            .unwrap_or(DEFAULT_PROJECTION_MONTHS);

        let as_of = match flag_value(args, "--as-of") {
            Some(s) => parse_flag_date("--as-of", s)?,
            None => chrono::Local::now().date_naive(),
        };
        let from = flag_value(args, "--from")
            .map(|s| parse_flag_date("--from", s))
            .transpose()?;
        let to = flag_value(args, "--to")
            .map(|s| parse_flag_date("--to", s))
            .transpose()?;

        Ok(Self {
            data_dir,
            window_months,
            projection_months,
            as_of,
            from,
            to,
            json: args.iter().any(|a| a == "--json"),
        })
    }

    pub fn from_env(args: &[String]) -> Result<Self> {
        Self::resolve(args, |key| std::env::var(key).ok())
    }
}

fn months_setting<F>(args: &[String], flag: &str, env: &F, key: &str) -> Result<Option<u32>>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = flag_value(args, flag) {
        return raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{flag} expects a whole number of months, got '{raw}'"));
    }
    match env(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{key} expects a whole number of months, got '{raw}'")),
        None => Ok(None),
    }
}

fn parse_flag_date(flag: &str, s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("{flag} expects YYYY-MM-DD, got '{s}'"))
}

pub fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}

/// Arguments that are neither flags nor flag values.
pub fn positional(args: &[String]) -> Vec<&str> {
    let mut out = Vec::new();
    let mut skip_next = false;
    for arg in args {
        if skip_next {
            skip_next = false;
            continue;
        }
        if VALUE_FLAGS.contains(&arg.as_str()) {
            skip_next = true;
        } else if !arg.starts_with("--") {
            out.push(arg.as_str());
        }
    }
    out
}

fn default_data_dir() -> Result<PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("com", "cardwise", "Cardwise")
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
