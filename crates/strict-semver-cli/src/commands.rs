use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, ValueEnum};
use serde::Serialize;
use std::io::{BufRead, Write};

use strict_semver::{Operator, Semver, Version};

use crate::config::SemverConfig;

#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Version string to parse
    pub version: String,

    /// Print the components as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Left-hand version
    pub left: String,

    /// Right-hand version
    pub right: String,

    /// Check an operator (==, !=, <, <=, >, >=) instead of printing -1/0/1
    #[arg(long, value_name = "OP")]
    pub op: Option<String>,
}

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Versions to sort (read from stdin, one per line, when omitted)
    pub versions: Vec<String>,

    /// Sort in descending order
    #[arg(short, long)]
    pub reverse: bool,

    /// Fail on the first invalid version instead of skipping it
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

#[derive(Args, Debug)]
pub struct BumpArgs {
    /// Which component to increment
    #[arg(value_enum)]
    pub component: Component,

    /// Version to bump
    pub version: String,
}

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Versions to check
    #[arg(required = true)]
    pub versions: Vec<String>,
}

#[derive(Serialize)]
struct ParsedOutput<'a> {
    version: &'a Version,
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Vec<&'a str>,
    build: Vec<&'a str>,
}

fn parse_version(input: &str) -> Result<Version> {
    Version::parse(input).with_context(|| format!("Invalid version \"{}\"", input))
}

pub fn parse(args: &ParseArgs, config: &SemverConfig, out: &mut impl Write) -> Result<i32> {
    let version = parse_version(&args.version)?;
    let pre_release: Vec<&str> = version.pre_release.iter().map(|id| id.as_str()).collect();
    let build: Vec<&str> = version.build.iter().map(|id| id.as_str()).collect();

    if args.json || config.output.json {
        let output = ParsedOutput {
            version: &version,
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre_release,
            build,
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
    } else {
        writeln!(out, "major: {}", version.major)?;
        writeln!(out, "minor: {}", version.minor)?;
        writeln!(out, "patch: {}", version.patch)?;
        writeln!(out, "pre-release: {}", pre_release.join("."))?;
        writeln!(out, "build: {}", build.join("."))?;
    }
    Ok(0)
}

pub fn compare(args: &CompareArgs, out: &mut impl Write) -> Result<i32> {
    let left = parse_version(&args.left)?;
    let right = parse_version(&args.right)?;
    let ordering = left.cmp(&right);

    match &args.op {
        Some(op) => {
            let operator: Operator = op.parse()?;
            let holds = operator.holds(ordering);
            log::debug!("{} {} {} is {}", left, operator, right, holds);
            Ok(if holds { 0 } else { 1 })
        }
        None => {
            writeln!(out, "{}", ordering as i8)?;
            Ok(0)
        }
    }
}

/// Sort through [`Semver`], which drops unparsable entries. In strict mode
/// every entry is checked first so the first bad one fails the command.
pub fn sort(
    args: &SortArgs,
    config: &SemverConfig,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<i32> {
    let lines: Vec<String> = if args.versions.is_empty() {
        input
            .lines()
            .collect::<std::io::Result<Vec<_>>>()?
            .into_iter()
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect()
    } else {
        args.versions.clone()
    };

    if args.strict || !config.sort.skip_invalid {
        for line in &lines {
            if let Err(err) = Version::parse(line) {
                bail!("Invalid version \"{}\": {}", line, err);
            }
        }
    }

    let lines: Vec<&str> = lines.iter().map(String::as_str).collect();
    let versions = if args.reverse || config.sort.reverse {
        Semver::rsort(&lines)
    } else {
        Semver::sort(&lines)
    };
    if versions.len() < lines.len() {
        log::warn!("Skipped {} invalid version(s)", lines.len() - versions.len());
    }

    if config.output.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&versions)?)?;
    } else {
        for version in &versions {
            writeln!(out, "{}", version)?;
        }
    }
    Ok(0)
}

pub fn bump(args: &BumpArgs, out: &mut impl Write) -> Result<i32> {
    let version = parse_version(&args.version)?;
    let (next, name) = match args.component {
        Component::Major => (version.next_major(), "major"),
        Component::Minor => (version.next_minor(), "minor"),
        Component::Patch => (version.next_patch(), "patch"),
    };
    let next = next
        .ok_or_else(|| anyhow!("Cannot bump {} of {}: it is already {}", name, version, u64::MAX))?;
    writeln!(out, "{}", next)?;
    Ok(0)
}

pub fn validate(args: &ValidateArgs, out: &mut impl Write) -> Result<i32> {
    let mut invalid = 0;
    for input in &args.versions {
        match Version::parse(input) {
            Ok(_) => writeln!(out, "{}: valid", input)?,
            Err(err) => {
                invalid += 1;
                writeln!(out, "{}: invalid ({})", input, err)?;
            }
        }
    }
    Ok(if invalid == 0 { 0 } else { 1 })
}
