//! Simulate distance-vector routing over a topology file and print every round.
//!
//! A topology is read from text or YAML, validated, converged with [distvec_routing], and
//! each round's tables are written out as text or JSON lines.
//!
//! # Text Format
//!
//! ```text
//! A
//! B
//! C
//! START
//! A B 1
//! B C 1
//! UPDATE
//! ```
//!
//! One router per line until `START`, then one `<router> <router> <cost>` link per line
//! until `UPDATE` (or the end of input).

use distvec_routing::{rounds, Topology};
use std::{io::Write, path::Path, str::FromStr};
use thiserror::Error;
use tracing::{debug, warn};

pub mod parse;
pub mod render;

/// Errors that can occur while loading a topology or writing rounds.
#[derive(Error, Debug)]
pub enum Error {
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("invalid router name: {0:?}")]
    InvalidRouter(String),
    #[error("duplicate router: {0}")]
    DuplicateRouter(String),
    #[error("expected `<router> <router> <cost>`, found {0:?}")]
    MalformedLink(String),
    #[error("invalid cost for link {a}-{b}: {cost}")]
    InvalidCost { a: String, b: String, cost: String },
    #[error("link {a}-{b} references unknown router: {router}")]
    UnknownRouter {
        a: String,
        b: String,
        router: String,
    },
    #[error("unknown format: {0}")]
    UnknownFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Encoding of a topology description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Yaml,
}

impl Format {
    /// Infer the format from a file extension, defaulting to [Format::Text].
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Text,
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "yaml" => Ok(Self::Yaml),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Encoding of the rounds written out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Output {
    #[default]
    Text,
    Json,
}

impl FromStr for Output {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Configuration for a single simulation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Encoding of the topology description.
    pub format: Format,
    /// Encoding of the rounds written out.
    pub output: Output,
    /// Stop after this many rounds of relaxation even if the tables are still changing.
    pub max_rounds: Option<u64>,
}

/// What a simulation did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// The last round written.
    pub rounds: u64,
    /// Whether the last round written was stable.
    pub stable: bool,
}

/// Parse `content`, converge it, and write every round to `out`.
pub fn simulate<W: Write>(content: &str, config: &Config, out: &mut W) -> Result<Summary, Error> {
    let description = match config.format {
        Format::Text => parse::text(content)?,
        Format::Yaml => parse::yaml(content)?,
    };
    let topology = Topology::build(description.routers(), &description.links);

    let mut summary = Summary {
        rounds: 0,
        stable: false,
    };
    for snapshot in rounds(&topology) {
        if config.max_rounds.is_some_and(|max| snapshot.round > max) {
            break;
        }
        match config.output {
            Output::Text => render::text(out, topology.routers(), &snapshot)?,
            Output::Json => render::json(out, topology.routers(), &snapshot)?,
        }
        summary = Summary {
            rounds: snapshot.round,
            stable: snapshot.stable,
        };
    }
    out.flush()?;

    if summary.stable {
        debug!(rounds = summary.rounds, "converged");
    } else {
        warn!(rounds = summary.rounds, "stopped before convergence");
    }
    Ok(summary)
}
