//! Replica CLI library: load a prototype record from TOML and produce copies of it through one
//! of the [`replica`] object providers.
//!
//! The binary in `main.rs` only parses arguments, sets up config and logging, and calls [`run`].

use std::collections::HashSet;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use replica::{
    CloningProvider, ConstantProvider, ObjectProvider, ProviderError, SingletonProvider,
};
use serde_json::Value;
use thiserror::Error;

/// Which provider produces the objects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// A fresh copy of the prototype per object.
    Clone,
    /// The prototype itself, shared by every object.
    Constant,
    /// One copy made on first use, then shared.
    Singleton,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("read prototype {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parse prototype {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Provider(#[from] ProviderError),
    #[error("encode output")]
    Encode(#[from] serde_json::Error),
    #[error("write output")]
    Write(#[from] std::io::Error),
}

/// Options for one run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    pub prototype: PathBuf,
    pub count: usize,
    pub strategy: Strategy,
}

/// Objects produced by a run.
#[derive(Debug)]
pub struct RunOutput {
    pub objects: Vec<Value>,
    /// Number of distinct instances among `objects`.
    pub distinct: usize,
}

/// Reads a TOML table and converts it to JSON.
pub fn load_prototype(path: &Path) -> Result<Value, CliError> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Requests `count` objects from `provider`, stopping at the first failure.
pub fn produce<O, P>(provider: &P, count: usize) -> Result<Vec<O>, ProviderError>
where
    P: ObjectProvider<O> + ?Sized,
{
    (0..count).map(|_| provider.get_object()).collect()
}

/// Counts distinct instances by address and copies the values out for rendering.
fn unshare(shared: Vec<Arc<Value>>) -> RunOutput {
    let distinct = shared
        .iter()
        .map(Arc::as_ptr)
        .collect::<HashSet<_>>()
        .len();
    let objects = shared.iter().map(|v| Value::clone(v)).collect();
    RunOutput { objects, distinct }
}

/// Loads the prototype and produces `opts.count` objects with the chosen strategy.
pub fn run(opts: &RunOptions) -> Result<RunOutput, CliError> {
    let prototype = load_prototype(&opts.prototype)?;
    tracing::debug!(
        path = %opts.prototype.display(),
        strategy = ?opts.strategy,
        count = opts.count,
        "loaded prototype"
    );

    let output = match opts.strategy {
        Strategy::Clone => {
            let objects = produce(&CloningProvider::from_clone(prototype), opts.count)?;
            unshare(objects.into_iter().map(Arc::new).collect())
        }
        Strategy::Constant => unshare(produce(&ConstantProvider::new(prototype), opts.count)?),
        Strategy::Singleton => {
            let provider =
                SingletonProvider::<Value, _>::new(CloningProvider::from_clone(prototype));
            unshare(produce(&provider, opts.count)?)
        }
    };
    tracing::info!(
        produced = output.objects.len(),
        distinct = output.distinct,
        "run finished"
    );
    Ok(output)
}

/// Writes one JSON document per object; compact objects are one per line.
pub fn write_objects<W: Write>(
    out: &mut W,
    objects: &[Value],
    pretty: bool,
) -> Result<(), CliError> {
    for object in objects {
        let s = if pretty {
            serde_json::to_string_pretty(object)?
        } else {
            serde_json::to_string(object)?
        };
        writeln!(out, "{}", s)?;
    }
    out.flush()?;
    Ok(())
}
