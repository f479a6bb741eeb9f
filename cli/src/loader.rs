//! Share-set files.
//!
//! ```json
//! {
//!     "keys": { "n": 4, "k": 3 },
//!     "1": { "base": "10", "value": "4" },
//!     "2": { "base": 2, "value": "111" }
//! }
//! ```
//!
//! Every top-level entry except `keys` is a share keyed by its decimal
//! index. Shares are listed the way a JavaScript object enumerates its own
//! keys, and that listing decides the first `k`: canonical array-index keys
//! (`"0"`, `"7"`, `"12"`, never `"07"` or `"-1"`) come first in ascending
//! numeric order, then every other key in document order.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use secret_core::{ReconstructError, Share, ShareSet};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

const KEYS_ENTRY: &str = "keys";

/// Largest array index, `2^32 - 2`.
const MAX_ARRAY_INDEX: u32 = u32::MAX - 1;

pub type LoadResult<T> = std::result::Result<T, LoadError>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed share file")]
    Json(#[from] serde_json::Error),
    #[error("share file has no `keys` entry")]
    MissingKeys,
    #[error("share {key:?}: base {base:?} is not a number")]
    InvalidBase { key: String, base: String },
    #[error("share {key:?}")]
    Share {
        key: String,
        #[source]
        source: ReconstructError,
    },
    #[error(transparent)]
    ShareSet(#[from] ReconstructError),
}

#[derive(Debug, Deserialize)]
struct Keys {
    n: Option<usize>,
    k: usize,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawBase {
    Number(u32),
    Text(String),
}

#[derive(Debug, Deserialize)]
struct RawShare {
    base: RawBase,
    value: String,
}

impl RawShare {
    fn into_share(self, key: &str) -> LoadResult<Share> {
        let base = match self.base {
            RawBase::Number(base) => base,
            RawBase::Text(text) => {
                text.trim().parse().map_err(|_| LoadError::InvalidBase {
                    key: key.to_owned(),
                    base: text.clone(),
                })?
            }
        };
        Share::decode(key, &self.value, base).map_err(|source| {
            LoadError::Share {
                key: key.to_owned(),
                source,
            }
        })
    }
}

/// Numeric value of `key` if it is a canonical array index.
fn array_index(key: &str) -> Option<u32> {
    let canonical = key == "0"
        || (!key.starts_with('0')
            && !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_digit()));
    if !canonical {
        return None;
    }
    key.parse().ok().filter(|&index| index <= MAX_ARRAY_INDEX)
}

/// Share entries in enumeration order, `keys` left out.
fn share_entries(document: &Map<String, Value>) -> Vec<(&String, &Value)> {
    let (mut indexed, named): (Vec<_>, Vec<_>) = document
        .iter()
        .filter(|(key, _)| key.as_str() != KEYS_ENTRY)
        .partition(|(key, _)| array_index(key).is_some());
    indexed.sort_by_key(|(key, _)| array_index(key));
    indexed.extend(named);
    indexed
}

/// Parse a share-set document.
pub fn parse_share_set(text: &str) -> LoadResult<ShareSet> {
    let document: Map<String, Value> = serde_json::from_str(text)?;

    let keys: Keys = document
        .get(KEYS_ENTRY)
        .cloned()
        .map(serde_json::from_value)
        .transpose()?
        .ok_or(LoadError::MissingKeys)?;

    let shares = share_entries(&document)
        .into_iter()
        .map(|(key, value)| {
            let raw: RawShare = serde_json::from_value(value.clone())?;
            raw.into_share(key)
        })
        .collect::<LoadResult<Vec<_>>>()?;

    if let Some(n) = keys.n {
        if n != shares.len() {
            warn!(
                "share file declares n = {n} but carries {} shares",
                shares.len()
            );
        }
    }

    let set = ShareSet::new(keys.k, shares)?;
    Ok(match keys.n {
        Some(n) => set.with_declared_total(n),
        None => set,
    })
}

/// Read and parse the share-set file at `path`.
pub fn load_share_set(path: &Path) -> LoadResult<ShareSet> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_share_set(&text)
}
