//! # Music Catalog
//!
//! Where band and album names come from. The UI only sees the [`Catalog`]
//! trait; [`MopidyClient`] implements it over Mopidy's JSON-RPC API.
//!
//! Calls are synchronous: a drill-down blocks the event loop until the
//! catalog answers or its timeout expires.

pub mod jsonrpc;
pub mod mopidy;

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

pub use jsonrpc::{JsonRpc, RpcErrorKind};
pub use mopidy::MopidyClient;

/// A named item in the library, as returned by a browse call.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Entry {
    pub name: String,
    pub uri: String,
}

/// Errors that can occur while talking to the library.
#[derive(Debug)]
pub enum CatalogError {
    /// Connection refused, DNS, bad status code.
    Transport(String),
    /// No answer within the configured timeout.
    Timeout(Duration),
    /// The server answered with a JSON-RPC error object.
    Rpc {
        kind: RpcErrorKind,
        code: i64,
        message: String,
    },
    /// The response body wasn't what we expected.
    Parse(String),
    /// Asked for the albums of a band the catalog never listed.
    UnknownBand(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Transport(msg) => write!(f, "transport error: {msg}"),
            CatalogError::Timeout(after) => {
                write!(f, "no answer after {:.1}s", after.as_secs_f32())
            }
            CatalogError::Rpc {
                kind,
                code,
                message,
            } => write!(f, "{kind} (#{code}): {message}"),
            CatalogError::Parse(msg) => write!(f, "parse error: {msg}"),
            CatalogError::UnknownBand(name) => write!(f, "unknown band: {name}"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Hierarchical listing of the music library.
pub trait Catalog {
    /// All band names, sorted.
    fn bands(&mut self) -> Result<Vec<String>, CatalogError>;

    /// Album names of `band`, sorted.
    fn albums(&mut self, band: &str) -> Result<Vec<String>, CatalogError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CatalogError::Timeout(Duration::from_millis(1500)).to_string(),
            "no answer after 1.5s"
        );
        assert_eq!(
            CatalogError::Rpc {
                kind: RpcErrorKind::MethodNotFound,
                code: -32601,
                message: "nope".into(),
            }
            .to_string(),
            "method not found (#-32601): nope"
        );
        assert_eq!(
            CatalogError::UnknownBand("Zed".into()).to_string(),
            "unknown band: Zed"
        );
    }

    #[test]
    fn test_entry_deserializes_from_ref() {
        let entry: Entry = serde_json::from_str(
            r#"{"__model__": "Ref", "type": "directory", "name": "Air", "uri": "local:directory?albumartist=Air"}"#,
        )
        .unwrap();
        assert_eq!(entry.name, "Air");
        assert_eq!(entry.uri, "local:directory?albumartist=Air");
    }
}
