//! JSON-RPC 2.0 over HTTP POST.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::CatalogError;

/// Standard JSON-RPC error classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcErrorKind {
    ParseError,
    InvalidRequest,
    MethodNotFound,
    InvalidParams,
    Internal,
    Server,
    Unknown,
}

impl RpcErrorKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            -32700 => RpcErrorKind::ParseError,
            -32600 => RpcErrorKind::InvalidRequest,
            -32601 => RpcErrorKind::MethodNotFound,
            -32602 => RpcErrorKind::InvalidParams,
            -32603 => RpcErrorKind::Internal,
            -32099..=-32000 => RpcErrorKind::Server,
            _ => RpcErrorKind::Unknown,
        }
    }
}

impl fmt::Display for RpcErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RpcErrorKind::ParseError => "RPC parse error",
            RpcErrorKind::InvalidRequest => "invalid RPC request",
            RpcErrorKind::MethodNotFound => "method not found",
            RpcErrorKind::InvalidParams => "invalid RPC parameters",
            RpcErrorKind::Internal => "internal RPC error",
            RpcErrorKind::Server => "RPC server error",
            RpcErrorKind::Unknown => "unknown RPC error",
        };
        f.write_str(label)
    }
}

#[derive(Serialize, Debug)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize, Debug)]
struct RpcError {
    code: i64,
    message: String,
}

#[derive(Deserialize, Debug)]
struct Response {
    #[serde(default)]
    result: Option<Value>,
    #[serde(default)]
    error: Option<RpcError>,
}

pub struct JsonRpc {
    url: String,
    client: reqwest::Client,
    next_id: AtomicU64,
}

impl JsonRpc {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
            next_id: AtomicU64::new(1),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Call `method` with named `params` and return the `result` member.
    pub async fn query(&self, method: &str, params: Value) -> Result<Value, CatalogError> {
        let request = Request {
            jsonrpc: "2.0",
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            method,
            params,
        };
        debug!("RPC -> {} {}", request.method, request.params);

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CatalogError::Transport(e.to_string()))?;
        if !status.is_success() {
            return Err(CatalogError::Transport(format!("HTTP {status}: {body}")));
        }

        let parsed: Response =
            serde_json::from_str(&body).map_err(|e| CatalogError::Parse(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(CatalogError::Rpc {
                kind: RpcErrorKind::from_code(error.code),
                code: error.code,
                message: error.message,
            });
        }

        parsed
            .result
            .ok_or_else(|| CatalogError::Parse("response has neither result nor error".into()))
    }
}
