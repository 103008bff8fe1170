//! Mopidy library browsing through its HTTP JSON-RPC frontend.
//!
//! Bands are the directories under `local:directory`; albums are the
//! directories under a band's uri. Both listings are fetched once and kept
//! for the lifetime of the client.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use log::{debug, info, warn};
use serde_json::json;
use tokio::runtime::Runtime;

use super::{Catalog, CatalogError, Entry, JsonRpc};

pub const DEFAULT_PORT: u16 = 6680;

const BROWSE: &str = "core.library.browse";
const ROOT_URI: &str = "local:directory";

/// Turn `host` or `host:port` into the RPC endpoint URL.
pub fn rpc_url(host: &str) -> String {
    match host.rsplit_once(':') {
        Some((name, port)) if port.parse::<u16>().is_ok() => {
            format!("http://{name}:{port}/mopidy/rpc")
        }
        _ => format!("http://{host}:{DEFAULT_PORT}/mopidy/rpc"),
    }
}

pub struct MopidyClient {
    rpc: JsonRpc,
    runtime: Runtime,
    timeout: Duration,
    /// Band name → browse uri. `None` until the first `bands()` call.
    bands: Option<BTreeMap<String, String>>,
    /// Band name → (album name → uri).
    albums: HashMap<String, BTreeMap<String, String>>,
}

impl MopidyClient {
    pub fn new(host: &str, timeout: Duration) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        let rpc = JsonRpc::new(rpc_url(host));
        info!("Mopidy endpoint: {}", rpc.url());
        Ok(Self {
            rpc,
            runtime,
            timeout,
            bands: None,
            albums: HashMap::new(),
        })
    }

    /// Browse one level below `uri`, bounded by the client timeout.
    fn browse(&self, uri: &str) -> Result<Vec<Entry>, CatalogError> {
        let query = self.rpc.query(BROWSE, json!({ "uri": uri }));
        let result = self
            .runtime
            .block_on(async { tokio::time::timeout(self.timeout, query).await })
            .map_err(|_| {
                warn!("Browse of {} timed out after {:?}", uri, self.timeout);
                CatalogError::Timeout(self.timeout)
            })??;

        let entries: Vec<Entry> =
            serde_json::from_value(result).map_err(|e| CatalogError::Parse(e.to_string()))?;
        debug!("Browse of {} returned {} entries", uri, entries.len());
        Ok(entries)
    }

    fn band_index(&mut self) -> Result<&BTreeMap<String, String>, CatalogError> {
        if self.bands.is_none() {
            let index = into_index(self.browse(ROOT_URI)?);
            info!("Loaded {} bands", index.len());
            self.bands = Some(index);
        }
        Ok(self.bands.get_or_insert_with(BTreeMap::new))
    }
}

fn into_index(entries: Vec<Entry>) -> BTreeMap<String, String> {
    entries.into_iter().map(|e| (e.name, e.uri)).collect()
}

impl Catalog for MopidyClient {
    fn bands(&mut self) -> Result<Vec<String>, CatalogError> {
        Ok(self.band_index()?.keys().cloned().collect())
    }

    fn albums(&mut self, band: &str) -> Result<Vec<String>, CatalogError> {
        if !self.albums.contains_key(band) {
            let uri = self
                .band_index()?
                .get(band)
                .ok_or_else(|| CatalogError::UnknownBand(band.to_string()))?
                .clone();
            let albums = into_index(self.browse(&uri)?);
            info!("Loaded {} albums for {}", albums.len(), band);
            self.albums.insert(band.to_string(), albums);
        }
        Ok(self.albums[band].keys().cloned().collect())
    }
}
