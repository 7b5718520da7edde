// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2015-2025 Nautech Systems Pty Ltd. All rights reserved.
//  https://nautechsystems.io
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Configuration structures for the MetaTrader 5 scripts.
//!
//! `Mt5Config` describes where the MT5 bridge listens and how long to wait
//! for it. Every field can be set from the environment (or a `.env` file):
//!
//! | Variable            | Field                      | Default                 |
//! |---------------------|----------------------------|-------------------------|
//! | `MT5_BRIDGE_URL`    | `base_url`                 | `http://localhost:8000` |
//! | `MT5_HTTP_TIMEOUT`  | `http_timeout` (seconds)   | `30`                    |
//! | `MT5_PROXY`         | `proxy`                    | none                    |
//! | `MT5_TERMINAL_PATH` | `terminal_path`            | none                    |
//! | `MT5_LOGIN`, `MT5_PASSWORD`, `MT5_SERVER` | `credential` | none             |

use std::{fmt::Debug, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::common::{
    consts::{MT5_DEFAULT_BRIDGE_URL, MT5_DEFAULT_HTTP_TIMEOUT_SECS},
    credential::Mt5Credential,
};

pub const ENV_BRIDGE_URL: &str = "MT5_BRIDGE_URL";
pub const ENV_HTTP_TIMEOUT: &str = "MT5_HTTP_TIMEOUT";
pub const ENV_PROXY: &str = "MT5_PROXY";
pub const ENV_TERMINAL_PATH: &str = "MT5_TERMINAL_PATH";
pub const ENV_LOGIN: &str = "MT5_LOGIN";
pub const ENV_PASSWORD: &str = "MT5_PASSWORD";
pub const ENV_SERVER: &str = "MT5_SERVER";

/// Main configuration for the MT5 bridge connection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Mt5Config {
    /// Base URL of the MT5 bridge (ex: http://localhost:8000).
    pub base_url: String,
    /// HTTP timeout in seconds.
    pub http_timeout: u64,
    /// Optional proxy URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proxy: Option<String>,
    /// Terminal executable the bridge should attach to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal_path: Option<String>,
    /// Trade account to log into on `initialize`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credential: Option<Mt5Credential>,
}

impl Default for Mt5Config {
    fn default() -> Self {
        Self {
            base_url: MT5_DEFAULT_BRIDGE_URL.to_string(),
            http_timeout: MT5_DEFAULT_HTTP_TIMEOUT_SECS,
            proxy: None,
            terminal_path: None,
            credential: None,
        }
    }
}

impl Mt5Config {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Loads `.env` (when present) and reads the configuration from the
    /// process environment.
    pub fn from_env() -> Self {
        match dotenv::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {e}"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let credential = match (lookup(ENV_LOGIN), lookup(ENV_PASSWORD), lookup(ENV_SERVER)) {
            (Some(login), Some(password), Some(server)) => Some(Mt5Credential {
                login,
                password,
                server,
            }),
            (None, None, None) => None,
            _ => {
                warn!(
                    "Ignoring partial credentials: {ENV_LOGIN}, {ENV_PASSWORD} and {ENV_SERVER} must all be set"
                );
                None
            }
        };

        Self {
            base_url: lookup(ENV_BRIDGE_URL)
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.base_url),
            http_timeout: parse_or_default(&lookup, ENV_HTTP_TIMEOUT, defaults.http_timeout),
            proxy: lookup(ENV_PROXY).filter(|s| !s.trim().is_empty()),
            terminal_path: lookup(ENV_TERMINAL_PATH).filter(|s| !s.trim().is_empty()),
            credential,
        }
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    <T as FromStr>::Err: Debug,
{
    match lookup(key) {
        Some(val) => val.trim().parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {key}: {val}, using default");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Mt5Config::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.http_timeout, 30);
        assert_eq!(config.proxy, None);
        assert_eq!(config.credential, None);
    }

    #[test]
    fn test_config_with_base_url() {
        let config = Mt5Config::with_base_url("http://custom:8080");
        assert_eq!(config.base_url, "http://custom:8080");
        assert_eq!(config.http_timeout, 30);
    }

    #[test]
    fn test_from_lookup_empty_environment_uses_defaults() {
        let config = Mt5Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Mt5Config::default());
    }

    #[test]
    fn test_from_lookup_reads_every_field() {
        let config = Mt5Config::from_lookup(lookup_from(&[
            (ENV_BRIDGE_URL, "http://bridge:9000"),
            (ENV_HTTP_TIMEOUT, "5"),
            (ENV_PROXY, "http://proxy:3128"),
            (ENV_TERMINAL_PATH, "C:\\MT5\\terminal64.exe"),
            (ENV_LOGIN, "1234"),
            (ENV_PASSWORD, "pw"),
            (ENV_SERVER, "Broker-Demo"),
        ]));

        assert_eq!(config.base_url, "http://bridge:9000");
        assert_eq!(config.http_timeout, 5);
        assert_eq!(config.proxy.as_deref(), Some("http://proxy:3128"));
        assert_eq!(config.terminal_path.as_deref(), Some("C:\\MT5\\terminal64.exe"));
        let cred = config.credential.unwrap();
        assert_eq!(cred.login, "1234");
        assert_eq!(cred.server, "Broker-Demo");
    }

    #[test]
    fn test_from_lookup_bad_timeout_falls_back() {
        let config = Mt5Config::from_lookup(lookup_from(&[(ENV_HTTP_TIMEOUT, "soon")]));
        assert_eq!(config.http_timeout, 30);
    }

    #[test]
    fn test_from_lookup_partial_credentials_are_dropped() {
        let config = Mt5Config::from_lookup(lookup_from(&[(ENV_LOGIN, "1234")]));
        assert_eq!(config.credential, None);
    }
}
