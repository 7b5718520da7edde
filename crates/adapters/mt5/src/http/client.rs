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

//! HTTP client for the MetaTrader 5 bridge.
//!
//! The bridge exposes each terminal function as a POST JSON route
//! (`/api/initialize`, `/api/symbol_info`, `/api/order_send`, ...). This
//! module provides:
//! - `Mt5HttpInnerClient`: low-level client that posts a body and unwraps the
//!   `{"result": ..}` / `{"error": ..}` envelope into a typed value.
//! - `Mt5HttpClient`: clonable wrapper implementing [`Mt5Terminal`].

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{
    common::{consts::MT5_USER_AGENT, parse::parse_json_response, urls::Mt5Url},
    config::Mt5Config,
    http::{
        error::Mt5HttpError,
        models::{Mt5OrderRequest, Mt5OrderResult, Mt5Rate, Mt5Response, Mt5SymbolInfo, Mt5Tick},
        query::{
            CopyRatesRangeParams, InitializeParams, OrderSendParams, SymbolParams,
            SymbolSelectParams, SymbolsGetParams,
        },
    },
    terminal::Mt5Terminal,
};

// Low-level MT5 HTTP client (inner)
#[derive(Debug)]
pub struct Mt5HttpInnerClient {
    url: Mt5Url,
    client: Client,
    is_connected: AtomicBool,
}

#[derive(Debug, Clone)]
pub struct Mt5HttpClient {
    inner: Arc<Mt5HttpInnerClient>,
}

impl Mt5HttpInnerClient {
    pub fn new(config: &Mt5Config) -> Result<Self, Mt5HttpError> {
        let mut builder = Client::builder()
            .user_agent(MT5_USER_AGENT)
            .timeout(Duration::from_secs(config.http_timeout));

        if let Some(proxy) = &config.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| Mt5HttpError::ConnectionError(format!("Invalid proxy: {e}")))?;
            builder = builder.proxy(proxy);
        }

        let client = builder
            .build()
            .map_err(|e| Mt5HttpError::ConnectionError(e.to_string()))?;

        Ok(Self {
            url: Mt5Url::new(config.base_url.clone()),
            client,
            is_connected: AtomicBool::new(false),
        })
    }

    pub fn is_connected(&self) -> bool {
        self.is_connected.load(Ordering::SeqCst)
    }

    fn set_connected(&self, connected: bool) {
        self.is_connected.store(connected, Ordering::SeqCst);
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, Mt5HttpError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url.route(path);
        debug!("POST {url}");

        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(Mt5HttpError::from_http_status(status.as_u16(), text));
        }

        let value = parse_json_response(&text)
            .map_err(|e| Mt5HttpError::JsonDecodeError(format!("Invalid JSON response: {e}")))?;
        let envelope: Mt5Response<T> = serde_json::from_value(value)
            .map_err(|e| Mt5HttpError::JsonDecodeError(format!("Unexpected {path} reply: {e}")))?;

        envelope.into_result().map_err(Mt5HttpError::BridgeError)
    }

    pub async fn http_initialize(&self, params: &InitializeParams) -> Result<bool, Mt5HttpError> {
        let ok: bool = self.post_json(Mt5Url::INITIALIZE, params).await?;
        self.set_connected(ok);
        Ok(ok)
    }

    pub async fn http_shutdown(&self) -> Result<(), Mt5HttpError> {
        let _: serde_json::Value = self
            .post_json(Mt5Url::SHUTDOWN, &serde_json::json!({}))
            .await?;
        self.set_connected(false);
        Ok(())
    }

    pub async fn http_last_error(&self) -> Result<(i64, String), Mt5HttpError> {
        self.post_json(Mt5Url::LAST_ERROR, &serde_json::json!({}))
            .await
    }

    pub async fn http_symbols_get(
        &self,
        params: &SymbolsGetParams,
    ) -> Result<Option<Vec<Mt5SymbolInfo>>, Mt5HttpError> {
        self.post_json(Mt5Url::SYMBOLS_GET, params).await
    }

    pub async fn http_symbol_info(
        &self,
        params: &SymbolParams,
    ) -> Result<Option<Mt5SymbolInfo>, Mt5HttpError> {
        self.post_json(Mt5Url::SYMBOL_INFO, params).await
    }

    pub async fn http_symbol_select(
        &self,
        params: &SymbolSelectParams,
    ) -> Result<bool, Mt5HttpError> {
        self.post_json(Mt5Url::SYMBOL_SELECT, params).await
    }

    pub async fn http_symbol_info_tick(
        &self,
        params: &SymbolParams,
    ) -> Result<Option<Mt5Tick>, Mt5HttpError> {
        self.post_json(Mt5Url::SYMBOL_INFO_TICK, params).await
    }

    pub async fn http_copy_rates_range(
        &self,
        params: &CopyRatesRangeParams,
    ) -> Result<Option<Vec<Mt5Rate>>, Mt5HttpError> {
        self.post_json(Mt5Url::COPY_RATES_RANGE, params).await
    }

    pub async fn http_order_send(
        &self,
        params: &OrderSendParams,
    ) -> Result<Option<Mt5OrderResult>, Mt5HttpError> {
        self.post_json(Mt5Url::ORDER_SEND, params).await
    }
}

impl Mt5HttpClient {
    pub fn new(config: &Mt5Config) -> Result<Self, Mt5HttpError> {
        let inner = Mt5HttpInnerClient::new(config)?;
        Ok(Self {
            inner: Arc::new(inner),
        })
    }

    pub fn base_url(&self) -> &str {
        self.inner.url.base_url()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }
}

#[async_trait]
impl Mt5Terminal for Mt5HttpClient {
    async fn initialize(&self, params: &InitializeParams) -> Result<bool, Mt5HttpError> {
        self.inner.http_initialize(params).await
    }

    async fn shutdown(&self) -> Result<(), Mt5HttpError> {
        self.inner.http_shutdown().await
    }

    async fn last_error(&self) -> Result<(i64, String), Mt5HttpError> {
        self.inner.http_last_error().await
    }

    async fn symbols_get(&self) -> Result<Option<Vec<Mt5SymbolInfo>>, Mt5HttpError> {
        self.inner
            .http_symbols_get(&SymbolsGetParams::default())
            .await
    }

    async fn symbol_info(&self, symbol: &str) -> Result<Option<Mt5SymbolInfo>, Mt5HttpError> {
        let params = SymbolParams {
            symbol: symbol.to_string(),
        };
        self.inner.http_symbol_info(&params).await
    }

    async fn symbol_select(&self, symbol: &str, enable: bool) -> Result<bool, Mt5HttpError> {
        let params = SymbolSelectParams {
            symbol: symbol.to_string(),
            enable,
        };
        self.inner.http_symbol_select(&params).await
    }

    async fn symbol_info_tick(&self, symbol: &str) -> Result<Option<Mt5Tick>, Mt5HttpError> {
        let params = SymbolParams {
            symbol: symbol.to_string(),
        };
        self.inner.http_symbol_info_tick(&params).await
    }

    async fn copy_rates_range(
        &self,
        params: &CopyRatesRangeParams,
    ) -> Result<Option<Vec<Mt5Rate>>, Mt5HttpError> {
        self.inner.http_copy_rates_range(params).await
    }

    async fn order_send(
        &self,
        request: &Mt5OrderRequest,
    ) -> Result<Option<Mt5OrderResult>, Mt5HttpError> {
        let params = OrderSendParams {
            request: request.clone(),
        };
        self.inner.http_order_send(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = Mt5HttpClient::new(&Mt5Config::with_base_url("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert!(!client.is_connected());
    }

    #[test]
    fn test_http_client_with_proxy() {
        let config = Mt5Config {
            proxy: Some("http://proxy.example.com:8080".to_string()),
            ..Mt5Config::default()
        };
        assert!(Mt5HttpClient::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_bridge_is_connection_error() {
        let config = Mt5Config {
            base_url: "http://127.0.0.1:1".to_string(),
            http_timeout: 2,
            ..Mt5Config::default()
        };
        let client = Mt5HttpClient::new(&config).unwrap();

        let result = client.symbols_get().await;
        match result {
            Err(Mt5HttpError::ConnectionError(_)) | Err(Mt5HttpError::TimeoutError(_)) => (),
            other => panic!("Expected ConnectionError, was {other:?}"),
        }
    }
}
