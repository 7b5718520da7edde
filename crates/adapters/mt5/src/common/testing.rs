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

//! Testing utilities and fixtures for the MT5 scripts.
//!
//! [`MockTerminal`] answers every terminal call from scripted replies and
//! records the order in which calls were made.

use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use async_trait::async_trait;
use serde_json::json;

use crate::{
    http::{
        error::Mt5HttpError,
        models::{Mt5OrderRequest, Mt5OrderResult, Mt5Rate, Mt5SymbolInfo, Mt5Tick},
        query::{CopyRatesRangeParams, InitializeParams},
    },
    terminal::Mt5Terminal,
};

pub fn symbol_fixture(name: &str, visible: bool, point: f64) -> Mt5SymbolInfo {
    serde_json::from_value(json!({
        "custom": false,
        "select": visible,
        "visible": visible,
        "digits": 5,
        "point": point,
        "currency_base": name.get(..3).unwrap_or_default(),
        "currency_profit": name.get(3..6).unwrap_or_default(),
        "name": name,
        "path": format!("Forex\\{name}"),
    }))
    .unwrap()
}

pub fn tick_fixture(bid: f64, ask: f64) -> Mt5Tick {
    Mt5Tick {
        time: 1_580_130_000,
        bid,
        ask,
        last: 0.0,
        volume: 0,
        time_msc: 1_580_130_000_000,
        flags: 6,
        volume_real: 0.0,
    }
}

pub fn rate_fixture(time: i64, close: f64) -> Mt5Rate {
    Mt5Rate {
        time,
        open: close,
        high: close,
        low: close,
        close,
        tick_volume: 1,
        spread: 0,
        real_volume: 0,
    }
}

pub fn order_result_fixture(retcode: u32, comment: &str) -> Mt5OrderResult {
    serde_json::from_value(json!({
        "retcode": retcode,
        "deal": 40_536_203,
        "order": 40_536_194,
        "volume": 0.1,
        "price": 1.2,
        "bid": 1.19995,
        "ask": 1.2,
        "comment": comment,
        "request_id": 3,
        "retcode_external": 0,
    }))
    .unwrap()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Scripted in-memory terminal.
#[derive(Debug)]
pub struct MockTerminal {
    initialize: Mutex<Option<Result<bool, Mt5HttpError>>>,
    shutdown_error: Option<String>,
    last_error: (i64, String),
    symbols: Option<Vec<Mt5SymbolInfo>>,
    symbol_infos: HashMap<String, Mt5SymbolInfo>,
    select_result: bool,
    ticks: HashMap<String, Mt5Tick>,
    rates: Option<Vec<Mt5Rate>>,
    order_result: Option<Mt5OrderResult>,
    calls: Mutex<Vec<&'static str>>,
    rates_requests: Mutex<Vec<CopyRatesRangeParams>>,
    sent_orders: Mutex<Vec<Mt5OrderRequest>>,
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self {
            initialize: Mutex::new(None),
            shutdown_error: None,
            last_error: (-10005, "IPC timeout".to_string()),
            symbols: None,
            symbol_infos: HashMap::new(),
            select_result: true,
            ticks: HashMap::new(),
            rates: None,
            order_result: None,
            calls: Mutex::new(Vec::new()),
            rates_requests: Mutex::new(Vec::new()),
            sent_orders: Mutex::new(Vec::new()),
        }
    }
}

impl MockTerminal {
    /// A terminal that initializes and knows no symbols.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initialize(self, reply: Result<bool, Mt5HttpError>) -> Self {
        *lock(&self.initialize) = Some(reply);
        self
    }

    pub fn with_shutdown_error(mut self, message: &str) -> Self {
        self.shutdown_error = Some(message.to_string());
        self
    }

    pub fn with_symbols(mut self, symbols: Vec<Mt5SymbolInfo>) -> Self {
        for info in &symbols {
            self.symbol_infos.insert(info.name().to_string(), info.clone());
        }
        self.symbols = Some(symbols);
        self
    }

    pub fn with_symbol_select(mut self, result: bool) -> Self {
        self.select_result = result;
        self
    }

    pub fn with_tick(mut self, symbol: &str, tick: Mt5Tick) -> Self {
        self.ticks.insert(symbol.to_string(), tick);
        self
    }

    pub fn with_rates(mut self, rates: Vec<Mt5Rate>) -> Self {
        self.rates = Some(rates);
        self
    }

    pub fn with_order_result(mut self, result: Mt5OrderResult) -> Self {
        self.order_result = Some(result);
        self
    }

    /// Names of the terminal functions called so far, in order.
    pub fn calls(&self) -> Vec<&'static str> {
        lock(&self.calls).clone()
    }

    pub fn rates_requests(&self) -> Vec<CopyRatesRangeParams> {
        lock(&self.rates_requests).clone()
    }

    pub fn sent_orders(&self) -> Vec<Mt5OrderRequest> {
        lock(&self.sent_orders).clone()
    }

    fn record(&self, call: &'static str) {
        lock(&self.calls).push(call);
    }
}

#[async_trait]
impl Mt5Terminal for MockTerminal {
    async fn initialize(&self, _params: &InitializeParams) -> Result<bool, Mt5HttpError> {
        self.record("initialize");
        lock(&self.initialize).take().unwrap_or(Ok(true))
    }

    async fn shutdown(&self) -> Result<(), Mt5HttpError> {
        self.record("shutdown");
        match &self.shutdown_error {
            Some(message) => Err(Mt5HttpError::ConnectionError(message.clone())),
            None => Ok(()),
        }
    }

    async fn last_error(&self) -> Result<(i64, String), Mt5HttpError> {
        self.record("last_error");
        Ok(self.last_error.clone())
    }

    async fn symbols_get(&self) -> Result<Option<Vec<Mt5SymbolInfo>>, Mt5HttpError> {
        self.record("symbols_get");
        Ok(self.symbols.clone())
    }

    async fn symbol_info(&self, symbol: &str) -> Result<Option<Mt5SymbolInfo>, Mt5HttpError> {
        self.record("symbol_info");
        Ok(self.symbol_infos.get(symbol).cloned())
    }

    async fn symbol_select(&self, _symbol: &str, _enable: bool) -> Result<bool, Mt5HttpError> {
        self.record("symbol_select");
        Ok(self.select_result)
    }

    async fn symbol_info_tick(&self, symbol: &str) -> Result<Option<Mt5Tick>, Mt5HttpError> {
        self.record("symbol_info_tick");
        Ok(self.ticks.get(symbol).cloned())
    }

    async fn copy_rates_range(
        &self,
        params: &CopyRatesRangeParams,
    ) -> Result<Option<Vec<Mt5Rate>>, Mt5HttpError> {
        self.record("copy_rates_range");
        lock(&self.rates_requests).push(params.clone());
        Ok(self.rates.clone())
    }

    async fn order_send(
        &self,
        request: &Mt5OrderRequest,
    ) -> Result<Option<Mt5OrderResult>, Mt5HttpError> {
        self.record("order_send");
        lock(&self.sent_orders).push(request.clone());
        Ok(self.order_result.clone())
    }
}
