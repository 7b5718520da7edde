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

//! URL management for the MT5 bridge routes.
//!
//! Each terminal function is exposed as `POST {base_url}/api/{function}`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mt5Url {
    base_url: String,
}

impl Mt5Url {
    pub const INITIALIZE: &'static str = "/api/initialize";
    pub const SHUTDOWN: &'static str = "/api/shutdown";
    pub const LAST_ERROR: &'static str = "/api/last_error";
    pub const SYMBOLS_GET: &'static str = "/api/symbols_get";
    pub const SYMBOL_INFO: &'static str = "/api/symbol_info";
    pub const SYMBOL_INFO_TICK: &'static str = "/api/symbol_info_tick";
    pub const SYMBOL_SELECT: &'static str = "/api/symbol_select";
    pub const COPY_RATES_RANGE: &'static str = "/api/copy_rates_range";
    pub const ORDER_SEND: &'static str = "/api/order_send";

    /// Trailing slashes are dropped so routes can be appended verbatim.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn route(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
