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

//! The subset of the terminal API the scripts call.
//!
//! Methods mirror the terminal functions one to one. A terminal "no result"
//! (`None` in the vendor API) is `Ok(None)`; transport and bridge failures are
//! `Err`.

use async_trait::async_trait;

use crate::http::{
    error::Mt5HttpError,
    models::{Mt5OrderRequest, Mt5OrderResult, Mt5Rate, Mt5SymbolInfo, Mt5Tick},
    query::{CopyRatesRangeParams, InitializeParams},
};

#[async_trait]
pub trait Mt5Terminal: Send + Sync {
    async fn initialize(&self, params: &InitializeParams) -> Result<bool, Mt5HttpError>;

    async fn shutdown(&self) -> Result<(), Mt5HttpError>;

    /// `(code, description)` of the last terminal error.
    async fn last_error(&self) -> Result<(i64, String), Mt5HttpError>;

    async fn symbols_get(&self) -> Result<Option<Vec<Mt5SymbolInfo>>, Mt5HttpError>;

    async fn symbol_info(&self, symbol: &str) -> Result<Option<Mt5SymbolInfo>, Mt5HttpError>;

    async fn symbol_select(&self, symbol: &str, enable: bool) -> Result<bool, Mt5HttpError>;

    async fn symbol_info_tick(&self, symbol: &str) -> Result<Option<Mt5Tick>, Mt5HttpError>;

    async fn copy_rates_range(
        &self,
        params: &CopyRatesRangeParams,
    ) -> Result<Option<Vec<Mt5Rate>>, Mt5HttpError>;

    async fn order_send(
        &self,
        request: &Mt5OrderRequest,
    ) -> Result<Option<Mt5OrderResult>, Mt5HttpError>;
}
