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

//! Request bodies for the MT5 bridge routes.
//!
//! Field names follow the keyword arguments of the terminal functions.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use crate::{common::enums::Timeframe, http::models::Mt5OrderRequest};

#[derive(Clone, Debug, Default, Deserialize, Serialize, Builder, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct InitializeParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,
    /// Terminal connection timeout, milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, Builder, PartialEq)]
#[builder(setter(into, strip_option), default)]
pub struct SymbolsGetParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, Builder, PartialEq)]
#[builder(setter(into))]
pub struct SymbolParams {
    pub symbol: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, Builder, PartialEq)]
#[builder(setter(into))]
pub struct SymbolSelectParams {
    pub symbol: String,
    #[builder(default = "true")]
    pub enable: bool,
}

/// `date_from` / `date_to` are Unix seconds, UTC.
#[derive(Clone, Debug, Deserialize, Serialize, Builder, PartialEq)]
#[builder(setter(into))]
pub struct CopyRatesRangeParams {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub date_from: i64,
    pub date_to: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct OrderSendParams {
    pub request: Mt5OrderRequest,
}
