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

//! Constants shared by the MT5 scripts.

use crate::common::enums::{OrderFilling, OrderTime, Timeframe};

pub const MT5_DEFAULT_BRIDGE_URL: &str = "http://localhost:8000";
pub const MT5_DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const MT5_USER_AGENT: &str = "mt5-market-scripts";

pub const OHLCV_DEFAULT_SYMBOL: &str = "USDBRL";
pub const OHLCV_DEFAULT_TIMEFRAME: Timeframe = Timeframe::M1;
/// 2020-01-27T13:00:00Z
pub const OHLCV_DEFAULT_START_SECS: i64 = 1_580_130_000;
/// 2020-01-28T13:00:00Z
pub const OHLCV_DEFAULT_END_SECS: i64 = 1_580_216_400;

pub const ORDER_DEFAULT_SYMBOL: &str = "EURUSD";
pub const ORDER_VOLUME_LOTS: f64 = 0.1;
/// Stop-loss and take-profit distance from the ask, in points.
pub const ORDER_SLTP_POINTS: f64 = 100.0;
pub const ORDER_DEVIATION_POINTS: u32 = 20;
pub const ORDER_MAGIC: u64 = 234_000;
pub const ORDER_COMMENT: &str = "python script open";
pub const ORDER_TYPE_TIME: OrderTime = OrderTime::Gtc;
pub const ORDER_TYPE_FILLING: OrderFilling = OrderFilling::Return;
