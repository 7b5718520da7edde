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

//! The four script operations and their shared output contract.
//!
//! Each operation returns a typed value; the binaries print it with
//! [`write_json`] as exactly one JSON line on standard output.

pub mod ohlcv;
pub mod order;
pub mod pairs;
pub mod timeframes;

use std::io::Write;

use serde::Serialize;

use crate::error::{Mt5Error, Mt5Result};

pub use ohlcv::{load_ohlcv, OhlcvRequest};
pub use order::{build_buy_request, send_buy_order};
pub use pairs::load_pairs;
pub use timeframes::{timeframe_catalog, TimeframeCatalog};

/// Serializes `value` completely before writing, so a serialization failure
/// never leaves partial output behind.
pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> Mt5Result<()> {
    let mut line = serde_json::to_vec(value)?;
    line.push(b'\n');
    writer
        .write_all(&line)
        .and_then(|()| writer.flush())
        .map_err(|e| Mt5Error::SerializationError(format!("Failed to write output: {e}")))
}
