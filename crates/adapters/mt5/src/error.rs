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

//! Error types for the MT5 scripts.

use std::fmt::Debug;

use thiserror::Error;

use crate::{common::parse::ParseError, http::error::Mt5HttpError};

#[derive(Error, Debug)]
pub enum Mt5Error {
    #[error("initialize() failed: {0}")]
    InitializeFailed(String),

    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    #[error("symbol_select({0}) failed")]
    SymbolSelectFailed(String),

    #[error("No tick available for {0}")]
    TickUnavailable(String),

    #[error("Order rejected with retcode {retcode}: {comment}")]
    OrderRejected { retcode: u32, comment: String },

    #[error("No data returned by {call}{}", fmt_detail(.detail))]
    NoData {
        call: &'static str,
        detail: Option<String>,
    },

    #[error(transparent)]
    Http(#[from] Mt5HttpError),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for Mt5Error {
    fn from(err: serde_json::Error) -> Self {
        Mt5Error::SerializationError(err.to_string())
    }
}

impl From<ParseError> for Mt5Error {
    fn from(err: ParseError) -> Self {
        Mt5Error::InvalidArgument(err.to_string())
    }
}

pub type Mt5Result<T> = Result<T, Mt5Error>;

fn fmt_detail(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}
