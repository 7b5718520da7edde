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

//! Bar loader.

use chrono::{DateTime, TimeZone, Utc};
use tracing::info;

use crate::{
    common::{
        consts::{
            OHLCV_DEFAULT_END_SECS, OHLCV_DEFAULT_START_SECS, OHLCV_DEFAULT_SYMBOL,
            OHLCV_DEFAULT_TIMEFRAME,
        },
        enums::Timeframe,
        parse::parse_millis_arg,
    },
    error::{Mt5Error, Mt5Result},
    http::{models::Mt5Rate, query::CopyRatesRangeParams},
    session::Mt5Session,
    terminal::Mt5Terminal,
};

/// One `copy_rates_range` request: all bars of `symbol` on `timeframe`
/// between `start` and `end`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OhlcvRequest {
    pub symbol: String,
    pub timeframe: Timeframe,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Default for OhlcvRequest {
    fn default() -> Self {
        Self {
            symbol: OHLCV_DEFAULT_SYMBOL.to_string(),
            timeframe: OHLCV_DEFAULT_TIMEFRAME,
            start: default_instant(OHLCV_DEFAULT_START_SECS),
            end: default_instant(OHLCV_DEFAULT_END_SECS),
        }
    }
}

fn default_instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).single().unwrap_or_default()
}

impl OhlcvRequest {
    /// Builds a request from the positional arguments
    /// `[symbol] [timeframe_code] [start_ms] [end_ms]`; omitted ones keep
    /// their defaults.
    pub fn from_args(
        symbol: Option<&str>,
        timeframe: Option<&str>,
        start_ms: Option<&str>,
        end_ms: Option<&str>,
    ) -> Mt5Result<Self> {
        let mut request = Self::default();
        if let Some(symbol) = symbol {
            request.symbol = symbol.to_string();
        }
        if let Some(timeframe) = timeframe {
            request.timeframe = timeframe.parse()?;
        }
        if let Some(start) = start_ms {
            request.start = parse_millis_arg(start)?;
        }
        if let Some(end) = end_ms {
            request.end = parse_millis_arg(end)?;
        }
        Ok(request)
    }

    /// Bridge arguments. The bridge takes whole seconds, so a sub-second
    /// start rounds up and a sub-second end rounds down; the range never
    /// grows past what was asked for.
    pub fn to_params(&self) -> CopyRatesRangeParams {
        let round_up = i64::from(self.start.timestamp_subsec_nanos() > 0);
        CopyRatesRangeParams {
            symbol: self.symbol.clone(),
            timeframe: self.timeframe,
            date_from: self.start.timestamp() + round_up,
            date_to: self.end.timestamp(),
        }
    }
}

/// Loads the bars for `request`. A terminal "no result" is an error; an
/// empty range is an empty `Vec`.
pub async fn load_ohlcv<T>(
    session: &Mt5Session<'_, T>,
    request: &OhlcvRequest,
) -> Mt5Result<Vec<Mt5Rate>>
where
    T: Mt5Terminal + ?Sized,
{
    match session.rates_range(&request.to_params()).await? {
        Some(rates) => {
            info!(
                "Loaded {} {} bars for {} from {} to {}",
                rates.len(),
                request.timeframe,
                request.symbol,
                request.start,
                request.end
            );
            Ok(rates)
        }
        None => Err(Mt5Error::NoData {
            call: "copy_rates_range",
            detail: session.last_error().await,
        }),
    }
}
