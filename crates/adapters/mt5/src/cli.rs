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

//! Command-line surface shared by the script binaries.
//!
//! Arguments are positional only. On success a binary prints one JSON value
//! on stdout and exits 0; on failure stdout stays empty, the error goes to
//! stderr and the exit code is non-zero.

use std::{io, process::ExitCode};

use clap::Parser;
use serde::Serialize;

use crate::{
    commands::{write_json, OhlcvRequest},
    common::consts::ORDER_DEFAULT_SYMBOL,
    config::Mt5Config,
    error::Mt5Error,
    http::{client::Mt5HttpClient, error::Mt5HttpError, query::InitializeParams},
    session::initialize_params,
};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_USAGE: u8 = 2;

/// Print every symbol known to the terminal as a JSON array.
#[derive(Debug, Parser)]
#[command(name = "load-pairs", version)]
pub struct LoadPairsArgs {}

/// Print the timeframe label -> terminal code catalog as a JSON object.
#[derive(Debug, Parser)]
#[command(name = "load-timeframes", version)]
pub struct LoadTimeframesArgs {}

/// Print the OHLCV bars of a symbol over a time range as a JSON array.
#[derive(Debug, Parser)]
#[command(name = "load-ohlcv", version, allow_negative_numbers = true)]
pub struct LoadOhlcvArgs {
    /// Symbol [default: USDBRL]
    pub symbol: Option<String>,

    /// Terminal timeframe code, e.g. 1 for one minute, 16385 for one hour [default: 1]
    pub timeframe: Option<String>,

    /// Range start, Unix epoch milliseconds (UTC) [default: 2020-01-27T13:00:00Z]
    pub start_ms: Option<String>,

    /// Range end, Unix epoch milliseconds (UTC) [default: 2020-01-28T13:00:00Z]
    pub end_ms: Option<String>,
}

impl LoadOhlcvArgs {
    pub fn to_request(&self) -> Result<OhlcvRequest, Mt5Error> {
        OhlcvRequest::from_args(
            self.symbol.as_deref(),
            self.timeframe.as_deref(),
            self.start_ms.as_deref(),
            self.end_ms.as_deref(),
        )
    }
}

/// Place one 0.1 lot market buy with stop-loss and take-profit 100 points
/// from the ask, and print the execution receipt as a JSON object.
#[derive(Debug, Parser)]
#[command(name = "order-send", version, allow_negative_numbers = true)]
pub struct OrderSendArgs {
    /// Symbol [default: EURUSD]
    pub symbol: Option<String>,

    // Accepted for compatibility with the bar loader's argument list; unused.
    #[arg(hide = true)]
    pub timeframe: Option<String>,
    #[arg(hide = true)]
    pub start_ms: Option<String>,
    #[arg(hide = true)]
    pub end_ms: Option<String>,
}

impl OrderSendArgs {
    pub fn symbol(&self) -> &str {
        self.symbol.as_deref().unwrap_or(ORDER_DEFAULT_SYMBOL)
    }
}

/// Reads the configuration and builds the bridge client and the
/// `initialize` arguments.
pub fn connect() -> Result<(Mt5HttpClient, InitializeParams), Mt5Error> {
    let config = Mt5Config::from_env();
    let client = Mt5HttpClient::new(&config)?;
    let params = initialize_params(&config)?;
    Ok((client, params))
}

/// Prints the result and picks the exit code.
pub fn finish<T: Serialize>(result: anyhow::Result<T>) -> ExitCode {
    ExitCode::from(finish_to(io::stdout().lock(), result))
}

/// Writes the JSON value to `writer` on success, otherwise prints one error
/// line on stderr. Returns the process exit code.
pub fn finish_to<W: io::Write, T: Serialize>(writer: W, result: anyhow::Result<T>) -> u8 {
    let err = match result {
        Ok(value) => match write_json(writer, &value) {
            Ok(()) => return EXIT_SUCCESS,
            Err(e) => anyhow::Error::new(e),
        },
        Err(e) => e,
    };

    eprintln!("{}", error_line(&err));
    exit_code_for(&err)
}

fn error_line(err: &anyhow::Error) -> String {
    if is_transient(err) {
        format!("error: {err:#} (transient, a later run may succeed)")
    } else {
        format!("error: {err:#}")
    }
}

/// True when the failure came from a bridge error a later attempt could clear.
fn is_transient(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| match cause.downcast_ref::<Mt5Error>() {
        Some(Mt5Error::Http(e)) => e.is_retryable(),
        _ => cause
            .downcast_ref::<Mt5HttpError>()
            .is_some_and(Mt5HttpError::is_retryable),
    })
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Mt5Error>() {
        Some(Mt5Error::InvalidArgument(_)) => EXIT_USAGE,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;

    use super::*;
    use crate::common::enums::Timeframe;

    #[test]
    fn test_ohlcv_args_all_optional() {
        let args = LoadOhlcvArgs::try_parse_from(["load-ohlcv"]).unwrap();
        let request = args.to_request().unwrap();
        assert_eq!(request, OhlcvRequest::default());
    }

    #[test]
    fn test_ohlcv_args_positional() {
        let args = LoadOhlcvArgs::try_parse_from([
            "load-ohlcv",
            "EURUSD",
            "16408",
            "0",
            "86400000",
        ])
        .unwrap();
        let request = args.to_request().unwrap();
        assert_eq!(request.symbol, "EURUSD");
        assert_eq!(request.timeframe, Timeframe::D1);
        assert_eq!(request.start.timestamp(), 0);
        assert_eq!(request.end.timestamp(), 86_400);
    }

    #[test]
    fn test_ohlcv_args_accept_negative_millis() {
        let args =
            LoadOhlcvArgs::try_parse_from(["load-ohlcv", "EURUSD", "1", "-1000", "0"]).unwrap();
        assert_eq!(args.to_request().unwrap().start.timestamp(), -1);
    }

    #[test]
    fn test_ohlcv_args_reject_extra_positional() {
        let result = LoadOhlcvArgs::try_parse_from(["load-ohlcv", "a", "1", "2", "3", "4"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_order_send_ignores_trailing_args() {
        let args =
            OrderSendArgs::try_parse_from(["order-send", "USDBRL", "1", "0", "1000"]).unwrap();
        assert_eq!(args.symbol(), "USDBRL");

        let args = OrderSendArgs::try_parse_from(["order-send"]).unwrap();
        assert_eq!(args.symbol(), "EURUSD");
    }

    #[test]
    fn test_finish_success_prints_json() {
        let mut out = Vec::new();
        let code = finish_to(&mut out, Ok(vec![1, 2]));
        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(out, b"[1,2]\n");
    }

    #[test]
    fn test_finish_failure_prints_nothing() {
        let mut out = Vec::new();
        let result = Err::<Vec<u8>, _>(Mt5Error::OrderRejected {
            retcode: 10006,
            comment: "Request rejected".to_string(),
        })
        .context("order-send failed");

        let code = finish_to(&mut out, result);

        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_argument_is_usage_exit() {
        let err = anyhow::Error::new(Mt5Error::InvalidArgument("bad".to_string()));
        assert_eq!(exit_code_for(&err), EXIT_USAGE);

        let wrapped = Err::<(), _>(Mt5Error::InvalidArgument("bad".to_string()))
            .context("load-ohlcv")
            .unwrap_err();
        assert_eq!(exit_code_for(&wrapped), EXIT_USAGE);
    }

    #[test]
    fn test_transient_bridge_failure_is_flagged() {
        let err = Err::<(), _>(Mt5Error::Http(Mt5HttpError::ServerError(
            "bridge restarting".to_string(),
        )))
        .context("load-pairs failed")
        .unwrap_err();

        assert_eq!(
            error_line(&err),
            "error: load-pairs failed: Server error: bridge restarting \
             (transient, a later run may succeed)"
        );
        assert_eq!(exit_code_for(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_permanent_failure_is_not_flagged() {
        let bridge = anyhow::Error::new(Mt5Error::Http(Mt5HttpError::BridgeError(
            "terminal not connected".to_string(),
        )));
        assert_eq!(
            error_line(&bridge),
            "error: Bridge error: terminal not connected"
        );

        let rejected = anyhow::Error::new(Mt5Error::OrderRejected {
            retcode: 10018,
            comment: "Market closed".to_string(),
        });
        assert!(!is_transient(&rejected));
    }
}
