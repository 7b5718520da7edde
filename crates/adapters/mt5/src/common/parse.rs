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

//! Parsing utilities for MetaTrader 5 data.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}

pub fn parse_json_response(data: &str) -> Result<Value, ParseError> {
    serde_json::from_str(data).map_err(|e| ParseError::InvalidJson(e.to_string()))
}

/// Converts Unix epoch milliseconds to a UTC instant.
pub fn millis_to_datetime(millis: i64) -> Result<DateTime<Utc>, ParseError> {
    Utc.timestamp_millis_opt(millis)
        .single()
        .ok_or_else(|| ParseError::InvalidValue(format!("timestamp {millis}ms is out of range")))
}

/// Parses a command-line epoch-milliseconds argument as a UTC instant.
pub fn parse_millis_arg(arg: &str) -> Result<DateTime<Utc>, ParseError> {
    let millis: i64 = arg
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidValue(format!("'{arg}' is not epoch milliseconds")))?;
    millis_to_datetime(millis)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_parse_json_response() {
        let data = r#"{"status": "ok"}"#;
        let result = parse_json_response(data);
        assert!(result.is_ok());
    }

    #[test]
    fn test_parse_json_invalid() {
        let data = "invalid json";
        let result = parse_json_response(data);
        assert!(matches!(result, Err(ParseError::InvalidJson(_))));
    }

    #[test]
    fn test_zero_millis_is_unix_epoch() {
        let dt = millis_to_datetime(0).unwrap();
        assert_eq!(dt.to_rfc3339(), "1970-01-01T00:00:00+00:00");
    }

    #[rstest]
    #[case("1580123700000", "2020-01-27T11:15:00+00:00")]
    #[case("1580130000000", "2020-01-27T13:00:00+00:00")]
    #[case("1580210100500", "2020-01-28T11:15:00.500+00:00")]
    fn test_parse_millis_arg_is_utc(#[case] arg: &str, #[case] expected: &str) {
        assert_eq!(parse_millis_arg(arg).unwrap().to_rfc3339(), expected);
    }

    #[rstest]
    #[case("yesterday")]
    #[case("1.5")]
    #[case("")]
    fn test_parse_millis_arg_rejects_garbage(#[case] arg: &str) {
        assert!(matches!(
            parse_millis_arg(arg),
            Err(ParseError::InvalidValue(_))
        ));
    }
}
