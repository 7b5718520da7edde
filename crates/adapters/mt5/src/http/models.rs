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

//! Data models for MetaTrader 5 bridge responses.
//!
//! The bridge returns responses in the format:
//! - Success: `{"result": <data>}` where `<data>` may be `null`
//! - Error: `{"error": "error message"}`
//!
//! Symbol records and order receipts are passed through: they serialize back
//! to exactly the object the bridge sent, in the same key order. The fields
//! the scripts read are parsed alongside into a typed view.

use serde::{
    de::{self, DeserializeOwned},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};
use serde_json::{Map, Value};

use crate::common::enums::{OrderFilling, OrderTime, OrderType, TradeAction, TRADE_RETCODE_DONE};

/// Standard bridge response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Mt5Response<T> {
    // Tried first: a success body has no `error` key.
    Error { error: String },
    Success { result: T },
}

impl<T> Mt5Response<T> {
    pub fn into_result(self) -> Result<T, String> {
        match self {
            Mt5Response::Success { result } => Ok(result),
            Mt5Response::Error { error } => Err(error),
        }
    }
}


/// Reads the typed view of a raw bridge record.
fn record_view<'de, D, V>(raw: &Map<String, Value>) -> Result<V, D::Error>
where
    D: Deserializer<'de>,
    V: DeserializeOwned,
{
    serde_json::from_value(Value::Object(raw.clone())).map_err(de::Error::custom)
}

/// Symbol record (`symbol_info` / `symbols_get`).
#[derive(Debug, Clone, PartialEq)]
pub struct Mt5SymbolInfo {
    name: String,
    visible: bool,
    point: f64,
    raw: Map<String, Value>,
}

#[derive(Deserialize)]
struct SymbolView {
    name: String,
    #[serde(default)]
    visible: bool,
    #[serde(default)]
    point: f64,
}

impl Mt5SymbolInfo {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Shown in Market Watch; hidden symbols must be selected before trading.
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Smallest price increment.
    pub fn point(&self) -> f64 {
        self.point
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }
}

impl<'de> Deserialize<'de> for Mt5SymbolInfo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::deserialize(deserializer)?;
        let view: SymbolView = record_view::<D, _>(&raw)?;
        Ok(Self {
            name: view.name,
            visible: view.visible,
            point: view.point,
            raw,
        })
    }
}

impl Serialize for Mt5SymbolInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// Last tick of a symbol (`symbol_info_tick`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mt5Tick {
    #[serde(default)]
    pub time: i64,
    pub bid: f64,
    pub ask: f64,
    #[serde(default)]
    pub last: f64,
    #[serde(default)]
    pub volume: u64,
    #[serde(default)]
    pub time_msc: i64,
    #[serde(default)]
    pub flags: u32,
    #[serde(default)]
    pub volume_real: f64,
}

/// One OHLCV bar (`copy_rates_range`).
///
/// Accepted from the bridge either as a record or as a positional array;
/// always written as the positional array
/// `[time, open, high, low, close, tick_volume, spread, real_volume]`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Mt5Rate {
    /// Bar open time, Unix seconds.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub tick_volume: u64,
    #[serde(default)]
    pub spread: i32,
    #[serde(default)]
    pub real_volume: u64,
}

impl Serialize for Mt5Rate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tup = serializer.serialize_tuple(8)?;
        tup.serialize_element(&self.time)?;
        tup.serialize_element(&self.open)?;
        tup.serialize_element(&self.high)?;
        tup.serialize_element(&self.low)?;
        tup.serialize_element(&self.close)?;
        tup.serialize_element(&self.tick_volume)?;
        tup.serialize_element(&self.spread)?;
        tup.serialize_element(&self.real_volume)?;
        tup.end()
    }
}

/// Trade request (`order_send`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mt5OrderRequest {
    pub action: TradeAction,
    pub symbol: String,
    pub volume: f64,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub price: f64,
    pub sl: f64,
    pub tp: f64,
    pub deviation: u32,
    pub magic: u64,
    pub comment: String,
    pub type_time: OrderTime,
    pub type_filling: OrderFilling,
}

/// Execution receipt returned by `order_send`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mt5OrderResult {
    retcode: u32,
    comment: Option<String>,
    deal: Option<u64>,
    order: Option<u64>,
    raw: Map<String, Value>,
}

#[derive(Deserialize)]
struct OrderResultView {
    retcode: u32,
    comment: Option<String>,
    deal: Option<u64>,
    order: Option<u64>,
}

impl Mt5OrderResult {
    pub fn retcode(&self) -> u32 {
        self.retcode
    }

    pub fn comment(&self) -> &str {
        self.comment.as_deref().unwrap_or_default()
    }

    pub fn deal(&self) -> Option<u64> {
        self.deal
    }

    pub fn order(&self) -> Option<u64> {
        self.order
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.raw.get(key)
    }

    pub fn is_done(&self) -> bool {
        self.retcode == TRADE_RETCODE_DONE
    }
}

impl<'de> Deserialize<'de> for Mt5OrderResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Map::deserialize(deserializer)?;
        let view: OrderResultView = record_view::<D, _>(&raw)?;
        Ok(Self {
            retcode: view.retcode,
            comment: view.comment,
            deal: view.deal,
            order: view.order,
            raw,
        })
    }
}

impl Serialize for Mt5OrderResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_response_success_and_error() {
        let ok: Mt5Response<bool> = serde_json::from_value(json!({"result": true})).unwrap();
        assert_eq!(ok.into_result(), Ok(true));

        let err: Mt5Response<bool> =
            serde_json::from_value(json!({"error": "terminal not found"})).unwrap();
        assert_eq!(err.into_result(), Err("terminal not found".to_string()));
    }

    #[test]
    fn test_response_null_result_is_none() {
        let resp: Mt5Response<Option<Mt5SymbolInfo>> =
            serde_json::from_value(json!({"result": null})).unwrap();
        assert_eq!(resp.into_result(), Ok(None));
    }

    #[test]
    fn test_symbol_info_typed_view() {
        let info: Mt5SymbolInfo = serde_json::from_value(json!({
            "name": "EURUSD",
            "visible": true,
            "point": 0.00001,
            "spread": 12,
        }))
        .unwrap();

        assert_eq!(info.name(), "EURUSD");
        assert!(info.visible());
        assert_eq!(info.point(), 0.00001);
        assert_eq!(info.get("spread"), Some(&json!(12)));
        assert_eq!(info.get("digits"), None);
    }

    #[test]
    fn test_symbol_info_written_back_as_received() {
        let reply = r#"{"custom":false,"chart_mode":0,"select":true,"visible":true,"session_deals":0,"name":"EURUSD","point":0.00001}"#;

        let info: Mt5SymbolInfo = serde_json::from_str(reply).unwrap();

        assert_eq!(serde_json::to_string(&info).unwrap(), reply);
    }

    #[test]
    fn test_symbol_info_requires_name() {
        let result: Result<Mt5SymbolInfo, _> = serde_json::from_value(json!({"visible": true}));
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_accepts_record_and_writes_array() {
        let rate: Mt5Rate = serde_json::from_value(json!({
            "time": 1580130000,
            "open": 4.2,
            "high": 4.3,
            "low": 4.1,
            "close": 4.25,
            "tick_volume": 17,
            "spread": 3,
            "real_volume": 0,
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(&rate).unwrap(),
            json!([1580130000, 4.2, 4.3, 4.1, 4.25, 17, 3, 0])
        );
    }

    #[test]
    fn test_rate_accepts_positional_array() {
        let rate: Mt5Rate =
            serde_json::from_value(json!([1580130060, 1.0, 2.0, 0.5, 1.5, 9, 1, 100])).unwrap();
        assert_eq!(rate.time, 1580130060);
        assert_eq!(rate.close, 1.5);
        assert_eq!(rate.real_volume, 100);
    }

    #[test]
    fn test_order_request_uses_terminal_field_names() {
        let request = Mt5OrderRequest {
            action: TradeAction::Deal,
            symbol: "EURUSD".to_string(),
            volume: 0.1,
            order_type: OrderType::Buy,
            price: 1.2,
            sl: 1.19,
            tp: 1.21,
            deviation: 20,
            magic: 234000,
            comment: "c".to_string(),
            type_time: OrderTime::Gtc,
            type_filling: OrderFilling::Return,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["action"], json!(1));
        assert_eq!(value["type"], json!(0));
        assert_eq!(value["type_filling"], json!(2));
        assert!(value.get("order_type").is_none());
    }

    #[test]
    fn test_order_result_done() {
        let result: Mt5OrderResult = serde_json::from_value(json!({
            "retcode": 10009,
            "deal": 1,
            "order": 2,
            "comment": "Request executed",
        }))
        .unwrap();
        assert!(result.is_done());
        assert_eq!(result.deal(), Some(1));
        assert_eq!(result.comment(), "Request executed");

        let rejected: Mt5OrderResult =
            serde_json::from_value(json!({"retcode": 10006})).unwrap();
        assert!(!rejected.is_done());
        assert_eq!(rejected.deal(), None);
        assert_eq!(rejected.comment(), "");
    }

    #[test]
    fn test_order_result_written_back_as_received() {
        let reply = r#"{"retcode":10009,"request_id":5,"order":78,"deal":77,"volume":0.1,"comment":"Request executed","retcode_external":0}"#;

        let result: Mt5OrderResult = serde_json::from_str(reply).unwrap();

        assert_eq!(serde_json::to_string(&result).unwrap(), reply);
    }
}
