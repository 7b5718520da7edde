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

//! Enumerations for the MetaTrader 5 terminal API.
//!
//! Every enum that crosses the bridge is serialized as the integer code the
//! terminal uses for it, not as its Rust name.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::common::parse::ParseError;

/// State of a terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

/// Bar interval as defined by the terminal (`TIMEFRAME_*` constants).
///
/// Intraday hours carry the `0x4000` flag, weeks `0x8000` and months `0xC000`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timeframe {
    M1,
    M2,
    M3,
    M4,
    M5,
    M6,
    M10,
    M12,
    M15,
    M20,
    M30,
    H1,
    H2,
    H3,
    H4,
    H6,
    H8,
    H12,
    D1,
    W1,
    MN1,
}

impl Timeframe {
    pub const ALL: [Timeframe; 21] = [
        Timeframe::M1,
        Timeframe::M2,
        Timeframe::M3,
        Timeframe::M4,
        Timeframe::M5,
        Timeframe::M6,
        Timeframe::M10,
        Timeframe::M12,
        Timeframe::M15,
        Timeframe::M20,
        Timeframe::M30,
        Timeframe::H1,
        Timeframe::H2,
        Timeframe::H3,
        Timeframe::H4,
        Timeframe::H6,
        Timeframe::H8,
        Timeframe::H12,
        Timeframe::D1,
        Timeframe::W1,
        Timeframe::MN1,
    ];

    /// The terminal's integer code for this timeframe.
    pub const fn code(self) -> u32 {
        match self {
            Timeframe::M1 => 1,
            Timeframe::M2 => 2,
            Timeframe::M3 => 3,
            Timeframe::M4 => 4,
            Timeframe::M5 => 5,
            Timeframe::M6 => 6,
            Timeframe::M10 => 10,
            Timeframe::M12 => 12,
            Timeframe::M15 => 15,
            Timeframe::M20 => 20,
            Timeframe::M30 => 30,
            Timeframe::H1 => 1 | 0x4000,
            Timeframe::H2 => 2 | 0x4000,
            Timeframe::H3 => 3 | 0x4000,
            Timeframe::H4 => 4 | 0x4000,
            Timeframe::H6 => 6 | 0x4000,
            Timeframe::H8 => 8 | 0x4000,
            Timeframe::H12 => 12 | 0x4000,
            Timeframe::D1 => 24 | 0x4000,
            Timeframe::W1 => 1 | 0x8000,
            Timeframe::MN1 => 1 | 0xC000,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|tf| tf.code() == code)
    }

    /// Short human label (`1m`, `4h`, `1M`).
    pub const fn label(self) -> &'static str {
        match self {
            Timeframe::M1 => "1m",
            Timeframe::M2 => "2m",
            Timeframe::M3 => "3m",
            Timeframe::M4 => "4m",
            Timeframe::M5 => "5m",
            Timeframe::M6 => "6m",
            Timeframe::M10 => "10m",
            Timeframe::M12 => "12m",
            Timeframe::M15 => "15m",
            Timeframe::M20 => "20m",
            Timeframe::M30 => "30m",
            Timeframe::H1 => "1h",
            Timeframe::H2 => "2h",
            Timeframe::H3 => "3h",
            Timeframe::H4 => "4h",
            Timeframe::H6 => "6h",
            Timeframe::H8 => "8h",
            Timeframe::H12 => "12h",
            Timeframe::D1 => "1d",
            Timeframe::W1 => "1w",
            Timeframe::MN1 => "1M",
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Timeframe {
    type Err = ParseError;

    /// Parses a numeric terminal code, e.g. `"16385"` for one hour.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code: u32 = s
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidValue(format!("timeframe code '{s}' is not an integer")))?;
        Self::from_code(code)
            .ok_or_else(|| ParseError::InvalidValue(format!("unknown timeframe code {code}")))
    }
}

impl Serialize for Timeframe {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.code())
    }
}

impl<'de> Deserialize<'de> for Timeframe {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u32::deserialize(deserializer)?;
        Timeframe::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown timeframe code {code}")))
    }
}

/// Declares a terminal enum that travels as its integer code.
macro_rules! terminal_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $code:expr),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const fn code(self) -> u32 {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn from_code(code: u32) -> Option<Self> {
                match code {
                    $(c if c == $code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u32(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = u32::deserialize(deserializer)?;
                $name::from_code(code).ok_or_else(|| {
                    serde::de::Error::custom(format!(
                        "unknown {} code {}",
                        stringify!($name),
                        code
                    ))
                })
            }
        }
    };
}

terminal_code_enum! {
    /// `TRADE_ACTION_*`
    TradeAction {
        Deal = 1,
        Pending = 5,
        Sltp = 6,
        Modify = 7,
        Remove = 8,
        CloseBy = 10,
    }
}

terminal_code_enum! {
    /// `ORDER_TYPE_*`
    OrderType {
        Buy = 0,
        Sell = 1,
        BuyLimit = 2,
        SellLimit = 3,
        BuyStop = 4,
        SellStop = 5,
        BuyStopLimit = 6,
        SellStopLimit = 7,
        CloseBy = 8,
    }
}

terminal_code_enum! {
    /// `ORDER_TIME_*`
    OrderTime {
        Gtc = 0,
        Day = 1,
        Specified = 2,
        SpecifiedDay = 3,
    }
}

terminal_code_enum! {
    /// `ORDER_FILLING_*`
    OrderFilling {
        Fok = 0,
        Ioc = 1,
        Return = 2,
        Boc = 3,
    }
}

/// `TRADE_RETCODE_DONE`: the only return code an order submission accepts.
pub const TRADE_RETCODE_DONE: u32 = 10009;
