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

//! Timeframe catalog: the label -> terminal code table callers use to pick
//! an interval. Static data, no terminal connection.

use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::common::enums::Timeframe;

/// Published timeframes, in output order.
pub const CATALOG_TIMEFRAMES: [Timeframe; 14] = [
    Timeframe::M1,
    Timeframe::M3,
    Timeframe::M5,
    Timeframe::M15,
    Timeframe::M30,
    Timeframe::H1,
    Timeframe::H2,
    Timeframe::H4,
    Timeframe::H6,
    Timeframe::H8,
    Timeframe::H12,
    Timeframe::D1,
    Timeframe::W1,
    Timeframe::MN1,
];

/// Serializes as a JSON object keyed by label, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeframeCatalog(&'static [Timeframe]);

impl TimeframeCatalog {
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, u32)> + '_ {
        self.0.iter().map(|tf| (tf.label(), tf.code()))
    }
}

impl Serialize for TimeframeCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, code) in self.entries() {
            map.serialize_entry(label, &code)?;
        }
        map.end()
    }
}

pub fn timeframe_catalog() -> TimeframeCatalog {
    TimeframeCatalog(&CATALOG_TIMEFRAMES)
}
