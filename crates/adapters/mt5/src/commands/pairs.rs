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

//! Pair lister.

use tracing::info;

use crate::{
    error::{Mt5Error, Mt5Result},
    http::models::Mt5SymbolInfo,
    session::Mt5Session,
    terminal::Mt5Terminal,
};

/// Every symbol the terminal knows, unfiltered.
pub async fn load_pairs<T>(session: &Mt5Session<'_, T>) -> Mt5Result<Vec<Mt5SymbolInfo>>
where
    T: Mt5Terminal + ?Sized,
{
    match session.symbols().await? {
        Some(symbols) => {
            info!("Loaded {} symbols", symbols.len());
            Ok(symbols)
        }
        None => Err(Mt5Error::NoData {
            call: "symbols_get",
            detail: session.last_error().await,
        }),
    }
}
