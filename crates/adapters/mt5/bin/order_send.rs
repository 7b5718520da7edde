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

//! Places one market buy and prints the execution receipt as a JSON object.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use futures::FutureExt;
use mt5_market_scripts::{
    cli::{self, OrderSendArgs},
    commands::send_buy_order,
    common::logging::init_logging,
    http::models::Mt5OrderResult,
    session::with_session,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = OrderSendArgs::parse();
    init_logging();
    cli::finish(run(args.symbol().to_string()).await)
}

async fn run(symbol: String) -> anyhow::Result<Mt5OrderResult> {
    let (client, params) = cli::connect()?;

    let receipt = with_session(&client, &params, |session| {
        let symbol = symbol.clone();
        async move { send_buy_order(session, &symbol).await }.boxed()
    })
    .await
    .with_context(|| format!("order-send failed for {symbol}"))?;
    Ok(receipt)
}
