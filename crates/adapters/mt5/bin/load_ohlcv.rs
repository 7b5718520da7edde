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

//! Prints the bars of a symbol over a time range as one JSON array.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use futures::FutureExt;
use mt5_market_scripts::{
    cli::{self, LoadOhlcvArgs},
    commands::load_ohlcv,
    common::logging::init_logging,
    http::models::Mt5Rate,
    session::with_session,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = LoadOhlcvArgs::parse();
    init_logging();
    cli::finish(run(&args).await)
}

async fn run(args: &LoadOhlcvArgs) -> anyhow::Result<Vec<Mt5Rate>> {
    let request = args.to_request()?;
    let symbol = request.symbol.clone();
    let (client, params) = cli::connect()?;

    let rates = with_session(&client, &params, move |session| {
        async move { load_ohlcv(session, &request).await }.boxed()
    })
    .await
    .with_context(|| format!("load-ohlcv failed for {symbol}"))?;
    Ok(rates)
}
