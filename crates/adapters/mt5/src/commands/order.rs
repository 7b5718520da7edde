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

//! Order submitter: one fixed-size market buy with stop-loss and take-profit
//! a fixed number of points either side of the ask.
//!
//! Every step fails closed. Nothing after a failed step runs, and only a
//! `TRADE_RETCODE_DONE` receipt is returned.

use tracing::{info, warn};

use crate::{
    common::{
        consts::{
            ORDER_COMMENT, ORDER_DEVIATION_POINTS, ORDER_MAGIC, ORDER_SLTP_POINTS,
            ORDER_TYPE_FILLING, ORDER_TYPE_TIME, ORDER_VOLUME_LOTS,
        },
        enums::{OrderType, TradeAction},
    },
    error::{Mt5Error, Mt5Result},
    http::models::{Mt5OrderRequest, Mt5OrderResult},
    session::Mt5Session,
    terminal::Mt5Terminal,
};

/// Market buy at `ask` with `sl = ask - 100 * point` and
/// `tp = ask + 100 * point`.
pub fn build_buy_request(symbol: &str, ask: f64, point: f64) -> Mt5OrderRequest {
    let offset = ORDER_SLTP_POINTS * point;
    Mt5OrderRequest {
        action: TradeAction::Deal,
        symbol: symbol.to_string(),
        volume: ORDER_VOLUME_LOTS,
        order_type: OrderType::Buy,
        price: ask,
        sl: ask - offset,
        tp: ask + offset,
        deviation: ORDER_DEVIATION_POINTS,
        magic: ORDER_MAGIC,
        comment: ORDER_COMMENT.to_string(),
        type_time: ORDER_TYPE_TIME,
        type_filling: ORDER_TYPE_FILLING,
    }
}

pub async fn send_buy_order<T>(
    session: &Mt5Session<'_, T>,
    symbol: &str,
) -> Mt5Result<Mt5OrderResult>
where
    T: Mt5Terminal + ?Sized,
{
    let Some(symbol_info) = session.symbol_info(symbol).await? else {
        return Err(Mt5Error::SymbolNotFound(symbol.to_string()));
    };

    if !symbol_info.visible() {
        info!("{symbol} is not in Market Watch, selecting it");
        if !session.symbol_select(symbol).await? {
            return Err(Mt5Error::SymbolSelectFailed(symbol.to_string()));
        }
    }

    let Some(tick) = session.tick(symbol).await? else {
        return Err(Mt5Error::TickUnavailable(symbol.to_string()));
    };

    let request = build_buy_request(symbol, tick.ask, symbol_info.point());
    info!(
        "Sending buy {} {} lots at {} (sl {}, tp {}, deviation {})",
        request.symbol, request.volume, request.price, request.sl, request.tp, request.deviation
    );

    let result = match session.order_send(&request).await? {
        Some(result) => result,
        None => {
            return Err(Mt5Error::NoData {
                call: "order_send",
                detail: session.last_error().await,
            })
        }
    };

    if !result.is_done() {
        warn!("order_send failed, retcode={} ({})", result.retcode(), result.comment());
        return Err(Mt5Error::OrderRejected {
            retcode: result.retcode(),
            comment: result.comment().to_string(),
        });
    }

    info!(
        "Order done: deal {:?} order {:?}",
        result.deal(),
        result.order()
    );
    Ok(result)
}
