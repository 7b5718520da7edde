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

//! Scoped terminal session.
//!
//! [`with_session`] initializes the terminal, runs one operation against the
//! open [`Mt5Session`] and shuts the terminal down afterwards, whether the
//! operation succeeded, failed or panicked.

use std::panic::AssertUnwindSafe;

use futures::{future::BoxFuture, FutureExt};
use tracing::{debug, info, warn};

use crate::{
    common::enums::ConnectionStatus,
    config::Mt5Config,
    error::{Mt5Error, Mt5Result},
    http::{
        models::{Mt5OrderRequest, Mt5OrderResult, Mt5Rate, Mt5SymbolInfo, Mt5Tick},
        query::{CopyRatesRangeParams, InitializeParams},
    },
    terminal::Mt5Terminal,
};

/// Builds the `initialize` arguments from the configuration.
pub fn initialize_params(config: &Mt5Config) -> Mt5Result<InitializeParams> {
    let mut params = InitializeParams {
        path: config.terminal_path.clone(),
        ..InitializeParams::default()
    };

    if let Some(cred) = &config.credential {
        let login = cred.login_number().ok_or_else(|| {
            Mt5Error::InvalidArgument(format!("MT5 login '{}' is not an account number", cred.login))
        })?;
        params.login = Some(login);
        params.password = Some(cred.password.clone());
        params.server = Some(cred.server.clone());
    }

    Ok(params)
}

/// An initialized terminal connection.
pub struct Mt5Session<'a, T: Mt5Terminal + ?Sized> {
    terminal: &'a T,
    status: ConnectionStatus,
}

impl<'a, T: Mt5Terminal + ?Sized> Mt5Session<'a, T> {
    /// Initializes the terminal. On failure a shutdown is still attempted and
    /// no session is returned.
    pub async fn open(terminal: &'a T, params: &InitializeParams) -> Mt5Result<Self> {
        debug!("Initializing terminal");

        let failure = match terminal.initialize(params).await {
            Ok(true) => {
                info!("Terminal initialized");
                return Ok(Self {
                    terminal,
                    status: ConnectionStatus::Connected,
                });
            }
            Ok(false) => match terminal.last_error().await {
                Ok((code, description)) => format!("({code}, '{description}')"),
                Err(e) => format!("terminal refused the connection ({e})"),
            },
            Err(e) => e.to_string(),
        };

        if let Err(e) = terminal.shutdown().await {
            warn!("shutdown() after failed initialize() failed: {e}");
        }
        Err(Mt5Error::InitializeFailed(failure))
    }

    pub fn status(&self) -> ConnectionStatus {
        self.status
    }

    /// Shuts the terminal down. Failures are logged, never returned.
    pub async fn close(mut self) {
        match self.terminal.shutdown().await {
            Ok(()) => debug!("Terminal shut down"),
            Err(e) => warn!("shutdown() failed: {e}"),
        }
        self.status = ConnectionStatus::Disconnected;
    }

    /// Terminal error description, for diagnostics. `None` if unavailable.
    pub async fn last_error(&self) -> Option<String> {
        match self.terminal.last_error().await {
            Ok((code, description)) => Some(format!("({code}, '{description}')")),
            Err(e) => {
                debug!("last_error() unavailable: {e}");
                None
            }
        }
    }

    pub async fn symbols(&self) -> Mt5Result<Option<Vec<Mt5SymbolInfo>>> {
        Ok(self.terminal.symbols_get().await?)
    }

    pub async fn symbol_info(&self, symbol: &str) -> Mt5Result<Option<Mt5SymbolInfo>> {
        Ok(self.terminal.symbol_info(symbol).await?)
    }

    pub async fn symbol_select(&self, symbol: &str) -> Mt5Result<bool> {
        Ok(self.terminal.symbol_select(symbol, true).await?)
    }

    pub async fn tick(&self, symbol: &str) -> Mt5Result<Option<Mt5Tick>> {
        Ok(self.terminal.symbol_info_tick(symbol).await?)
    }

    pub async fn rates_range(
        &self,
        params: &CopyRatesRangeParams,
    ) -> Mt5Result<Option<Vec<Mt5Rate>>> {
        Ok(self.terminal.copy_rates_range(params).await?)
    }

    pub async fn order_send(&self, request: &Mt5OrderRequest) -> Mt5Result<Option<Mt5OrderResult>> {
        Ok(self.terminal.order_send(request).await?)
    }
}

impl<T: Mt5Terminal + ?Sized> Drop for Mt5Session<'_, T> {
    fn drop(&mut self) {
        if self.status == ConnectionStatus::Connected {
            warn!("Terminal session dropped without shutdown");
        }
    }
}

/// Runs `op` inside an initialized session and always shuts down afterwards.
///
/// A panic inside `op` is resumed once the terminal has been shut down.
pub async fn with_session<'a, T, R, F>(
    terminal: &'a T,
    params: &InitializeParams,
    op: F,
) -> Mt5Result<R>
where
    T: Mt5Terminal + ?Sized,
    F: for<'s> FnOnce(&'s Mt5Session<'a, T>) -> BoxFuture<'s, Mt5Result<R>>,
{
    let session = Mt5Session::open(terminal, params).await?;
    let outcome = AssertUnwindSafe(op(&session)).catch_unwind().await;
    session.close().await;

    match outcome {
        Ok(result) => result,
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
