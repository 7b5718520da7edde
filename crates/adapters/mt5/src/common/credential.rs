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

//! Credential configuration for MetaTrader 5 connections.
//!
//! Note: the bridge reuses the terminal's own login session. Credentials are
//! only forwarded to `initialize` when the terminal must log into a specific
//! trade account.

use std::fmt;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// MT5 trade account credentials.
#[derive(Clone, Serialize, Deserialize, Builder, PartialEq, Eq)]
#[builder(setter(into))]
pub struct Mt5Credential {
    pub login: String,
    pub password: String,
    pub server: String,
}

impl Mt5Credential {
    pub fn builder() -> Mt5CredentialBuilder {
        Mt5CredentialBuilder::default()
    }

    /// Account number as the terminal expects it, when `login` is numeric.
    pub fn login_number(&self) -> Option<u64> {
        self.login.trim().parse().ok()
    }
}

impl fmt::Debug for Mt5Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mt5Credential")
            .field("login", &self.login)
            .field("password", &"***")
            .field("server", &self.server)
            .finish()
    }
}
