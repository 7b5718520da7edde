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

#![doc = include_str!("../README.md")]

pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod terminal;

pub use config::Mt5Config;
pub use error::{Mt5Error, Mt5Result};
pub use http::client::Mt5HttpClient;
pub use session::{with_session, Mt5Session};
pub use terminal::Mt5Terminal;
