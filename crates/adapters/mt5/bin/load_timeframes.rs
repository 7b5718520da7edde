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

//! Prints the timeframe catalog. Does not contact the terminal.

use std::process::ExitCode;

use clap::Parser;
use mt5_market_scripts::{
    cli::{self, LoadTimeframesArgs},
    commands::timeframe_catalog,
    common::logging::init_logging,
};

fn main() -> ExitCode {
    let _args = LoadTimeframesArgs::parse();
    init_logging();
    cli::finish(Ok(timeframe_catalog()))
}
