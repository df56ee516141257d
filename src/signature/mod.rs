/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!Borromean ring signatures carrying a hidden payload

mod borromean;
mod signature_utils;

pub use borromean::BorromeanSignature;
