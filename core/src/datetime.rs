// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod anchor;
mod expiry;
mod util;

pub use anchor::DateAnchor;
pub use expiry::ExpiryDate;
pub use util::add_days;
pub(crate) use util::days_between;
