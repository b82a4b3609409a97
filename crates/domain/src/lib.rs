// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Domain types and rules for the placement portal.
//!
//! Everything in this crate is pure: no I/O, no clock reads. Functions that
//! depend on the current date take `today` as an explicit argument.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod drive;
mod error;
mod profile;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use drive::{DriveFields, ValidatedDrive, is_visible_to_students, parse_deadline};
pub use error::DomainError;
pub use profile::{CompanyProfileFields, StudentProfileFields};
pub use types::{ApplicationStatus, Role};
pub use validation::{
    MAX_COVER_LETTER_LEN, MAX_DRIVE_TEXT_LEN, MAX_TITLE_LEN, normalize_search_term,
    parse_registrable_role, require_max_len, require_non_blank, require_registration_fields,
    validate_cover_letter,
};
