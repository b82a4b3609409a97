// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutation modules.
//!
//! This module contains all state-changing operations for the persistence
//! layer. Each public function is a single statement or runs inside one
//! transaction, so a failed call leaves no partial state behind.
//!
//! ## Module Organization
//!
//! - `accounts`: Account creation, approval, activation and sessions
//! - `profiles`: Student and company profile upserts
//! - `drives`: Drive creation, edits, flags and deletion
//! - `applications`: Application creation and status changes

pub mod accounts;
pub mod applications;
pub mod drives;
pub mod profiles;
