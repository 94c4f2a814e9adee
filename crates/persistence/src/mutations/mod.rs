// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Backend-agnostic mutation modules.
//!
//! This module contains all state-changing operations for the
//! persistence layer. Mutations use Diesel DSL with minimal use of
//! backend-specific helpers (e.g., `get_last_insert_rowid()`), imported
//! via the `PersistenceBackend` trait.
//!
//! Timestamps are supplied by the caller as formatted strings rather
//! than via database `CURRENT_TIMESTAMP` defaults, keeping the stored
//! format identical across backends and the mutations testable with
//! pinned times.
//!
//! ## Module Organization
//!
//! - `volunteers` — registration and approval lifecycle
//! - `shifts` — shift creation
//! - `signups` — signup creation (with drop/rejoin), soft-deleting drops

pub mod shifts;
pub mod signups;
pub mod volunteers;
