// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! GitGrade analysis endpoint contract
//!
//! Request and response bodies exchanged with the remote scoring service,
//! together with the checks a response must pass before it is trusted.

pub mod error;
pub mod types;
pub mod validation;

pub use error::*;
pub use types::*;
pub use validation::*;
