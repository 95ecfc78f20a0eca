// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Domain types for the GitGrade client
//!
//! These types describe what the user asked for and what the analysis
//! produced. They carry no transport or presentation concerns and are shared
//! by the REST client, the orchestration core and the front end.

pub mod analysis;
pub mod status;

pub use analysis::*;
pub use status::RequestStatus;
