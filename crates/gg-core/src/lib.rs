// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Request orchestration and degradation logic for the GitGrade client
//!
//! [`EnvironmentResolver`] turns the origin the client runs from into a
//! [`Strategy`]; [`AnalysisOrchestrator`] executes that strategy against an
//! [`gg_client_api::AnalysisApi`] and publishes a [`ViewModel`] the front end
//! renders as-is.

pub mod orchestrator;
pub mod resolver;
pub mod view_model;

pub use orchestrator::AnalysisOrchestrator;
pub use resolver::{EnvironmentClass, EnvironmentResolver, ExecutionContext, Strategy};
pub use view_model::{Outcome, ViewModel, FAILURE_MESSAGE};
