// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Analysis orchestration
//!
//! One invocation resolves a strategy, makes at most one remote call bounded
//! by the strategy's timeout, and settles on exactly one terminal
//! [`ViewModel`]. Failures are absorbed into the fallback result when the
//! strategy allows it.

use std::sync::atomic::{AtomicU64, Ordering};

use gg_client_api::{AnalysisApi, AnalysisApiResult, AnalysisError};
use gg_domain_types::{AnalysisRequest, AnalysisResult, ValidationError};
use gg_rest_api_contract::AnalyzeRequest;
use tokio::sync::watch;
use tracing::Instrument;

use crate::resolver::{EnvironmentResolver, ExecutionContext, Strategy};
use crate::view_model::{Outcome, ViewModel, FAILURE_MESSAGE};

/// Drives analysis requests and owns the published [`ViewModel`]
///
/// Precondition: the front end serializes submissions and keeps submit
/// disabled while the current view is `InFlight`. Overlapping calls are still
/// safe: every request is tagged with a sequence number and only the latest
/// request may publish, so a slow earlier request never overwrites a later one.
pub struct AnalysisOrchestrator<A> {
    api: A,
    resolver: EnvironmentResolver,
    context: ExecutionContext,
    sequence: AtomicU64,
    state: watch::Sender<ViewModel>,
}

impl<A: AnalysisApi> AnalysisOrchestrator<A> {
    pub fn new(api: A, resolver: EnvironmentResolver, context: ExecutionContext) -> Self {
        let (state, _) = watch::channel(ViewModel::idle());
        Self {
            api,
            resolver,
            context,
            sequence: AtomicU64::new(0),
            state,
        }
    }

    /// Receive every view published from now on
    pub fn subscribe(&self) -> watch::Receiver<ViewModel> {
        self.state.subscribe()
    }

    /// Snapshot of the latest published view
    pub fn current(&self) -> ViewModel {
        self.state.borrow().clone()
    }

    /// Strategy the next request will run with
    pub fn strategy(&self) -> Strategy {
        self.resolver.resolve(&self.context)
    }

    /// Validate raw input and analyze it
    ///
    /// Empty input is rejected before any state change or network call.
    pub async fn submit(&self, repository_url: &str) -> Result<ViewModel, ValidationError> {
        let request = AnalysisRequest::new(repository_url)?;
        Ok(self.analyze(request).await)
    }

    /// Run one analysis request to its terminal view
    pub async fn analyze(&self, request: AnalysisRequest) -> ViewModel {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish(ViewModel::in_flight(sequence));

        let strategy = self.resolver.resolve(&self.context);
        let span = tracing::info_span!(
            "analyze",
            sequence,
            environment = %strategy.environment,
            repository = request.repository_url(),
        );

        let view_model = self.execute(sequence, &strategy, &request).instrument(span).await;
        if !self.publish(view_model.clone()) {
            tracing::debug!(sequence, "superseded by a later request; view not published");
        }
        view_model
    }

    async fn execute(
        &self,
        sequence: u64,
        strategy: &Strategy,
        request: &AnalysisRequest,
    ) -> ViewModel {
        if strategy.skip_remote_call {
            tracing::info!("remote call skipped; showing fallback result");
            if !strategy.demo_delay.is_zero() {
                tokio::time::sleep(strategy.demo_delay).await;
            }
            return ViewModel::succeeded(sequence, AnalysisResult::fallback(), Outcome::Demo);
        }

        match self.call_remote(strategy, request).await {
            Ok(result) => {
                tracing::info!(score = result.score, "analysis received");
                ViewModel::succeeded(sequence, result, Outcome::Remote)
            }
            Err(err) if strategy.fallback_on_failure => {
                tracing::warn!(kind = err.kind(), error = %err, "analysis failed; substituting fallback result");
                ViewModel::succeeded(
                    sequence,
                    AnalysisResult::fallback(),
                    Outcome::Fallback {
                        reason: err.kind().to_string(),
                    },
                )
            }
            Err(err) => {
                tracing::error!(kind = err.kind(), error = %err, "analysis failed");
                ViewModel::failed(sequence, FAILURE_MESSAGE)
            }
        }
    }

    /// Single attempt, raced against the strategy deadline
    ///
    /// On expiry the request future is dropped, so a late response is never
    /// observed.
    async fn call_remote(
        &self,
        strategy: &Strategy,
        request: &AnalysisRequest,
    ) -> AnalysisApiResult<AnalysisResult> {
        let body = AnalyzeRequest::from(request);
        tracing::debug!(endpoint = %strategy.endpoint, timeout = ?strategy.timeout, "calling analysis service");

        match tokio::time::timeout(strategy.timeout, self.api.analyze(&strategy.endpoint, &body)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(AnalysisError::Timeout(strategy.timeout)),
        }
    }

    /// Replace the published view if it belongs to the latest request
    fn publish(&self, view_model: ViewModel) -> bool {
        debug_assert!(view_model.is_consistent(), "{view_model:?}");
        self.state.send_if_modified(|current| {
            if view_model.sequence() != self.sequence.load(Ordering::SeqCst) {
                return false;
            }
            *current = view_model;
            true
        })
    }
}
