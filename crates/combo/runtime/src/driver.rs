//! Per-step driver for a set of actors sharing one combo graph.

use combo_core::{AdvanceOutcome, ComboError, ComboGraph, InputToken, OutcomeKind, ResetReason};
use strum::EnumCount;

use crate::actor::{ComboActor, InputDisposition};
use crate::config::RuntimeConfig;
use crate::dispatch::ActionDispatcher;
use crate::error::{Result, RuntimeError};

/// Outcome counts for one call to [`ComboDriver::step_all`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepSummary {
    counts: [u32; OutcomeKind::COUNT],
}

impl StepSummary {
    pub fn record(&mut self, kind: OutcomeKind) {
        self.counts[kind as usize] += 1;
    }

    pub fn count(&self, kind: OutcomeKind) -> u32 {
        self.counts[kind as usize]
    }

    /// Number of actors that consumed an input this step.
    pub fn consumed(&self) -> u32 {
        self.count(OutcomeKind::Committed)
            + self.count(OutcomeKind::NoMatch)
            + self.count(OutcomeKind::CorruptTarget)
    }
}

/// Drives actors through a shared, borrowed combo graph.
///
/// Call [`Self::step`] (or [`Self::step_all`]) once per simulation step. Each
/// call resolves at most one input per actor, forwards committed actions to the
/// dispatcher, and logs the outcome.
#[derive(Clone, Debug)]
pub struct ComboDriver<'g> {
    graph: ComboGraph<'g>,
    config: RuntimeConfig,
}

impl<'g> ComboDriver<'g> {
    /// Validates `graph` and builds a driver.
    ///
    /// Structural issues are logged; with `strict_graph` set, the first one is
    /// returned as an error instead.
    pub fn new(graph: ComboGraph<'g>, config: RuntimeConfig) -> Result<Self> {
        let report = graph.validate();

        if !report.is_clean() {
            for issue in report.issues() {
                tracing::warn!(code = issue.error_code(), "combo graph issue: {}", issue);
            }
            if report.is_truncated() {
                tracing::warn!(
                    "{} further combo graph issue(s) not listed",
                    report.total() - report.issues().len()
                );
            }
            if config.strict_graph {
                if let Some(first) = report.issues().first() {
                    return Err(RuntimeError::GraphRejected {
                        total: report.total(),
                        first: *first,
                    });
                }
            }
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            overflow = %config.overflow,
            "combo driver ready"
        );

        Ok(Self { graph, config })
    }

    pub fn graph(&self) -> &ComboGraph<'g> {
        &self.graph
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    /// Buffers an input for `actor` using the configured overflow policy.
    pub fn push_input<const N: usize>(
        &self,
        actor: &mut ComboActor<N>,
        token: InputToken,
    ) -> Result<InputDisposition> {
        let disposition = actor.push_input(token, self.config.overflow)?;
        match disposition {
            InputDisposition::Queued => {}
            InputDisposition::ReplacedOldest { dropped } => {
                tracing::warn!(
                    actor = %actor.id(),
                    token,
                    dropped,
                    "input buffer full, dropped oldest"
                );
            }
            InputDisposition::Discarded => {
                tracing::warn!(actor = %actor.id(), token, "input buffer full, dropped input");
            }
        }
        Ok(disposition)
    }

    /// Resolves at most one input for `actor`.
    pub fn step<const N: usize, D>(
        &self,
        actor: &mut ComboActor<N>,
        dispatcher: &mut D,
    ) -> AdvanceOutcome
    where
        D: ActionDispatcher + ?Sized,
    {
        let outcome = actor.advance(&self.graph);
        let id = actor.id();

        if let Some(raw) = outcome.healed_from() {
            tracing::warn!(actor = %id, cursor = raw, "healed out-of-range combo cursor to idle");
        }

        match outcome {
            AdvanceOutcome::Committed {
                token,
                from,
                to,
                action,
                ..
            } => {
                tracing::debug!(
                    actor = %id,
                    token,
                    from,
                    to,
                    %action,
                    "combo transition committed"
                );
                dispatcher.dispatch(id, action, to);
            }
            AdvanceOutcome::SoftReset {
                token,
                from,
                reason,
                action,
                ..
            } => {
                match reason {
                    ResetReason::NoMatch => {
                        tracing::debug!(
                            actor = %id,
                            token,
                            from,
                            "no transition for input, back to idle"
                        );
                    }
                    ResetReason::CorruptTarget { target } => {
                        tracing::warn!(
                            actor = %id,
                            token,
                            from,
                            target,
                            "transition targets missing node, back to idle"
                        );
                    }
                }
                dispatcher.on_soft_reset(id, action);
            }
            AdvanceOutcome::Busy => {
                let steps = actor.busy_steps();
                if self.config.busy_warn_steps != 0 && steps == self.config.busy_warn_steps {
                    tracing::warn!(
                        actor = %id,
                        steps,
                        pending = actor.buffer().len(),
                        "actor still busy; was the action finish signal missed?"
                    );
                } else {
                    tracing::trace!(actor = %id, steps, "actor busy");
                }
            }
            AdvanceOutcome::NoGraph | AdvanceOutcome::BufferEmpty => {
                tracing::trace!(actor = %id, outcome = %outcome.kind(), "nothing to resolve");
            }
        }

        outcome
    }

    /// Steps every actor once, in slice order.
    pub fn step_all<const N: usize, D>(
        &self,
        actors: &mut [ComboActor<N>],
        dispatcher: &mut D,
    ) -> StepSummary
    where
        D: ActionDispatcher + ?Sized,
    {
        let mut summary = StepSummary::default();
        for actor in actors.iter_mut() {
            summary.record(self.step(actor, dispatcher).kind());
        }
        summary
    }
}
