//! Pipeline execution: strict step order, per-step log, dry-run preview.

use std::sync::Arc;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use keyrake_core::errors::{AnalysisError, PipelineError};
use keyrake_core::events::{
    EventDispatcher, KeyrakeEventHandler, PipelineCompletedEvent, StepCompletedEvent,
    StepStartedEvent,
};
use keyrake_core::traits::{Cancellable, CancellationToken, Stemmer};
use keyrake_core::types::{Phrase, Stopword};

use crate::duplicates::{remove_exact_duplicates, remove_morphological_duplicates};
use crate::minusation::CrossMinusationMatcher;
use crate::noise::remove_noise;
use crate::stopwords::remove_phrases_with_stopwords;
use crate::text::normalize_text;

use super::spec::StepSpec;

static INTENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(как|что|где|почему|зачем|какой|какие|какая)\b").expect("static regex")
});
static COMMERCIAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(купить|цена|стоимость|заказать|доставка|оплата)\b").expect("static regex")
});

/// What a pipeline runs over. Owned by the caller; `run` consumes it and
/// hands back the transformed version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineContext {
    pub phrases: Vec<Phrase>,
    pub stopwords: Vec<Stopword>,
}

impl PipelineContext {
    pub fn new(phrases: Vec<Phrase>, stopwords: Vec<Stopword>) -> Self {
        Self { phrases, stopwords }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineRun {
    pub initial_count: usize,
    pub final_count: usize,
    /// One line per step plus a terminal summary line.
    pub log: Vec<String>,
    pub context: PipelineContext,
}

impl PipelineRun {
    pub fn total_removed(&self) -> usize {
        self.initial_count - self.final_count
    }
}

/// Result of a dry run: the same counts a real run would produce, with the
/// mutated context discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelinePreview {
    pub log: Vec<String>,
    pub removed: usize,
    pub remaining: usize,
}

/// Executes step sequences. Steps run strictly in the order given — the
/// runner never reorders them, because steps do not commute (normalize
/// then dedup is not dedup then normalize).
pub struct PipelineRunner<'a> {
    stemmer: &'a dyn Stemmer,
    cancel: CancellationToken,
    dispatcher: Arc<EventDispatcher>,
}

impl<'a> PipelineRunner<'a> {
    pub fn new(stemmer: &'a dyn Stemmer) -> Self {
        Self {
            stemmer,
            cancel: CancellationToken::new(),
            dispatcher: Arc::new(EventDispatcher::new()),
        }
    }

    /// Share a cancellation token; checked between steps (and between
    /// phrase pairs inside the cross-minusation step).
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn with_handler(mut self, handler: Arc<dyn KeyrakeEventHandler>) -> Self {
        let dispatcher = Arc::make_mut(&mut self.dispatcher);
        dispatcher.register(handler);
        self
    }

    /// Run `steps` over `context`. Each step receives the previous step's
    /// output; after each step the log gains a removal line. A failing
    /// step aborts the run with the partial log attached.
    pub fn run(
        &self,
        steps: &[StepSpec],
        context: PipelineContext,
    ) -> Result<PipelineRun, PipelineError> {
        let initial_count = context.phrases.len();
        let mut log: Vec<String> = Vec::with_capacity(steps.len() + 1);
        let mut current = context;

        for (index, step) in steps.iter().enumerate() {
            let description = step.description();
            if self.cancel.is_cancelled() {
                return Err(PipelineError::Cancelled { log });
            }

            self.dispatcher.emit_step_started(&StepStartedEvent {
                index,
                description: description.clone(),
            });
            let before = current.phrases.len();

            current = match self.apply_step(step, current) {
                Ok(ctx) => ctx,
                Err(AnalysisError::Cancelled) => {
                    log.push(format!("step {}: cancelled", index + 1));
                    return Err(PipelineError::Cancelled { log });
                }
                Err(source) => {
                    log.push(format!("step {}: failed ({source})", index + 1));
                    return Err(PipelineError::StepFailed {
                        index,
                        description,
                        log,
                        source,
                    });
                }
            };

            let after = current.phrases.len();
            let removed = before.saturating_sub(after);
            if removed > 0 {
                log.push(format!(
                    "step {}: removed {} phrases ({} remaining)",
                    index + 1,
                    removed,
                    after
                ));
            } else {
                log.push(format!(
                    "step {}: processed, no removals ({} remaining)",
                    index + 1,
                    after
                ));
            }
            debug!(step = index + 1, %description, before, after, "pipeline step complete");
            self.dispatcher.emit_step_completed(&StepCompletedEvent {
                index,
                description,
                before,
                after,
            });
        }

        let final_count = current.phrases.len();
        let total_removed = initial_count - final_count;
        let percentage = if initial_count > 0 {
            total_removed as f64 / initial_count as f64 * 100.0
        } else {
            0.0
        };
        log.push(format!(
            "done: removed {total_removed}/{initial_count} ({percentage:.1}%)"
        ));
        info!(
            steps = steps.len(),
            initial_count, final_count, "pipeline complete"
        );
        self.dispatcher
            .emit_pipeline_completed(&PipelineCompletedEvent {
                initial_count,
                final_count,
                removed: total_removed,
            });

        Ok(PipelineRun {
            initial_count,
            final_count,
            log,
            context: current,
        })
    }

    /// Dry run: identical computation over a clone of the context, so the
    /// counts match a subsequent real run on the same input exactly; the
    /// transformed context is discarded.
    pub fn preview(
        &self,
        steps: &[StepSpec],
        context: &PipelineContext,
    ) -> Result<PipelinePreview, PipelineError> {
        let run = self.run(steps, context.clone())?;
        Ok(PipelinePreview {
            removed: run.total_removed(),
            remaining: run.final_count,
            log: run.log,
        })
    }

    fn apply_step(
        &self,
        step: &StepSpec,
        mut ctx: PipelineContext,
    ) -> Result<PipelineContext, AnalysisError> {
        match step {
            StepSpec::Normalize => {
                for phrase in &mut ctx.phrases {
                    phrase.text = normalize_text(&phrase.text);
                }
            }
            StepSpec::DedupExact => {
                ctx.phrases = remove_exact_duplicates(&ctx.phrases);
            }
            StepSpec::DedupMorphological => {
                ctx.phrases = remove_morphological_duplicates(&ctx.phrases, self.stemmer);
            }
            StepSpec::RemoveNoise => {
                ctx.phrases = remove_noise(&ctx.phrases).kept;
            }
            StepSpec::RemoveStopwords => {
                ctx.phrases =
                    remove_phrases_with_stopwords(&ctx.phrases, &ctx.stopwords, self.stemmer);
            }
            StepSpec::CrossMinusation { config } => {
                let matcher = CrossMinusationMatcher::new(config.clone())?
                    .with_cancellation(self.cancel.clone())
                    .with_dispatcher(self.dispatcher.clone());
                ctx.phrases = matcher.apply(&ctx.phrases, self.stemmer)?;
            }
            StepSpec::FrequencyFloor { min_ws } => {
                ctx.phrases.retain(|p| p.ws >= *min_ws);
            }
            StepSpec::TagQueryIntent => {
                for phrase in &mut ctx.phrases {
                    let tag = if INTENT_RE.is_match(&phrase.text) {
                        "info"
                    } else {
                        "commercial"
                    };
                    phrase.tags.push(tag.to_string());
                }
            }
            StepSpec::DropCommercial => {
                ctx.phrases.retain(|p| !COMMERCIAL_RE.is_match(&p.text));
            }
        }
        Ok(ctx)
    }
}
