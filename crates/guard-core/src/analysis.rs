use std::sync::Arc;

use guard_config::Config;
use guard_config::lookup::LookupMode;
use guard_lookup::{IngredientLookup, LookupError};
use guard_types::{Allergy, Dish};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::error::AnalysisError;
use crate::extract::{DishLine, extract_dishes};
use crate::matching::find_allergy_matches;
use crate::pacing::{self, NoPacing, Pacing};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupStrategy {
    /// One lookup at a time with pacing in between
    Sequential,
    /// Bounded parallel lookups, no pacing
    Concurrent { max_in_flight: usize },
}

/// Turns menu text and an allergy list into assessed dishes
pub struct MenuAnalyzer {
    lookup: Arc<dyn IngredientLookup>,
    pacing: Arc<dyn Pacing>,
    strategy: LookupStrategy,
}

impl MenuAnalyzer {
    /// Sequential analyzer without pacing
    pub fn new(lookup: Arc<dyn IngredientLookup>) -> Self {
        Self {
            lookup,
            pacing: Arc::new(NoPacing),
            strategy: LookupStrategy::Sequential,
        }
    }

    pub fn from_config(config: &Config, lookup: Arc<dyn IngredientLookup>) -> Self {
        let strategy = match config.lookup.mode {
            LookupMode::Sequential => LookupStrategy::Sequential,
            LookupMode::Concurrent => LookupStrategy::Concurrent {
                max_in_flight: config.lookup.max_in_flight,
            },
        };

        Self::new(lookup)
            .with_pacing(pacing::from_millis(config.analysis.pacing_ms))
            .with_strategy(strategy)
    }

    pub fn with_pacing(mut self, pacing: Arc<dyn Pacing>) -> Self {
        self.pacing = pacing;
        self
    }

    pub fn with_strategy(mut self, strategy: LookupStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> LookupStrategy {
        self.strategy
    }

    /// Analyze a menu against the given allergies.
    ///
    /// Dishes come back in the order their names appear in the text. A failed
    /// lookup degrades only its own dish. Cancellation drops everything
    /// gathered so far.
    pub async fn analyze(
        &self,
        menu_text: &str,
        allergies: &[Allergy],
        cancel: &CancellationToken,
    ) -> Result<Vec<Dish>, AnalysisError> {
        if menu_text.trim().is_empty() {
            return Err(AnalysisError::EmptyMenu);
        }

        let lines = extract_dishes(menu_text);
        tracing::info!(
            "Analyzing {} dishes against {} allergies using {}",
            lines.len(),
            allergies.len(),
            self.lookup.metadata().name
        );

        let dishes = match self.strategy {
            LookupStrategy::Sequential => self.run_sequential(lines, allergies, cancel).await?,
            LookupStrategy::Concurrent { max_in_flight } => {
                self.run_concurrent(lines, allergies, max_in_flight, cancel)
                    .await?
            }
        };

        let recommended = dishes.iter().filter(|d| d.is_recommended()).count();
        tracing::info!(
            "Analysis finished: {} dishes, {} recommended",
            dishes.len(),
            recommended
        );

        Ok(dishes)
    }

    async fn run_sequential(
        &self,
        lines: Vec<DishLine>,
        allergies: &[Allergy],
        cancel: &CancellationToken,
    ) -> Result<Vec<Dish>, AnalysisError> {
        let total = lines.len();
        let mut dishes = Vec::with_capacity(total);

        for (index, line) in lines.into_iter().enumerate() {
            if cancel.is_cancelled() {
                return Err(AnalysisError::Cancelled);
            }

            let outcome = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(AnalysisError::Cancelled),
                outcome = self.lookup.lookup_ingredients(&line.name) => outcome,
            };

            let succeeded = outcome.is_ok();
            dishes.push(assess(line, Some(outcome), allergies));

            // Pace between lookups only
            if succeeded && index + 1 < total {
                tokio::select! {
                    biased;
                    _ = cancel.cancelled() => return Err(AnalysisError::Cancelled),
                    _ = self.pacing.pause() => {}
                }
            }
        }

        Ok(dishes)
    }

    async fn run_concurrent(
        &self,
        lines: Vec<DishLine>,
        allergies: &[Allergy],
        max_in_flight: usize,
        cancel: &CancellationToken,
    ) -> Result<Vec<Dish>, AnalysisError> {
        let semaphore = Arc::new(Semaphore::new(max_in_flight.max(1)));
        let mut tasks = JoinSet::new();

        for (index, line) in lines.iter().enumerate() {
            let lookup = Arc::clone(&self.lookup);
            let semaphore = Arc::clone(&semaphore);
            let name = line.name.clone();

            tasks.spawn(async move {
                let _permit = semaphore.acquire_owned().await.ok();
                (index, lookup.lookup_ingredients(&name).await)
            });
        }

        let mut outcomes: Vec<Option<Result<Vec<String>, LookupError>>> =
            lines.iter().map(|_| None).collect();

        loop {
            let joined = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    return Err(AnalysisError::Cancelled);
                }
                joined = tasks.join_next() => joined,
            };

            match joined {
                Some(Ok((index, outcome))) => outcomes[index] = Some(outcome),
                // Its slot stays empty and the dish is reported unverified
                Some(Err(e)) => tracing::error!("lookup task failed: {e}"),
                None => break,
            }
        }

        Ok(lines
            .into_iter()
            .zip(outcomes)
            .map(|(line, outcome)| assess(line, outcome, allergies))
            .collect())
    }
}

/// Build the dish for one lookup outcome. `None` means the lookup never reported back.
fn assess(
    line: DishLine,
    outcome: Option<Result<Vec<String>, LookupError>>,
    allergies: &[Allergy],
) -> Dish {
    match outcome {
        Some(Ok(ingredients)) => {
            let matches = find_allergy_matches(&ingredients, allergies);
            tracing::debug!(
                "Dish '{}': {} ingredients, matches {:?}",
                line.name,
                ingredients.len(),
                matches
            );
            Dish::assessed(line.name, line.description, ingredients, matches)
        }
        Some(Err(e)) => {
            tracing::warn!("Error analyzing dish {}: {}", line.name, e);
            Dish::unverified(line.name, line.description)
        }
        None => Dish::unverified(line.name, line.description),
    }
}
