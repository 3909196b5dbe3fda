use chrono::NaiveTime;

use crate::models::catalog::{self, AbilityDefinition};

/// Per-ability counters for one parse run.
///
/// Invariant: `crits <= hits <= casts`. A crit is only counted on a line
/// that also yielded a damage amount.
#[derive(Debug, Default, Clone)]
pub struct AbilityAccumulator {
    pub casts: u32,
    pub damage: u64,
    pub hits: u32,
    pub crits: u32,
}

/// Mutable state for a single parse invocation.
///
/// Created fresh per call and threaded through the scan, aggregation, and
/// checklist stages; nothing survives across calls.
#[derive(Debug)]
pub struct ScanContext {
    pub player: Option<String>,
    pub boss: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// One accumulator per catalog entry, in catalog order.
    pub accumulators: Vec<AbilityAccumulator>,
}

impl ScanContext {
    pub fn new() -> Self {
        ScanContext {
            player: None,
            boss: None,
            start_time: None,
            end_time: None,
            accumulators: vec![AbilityAccumulator::default(); catalog::ABILITIES.len()],
        }
    }

    /// First timestamp seen becomes the start time; every timestamp updates
    /// the end time. Out-of-order logs are not re-sorted.
    pub fn record_timestamp(&mut self, time: NaiveTime) {
        if self.start_time.is_none() {
            self.start_time = Some(time);
        }
        self.end_time = Some(time);
    }

    pub fn duration_seconds(&self) -> f64 {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => crate::utils::time::seconds_between(start, end).max(0.0),
            _ => 0.0,
        }
    }

    pub fn ability(&self, index: usize) -> (&'static AbilityDefinition, &AbilityAccumulator) {
        (&catalog::ABILITIES[index], &self.accumulators[index])
    }

    /// Casts recorded for a named ability, 0 if the name is not in the
    /// catalog.
    pub fn casts_of(&self, name: &str) -> u32 {
        catalog::ABILITIES
            .iter()
            .position(|def| def.name == name)
            .map(|idx| self.accumulators[idx].casts)
            .unwrap_or(0)
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new()
    }
}
