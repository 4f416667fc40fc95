//! Questionnaire state and the ROI arithmetic.
//!
//! [`Questionnaire`] is a plain state machine; the Yew side drives it through
//! [`CalculatorAction`] via `use_reducer`. Derived numbers are never stored:
//! [`compute_derived`] is called after every mutation.

use crate::config::{
    DEFAULT_HOURLY_RATE, DEFAULT_HOURS_PER_QUESTION, MAX_HOURS_PER_WEEK, QUESTION_COUNT,
    SUBSCRIPTION_COST, WEEKS_PER_MONTH,
};
use log::{debug, info};
use serde::Serialize;
use std::rc::Rc;
use yew::Reducible;

pub type Hours = [u32; QUESTION_COUNT];

/// Values captured when the user confirmed the last step.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub hours: Hours,
    pub hourly_rate: f64,
}

/// Numbers shown in the summary panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Derived {
    pub total_hours: u64,
    pub monthly_hours: u64,
    pub time_value: f64,
    pub subscription_cost: f64,
    pub monthly_value: f64,
}

/// `max(0, sum(hours) * rate * 4 - 250)` plus the intermediate figures.
///
/// Sums are taken in `u64` and saturate, so any slice is accepted. A
/// non-finite product collapses to zero so the display never sees NaN.
pub fn compute_derived(hours: &[u32], hourly_rate: f64) -> Derived {
    let total_hours = hours
        .iter()
        .fold(0u64, |acc, &h| acc.saturating_add(u64::from(h)));
    let monthly_hours = total_hours.saturating_mul(u64::from(WEEKS_PER_MONTH));
    let time_value = monthly_hours as f64 * hourly_rate;
    let net = time_value - SUBSCRIPTION_COST;
    let monthly_value = if net.is_finite() { net.max(0.0) } else { 0.0 };

    Derived {
        total_hours,
        monthly_hours,
        time_value,
        subscription_cost: SUBSCRIPTION_COST,
        monthly_value,
    }
}

/// Bring externally supplied hours into the questionnaire's shape: each value
/// is clamped to the slider range and missing questions count as zero.
/// More than [`QUESTION_COUNT`] entries is an error.
pub fn sanitize_hours(hours: &[u32]) -> Result<Hours, String> {
    if hours.len() > QUESTION_COUNT {
        return Err(format!(
            "expected at most {} hour values, got {}",
            QUESTION_COUNT,
            hours.len()
        ));
    }
    let mut out = [0; QUESTION_COUNT];
    for (slot, &h) in out.iter_mut().zip(hours) {
        *slot = h.min(MAX_HOURS_PER_WEEK);
    }
    Ok(out)
}

/// Where the flow currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    InProgress(usize),
    Completed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Questionnaire {
    current_step: usize,
    hours: Hours,
    hourly_rate: f64,
    completion: Option<Snapshot>,
}

impl Default for Questionnaire {
    fn default() -> Self {
        Self {
            current_step: 0,
            hours: [DEFAULT_HOURS_PER_QUESTION; QUESTION_COUNT],
            hourly_rate: DEFAULT_HOURLY_RATE,
            completion: None,
        }
    }
}

impl Questionnaire {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn hours(&self) -> &Hours {
        &self.hours
    }

    pub fn hours_for_current_step(&self) -> u32 {
        self.hours[self.current_step]
    }

    pub fn hourly_rate(&self) -> f64 {
        self.hourly_rate
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_some()
    }

    pub fn is_last_step(&self) -> bool {
        self.current_step == QUESTION_COUNT - 1
    }

    pub fn stage(&self) -> FlowStage {
        if self.is_completed() {
            FlowStage::Completed
        } else {
            FlowStage::InProgress(self.current_step)
        }
    }

    pub fn derived(&self) -> Derived {
        compute_derived(&self.hours, self.hourly_rate)
    }

    pub fn advance(&mut self) {
        if !self.is_last_step() {
            self.current_step += 1;
            debug!("advanced to step {}", self.current_step);
        } else if self.completion.is_none() {
            self.completion = Some(Snapshot {
                hours: self.hours,
                hourly_rate: self.hourly_rate,
            });
            info!(
                "questionnaire completed: {:?} hours/week at {} per hour",
                self.hours, self.hourly_rate
            );
        }
        self.reconcile();
    }

    pub fn retreat(&mut self) {
        if self.current_step > 0 {
            self.current_step -= 1;
            debug!("went back to step {}", self.current_step);
        }
        self.completion = None;
        self.reconcile();
    }

    /// Values above the slider range are clamped.
    pub fn set_hours_for_current_step(&mut self, hours: u32) {
        self.hours[self.current_step] = hours.min(MAX_HOURS_PER_WEEK);
        self.completion = None;
        self.reconcile();
    }

    /// Negative or non-finite rates are stored as zero.
    pub fn set_hourly_rate(&mut self, rate: f64) {
        self.hourly_rate = if rate.is_finite() { rate.max(0.0) } else { 0.0 };
        self.completion = None;
        self.reconcile();
    }

    /// Revoke completion if the values no longer match the confirmed snapshot.
    pub fn reconcile(&mut self) {
        let stale = self
            .completion
            .as_ref()
            .is_some_and(|s| s.hours != self.hours || s.hourly_rate != self.hourly_rate);
        if stale {
            debug!("values changed since completion, reopening questionnaire");
            self.completion = None;
        }
    }
}

/// Messages dispatched from the UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorAction {
    Advance,
    Retreat,
    SetHours(u32),
    SetHourlyRate(f64),
}

impl Reducible for Questionnaire {
    type Action = CalculatorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            CalculatorAction::Advance => next.advance(),
            CalculatorAction::Retreat => next.retreat(),
            CalculatorAction::SetHours(hours) => next.set_hours_for_current_step(hours),
            CalculatorAction::SetHourlyRate(rate) => next.set_hourly_rate(rate),
        }
        Rc::new(next)
    }
}
