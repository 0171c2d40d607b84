//! Energy Budget
//!
//! A single scalar energy quantity. Spends that would drive the level
//! negative are rejected outright, never clamped, so the observable level
//! stays non-negative through any sequence of operations.

use crate::error::InvalidArgumentError;

/// Finite, non-negative energy budget.
#[derive(Debug, Clone, PartialEq)]
pub struct EnergyBudget {
    level: f64,
    /// Costs of successful spends, in order
    history: Vec<f64>,
}

impl EnergyBudget {
    /// Creates a budget at the given starting level.
    pub fn new(starting_energy: f64) -> Self {
        Self {
            level: starting_energy,
            history: Vec::new(),
        }
    }

    /// Attempts to spend `cost` energy.
    ///
    /// Returns `Ok(true)` and decrements the level when affordable,
    /// `Ok(false)` leaving the level untouched when not. A negative or
    /// non-finite cost is a caller bug.
    pub fn try_spend(&mut self, cost: f64) -> Result<bool, InvalidArgumentError> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(InvalidArgumentError::new(format!(
                "cost must be a non-negative number, got {}",
                cost
            )));
        }
        if cost > self.level {
            return Ok(false);
        }
        self.level -= cost;
        self.history.push(cost);
        Ok(true)
    }

    /// Increases the level by `amount`. No upper bound.
    pub fn replenish(&mut self, amount: f64) -> Result<(), InvalidArgumentError> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InvalidArgumentError::new(format!(
                "replenish amount must be a non-negative number, got {}",
                amount
            )));
        }
        self.level += amount;
        Ok(())
    }

    /// Current level, without mutation.
    pub fn peek(&self) -> f64 {
        self.level
    }

    /// Resets the level to `value` and clears the spend history.
    pub fn reset(&mut self, value: f64) {
        self.level = value;
        self.history.clear();
    }

    /// Costs of successful spends this session, in order.
    pub fn history(&self) -> &[f64] {
        &self.history
    }
}
