//! Running balance carried through the yearly fold

/// Immutable accumulator threaded from one period to the next
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    /// Balance including all interest credited so far
    pub investment_value: f64,
    /// Principal plus contributions, excluding interest
    pub total_deposited: f64,
}

impl Accumulator {
    /// Opening balance before any growth
    pub fn opening(principal: f64) -> Self {
        Self {
            investment_value: principal,
            total_deposited: principal,
        }
    }

    /// Deposit an amount into both the balance and the deposit total
    pub fn contribute(self, amount: f64) -> Self {
        Self {
            investment_value: self.investment_value + amount,
            total_deposited: self.total_deposited + amount,
        }
    }

    /// Apply `steps` successive multiplications by `factor`
    ///
    /// Repeated multiplication rather than `powi` keeps results identical to
    /// a step-by-step loop.
    pub fn compound_steps(self, factor: f64, steps: u32) -> Self {
        let investment_value = (0..steps).fold(self.investment_value, |value, _| value * factor);
        Self { investment_value, ..self }
    }

    /// Apply a single growth multiplier
    pub fn grow(self, multiplier: f64) -> Self {
        Self {
            investment_value: self.investment_value * multiplier,
            ..self
        }
    }

    pub fn interest_earned(&self) -> f64 {
        self.investment_value - self.total_deposited
    }
}
