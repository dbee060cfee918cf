use std::fmt;

use super::model::{Pollutant, PredictionResult};

// ---------------------------------------------------------------------------
// Safe limits
// ---------------------------------------------------------------------------

/// Which side of the limit is safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitDirection {
    /// Alert when the value falls below the limit.
    Minimum,
    /// Alert when the value rises above the limit.
    Maximum,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SafeLimit {
    pub limit: f64,
    pub direction: LimitDirection,
}

impl SafeLimit {
    pub fn is_violated_by(&self, value: f64) -> bool {
        match self.direction {
            LimitDirection::Minimum => value < self.limit,
            LimitDirection::Maximum => value > self.limit,
        }
    }
}

/// Per-pollutant thresholds, indexed in canonical pollutant order.
#[derive(Debug, Clone, PartialEq)]
pub struct SafeLimitTable {
    limits: [SafeLimit; 6],
}

impl SafeLimitTable {
    pub fn get(&self, pollutant: Pollutant) -> SafeLimit {
        self.limits[pollutant.index()]
    }
}

impl Default for SafeLimitTable {
    /// Environmental limits in mg/L.
    fn default() -> Self {
        let max = |limit| SafeLimit {
            limit,
            direction: LimitDirection::Maximum,
        };
        Self {
            limits: [
                SafeLimit {
                    limit: 5.0,
                    direction: LimitDirection::Minimum,
                },
                max(10.0),
                max(0.1),
                max(250.0),
                max(0.1),
                max(250.0),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Alerts
// ---------------------------------------------------------------------------

/// One pollutant outside its safe range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert {
    pub pollutant: Pollutant,
    pub value: f64,
    pub limit: f64,
    pub direction: LimitDirection,
}

impl Alert {
    pub fn message(&self) -> String {
        match self.direction {
            LimitDirection::Minimum => format!(
                "Low {}: {:.2} mg/L (Safe ≥ {})",
                self.pollutant.display_name(),
                self.value,
                self.limit
            ),
            LimitDirection::Maximum => format!(
                "High {}: {:.2} mg/L (Safe ≤ {})",
                self.pollutant.column(),
                self.value,
                self.limit
            ),
        }
    }
}

/// Violations in canonical pollutant order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlertSet {
    alerts: Vec<Alert>,
}

impl AlertSet {
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    pub fn contains(&self, pollutant: Pollutant) -> bool {
        self.alerts.iter().any(|a| a.pollutant == pollutant)
    }

    pub fn severity(&self) -> Severity {
        Severity::from_alert_count(self.len())
    }

    /// Pollution score, e.g. `"2 / 6"`.
    pub fn score(&self) -> String {
        format!("{} / {}", self.len(), Pollutant::ALL.len())
    }
}

/// Compare every prediction against its safe limit.
pub fn evaluate(result: &PredictionResult, limits: &SafeLimitTable) -> AlertSet {
    let alerts = result
        .iter()
        .filter_map(|(pollutant, value)| {
            let safe = limits.get(pollutant);
            safe.is_violated_by(value).then_some(Alert {
                pollutant,
                value,
                limit: safe.limit,
                direction: safe.direction,
            })
        })
        .collect();
    AlertSet { alerts }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Overall water quality status derived from the number of alerts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Good,
    Moderate,
    Hazardous,
}

impl Severity {
    pub fn from_alert_count(count: usize) -> Self {
        match count {
            0 => Severity::Good,
            1 | 2 => Severity::Moderate,
            _ => Severity::Hazardous,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Severity::Good => "GOOD",
            Severity::Moderate => "MODERATE",
            Severity::Hazardous => "HAZARDOUS",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
