//! Sampling parameters for one survey instance.

use serde::{Deserialize, Serialize};

/// Immutable survey-level configuration, supplied once at startup and passed
/// by reference into every component that needs it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SurveyConfig {
    /// Estimated size of the finite population the sample was drawn from.
    pub population: usize,
    /// Critical value for the configured confidence level (1.96 for 95%).
    pub zscore: f64,
}

impl SurveyConfig {
    /// 95% confidence against a population of the given size.
    #[must_use]
    pub fn with_population(population: usize) -> Self {
        Self {
            population,
            zscore: 1.96,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_confidence_level() {
        let config = SurveyConfig::with_population(350);
        assert_eq!(config.population, 350);
        assert!((config.zscore - 1.96).abs() < f64::EPSILON);
    }
}
