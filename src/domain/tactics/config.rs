//! Tunable knobs for the standard tactic catalog.

/// Configuration shared by the standard tactics.
#[derive(Debug, Clone)]
pub struct TacticConfig {
    /// Maximum off-topic detours granted before the detour tactic
    /// stops being eligible and return-to-goal dominates.
    pub detour_cap: u32,
    /// How far a single friction tactic moves satisfaction.
    pub satisfaction_step: f64,
}

impl Default for TacticConfig {
    fn default() -> Self {
        Self {
            detour_cap: 3,
            satisfaction_step: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_observed_constants() {
        let config = TacticConfig::default();
        assert_eq!(config.detour_cap, 3);
        assert!((config.satisfaction_step - 0.1).abs() < f64::EPSILON);
    }
}
