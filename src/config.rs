// ============================================================================
// Engine Configuration
// Knobs for the string-level function surface
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Invalid Operand Policy
// ============================================================================

/// What an aggregate does with an absent or malformed operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum InvalidOperandPolicy {
    /// Ignore the row and keep folding
    #[default]
    Skip,

    /// Fail the step with an invalid-decimal error
    Reject,
}

// ============================================================================
// Engine Configuration
// ============================================================================

/// Configuration shared by `Functions` and `Aggregate`
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EngineConfig {
    /// How aggregates treat absent or malformed operands
    pub invalid_operand_policy: InvalidOperandPolicy,

    /// Optional: longest operand string accepted, in bytes
    /// None means no limit
    pub max_input_length: Option<usize>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: Set the invalid operand policy
    pub fn with_invalid_operand_policy(mut self, policy: InvalidOperandPolicy) -> Self {
        self.invalid_operand_policy = policy;
        self
    }

    /// Builder method: Set the maximum operand length
    pub fn with_max_input_length(mut self, length: usize) -> Self {
        self.max_input_length = Some(length);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_input_length == Some(0) {
            return Err("Maximum input length must be positive".to_string());
        }
        Ok(())
    }

    /// True when `operand` fits within `max_input_length`
    pub fn accepts_length(&self, operand: &str) -> bool {
        self.max_input_length.is_none_or(|max| operand.len() <= max)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl EngineConfig {
    /// Rejects every malformed operand, including inside aggregates
    pub fn strict() -> Self {
        Self::new().with_invalid_operand_policy(InvalidOperandPolicy::Reject)
    }

    /// Skips malformed aggregate operands
    pub fn lenient() -> Self {
        Self::new().with_invalid_operand_policy(InvalidOperandPolicy::Skip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::new();
        assert_eq!(config.invalid_operand_policy, InvalidOperandPolicy::Skip);
        assert_eq!(config.max_input_length, None);
        assert!(config.validate().is_ok());
        assert_eq!(config, EngineConfig::lenient());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::strict().with_max_input_length(8);
        assert_eq!(config.invalid_operand_policy, InvalidOperandPolicy::Reject);
        assert!(config.accepts_length("1.234567"));
        assert!(!config.accepts_length("1.2345678"));
    }

    #[test]
    fn test_validation() {
        let config = EngineConfig::new().with_max_input_length(0);
        assert_eq!(
            config.validate(),
            Err("Maximum input length must be positive".to_string())
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = EngineConfig::strict().with_max_input_length(64);
        let json = serde_json::to_string(&config).unwrap();
        let back: EngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
