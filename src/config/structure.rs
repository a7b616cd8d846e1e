use super::traits::ConfigSection;
use crate::error::TensegError;
use serde::{Deserialize, Serialize};

/// Geometry and physical parameters of the generated structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructureConfig {
    pub strut_num: usize,
    /// Cable stiffness passed to the tendon defaults.
    pub stiffness: f64,
    /// Cable damping passed to the tendon defaults.
    pub damping: f64,
}

impl Default for StructureConfig {
    fn default() -> Self {
        Self {
            strut_num: 6,
            stiffness: 100.0,
            damping: 1.0,
        }
    }
}

impl ConfigSection for StructureConfig {
    fn section_name() -> &'static str {
        "structure"
    }

    fn validate(&self) -> Result<(), TensegError> {
        if self.strut_num < 2 {
            return Err(TensegError::Configuration(
                "Strut count must be at least 2".to_string(),
            ));
        }
        if self.stiffness <= 0.0 {
            return Err(TensegError::Configuration(
                "Cable stiffness must be positive".to_string(),
            ));
        }
        if self.damping < 0.0 {
            return Err(TensegError::Configuration(
                "Cable damping must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(StructureConfig::default().validate().is_ok());
    }

    #[test]
    fn test_too_few_struts_rejected() {
        for strut_num in [0, 1] {
            let config = StructureConfig {
                strut_num,
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }
    }
}
