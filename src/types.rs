//! Type-safe selection values for the estimator
//!
//! Project size is a closed set of classes with fixed scale factors, so it is
//! an enum rather than a free-form string.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{EstimatorError, Result};

/// Overall project scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SizeClass {
    Small,
    #[default]
    Standard,
    Large,
}

impl SizeClass {
    /// Multiplier applied to a task's base hours
    pub fn scale(&self) -> f64 {
        match self {
            Self::Small => 0.7,
            Self::Standard => 1.0,
            Self::Large => 1.5,
        }
    }

    /// Label shown in the size picker
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Standard => "Standard",
            Self::Large => "Large",
        }
    }

    /// Parse a size name, reporting anything else as `InvalidSizeClass`
    pub fn parse(name: &str) -> Result<Self> {
        name.parse()
            .map_err(|_| EstimatorError::InvalidSizeClass(name.to_string()))
    }

    /// Position in the picker (declaration order)
    pub fn index(&self) -> usize {
        Self::iter().position(|s| s == *self).unwrap_or_default()
    }

    /// All classes in picker order
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}
