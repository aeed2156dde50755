use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{LABEL_FAKE, LABEL_REAL};

/// Binary classifier output. Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    #[serde(rename = "Real (Original)")]
    Real,
    #[serde(rename = "Fake (Computer Generated)")]
    Fake,
}

impl Prediction {
    /// Map a raw class value: 1 is computer-generated, anything else genuine.
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Self::Fake
        } else {
            Self::Real
        }
    }

    pub fn class(self) -> u8 {
        match self {
            Self::Real => 0,
            Self::Fake => 1,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Real => LABEL_REAL,
            Self::Fake => LABEL_FAKE,
        }
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
