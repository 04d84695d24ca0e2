use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// A numeric field did not hold a number.
    Invalid,
    Correct,
    Incorrect,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Invalid => "invalid",
            Self::Correct => "correct",
            Self::Incorrect => "incorrect",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_name() {
        for v in [Verdict::Invalid, Verdict::Correct, Verdict::Incorrect] {
            let yaml = serde_yaml::to_string(&v).unwrap();
            assert_eq!(yaml.trim(), v.to_string());
        }
    }
}
