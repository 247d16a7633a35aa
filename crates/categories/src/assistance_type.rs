use core::str::FromStr;

use serde::{Deserialize, Serialize};

use assistance_core::ValueObject;

use crate::error::CategoryError;

/// Classification of the services a category groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistanceType {
    Sale,
    Paid,
    Subsidized,
}

impl AssistanceType {
    pub const ALL: [AssistanceType; 3] = [
        AssistanceType::Sale,
        AssistanceType::Paid,
        AssistanceType::Subsidized,
    ];

    /// Wire name, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            AssistanceType::Sale => "sale",
            AssistanceType::Paid => "paid",
            AssistanceType::Subsidized => "subsidized",
        }
    }
}

impl ValueObject for AssistanceType {}

impl core::fmt::Display for AssistanceType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssistanceType {
    type Err = CategoryError;

    /// Exact, case-sensitive match on the wire name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sale" => Ok(AssistanceType::Sale),
            "paid" => Ok(AssistanceType::Paid),
            "subsidized" => Ok(AssistanceType::Subsidized),
            _ => Err(CategoryError::InvalidAssistanceType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for kind in AssistanceType::ALL {
            assert_eq!(kind.as_str().parse::<AssistanceType>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_blank_and_unknown_values() {
        for raw in ["", " ", "xxxxxxx", "Sale", " sale"] {
            assert_eq!(
                raw.parse::<AssistanceType>().unwrap_err(),
                CategoryError::InvalidAssistanceType,
                "input {raw:?}"
            );
        }
    }

    #[test]
    fn serializes_as_lowercase_name() {
        let json = serde_json::to_string(&AssistanceType::Subsidized).unwrap();
        assert_eq!(json, "\"subsidized\"");
    }
}
