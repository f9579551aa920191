use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The degree of assistance needed for a single trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PromptLevel {
    /// Correct, unprompted.
    #[serde(rename = "+")]
    Independent,
    /// Full physical prompt.
    #[serde(rename = "FP")]
    FullPhysical,
    /// Partial physical prompt.
    #[serde(rename = "PP")]
    PartialPhysical,
    /// Direct verbal prompt.
    #[serde(rename = "DV")]
    DirectVerbal,
    /// Indirect verbal prompt.
    #[serde(rename = "IDV")]
    IndirectVerbal,
    /// Gestural prompt.
    #[serde(rename = "GP")]
    Gestural,
    /// Visual prompt.
    #[serde(rename = "VP")]
    Visual,
    /// Incorrect.
    #[serde(rename = "-")]
    Incorrect,
}

impl PromptLevel {
    pub const ALL: [PromptLevel; 8] = [
        PromptLevel::Independent,
        PromptLevel::FullPhysical,
        PromptLevel::PartialPhysical,
        PromptLevel::DirectVerbal,
        PromptLevel::IndirectVerbal,
        PromptLevel::Gestural,
        PromptLevel::Visual,
        PromptLevel::Incorrect,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            PromptLevel::Independent => "+",
            PromptLevel::FullPhysical => "FP",
            PromptLevel::PartialPhysical => "PP",
            PromptLevel::DirectVerbal => "DV",
            PromptLevel::IndirectVerbal => "IDV",
            PromptLevel::Gestural => "GP",
            PromptLevel::Visual => "VP",
            PromptLevel::Incorrect => "-",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PromptLevel::Independent => "Correct, independent",
            PromptLevel::FullPhysical => "Full physical prompt",
            PromptLevel::PartialPhysical => "Partial physical prompt",
            PromptLevel::DirectVerbal => "Direct verbal prompt",
            PromptLevel::IndirectVerbal => "Indirect verbal prompt",
            PromptLevel::Gestural => "Gestural prompt",
            PromptLevel::Visual => "Visual prompt",
            PromptLevel::Incorrect => "Incorrect",
        }
    }

    pub fn is_independent(self) -> bool {
        self == PromptLevel::Independent
    }
}

impl fmt::Display for PromptLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for PromptLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PromptLevel::ALL
            .into_iter()
            .find(|level| level.symbol() == s.trim())
            .ok_or_else(|| CoreError::InvalidPromptLevel(s.to_string()))
    }
}

/// One recorded teaching session with per-step trial outcomes.
///
/// `independence_score` is computed by whoever records the session; this
/// crate treats it as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionLog {
    pub id: Uuid,
    pub student_id: Uuid,
    pub staff_id: Uuid,
    pub date: jiff::Timestamp,
    pub target_behavior: String,
    pub method: String,
    pub steps: Vec<TaskStep>,
    /// Overall independence for the session, 0–100.
    pub independence_score: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TaskStep {
    pub id: String,
    pub description: String,
    pub trials: Vec<PromptLevel>,
}
