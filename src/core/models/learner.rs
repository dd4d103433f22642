//! Learner profile shown in the tree header

use serde::{Deserialize, Serialize};

/// Header badges for the learner viewing the tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerProfile {
    /// Total XP badge
    #[serde(default)]
    pub total_xp: u32,
    /// Membership badge (empty hides it)
    #[serde(default)]
    pub membership: String,
}
