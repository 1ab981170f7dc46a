//! Analytics types derived from a business's rating and review count.
//!
//! The values are computed by `services::analytics` and serialized next to
//! the displayed profile.

use serde::Serialize;

/// Market standing of a business, highest tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompetitivePosition {
    MarketLeader,
    StrongCompetitor,
    GrowingBusiness,
    Developing,
}

impl CompetitivePosition {
    pub fn label(self) -> &'static str {
        match self {
            CompetitivePosition::MarketLeader => "Market Leader",
            CompetitivePosition::StrongCompetitor => "Strong Competitor",
            CompetitivePosition::GrowingBusiness => "Growing Business",
            CompetitivePosition::Developing => "Developing",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A canned growth recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub action: &'static str,
    pub impact: &'static str,
}

/// Badge shown next to a business in the recent list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RatingLabel {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

/// Everything derived from `(rating, reviews)` for one profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusinessAnalytics {
    /// Overall score out of 100
    pub performance_score: u8,

    /// Rating as a percentage of the 5-star maximum
    pub rating_excellence: u8,

    pub competitive_position: CompetitivePosition,

    pub competitive_position_label: &'static str,

    /// Ordered from most to least severe
    pub recommendations: Vec<Recommendation>,

    pub insights: Vec<String>,
}
