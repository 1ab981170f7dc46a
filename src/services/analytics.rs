//! Score and analytics derivation.
//!
//! Pure functions over `(rating, reviews)`. Ratings are expected in `[0, 5]` and
//! review counts to be non-negative; out-of-range inputs are clamped so the
//! score always stays within `[0, 100]`.

use crate::models::analytics::{
    BusinessAnalytics, CompetitivePosition, Priority, RatingLabel, Recommendation,
};

/// Review count past which additional reviews no longer raise the score.
pub const REVIEW_SATURATION: i32 = 200;

/// Overall performance score out of 100.
///
/// Half of the score comes from the rating, half from review volume.
/// Review volume saturates at [`REVIEW_SATURATION`].
pub fn performance_score(rating: f64, reviews: i32) -> u8 {
    let rating_score = (rating / 5.0) * 50.0;
    let review_score = ((reviews as f64 / REVIEW_SATURATION as f64) * 50.0).min(50.0);

    (rating_score + review_score).round().clamp(0.0, 100.0) as u8
}

/// Competitive tier, checked from the highest down. Both thresholds of a tier must hold.
pub fn competitive_position(rating: f64, reviews: i32) -> CompetitivePosition {
    if rating >= 4.5 && reviews >= 150 {
        CompetitivePosition::MarketLeader
    } else if rating >= 4.0 && reviews >= 100 {
        CompetitivePosition::StrongCompetitor
    } else if rating >= 3.5 && reviews >= 50 {
        CompetitivePosition::GrowingBusiness
    } else {
        CompetitivePosition::Developing
    }
}

/// Growth recommendations ordered by severity. The SEO item is always last.
pub fn recommendations(rating: f64, reviews: i32) -> Vec<Recommendation> {
    let mut items = Vec::with_capacity(3);

    if rating < 4.0 {
        items.push(Recommendation {
            priority: Priority::High,
            action: "Focus on improving customer satisfaction",
            impact: "Rating improvement",
        });
    }

    if reviews < 100 {
        items.push(Recommendation {
            priority: Priority::Medium,
            action: "Encourage more customer reviews",
            impact: "Increased credibility",
        });
    }

    items.push(Recommendation {
        priority: Priority::Low,
        action: "Optimize SEO content regularly",
        impact: "Better search visibility",
    });

    items
}

/// Rating expressed as a percentage of five stars.
pub fn rating_excellence(rating: f64) -> u8 {
    ((rating / 5.0) * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn rating_label(rating: f64) -> RatingLabel {
    if rating >= 4.5 {
        RatingLabel::Excellent
    } else if rating >= 4.0 {
        RatingLabel::Good
    } else if rating >= 3.5 {
        RatingLabel::Average
    } else {
        RatingLabel::NeedsImprovement
    }
}

/// Short human-readable observations about the profile.
pub fn insights(rating: f64, reviews: i32) -> Vec<String> {
    let quality = if rating >= 4.0 {
        "excellent"
    } else if rating >= 3.5 {
        "good"
    } else {
        "needs improvement"
    };

    let engagement = if reviews >= 100 {
        "strong"
    } else if reviews >= 50 {
        "moderate"
    } else {
        "growing"
    };

    vec![
        format!("Your rating of {rating} is {quality}"),
        format!("{reviews} reviews indicate {engagement} customer engagement"),
        "SEO headline optimized for local search visibility".to_string(),
    ]
}

impl BusinessAnalytics {
    pub fn derive(rating: f64, reviews: i32) -> Self {
        let position = competitive_position(rating, reviews);

        Self {
            performance_score: performance_score(rating, reviews),
            rating_excellence: rating_excellence(rating),
            competitive_position: position,
            competitive_position_label: position.label(),
            recommendations: recommendations(rating, reviews),
            insights: insights(rating, reviews),
        }
    }
}
