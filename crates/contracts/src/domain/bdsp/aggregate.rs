use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// ============================================================================
// Category
// ============================================================================

/// Training category a Business Development Service Provider belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainerCategory {
    Finance,
    Marketing,
    Operations,
}

impl TrainerCategory {
    /// Category key as used in CSS hooks and data attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrainerCategory::Finance => "finance",
            TrainerCategory::Marketing => "marketing",
            TrainerCategory::Operations => "operations",
        }
    }

    /// Display name for the UI.
    pub fn label(&self) -> &'static str {
        match self {
            TrainerCategory::Finance => "Finance",
            TrainerCategory::Marketing => "Marketing",
            TrainerCategory::Operations => "Operations",
        }
    }

    pub fn all() -> [TrainerCategory; 3] {
        [
            TrainerCategory::Finance,
            TrainerCategory::Marketing,
            TrainerCategory::Operations,
        ]
    }
}

// ============================================================================
// Directory filter
// ============================================================================

/// Active directory filter: the whole catalog or a single category.
///
/// Filtering only computes a view; the catalog itself is never touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectoryFilter {
    #[default]
    All,
    Category(TrainerCategory),
}

impl DirectoryFilter {
    pub fn matches(&self, profile: &TrainerProfile) -> bool {
        match self {
            DirectoryFilter::All => true,
            DirectoryFilter::Category(category) => profile.category == *category,
        }
    }

    /// Display name for the filter tab.
    pub fn label(&self) -> &'static str {
        match self {
            DirectoryFilter::All => "All",
            DirectoryFilter::Category(category) => category.label(),
        }
    }

    /// The tabs shown above the directory, in display order.
    pub fn tabs() -> [DirectoryFilter; 4] {
        [
            DirectoryFilter::All,
            DirectoryFilter::Category(TrainerCategory::Finance),
            DirectoryFilter::Category(TrainerCategory::Marketing),
            DirectoryFilter::Category(TrainerCategory::Operations),
        ]
    }
}

// ============================================================================
// Trainer profile
// ============================================================================

/// A BDSP profile as shown in the directory. Static seed data, never
/// mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainerProfile {
    pub id: u32,
    pub name: String,
    pub initials: String,
    pub title: String,
    pub category: TrainerCategory,
    pub badge: Option<String>,
    /// CSS gradient for the avatar tile.
    #[serde(rename = "avatarGradient")]
    pub avatar_gradient: String,
    pub expertise: Vec<String>,
    pub rating: f64,
    pub sessions: u32,
}

#[allow(clippy::too_many_arguments)]
fn profile(
    id: u32,
    name: &str,
    initials: &str,
    title: &str,
    category: TrainerCategory,
    badge: Option<&str>,
    avatar_gradient: &str,
    expertise: &[&str],
    rating: f64,
    sessions: u32,
) -> TrainerProfile {
    TrainerProfile {
        id,
        name: name.to_string(),
        initials: initials.to_string(),
        title: title.to_string(),
        category,
        badge: badge.map(str::to_string),
        avatar_gradient: avatar_gradient.to_string(),
        expertise: expertise.iter().map(|e| e.to_string()).collect(),
        rating,
        sessions,
    }
}

/// The fixed six-profile directory catalog.
pub static CATALOG: Lazy<Vec<TrainerProfile>> = Lazy::new(|| {
    vec![
        profile(
            1,
            "Amanuel Bekele",
            "AB",
            "Financial Literacy Specialist",
            TrainerCategory::Finance,
            Some("Top Rated"),
            "linear-gradient(135deg,#C08B18,#8B6010)",
            &["Financial Planning", "Budgeting", "Tax Compliance"],
            5.0,
            84,
        ),
        profile(
            2,
            "Sara Tadesse",
            "ST",
            "Digital Marketing Consultant",
            TrainerCategory::Marketing,
            None,
            "linear-gradient(135deg,#2A7A6E,#1B5E6B)",
            &["Social Media", "Brand Strategy", "Content Marketing"],
            4.9,
            62,
        ),
        profile(
            3,
            "Mikael Girma",
            "MG",
            "Operations & Supply Chain Expert",
            TrainerCategory::Operations,
            Some("New"),
            "linear-gradient(135deg,#4B6CB7,#182848)",
            &["Logistics", "Process Optimization", "Inventory Management"],
            4.8,
            41,
        ),
        profile(
            4,
            "Hana Woldemichael",
            "HW",
            "Business Strategy Advisor",
            TrainerCategory::Finance,
            None,
            "linear-gradient(135deg,#834D9B,#4A2060)",
            &["Business Planning", "Investment Readiness", "Growth Strategy"],
            4.9,
            78,
        ),
        profile(
            5,
            "Dawit Haile",
            "DH",
            "Sales & Customer Acquisition Coach",
            TrainerCategory::Marketing,
            Some("Top Rated"),
            "linear-gradient(135deg,#E05252,#8B1A1A)",
            &["Sales Strategy", "Customer Retention", "CRM Systems"],
            5.0,
            95,
        ),
        profile(
            6,
            "Liya Mekonen",
            "LM",
            "HR & Organizational Development",
            TrainerCategory::Operations,
            None,
            "linear-gradient(135deg,#3CA55C,#1A5E2A)",
            &["Team Building", "HR Systems", "Leadership"],
            4.7,
            53,
        ),
    ]
});

/// Visible subset of the catalog for a filter.
pub fn visible_profiles(filter: DirectoryFilter) -> Vec<TrainerProfile> {
    CATALOG
        .iter()
        .filter(|profile| filter.matches(profile))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_filter_shows_whole_catalog() {
        assert_eq!(visible_profiles(DirectoryFilter::All).len(), 6);
    }

    #[test]
    fn finance_filter_selects_exactly_the_finance_profiles() {
        let finance = visible_profiles(DirectoryFilter::Category(TrainerCategory::Finance));
        let names: Vec<&str> = finance.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Amanuel Bekele", "Hana Woldemichael"]);
    }

    #[test]
    fn every_category_tab_is_nonempty() {
        for category in TrainerCategory::all() {
            let visible = visible_profiles(DirectoryFilter::Category(category));
            assert!(!visible.is_empty(), "empty tab: {}", category.as_str());
            assert!(visible.iter().all(|p| p.category == category));
        }
    }

    #[test]
    fn filtering_never_removes_catalog_records() {
        let _ = visible_profiles(DirectoryFilter::Category(TrainerCategory::Marketing));
        assert_eq!(CATALOG.len(), 6);
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&TrainerCategory::Finance).unwrap();
        assert_eq!(json, "\"finance\"");
    }
}
