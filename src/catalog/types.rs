use serde::{Deserialize, Serialize};

use crate::database::models::ToolWithCategory;

/// Fixed pricing classification for catalog entries.
///
/// Stored as plain TEXT in the database so that an unrecognized value in a
/// `pricing` filter simply matches nothing instead of failing to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PricingType {
    #[serde(rename = "FREE")]
    Free,
    #[serde(rename = "FREEMIUM")]
    Freemium,
    #[serde(rename = "SUBSCRIPTION")]
    Subscription,
    #[serde(rename = "PER_TOKEN")]
    PerToken,
}

impl PricingType {
    pub const ALL: [PricingType; 4] = [
        PricingType::Free,
        PricingType::Freemium,
        PricingType::Subscription,
        PricingType::PerToken,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PricingType::Free => "FREE",
            PricingType::Freemium => "FREEMIUM",
            PricingType::Subscription => "SUBSCRIPTION",
            PricingType::PerToken => "PER_TOKEN",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "FREE" => Some(PricingType::Free),
            "FREEMIUM" => Some(PricingType::Freemium),
            "SUBSCRIPTION" => Some(PricingType::Subscription),
            "PER_TOKEN" => Some(PricingType::PerToken),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PricingType::Free => "Free",
            PricingType::Freemium => "Freemium",
            PricingType::Subscription => "Subscription",
            PricingType::PerToken => "Pay per token",
        }
    }
}

/// Display label for a pricing classification string.
///
/// Total over all inputs: unrecognized values fall back to themselves.
pub fn pricing_label(pricing_type: &str) -> String {
    match PricingType::parse(pricing_type) {
        Some(p) => p.label().to_string(),
        None => pricing_type.to_string(),
    }
}

/// Normalized filter parameters for a catalog listing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolFilters {
    pub query: String,
    pub category: String,
    pub pricing: String,
    pub page: u32,
    pub per_page: u32,
}

impl Default for ToolFilters {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: String::new(),
            pricing: String::new(),
            page: 1,
            per_page: crate::config::config().catalog.page_size,
        }
    }
}

impl ToolFilters {
    /// Requested page, clamped to 1. Page numbers below 1 are treated as the
    /// first page rather than an empty no-match window.
    pub fn effective_page(&self) -> u32 {
        self.page.max(1)
    }

    pub fn offset(&self) -> i64 {
        (self.effective_page() as i64 - 1) * self.per_page as i64
    }
}

/// One page of predicate-matched tools plus the page-independent total.
#[derive(Debug, Clone, Serialize)]
pub struct ToolPage {
    pub tools: Vec<ToolWithCategory>,
    pub total: i64,
    pub page: u32,
    pub per_page: u32,
}

impl ToolPage {
    pub fn total_pages(&self) -> u32 {
        if self.total <= 0 {
            return 0;
        }
        ((self.total as u64).div_ceil(self.per_page.max(1) as u64)) as u32
    }
}
