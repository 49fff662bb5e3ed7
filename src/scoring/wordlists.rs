// src/scoring/wordlists.rs
//! Built-in word lists and metric patterns used by the keywords category.

/// Action verbs commonly used in resumes.
pub const ACTION_VERBS: &[&str] = &[
    "achieved",
    "administered",
    "analyzed",
    "built",
    "collaborated",
    "completed",
    "coordinated",
    "created",
    "delivered",
    "designed",
    "developed",
    "directed",
    "enhanced",
    "established",
    "executed",
    "generated",
    "implemented",
    "improved",
    "increased",
    "initiated",
    "launched",
    "led",
    "managed",
    "optimized",
    "organized",
    "pioneered",
    "produced",
    "reduced",
    "resolved",
    "streamlined",
    "strengthened",
    "transformed",
    "accelerated",
    "accomplished",
    "orchestrated",
    "spearheaded",
];

/// Industry keywords (sample list; a production deployment would use a
/// larger, field-specific one).
pub const INDUSTRY_KEYWORDS: &[&str] = &[
    "agile",
    "api",
    "cloud",
    "database",
    "frontend",
    "backend",
    "fullstack",
    "leadership",
    "project management",
    "data analysis",
    "machine learning",
    "customer service",
    "sales",
    "marketing",
    "budget",
    "strategy",
    "compliance",
    "optimization",
    "automation",
    "scalability",
    "security",
    "performance",
];

/// Patterns that count as quantifiable metrics. Applied to lowercased text.
pub const METRIC_PATTERNS: &[&str] = &[
    r"\d+%",
    r"\$\d+",
    r"\d+\+",
    r"\d+ (users|customers|clients|employees|team members)",
    r"(increased|decreased|reduced|improved|grew) (by )?\d+",
];
