//! Application-level configuration constants.

// Flip animation
pub const ANIMATION_DURATION_MS: u32 = 150;
pub const DIGIT_DELAY_MS: u32 = 50;
pub const DIGIT_COUNT: usize = 7;
/// Largest value the fixed-width display can show; larger values saturate.
pub const MAX_DISPLAY_VALUE: u32 = 9_999_999;

// ROI arithmetic
pub const SUBSCRIPTION_COST: f64 = 250.0;
pub const WEEKS_PER_MONTH: u32 = 4;

// Default values for input fields
pub const DEFAULT_HOURS_PER_QUESTION: u32 = 2;
pub const DEFAULT_HOURLY_RATE: f64 = 50.0;

// Min/Max limits for input fields
pub const MAX_HOURS_PER_WEEK: u32 = 20;

/// A single questionnaire step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub title: &'static str,
    pub description: &'static str,
}

pub const QUESTION_COUNT: usize = 4;

pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        title: "Time spent on Converting Leads",
        description: "Talking to new leads, answering questions, signing contracts",
    },
    Question {
        title: "Time Spent with existing Customers",
        description: "Providing guidance on price, Discussing Disclosures, Contracts, Showings, Offers, Closing services",
    },
    Question {
        title: "Time Spent on Hiring & Managing Contractors",
        description: "Staging, Renovations, Inspections, Repairs",
    },
    Question {
        title: "Time Spent on understanding the market",
        description: "Comparative Market Analysis, Property Specific Analytics, Disclosure Specific Research, Financing options for customers",
    },
];
