//! Rotating product-management motivators.

use chrono::{Datelike, Local, NaiveDate};

pub const MOTIVATORS: [&str; 10] = [
    "Great PMs don't just build features; they build clarity out of chaos.",
    "In the age of AI, empathy is your most competitive advantage.",
    "Fall in love with the problem, not the AI solution.",
    "Ship to learn. Iteration is the heartbeat of AI products.",
    "The best prompt is a conversation, not a command.",
    "Data whispers, but user intuition shouts. Balance both.",
    "AI is a tool. The product is the value it creates for the human.",
    "Don't predict the future. Enable your users to create it.",
    "Ambiguity is where the opportunity hides. Embrace it.",
    "Your roadmap is a hypothesis, not a contract.",
];

/// The motivator for a given day; each day of the year rotates to the next.
pub fn motivator_for(date: NaiveDate) -> &'static str {
    MOTIVATORS[date.ordinal() as usize % MOTIVATORS.len()]
}

/// Today's motivator in local time.
pub fn motivator_of_the_day() -> &'static str {
    motivator_for(Local::now().date_naive())
}
