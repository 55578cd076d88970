//! Day-of-month encouragement shown next to the mood history.

use chrono::{Datelike, NaiveDate};

pub const MESSAGES: &[&str] = &[
    "Noticing how you feel is already a step forward.",
    "Every check-in teaches you something about yourself.",
    "Small moments of awareness add up over time.",
    "Your feelings are information, not instructions.",
    "Be as patient with yourself as you would be with a friend.",
    "A hard day is not a hard life.",
    "What you pay attention to shapes how you feel.",
    "Rest counts as progress too.",
    "You do not have to feel great to keep showing up.",
    "Curiosity beats judgment when it comes to your mood.",
];

pub fn message_for_day(day_of_month: u32) -> &'static str {
    MESSAGES[day_of_month as usize % MESSAGES.len()]
}

pub fn message_for_date(date: NaiveDate) -> &'static str {
    message_for_day(date.day())
}
