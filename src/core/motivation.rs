use chrono::{Datelike, NaiveDate};

const QUOTES: [&str; 10] = [
    "The only bad workout is the one that didn't happen.",
    "Your body can stand almost anything. It's your mind you have to convince.",
    "Success is the sum of small efforts repeated day in and day out.",
    "The pain you feel today will be the strength you feel tomorrow.",
    "Don't stop when you're tired. Stop when you're done.",
    "Champions are made when no one is watching.",
    "The difference between try and triumph is a little umph.",
    "Discipline is doing what needs to be done, even if you don't want to.",
    "Your only limit is you.",
    "Sweat is just fat crying.",
];

pub fn greeting(hour: u32) -> &'static str {
    match hour {
        h if h < 12 => "Good Morning",
        h if h < 18 => "Good Afternoon",
        _ => "Good Evening",
    }
}

/// Same quote all day, rotating through the list by day of the year.
pub fn daily_quote(date: NaiveDate) -> &'static str {
    QUOTES[date.ordinal() as usize % QUOTES.len()]
}
