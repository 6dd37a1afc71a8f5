use chrono::{Local, NaiveTime, Timelike};
use serde::Serialize;

use super::resolver::{resolve, ParsedName};

/// Part of the day used to pick a greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
}

impl DayPeriod {
    pub fn at(time: NaiveTime) -> Self {
        match time.hour() {
            5..=11 => Self::Morning,
            12..=17 => Self::Afternoon,
            _ => Self::Evening,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Good morning",
            Self::Afternoon => "Good afternoon",
            Self::Evening => "Good evening",
        }
    }
}

/// What the desk header shows for a signed-in operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorProfile {
    pub email: String,
    #[serde(flatten)]
    pub name: ParsedName,
    pub initials: String,
    pub greeting: String,
}

impl OperatorProfile {
    pub fn from_email(email: &str, now: NaiveTime) -> Self {
        let email = email.trim();
        let name = resolve(email);
        let initials = initials(&name);
        let greeting = greeting(&name, DayPeriod::at(now));

        Self {
            email: email.to_string(),
            name,
            initials,
            greeting,
        }
    }

    pub fn at_local_time(email: &str) -> Self {
        Self::from_email(email, Local::now().time())
    }
}

/// Avatar initials: leading character of each resolved part.
pub fn initials(name: &ParsedName) -> String {
    [&name.first_name, &name.last_name]
        .into_iter()
        .filter_map(|part| part.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn greeting(name: &ParsedName, period: DayPeriod) -> String {
    if name.formal_name.is_empty() {
        return "Welcome".to_string();
    }
    format!("{}, {}", period.label(), name.formal_name)
}
