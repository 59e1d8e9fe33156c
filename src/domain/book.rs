use core::fmt;
use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::contact::Record;
use crate::errors::AppError;
use crate::validation::validate_name;

/// Greetings are computed for birthdays up to this many days ahead.
const UPCOMING_WINDOW_DAYS: i64 = 7;

// A current-year projection further back than this means the birthday
// already wrapped into next year (a January birthday queried in late
// December).
const ROLLOVER_THRESHOLD_DAYS: i64 = -180;

/// Display format for congratulation dates.
const CONGRATULATION_FORMAT: &str = "%Y.%m.%d";

/// A contact due a birthday greeting, and the day to send it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Greeting {
    pub name: String,
    pub congratulation_date: NaiveDate,
}

impl fmt::Display for Greeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. Congratulation date: {}",
            self.name,
            self.congratulation_date.format(CONGRATULATION_FORMAT)
        )
    }
}

/// In-memory mapping from contact name to record. Lives for one
/// process run; nothing is persisted.
#[derive(Debug, Default)]
pub struct ContactStore {
    records: HashMap<String, Record>,
}

impl ContactStore {
    pub fn new() -> Self {
        ContactStore {
            records: HashMap::new(),
        }
    }

    /// Inserts an empty record under `name`.
    ///
    /// Refuses blank and duplicate names; callers that want to update
    /// an existing contact go through `find_mut` instead.
    pub fn add(&mut self, name: &str) -> Result<(), AppError> {
        if !validate_name(name) {
            return Err(AppError::Validation("Name cannot be empty.".to_string()));
        }
        if self.records.contains_key(name) {
            return Err(AppError::Validation(format!(
                "Contact {} already exists.",
                name
            )));
        }
        self.records.insert(name.to_string(), Record::new(name));
        Ok(())
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Removes the record; no-op if the name is unknown.
    pub fn delete(&mut self, name: &str) {
        self.records.remove(name);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in name order, for stable listing output.
    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        let mut records: Vec<&Record> = self.records.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records.into_iter()
    }

    /// Contacts whose birthday falls within the next 7 days of
    /// `reference` (inclusive on both ends).
    ///
    /// Each birthday is projected onto the reference year; projections
    /// that land far in the past wrap onto the next year, so December
    /// queries still see early-January birthdays. Weekend birthdays
    /// are congratulated on the following Monday. Output is sorted by
    /// congratulation date, then name.
    pub fn upcoming_birthdays(&self, reference: NaiveDate) -> Vec<Greeting> {
        let mut greetings = Vec::new();

        for record in self.records.values() {
            let Some(birthday) = record.birthday else {
                continue;
            };

            let mut this_year = project_onto_year(birthday, reference.year());
            let mut delta = (this_year - reference).num_days();

            if delta < ROLLOVER_THRESHOLD_DAYS {
                this_year = project_onto_year(birthday, reference.year() + 1);
                delta = (this_year - reference).num_days();
            }

            if (0..=UPCOMING_WINDOW_DAYS).contains(&delta) {
                greetings.push(Greeting {
                    name: record.name.clone(),
                    congratulation_date: shift_off_weekend(this_year),
                });
            }
        }

        greetings.sort_by(|a, b| {
            a.congratulation_date
                .cmp(&b.congratulation_date)
                .then_with(|| a.name.cmp(&b.name))
        });
        greetings
    }
}

fn project_onto_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    match birthday.with_year(year) {
        Some(date) => date,
        // Feb 29 in a non-leap year; celebrate on Mar 1
        None => NaiveDate::from_ymd_opt(year, 3, 1).unwrap_or(birthday),
    }
}

fn shift_off_weekend(date: NaiveDate) -> NaiveDate {
    match date.weekday() {
        Weekday::Sat => date + Duration::days(2),
        Weekday::Sun => date + Duration::days(1),
        _ => date,
    }
}
