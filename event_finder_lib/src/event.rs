use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::coordinate::Coordinate;

/// Used for events created without an image.
pub const DEFAULT_IMAGE: &str = "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=800&q=80";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventError {
    #[error("event {id} has an out of range position ({lat}, {lng})")]
    InvalidCoordinate { id: i64, lat: f64, lng: f64 },
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} is not a valid number")]
    InvalidNumber(&'static str),
    #[error("{0} is not a valid date")]
    InvalidDate(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub lat: f64,
    pub lng: f64,
    pub attendees: u32,
    pub interested: u32,
    pub organizer: Option<String>,
}

impl Event {
    pub fn coordinate(&self) -> Result<Coordinate, EventError> {
        Coordinate::try_new(self.lat, self.lng).ok_or(EventError::InvalidCoordinate {
            id: self.id,
            lat: self.lat,
            lng: self.lng,
        })
    }

    /// `Sat, Oct 15 · 18:00`
    pub fn short_schedule(&self) -> String {
        format!("{} · {}", self.date.format("%a, %b %-d"), self.time)
    }

    /// `10/15/2025 at 18:00`
    pub fn long_schedule(&self) -> String {
        format!("{} at {}", self.date.format("%m/%d/%Y"), self.time)
    }
}

/// Events that can go on the map, in list order, and why the others cannot.
#[derive(Debug, Default)]
pub struct Placement<'a> {
    pub placed: Vec<(&'a Event, Coordinate)>,
    pub skipped: Vec<EventError>,
}

pub fn placeable(events: &[Event]) -> Placement<'_> {
    let mut placement = Placement::default();
    for event in events {
        match event.coordinate() {
            Ok(position) => placement.placed.push((event, position)),
            Err(err) => placement.skipped.push(err),
        }
    }
    placement
}

/// Raw values of the create-event form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub image: String,
    pub lat: String,
    pub lng: String,
}

impl NewEvent {
    pub fn validate(&self, id: i64) -> Result<Event, EventError> {
        let title = required(&self.title, "Title")?;
        let date = required(&self.date, "Date")?;
        let time = required(&self.time, "Time")?;
        let location = required(&self.location, "Location")?;

        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| EventError::InvalidDate(date.to_owned()))?;

        let lat = number(&self.lat, "Latitude")?;
        let lng = number(&self.lng, "Longitude")?;

        let event = Event {
            id,
            title: title.to_owned(),
            date,
            time: time.to_owned(),
            location: location.to_owned(),
            description: self.description.trim().to_owned(),
            image: match self.image.trim() {
                "" => DEFAULT_IMAGE.to_owned(),
                image => image.to_owned(),
            },
            lat,
            lng,
            attendees: 0,
            interested: 0,
            organizer: None,
        };

        event.coordinate()?;
        Ok(event)
    }
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, EventError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(EventError::MissingField(field));
    }
    Ok(value)
}

fn number(value: &str, field: &'static str) -> Result<f64, EventError> {
    required(value, field)?
        .parse::<f64>()
        .map_err(|_| EventError::InvalidNumber(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewEvent {
        NewEvent {
            title: "Summer Music Festival".into(),
            date: "2025-10-15".into(),
            time: "18:00".into(),
            location: "Central Park".into(),
            description: " Live music ".into(),
            image: String::new(),
            lat: "40.785091".into(),
            lng: "-73.968285".into(),
        }
    }

    #[test]
    fn valid_draft_becomes_event() {
        let event = draft().validate(7).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.description, "Live music");
        assert_eq!(event.attendees, 0);
        assert_eq!(event.image, DEFAULT_IMAGE);
        assert_eq!(event.short_schedule(), "Wed, Oct 15 · 18:00");
        assert_eq!(event.long_schedule(), "10/15/2025 at 18:00");
    }

    #[test]
    fn missing_required_field() {
        let mut d = draft();
        d.location = "   ".into();
        assert_eq!(d.validate(1), Err(EventError::MissingField("Location")));
    }

    #[test]
    fn bad_numbers_and_ranges() {
        let mut d = draft();
        d.lat = "north".into();
        assert_eq!(d.validate(1), Err(EventError::InvalidNumber("Latitude")));

        let mut d = draft();
        d.lng = "200".into();
        assert!(matches!(d.validate(1), Err(EventError::InvalidCoordinate { .. })));
    }

    fn listed(id: i64, lat: f64, lng: f64) -> Event {
        let mut event = draft().validate(id).unwrap();
        event.lat = lat;
        event.lng = lng;
        event
    }

    #[test]
    fn out_of_range_events_are_skipped_in_order() {
        let events = vec![
            listed(1, 40.785091, -73.968285),
            listed(2, 91.0, -73.985130),
            listed(3, 40.802080, -73.971249),
        ];

        let placement = placeable(&events);
        let ids: Vec<i64> = placement.placed.iter().map(|(event, _)| event.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(placement.placed[1].1, Coordinate::new(40.802080, -73.971249));
        assert_eq!(
            placement.skipped,
            vec![EventError::InvalidCoordinate { id: 2, lat: 91.0, lng: -73.985130 }]
        );
    }

    #[test]
    fn bad_date() {
        let mut d = draft();
        d.date = "15/10/2025".into();
        assert!(matches!(d.validate(1), Err(EventError::InvalidDate(_))));
    }
}
