use chrono::NaiveDate;
use event_finder_lib::event::Event;

struct Seed {
    title: &'static str,
    date: (i32, u32, u32),
    time: &'static str,
    location: &'static str,
    description: &'static str,
    image: &'static str,
    position: (f64, f64),
    attendees: u32,
    interested: u32,
    organizer: Option<&'static str>,
}

const SEEDS: [Seed; 6] = [
    Seed {
        title: "Summer Music Festival",
        date: (2025, 10, 15),
        time: "18:00",
        location: "Central Park",
        description: "Join us for an amazing evening of live music featuring local artists.",
        image: "https://images.unsplash.com/photo-1501281668745-f7f57925c3b4?w=800&q=80",
        position: (40.785091, -73.968285),
        attendees: 245,
        interested: 892,
        organizer: Some("Music Lovers Group"),
    },
    Seed {
        title: "Food & Wine Tasting",
        date: (2025, 10, 18),
        time: "19:30",
        location: "Downtown Plaza",
        description: "Experience culinary delights from renowned local chefs.",
        image: "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=800&q=80",
        position: (40.758896, -73.985130),
        attendees: 128,
        interested: 456,
        organizer: Some("Foodie Community"),
    },
    Seed {
        title: "Yoga in the Park",
        date: (2025, 10, 12),
        time: "08:00",
        location: "Riverside Park",
        description: "Start your day with mindful movement and meditation.",
        image: "https://images.unsplash.com/photo-1506126613408-eca07ce68773?w=800&q=80",
        position: (40.802080, -73.971249),
        attendees: 67,
        interested: 234,
        organizer: None,
    },
    Seed {
        title: "Tech Startup Meetup",
        date: (2025, 10, 20),
        time: "18:30",
        location: "Innovation Hub",
        description: "Network with entrepreneurs and innovators in tech.",
        image: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&q=80",
        position: (40.748817, -73.985428),
        attendees: 189,
        interested: 567,
        organizer: Some("Tech Innovators"),
    },
    Seed {
        title: "Art Gallery Opening",
        date: (2025, 10, 22),
        time: "19:00",
        location: "Modern Art Museum",
        description: "Celebrate contemporary art and meet the artists.",
        image: "https://images.unsplash.com/photo-1460661419201-fd4cecdf8a8b?w=800&q=80",
        position: (40.761421, -73.977622),
        attendees: 156,
        interested: 423,
        organizer: None,
    },
    Seed {
        title: "Marathon Training",
        date: (2025, 10, 14),
        time: "06:00",
        location: "City Stadium",
        description: "Group training session for upcoming city marathon.",
        image: "https://images.unsplash.com/photo-1452626038306-9aae5e071dd3?w=800&q=80",
        position: (40.771209, -73.963937),
        attendees: 93,
        interested: 312,
        organizer: None,
    },
];

/// The events the app starts with.
pub fn events() -> Vec<Event> {
    SEEDS
        .iter()
        .zip(1..)
        .map(|(seed, id)| {
            let (year, month, day) = seed.date;
            Event {
                id,
                title: seed.title.to_owned(),
                date: NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default(),
                time: seed.time.to_owned(),
                location: seed.location.to_owned(),
                description: seed.description.to_owned(),
                image: seed.image.to_owned(),
                lat: seed.position.0,
                lng: seed.position.1,
                attendees: seed.attendees,
                interested: seed.interested,
                organizer: seed.organizer.map(str::to_owned),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_seed_is_placeable() {
        let events = events();
        assert_eq!(events.len(), 6);
        for event in &events {
            assert!(event.coordinate().is_ok(), "{} has no valid position", event.title);
            assert_ne!(event.date, NaiveDate::default());
        }
    }

    #[test]
    fn ids_are_unique_and_start_at_one() {
        let ids: HashSet<i64> = events().iter().map(|event| event.id).collect();
        assert_eq!(ids.len(), 6);
        assert!(ids.contains(&1) && ids.contains(&6));
    }
}
