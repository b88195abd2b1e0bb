//! Room and testimonial catalogue. Everything is mock data embedded at
//! compile time — there is no backend to fetch from.

use anyhow::{Context, Result};
use serde::Deserialize;

const ROOMS_JSON:        &str = include_str!("../../assets/rooms.json");
const TESTIMONIALS_JSON: &str = include_str!("../../assets/testimonials.json");

#[derive(Debug, Clone, Deserialize)]
pub struct Room {
    pub id:          u32,
    pub name:        String,
    pub room_type:   String,
    pub description: String,
    /// Nightly price in whole dollars.
    pub price:       u32,
    pub capacity:    u32,
    pub rating:      f32,
    pub reviews:     u32,
    pub popular:     bool,
    pub amenities:   Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Testimonial {
    pub id:        u32,
    pub name:      String,
    pub location:  String,
    pub rating:    u32,
    pub text:      String,
    pub room_type: String,
}

pub fn load_rooms() -> Result<Vec<Room>> {
    serde_json::from_str(ROOMS_JSON).context("embedded room catalogue is malformed")
}

pub fn load_testimonials() -> Result<Vec<Testimonial>> {
    serde_json::from_str(TESTIMONIALS_JSON).context("embedded testimonials are malformed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_parses_and_is_sane() {
        let rooms = load_rooms().unwrap();
        assert_eq!(rooms.len(), 6);
        for r in &rooms {
            assert!(r.price > 0 && r.capacity > 0, "{}", r.name);
            assert!((0.0..=5.0).contains(&r.rating));
            assert!(!r.amenities.is_empty());
        }
        // ids are unique — the booking flow looks rooms up by id
        let mut ids: Vec<u32> = rooms.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), rooms.len());
    }

    #[test]
    fn testimonials_parse() {
        let ts = load_testimonials().unwrap();
        assert_eq!(ts.len(), 3);
        assert!(ts.iter().all(|t| (1..=5).contains(&t.rating)));
    }
}
