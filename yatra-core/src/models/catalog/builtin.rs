//! Contains curated attractions shipped with the planner.

use super::{Catalog, City};
use crate::models::Attraction;
use crate::models::Interest::*;
use lazy_static::lazy_static;
use std::sync::Arc;

/// A city used when requested one has no curated attractions.
pub const DEFAULT_CITY: &str = "Delhi";

/// Destinations offered for selection. Only some of them have curated attractions.
pub const DESTINATIONS: &[&str] = &[
    "Delhi",
    "Mumbai",
    "Bangalore",
    "Jaipur",
    "Kerala (Kochi)",
    "Goa",
    "Agra",
    "Varanasi",
    "Rishikesh",
    "Udaipur",
    "Jodhpur",
    "Pushkar",
    "Hampi",
    "Mysore",
    "Ooty",
];

lazy_static! {
    static ref BUILTIN_CATALOG: Arc<Catalog> = Arc::new(create_builtin_catalog());
}

/// Returns the built-in catalog. It is created once per process.
pub fn get_builtin_catalog() -> Arc<Catalog> {
    BUILTIN_CATALOG.clone()
}

fn create_builtin_catalog() -> Catalog {
    let cities = vec![
        City::new(
            "Delhi",
            vec![
                Attraction::new("Red Fort", "Historic Mughal fortress", "2-3 hours", "9:30 AM - 4:30 PM", HeritageCulture),
                Attraction::new("India Gate", "War memorial and iconic landmark", "1 hour", "24 hours", HeritageCulture),
                Attraction::new(
                    "Lotus Temple",
                    "Baháʼí House of Worship",
                    "1-2 hours",
                    "9:00 AM - 5:30 PM",
                    SpiritualReligious,
                ),
                Attraction::new("Chandni Chowk", "Historic market area", "2-3 hours", "10:00 AM - 8:00 PM", FoodCuisine),
                Attraction::new(
                    "Humayun's Tomb",
                    "Mughal architecture masterpiece",
                    "1-2 hours",
                    "6:00 AM - 6:00 PM",
                    HeritageCulture,
                ),
                Attraction::new(
                    "Akshardham Temple",
                    "Modern Hindu temple complex",
                    "2-3 hours",
                    "9:30 AM - 6:30 PM",
                    SpiritualReligious,
                ),
            ],
        ),
        City::new(
            "Jaipur",
            vec![
                Attraction::new("Amber Palace", "Magnificent fort palace", "2-3 hours", "8:00 AM - 5:30 PM", HeritageCulture),
                Attraction::new("City Palace", "Royal residence complex", "2-3 hours", "9:30 AM - 5:00 PM", HeritageCulture),
                Attraction::new("Hawa Mahal", "Palace of Winds", "1 hour", "9:00 AM - 4:30 PM", HeritageCulture),
                Attraction::new("Jantar Mantar", "Astronomical observatory", "1-2 hours", "9:00 AM - 4:30 PM", HeritageCulture),
                Attraction::new(
                    "Nahargarh Fort",
                    "Hill fort with city views",
                    "2-3 hours",
                    "10:00 AM - 5:30 PM",
                    HeritageCulture,
                ),
                Attraction::new("Johari Bazaar", "Traditional jewelry market", "1-2 hours", "11:00 AM - 8:00 PM", Shopping),
            ],
        ),
        City::new(
            "Kerala (Kochi)",
            vec![
                Attraction::new("Chinese Fishing Nets", "Historic fishing technique", "1 hour", "24 hours", HeritageCulture),
                Attraction::new(
                    "Mattancherry Palace",
                    "Dutch Palace with murals",
                    "1-2 hours",
                    "10:00 AM - 5:00 PM",
                    HeritageCulture,
                ),
                Attraction::new(
                    "St. Francis Church",
                    "Oldest European church in India",
                    "30 minutes",
                    "9:00 AM - 5:30 PM",
                    HeritageCulture,
                ),
                Attraction::new(
                    "Backwater Cruise",
                    "Traditional houseboat experience",
                    "4-6 hours",
                    "6:00 AM - 6:00 PM",
                    NatureWildlife,
                ),
                Attraction::new("Spice Market", "Aromatic spice trading center", "1-2 hours", "9:00 AM - 7:00 PM", FoodCuisine),
                Attraction::new("Kathakali Performance", "Traditional dance drama", "1.5 hours", "6:30 PM - 8:00 PM", ArtCrafts),
            ],
        ),
    ];

    Catalog::new(cities, DEFAULT_CITY).expect("built-in catalog has unique cities and the default one")
}
