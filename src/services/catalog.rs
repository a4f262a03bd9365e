use crate::core::filters::matches_search;
use crate::models::{FilterOption, FilterSpec, Listing, ListingKind};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when resolving listings from the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown {kind} listing: {id}")]
    UnknownListing { kind: ListingKind, id: u32 },
}

/// The record source behind the listing endpoints
///
/// Holds one immutable in-memory collection per listing domain. Stands in
/// for a real backend; the query engine only ever sees slices borrowed
/// from here.
pub struct CatalogStore {
    attractions: Vec<Listing>,
    events: Vec<Listing>,
    restaurants: Vec<Listing>,
}

impl CatalogStore {
    /// Build a catalog seeded with the Macomb County datasets
    pub fn with_mock_data() -> Self {
        Self {
            attractions: mock_attractions(),
            events: mock_events(),
            restaurants: mock_restaurants(),
        }
    }

    /// All listings of one domain, in catalog order
    pub fn listings(&self, kind: ListingKind) -> &[Listing] {
        match kind {
            ListingKind::Attraction => &self.attractions,
            ListingKind::Event => &self.events,
            ListingKind::Restaurant => &self.restaurants,
        }
    }

    /// Look up one listing by domain and id
    pub fn get(&self, kind: ListingKind, id: u32) -> Result<&Listing, CatalogError> {
        self.listings(kind)
            .iter()
            .find(|l| l.id == id)
            .ok_or(CatalogError::UnknownListing { kind, id })
    }

    pub fn contains(&self, kind: ListingKind, id: u32) -> bool {
        self.get(kind, id).is_ok()
    }

    /// Case-insensitive substring search across every domain
    pub fn search(&self, term: &str) -> Vec<&Listing> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        [&self.attractions, &self.events, &self.restaurants]
            .into_iter()
            .flatten()
            .filter(|l| matches_search(l, &needle))
            .collect()
    }

    /// Distinct categories of a domain, in first-appearance order
    pub fn categories(&self, kind: ListingKind) -> Vec<String> {
        let mut seen = Vec::new();
        for listing in self.listings(kind) {
            if !seen.contains(&listing.category) {
                seen.push(listing.category.clone());
            }
        }
        seen
    }

    /// The filter controls a domain's listing page exposes
    pub fn filter_specs(&self, kind: ListingKind) -> Vec<FilterSpec> {
        let category_options: Vec<FilterOption> = self
            .categories(kind)
            .iter()
            .map(|c| FilterOption::new(c, c))
            .collect();

        let category_label = match kind {
            ListingKind::Restaurant => "Cuisine",
            _ => "Category",
        };

        let mut specs = vec![
            FilterSpec::Select {
                key: "category".to_string(),
                label: category_label.to_string(),
                options: category_options,
            },
            FilterSpec::Select {
                key: "sort".to_string(),
                label: "Sort By".to_string(),
                options: sort_options(kind),
            },
            FilterSpec::Checkbox {
                key: "featured".to_string(),
                label: "Featured Only".to_string(),
            },
        ];

        match kind {
            ListingKind::Restaurant => {
                specs.push(FilterSpec::Select {
                    key: "price".to_string(),
                    label: "Price".to_string(),
                    options: vec![
                        FilterOption::new("$", "$"),
                        FilterOption::new("$$", "$$"),
                        FilterOption::new("$$$", "$$$"),
                    ],
                });
            }
            ListingKind::Event => {
                let max_price = self
                    .events
                    .iter()
                    .filter_map(|e| e.price)
                    .fold(0.0_f64, f64::max);
                specs.push(FilterSpec::NumberRange {
                    key: "price".to_string(),
                    label: "Ticket Price".to_string(),
                    min: 0.0,
                    max: max_price,
                });
            }
            ListingKind::Attraction => {}
        }

        specs
    }
}

fn sort_options(kind: ListingKind) -> Vec<FilterOption> {
    match kind {
        ListingKind::Event => vec![
            FilterOption::new("Date: Upcoming First", "date-asc"),
            FilterOption::new("Date: Latest First", "date-desc"),
            FilterOption::new("Price: Low to High", "price-asc"),
            FilterOption::new("Price: High to Low", "price-desc"),
            FilterOption::new("Name (A-Z)", "name-asc"),
            FilterOption::new("Name (Z-A)", "name-desc"),
        ],
        ListingKind::Restaurant => vec![
            FilterOption::new("Rating (High to Low)", "rating-high"),
            FilterOption::new("Rating (Low to High)", "rating-low"),
            FilterOption::new("Name (A-Z)", "name-asc"),
            FilterOption::new("Name (Z-A)", "name-desc"),
            FilterOption::new("Price: Low to High", "price-asc"),
            FilterOption::new("Price: High to Low", "price-desc"),
        ],
        ListingKind::Attraction => vec![
            FilterOption::new("Rating (High to Low)", "rating-high"),
            FilterOption::new("Rating (Low to High)", "rating-low"),
            FilterOption::new("Name (A-Z)", "name-asc"),
            FilterOption::new("Name (Z-A)", "name-desc"),
        ],
    }
}

fn attraction(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    address: &str,
    rating: f64,
    featured: bool,
) -> Listing {
    Listing {
        id,
        kind: ListingKind::Attraction,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        address: address.to_string(),
        rating,
        price_level: None,
        price: None,
        date: None,
        featured,
    }
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: u32,
    title: &str,
    description: &str,
    category: &str,
    address: &str,
    date: Option<NaiveDate>,
    rating: f64,
    price: f64,
    featured: bool,
) -> Listing {
    Listing {
        id,
        kind: ListingKind::Event,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        address: address.to_string(),
        rating,
        price_level: None,
        price: Some(price),
        date,
        featured,
    }
}

#[allow(clippy::too_many_arguments)]
fn restaurant(
    id: u32,
    title: &str,
    description: &str,
    cuisine: &str,
    address: &str,
    rating: f64,
    price_level: u8,
    featured: bool,
) -> Listing {
    Listing {
        id,
        kind: ListingKind::Restaurant,
        title: title.to_string(),
        description: description.to_string(),
        category: cuisine.to_string(),
        address: address.to_string(),
        rating,
        price_level: Some(price_level),
        price: None,
        date: None,
        featured,
    }
}

fn mock_attractions() -> Vec<Listing> {
    vec![
        attraction(
            1,
            "Macomb Recreation Center",
            "Modern recreational facility with pools, fitness areas, and sports courts for the entire family.",
            "Recreation",
            "20699 Macomb St, Macomb, MI",
            4.7,
            true,
        ),
        attraction(
            2,
            "Stony Creek Metropark",
            "Sprawling 4,500-acre park featuring hiking trails, beaches, golf course and winter activities.",
            "Outdoors",
            "4300 Main Park Rd, Shelby Township, MI",
            4.8,
            false,
        ),
        attraction(
            3,
            "Partridge Creek Mall",
            "Open-air shopping center with upscale stores, restaurants and pet-friendly atmosphere.",
            "Shopping",
            "17420 Hall Rd, Clinton Township, MI",
            4.6,
            false,
        ),
        attraction(
            4,
            "Macomb Center for the Performing Arts",
            "Premier venue hosting concerts, Broadway shows, and cultural performances throughout the year.",
            "Arts",
            "44575 Garfield Rd, Clinton Township, MI",
            4.5,
            false,
        ),
        attraction(
            5,
            "Freedom Hill County Park",
            "Outdoor amphitheater and recreational park with concerts, festivals, and outdoor activities.",
            "Outdoors",
            "14900 Metropolitan Pkwy, Sterling Heights, MI",
            4.3,
            false,
        ),
        attraction(
            6,
            "Lake St. Clair",
            "Beautiful freshwater lake perfect for boating, fishing, and waterfront recreation.",
            "Outdoors",
            "Macomb County, MI",
            4.9,
            false,
        ),
        attraction(
            7,
            "Macomb Orchard Trail",
            "24-mile linear park and trail for biking, walking, and running through scenic landscapes.",
            "Recreation",
            "Macomb County, MI",
            4.7,
            false,
        ),
        attraction(
            8,
            "Macomb Township Historical Museum",
            "Local museum showcasing the history and heritage of Macomb Township with interactive exhibits.",
            "Museum",
            "51828 Romeo Plank Rd, Macomb, MI",
            4.2,
            false,
        ),
        attraction(
            9,
            "Cherry Creek Golf Club",
            "Premier 18-hole championship golf course with scenic views and country club amenities.",
            "Recreation",
            "52000 Cherry Creek Dr, Shelby Township, MI",
            4.6,
            false,
        ),
        attraction(
            10,
            "Wolcott Mill Metropark",
            "Historic working farm and mill with educational programs, hiking trails, and equestrian facilities.",
            "Historic",
            "65775 Wolcott Rd, Ray Township, MI",
            4.4,
            false,
        ),
        attraction(
            11,
            "Jimmy John's Field",
            "Minor league baseball stadium hosting United Shore Professional Baseball League games.",
            "Sports",
            "7171 Auburn Rd, Utica, MI",
            4.7,
            false,
        ),
        attraction(
            12,
            "Michigan Transit Museum",
            "Railroad history museum featuring vintage trains, equipment, and scenic train rides.",
            "Museum",
            "200 Grand Ave, Mount Clemens, MI",
            4.3,
            false,
        ),
    ]
}

fn mock_events() -> Vec<Listing> {
    vec![
        event(
            1,
            "Macomb Summer Music Festival",
            "Annual outdoor music festival featuring local and national acts across three stages with food vendors and family activities.",
            "Festival",
            "14900 Metropolitan Pkwy, Sterling Heights, MI",
            NaiveDate::from_ymd_opt(2025, 7, 15),
            4.8,
            25.0,
            true,
        ),
        event(
            2,
            "Macomb Food & Wine Festival",
            "Culinary showcase featuring local restaurants, wineries, and breweries with cooking demonstrations and tastings.",
            "Food",
            "44575 Garfield Rd, Clinton Township, MI",
            NaiveDate::from_ymd_opt(2025, 5, 22),
            4.6,
            45.0,
            false,
        ),
        event(
            3,
            "Spring Arts & Crafts Fair",
            "Seasonal market featuring local artisans, handmade goods, and unique crafts from across the region.",
            "Market",
            "14500 E 12 Mile Rd, Warren, MI",
            NaiveDate::from_ymd_opt(2025, 4, 18),
            4.4,
            5.0,
            false,
        ),
        event(
            4,
            "Macomb County Fair",
            "Annual county fair featuring agricultural exhibits, carnival rides, entertainment, and traditional fair food.",
            "Fair",
            "24580 Armada Ridge Rd, Armada, MI",
            NaiveDate::from_ymd_opt(2025, 7, 30),
            4.5,
            12.0,
            false,
        ),
        event(
            5,
            "Classic Car Show",
            "Showcase of vintage and classic automobiles with awards, music, and automotive memorabilia.",
            "Automotive",
            "Downtown Mount Clemens, MI",
            NaiveDate::from_ymd_opt(2025, 6, 12),
            4.7,
            0.0,
            false,
        ),
        event(
            6,
            "Macomb Symphony Orchestra: Summer Concert",
            "Evening of classical music performed by the Macomb Symphony Orchestra featuring guest soloists.",
            "Concert",
            "44575 Garfield Rd, Clinton Township, MI",
            NaiveDate::from_ymd_opt(2025, 6, 28),
            4.8,
            35.0,
            false,
        ),
        event(
            7,
            "Community Volunteer Day",
            "Township-wide volunteer event with projects including park cleanups, community garden planting, and senior assistance.",
            "Community",
            "Macomb Township, MI",
            NaiveDate::from_ymd_opt(2025, 5, 10),
            4.6,
            0.0,
            false,
        ),
        event(
            8,
            "Farmers Market Opening Day",
            "Seasonal opening of the weekly farmers market with local produce, baked goods, and artisanal products.",
            "Market",
            "20699 Macomb St, Macomb, MI",
            NaiveDate::from_ymd_opt(2025, 5, 3),
            4.4,
            0.0,
            false,
        ),
        event(
            9,
            "Summer Movie in the Park",
            "Free outdoor screening of family films with pre-movie activities and concessions.",
            "Entertainment",
            "19449 25 Mile Rd, Macomb, MI",
            NaiveDate::from_ymd_opt(2025, 8, 5),
            4.5,
            0.0,
            false,
        ),
        event(
            10,
            "Run for the Parks 5K",
            "Annual charity run/walk benefiting local parks with medals, refreshments, and family activities.",
            "Sports",
            "4300 Main Park Rd, Shelby Township, MI",
            NaiveDate::from_ymd_opt(2025, 6, 7),
            4.7,
            30.0,
            false,
        ),
        event(
            11,
            "Business Expo & Networking Event",
            "Local business showcase with exhibitors, workshops, and networking opportunities.",
            "Business",
            "14500 E 12 Mile Rd, Warren, MI",
            NaiveDate::from_ymd_opt(2025, 9, 17),
            4.3,
            10.0,
            false,
        ),
        event(
            12,
            "Fall Harvest Festival",
            "Celebration of autumn with pumpkin carving, hayrides, cider, and seasonal treats.",
            "Festival",
            "65775 Wolcott Rd, Ray Township, MI",
            NaiveDate::from_ymd_opt(2025, 10, 9),
            4.6,
            8.0,
            false,
        ),
    ]
}

fn mock_restaurants() -> Vec<Listing> {
    vec![
        restaurant(
            1,
            "Bonefish Grill",
            "Upscale seafood restaurant with market-fresh fish and wood-grilled specialties in a polished setting.",
            "Seafood",
            "17380 Hall Rd, Clinton Township, MI",
            4.7,
            3,
            true,
        ),
        restaurant(
            2,
            "Chesterfield Tavern",
            "Neighborhood pub with craft beers, comfort food, and a welcoming atmosphere.",
            "American",
            "21421 21 Mile Rd, Macomb, MI",
            4.5,
            2,
            false,
        ),
        restaurant(
            3,
            "Testa Barra",
            "Modern Italian restaurant serving fresh pasta, wood-fired pizzas, and craft cocktails in a stylish space.",
            "Italian",
            "48824 Romeo Plank Rd, Macomb, MI",
            4.8,
            3,
            true,
        ),
        restaurant(
            4,
            "Bangkok Cuisine",
            "Authentic Thai dishes served in a relaxed setting with colorful decor.",
            "Thai",
            "45125 Hayes Rd, Macomb, MI",
            4.3,
            2,
            false,
        ),
        restaurant(
            5,
            "Golden Chopsticks",
            "Family-owned Chinese restaurant offering traditional dishes and dim sum in a comfortable setting.",
            "Chinese",
            "18230 Hall Rd, Macomb, MI",
            4.2,
            2,
            false,
        ),
        restaurant(
            6,
            "Mi Pueblo",
            "Vibrant Mexican restaurant with a vast menu of authentic dishes, margaritas, and festive atmosphere.",
            "Mexican",
            "47720 Van Dyke Ave, Shelby Township, MI",
            4.6,
            2,
            true,
        ),
        restaurant(
            7,
            "Olive Garden",
            "Family-friendly restaurant chain featuring Italian-American cuisine with unlimited breadsticks.",
            "Italian",
            "45655 Utica Park Blvd, Utica, MI",
            4.1,
            2,
            false,
        ),
        restaurant(
            8,
            "Sushi Zen",
            "Modern Japanese restaurant with a broad selection of sushi, sashimi, and specialty rolls.",
            "Japanese",
            "45120 Garfield Rd, Clinton Township, MI",
            4.7,
            3,
            true,
        ),
        restaurant(
            9,
            "Red Olive",
            "Mediterranean and American dishes served in a casual, family-friendly environment.",
            "Mediterranean",
            "51110 Van Dyke Ave, Shelby Township, MI",
            4.2,
            2,
            false,
        ),
        restaurant(
            10,
            "Andiamo",
            "Upscale Italian restaurant known for its handmade pasta and extensive wine list.",
            "Italian",
            "7096 E 14 Mile Rd, Warren, MI",
            4.6,
            3,
            true,
        ),
        restaurant(
            11,
            "Pacific Rim",
            "Pan-Asian cuisine featuring Chinese, Thai and Japanese flavors in a modern space.",
            "Asian",
            "48675 Van Dyke Ave, Shelby Township, MI",
            4.3,
            2,
            false,
        ),
        restaurant(
            12,
            "The Pantry",
            "Charming breakfast and lunch spot serving homestyle cooking and fresh-baked goods.",
            "American",
            "53110 Hayes Rd, Macomb, MI",
            4.8,
            1,
            false,
        ),
        restaurant(
            13,
            "Three Brothers Pizzeria",
            "Family-owned pizzeria serving hand-tossed pies, calzones, and Italian favorites.",
            "Italian",
            "42065 Garfield Rd, Clinton Township, MI",
            4.5,
            1,
            false,
        ),
        restaurant(
            14,
            "Sahara Mediterranean Grill",
            "Middle Eastern restaurant known for flavorful dishes, fresh bread, and generous portions.",
            "Mediterranean",
            "16415 Hall Rd, Macomb, MI",
            4.6,
            2,
            true,
        ),
        restaurant(
            15,
            "Brown Iron Brewhouse",
            "Rustic brewery and restaurant offering craft beers and smokehouse meats.",
            "American",
            "57695 Van Dyke Ave, Washington, MI",
            4.7,
            2,
            true,
        ),
        restaurant(
            16,
            "Noodles & Company",
            "Fast-casual chain offering international noodle and pasta dishes in a friendly environment.",
            "International",
            "50670 Gratiot Ave, Chesterfield, MI",
            4.0,
            1,
            false,
        ),
    ]
}
