//! Article pool registry
//!
//! The built-in pool is initialized once per process and never mutated.
//! A replacement pool can be loaded from a JSON file at startup; it goes
//! through the same validation as any other pool.

use crate::models::{ArticlePool, Category, PoolError};
use std::path::Path;
use std::sync::OnceLock;
use tokio::fs;

static BUILTIN_POOL: OnceLock<ArticlePool> = OnceLock::new();

/// The compiled-in article pool
pub fn builtin_pool() -> &'static ArticlePool {
    BUILTIN_POOL.get_or_init(|| ArticlePool::from_trusted(builtin_categories()))
}

fn builtin_categories() -> Vec<Category> {
    BUILTIN_CATEGORIES
        .iter()
        .map(|(name, articles, weight)| Category::new(*name, articles, *weight))
        .collect()
}

/// Load and validate a pool from a JSON array of categories
pub async fn load_pool<P: AsRef<Path>>(path: P) -> Result<ArticlePool, PoolError> {
    let path = path.as_ref();
    tracing::info!("Loading article pool from {}", path.display());

    let content = fs::read_to_string(path).await?;
    let pool = parse_pool(&content)?;

    tracing::info!(
        "Loaded {} categories ({} articles, total weight {})",
        pool.categories().len(),
        pool.all_articles().len(),
        pool.total_weight()
    );
    Ok(pool)
}

/// Parse and validate a pool from JSON text
pub fn parse_pool(json: &str) -> Result<ArticlePool, PoolError> {
    let categories: Vec<Category> = serde_json::from_str(json)?;
    ArticlePool::new(categories)
}

/// (name, articles, weight) in selection order
const BUILTIN_CATEGORIES: &[(&str, &[&str], u32)] = &[
    ("Science & Technology", SCIENCE_TECHNOLOGY, 25),
    ("History & Culture", HISTORY_CULTURE, 20),
    ("Geography & Nature", GEOGRAPHY_NATURE, 20),
    ("Arts & Literature", ARTS_LITERATURE, 15),
    ("Landmarks & Monuments", LANDMARKS_MONUMENTS, 10),
    ("Space & Astronomy", SPACE_ASTRONOMY, 10),
];

const SCIENCE_TECHNOLOGY: &[&str] = &[
    "Albert Einstein",
    "Marie Curie",
    "Isaac Newton",
    "Charles Darwin",
    "Nikola Tesla",
    "DNA",
    "Photosynthesis",
    "Black hole",
    "Quantum mechanics",
    "Artificial intelligence",
    "Internet",
    "Computer",
    "Electricity",
    "Antibiotics",
    "Telescope",
    "Microscope",
    "Periodic table",
    "Theory of relativity",
    "Evolution",
    "Genetics",
];

const HISTORY_CULTURE: &[&str] = &[
    "Ancient Rome",
    "Ancient Egypt",
    "World War II",
    "Renaissance",
    "Industrial Revolution",
    "French Revolution",
    "American Civil War",
    "Cold War",
    "Medieval period",
    "Byzantine Empire",
    "Silk Road",
    "Crusades",
    "Age of Exploration",
    "Colonialism",
    "Enlightenment",
    "Reformation",
    "Russian Revolution",
    "Great Depression",
    "Holocaust",
    "Berlin Wall",
];

const GEOGRAPHY_NATURE: &[&str] = &[
    "Amazon rainforest",
    "Mount Everest",
    "Sahara Desert",
    "Great Barrier Reef",
    "Antarctica",
    "Pacific Ocean",
    "Nile River",
    "Grand Canyon",
    "Yellowstone National Park",
    "Galapagos Islands",
    "Himalayas",
    "Arctic",
    "Volcano",
    "Earthquake",
    "Climate change",
    "Ecosystem",
    "Biodiversity",
    "Coral reef",
    "Rainforest",
    "Tundra",
];

const ARTS_LITERATURE: &[&str] = &[
    "Leonardo da Vinci",
    "William Shakespeare",
    "Ludwig van Beethoven",
    "Pablo Picasso",
    "Vincent van Gogh",
    "Mozart",
    "Michelangelo",
    "Renaissance art",
    "Impressionism",
    "Classical music",
    "Opera",
    "Poetry",
    "Novel",
    "Theater",
    "Cinema",
    "Photography",
    "Sculpture",
    "Architecture",
    "Dance",
    "Literature",
];

const LANDMARKS_MONUMENTS: &[&str] = &[
    "Great Wall of China",
    "Pyramids of Giza",
    "Taj Mahal",
    "Machu Picchu",
    "Colosseum",
    "Stonehenge",
    "Eiffel Tower",
    "Statue of Liberty",
    "Big Ben",
    "Sydney Opera House",
    "Christ the Redeemer",
    "Petra",
    "Angkor Wat",
    "Acropolis of Athens",
    "Tower of London",
    "Notre-Dame de Paris",
    "Sagrada Familia",
    "Mount Rushmore",
    "Golden Gate Bridge",
    "Brooklyn Bridge",
];

const SPACE_ASTRONOMY: &[&str] = &[
    "Solar System",
    "Moon",
    "Mars",
    "Jupiter",
    "Saturn",
    "Sun",
    "Milky Way",
    "Universe",
    "Big Bang",
    "International Space Station",
    "Apollo 11",
    "Moon landing",
    "Hubble Space Telescope",
    "NASA",
    "Astronaut",
    "Satellite",
    "Comet",
    "Asteroid",
    "Galaxy",
    "Constellation",
];
