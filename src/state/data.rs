//! Shared data structures for the application state
//!
//! These structs represent the data model that flows between
//! the storage layer and the UI layer.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of movie categories
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Action,
    Comedy,
    Drama,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    Documentary,
    Animation,
}

impl Category {
    /// Every category, in chip order
    pub const ALL: [Category; 8] = [
        Category::Action,
        Category::Comedy,
        Category::Drama,
        Category::Horror,
        Category::SciFi,
        Category::Thriller,
        Category::Documentary,
        Category::Animation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Action => "Action",
            Category::Comedy => "Comedy",
            Category::Drama => "Drama",
            Category::Horror => "Horror",
            Category::SciFi => "Sci-Fi",
            Category::Thriller => "Thriller",
            Category::Documentary => "Documentary",
            Category::Animation => "Animation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Active category selection: the "All" sentinel or one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Chips shown in the category row: "All" first, then every category
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All Movies",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(active) => active == category,
        }
    }
}

/// A single movie in the catalog
///
/// Field names follow the persisted JSON layout (camelCase).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Unique identifier within the catalog
    pub id: String,
    pub title: String,
    pub description: String,
    /// Thumbnail reference (http(s) URL or local path)
    pub thumbnail_url: String,
    /// Video reference handed to the media player
    pub video_url: String,
    pub category: Category,
    pub year: i32,
    /// Display string, e.g. "2h 12m"
    pub duration: String,
    /// Informational only, 0.0 to 5.0
    pub rating: f32,
    /// Optional short review blurb
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_review: Option<String>,
}

impl Movie {
    /// Catalog shown on first run
    pub fn seed() -> Vec<Movie> {
        vec![
            Movie {
                id: "1".into(),
                title: "Interstellar Odyssey".into(),
                description: "A journey beyond the stars to save humanity from a dying Earth.".into(),
                thumbnail_url: "https://picsum.photos/seed/interstellar/800/450".into(),
                video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4".into(),
                category: Category::SciFi,
                year: 2024,
                duration: "2h 45m".into(),
                rating: 4.8,
                ai_review: Some(
                    "A visual masterpiece that redefines the boundaries of space exploration cinema.".into(),
                ),
            },
            Movie {
                id: "2".into(),
                title: "The Silent Echo".into(),
                description: "In a world where sound is deadly, one family must survive in total silence.".into(),
                thumbnail_url: "https://picsum.photos/seed/echo/800/450".into(),
                video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4".into(),
                category: Category::Thriller,
                year: 2023,
                duration: "1h 38m".into(),
                rating: 4.5,
                ai_review: Some("Tense, gripping, and masterfully paced. A masterclass in suspense.".into()),
            },
            Movie {
                id: "3".into(),
                title: "Neon Nights".into(),
                description: "A detective unravels a conspiracy in a cyberpunk metropolis.".into(),
                thumbnail_url: "https://picsum.photos/seed/neon/800/450".into(),
                video_url: "https://storage.googleapis.com/gtv-videos-bucket/sample/ForBiggerBlazes.mp4".into(),
                category: Category::Action,
                year: 2024,
                duration: "2h 12m".into(),
                rating: 4.2,
                ai_review: Some("Visually stunning with a heartbeat of pure adrenaline.".into()),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_uses_camel_case_and_display_labels() {
        let movie = Movie::seed().remove(0);
        let value = serde_json::to_value(&movie).unwrap();

        assert_eq!(value["thumbnailUrl"], "https://picsum.photos/seed/interstellar/800/450");
        assert_eq!(value["category"], "Sci-Fi");
        assert!(value.get("aiReview").is_some());
    }

    #[test]
    fn test_missing_review_is_none() {
        let json = r#"{
            "id": "abc", "title": "Quiet", "description": "",
            "thumbnailUrl": "", "videoUrl": "v.mp4", "category": "Drama",
            "year": 2020, "duration": "1h", "rating": 3.0
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();

        assert_eq!(movie.ai_review, None);
        assert_eq!(movie.category, Category::Drama);
    }

    #[test]
    fn test_chips_start_with_all() {
        let chips: Vec<_> = CategoryFilter::chips().collect();

        assert_eq!(chips.len(), Category::ALL.len() + 1);
        assert_eq!(chips[0], CategoryFilter::All);
        assert_eq!(chips[0].label(), "All Movies");
        assert_eq!(chips[5].label(), "Sci-Fi");
    }
}
