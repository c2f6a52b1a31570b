//! Upload workflow form state.

use chrono::Datelike;
use thiserror::Error;

use super::data::{Category, Movie};

/// Validation failures shown inline in the upload dialog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("A video file or link is required")]
    MissingVideo,
    #[error("Year must be a number between 1888 and {0}")]
    InvalidYear(i32),
    #[error("Rating must be a number between 0 and 5")]
    InvalidRating,
    #[error("Could not save the movie: {0}")]
    Storage(String),
}

/// Editable fields of the upload dialog, kept as typed text
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm {
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub video_url: String,
    pub category: Category,
    pub year: String,
    pub duration: String,
    pub rating: String,
    pub ai_review: String,
    pub error: Option<FormError>,
}

impl Default for UploadForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            thumbnail_url: String::new(),
            video_url: String::new(),
            category: Category::Action,
            year: current_year().to_string(),
            duration: String::new(),
            rating: "4.5".into(),
            ai_review: String::new(),
            error: None,
        }
    }
}

/// Single text field of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Description,
    Thumbnail,
    Video,
    Year,
    Duration,
    Rating,
    Review,
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl UploadForm {
    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
            Field::Thumbnail => &mut self.thumbnail_url,
            Field::Video => &mut self.video_url,
            Field::Year => &mut self.year,
            Field::Duration => &mut self.duration,
            Field::Rating => &mut self.rating,
            Field::Review => &mut self.ai_review,
        };
        *slot = value;
        self.error = None;
    }

    /// Validate the form and build a movie with a fresh identifier.
    pub fn build(&self) -> Result<Movie, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let video_url = self.video_url.trim();
        if video_url.is_empty() {
            return Err(FormError::MissingVideo);
        }

        let max_year = current_year() + 5;
        let year: i32 = self
            .year
            .trim()
            .parse()
            .ok()
            .filter(|year| (1888..=max_year).contains(year))
            .ok_or(FormError::InvalidYear(max_year))?;

        let rating: f32 = self
            .rating
            .trim()
            .parse()
            .ok()
            .filter(|rating: &f32| (0.0..=5.0).contains(rating))
            .ok_or(FormError::InvalidRating)?;

        let review = self.ai_review.trim();

        Ok(Movie {
            id: uuid::Uuid::now_v7().to_string(),
            title: title.to_string(),
            description: self.description.trim().to_string(),
            thumbnail_url: self.thumbnail_url.trim().to_string(),
            video_url: video_url.to_string(),
            category: self.category,
            year,
            duration: self.duration.trim().to_string(),
            rating,
            ai_review: (!review.is_empty()).then(|| review.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> UploadForm {
        let mut form = UploadForm::default();
        form.set(Field::Title, "  Midnight Run ".into());
        form.set(Field::Video, "https://video.example/run.mp4".into());
        form.set(Field::Thumbnail, "https://img.example/run.jpg".into());
        form.set(Field::Duration, "1h 50m".into());
        form.set(Field::Year, "2019".into());
        form.category = Category::Comedy;
        form
    }

    #[test]
    fn test_build_populates_movie() {
        let movie = filled().build().unwrap();

        assert_eq!(movie.title, "Midnight Run");
        assert_eq!(movie.category, Category::Comedy);
        assert_eq!(movie.year, 2019);
        assert_eq!(movie.rating, 4.5);
        assert_eq!(movie.ai_review, None);
        assert!(!movie.id.is_empty());
    }

    #[test]
    fn test_each_build_gets_a_fresh_id() {
        let form = filled();
        let a = form.build().unwrap();
        let b = form.build().unwrap();

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_review_is_optional() {
        let mut form = filled();
        form.set(Field::Review, "Quietly brilliant.".into());

        assert_eq!(form.build().unwrap().ai_review.as_deref(), Some("Quietly brilliant."));
    }

    #[test]
    fn test_required_fields() {
        let mut form = filled();
        form.set(Field::Title, "   ".into());
        assert_eq!(form.build(), Err(FormError::MissingTitle));

        let mut form = filled();
        form.set(Field::Video, String::new());
        assert_eq!(form.build(), Err(FormError::MissingVideo));
    }

    #[test]
    fn test_numeric_fields_are_checked() {
        let mut form = filled();
        form.set(Field::Year, "soon".into());
        assert!(matches!(form.build(), Err(FormError::InvalidYear(_))));

        let mut form = filled();
        form.set(Field::Rating, "7".into());
        assert_eq!(form.build(), Err(FormError::InvalidRating));
    }

    #[test]
    fn test_editing_clears_error() {
        let mut form = filled();
        form.error = Some(FormError::MissingTitle);
        form.set(Field::Title, "Back".into());

        assert_eq!(form.error, None);
    }
}
