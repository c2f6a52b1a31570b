//! Category and title search over the catalog.

use super::data::{CategoryFilter, Movie};

/// Records matching both the category and the search text, in catalog order.
///
/// Search is a case-insensitive substring match on the title; an empty query
/// matches everything.
pub fn filter<'a>(movies: &'a [Movie], category: CategoryFilter, query: &str) -> Vec<&'a Movie> {
    let needle = query.to_lowercase();
    movies
        .iter()
        .filter(|movie| category.matches(movie.category))
        .filter(|movie| needle.is_empty() || movie.title.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;

    fn ids(movies: &[&Movie]) -> Vec<String> {
        movies.iter().map(|m| m.id.clone()).collect()
    }

    fn mixed_catalog() -> Vec<Movie> {
        let mut movies = Movie::seed();
        let mut extra = movies[2].clone();
        extra.id = "4".into();
        extra.title = "NEON Harbor".into();
        extra.category = Category::Thriller;
        movies.insert(1, extra);
        movies
    }

    #[test]
    fn test_all_with_empty_query_is_identity() {
        for catalog in [Vec::new(), Movie::seed(), mixed_catalog()] {
            let visible = filter(&catalog, CategoryFilter::All, "");
            assert_eq!(visible.into_iter().cloned().collect::<Vec<_>>(), catalog);
        }
    }

    #[test]
    fn test_category_keeps_exactly_matching_records_in_order() {
        let catalog = mixed_catalog();

        for category in Category::ALL {
            let visible = filter(&catalog, CategoryFilter::Only(category), "");
            let expected: Vec<String> = catalog
                .iter()
                .filter(|m| m.category == category)
                .map(|m| m.id.clone())
                .collect();

            assert!(visible.iter().all(|m| m.category == category));
            assert_eq!(ids(&visible), expected);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let catalog = mixed_catalog();

        let visible = filter(&catalog, CategoryFilter::All, "nEoN");
        assert_eq!(ids(&visible), vec!["4", "3"]);

        let visible = filter(&catalog, CategoryFilter::All, "echo");
        assert_eq!(ids(&visible), vec!["2"]);

        assert!(filter(&catalog, CategoryFilter::All, "zzz").is_empty());
    }

    #[test]
    fn test_category_and_search_combine() {
        let catalog = mixed_catalog();

        let visible = filter(&catalog, CategoryFilter::Only(Category::Thriller), "neon");
        assert_eq!(ids(&visible), vec!["4"]);
    }

    #[test]
    fn test_seed_scenario() {
        let catalog = Movie::seed();

        let thrillers = filter(&catalog, CategoryFilter::Only(Category::Thriller), "");
        assert_eq!(thrillers.len(), 1);
        assert_eq!(thrillers[0].title, "The Silent Echo");

        let neon = filter(&catalog, CategoryFilter::All, "neon");
        assert_eq!(neon.len(), 1);
        assert_eq!(neon[0].title, "Neon Nights");
    }
}
