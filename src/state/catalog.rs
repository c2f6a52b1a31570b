use super::data::Movie;
use super::storage::{KeyValueStore, CATALOG_KEY};
use crate::error::AppResult;

/// The ordered movie catalog, newest first.
///
/// The catalog is always persisted as a whole under [`CATALOG_KEY`].
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    movies: Vec<Movie>,
}

impl Catalog {
    /// Rehydrate the catalog from the durable store.
    ///
    /// - Absent key: the seed list is returned and persisted.
    /// - Malformed JSON: the seed list is used in memory and the stored value
    ///   is left alone until the next successful mutation overwrites it.
    pub fn load(store: &mut dyn KeyValueStore) -> AppResult<Self> {
        match store.get(CATALOG_KEY)? {
            Some(json) => match serde_json::from_str::<Vec<Movie>>(&json) {
                Ok(movies) => {
                    tracing::info!("🎬 Loaded {} movies from store", movies.len());
                    Ok(Catalog { movies })
                }
                Err(err) => {
                    tracing::warn!("⚠️  Stored catalog is malformed ({err}), using seed catalog");
                    Ok(Catalog { movies: Movie::seed() })
                }
            },
            None => {
                let catalog = Catalog { movies: Movie::seed() };
                catalog.save(store)?;
                tracing::info!("🌱 Seeded catalog with {} movies", catalog.len());
                Ok(catalog)
            }
        }
    }

    /// Overwrite the persisted catalog unconditionally
    pub fn save(&self, store: &mut dyn KeyValueStore) -> AppResult<()> {
        Self::persist(&self.movies, store)
    }

    fn persist(movies: &[Movie], store: &mut dyn KeyValueStore) -> AppResult<()> {
        let json = serde_json::to_string(movies)?;
        store.set(CATALOG_KEY, &json)
    }

    /// Prepend `movie` and persist the result.
    ///
    /// The in-memory catalog only changes once the write succeeded.
    /// Identifier uniqueness is the caller's responsibility.
    pub fn add(&mut self, movie: Movie, store: &mut dyn KeyValueStore) -> AppResult<()> {
        let mut next = Vec::with_capacity(self.movies.len() + 1);
        next.push(movie);
        next.extend(self.movies.iter().cloned());

        Self::persist(&next, store)?;
        self.movies = next;
        Ok(())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Top entry, shown in the hero banner
    pub fn featured(&self) -> Option<&Movie> {
        self.movies.first()
    }

    pub fn get(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::state::data::Category;
    use crate::state::storage::{MemoryStore, SqliteStore};

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: id.into(),
            title: title.into(),
            description: "desc".into(),
            thumbnail_url: format!("https://img.example/{id}.jpg"),
            video_url: format!("https://video.example/{id}.mp4"),
            category: Category::Drama,
            year: 2021,
            duration: "1h 30m".into(),
            rating: 3.5,
            ai_review: None,
        }
    }

    /// Store whose writes always fail
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, key: &str) -> AppResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Io(std::io::Error::other("read-only")))
        }
    }

    #[test]
    fn test_empty_store_is_seeded_and_persisted() {
        let mut store = MemoryStore::new();
        let catalog = Catalog::load(&mut store).unwrap();

        assert_eq!(catalog.movies(), Movie::seed().as_slice());
        assert!(store.get(CATALOG_KEY).unwrap().is_some());
    }

    #[test]
    fn test_stored_empty_list_stays_empty() {
        let mut store = MemoryStore::new();
        store.set(CATALOG_KEY, "[]").unwrap();

        let catalog = Catalog::load(&mut store).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.featured().is_none());
    }

    #[test]
    fn test_malformed_data_falls_back_without_overwriting() {
        let mut store = MemoryStore::new();
        store.set(CATALOG_KEY, "{not json").unwrap();

        let catalog = Catalog::load(&mut store).unwrap();
        assert_eq!(catalog.len(), 3);
        assert_eq!(store.get(CATALOG_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_add_prepends_and_keeps_order() {
        let mut store = MemoryStore::new();
        let mut catalog = Catalog::load(&mut store).unwrap();
        let before: Vec<String> = catalog.movies().iter().map(|m| m.id.clone()).collect();

        catalog.add(movie("new", "Fresh Upload"), &mut store).unwrap();

        assert_eq!(catalog.featured().unwrap().id, "new");
        let after: Vec<String> = catalog.movies()[1..].iter().map(|m| m.id.clone()).collect();
        assert_eq!(after, before);

        let reloaded = Catalog::load(&mut store).unwrap();
        assert_eq!(reloaded, catalog);
    }

    #[test]
    fn test_failed_write_keeps_prior_state() {
        let mut seeded = MemoryStore::new();
        Catalog::load(&mut seeded).unwrap();
        let mut store = ReadOnlyStore(seeded);

        let mut catalog = Catalog::load(&mut store).unwrap();
        let result = catalog.add(movie("x", "Lost"), &mut store);

        assert!(result.is_err());
        assert_eq!(catalog.len(), 3);
        assert!(catalog.get("x").is_none());
    }

    #[test]
    fn test_round_trip_across_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roinmovies.db");

        let saved = {
            let mut store = SqliteStore::open(&path).unwrap();
            let mut catalog = Catalog::load(&mut store).unwrap();
            let mut reviewed = movie("a", "Reviewed");
            reviewed.ai_review = Some("Sharp.".into());
            catalog.add(reviewed, &mut store).unwrap();
            catalog.add(movie("b", "Plain"), &mut store).unwrap();
            catalog
        };

        let mut store = SqliteStore::open(&path).unwrap();
        let reloaded = Catalog::load(&mut store).unwrap();
        assert_eq!(reloaded, saved);
        assert_eq!(reloaded.get("a").unwrap().ai_review.as_deref(), Some("Sharp."));
    }
}
