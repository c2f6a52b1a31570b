//! Top-level coordinator.
//!
//! `Studio` owns every store and piece of state. The UI layer calls one method
//! per user intent and turns the returned [`Effect`]s into tasks or dialogs.

use super::access::{submit_pin, AccessControl, PinDialog, PinOutcome};
use super::catalog::Catalog;
use super::data::{Category, CategoryFilter, Movie};
use super::filter::filter;
use super::storage::KeyValueStore;
use super::upload::{Field, FormError, UploadForm};
use crate::error::{AppError, AppResult};

/// Side effects requested by a state transition
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Show a short notification to the user
    Notify(String),
    /// Resolve the thumbnail of a movie
    LoadThumbnail { id: String, reference: String },
    /// Hand a video reference to the media player
    OpenPlayer(String),
}

impl Effect {
    fn load_thumbnail(movie: &Movie) -> Self {
        Effect::LoadThumbnail {
            id: movie.id.clone(),
            reference: movie.thumbnail_url.clone(),
        }
    }
}

pub struct Studio {
    durable: Box<dyn KeyValueStore>,
    session: Box<dyn KeyValueStore>,
    catalog: Catalog,
    access: AccessControl,
    category: CategoryFilter,
    search: String,
    selected: Option<String>,
    upload: Option<UploadForm>,
    pin_dialog: PinDialog,
    /// Last non-fatal failure, shown in the status line
    status: Option<String>,
}

impl Studio {
    /// Rehydrate catalog and access state from the given stores.
    pub fn new(
        mut durable: Box<dyn KeyValueStore>,
        session: Box<dyn KeyValueStore>,
        default_pin: &str,
    ) -> AppResult<Self> {
        let catalog = Catalog::load(&mut *durable)?;
        let access = AccessControl::load(&mut *durable, &*session, default_pin)?;

        Ok(Self {
            durable,
            session,
            catalog,
            access,
            category: CategoryFilter::All,
            search: String::new(),
            selected: None,
            upload: None,
            pin_dialog: PinDialog::Closed,
            status: None,
        })
    }

    /// Thumbnail loads for the whole catalog
    pub fn startup_effects(&self) -> Vec<Effect> {
        self.catalog.movies().iter().map(Effect::load_thumbnail).collect()
    }

    // ========== Derived view state ==========

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn visible(&self) -> Vec<&Movie> {
        filter(self.catalog.movies(), self.category, &self.search)
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_admin(&self) -> bool {
        self.access.is_unlocked()
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_deref().and_then(|id| self.catalog.get(id))
    }

    pub fn upload_form(&self) -> Option<&UploadForm> {
        self.upload.as_ref()
    }

    pub fn pin_dialog(&self) -> &PinDialog {
        &self.pin_dialog
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    // ========== Browsing ==========

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_search(&mut self, query: String) {
        self.search = query;
    }

    pub fn select(&mut self, id: &str) {
        if self.catalog.get(id).is_some() {
            self.selected = Some(id.to_string());
        }
    }

    /// Open the playback view for the hero entry
    pub fn play_featured(&mut self) {
        self.selected = self.catalog.featured().map(|movie| movie.id.clone());
    }

    pub fn back(&mut self) {
        self.selected = None;
    }

    /// Start playback of the selected movie
    pub fn play_selected(&self) -> Vec<Effect> {
        self.selected()
            .map(|movie| vec![Effect::OpenPlayer(movie.video_url.clone())])
            .unwrap_or_default()
    }

    // ========== Owner mode ==========

    /// Leave owner mode, or open the login dialog to enter it
    pub fn toggle_admin(&mut self) {
        if self.access.is_unlocked() {
            let result = self.access.lock(&mut *self.session);
            self.record(result);
            self.upload = None;
        } else {
            self.pin_dialog = PinDialog::login();
        }
    }

    /// Open the PIN change dialog; owner mode only
    pub fn open_pin_change(&mut self) {
        if self.access.is_unlocked() {
            self.pin_dialog = PinDialog::change();
        }
    }

    pub fn pin_input(&mut self, value: String) {
        self.pin_dialog.set_input(value);
    }

    pub fn submit_pin(&mut self) -> Vec<Effect> {
        let outcome = submit_pin(
            &mut self.pin_dialog,
            &mut self.access,
            &mut *self.durable,
            &mut *self.session,
        );

        match self.record(outcome) {
            Some(PinOutcome::PinChanged) => {
                vec![Effect::Notify("Security code updated successfully!".into())]
            }
            _ => Vec::new(),
        }
    }

    pub fn close_pin_dialog(&mut self) {
        self.pin_dialog = PinDialog::Closed;
    }

    // ========== Upload ==========

    pub fn open_upload(&mut self) {
        if self.access.is_unlocked() {
            self.upload = Some(UploadForm::default());
        }
    }

    pub fn upload_field(&mut self, field: Field, value: String) {
        if let Some(form) = self.upload.as_mut() {
            form.set(field, value);
        }
    }

    pub fn upload_category(&mut self, category: Category) {
        if let Some(form) = self.upload.as_mut() {
            form.category = category;
        }
    }

    /// Discard the form without side effects
    pub fn cancel_upload(&mut self) {
        self.upload = None;
    }

    /// Validate the form and prepend the new movie.
    ///
    /// On a validation or storage failure the dialog stays open.
    pub fn submit_upload(&mut self) -> Vec<Effect> {
        let Some(form) = self.upload.as_mut() else {
            return Vec::new();
        };
        if !self.access.is_unlocked() {
            return Vec::new();
        }

        let movie = match form.build() {
            Ok(movie) => movie,
            Err(err) => {
                form.error = Some(err);
                return Vec::new();
            }
        };

        let effect = Effect::load_thumbnail(&movie);
        let title = movie.title.clone();
        let result = self.catalog.add(movie, &mut *self.durable);
        if let (Err(err), Some(form)) = (&result, self.upload.as_mut()) {
            form.error = Some(FormError::Storage(err.to_string()));
        }
        if self.record(result).is_none() {
            return Vec::new();
        }

        tracing::info!("🎬 Added \"{title}\" ({} movies)", self.catalog.len());
        self.upload = None;
        vec![effect]
    }

    /// Track the outcome of a persisting operation in the status line.
    ///
    /// A success clears any earlier failure message.
    fn record<T>(&mut self, result: Result<T, AppError>) -> Option<T> {
        match result {
            Ok(value) => {
                self.status = None;
                Some(value)
            }
            Err(err) => {
                tracing::error!("❌ {err}");
                self.status = Some(format!("Could not save changes: {err}"));
                None
            }
        }
    }
}

impl std::fmt::Debug for Studio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Studio")
            .field("movies", &self.catalog.len())
            .field("is_admin", &self.access.is_unlocked())
            .field("category", &self.category)
            .field("search", &self.search)
            .finish()
    }
}
