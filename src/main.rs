use iced::widget::{column, container, image, stack, text};
use iced::{alignment, Element, Length, Task, Theme};
use rfd::{FileDialog, MessageDialog, MessageLevel};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod media;
mod state;
mod ui;

use config::AppConfig;
use media::thumbnail::ThumbnailError;
use state::data::{Category, CategoryFilter};
use state::storage::{MemoryStore, SqliteStore};
use state::studio::{Effect, Studio};
use state::upload::Field;

/// Main application state
struct RoinMovies {
    /// Catalog, owner mode and every open dialog
    studio: Studio,
    /// Where resized thumbnails are cached
    cache_dir: PathBuf,
    /// Loaded thumbnail handles keyed by movie id
    thumbnails: ui::Thumbnails,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    SearchChanged(String),
    CategorySelected(CategoryFilter),
    MovieSelected(String),
    PlayFeatured,
    PlaySelected,
    Back,

    /// Enter owner mode (opens the login dialog) or leave it
    ToggleAdmin,
    /// Open the PIN change dialog
    OpenSettings,
    PinInputChanged(String),
    PinSubmitted,
    PinDialogClosed,

    OpenUpload,
    UploadFieldChanged(Field, String),
    UploadCategorySelected(Category),
    /// Pick a local image for the thumbnail field
    BrowseThumbnail,
    /// Pick a local video for the video field
    BrowseVideo,
    UploadSubmitted,
    UploadCancelled,

    /// Background thumbnail resolution finished
    ThumbnailLoaded(String, Result<PathBuf, ThumbnailError>),
}

impl RoinMovies {
    /// Create the application and start loading thumbnails
    fn new(studio: Studio, cache_dir: PathBuf) -> (Self, Task<Message>) {
        let effects = studio.startup_effects();
        let app = RoinMovies {
            studio,
            cache_dir,
            thumbnails: HashMap::new(),
        };
        let task = app.run_effects(effects);
        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let effects = match message {
            Message::SearchChanged(query) => {
                self.studio.set_search(query);
                Vec::new()
            }
            Message::CategorySelected(category) => {
                self.studio.set_category(category);
                Vec::new()
            }
            Message::MovieSelected(id) => {
                self.studio.select(&id);
                Vec::new()
            }
            Message::PlayFeatured => {
                self.studio.play_featured();
                Vec::new()
            }
            Message::PlaySelected => self.studio.play_selected(),
            Message::Back => {
                self.studio.back();
                Vec::new()
            }
            Message::ToggleAdmin => {
                self.studio.toggle_admin();
                Vec::new()
            }
            Message::OpenSettings => {
                self.studio.open_pin_change();
                Vec::new()
            }
            Message::PinInputChanged(value) => {
                self.studio.pin_input(value);
                Vec::new()
            }
            Message::PinSubmitted => self.studio.submit_pin(),
            Message::PinDialogClosed => {
                self.studio.close_pin_dialog();
                Vec::new()
            }
            Message::OpenUpload => {
                self.studio.open_upload();
                Vec::new()
            }
            Message::UploadFieldChanged(field, value) => {
                self.studio.upload_field(field, value);
                Vec::new()
            }
            Message::UploadCategorySelected(category) => {
                self.studio.upload_category(category);
                Vec::new()
            }
            Message::BrowseThumbnail => {
                let picked = FileDialog::new()
                    .set_title("Select Thumbnail Image")
                    .add_filter("Images", &["jpg", "jpeg", "png", "webp", "bmp", "gif"])
                    .pick_file();
                if let Some(path) = picked {
                    self.studio
                        .upload_field(Field::Thumbnail, path.to_string_lossy().to_string());
                }
                Vec::new()
            }
            Message::BrowseVideo => {
                let picked = FileDialog::new()
                    .set_title("Select Video")
                    .add_filter("Videos", &["mp4", "mkv", "webm", "mov", "avi", "m4v"])
                    .pick_file();
                if let Some(path) = picked {
                    self.studio
                        .upload_field(Field::Video, path.to_string_lossy().to_string());
                }
                Vec::new()
            }
            Message::UploadSubmitted => self.studio.submit_upload(),
            Message::UploadCancelled => {
                self.studio.cancel_upload();
                Vec::new()
            }
            Message::ThumbnailLoaded(id, result) => {
                match result {
                    Ok(path) => {
                        self.thumbnails.insert(id, image::Handle::from_path(path));
                    }
                    Err(err) => tracing::warn!("⚠️  Thumbnail for {id} unavailable: {err}"),
                }
                Vec::new()
            }
        };

        self.run_effects(effects)
    }

    /// Turn coordinator effects into tasks and dialogs
    fn run_effects(&self, effects: Vec<Effect>) -> Task<Message> {
        let mut tasks = Vec::new();

        for effect in effects {
            match effect {
                Effect::Notify(message) => notify(MessageLevel::Info, &message),
                Effect::LoadThumbnail { id, reference } => {
                    let cache_dir = self.cache_dir.clone();
                    tasks.push(Task::perform(
                        media::thumbnail::fetch(id.clone(), reference, cache_dir),
                        move |result| Message::ThumbnailLoaded(id.clone(), result),
                    ));
                }
                Effect::OpenPlayer(reference) => {
                    if let Err(err) = media::player::open_in_system_player(&reference) {
                        tracing::error!("❌ {err}");
                        notify(MessageLevel::Error, &err.to_string());
                    }
                }
            }
        }

        Task::batch(tasks)
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let content: Element<Message> = match self.studio.selected() {
            Some(movie) => ui::playback::view(movie, &self.thumbnails),
            None => ui::browse::view(&self.studio, &self.thumbnails),
        };

        let mut page: Element<Message> = column![ui::navbar::view(&self.studio), content].into();

        if self.studio.is_admin() {
            let badge = container(
                container(text("●  OWNER STUDIO ACTIVE").size(12))
                    .padding([8, 16])
                    .style(|_theme| container::Style {
                        background: Some(ui::ACCENT.into()),
                        border: iced::Border::default().rounded(12.0),
                        ..container::Style::default()
                    }),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .align_y(alignment::Vertical::Bottom);

            page = stack![page, badge].into();
        }

        if let Some(form) = self.studio.upload_form() {
            page = ui::dialogs::modal(page, ui::dialogs::upload(form), Message::UploadCancelled);
        }

        let dialog = self.studio.pin_dialog();
        if dialog.is_open() {
            page = ui::dialogs::modal(page, ui::dialogs::pin(dialog), Message::PinDialogClosed);
        }

        page
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

/// Native notification dialog
fn notify(level: MessageLevel, message: &str) {
    MessageDialog::new()
        .set_level(level)
        .set_title("RoinMovies")
        .set_description(message)
        .show();
}

/// Open stores and rehydrate the catalog.
///
/// The catalog and PIN are durable; the admin flag lives for this run only.
fn init(config: &AppConfig) -> error::AppResult<Studio> {
    let durable = SqliteStore::open(&config.store_path())?;
    if let Some(path) = durable.path() {
        tracing::info!("💾 Catalog and PIN persisted in {}", path.display());
    }
    let studio = Studio::new(Box::new(durable), Box::new(MemoryStore::new()), &config.default_pin)?;
    tracing::info!(
        "🎨 RoinMovies initialized with {} movies",
        studio.catalog().len()
    );
    Ok(studio)
}

fn main() -> iced::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roinmovies=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let (studio, cache_dir) = match AppConfig::from_env().and_then(|config| {
        let studio = init(&config)?;
        Ok((studio, config.cache_dir))
    }) {
        Ok(ready) => ready,
        Err(err) => {
            tracing::error!("❌ Startup failed: {err}");
            std::process::exit(1);
        }
    };

    iced::application("RoinMovies", RoinMovies::update, RoinMovies::view)
        .theme(RoinMovies::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(move || RoinMovies::new(studio, cache_dir))
}
