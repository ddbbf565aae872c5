use iced::widget::{column, container, text};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::{Path, PathBuf};

mod config;
mod error;
mod logging;
mod state;
mod ui;

use state::album::{AlbumKey, AlbumViewer};
use state::catalog::Catalog;
use state::filter::CatalogFilter;
use state::shortlist::Shortlist;
use state::storage::{KeyValueStore, MemoryStore, Storage};
use ui::album::AlbumModel;
use ui::toolbar::DistrictOption;

/// Main application state
struct StudioBrowser {
    /// The studio dataset, never modified after startup
    catalog: Catalog,
    /// Where the shortlist is persisted
    storage: Box<dyn KeyValueStore>,
    shortlist: Shortlist,
    filter: CatalogFilter,
    /// District selector entries, computed once from the catalog
    district_options: Vec<DistrictOption>,
    album: AlbumViewer,
    /// Status line (e.g. after copying a link)
    status: Option<String>,
    theme: Theme,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// Search box content changed
    SearchChanged(String),
    /// A district (or "all") was picked
    DistrictSelected(DistrictOption),
    /// Flip the shortlist-only view
    ToggleShortlistOnly,
    /// Add or remove a studio from the shortlist
    ToggleShortlist(String),
    /// Open a studio's album at its first image
    OpenAlbum(String),
    CloseAlbum,
    /// Previous (-1) / next (+1) image
    NavigateAlbum(i64),
    SelectThumbnail(usize),
    /// Keyboard shortcut while the album is open
    AlbumKey(AlbumKey),
    /// Copy an external link to the clipboard
    CopyLink(String),
}

impl StudioBrowser {
    /// Create a new instance of the application
    fn new(catalog: Catalog, storage: Box<dyn KeyValueStore>, theme: Theme) -> Self {
        let shortlist = Shortlist::load(storage.as_ref());
        let district_options = DistrictOption::list(catalog.district_options());

        if catalog.is_empty() {
            tracing::warn!("⚠️  The studio catalog is empty");
        }
        if !shortlist.is_empty() {
            let unknown = shortlist
                .iter()
                .filter(|id| catalog.find(id).is_none())
                .count();
            if unknown > 0 {
                tracing::debug!("{} shortlisted ids are not in the catalog", unknown);
            }
        }

        tracing::info!(
            "🎨 Studio browser initialized with {} studios, {} shortlisted",
            catalog.len(),
            shortlist.len()
        );

        StudioBrowser {
            catalog,
            storage,
            shortlist,
            filter: CatalogFilter::default(),
            district_options,
            album: AlbumViewer::new(),
            status: None,
            theme,
        }
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        if !matches!(message, Message::CopyLink(_)) {
            self.status = None;
        }

        match message {
            Message::SearchChanged(query) => {
                self.filter.query = query;
            }
            Message::DistrictSelected(option) => {
                self.filter.district = option.into_district();
            }
            Message::ToggleShortlistOnly => {
                self.filter.shortlist_only = !self.filter.shortlist_only;
            }
            Message::ToggleShortlist(studio_id) => {
                let picked = self.shortlist.toggle(&studio_id, self.storage.as_ref());
                tracing::debug!("Shortlist toggle '{}': picked = {}", studio_id, picked);
            }
            Message::OpenAlbum(studio_id) => {
                self.album.open(&self.catalog, &studio_id, 0);
            }
            Message::CloseAlbum => {
                self.album.close();
            }
            Message::NavigateAlbum(delta) => {
                self.album.navigate(delta);
            }
            Message::SelectThumbnail(index) => {
                self.album.select_thumbnail(index);
            }
            Message::AlbumKey(key) => {
                self.album.handle_key(key);
            }
            Message::CopyLink(url) => {
                self.status = Some(format!("Đã sao chép liên kết: {}", url));
                return iced::clipboard::write(url);
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let studios = self.filter.apply(&self.catalog, &self.shortlist);

        let toolbar = ui::toolbar::view_toolbar(
            &self.filter,
            &self.district_options,
            self.shortlist.len(),
            studios.len(),
            self.catalog.len(),
        );
        let cards = ui::grid::build_cards(&self.catalog, &studios, &self.shortlist);

        let mut page = column![toolbar, ui::grid::view_grid(cards)].height(Length::Fill);
        if let Some(status) = &self.status {
            page = page.push(container(text(status).size(13)).padding([6, 20]));
        }

        match self.album_model() {
            Some(model) if self.album.is_scroll_locked() => {
                ui::modal(page, ui::album::view_album(model), Message::CloseAlbum)
            }
            _ => page.into(),
        }
    }

    fn album_model(&self) -> Option<AlbumModel> {
        let studio = self.album.studio_id().and_then(|id| self.catalog.find(id))?;
        Some(AlbumModel::build(
            studio,
            &self.album,
            self.shortlist.contains(&studio.id),
        ))
    }

    /// Album shortcuts; the keyboard is only watched while an album is open
    fn subscription(&self) -> Subscription<Message> {
        if !self.album.is_open() {
            return Subscription::none();
        }

        keyboard::on_key_press(|key, _modifiers| album_key(key).map(Message::AlbumKey))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.theme.clone()
    }
}

/// Album shortcut bound to `key`, if any
fn album_key(key: keyboard::Key) -> Option<AlbumKey> {
    match key {
        keyboard::Key::Named(keyboard::key::Named::Escape) => Some(AlbumKey::Escape),
        keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => Some(AlbumKey::ArrowLeft),
        keyboard::Key::Named(keyboard::key::Named::ArrowRight) => Some(AlbumKey::ArrowRight),
        _ => None,
    }
}

/// Open the shortlist database, falling back to memory so the session
/// still works when the disk does not
fn open_storage(path: Option<&Path>) -> Box<dyn KeyValueStore> {
    let storage = match path {
        Some(path) => Storage::open(path),
        None => Storage::open_default(),
    };

    match storage {
        Ok(storage) => {
            tracing::debug!("Shortlist stored in {:?}", storage.path());
            Box::new(storage)
        }
        Err(err) => {
            tracing::warn!("⚠️  Shortlist will not be saved this session: {}", err);
            Box::new(MemoryStore::new())
        }
    }
}

/// Load the catalog from the configured path, the default location, or a
/// file picked by the user. Any failure leaves the catalog empty.
fn load_catalog(path: Option<PathBuf>) -> Catalog {
    let path = path
        .or_else(|| config::default_catalog_path().filter(|path| path.exists()))
        .or_else(pick_catalog_file);

    let Some(path) = path else {
        tracing::warn!("No catalog selected, starting with an empty list");
        return Catalog::default();
    };

    match Catalog::load(&path) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("❌ Could not load catalog {}: {}", path.display(), err);
            Catalog::default()
        }
    }
}

fn pick_catalog_file() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Chọn tệp danh sách studio (JSON)")
        .add_filter("JSON", &["json"])
        .pick_file()
}

fn main() -> iced::Result {
    let args = match config::Args::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("usage: wedding-studios [--config FILE] [--db FILE] [-v] [CATALOG.json]");
            std::process::exit(2);
        }
    };

    logging::init(args.verbose);

    let loaded = match args.config.as_deref() {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!("⚠️  Using default settings: {}", err);
        config::Config::default()
    });
    let settings = config::Settings::resolve(&args, config);

    let catalog = load_catalog(settings.catalog.clone());
    let storage_path = settings.storage.clone();
    let theme = settings.theme.to_theme();

    iced::application(
        "Studio cưới TP.HCM",
        StudioBrowser::update,
        StudioBrowser::view,
    )
    .subscription(StudioBrowser::subscription)
    .theme(StudioBrowser::theme)
    .centered()
    .run_with(move || {
        let storage = open_storage(storage_path.as_deref());
        (StudioBrowser::new(catalog, storage, theme), Task::none())
    })
}
