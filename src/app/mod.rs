// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the gallery and the
//! preview modal.
//!
//! The `App` struct wires together the domains (catalog, localization,
//! preview) and translates messages into side effects like thumbnail
//! prefetching or the deferred selection clear. Policy decisions (window
//! size, close delay scheduling, catalog fallback) stay close to the main
//! update loop so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::Catalog;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::preview;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    catalog: Catalog,
    preview: preview::State,
    /// Decoded thumbnails and preview snapshots, keyed by reference.
    images: media::Cache,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("projects", &self.catalog.len())
            .field("preview_open", &self.preview.is_open())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            catalog: Catalog::embedded(),
            preview: preview::State::new(),
            images: media::Cache::new(),
            theme_mode: ThemeMode::System,
            notifications: notifications::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off thumbnail prefetching
    /// for every catalog entry.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_failed) = match config::load() {
            Ok(config) => (config, false),
            Err(_) => (config::Config::default(), true),
        };
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        if config_failed {
            app.notifications
                .push(notifications::Notification::warning(
                    "notification-config-error",
                ));
        }

        if let Some(theme_mode) = config.theme_mode {
            app.theme_mode = theme_mode;
        }

        if let Some(path) = flags.catalog_path {
            match Catalog::load_from_path(&PathBuf::from(&path)) {
                Ok(catalog) => app.catalog = catalog,
                Err(_) => {
                    // Keep the embedded catalog so the gallery still renders.
                    app.notifications
                        .push(notifications::Notification::warning(
                            "notification-catalog-error",
                        ));
                }
            }
        }

        let task = app.prefetch_thumbnails();
        (app, task)
    }

    /// One background load per catalog entry; results land as
    /// `ThumbnailLoaded` and fill the shared image cache.
    fn prefetch_thumbnails(&self) -> Task<Message> {
        let loads = self.catalog.projects().iter().map(|record| {
            let reference = record.image.clone();
            Task::perform(
                async move {
                    let result = media::load_image(&reference).await;
                    (reference, result)
                },
                |(reference, result)| Message::ThumbnailLoaded { reference, result },
            )
        });
        Task::batch(loads)
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if self.preview.is_open() {
            if let Some(record) = self.preview.selected() {
                return format!("{} - {app_name}", record.name);
            }
        }

        app_name
    }

    pub fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(self.notifications.has_notifications());
        let key_sub = subscription::create_key_subscription(self.preview.is_open());
        Subscription::batch([tick_sub, key_sub])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery::Message::Open(record)) => {
                self.preview.open(record);
                self.load_pending_surface()
            }
            Message::Preview(preview_message) => {
                // Successful surface loads also feed the shared cache so a
                // later re-open skips the fetch.
                if let preview::Message::SurfaceLoaded {
                    reference,
                    result: Ok(image),
                } = &preview_message
                {
                    self.images.put(reference.clone(), image.clone());
                }

                match self.preview.handle(preview_message) {
                    preview::Effect::ScheduleClear(epoch) => Task::perform(
                        tokio::time::sleep(preview::CLOSE_DELAY),
                        move |()| Message::Preview(preview::Message::ClearElapsed(epoch)),
                    ),
                    preview::Effect::None => Task::none(),
                }
            }
            Message::ThumbnailLoaded { reference, result } => {
                if let Ok(image) = result {
                    self.images.put(reference, image);
                }
                // Failures keep the card placeholder; nothing to surface.
                Task::none()
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    /// Resolves the lazily loaded preview surface: cache hit fills it
    /// synchronously, otherwise a load task is spawned. The surface is only
    /// requested once the frame is actually shown.
    fn load_pending_surface(&mut self) -> Task<Message> {
        let Some(reference) = self.preview.pending_surface().map(str::to_string) else {
            return Task::none();
        };

        if let Some(image) = self.images.get(&reference) {
            self.preview.supply_surface(image.clone());
            return Task::none();
        }

        Task::perform(
            async move {
                let result = media::load_image(&reference).await;
                (reference, result)
            },
            |(reference, result)| {
                Message::Preview(preview::Message::SurfaceLoaded { reference, result })
            },
        )
    }

    fn view(&self) -> Element<'_, Message> {
        let is_dark = self.theme_mode.is_dark();
        view::view(view::ViewContext {
            i18n: &self.i18n,
            projects: self.catalog.projects(),
            thumbnails: &self.images,
            preview: &self.preview,
            notifications: &self.notifications,
            is_dark,
        })
    }

    #[must_use]
    pub fn preview(&self) -> &preview::State {
        &self.preview
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProjectRecord;
    use crate::ui::gallery;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn record(id: u64, name: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            image: format!("https://example.com/{id}.jpg"),
            tags: vec![],
            demo_url: format!("https://demo.example.com/{id}"),
        }
    }

    fn sample_image() -> media::ImageData {
        media::ImageData::from_rgba(1, 1, vec![255; 4])
    }

    #[test]
    fn new_starts_closed_with_embedded_catalog() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(!app.preview().is_open());
            assert!(!app.catalog().is_empty());
        });
    }

    #[test]
    fn boot_closure_is_a_zero_argument_fn_consuming_flags_once() {
        with_temp_config_dir(|_| {
            // Same shape as the closure handed to `iced::application`.
            let boot_state = std::cell::RefCell::new(Some(Flags::default()));
            let boot = move || {
                let flags = boot_state
                    .borrow_mut()
                    .take()
                    .expect("Boot function called more than once");
                App::new(flags)
            };

            let (app, _task) = boot();
            assert!(!app.preview().is_open());
        });
    }

    #[test]
    fn new_with_bad_catalog_path_falls_back_and_warns() {
        with_temp_config_dir(|_| {
            let flags = Flags {
                lang: None,
                catalog_path: Some("/no/such/projects.toml".to_string()),
            };
            let (app, _task) = App::new(flags);
            assert!(!app.catalog().is_empty(), "embedded catalog must remain");
            assert!(app.notifications().has_notifications());
        });
    }

    #[test]
    fn new_with_valid_catalog_path_replaces_embedded() {
        with_temp_config_dir(|_| {
            let dir = tempdir().expect("temp dir");
            let path = dir.path().join("projects.toml");
            std::fs::write(
                &path,
                r#"
                    [[projects]]
                    id = 42
                    name = "Only"
                    description = "single entry"
                    image = "only.png"
                    demo_url = "https://demo.example.com/only"
                "#,
            )
            .expect("write catalog");

            let flags = Flags {
                lang: None,
                catalog_path: Some(path.to_string_lossy().into_owned()),
            };
            let (app, _task) = App::new(flags);
            assert_eq!(app.catalog().len(), 1);
            assert!(!app.notifications().has_notifications());
        });
    }

    #[test]
    fn activating_a_card_opens_the_preview_synchronously() {
        let mut app = App::default();
        let record = record(1, "A");

        let _ = app.update(Message::Gallery(gallery::Message::Open(record.clone())));

        assert!(app.preview().is_open());
        assert_eq!(app.preview().selected(), Some(&record));
    }

    #[test]
    fn cached_image_fills_the_surface_without_a_load() {
        let mut app = App::default();
        let record = record(1, "A");
        let _ = app.update(Message::ThumbnailLoaded {
            reference: record.image.clone(),
            result: Ok(sample_image()),
        });

        let _ = app.update(Message::Gallery(gallery::Message::Open(record)));

        assert!(app.preview().surface().is_ready());
    }

    #[test]
    fn uncached_image_leaves_the_surface_loading() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::Open(record(1, "A"))));

        assert!(!app.preview().surface().is_ready());
        assert!(app.preview().pending_surface().is_some());
    }

    #[tokio::test]
    async fn surface_load_result_feeds_the_cache() {
        let mut app = App::default();
        let record = record(1, "A");
        let _ = app.update(Message::Gallery(gallery::Message::Open(record.clone())));

        let _ = app.update(Message::Preview(preview::Message::SurfaceLoaded {
            reference: record.image.clone(),
            result: Ok(sample_image()),
        }));
        assert!(app.preview().surface().is_ready());

        // Close, clear, and re-open: the snapshot now comes from the cache.
        let _ = app.update(Message::Preview(preview::Message::Close));
        let _ = app.update(Message::Gallery(gallery::Message::Open(record)));
        assert!(app.preview().surface().is_ready());
    }

    #[tokio::test]
    async fn close_hides_immediately_and_clear_arrives_later() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::Open(record(1, "A"))));

        let _ = app.update(Message::Preview(preview::Message::Close));
        assert!(!app.preview().is_open());
        assert!(app.preview().selected().is_some());
    }

    #[test]
    fn failed_thumbnail_load_is_silent() {
        let mut app = App::default();
        let _ = app.update(Message::ThumbnailLoaded {
            reference: "https://example.com/broken.jpg".to_string(),
            result: Err(crate::error::Error::Http("404".into())),
        });
        assert!(!app.notifications().has_notifications());
    }

    #[test]
    fn title_shows_app_name_when_closed() {
        let app = App::default();
        assert_eq!(app.title(), "IcedFolio");
    }

    #[tokio::test]
    async fn title_shows_project_name_while_preview_open() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::Open(record(
            1,
            "Trattoria Bella",
        ))));
        assert_eq!(app.title(), "Trattoria Bella - IcedFolio");

        let _ = app.update(Message::Preview(preview::Message::Close));
        assert_eq!(app.title(), "IcedFolio");
    }

    #[test]
    fn tick_prunes_dismissable_toasts() {
        let mut app = App::default();
        assert!(!app.notifications().has_notifications());
        // Ticking with nothing queued is a no-op.
        let _ = app.update(Message::Tick(std::time::Instant::now()));
        assert!(!app.notifications().has_notifications());
    }
}
