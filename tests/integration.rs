// SPDX-License-Identifier: MPL-2.0
//! End-to-end scenarios driven through the public application surface:
//! opening cards, closing the preview, the deferred selection clear, and
//! the config-driven locale selection.

use iced_folio::app::{App, Message};
use iced_folio::catalog::{Catalog, ProjectRecord};
use iced_folio::config::{self, Config};
use iced_folio::i18n::fluent::I18n;
use iced_folio::media::ImageData;
use iced_folio::ui::gallery;
use iced_folio::ui::preview;
use tempfile::tempdir;

fn record(id: u64, name: &str) -> ProjectRecord {
    ProjectRecord {
        id,
        name: name.to_string(),
        description: format!("{name} description"),
        image: format!("https://example.com/{id}.jpg"),
        tags: vec!["Demo".to_string()],
        demo_url: format!("https://demo.example.com/{id}"),
    }
}

fn sample_image() -> ImageData {
    ImageData::from_rgba(1, 1, vec![255; 4])
}

fn open(app: &mut App, record: ProjectRecord) {
    let _ = app.update(Message::Gallery(gallery::Message::Open(record)));
}

fn close(app: &mut App) {
    let _ = app.update(Message::Preview(preview::Message::Close));
}

#[tokio::test]
async fn activate_close_clear_lifecycle() {
    let mut app = App::default();

    open(&mut app, record(1, "Trattoria Bella Napoli"));
    assert!(app.preview().is_open());
    assert_eq!(app.preview().selected().map(|r| r.id), Some(1));

    close(&mut app);
    // Hidden immediately, selection retained for the closing transition.
    assert!(!app.preview().is_open());
    assert!(app.preview().selected().is_some());
    assert!(app.preview().frame().is_none());
}

#[test]
fn reopening_during_close_delay_discards_the_stale_clear() {
    let mut preview = preview::State::new();

    preview.open(record(1, "A"));
    let preview::Effect::ScheduleClear(stale_epoch) = preview.handle(preview::Message::Close)
    else {
        panic!("close must schedule a clear");
    };

    // User opens another card before the 300ms delay elapses.
    preview.open(record(2, "B"));

    // The old timer fires; the newer selection must survive.
    preview.handle(preview::Message::ClearElapsed(stale_epoch));
    assert!(preview.is_open());
    assert_eq!(preview.selected().map(|r| r.id), Some(2));
}

#[tokio::test]
async fn rapid_open_close_sequences_settle_cleanly() {
    let mut app = App::default();

    for round in 0..5 {
        open(&mut app, record(round, "Card"));
        close(&mut app);
    }
    open(&mut app, record(99, "Final"));

    assert!(app.preview().is_open());
    assert_eq!(app.preview().selected().map(|r| r.id), Some(99));
}

#[test]
fn double_activation_of_the_same_card_is_harmless() {
    let mut app = App::default();
    let card = record(1, "A");

    open(&mut app, card.clone());
    let _ = app.update(Message::Preview(preview::Message::SurfaceLoaded {
        reference: card.image.clone(),
        result: Ok(sample_image()),
    }));
    assert!(app.preview().surface().is_ready());

    // Whole-card and button activations both emit the same open; a repeat
    // keeps the loaded surface instead of restarting the load.
    open(&mut app, card);
    assert!(app.preview().is_open());
    assert!(app.preview().surface().is_ready());
}

#[test]
fn switching_selection_while_open_needs_no_intermediate_close() {
    let mut app = App::default();

    open(&mut app, record(1, "A"));
    open(&mut app, record(2, "B"));

    assert!(app.preview().is_open());
    assert_eq!(app.preview().selected().map(|r| r.id), Some(2));
    // The new record starts a fresh surface load.
    assert!(!app.preview().surface().is_ready());
}

#[test]
fn clear_after_full_delay_empties_the_selection() {
    let mut preview = preview::State::new();
    preview.open(record(1, "A"));
    let preview::Effect::ScheduleClear(epoch) = preview.handle(preview::Message::Close) else {
        panic!("close must schedule a clear");
    };

    preview.handle(preview::Message::ClearElapsed(epoch));
    assert!(!preview.is_open());
    assert!(preview.selected().is_none());
    assert!(preview.frame().is_none());
}

#[test]
fn empty_catalog_renders_no_cards_and_never_opens() {
    let catalog = Catalog::from_toml("").expect("empty catalog parses");
    assert!(catalog.is_empty());
    assert_eq!(catalog.projects().len(), 0);
}

#[test]
fn language_change_via_config_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let italian = Config {
        language: Some("it".to_string()),
        theme_mode: None,
    };
    config::save_to_path(&italian, &path).expect("failed to write config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "it");
    assert_eq!(i18n.tr("preview-live-label"), "Demo Live");
}

#[test]
fn cli_language_overrides_config_file() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let italian = Config {
        language: Some("it".to_string()),
        theme_mode: None,
    };
    config::save_to_path(&italian, &path).expect("failed to write config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("preview-live-label"), "Live Demo");
}

#[test]
fn catalog_file_feeds_the_gallery() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("projects.toml");
    std::fs::write(
        &path,
        r#"
            [[projects]]
            id = 10
            name = "Custom"
            description = "from disk"
            image = "custom.png"
            demo_url = "https://demo.example.com/custom"
        "#,
    )
    .expect("failed to write catalog");

    let catalog = Catalog::load_from_path(&path).expect("failed to load catalog");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(10).map(|p| p.name.as_str()), Some("Custom"));
}
