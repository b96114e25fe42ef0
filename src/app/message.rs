// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::gallery;
use crate::ui::notifications;
use crate::ui::preview;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery::Message),
    Preview(preview::Message),
    Notification(notifications::Message),
    /// Result of a background thumbnail prefetch.
    ThumbnailLoaded {
        reference: String,
        result: Result<ImageData, Error>,
    },
    /// Periodic tick while toasts are visible (drives auto-dismiss).
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `it`, `en-US`).
    pub lang: Option<String>,
    /// Optional path to a TOML catalog replacing the embedded projects.
    pub catalog_path: Option<String>,
}
