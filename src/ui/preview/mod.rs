// SPDX-License-Identifier: MPL-2.0
//! Preview modal controller.
//!
//! Owns the two pieces of view state behind the demo preview: the selected
//! project and the modal visibility. Closing hides the modal immediately
//! but keeps the selection for [`CLOSE_DELAY`] so the closing transition
//! can play before the content leaves the tree; the deferred clear is an
//! epoch-guarded transition, so a clear scheduled by an old close can never
//! null out a selection made afterwards.

pub mod surface;

pub use surface::{DemoFrame, SandboxPermissions};

use crate::catalog::ProjectRecord;
use crate::error::Error;
use crate::media::ImageData;
use std::time::Duration;

/// Delay between hiding the modal and clearing the selected project.
pub const CLOSE_DELAY: Duration = Duration::from_millis(300);

/// Content of the demo surface inside the modal.
#[derive(Debug, Clone, Default)]
pub enum Surface {
    /// Snapshot not loaded yet; the load starts when the frame is shown.
    #[default]
    Loading,
    /// Decoded snapshot of the demo surface.
    Ready(ImageData),
    /// The load failed; the frame shows its own fallback.
    Unavailable,
}

impl Surface {
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Surface::Ready(_))
    }
}

/// Messages for the preview sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close affordance activated (header button, backdrop, or Escape).
    Close,
    /// The close delay elapsed; carries the epoch captured when scheduled.
    ClearElapsed(u64),
    /// Result of the lazy surface load for `reference`.
    SurfaceLoaded {
        reference: String,
        result: Result<ImageData, Error>,
    },
}

/// Effects the parent application must perform.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Schedule a `ClearElapsed` message after [`CLOSE_DELAY`].
    ScheduleClear(u64),
}

/// Preview view state. This struct is the only mutation surface.
#[derive(Debug, Default)]
pub struct State {
    selected: Option<ProjectRecord>,
    open: bool,
    /// Bumped on every open/close transition. A pending deferred clear is
    /// valid only while its captured epoch is still current.
    epoch: u64,
    surface: Surface,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `record` and opens the modal. Synchronous, always succeeds,
    /// idempotent for the record already shown (the surface is not reset).
    pub fn open(&mut self, record: ProjectRecord) {
        self.epoch += 1;
        let same_record = self.selected.as_ref().is_some_and(|cur| cur.id == record.id);
        if !same_record {
            self.surface = Surface::Loading;
        }
        self.selected = Some(record);
        self.open = true;
    }

    /// Handle a preview message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Close => {
                if !self.open {
                    return Effect::None;
                }
                self.open = false;
                self.epoch += 1;
                Effect::ScheduleClear(self.epoch)
            }
            Message::ClearElapsed(epoch) => {
                // Every transition bumps the epoch, so equality means no
                // open happened since this clear was scheduled.
                if epoch == self.epoch {
                    self.selected = None;
                    self.surface = Surface::Loading;
                }
                Effect::None
            }
            Message::SurfaceLoaded { reference, result } => {
                let current = self
                    .selected
                    .as_ref()
                    .is_some_and(|record| record.image == reference);
                if current {
                    self.surface = match result {
                        Ok(image) => Surface::Ready(image),
                        Err(_) => Surface::Unavailable,
                    };
                }
                Effect::None
            }
        }
    }

    /// Supplies an already-cached snapshot without going through a load.
    pub fn supply_surface(&mut self, image: ImageData) {
        self.surface = Surface::Ready(image);
    }

    /// Returns the image reference that still needs loading, if the surface
    /// is shown and empty.
    #[must_use]
    pub fn pending_surface(&self) -> Option<&str> {
        if !self.open || self.surface.is_ready() {
            return None;
        }
        match self.surface {
            Surface::Loading => self.selected.as_ref().map(|r| r.image.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    #[must_use]
    pub fn selected(&self) -> Option<&ProjectRecord> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// The modal frame to mount, present only while the preview is open and
    /// a project is selected. The view mounts the preview surface solely
    /// through this accessor, so nothing demo-related exists in the widget
    /// tree while closed.
    #[must_use]
    pub fn frame(&self) -> Option<DemoFrame<'_>> {
        if !self.open {
            return None;
        }
        self.selected
            .as_ref()
            .map(|record| DemoFrame::new(record, &self.surface))
    }
}
