// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a small portfolio showcase built with the Iced GUI framework.
//!
//! It renders a gallery of project cards and opens a modal preview of the
//! selected project's live demo in a sandboxed embedded surface. It
//! demonstrates internationalization with Fluent, user preference
//! management, and modular UI design.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod media;
pub mod ui;
