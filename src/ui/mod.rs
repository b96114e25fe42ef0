// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`gallery`] - Card grid over the project catalog
//! - [`preview`] - Modal preview of the selected project's live demo
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`styles`] - Centralized styling (cards, tags, modal, buttons)
//! - [`icons`] - Embedded SVG icon handles
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod notifications;
pub mod preview;
pub mod styles;
pub mod theming;
