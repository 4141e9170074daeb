// SPDX-License-Identifier: MPL-2.0
//! `iced_peek` is a tiny demo viewer built with the Iced GUI framework.
//!
//! It downloads a single remote image and displays it. The same download is
//! implemented in three equivalent concurrency styles (completion callback,
//! one-shot stream, async/await) to show how each style plugs into the Iced
//! runtime.

pub mod app;
pub mod error;
pub mod fetch;
pub mod media;
pub mod ui;
