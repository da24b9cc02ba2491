//! # Presentation Layer
//!
//! Handler -> Presenter -> ViewModel -> Renderer, in that order only.
//! Presenters are pure functions over domain state; ViewModels carry raw
//! data (numbers, timestamps, enums), not formatted strings, so the same
//! ViewModel serializes to `--format json` and renders to text or widgets.

pub mod presenters;
pub mod renderers;
pub mod view_models;
