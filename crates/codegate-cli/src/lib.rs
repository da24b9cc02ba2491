// NOTE: codegate Architecture
//
// Why a handler/presenter/renderer split (not print-as-you-go)?
// - Handlers own state and side effects; presenters are pure functions from
//   state to ViewModels; renderers map ViewModels to console text or ratatui
//   widgets and make no decisions
// - The same ViewModel serializes to --format json unchanged, so scripted and
//   interactive output cannot drift apart
//
// Why confirm-by-reload (not optimistic updates)?
// - A mutation never patches the locally held list; the displayed status only
//   changes once a reload returns it
// - Trade-off: one extra round trip per mutation, but local state can never
//   disagree with the backend
//
// Why a request-generation counter on list loads?
// - Rapid page changes can finish out of order; each completion carries the
//   generation it was issued under and stale ones are dropped (last request
//   wins)

mod args;
mod commands;
pub mod console_state;
pub mod context;
mod handlers;
pub mod presentation;

pub use args::{AuthCommand, Cli, CodeCommand, Commands, LogLevel, OutputFormat};
pub use commands::run;
