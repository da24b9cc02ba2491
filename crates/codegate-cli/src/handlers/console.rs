//! Console handler: owns the dashboard state, the terminal, and the event
//! loop. API calls run as tasks on the shared runtime; their completions
//! come back over a channel and are folded into state between draws.

use crate::console_state::ConsoleState;
use crate::context::AppContext;
use crate::presentation::presenters::build_screen_view_model;
use crate::presentation::renderers::tui::ConsoleTerminal;
use anyhow::Result;
use codegate_client::{CodeOps, HttpApi};
use codegate_types::{ActivationCode, CodeDuration, CodeStatus, ListPage};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Completions delivered back to the event loop.
enum ApiEvent {
    PageLoaded {
        generation: u64,
        outcome: Result<ListPage<ActivationCode>, String>,
    },
    GenerateFinished {
        outcome: Result<ActivationCode, String>,
    },
    ToggleFinished {
        code: String,
        outcome: Result<CodeStatus, String>,
    },
}

pub fn handle(ctx: AppContext, runtime: &Runtime) -> Result<()> {
    let authenticated = ctx.session.is_authenticated();
    let ops = Arc::new(ctx.ops);
    let (tx, rx) = mpsc::channel::<ApiEvent>();

    let mut state = ConsoleState::new(ctx.config.page_size, ctx.config.accounts_page_size);
    let mut terminal = ConsoleTerminal::new()?;

    // Initial load, page 1
    let generation = state.begin_load();
    dispatch_load(runtime, &ops, &tx, generation, 1);

    loop {
        let vm = build_screen_view_model(&state, authenticated);
        terminal.draw(&vm)?;

        // Fold in finished API calls before reading input
        while let Ok(completion) = rx.try_recv() {
            match completion {
                ApiEvent::PageLoaded {
                    generation,
                    outcome,
                } => {
                    state.apply_load(generation, outcome);
                }
                ApiEvent::GenerateFinished { outcome } => {
                    let succeeded = outcome.is_ok();
                    state.apply_generated(outcome.map(|code| code.code));
                    if succeeded {
                        // Mutations conclude with a reload of the current page
                        let generation = state.begin_load();
                        dispatch_load(runtime, &ops, &tx, generation, state.current_page());
                    }
                }
                ApiEvent::ToggleFinished { code, outcome } => match outcome {
                    Ok(status) => {
                        state.notify_success(format!("{} is now {}", code, status));
                        let generation = state.begin_load();
                        dispatch_load(runtime, &ops, &tx, generation, state.current_page());
                    }
                    Err(message) => state.fail_mutation(message),
                },
            }
        }

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        // Detail modal swallows input while open
        if state.modal.is_some() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => state.close_details(),
                KeyCode::Right | KeyCode::Char('l') => state.modal_page_next(),
                KeyCode::Left | KeyCode::Char('h') => state.modal_page_prev(),
                _ => {}
            }
            continue;
        }

        // Generation form next
        if state.form.is_some() {
            match key.code {
                KeyCode::Esc => state.close_form(),
                KeyCode::Char('d') | KeyCode::Tab => state.form_input(|form| form.cycle_duration()),
                KeyCode::Char('+') | KeyCode::Up => state.form_input(|form| form.increment()),
                KeyCode::Char('-') | KeyCode::Down => state.form_input(|form| form.decrement()),
                KeyCode::Enter => {
                    if let Some((duration, max_accounts)) = state.begin_submit() {
                        dispatch_generate(runtime, &ops, &tx, duration, max_accounts);
                    }
                }
                _ => {}
            }
            continue;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => break,
            KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => state.select_next(),
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(page) = state.page_target(false) {
                    let generation = state.begin_load();
                    dispatch_load(runtime, &ops, &tx, generation, page);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(page) = state.page_target(true) {
                    let generation = state.begin_load();
                    dispatch_load(runtime, &ops, &tx, generation, page);
                }
            }
            KeyCode::Char('r') => {
                if !state.busy {
                    let page = state.current_page();
                    let generation = state.begin_load();
                    dispatch_load(runtime, &ops, &tx, generation, page);
                }
            }
            KeyCode::Enter => state.open_details(),
            KeyCode::Char('g') => state.open_form(),
            KeyCode::Char('t') => {
                if !state.busy
                    && let Some(code) = state.selected_code().cloned()
                {
                    state.begin_mutation();
                    dispatch_toggle(runtime, &ops, &tx, code);
                }
            }
            _ => {}
        }
    }

    Ok(())
}

fn dispatch_load(
    runtime: &Runtime,
    ops: &Arc<CodeOps<HttpApi>>,
    tx: &Sender<ApiEvent>,
    generation: u64,
    page: u32,
) {
    let ops = ops.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let outcome = ops.list(page).await.map_err(|err| err.to_string());
        let _ = tx.send(ApiEvent::PageLoaded {
            generation,
            outcome,
        });
    });
}

fn dispatch_generate(
    runtime: &Runtime,
    ops: &Arc<CodeOps<HttpApi>>,
    tx: &Sender<ApiEvent>,
    duration: CodeDuration,
    max_accounts: u32,
) {
    let ops = ops.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let outcome = ops
            .generate(duration, max_accounts)
            .await
            .map_err(|err| err.to_string());
        let _ = tx.send(ApiEvent::GenerateFinished { outcome });
    });
}

fn dispatch_toggle(
    runtime: &Runtime,
    ops: &Arc<CodeOps<HttpApi>>,
    tx: &Sender<ApiEvent>,
    code: ActivationCode,
) {
    let ops = ops.clone();
    let tx = tx.clone();
    runtime.spawn(async move {
        let outcome = ops.toggle(&code).await.map_err(|err| err.to_string());
        let _ = tx.send(ApiEvent::ToggleFinished {
            code: code.code,
            outcome,
        });
    });
}
