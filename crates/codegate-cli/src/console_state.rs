//! Domain state for the interactive console.
//!
//! The console handler owns one [`ConsoleState`] and mutates it from user
//! input and API completions; presenters read it. All transitions live here
//! so the dashboard's behavior is testable without a terminal.

use codegate_core::{AccountWindow, ListPagination};
use codegate_types::{ActivationCode, CodeDuration, ListPage};

// Capacity bounds are shared with the ops layer: the form clamps to them,
// the ops layer still validates.
use codegate_client::{MAX_ACCOUNTS, MIN_ACCOUNTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

/// The generation form: duration selector plus a bounded account count.
#[derive(Debug, Clone)]
pub struct GenerateForm {
    pub duration: CodeDuration,
    pub max_accounts: u32,
    pub submitting: bool,
}

impl GenerateForm {
    pub fn new() -> Self {
        Self {
            duration: CodeDuration::default(),
            max_accounts: MIN_ACCOUNTS,
            submitting: false,
        }
    }

    pub fn cycle_duration(&mut self) {
        self.duration = self.duration.next();
    }

    pub fn increment(&mut self) {
        if self.max_accounts < MAX_ACCOUNTS {
            self.max_accounts += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.max_accounts > MIN_ACCOUNTS {
            self.max_accounts -= 1;
        }
    }
}

impl Default for GenerateForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Detail modal: a fixed snapshot of one code plus the nested account window.
///
/// The snapshot does not react to background list reloads; it lives until
/// the modal is dismissed.
#[derive(Debug, Clone)]
pub struct DetailModal {
    pub code: ActivationCode,
    pub window: AccountWindow,
}

/// State machine behind the console screen.
pub struct ConsoleState {
    pub codes: Vec<ActivationCode>,
    pub pagination: ListPagination,
    pub selected: usize,
    /// Set while a list load or mutation is in flight; page-change and
    /// mutation keys are ignored while set.
    pub busy: bool,
    pub form: Option<GenerateForm>,
    pub modal: Option<DetailModal>,
    pub notice: Option<Notice>,
    accounts_page_size: u32,
    /// Generation of the most recently issued list load. Completions
    /// carrying an older generation are discarded: last request wins.
    generation: u64,
}

impl ConsoleState {
    pub fn new(page_size: u32, accounts_page_size: u32) -> Self {
        Self {
            codes: Vec::new(),
            pagination: ListPagination::new(page_size),
            selected: 0,
            busy: false,
            form: None,
            modal: None,
            notice: None,
            accounts_page_size,
            generation: 0,
        }
    }

    pub fn current_page(&self) -> u32 {
        self.pagination.page
    }

    pub fn selected_code(&self) -> Option<&ActivationCode> {
        self.codes.get(self.selected)
    }

    /// Begin a list load for `page`; returns the generation tag the
    /// completion must carry.
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.busy = true;
        self.generation
    }

    /// Mark a mutation in flight. Mutations share the busy flag but not the
    /// generation counter (their completions are never page data).
    pub fn begin_mutation(&mut self) {
        self.busy = true;
    }

    /// Fold in a finished list load. Returns false when the completion was
    /// stale and discarded.
    pub fn apply_load(
        &mut self,
        generation: u64,
        outcome: Result<ListPage<ActivationCode>, String>,
    ) -> bool {
        if generation != self.generation {
            // A newer request is in flight; this response lost the race.
            return false;
        }

        self.busy = false;
        match outcome {
            Ok(page) => {
                self.pagination.apply(page.page, page.total, page.total_pages);
                self.codes = page.items;
                if self.selected >= self.codes.len() {
                    self.selected = self.codes.len().saturating_sub(1);
                }
            }
            Err(message) => {
                // Existing rows stay untouched on failure.
                self.notify_error(message);
            }
        }
        true
    }

    /// The page a prev/next key should load, if the move is allowed right
    /// now. Busy loads disable the controls entirely.
    pub fn page_target(&self, forward: bool) -> Option<u32> {
        if self.busy || self.modal.is_some() || self.form.is_some() {
            return None;
        }
        if forward && self.pagination.can_next() {
            Some(self.pagination.page + 1)
        } else if !forward && self.pagination.can_prev() {
            Some(self.pagination.page - 1)
        } else {
            None
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.codes.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Open the detail modal over the selected code. Always starts the
    /// nested account window back at page 1, whatever a previous modal did.
    pub fn open_details(&mut self) {
        if let Some(code) = self.selected_code().cloned() {
            self.modal = Some(DetailModal {
                code,
                window: AccountWindow::new(self.accounts_page_size),
            });
        }
    }

    pub fn close_details(&mut self) {
        self.modal = None;
    }

    pub fn open_form(&mut self) {
        if self.form.is_none() {
            self.form = Some(GenerateForm::new());
        }
    }

    pub fn close_form(&mut self) {
        // A submission in flight keeps the form up until it resolves.
        if let Some(form) = &self.form
            && !form.submitting
        {
            self.form = None;
        }
    }

    /// Finished generation: reset the capacity input to 1, keep the chosen
    /// duration, and leave the form open. Inputs are untouched on failure.
    pub fn apply_generated(&mut self, outcome: Result<String, String>) {
        if let Some(form) = &mut self.form {
            form.submitting = false;
            match &outcome {
                Ok(_) => form.max_accounts = MIN_ACCOUNTS,
                Err(_) => {}
            }
        }
        match outcome {
            Ok(code) => self.notify_success(format!("generated activation code {}", code)),
            Err(message) => self.notify_error(message),
        }
    }

    /// A mutation failed: nothing to roll back (nothing was changed), just
    /// release the busy flag and surface the error.
    pub fn fail_mutation(&mut self, message: String) {
        self.busy = false;
        self.notify_error(message);
    }

    /// Apply an edit to the generation form. Ignored while a submission is
    /// in flight (the busy affordance is disabled).
    pub fn form_input(&mut self, edit: impl FnOnce(&mut GenerateForm)) {
        if let Some(form) = &mut self.form
            && !form.submitting
        {
            edit(form);
        }
    }

    /// Arm a submission. Returns the inputs to send, or None when no form
    /// is open or one is already in flight (duplicate submissions blocked).
    pub fn begin_submit(&mut self) -> Option<(CodeDuration, u32)> {
        let form = self.form.as_mut()?;
        if form.submitting {
            return None;
        }
        form.submitting = true;
        Some((form.duration, form.max_accounts))
    }

    pub fn modal_page_next(&mut self) {
        if let Some(modal) = &mut self.modal {
            let len = modal.code.accounts.len();
            modal.window.next(len);
        }
    }

    pub fn modal_page_prev(&mut self) {
        if let Some(modal) = &mut self.modal {
            modal.window.prev();
        }
    }

    pub fn notify_success(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Success,
            text: text.into(),
        });
    }

    pub fn notify_error(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind: NoticeKind::Error,
            text: text.into(),
        });
    }
}
