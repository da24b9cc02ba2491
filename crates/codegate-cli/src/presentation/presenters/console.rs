//! Console presenter: pure functions from [`ConsoleState`] to the screen
//! ViewModel. No state lives here and nothing is decided downstream.

use crate::console_state::{ConsoleState, NoticeKind};
use crate::presentation::presenters::present_code_detail;
use crate::presentation::view_models::{
    CodeListViewModel, CodeRowViewModel, ConsoleScreenViewModel, GenerateFormViewModel,
    NoticeLevel, NoticeViewModel, PageRailViewModel,
};
use codegate_core::compress_page_index;

/// Build a complete snapshot of what the console should display.
pub fn build_screen_view_model(state: &ConsoleState, authenticated: bool) -> ConsoleScreenViewModel {
    // The list ViewModel is rebuilt from held state rather than the last
    // envelope so a failed reload keeps presenting the surviving rows.
    let list = CodeListViewModel {
        rows: state
            .codes
            .iter()
            .map(|code| {
                let (used, capacity) = code.account_usage();
                CodeRowViewModel {
                    id: code.id,
                    code: code.code.clone(),
                    status: code.status,
                    created_at: code.created_at,
                    expires_at: code.expires_at,
                    accounts_used: used,
                    max_accounts: capacity,
                }
            })
            .collect(),
        total: state.pagination.total,
        item_range: state.pagination.item_range(),
        rail: PageRailViewModel {
            page: state.pagination.page,
            total_pages: state.pagination.total_pages,
            items: compress_page_index(state.pagination.page, state.pagination.total_pages),
        },
    };

    let modal = state
        .modal
        .as_ref()
        .map(|modal| present_code_detail(&modal.code, &modal.window));

    let form = state.form.as_ref().map(|form| GenerateFormViewModel {
        duration_days: form.duration.days(),
        max_accounts: form.max_accounts,
        submitting: form.submitting,
    });

    let notice = state.notice.as_ref().map(|notice| NoticeViewModel {
        level: match notice.kind {
            NoticeKind::Success => NoticeLevel::Success,
            NoticeKind::Error => NoticeLevel::Error,
        },
        text: notice.text.clone(),
    });

    ConsoleScreenViewModel {
        list,
        selected: if state.codes.is_empty() {
            None
        } else {
            Some(state.selected)
        },
        busy: state.busy,
        form,
        modal,
        notice,
        authenticated,
    }
}
