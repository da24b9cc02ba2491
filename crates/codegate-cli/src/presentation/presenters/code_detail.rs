use crate::presentation::view_models::{
    AccountViewModel, CodeDetailViewModel, SecretFieldViewModel,
};
use codegate_core::AccountWindow;
use codegate_types::ActivationCode;

/// Build the detail ViewModel for one code and its visible account window.
pub fn present_code_detail(code: &ActivationCode, window: &AccountWindow) -> CodeDetailViewModel {
    let accounts = window
        .visible_slice(&code.accounts)
        .iter()
        .map(|account| AccountViewModel {
            id: account.id,
            fields: account
                .secret_fields()
                .into_iter()
                .map(|(label, value)| SecretFieldViewModel {
                    label: label.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        })
        .collect();

    CodeDetailViewModel {
        id: code.id,
        code: code.code.clone(),
        status: code.status,
        created_at: code.created_at,
        expires_at: code.expires_at,
        max_accounts: code.max_accounts,
        accounts_total: code.accounts.len(),
        accounts,
        accounts_page: window.page,
        accounts_total_pages: window.total_pages(code.accounts.len()),
        controls_hidden: window.controls_hidden(code.accounts.len()),
    }
}
