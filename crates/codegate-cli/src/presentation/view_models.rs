use chrono::{DateTime, Utc};
use codegate_core::PageItem;
use codegate_types::CodeStatus;
use serde::Serialize;

/// Compressed page rail plus the numbers needed to label it.
#[derive(Debug, Clone, Serialize)]
pub struct PageRailViewModel {
    pub page: u32,
    pub total_pages: u32,
    pub items: Vec<PageItem>,
}

/// One row of the code table.
#[derive(Debug, Clone, Serialize)]
pub struct CodeRowViewModel {
    pub id: u64,
    pub code: String,
    pub status: CodeStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub accounts_used: usize,
    pub max_accounts: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct CodeListViewModel {
    pub rows: Vec<CodeRowViewModel>,
    pub total: u64,
    /// 1-based inclusive item range shown ("showing X to Y of Z"); None when empty.
    pub item_range: Option<(u64, u64)>,
    pub rail: PageRailViewModel,
}

/// One labeled copyable credential field.
#[derive(Debug, Clone, Serialize)]
pub struct SecretFieldViewModel {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AccountViewModel {
    pub id: u64,
    pub fields: Vec<SecretFieldViewModel>,
}

/// Detail view of one code: header facts plus the visible account window.
#[derive(Debug, Clone, Serialize)]
pub struct CodeDetailViewModel {
    pub id: u64,
    pub code: String,
    pub status: CodeStatus,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub max_accounts: u32,
    pub accounts_total: usize,
    pub accounts: Vec<AccountViewModel>,
    pub accounts_page: u32,
    pub accounts_total_pages: u32,
    /// Nested pagination controls disappear when everything fits on one page.
    pub controls_hidden: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStatusViewModel {
    pub authenticated: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedCodeViewModel {
    pub id: u64,
    pub code: String,
    pub expires_at: DateTime<Utc>,
    pub max_accounts: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoticeViewModel {
    pub level: NoticeLevel,
    pub text: String,
}

/// The generation form as shown in the console sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateFormViewModel {
    pub duration_days: u32,
    pub max_accounts: u32,
    pub submitting: bool,
}

/// Complete console screen snapshot; the TUI renderer draws exactly this.
#[derive(Debug, Clone, Serialize)]
pub struct ConsoleScreenViewModel {
    pub list: CodeListViewModel,
    pub selected: Option<usize>,
    pub busy: bool,
    pub form: Option<GenerateFormViewModel>,
    pub modal: Option<CodeDetailViewModel>,
    pub notice: Option<NoticeViewModel>,
    pub authenticated: bool,
}
