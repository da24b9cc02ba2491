use crate::api::ActivationApi;
use crate::{Error, Result};
use codegate_types::{ActivationCode, CodeDuration, CodeStatus, ListPage};
use tracing::warn;

/// Lowest account capacity the generation form accepts.
pub const MIN_ACCOUNTS: u32 = 1;
/// Highest account capacity the generation form accepts.
pub const MAX_ACCOUNTS: u32 = 100;

/// Operations layer over the backend collaborator.
///
/// Stateless: callers own list state and refresh it after mutations. A
/// failed mutation therefore can never leave a half-updated local copy.
pub struct CodeOps<A: ActivationApi> {
    api: A,
    page_size: u32,
}

impl<A: ActivationApi> CodeOps<A> {
    pub fn new(api: A, page_size: u32) -> Self {
        Self { api, page_size }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn list(&self, page: u32) -> Result<ListPage<ActivationCode>> {
        self.api.list_codes(page.max(1), self.page_size).await
    }

    /// List with an explicit page size (one-shot overrides from the CLI).
    pub async fn list_with(&self, page: u32, page_size: u32) -> Result<ListPage<ActivationCode>> {
        self.api.list_codes(page.max(1), page_size.max(1)).await
    }

    /// Look up one code by numeric id or by its code string.
    ///
    /// The backend only exposes id lookup; a code-string reference is
    /// resolved by scanning list pages until a match or the last page.
    pub async fn find(&self, reference: &str) -> Result<ActivationCode> {
        if let Ok(id) = reference.parse::<u64>() {
            return self.api.fetch_code(id).await;
        }

        let mut page = 1;
        loop {
            let listing = self.api.list_codes(page, self.page_size).await?;
            if let Some(found) = listing.items.iter().find(|c| c.code == reference) {
                // List rows may omit accounts; fetch the full record.
                return self.api.fetch_code(found.id).await;
            }
            if listing.is_last_page() || listing.is_empty() {
                return Err(Error::Api {
                    status: 404,
                    message: format!("no activation code matches '{}'", reference),
                });
            }
            page += 1;
        }
    }

    /// Create a new code. Capacity bounds are enforced here, before any
    /// network call.
    pub async fn generate(
        &self,
        duration: CodeDuration,
        max_accounts: u32,
    ) -> Result<ActivationCode> {
        if !(MIN_ACCOUNTS..=MAX_ACCOUNTS).contains(&max_accounts) {
            return Err(Error::Validation(format!(
                "max accounts must be between {} and {}, got {}",
                MIN_ACCOUNTS, MAX_ACCOUNTS, max_accounts
            )));
        }

        self.api.create_code(duration, max_accounts).await
    }

    /// Request the inverse of the code's current status. The passed code is
    /// untouched; the new status only becomes visible via a reload.
    pub async fn toggle(&self, code: &ActivationCode) -> Result<CodeStatus> {
        let target = code.status.toggled();
        if let Err(err) = self.api.set_status(code.id, target).await {
            warn!(id = code.id, %err, "status toggle failed");
            return Err(err);
        }
        Ok(target)
    }

    pub async fn set_status(&self, id: u64, status: CodeStatus) -> Result<()> {
        self.api.set_status(id, status).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use std::sync::Mutex;

    /// In-memory backend fake that records every mutating call.
    #[derive(Default)]
    struct FakeApi {
        codes: Vec<ActivationCode>,
        status_calls: Mutex<Vec<(u64, CodeStatus)>>,
        create_calls: Mutex<Vec<(u32, u32)>>,
        fail_mutations: bool,
    }

    fn sample_code(id: u64, code: &str, status: CodeStatus) -> ActivationCode {
        ActivationCode {
            id,
            code: code.to_string(),
            expires_at: Utc::now(),
            max_accounts: 3,
            status,
            created_at: Utc::now(),
            accounts: Vec::new(),
        }
    }

    impl ActivationApi for FakeApi {
        async fn login(&self, _username: &str, _password: &str) -> Result<String> {
            Ok("fake-token".to_string())
        }

        async fn list_codes(&self, page: u32, page_size: u32) -> Result<ListPage<ActivationCode>> {
            let start = ((page - 1) as usize) * page_size as usize;
            let items: Vec<_> = self
                .codes
                .iter()
                .skip(start)
                .take(page_size as usize)
                .cloned()
                .collect();
            let total = self.codes.len() as u64;
            Ok(ListPage {
                items,
                total,
                page,
                page_size,
                total_pages: (total as u32).div_ceil(page_size),
            })
        }

        async fn fetch_code(&self, id: u64) -> Result<ActivationCode> {
            self.codes
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or(Error::Api {
                    status: 404,
                    message: "not found".to_string(),
                })
        }

        async fn create_code(
            &self,
            duration: CodeDuration,
            max_accounts: u32,
        ) -> Result<ActivationCode> {
            self.create_calls
                .lock()
                .unwrap()
                .push((duration.days(), max_accounts));
            if self.fail_mutations {
                return Err(Error::Api {
                    status: 500,
                    message: "create failed".to_string(),
                });
            }
            Ok(sample_code(99, "NEW-CODE", CodeStatus::Enabled))
        }

        async fn set_status(&self, id: u64, status: CodeStatus) -> Result<()> {
            self.status_calls.lock().unwrap().push((id, status));
            if self.fail_mutations {
                return Err(Error::Api {
                    status: 500,
                    message: "update failed".to_string(),
                });
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_generate_rejects_out_of_bounds_before_any_call() {
        let ops = CodeOps::new(FakeApi::default(), 10);

        for bad in [0u32, 101, 5000] {
            let err = ops.generate(CodeDuration::FiveDays, bad).await.unwrap_err();
            assert!(matches!(err, Error::Validation(_)), "{} accepted", bad);
        }

        assert!(
            ops.api.create_calls.lock().unwrap().is_empty(),
            "validation failures must not reach the backend"
        );
    }

    #[tokio::test]
    async fn test_generate_accepts_bounds() {
        let ops = CodeOps::new(FakeApi::default(), 10);

        ops.generate(CodeDuration::ThirtyDays, 1).await.unwrap();
        ops.generate(CodeDuration::FiveDays, 100).await.unwrap();

        let calls = ops.api.create_calls.lock().unwrap();
        assert_eq!(*calls, vec![(30, 1), (5, 100)]);
    }

    #[tokio::test]
    async fn test_toggle_posts_inverse_and_leaves_code_untouched() {
        let ops = CodeOps::new(FakeApi::default(), 10);
        let code = sample_code(7, "AAAA", CodeStatus::Enabled);

        let new_status = ops.toggle(&code).await.unwrap();

        assert_eq!(new_status, CodeStatus::Disabled);
        assert_eq!(code.status, CodeStatus::Enabled, "input is never mutated");
        assert_eq!(
            *ops.api.status_calls.lock().unwrap(),
            vec![(7, CodeStatus::Disabled)]
        );
    }

    #[tokio::test]
    async fn test_failed_toggle_propagates_error() {
        let ops = CodeOps::new(
            FakeApi {
                fail_mutations: true,
                ..Default::default()
            },
            10,
        );
        let code = sample_code(7, "AAAA", CodeStatus::Disabled);

        let err = ops.toggle(&code).await.unwrap_err();
        assert!(matches!(err, Error::Api { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_find_by_code_string_scans_pages() {
        let mut codes = Vec::new();
        for id in 1..=25 {
            codes.push(sample_code(id, &format!("CODE-{:03}", id), CodeStatus::Enabled));
        }
        let ops = CodeOps::new(
            FakeApi {
                codes,
                ..Default::default()
            },
            10,
        );

        let found = ops.find("CODE-023").await.unwrap();
        assert_eq!(found.id, 23);

        let missing = ops.find("CODE-999").await.unwrap_err();
        assert!(matches!(missing, Error::Api { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_find_by_numeric_id_goes_straight_to_fetch() {
        let ops = CodeOps::new(
            FakeApi {
                codes: vec![sample_code(4, "DDDD", CodeStatus::Enabled)],
                ..Default::default()
            },
            10,
        );

        let found = ops.find("4").await.unwrap();
        assert_eq!(found.code, "DDDD");
    }
}
