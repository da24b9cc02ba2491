use crate::presentation::view_models::{CodeListViewModel, CodeRowViewModel, PageRailViewModel};
use codegate_core::{ListPagination, compress_page_index};
use codegate_types::{ActivationCode, ListPage};

/// Build the list ViewModel from a confirmed page envelope.
pub fn present_code_list(page: &ListPage<ActivationCode>) -> CodeListViewModel {
    let mut pagination = ListPagination::new(page.page_size);
    pagination.apply(page.page, page.total, page.total_pages);

    let rows = page
        .items
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
        .collect();

    CodeListViewModel {
        rows,
        total: page.total,
        item_range: pagination.item_range(),
        rail: PageRailViewModel {
            page: page.page,
            total_pages: page.total_pages,
            items: compress_page_index(page.page, page.total_pages),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_envelope(page: u32, total: u64, total_pages: u32) -> ListPage<ActivationCode> {
        ListPage {
            items: Vec::new(),
            total,
            page,
            page_size: 10,
            total_pages,
        }
    }

    #[test]
    fn test_rail_matches_compression_for_middle_page() {
        let vm = present_code_list(&empty_envelope(5, 100, 10));
        insta::assert_snapshot!(
            serde_json::to_string_pretty(&vm.rail).unwrap(),
            @r#"
        {
          "page": 5,
          "total_pages": 10,
          "items": [
            {
              "page": 1
            },
            {
              "ellipsis": "start"
            },
            {
              "page": 4
            },
            {
              "page": 5
            },
            {
              "page": 6
            },
            {
              "ellipsis": "end"
            },
            {
              "page": 10
            }
          ]
        }
        "#
        );
    }

    #[test]
    fn test_item_range_reflects_envelope_totals() {
        let vm = present_code_list(&empty_envelope(2, 35, 4));
        assert_eq!(vm.item_range, Some((11, 20)));

        let vm = present_code_list(&empty_envelope(1, 0, 0));
        assert_eq!(vm.item_range, None);
    }
}
