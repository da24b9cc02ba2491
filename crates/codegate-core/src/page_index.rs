use serde::Serialize;

/// Where an ellipsis sits in the compressed rail.
///
/// The position doubles as the display key, so the two ellipses of the
/// middle-of-range layout never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EllipsisPosition {
    Start,
    Middle,
    End,
}

/// One marker in the compressed page rail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageItem {
    Page(u32),
    Ellipsis(EllipsisPosition),
}

impl PageItem {
    pub fn page_number(self) -> Option<u32> {
        match self {
            PageItem::Page(n) => Some(n),
            PageItem::Ellipsis(_) => None,
        }
    }
}

/// Compress a page index into a bounded rail of markers.
///
/// Pure function of `(page, total_pages)`:
/// - up to 7 pages: every page, no ellipsis
/// - near the start (page <= 3): `1..=5 … last`
/// - near the end (page >= total_pages - 2): `1 … last five`
/// - otherwise: `1 … page-1 page page+1 … last`
pub fn compress_page_index(page: u32, total_pages: u32) -> Vec<PageItem> {
    let mut items = Vec::new();

    if total_pages <= 7 {
        for n in 1..=total_pages {
            items.push(PageItem::Page(n));
        }
    } else if page <= 3 {
        for n in 1..=5 {
            items.push(PageItem::Page(n));
        }
        items.push(PageItem::Ellipsis(EllipsisPosition::Middle));
        items.push(PageItem::Page(total_pages));
    } else if page >= total_pages - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis(EllipsisPosition::Start));
        for n in (total_pages - 4)..=total_pages {
            items.push(PageItem::Page(n));
        }
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis(EllipsisPosition::Start));
        for n in (page - 1)..=(page + 1) {
            items.push(PageItem::Page(n));
        }
        items.push(PageItem::Ellipsis(EllipsisPosition::End));
        items.push(PageItem::Page(total_pages));
    }

    items
}
