//! Pagination math and navigation links.

use serde::Serialize;

/// Reference to another page of the same listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub page: u32,
    pub limit: u32,
}

/// One page of a filtered collection.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Effective page after clamp-down.
    pub page: u32,
    pub total_pages: u32,
    /// Size of the filtered collection.
    pub total_items: usize,
    pub limit: u32,
    pub items: Vec<T>,
    pub next: Option<PageLink>,
    pub prev: Option<PageLink>,
}

/// Slices `filtered` into the requested page.
///
/// `total_pages` is at least 1 even for an empty collection, and a page past the end
/// is clamped down to the last page. Order is preserved.
pub fn paginate<T: Clone>(filtered: &[&T], requested_page: u32, limit: u32) -> Page<T> {
    let limit = limit.max(1);
    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(limit as usize).max(1) as u32;
    let page = requested_page.clamp(1, total_pages);

    let start = (page as usize - 1) * limit as usize;
    let end = (start + limit as usize).min(total_items);
    let items = filtered[start..end].iter().map(|item| T::clone(item)).collect();

    Page {
        page,
        total_pages,
        total_items,
        limit,
        items,
        next: (page < total_pages).then_some(PageLink {
            page: page + 1,
            limit,
        }),
        prev: (page > 1).then_some(PageLink {
            page: page - 1,
            limit,
        }),
    }
}
