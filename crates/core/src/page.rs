//! Pagination - 1-indexed slicing of filtered results
//!
//! Out-of-range pages yield an empty slice, never an error. Page sizes are
//! configuration ([`crate::config::CatalogConfig`]), not constants baked
//! into call sites.

/// Slice out page `page` (1-indexed) of `items`.
///
/// A zero `page_size` or `page`, or a page past the end, yields `&[]`.
pub fn paginate<T>(items: &[T], page_size: usize, page: usize) -> &[T] {
    if page_size == 0 || page == 0 {
        return &[];
    }
    let start = (page - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = (start + page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items (0 when `len` or `page_size` is 0)
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}
