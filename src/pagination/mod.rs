//! Pagination over an ordered collection
//!
//! A [`PageSet`] is a read-only view: the caller owns the current page
//! number and passes it in, nothing is stored between calls.

use serde::Serialize;

use crate::error::PaginationError;

/// Pages of `page_size` items over a borrowed slice
#[derive(Debug, PartialEq, Eq)]
pub struct PageSet<'a, T> {
    items: &'a [T],
    page_size: usize,
}

impl<T> Clone for PageSet<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for PageSet<'_, T> {}

/// One page of a [`PageSet`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// 1-based
    pub current: usize,
    pub total_pages: usize,
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

/// Route parameters of one listing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageParams {
    pub number: String,
}

/// Paginate `items` into pages of `page_size`
pub fn paginate<T>(items: &[T], page_size: usize) -> Result<PageSet<'_, T>, PaginationError> {
    if page_size == 0 {
        return Err(PaginationError::ZeroPageSize);
    }
    Ok(PageSet { items, page_size })
}

/// Number of pages needed for `item_count` items; zero items means zero pages
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Enumerate the listing pages to pre-render, `1..=total_pages`
pub fn page_params(item_count: usize, page_size: usize) -> Vec<PageParams> {
    (1..=total_pages(item_count, page_size))
        .map(|n| PageParams {
            number: n.to_string(),
        })
        .collect()
}

impl<'a, T> PageSet<'a, T> {
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.items.len(), self.page_size)
    }

    /// Items of page `n`; the last page may be short
    pub fn page(&self, n: usize) -> Result<&'a [T], PaginationError> {
        let total = self.total_pages();
        if n < 1 || n > total {
            return Err(PaginationError::PageOutOfRange {
                requested: n,
                total,
            });
        }
        let start = (n - 1) * self.page_size;
        let end = (start + self.page_size).min(self.items.len());
        Ok(&self.items[start..end])
    }

    pub fn next_page_number(&self, current: usize) -> Option<usize> {
        (current < self.total_pages()).then(|| current + 1)
    }

    pub fn previous_page_number(&self, current: usize) -> Option<usize> {
        (current > 1).then(|| current - 1)
    }

    /// Page `n` with its navigation numbers
    pub fn get(&self, n: usize) -> Result<Page<'a, T>, PaginationError> {
        Ok(Page {
            items: self.page(n)?,
            current: n,
            total_pages: self.total_pages(),
            previous: self.previous_page_number(n),
            next: self.next_page_number(n),
        })
    }

    /// Every page in order
    pub fn pages(&self) -> impl Iterator<Item = Page<'a, T>> + '_ {
        (1..=self.total_pages()).filter_map(move |n| self.get(n).ok())
    }

    /// Route parameters for every page of this set
    pub fn params(&self) -> Vec<PageParams> {
        page_params(self.items.len(), self.page_size)
    }
}
