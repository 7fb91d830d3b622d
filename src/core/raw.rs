//! Paging through the unfiltered raw rows of a city file.

use crate::core::loader::RawData;
use crate::utils::Table;

/// Cells wider than this are cut when rendering raw rows.
const RAW_CELL_WIDTH: usize = 28;

pub struct RawPager {
    data: RawData,
    page_size: usize,
    offset: usize,
}

impl RawPager {
    pub fn new(data: RawData, page_size: usize) -> Self {
        Self {
            data,
            page_size: page_size.max(1),
            offset: 0,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset < self.data.len()
    }

    /// Rows shown so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn total(&self) -> usize {
        self.data.len()
    }

    /// Render the next page, or `None` once every row has been shown.
    pub fn next_page(&mut self) -> Option<String> {
        if !self.has_more() {
            return None;
        }

        let end = (self.offset + self.page_size).min(self.data.len());
        let mut table = Table::new(self.data.headers.as_slice()).with_max_width(RAW_CELL_WIDTH);
        for row in &self.data.rows[self.offset..end] {
            table.add_row(row.clone());
        }
        self.offset = end;
        Some(table.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(rows: usize) -> RawData {
        RawData {
            headers: vec!["id".to_string(), "Start Station".to_string()],
            rows: (0..rows)
                .map(|i| vec![i.to_string(), format!("Station {i}")])
                .collect(),
        }
    }

    #[test]
    fn pages_until_exhausted() {
        let mut pager = RawPager::new(data(12), 5);

        let first = pager.next_page().expect("page 1");
        assert!(first.contains("Station 0") && first.contains("Station 4"));
        assert!(!first.contains("Station 5"));
        assert_eq!(pager.offset(), 5);

        pager.next_page().expect("page 2");
        let last = pager.next_page().expect("page 3");
        assert!(last.contains("Station 11"));
        assert_eq!(last.lines().count(), 3); // header + 2 rows

        assert!(!pager.has_more());
        assert_eq!(pager.next_page(), None);
    }

    #[test]
    fn empty_file_has_no_pages() {
        let mut pager = RawPager::new(data(0), 5);
        assert_eq!(pager.total(), 0);
        assert_eq!(pager.next_page(), None);
    }

    #[test]
    fn zero_page_size_shows_one_row() {
        let mut pager = RawPager::new(data(2), 0);
        pager.next_page().expect("page");
        assert_eq!(pager.offset(), 1);
    }
}
