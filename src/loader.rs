//! Incremental List Loader
//!
//! Append-only, order-preserving merge of server pages with at-most-once
//! insertion per id. Single-flight: `begin_load` hands out the cursor only
//! when idle, so bursts of scroll events produce one request.

use std::collections::HashSet;

use crate::models::{PageToken, Product};

/// Distance from the document bottom that triggers the next page
pub const SCROLL_THRESHOLD_PX: f64 = 200.0;

/// Items the loader can deduplicate
pub trait Keyed {
    fn key(&self) -> u32;
}

impl Keyed for Product {
    fn key(&self) -> u32 {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading,
    /// Server reported no more pages; terminal
    Exhausted,
}

impl LoadPhase {
    /// Phase after a page arrives; `has_more` without a cursor is terminal
    fn after_page(has_more: bool, next_page: Option<&PageToken>) -> Self {
        if has_more && next_page.is_some() {
            LoadPhase::Idle
        } else {
            LoadPhase::Exhausted
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListLoader<T> {
    items: Vec<T>,
    loaded_ids: HashSet<u32>,
    next_page: Option<PageToken>,
    phase: LoadPhase,
}

impl<T: Keyed> ListLoader<T> {
    /// Seed with the server-rendered first page
    pub fn new(initial: Vec<T>, has_more: bool, next_page: Option<PageToken>) -> Self {
        let mut loader = Self {
            items: Vec::with_capacity(initial.len()),
            loaded_ids: HashSet::new(),
            phase: LoadPhase::after_page(has_more, next_page.as_ref()),
            next_page,
        };
        for item in initial {
            loader.insert(item);
        }
        loader
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_exhausted(&self) -> bool {
        self.phase == LoadPhase::Exhausted
    }

    /// The "no more items" marker; only meaningful once something is listed
    pub fn show_end_marker(&self) -> bool {
        self.is_exhausted() && !self.items.is_empty()
    }

    /// Insert an item unless its id is already listed
    pub fn insert(&mut self, item: T) -> bool {
        if self.loaded_ids.insert(item.key()) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Claim the next page. `None` while loading, when exhausted, or with
    /// no cursor.
    pub fn begin_load(&mut self) -> Option<PageToken> {
        if self.phase != LoadPhase::Idle {
            return None;
        }
        let token = self.next_page.clone()?;
        self.phase = LoadPhase::Loading;
        Some(token)
    }

    /// Merge a fetched page. Returns how many items were new.
    pub fn finish_load(&mut self, items: Vec<T>, has_more: bool, next_page: Option<PageToken>) -> usize {
        if self.phase == LoadPhase::Exhausted {
            return 0;
        }
        let mut inserted = 0;
        for item in items {
            if self.insert(item) {
                inserted += 1;
            }
        }
        self.phase = LoadPhase::after_page(has_more, next_page.as_ref());
        self.next_page = next_page;
        inserted
    }

    /// Fetch failed; allow the next scroll to retry
    pub fn fail_load(&mut self) {
        if self.phase == LoadPhase::Loading {
            self.phase = LoadPhase::Idle;
        }
    }
}

/// True when the viewport bottom is within the threshold of the document end
pub fn near_bottom(viewport_height: f64, scroll_y: f64, document_height: f64) -> bool {
    viewport_height + scroll_y >= document_height - SCROLL_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row(u32, &'static str);

    impl Keyed for Row {
        fn key(&self) -> u32 {
            self.0
        }
    }

    fn token(s: &str) -> Option<PageToken> {
        Some(PageToken(s.to_string()))
    }

    #[test]
    fn test_single_flight() {
        let mut loader = ListLoader::new(vec![Row(1, "a")], true, token("2"));
        assert_eq!(loader.begin_load(), token("2"));
        // Second scroll event before the first fetch resolves
        assert_eq!(loader.begin_load(), None);
        assert!(loader.is_loading());
    }

    #[test]
    fn test_duplicates_are_skipped_and_order_kept() {
        let mut loader = ListLoader::new(vec![Row(1, "a"), Row(2, "b")], true, token("2"));
        loader.begin_load();
        let inserted = loader.finish_load(vec![Row(2, "b-again"), Row(3, "c"), Row(1, "a-again"), Row(4, "d")], true, token("3"));

        assert_eq!(inserted, 2);
        let ids: Vec<_> = loader.items().iter().map(|r| r.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(loader.items()[1].1, "b");
    }

    #[test]
    fn test_user_added_items_share_id_space() {
        let mut loader = ListLoader::new(vec![Row(1, "a")], true, token("2"));
        loader.begin_load();
        assert!(loader.insert(Row(5, "added while loading")));
        loader.finish_load(vec![Row(5, "from server"), Row(6, "f")], true, token("3"));
        let ids: Vec<_> = loader.items().iter().map(|r| r.0).collect();
        assert_eq!(ids, vec![1, 5, 6]);
        assert_eq!(loader.items()[1].1, "added while loading");
    }

    #[test]
    fn test_exhaustion_is_terminal() {
        let mut loader = ListLoader::new(vec![Row(1, "a")], true, token("2"));
        loader.begin_load();
        loader.finish_load(vec![Row(2, "b")], false, None);

        assert!(loader.is_exhausted());
        assert!(loader.show_end_marker());
        assert_eq!(loader.begin_load(), None);
        loader.fail_load();
        assert_eq!(loader.begin_load(), None);
        assert!(loader.show_end_marker());
    }

    #[test]
    fn test_missing_cursor_exhausts() {
        let mut loader = ListLoader::new(vec![Row(1, "a")], true, token("2"));
        loader.begin_load();
        loader.finish_load(vec![], true, None);
        assert!(loader.is_exhausted());
    }

    #[test]
    fn test_failure_allows_retry() {
        let mut loader = ListLoader::new(Vec::<Row>::new(), true, token("2"));
        loader.begin_load();
        loader.fail_load();
        assert_eq!(loader.phase(), LoadPhase::Idle);
        assert_eq!(loader.begin_load(), token("2"));
    }

    #[test]
    fn test_initial_page_without_more() {
        let loader = ListLoader::new(vec![Row(1, "a"), Row(1, "dup")], false, None);
        assert_eq!(loader.items().len(), 1);
        assert!(loader.show_end_marker());

        let empty = ListLoader::<Row>::new(vec![], false, None);
        assert!(!empty.show_end_marker());
    }

    #[test]
    fn test_near_bottom_threshold() {
        assert!(near_bottom(800.0, 1000.0, 2000.0));
        assert!(near_bottom(800.0, 1001.0, 2000.0));
        assert!(!near_bottom(800.0, 999.0, 2000.0));
    }

    #[test]
    fn test_initial_more_without_cursor_is_terminal() {
        let mut loader = ListLoader::new(vec![Row(1, "a")], true, None);
        assert_eq!(loader.begin_load(), None);
        assert!(loader.is_exhausted());
        assert!(loader.show_end_marker());
    }

}
