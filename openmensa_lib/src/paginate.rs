//! Gathers every page of a paginated listing into one ordered `Vec`.
//!
//! The first response tells us how many pages exist. All remaining pages are
//! then requested at once and joined; items are concatenated in page order no
//! matter which request finishes first.
//!
//! The number of requests in flight is only bounded by the page count the
//! server reports. That is fine for the canteen directory (a few dozen pages
//! at most) but there is no cap for larger listings.

use std::future::Future;

use futures::future::try_join_all;
use openmensa_api::types::Page;

/// Fetches page 1 through `fetch_page`, then every remaining page concurrently.
///
/// Fails as soon as any page fails; no partial result is returned.
pub async fn fetch_all<T, E, F, Fut>(fetch_page: F) -> Result<Vec<T>, E>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let first = fetch_page(1).await?;
    collect_remaining(first, fetch_page).await
}

/// Completes a listing whose first page has already been fetched.
///
/// A first page without a body contributes no items. When the page metadata
/// is missing or reports at most one page, `fetch_page` is never called.
pub async fn collect_remaining<T, E, F, Fut>(first: Page<T>, fetch_page: F) -> Result<Vec<T>, E>
where
    F: Fn(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let total_pages = first.total_pages();
    let mut items = first.into_items();
    if total_pages <= 1 {
        return Ok(items);
    }

    tracing::debug!("Fetching {} remaining pages concurrently", total_pages - 1);
    let pending: Vec<Fut> = (2..=total_pages).map(&fetch_page).collect();
    let pages = try_join_all(pending).await?;

    for page in pages {
        items.extend(page.into_items());
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::time::Duration;

    use openmensa_api::types::PageInfo;
    use tokio::time::{sleep, Instant};

    use super::*;

    /// In-memory paginated listing that records every request it serves.
    struct FakeListing {
        pages: HashMap<u32, Page<char>>,
        delays_ms: HashMap<u32, u64>,
        failing: Option<u32>,
        requested: Mutex<Vec<u32>>,
        completed: Mutex<Vec<u32>>,
    }

    impl FakeListing {
        fn new(contents: Vec<Vec<char>>) -> Self {
            let total = contents.len() as i64;
            let pages = contents
                .into_iter()
                .enumerate()
                .map(|(i, items)| {
                    let n = i as u32 + 1;
                    let info = PageInfo::new(n as i64, total, 0, None);
                    (n, Page::new(Some(items), Some(info)))
                })
                .collect();
            Self {
                pages,
                delays_ms: HashMap::new(),
                failing: None,
                requested: Mutex::new(Vec::new()),
                completed: Mutex::new(Vec::new()),
            }
        }

        fn with_delay(mut self, page: u32, ms: u64) -> Self {
            self.delays_ms.insert(page, ms);
            self
        }

        fn failing_on(mut self, page: u32) -> Self {
            self.failing = Some(page);
            self
        }

        async fn fetch(&self, page: u32) -> Result<Page<char>, String> {
            self.requested.lock().unwrap().push(page);
            if let Some(ms) = self.delays_ms.get(&page) {
                sleep(Duration::from_millis(*ms)).await;
            }
            self.completed.lock().unwrap().push(page);
            if self.failing == Some(page) {
                return Err(format!("page {} failed", page));
            }
            self.pages
                .get(&page)
                .cloned()
                .ok_or_else(|| format!("page {} does not exist", page))
        }

        fn requested(&self) -> Vec<u32> {
            self.requested.lock().unwrap().clone()
        }

        fn completed(&self) -> Vec<u32> {
            self.completed.lock().unwrap().clone()
        }
    }

    #[tokio::test]
    async fn merges_three_pages_in_order() {
        let listing = FakeListing::new(vec![vec!['A', 'B'], vec!['C'], vec!['D', 'E']]);
        let items = fetch_all(|page| listing.fetch(page)).await.unwrap();
        assert_eq!(items, vec!['A', 'B', 'C', 'D', 'E']);
        assert_eq!(listing.requested(), vec![1, 2, 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn order_is_independent_of_completion_order() {
        let listing = FakeListing::new(vec![vec!['A', 'B'], vec!['C'], vec!['D', 'E'], vec!['F']])
            .with_delay(2, 30)
            .with_delay(3, 20)
            .with_delay(4, 10);

        let items = fetch_all(|page| listing.fetch(page)).await.unwrap();

        assert_eq!(listing.completed(), vec![1, 4, 3, 2]);
        assert_eq!(items, vec!['A', 'B', 'C', 'D', 'E', 'F']);
    }

    #[tokio::test(start_paused = true)]
    async fn remaining_pages_are_requested_concurrently() {
        let listing = FakeListing::new(vec![vec!['A'], vec!['B'], vec!['C'], vec!['D']])
            .with_delay(2, 100)
            .with_delay(3, 100)
            .with_delay(4, 100);

        let start = Instant::now();
        let items = fetch_all(|page| listing.fetch(page)).await.unwrap();

        assert_eq!(items.len(), 4);
        // Sequential fetching would take 300ms.
        assert!(start.elapsed() < Duration::from_millis(200));
    }

    #[tokio::test]
    async fn single_page_issues_no_further_requests() {
        let listing = FakeListing::new(vec![vec!['A', 'B']]);
        let items = fetch_all(|page| listing.fetch(page)).await.unwrap();
        assert_eq!(items, vec!['A', 'B']);
        assert_eq!(listing.requested(), vec![1]);
    }

    #[tokio::test]
    async fn two_pages_issue_exactly_one_more_request() {
        let listing = FakeListing::new(vec![vec!['A'], vec!['B']]);
        let items = fetch_all(|page| listing.fetch(page)).await.unwrap();
        assert_eq!(items, vec!['A', 'B']);
        assert_eq!(listing.requested(), vec![1, 2]);
    }

    #[tokio::test]
    async fn request_count_is_total_pages_minus_one() {
        for n in 1..=8u32 {
            let contents: Vec<Vec<char>> = (0..n)
                .map(|i| vec![char::from(b'a' + i as u8); i as usize + 1])
                .collect();
            let listing = FakeListing::new(contents.clone());

            let first = listing.fetch(1).await.unwrap();
            let items = collect_remaining(first, |page| listing.fetch(page))
                .await
                .unwrap();

            assert_eq!(listing.requested().len() as u32 - 1, n - 1);
            let expected: Vec<char> = contents.concat();
            assert_eq!(items, expected);
        }
    }

    #[tokio::test]
    async fn missing_metadata_means_single_page() {
        let listing = FakeListing::new(vec![vec!['X'], vec!['Y']]);
        let first = Page::new(Some(vec!['A']), None);
        let items = collect_remaining(first, |page| listing.fetch(page))
            .await
            .unwrap();
        assert_eq!(items, vec!['A']);
        assert!(listing.requested().is_empty());
    }

    #[tokio::test]
    async fn non_positive_total_pages_is_clamped() {
        let listing = FakeListing::new(vec![vec!['X'], vec!['Y']]);
        for total in [0, -3] {
            let first = Page::new(Some(vec!['A']), Some(PageInfo::new(1, total, 1, None)));
            let items = collect_remaining(first, |page| listing.fetch(page))
                .await
                .unwrap();
            assert_eq!(items, vec!['A']);
        }
        assert!(listing.requested().is_empty());
    }

    #[tokio::test]
    async fn missing_body_on_first_page_is_empty() {
        let listing = FakeListing::new(vec![vec![], vec!['C'], vec!['D']]);
        let first = Page::new(None, Some(PageInfo::new(1, 3, 2, None)));
        let items = collect_remaining(first, |page| listing.fetch(page))
            .await
            .unwrap();
        assert_eq!(items, vec!['C', 'D']);
        assert_eq!(listing.requested(), vec![2, 3]);
    }

    #[tokio::test]
    async fn any_failing_page_fails_the_aggregate() {
        let listing = FakeListing::new(vec![vec!['A'], vec!['B'], vec!['C']]).failing_on(2);
        let err = fetch_all(|page| listing.fetch(page)).await.unwrap_err();
        assert_eq!(err, "page 2 failed");
    }

    #[tokio::test]
    async fn failing_first_page_issues_nothing_else() {
        let listing = FakeListing::new(vec![vec!['A'], vec!['B']]).failing_on(1);
        assert!(fetch_all(|page| listing.fetch(page)).await.is_err());
        assert_eq!(listing.requested(), vec![1]);
    }
}
