use crate::config::DownloaderConfig;
use crate::crawlers::crawler::ListingPage;
use crate::error::Result;
use crate::parsers::{ListingParser, NextPage};
use crate::results::LinkSet;
use std::collections::HashSet;

/// Walks a profile's listing pages and collects every presentation link.
///
/// The first page must render its listing container within
/// `listing_timeout_secs`, and every page must show at least one
/// presentation link within `link_timeout_secs`; either timeout aborts the
/// crawl. Pagination stops when the next-page control is absent, carries the
/// placeholder target or no href, points back at a page already visited, or
/// `max_pages` pages have been read.
pub async fn collect_links<P: ListingPage>(
    page: &mut P,
    start_url: &str,
    config: &DownloaderConfig,
) -> Result<LinkSet> {
    let parser = ListingParser::new(config)?;
    let link_selector = config.link_selector();

    ::log::info!("Navigating to {}...", start_url);
    page.goto(start_url).await?;

    ::log::info!("Waiting for the content to load...");
    page.wait_for(&config.listing_selector, config.listing_timeout()).await?;

    let mut links = LinkSet::new();
    let mut visited = HashSet::new();
    visited.insert(start_url.to_string());
    let mut pages_read = 0;

    loop {
        let current = page.current_url().await?;
        visited.insert(current.to_string());
        pages_read += 1;

        ::log::info!("Extracting links from page {}: {}", pages_read, current);
        page.scroll_to_bottom().await?;
        page.wait_for(&link_selector, config.link_timeout()).await?;

        let html = page.source().await?;
        let snapshot = parser.parse(&html, &current);
        let before = links.len();
        links.extend(snapshot.links);
        ::log::info!(
            "Total links found so far: {} ({} new)",
            links.len(),
            links.len() - before
        );

        let next = match snapshot.next {
            NextPage::Url(next) => next,
            NextPage::Absent => {
                ::log::info!("No next-page control found, stopping");
                break;
            }
            NextPage::Placeholder => {
                ::log::info!("Reached the last page");
                break;
            }
            NextPage::MissingHref => {
                ::log::warn!("Next-page control has no usable target, stopping");
                break;
            }
        };

        if visited.contains(next.as_str()) {
            ::log::warn!("Next page {} was already visited, stopping", next);
            break;
        }
        if pages_read >= config.max_pages {
            ::log::warn!("Stopping after {} pages (max_pages)", pages_read);
            break;
        }

        ::log::info!("Moving to the next page...");
        visited.insert(next.to_string());
        page.goto(next.as_str()).await?;
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawlers::testing::{FakePage, listing_html};
    use crate::error::Error;

    const PROFILE: &str = "https://www.slideshare.net/alice";

    fn deck(name: &str) -> String {
        format!("https://www.slideshare.net/alice/{name}")
    }

    #[tokio::test]
    async fn test_single_page_without_next_control() {
        let mut page = FakePage::new()
            .with_page(PROFILE, listing_html(&[deck("one"), deck("two")], None));

        let links = collect_links(&mut page, PROFILE, &DownloaderConfig::default())
            .await
            .unwrap();

        let links: Vec<&String> = links.iter().collect();
        assert_eq!(links, [&deck("one"), &deck("two")]);
    }

    #[tokio::test]
    async fn test_follows_pages_until_placeholder() {
        let page2 = format!("{PROFILE}/presentations/2");
        let page3 = format!("{PROFILE}/presentations/3");
        let mut page = FakePage::new()
            .with_page(
                PROFILE,
                listing_html(&[deck("one")], Some("/alice/presentations/2")),
            )
            .with_page(
                &page2,
                listing_html(&[deck("one"), deck("two")], Some(&page3)),
            )
            .with_page(&page3, listing_html(&[deck("three")], Some("#")));

        let links = collect_links(&mut page, PROFILE, &DownloaderConfig::default())
            .await
            .unwrap();

        assert_eq!(links.len(), 3);
        assert!(links.contains(&deck("three")));
        assert_eq!(page.visits(), vec![PROFILE.to_string(), page2, page3]);
    }

    #[tokio::test]
    async fn test_page_without_new_links_does_not_stop_pagination() {
        let page2 = format!("{PROFILE}/presentations/2");
        let page3 = format!("{PROFILE}/presentations/3");
        let mut page = FakePage::new()
            .with_page(PROFILE, listing_html(&[deck("one")], Some(&page2)))
            .with_page(&page2, listing_html(&[deck("one")], Some(&page3)))
            .with_page(&page3, listing_html(&[deck("late")], None));

        let links = collect_links(&mut page, PROFILE, &DownloaderConfig::default())
            .await
            .unwrap();

        assert_eq!(links.len(), 2);
        assert!(links.contains(&deck("late")));
    }

    #[tokio::test]
    async fn test_self_referential_next_control_stops() {
        let mut page = FakePage::new().with_page(
            PROFILE,
            listing_html(&[deck("one")], Some("/alice")),
        );

        let links = collect_links(&mut page, PROFILE, &DownloaderConfig::default())
            .await
            .unwrap();

        assert_eq!(links.len(), 1);
        assert_eq!(page.visits(), vec![PROFILE.to_string()]);
    }

    #[tokio::test]
    async fn test_max_pages_bounds_the_crawl() {
        let page2 = format!("{PROFILE}/presentations/2");
        let page3 = format!("{PROFILE}/presentations/3");
        let mut page = FakePage::new()
            .with_page(PROFILE, listing_html(&[deck("one")], Some(&page2)))
            .with_page(&page2, listing_html(&[deck("two")], Some(&page3)))
            .with_page(&page3, listing_html(&[deck("three")], None));
        let config = DownloaderConfig {
            max_pages: 2,
            ..DownloaderConfig::default()
        };

        let links = collect_links(&mut page, PROFILE, &config).await.unwrap();

        assert_eq!(links.len(), 2);
        assert!(!links.contains(&deck("three")));
    }

    #[tokio::test]
    async fn test_missing_listing_container_is_fatal() {
        let mut page =
            FakePage::new().with_page(PROFILE, "<html><body>Not found</body></html>".to_string());

        let result = collect_links(&mut page, PROFILE, &DownloaderConfig::default()).await;

        assert!(matches!(result, Err(Error::SelectorTimeout { .. })));
    }

    #[tokio::test]
    async fn test_listing_without_links_is_fatal() {
        let mut page = FakePage::new().with_page(PROFILE, listing_html(&[], None));

        let result = collect_links(&mut page, PROFILE, &DownloaderConfig::default()).await;

        assert!(matches!(
            result,
            Err(Error::SelectorTimeout { ref selector, .. }) if selector.starts_with("a[href^=")
        ));
    }
}
