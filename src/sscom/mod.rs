mod extract;

pub use extract::{detail_image_url, extract_listings, index_candidates, listing_id, Candidate};

use std::fmt;

pub const BASE_URL: &str = "https://www.ss.com";
pub const INDEX_URL: &str = "https://www.ss.com/lv/transport/cars/audi/a7/fDgSeF4belM=.html";

/// Thumbnail suffix used by the site for its "no photo" placeholder.
pub const PLACEHOLDER_EXT: &str = ".gif";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Hex MD5 of the title. Two listings with identical titles collide.
    pub id: String,
    pub title: String,
    pub image_url: String,
    pub url: String,
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}>", self.title, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MonitorError;
    use crate::fetch::Fetch;
    use pretty_assertions::assert_eq;
    use scraper::Html;
    use std::collections::HashMap;
    use std::fs;

    struct FixtureFetcher {
        pages: HashMap<String, String>,
    }

    #[async_trait::async_trait]
    impl Fetch for FixtureFetcher {
        async fn get(&self, url: &str) -> Result<String, MonitorError> {
            self.pages.get(url).cloned().ok_or_else(|| {
                MonitorError::Io(std::io::Error::new(std::io::ErrorKind::NotFound, url))
            })
        }
    }

    #[test]
    fn test_index_candidates_from_fixture() {
        let html = fs::read_to_string("tests/htmls/index.html").expect("Invalid file path");
        let doc = Html::parse_document(&html);

        let candidates = index_candidates(&doc);
        let titles: Vec<&str> = candidates.iter().map(|c| c.title.as_str()).collect();

        // The fixture has four tr_ rows: two real listings, one placeholder
        // thumbnail and one row without a title link.
        assert_eq!(
            titles,
            vec![
                "Audi A7 3.0 TDI quattro, 180 kW",
                "Audi A7 Sportback 50 TDI"
            ]
        );
        assert_eq!(
            candidates[0].url,
            "https://www.ss.com/msg/lv/transport/cars/audi/a7/abcde.html"
        );
    }

    #[tokio::test]
    async fn test_extract_listings_with_details() {
        let index = fs::read_to_string("tests/htmls/index.html").expect("Invalid file path");
        let detail = fs::read_to_string("tests/htmls/detail.html").expect("Invalid file path");

        let mut pages = HashMap::new();
        pages.insert(
            "https://www.ss.com/msg/lv/transport/cars/audi/a7/abcde.html".to_string(),
            detail,
        );
        let fetcher = FixtureFetcher { pages };

        let listings = extract_listings(&fetcher, &index).await;
        assert_eq!(listings.len(), 2);

        assert_eq!(
            listings[0],
            Listing {
                id: listing_id("Audi A7 3.0 TDI quattro, 180 kW"),
                title: "Audi A7 3.0 TDI quattro, 180 kW".to_string(),
                image_url: "https://www.ss.com/gallery/audi-a7-large.jpg".to_string(),
                url: "https://www.ss.com/msg/lv/transport/cars/audi/a7/abcde.html".to_string(),
            }
        );

        // Second listing's detail page is not served, so its image degrades
        // to empty but the listing itself survives.
        assert_eq!(listings[1].title, "Audi A7 Sportback 50 TDI");
        assert_eq!(listings[1].image_url, "");
    }
}
