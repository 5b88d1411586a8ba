use super::{Listing, BASE_URL, PLACEHOLDER_EXT};
use crate::fetch::Fetch;
use lazy_static::lazy_static;
use scraper::{Html, Selector};
use tracing::warn;

const E: &str = "Invalid selector";
lazy_static! {
    static ref ROW: Selector = Selector::parse(r#"tr[id^="tr_"]"#).expect(E);
    static ref TITLE_LINK: Selector = Selector::parse("td.msg2 a").expect(E);
    static ref PHOTO: Selector = Selector::parse("img.isfoto").expect(E);
    static ref A: Selector = Selector::parse("a").expect(E);
}

/// An index row that passed the title/placeholder filters, before its
/// detail page has been visited.
#[derive(Debug, PartialEq, Eq)]
pub struct Candidate {
    pub title: String,
    pub url: String,
}

pub fn listing_id(title: &str) -> String {
    format!("{:x}", md5::compute(title))
}

/// Walks every `tr[id^="tr_"]` row of the index page and keeps the rows that
/// have a title link and are not flagged with the "no photo" placeholder
/// thumbnail.
pub fn index_candidates(doc: &Html) -> Vec<Candidate> {
    let mut candidates = vec![];
    for row in doc.select(&ROW) {
        let Some(title_elem) = row.select(&TITLE_LINK).next() else {
            continue;
        };

        let placeholder = row.select(&PHOTO).next().map_or(false, |img| {
            img.value()
                .attr("src")
                .unwrap_or_default()
                .to_lowercase()
                .ends_with(PLACEHOLDER_EXT)
        });
        if placeholder {
            continue;
        }

        let Some(href) = title_elem.value().attr("href") else {
            continue;
        };

        let title = title_elem.text().collect::<String>().trim().to_string();
        candidates.push(Candidate {
            title,
            url: format!("{}{}", BASE_URL, href),
        });
    }
    candidates
}

/// Href of the first link wrapping an `img.isfoto`, which on detail pages
/// points at the full-size photo. Relative hrefs get the site origin.
pub fn detail_image_url(doc: &Html) -> Option<String> {
    doc.select(&A)
        .find(|a| a.select(&PHOTO).next().is_some())
        .and_then(|a| a.value().attr("href"))
        .map(|href| {
            if href.starts_with("http") {
                href.to_string()
            } else {
                format!("{}{}", BASE_URL, href)
            }
        })
}

/// Full extraction pass: filter the index rows, then visit each candidate's
/// detail page for its image. A failed detail fetch only costs that
/// listing its image, never the listing itself or its neighbours.
pub async fn extract_listings<F: Fetch>(fetcher: &F, index_html: &str) -> Vec<Listing> {
    let candidates = {
        let doc = Html::parse_document(index_html);
        index_candidates(&doc)
    };

    let mut listings = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let image_url = match fetcher.get(&candidate.url).await {
            Ok(html) => {
                let doc = Html::parse_document(&html);
                detail_image_url(&doc).unwrap_or_default()
            }
            Err(e) => {
                warn!("Error fetching ad details from {}: {}", candidate.url, e);
                String::new()
            }
        };

        listings.push(Listing {
            id: listing_id(&candidate.title),
            title: candidate.title,
            image_url,
            url: candidate.url,
        });
    }
    listings
}
