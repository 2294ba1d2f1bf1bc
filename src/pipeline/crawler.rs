use std::collections::HashSet;

use once_cell::sync::Lazy;
use reqwest::{Client, Url};
use scraper::{Html, Selector};
use tracing::{debug, warn};

use super::{CrawlRequest, PipelineError};

// Static selectors to avoid recompiling them on every page
static BODY_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("body").expect("Failed to parse body selector"));

static LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("Failed to parse link selector"));

/// Fetch the article and, depth permitting, a handful of linked pages,
/// returning their concatenated text content.
///
/// The starting page must be reachable; linked pages that fail to load
/// are skipped with a warning.
pub async fn crawl(client: &Client, request: &CrawlRequest) -> Result<String, PipelineError> {
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier = vec![request.url.clone()];
    let mut pages: Vec<String> = Vec::new();

    for depth in 0..=request.max_depth {
        let mut next_frontier = Vec::new();

        for url in frontier.drain(..) {
            if !visited.insert(url.clone()) {
                continue;
            }

            debug!(%url, depth, "fetching page");
            let html = match fetch_html(client, &url).await {
                Ok(html) => html,
                // The root page is the article itself; anything deeper is best effort
                Err(e) if depth == 0 => return Err(e),
                Err(e) => {
                    warn!(%url, error = %e, "skipping unreachable linked page");
                    continue;
                }
            };

            let document = Html::parse_document(&html);
            if let Some(text) = extract_text(&document) {
                pages.push(text);
            }

            if depth < request.max_depth {
                next_frontier.extend(extract_links(&document, &url, request.max_links));
            }
        }

        frontier = next_frontier;
        if frontier.is_empty() {
            break;
        }
    }

    let combined = pages.join("\n\n");
    if combined.trim().is_empty() {
        return Err(PipelineError::new(format!(
            "No readable content found at {}",
            request.url
        )));
    }

    Ok(combined)
}

async fn fetch_html(client: &Client, url: &str) -> Result<String, PipelineError> {
    let response = client.get(url).send().await?;
    if !response.status().is_success() {
        return Err(PipelineError::new(format!(
            "Failed to fetch {}: HTTP {}",
            url,
            response.status()
        )));
    }
    let html = response.text().await?;
    Ok(html)
}

/// Text content of the page's `<body>`, with whitespace collapsed.
fn extract_text(document: &Html) -> Option<String> {
    let body = document.select(&BODY_SELECTOR).next()?;
    let text = tidy_text(body.text());
    if text.is_empty() { None } else { Some(text) }
}

/// Absolute URLs of the first `max_links` in-page links, resolved
/// against the page's own URL. Non-HTTP schemes are ignored.
fn extract_links(document: &Html, base_url: &str, max_links: usize) -> Vec<String> {
    let Ok(base) = Url::parse(base_url) else {
        return Vec::new();
    };

    document
        .select(&LINK_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base.join(href).ok())
        .filter(|url| url.scheme() == "http" || url.scheme() == "https")
        .map(|url| url.to_string())
        .filter(|url| url.as_str() != base_url)
        .take(max_links)
        .collect()
}

fn tidy_text<'a>(fragments: impl Iterator<Item = &'a str>) -> String {
    let mut result = String::new();
    for word in fragments.flat_map(str::split_whitespace) {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(word);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><head><title>Ignored</title></head>
        <body>
            <h1>Breaking news</h1>
            <p>Something   happened
            today.</p>
            <a href="/related">Related</a>
            <a href="https://elsewhere.example/more">More</a>
            <a href="mailto:tips@example.com">Tips</a>
        </body></html>
    "#;

    #[test]
    fn extracts_collapsed_body_text() {
        let document = Html::parse_document(PAGE);
        let text = extract_text(&document).unwrap();
        // Anchor text is body text too
        assert_eq!(text, "Breaking news Something happened today. Related More Tips");
    }

    #[test]
    fn collapses_whitespace_inside_a_single_text_node() {
        let document = Html::parse_document(
            "<html><body><p>Something   happened\n            today.</p></body></html>",
        );
        assert_eq!(extract_text(&document).unwrap(), "Something happened today.");
    }

    #[test]
    fn extract_text_is_none_for_empty_body() {
        let document = Html::parse_document("<html><body>   </body></html>");
        assert!(extract_text(&document).is_none());
    }

    #[test]
    fn resolves_relative_links_against_the_page_url() {
        let document = Html::parse_document(PAGE);
        let links = extract_links(&document, "https://example.com/articles/1", 5);
        assert_eq!(
            links,
            vec![
                "https://example.com/related".to_string(),
                "https://elsewhere.example/more".to_string(),
            ]
        );
    }

    #[test]
    fn honours_the_link_limit() {
        let document = Html::parse_document(PAGE);
        let links = extract_links(&document, "https://example.com/articles/1", 1);
        assert_eq!(links, vec!["https://example.com/related".to_string()]);
    }

    #[test]
    fn skips_non_http_links() {
        let document =
            Html::parse_document(r#"<body><a href="mailto:a@b.c">mail</a></body>"#);
        let links = extract_links(&document, "https://example.com", 5);
        assert!(links.is_empty());
    }
}
