// SPDX-FileCopyrightText: 2026 Qroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extraction of results, widgets, and featured snippets from a search page.
//!
//! Pure functions over the page HTML so they can be tested against fixtures.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate};
use qroute_core::{ScrapeOutcome, SearchResult};
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("selector is valid CSS")
}

static RESULT: LazyLock<Selector> = LazyLock::new(|| selector("div.tF2Cxc"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("h3"));
static LINK: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));
static SNIPPET: LazyLock<Selector> = LazyLock::new(|| selector("div.VwiC3b"));
static DATE: LazyLock<Selector> = LazyLock::new(|| selector("span.f"));
static WEATHER: LazyLock<Selector> = LazyLock::new(|| selector("#wob_wc"));
static TEMPERATURE: LazyLock<Selector> = LazyLock::new(|| selector("#wob_tm"));
static WEATHER_ICON: LazyLock<Selector> = LazyLock::new(|| selector("img[alt]"));
static FEATURED: LazyLock<Selector> = LazyLock::new(|| selector("div.VkpGBb"));

/// Date format shown next to news results, e.g. `Oct 15, 2026`.
const DATE_FORMAT: &str = "%b %d, %Y";

/// Limits applied while reading a results page.
#[derive(Debug, Clone, Copy)]
pub struct PageLimits {
    /// Maximum number of results kept.
    pub max_results: usize,
    /// Dated results must be newer than `today - recent_days`.
    pub recent_days: i64,
}

/// Read everything useful out of a results page for `query`.
pub fn parse_results_page(
    html: &str,
    query: &str,
    today: NaiveDate,
    limits: PageLimits,
) -> ScrapeOutcome {
    let document = Html::parse_document(html);

    let live_info = if query.to_lowercase().contains("weather") {
        weather(&document)
    } else {
        None
    };

    let featured_snippet = document
        .select(&FEATURED)
        .next()
        .map(|el| visible_text(&el))
        .filter(|text| !text.is_empty());

    // a window too wide to represent keeps every dated result
    let cutoff = Duration::try_days(limits.recent_days).and_then(|d| today.checked_sub_signed(d));
    let results: Vec<SearchResult> = document
        .select(&RESULT)
        .filter_map(result_from)
        .filter(|result| match (result.date, cutoff) {
            (Some(date), Some(cutoff)) => date > cutoff,
            _ => true,
        })
        .take(limits.max_results)
        .collect();

    debug!(
        results = results.len(),
        live_info = live_info.is_some(),
        featured_snippet = featured_snippet.is_some(),
        "results page parsed"
    );

    ScrapeOutcome {
        results,
        live_info,
        featured_snippet,
    }
}

fn result_from(element: ElementRef<'_>) -> Option<SearchResult> {
    let title = element
        .select(&TITLE)
        .next()
        .map(|el| visible_text(&el))
        .filter(|t| !t.is_empty());
    let url = element
        .select(&LINK)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(str::to_string)
        .filter(|u| !u.is_empty());

    let (Some(title), Some(url)) = (title, url) else {
        warn!("skipping search result without a title or link");
        return None;
    };

    let snippet = element
        .select(&SNIPPET)
        .next()
        .map(|el| visible_text(&el))
        .unwrap_or_default();
    let date = element
        .select(&DATE)
        .next()
        .and_then(|el| parse_date(&visible_text(&el)));

    Some(SearchResult {
        title,
        url,
        snippet,
        date,
    })
}

/// Parse a result date; trailing separators such as `Oct 15, 2026 —` are ignored.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let trimmed = text.trim().trim_end_matches(|c: char| !c.is_ascii_digit());
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).ok()
}

fn weather(document: &Html) -> Option<String> {
    let widget = document.select(&WEATHER).next()?;
    let temperature = widget
        .select(&TEMPERATURE)
        .next()
        .map(|el| visible_text(&el))
        .filter(|t| !t.is_empty());
    let description = widget
        .select(&WEATHER_ICON)
        .next()
        .and_then(|el| el.value().attr("alt"))
        .map(str::trim)
        .filter(|d| !d.is_empty());

    match (temperature, description) {
        (Some(temperature), Some(description)) => {
            Some(format!("Live Weather: {temperature}°C, {description}"))
        }
        _ => {
            debug!("weather widget incomplete");
            None
        }
    }
}

/// Text content with runs of whitespace collapsed.
fn visible_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
