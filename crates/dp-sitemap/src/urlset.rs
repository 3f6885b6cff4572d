//! Sitemap XML serialization.
//!
//! # Sitemap Format
//!
//! ```xml
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"><url><loc>https://example.com/guide</loc><lastmod>2025-01-01</lastmod></url></urlset>
//! ```
//!
//! Output is compact: no XML declaration, no indentation.

use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::SitemapError;

/// Sitemap protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Date format for `<lastmod>`.
const LASTMOD_FORMAT: &str = "%Y-%m-%d";

/// A single `<url>` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SitemapUrl {
    /// Absolute page URL.
    pub location: String,
    /// Last modification date (UTC).
    pub last_modified: NaiveDate,
}

impl SitemapUrl {
    /// Last modification date as `YYYY-MM-DD`.
    #[must_use]
    pub fn lastmod(&self) -> String {
        self.last_modified.format(LASTMOD_FORMAT).to_string()
    }
}

/// Serialize URLs into a `<urlset>` document.
///
/// # Errors
///
/// Returns [`SitemapError::Write`] if the XML writer fails.
pub fn write_urlset(urls: &[SitemapUrl]) -> Result<String, SitemapError> {
    let mut writer = Writer::new(Vec::with_capacity(128 + urls.len() * 96));

    writer.write_event(Event::Start(
        BytesStart::new("urlset").with_attributes([("xmlns", SITEMAP_NS)]),
    ))?;
    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &url.location)?;
        write_text_element(&mut writer, "lastmod", &url.lastmod())?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner())
        .map_err(|e| SitemapError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

/// Write `<name>text</name>` with the text XML-escaped.
fn write_text_element(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    text: &str,
) -> Result<(), SitemapError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}
