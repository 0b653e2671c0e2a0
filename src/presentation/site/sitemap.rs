use super::metadata::SiteMetadata;
use crate::domain::location::LocationDataset;
use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Cursor;

/// Top-level pages listed ahead of the location routes.
pub const STATIC_ROUTES: [&str; 5] = [
    "/",
    "/available-locations",
    "/about",
    "/contact-us",
    "/privacy-policy",
];

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

struct SitemapUrl {
    loc: String,
    changefreq: Option<&'static str>,
    priority: Option<&'static str>,
}

/// Every route a crawler should know about, in sitemap order: static pages,
/// then state overviews, then city pages (dataset order).
pub fn sitemap_routes(dataset: &LocationDataset) -> Vec<String> {
    STATIC_ROUTES
        .iter()
        .map(|r| r.to_string())
        .chain(dataset.states().iter().map(|s| format!("/{}", s.slug)))
        .chain(dataset.entries().iter().map(|e| e.path()))
        .collect()
}

fn write_text_element(
    writer: &mut Writer<Cursor<Vec<u8>>>,
    name: &str,
    text: &str,
) -> anyhow::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

pub fn sitemap_xml(
    site: &SiteMetadata,
    dataset: &LocationDataset,
    lastmod: NaiveDate,
) -> anyhow::Result<String> {
    let static_count = STATIC_ROUTES.len();
    let state_count = dataset.state_count();

    let urls = sitemap_routes(dataset)
        .into_iter()
        .enumerate()
        .map(|(i, path)| {
            let (changefreq, priority) = if i < static_count {
                (None, None)
            } else if i < static_count + state_count {
                (Some("monthly"), Some("0.8"))
            } else {
                (Some("monthly"), Some("0.7"))
            };
            SitemapUrl {
                loc: site.absolute_url(&path),
                changefreq,
                priority,
            }
        });

    let lastmod = lastmod.format("%Y-%m-%d").to_string();
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    writer.write_event(Event::Start(urlset))?;

    for url in urls {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &url.loc)?;
        write_text_element(&mut writer, "lastmod", &lastmod)?;
        if let Some(changefreq) = url.changefreq {
            write_text_element(&mut writer, "changefreq", changefreq)?;
        }
        if let Some(priority) = url.priority {
            write_text_element(&mut writer, "priority", priority)?;
        }
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    Ok(String::from_utf8(writer.into_inner().into_inner())?)
}

pub fn robots_txt(site: &SiteMetadata) -> String {
    format!(
        "User-agent: *\nAllow: /\nDisallow: /api/\n\nSitemap: {}\nHost: {}\n",
        site.absolute_url("/sitemap.xml"),
        site.site_url
    )
}
