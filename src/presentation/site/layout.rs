use super::components::Literal;
use super::metadata::{FooterLocations, PageMeta, SiteMetadata};
use super::structured_data::{json_ld, organization};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLES: &str = r#"
:root { --brand: #15803d; --ink: #111827; --muted: #6b7280; --line: #e5e7eb; }
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; color: var(--ink); line-height: 1.6; }
a { color: var(--brand); }
.site-header, .site-footer { padding: 1rem 1.5rem; border-bottom: 1px solid var(--line); }
.site-header nav { display: flex; gap: 1.5rem; align-items: center; }
.site-header .brand { font-weight: 700; font-size: 1.25rem; margin-right: auto; }
.site-footer { border-top: 1px solid var(--line); border-bottom: 0; color: var(--muted); font-size: .875rem; }
main { max-width: 60rem; margin: 0 auto; padding: 2rem 1.5rem; }
.breadcrumbs ol { display: flex; gap: .5rem; list-style: none; padding: 0; font-size: .875rem; }
.breadcrumbs .current { font-weight: 600; }
section { margin-bottom: 3rem; }
.muted { color: var(--muted); font-size: .875rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(12rem, 1fr)); gap: 1rem; list-style: none; padding: 0; }
.card-grid a { display: block; padding: 1rem; border: 1px solid var(--line); border-radius: .5rem; text-decoration: none; }
.card-grid strong { display: block; color: var(--ink); }
.facts { display: grid; grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr)); gap: 1rem; }
.facts div { padding: 1rem; border: 1px solid var(--line); border-radius: .5rem; }
table { width: 100%; border-collapse: collapse; }
th, td { text-align: left; padding: .5rem; border-bottom: 1px solid var(--line); }
form label { display: block; margin-bottom: .75rem; }
form input, form textarea { display: block; width: 100%; padding: .5rem; }
button, .button { background: var(--brand); color: #fff; border: 0; padding: .75rem 1.5rem; border-radius: .375rem; text-decoration: none; }
.state-navigator ul { list-style: none; padding: 0; }
.state-navigator .current { font-weight: 700; }
.footer-locations { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 1.5rem; }
.footer-locations ul { list-style: none; padding: 0; margin: 0; }
.location-finder input { width: 100%; padding: .75rem; }
.location-finder ul { list-style: none; padding: 0; }
"#;

/// Wraps `body` in the shared document shell: head metadata, navigation,
/// footer and the site-wide Organization block.
pub fn page(site: &SiteMetadata, meta: &PageMeta, body: Markup) -> Markup {
    let url = meta
        .canonical
        .as_deref()
        .map(|path| site.absolute_url(path))
        .unwrap_or_else(|| site.site_url.clone());
    let banner = site.social_banner_url();

    html! {
        (DOCTYPE)
        html lang="en-IN" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                meta name="robots" content=(meta.robots());
                @if meta.canonical.is_some() {
                    link rel="canonical" href=(url);
                }
                meta property="og:title" content=(meta.title);
                meta property="og:description" content=(meta.description);
                meta property="og:url" content=(url);
                meta property="og:site_name" content=(site.title);
                meta property="og:image" content=(banner);
                meta property="og:locale" content=(site.locale);
                meta property="og:type" content="website";
                meta name="twitter:card" content="summary_large_image";
                meta name="twitter:title" content=(meta.title);
                meta name="twitter:description" content=(meta.description);
                meta name="twitter:image" content=(banner);
                meta name="twitter:site" content=(site.twitter_handle);
                style { (PreEscaped(STYLES)) }
                (json_ld(&organization(site)))
            }
            body {
                header.site-header {
                    nav {
                        a.brand href="/" { (site.header_title) }
                        a href="/available-locations" { "Locations" }
                        a href="/about" { "About" }
                        a href="/contact-us" { "Contact" }
                    }
                }
                main { (body) }
                footer.site-footer {
                    (footer_locations(&site.footer_locations))
                    p {
                        "© " (site.company_name) " · "
                        a href={ "tel:" (site.telephone) } { (site.telephone) }
                        " · "
                        a href={ "mailto:" (site.email) } { (site.email) }
                    }
                    p { "Minimum order 50 kg · GST invoicing on every order · " (site.business_hours) }
                    p {
                        a href="/about" { "About" }
                        " · "
                        a href="/privacy-policy" { "Privacy Policy" }
                        " · "
                        a href="/sitemap.xml" { "Sitemap" }
                    }
                }
            }
        }
    }
}

fn footer_locations(links: &FooterLocations) -> Markup {
    html! {
        @if !links.is_empty() {
            div.footer-locations {
                nav aria-label="Popular delivery locations" {
                    h3 { "Popular Delivery Locations" }
                    ul {
                        @for link in &links.popular_cities {
                            li { a href=(link.href) { (Literal(&link.label)) } }
                        }
                    }
                }
                nav aria-label="Key states" {
                    h3 { "Key States" }
                    ul {
                        @for link in &links.states {
                            li { a href=(link.href) { (Literal(&link.label)) } }
                        }
                        li { a href="/available-locations" { "View All Locations →" } }
                    }
                }
            }
        }
    }
}
