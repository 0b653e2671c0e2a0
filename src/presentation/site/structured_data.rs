//! schema.org JSON-LD blocks embedded in rendered pages.

use super::metadata::SiteMetadata;
use crate::domain::location::{FaqItem, LocationEntry};
use maud::{Markup, PreEscaped, html};
use serde_json::{Value, json};

pub fn organization(site: &SiteMetadata) -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": site.header_title,
        "legalName": site.company_name,
        "foundingDate": site.founding_date,
        "url": site.site_url,
        "logo": site.logo_url(),
        "sameAs": site.social_links,
        "contactPoint": {
            "@type": "ContactPoint",
            "telephone": site.telephone,
            "contactType": "sales",
            "areaServed": "IN",
            "availableLanguage": ["en", "hi"],
        },
    })
}

/// `WholesaleStore` block describing delivery coverage of one city.
pub fn local_business(site: &SiteMetadata, entry: &LocationEntry) -> Value {
    let geo = entry.coordinates_or_default();
    let served = if entry.nearby_areas.is_empty() {
        String::new()
    } else {
        format!(" and surrounding areas like {}", entry.nearby_areas.join(", "))
    };

    json!({
        "@context": "https://schema.org",
        "@type": "WholesaleStore",
        "name": format!("Bulk Chai Supplier in {} - BulkCTC", entry.city),
        "description": format!(
            "Premium wholesale bulk CTC tea supplier serving {}, {}{}.",
            entry.city, entry.state, served
        ),
        "url": site.absolute_url(&entry.path()),
        "telephone": site.telephone,
        "priceRange": "₹₹",
        "address": {
            "@type": "PostalAddress",
            "addressLocality": entry.city,
            "addressRegion": entry.state,
            "addressCountry": "IN",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": geo.lat,
            "longitude": geo.lng,
        },
        "areaServed": {
            "@type": "City",
            "name": entry.city,
        },
    })
}

/// Breadcrumb trail from `(name, path)` pairs, root first.
pub fn breadcrumb(site: &SiteMetadata, items: &[(&str, &str)]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(i, (name, path))| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": name,
                "item": site.absolute_url(path),
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

pub fn faq_page(faqs: &[FaqItem]) -> Value {
    let questions: Vec<Value> = faqs
        .iter()
        .map(|faq| {
            json!({
                "@type": "Question",
                "name": faq.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": faq.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Serializes `value` for a `<script type="application/ld+json">` body.
///
/// `<` is escaped so no string value can close the script element early.
pub fn to_script_json(value: &Value) -> String {
    value.to_string().replace('<', "\\u003c")
}

pub fn json_ld(value: &Value) -> Markup {
    html! {
        script type="application/ld+json" { (PreEscaped(to_script_json(value))) }
    }
}
