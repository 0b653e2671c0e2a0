//! Page fragments shared by the live renderer and the page generator.
//!
//! Any dataset text that can end up inside a city template goes through
//! [`Literal`], which keeps template slot markers out of the output.

use super::metadata::SiteMetadata;
use crate::domain::location::{FaqItem, LocationDataset, LocationEntry};
use crate::domain::quote::{
    FREIGHT_LADDER_KG, FreightEstimate, MIN_ORDER_KG, format_inr,
    freight::{BASE_RATE_PER_KG, GST_RATE},
};
use maud::{Markup, PreEscaped, Render, html};

/// HTML-escaped text that additionally encodes `{` as a character reference.
pub struct Literal<'a>(pub &'a str);

impl Render for Literal<'_> {
    fn render_to(&self, buffer: &mut String) {
        let escaped = html! { (self.0) }.into_string();
        buffer.push_str(&escaped.replace('{', "&#123;"));
    }
}

pub struct Crumb {
    pub name: Markup,
    pub href: Option<String>,
}

impl Crumb {
    pub fn link(name: impl Render, href: impl Into<String>) -> Self {
        Self {
            name: html! { (name) },
            href: Some(href.into()),
        }
    }

    pub fn current(name: impl Render) -> Self {
        Self {
            name: html! { (name) },
            href: None,
        }
    }
}

pub fn breadcrumbs(crumbs: &[Crumb]) -> Markup {
    html! {
        nav.breadcrumbs aria-label="Breadcrumb" {
            ol {
                @for (i, crumb) in crumbs.iter().enumerate() {
                    @if i > 0 { li aria-hidden="true" { "/" } }
                    @match &crumb.href {
                        Some(href) => { li { a href=(href) { (crumb.name) } } }
                        None => { li.current aria-current="page" { (crumb.name) } }
                    }
                }
            }
        }
    }
}

/// `https://wa.me/<number>?text=<message>` deep link.
pub fn whatsapp_link(site: &SiteMetadata, message: &str) -> String {
    let base = format!("https://wa.me/{}", site.whatsapp);
    match reqwest::Url::parse_with_params(&base, &[("text", message)]) {
        Ok(url) => url.to_string(),
        Err(e) => {
            tracing::warn!("invalid WhatsApp link for {}: {}", site.whatsapp, e);
            base
        }
    }
}

/// Price ladder for one city, each row linking to a pre-filled WhatsApp quote.
pub fn freight_section(site: &SiteMetadata, entry: &LocationEntry) -> Markup {
    html! {
        section.freight {
            h2 { "Calculate Freight & Pricing" }
            table {
                thead {
                    tr {
                        th { "Quantity" }
                        th { "Base Price" }
                        th { "GST (" (GST_RATE * 100.0) "%)" }
                        th { "Total Estimate" }
                        th {}
                    }
                }
                tbody {
                    @for kg in FREIGHT_LADDER_KG {
                        @let estimate = FreightEstimate::for_quantity(kg);
                        tr {
                            td { (kg) " kg" }
                            td { "₹" (format_inr(estimate.subtotal)) }
                            td { "₹" (format_inr(estimate.gst)) }
                            td.total { "₹" (format_inr(estimate.total)) }
                            td {
                                a.whatsapp
                                    href=(whatsapp_link(site, &estimate.quote_message(&entry.city, &entry.state)))
                                    target="_blank" rel="noopener" { "Get Quote on WhatsApp" }
                            }
                        }
                    }
                }
            }
            p.note {
                "Base rate ₹" (format_inr(BASE_RATE_PER_KG)) " per kg. "
                "*Prices are indicative. Final rates depend on quantity and delivery location."
            }
        }
    }
}

pub fn map_section(entry: &LocationEntry) -> Markup {
    let p = entry.coordinates_or_default();
    let src = format!(
        "https://www.openstreetmap.org/export/embed.html?bbox={:.4},{:.4},{:.4},{:.4}&layer=mapnik&marker={:.4},{:.4}",
        p.lng - 0.1,
        p.lat - 0.1,
        p.lng + 0.1,
        p.lat + 0.1,
        p.lat,
        p.lng
    );
    html! {
        section.map {
            h2 { "Our Service Area in " (Literal(&entry.city)) }
            p { "We deliver across " (Literal(&entry.city)) " and surrounding areas" }
            iframe src=(src) width="100%" height="384" style="border:0" loading="lazy"
                referrerpolicy="no-referrer-when-downgrade"
                title={ "Map of " (Literal(&entry.city)) ", " (Literal(&entry.state)) } {}
        }
    }
}

pub fn faq_section(city: &str, faqs: &[FaqItem]) -> Markup {
    html! {
        section.faq {
            h2 { "Frequently Asked Questions - Bulk Tea Supply in " (Literal(city)) }
            @for (i, faq) in faqs.iter().enumerate() {
                details open[i == 0] {
                    summary { (Literal(&faq.question)) }
                    p { (Literal(&faq.answer)) }
                }
            }
        }
    }
}

pub fn related_section(related: &[&LocationEntry]) -> Markup {
    html! {
        @if !related.is_empty() {
            section.related {
                h2 { "Nearby Delivery Locations" }
                ul.card-grid {
                    @for entry in related {
                        li {
                            a href=(entry.path()) {
                                strong { (Literal(&entry.city)) }
                                span.muted { (Literal(&entry.state)) }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Sidebar list of every state, highlighting `current_slug`.
pub fn state_navigator(dataset: &LocationDataset, current_slug: Option<&str>) -> Markup {
    html! {
        nav.state-navigator aria-label="States" {
            h4 { "Browse by State" }
            ul {
                @for state in dataset.states() {
                    @let current = current_slug == Some(state.slug.as_str());
                    li.current[current] {
                        a href={ "/" (state.slug) } { (Literal(&state.name)) }
                        " "
                        span.muted { "(" (state.city_count()) ")" }
                    }
                }
            }
        }
    }
}

/// Where a quote form is rendered and what it can pre-fill.
pub struct QuoteFormContext {
    pub city: Option<Markup>,
    pub state: Option<Markup>,
    pub source_page: String,
}

const QUOTE_FORM_SCRIPT: &str = r#"
document.querySelectorAll('form[data-quote-form]').forEach(function (form) {
  form.addEventListener('submit', function (event) {
    event.preventDefault();
    var status = form.querySelector('[data-quote-status]');
    var data = new FormData(form);
    var quantity = Number(data.get('quantity_kg'));
    var rate = Number(form.getAttribute('data-rate'));
    var payload = {
      name: data.get('name'),
      email: data.get('email'),
      phone: data.get('phone'),
      company_name: data.get('company_name'),
      city: data.get('city'),
      state: data.get('state'),
      quantity_kg: quantity,
      estimated_amount: quantity * rate,
      message: data.get('message'),
      source_page: data.get('source_page'),
      turnstile_token: data.get('cf-turnstile-response')
    };
    status.textContent = 'Submitting...';
    fetch('/api/quote', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify(payload)
    }).then(function (res) {
      return res.json().then(function (body) {
        if (res.ok) {
          status.textContent = 'Thank you! We will contact you shortly with a quote.';
          form.reset();
        } else {
          status.textContent = body.error || 'Failed to submit quote';
        }
        if (window.turnstile) { window.turnstile.reset(); }
      });
    }).catch(function () {
      status.textContent = 'Network error. Please try again.';
    });
  });
});
"#;

pub fn quote_form(site: &SiteMetadata, ctx: &QuoteFormContext) -> Markup {
    let rate_with_gst = BASE_RATE_PER_KG * (1.0 + GST_RATE);
    html! {
        section.quote {
            h2 { "Request a Bulk Price Quote" }
            form data-quote-form data-rate=(rate_with_gst) {
                label { "Name*" input name="name" required autocomplete="name"; }
                label { "Email*" input type="email" name="email" required autocomplete="email"; }
                label { "Phone" input type="tel" name="phone" autocomplete="tel"; }
                label { "Company" input name="company_name" autocomplete="organization"; }
                @match &ctx.city {
                    Some(city) => { input type="hidden" name="city" value=(city); }
                    None => { label { "City*" input name="city" required; } }
                }
                @match &ctx.state {
                    Some(state) => { input type="hidden" name="state" value=(state); }
                    None => { label { "State*" input name="state" required; } }
                }
                label {
                    "Quantity (kg)*"
                    input type="number" name="quantity_kg" min=(MIN_ORDER_KG) step="10" value="100" required;
                }
                label {
                    "Message"
                    textarea name="message" rows="3" placeholder="Any specific requirements or questions?" {}
                }
                input type="hidden" name="source_page" value=(ctx.source_page);
                @if let Some(key) = &site.turnstile_site_key {
                    div.cf-turnstile data-sitekey=(key) {}
                }
                button type="submit" { "Get Price Quote" }
                p data-quote-status role="status" {}
            }
            @if site.turnstile_site_key.is_some() {
                script src="https://challenges.cloudflare.com/turnstile/v0/api.js" async defer {}
            }
            script { (PreEscaped(QUOTE_FORM_SCRIPT)) }
        }
    }
}

const LOCATION_FINDER_SCRIPT: &str = r#"
document.querySelectorAll('[data-location-finder]').forEach(function (finder) {
  var input = finder.querySelector('input');
  var list = finder.querySelector('ul');
  var empty = finder.querySelector('[data-finder-empty]');
  var pending = 0;
  input.addEventListener('input', function () {
    var query = input.value.trim();
    var ticket = ++pending;
    if (!query) { list.replaceChildren(); empty.hidden = true; return; }
    fetch('/api/v1/locations/search?q=' + encodeURIComponent(query))
      .then(function (res) { return res.json(); })
      .then(function (matches) {
        if (ticket !== pending) { return; }
        list.replaceChildren.apply(list, matches.map(function (m) {
          var item = document.createElement('li');
          var link = document.createElement('a');
          link.href = m.path;
          link.textContent = m.city + ', ' + m.state;
          item.appendChild(link);
          return item;
        }));
        empty.hidden = matches.length > 0;
      });
  });
});
"#;

/// Search box that suggests city pages as the visitor types.
pub fn location_finder() -> Markup {
    html! {
        div.location-finder data-location-finder {
            label {
                span.muted { "Find your city" }
                input type="search" autocomplete="off"
                    placeholder="Search for your city (e.g. Mumbai, Surat)...";
            }
            ul role="listbox" {}
            p.muted data-finder-empty hidden { "No locations found." }
            script { (PreEscaped(LOCATION_FINDER_SCRIPT)) }
        }
    }
}

pub fn contact_cta(site: &SiteMetadata) -> Markup {
    html! {
        section.cta {
            h2 { "Talk to Our Bulk Supply Team" }
            p { "Call " a href={ "tel:" (site.telephone) } { (site.telephone) }
                " or email " a href={ "mailto:" (site.email) } { (site.email) } "." }
            p.muted { (site.business_hours) }
            a.button href=(whatsapp_link(site, "Hi, I would like to discuss bulk CTC tea supply.")) {
                "Chat on WhatsApp"
            }
        }
    }
}
