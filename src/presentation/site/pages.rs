use super::components::{
    Crumb, Literal, QuoteFormContext, breadcrumbs, contact_cta, location_finder, quote_form,
    state_navigator, whatsapp_link,
};
use super::layout::page;
use super::metadata::{PageMeta, SiteMetadata};
use super::structured_data::{breadcrumb, json_ld};
use crate::domain::location::{LocationDataset, LocationEntry, StateGroup};
use maud::{Markup, html};

pub fn home(site: &SiteMetadata, dataset: &LocationDataset) -> Markup {
    let meta = PageMeta::new(site, &site.title, None).canonical("/");

    page(
        site,
        &meta,
        html! {
            section.hero {
                h1 { "Bulk CTC Tea for Cafes, Offices and Distributors" }
                p {
                    (site.company_name) " supplies wholesale chai to businesses in "
                    (dataset.city_count()) " cities across " (dataset.state_count())
                    " states, with GST invoicing and a minimum order of 50 kg."
                }
                a.button href="/contact-us" { "Request a Price Quote" }
            }
            section {
                h2 { "Where We Deliver" }
                ul.card-grid {
                    @for state in dataset.states() {
                        li {
                            a href={ "/" (state.slug) } {
                                strong { (Literal(&state.name)) }
                                span.muted { (state.city_count()) " cities" }
                            }
                        }
                    }
                }
                p { a href="/available-locations" { "View all delivery locations →" } }
            }
            (contact_cta(site))
        },
    )
}

/// Index of every state and city, both sorted by name.
pub fn available_locations(site: &SiteMetadata, dataset: &LocationDataset) -> Markup {
    let meta = PageMeta::new(
        site,
        "Available Locations - Bulk CTC Tea Supplier Across India | BulkCTC",
        Some(
            "Find bulk CTC tea suppliers in your city. We deliver premium wholesale tea across \
             India. View all locations and get competitive quotes.",
        ),
    )
    .canonical("/available-locations");

    let mut states: Vec<(&StateGroup, Vec<&LocationEntry>)> = dataset
        .states()
        .iter()
        .map(|state| {
            let mut cities: Vec<&LocationEntry> = dataset.cities_in(state).collect();
            cities.sort_by(|a, b| a.city.cmp(&b.city));
            (state, cities)
        })
        .collect();
    states.sort_by(|(a, _), (b, _)| a.name.cmp(&b.name));

    page(
        site,
        &meta,
        html! {
            (json_ld(&breadcrumb(site, &[("Home", "/"), ("Locations", "/available-locations")])))
            (breadcrumbs(&[Crumb::link("Home", "/"), Crumb::current("Locations")]))
            h1 { "Available Delivery Locations" }
            p {
                "We supply premium bulk CTC tea to businesses across India. Select your state and "
                "city to view detailed delivery information, pricing, and estimated transit times."
            }
            div.facts {
                div { strong { (dataset.state_count()) } p.muted { "States" } }
                div { strong { (dataset.city_count()) } p.muted { "Cities" } }
                div { strong { "50 kg" } p.muted { "Minimum Order" } }
            }
            (location_finder())
            @for (state, cities) in &states {
                section.state {
                    h2 { a href={ "/" (state.slug) } { (Literal(&state.name)) } }
                    p.muted {
                        (state.city_count()) " "
                        @if state.city_count() == 1 { "city" } @else { "cities" }
                        " available"
                    }
                    ul.card-grid {
                        @for entry in cities {
                            li { a href=(entry.path()) { strong { (Literal(&entry.city)) } } }
                        }
                    }
                }
            }
            section.cta {
                h2 { "Don't See Your City?" }
                p {
                    "We're constantly expanding our delivery network. Contact us to check if we "
                    "can deliver to your location."
                }
                a.button href=(whatsapp_link(site, "Hi, I want to check if you deliver to my city"))
                    target="_blank" rel="noopener noreferrer" { "Contact Us on WhatsApp" }
            }
        },
    )
}

/// Overview page for one state: coverage, logistics and links to its cities.
pub fn state_page(site: &SiteMetadata, dataset: &LocationDataset, state: &StateGroup) -> Markup {
    let title = format!("Bulk Tea Supplier in {} | Wholesale Chai | BulkCTC", state.name);
    let description = format!(
        "Leading bulk CTC tea supplier in {0}. We deliver premium wholesale chai to hotels, \
         offices, and retailers across {0}. Check our delivery locations.",
        state.name
    );
    let state_path = format!("/{}", state.slug);
    let meta = PageMeta::new(site, &title, Some(&description)).canonical(state_path.clone());
    let logistics = dataset.state_logistics(state);
    let city_count = state.city_count();

    page(
        site,
        &meta,
        html! {
            (json_ld(&breadcrumb(site, &[
                ("Home", "/"),
                ("Locations", "/available-locations"),
                (state.name.as_str(), state_path.as_str()),
            ])))
            (breadcrumbs(&[
                Crumb::link("Home", "/"),
                Crumb::link("Locations", "/available-locations"),
                Crumb::current(Literal(&state.name)),
            ]))

            h1 { "Bulk Tea Supply in " (Literal(&state.name)) }
            p {
                (site.company_name) " is a premier supplier of bulk CTC tea across "
                strong { (Literal(&state.name)) } ". We serve " (city_count)
                " major cities in the region, providing consistent quality assurance, GST "
                "billing, and reliable logistics for businesses."
            }

            section {
                h2 { "Supply Network in " (Literal(&state.name)) }
                p {
                    "Our distribution network in " (Literal(&state.name)) " is designed to meet "
                    "the high-volume demands of wholesalers, semi-wholesalers, and institutional "
                    "buyers. " (Literal(&logistics))
                }
                p {
                    "Whether you are running a chain of tea stalls, a large café, or an "
                    "industrial canteen, we ensure timely delivery of fresh stock directly to "
                    "your doorstep."
                }
            }

            section {
                h2 { "Available Cities in " (Literal(&state.name)) }
                ul.card-grid {
                    @for entry in dataset.cities_in(state) {
                        li {
                            a href=(entry.path()) {
                                strong { (Literal(&entry.city)) }
                                span.muted { "View Details →" }
                            }
                        }
                    }
                }
            }

            section.cta {
                h3 { "Partner with Us in " (Literal(&state.name)) }
                p {
                    "Looking for a reliable long-term tea partner? We offer sample testing and "
                    "custom blending options for large orders."
                }
                a.button href="/contact-us" { "Request Samples" }
            }

            aside {
                (state_navigator(dataset, Some(&state.slug)))
                div.quick-facts {
                    h4 { "Quick Facts" }
                    ul {
                        li { "Cities Covered: " strong { (city_count) } }
                        li { "Min Order: " strong { "50 kg" } }
                        li { "Delivery: " strong { "3-7 Days" } }
                    }
                }
            }
        },
    )
}

pub fn contact(site: &SiteMetadata) -> Markup {
    let meta = PageMeta::new(
        site,
        "Contact Us - Bulk Tea Quotes",
        Some("Request a wholesale price quote for bulk CTC tea delivered anywhere in India."),
    )
    .canonical("/contact-us");

    page(
        site,
        &meta,
        html! {
            (breadcrumbs(&[Crumb::link("Home", "/"), Crumb::current("Contact Us")]))
            h1 { "Contact Our Bulk Supply Team" }
            div.facts {
                div { p.muted { "Phone" } a href={ "tel:" (site.telephone) } { (site.telephone) } }
                div { p.muted { "Email" } a href={ "mailto:" (site.email) } { (site.email) } }
                div { p.muted { "Business Hours" } strong { (site.business_hours) } }
            }
            (quote_form(site, &QuoteFormContext {
                city: None,
                state: None,
                source_page: "/contact-us".into(),
            }))
        },
    )
}

/// Sister sites run by the same company, as `(name, url, summary)`.
const SISTER_SITES: [(&str, &str, &str); 3] = [
    (
        "PureCha.in",
        "https://purecha.in",
        "An informational website focused on loose leaf tea, tea purity, leaf grades, and \
         quality characteristics across different tea types.",
    ),
    (
        "BulkCTC.com",
        "https://bulkctc.com",
        "An informational website focused specifically on CTC tea, including grades, \
         processing methods, particle sizes, and brewing behaviour.",
    ),
    (
        "GrayCup.org",
        "https://graycup.org",
        "The official company website of Gray Cup, providing information about the brand, \
         sourcing philosophy, and its tea and coffee offerings.",
    ),
];

pub fn about(site: &SiteMetadata) -> Markup {
    let meta = PageMeta::new(
        site,
        "About BulkChai | Bulk CTC Tea & Chai Supplier in India",
        Some(
            "BulkChai supplies bulk CTC chai while sharing clear information about tea grades, \
             processing, color, and quality. Built for businesses that value consistency and \
             clarity.",
        ),
    )
    .canonical("/about");

    page(
        site,
        &meta,
        html! {
            (breadcrumbs(&[Crumb::link("Home", "/"), Crumb::current("About")]))
            h1 { "About BulkChai" }
            p {
                "BulkChai is a bulk chai and CTC tea platform built for businesses that care about "
                "tea quality, consistency, and clarity. Alongside supplying chai in bulk, we share "
                "practical information about CTC tea, grades, processing methods, and quality "
                "differences."
            }
            section {
                h2 { "What BulkChai Focuses On" }
                p {
                    "Chai is often discussed only in terms of price, but quality depends on much "
                    "more: CTC grades, leaf size, oxidation levels, color, strength, and freshness. "
                    "BulkChai explains these factors clearly so buyers understand what they are "
                    "purchasing."
                }
            }
            section {
                h2 { "Chai, CTC Tea & Grades Explained" }
                p {
                    "Not all chai looks or tastes the same. Some brews appear darker, stronger, or "
                    "brisker due to differences in CTC processing, particle size, and leaf "
                    "composition. We share how CTC tea is made, how grades differ, and how those "
                    "differences affect taste, color, and consistency."
                }
            }
            section {
                h2 { "Bulk Supply for Businesses" }
                p {
                    "BulkChai supplies chai in bulk quantities for cafés, offices, retailers, "
                    "traders, and other commercial buyers, starting at a 50 kg minimum order."
                }
            }
            section {
                h2 { "Who BulkChai Is For" }
                p {
                    "Business owners, procurement teams, tea traders, and professionals who want "
                    "both access to bulk chai and a better understanding of CTC tea quality."
                }
            }
            section {
                h2 { "Relationship with Gray Cup" }
                p {
                    "BulkChai is operated by " (site.company_name) ". Alongside educational "
                    "content about chai and CTC tea, it is where eligible buyers can explore bulk "
                    "sourcing through official Gray Cup channels."
                }
            }
            section {
                h2 { "Other Informational Websites by Gray Cup" }
                ul {
                    @for (name, url, summary) in SISTER_SITES {
                        li {
                            a href=(url) target="_blank" rel="noopener" { (name) }
                            " – " (summary)
                        }
                    }
                }
            }
            (contact_cta(site))
        },
    )
}

pub fn privacy_policy(site: &SiteMetadata) -> Markup {
    let meta = PageMeta::new(
        site,
        "Privacy Policy",
        Some(
            "Privacy Policy for Bulk Chai - Learn how Gray Cup Enterprises Pvt. Ltd. collects, \
             uses, and protects your personal information.",
        ),
    )
    .canonical("/privacy-policy");

    let collected = [
        ("Contact Information", "Name, email address, phone number and business name"),
        ("Order Information", "Delivery city and state, quantities and delivery preferences"),
        ("Communication Records", "Messages, inquiries, and feedback you send to us"),
    ];
    let uses = [
        ("Quotes and Orders", "To prepare price quotes and fulfil bulk tea orders"),
        ("Customer Service", "To respond to your inquiries and provide support"),
        ("Freight Calculation", "To estimate shipping costs for your location"),
        ("Legal Compliance", "To meet applicable law, including GST requirements"),
    ];
    let rights = [
        ("Access", "Request access to your personal information"),
        ("Correction", "Request correction of inaccurate or incomplete data"),
        ("Deletion", "Request deletion of your data, subject to legal obligations"),
        ("Withdraw Consent", "Opt out of marketing communications at any time"),
    ];

    page(
        site,
        &meta,
        html! {
            (breadcrumbs(&[Crumb::link("Home", "/"), Crumb::current("Privacy Policy")]))
            h1 { "Privacy Policy" }
            section {
                h2 { "Introduction" }
                p {
                    "Bulk Chai is operated by " (site.company_name) ". This policy explains how we "
                    "collect, use, and safeguard your information when you visit "
                    (site.site_url) " or use our services."
                }
            }
            section {
                h2 { "Information We Collect" }
                (labelled_list(&collected))
                p {
                    "When you visit the website we may also record your IP address, browser type, "
                    "pages visited, and referring addresses. The quote form is protected by "
                    "Cloudflare Turnstile, which receives your IP address for bot checks."
                }
            }
            section {
                h2 { "How We Use Your Information" }
                (labelled_list(&uses))
            }
            section {
                h2 { "Information Sharing and Disclosure" }
                p {
                    "We share information with logistics partners and service providers as needed "
                    "to deliver orders, and with authorities when required by law. We do not sell, "
                    "rent, or trade your personal information."
                }
            }
            section {
                h2 { "Data Security" }
                p {
                    "We use technical and organizational measures to protect your information. No "
                    "method of transmission over the internet is completely secure, so absolute "
                    "security cannot be guaranteed."
                }
            }
            section {
                h2 { "Cookies and Tracking Technologies" }
                p {
                    "Cookies help us understand site traffic. You can control them through your "
                    "browser settings; disabling them may affect some features."
                }
            }
            section {
                h2 { "Your Rights" }
                (labelled_list(&rights))
                p {
                    "To exercise these rights, contact us at "
                    a href={ "mailto:" (site.email) } { (site.email) } "."
                }
            }
            section {
                h2 { "Data Retention" }
                p {
                    "We keep personal information only as long as needed for the purposes above. "
                    "Order histories and invoices may be retained for accounting and tax "
                    "compliance under Indian law."
                }
            }
            section {
                h2 { "Third-Party Links" }
                p {
                    "Our website may link to third-party sites whose privacy practices we do not "
                    "control. Review their policies before sharing personal information."
                }
            }
            section {
                h2 { "Children's Privacy" }
                p {
                    "Our services are intended for business users and are not directed to anyone "
                    "under 18. We do not knowingly collect information from minors."
                }
            }
            section {
                h2 { "Changes to This Privacy Policy" }
                p { "Material changes will be published on this page." }
            }
            section {
                h2 { "Contact Us" }
                address {
                    strong { (site.company_name) } br;
                    "Email: " a href={ "mailto:" (site.email) } { (site.email) } br;
                    "Website: " a href=(site.site_url) { (site.site_url) }
                }
            }
            section {
                h2 { "Governing Law" }
                p {
                    "This policy is governed by the laws of India, and disputes are subject to "
                    "the exclusive jurisdiction of Indian courts."
                }
            }
        },
    )
}

fn labelled_list(items: &[(&str, &str)]) -> Markup {
    html! {
        ul {
            @for (label, text) in items {
                li { strong { (label) ":" } " " (text) }
            }
        }
    }
}

pub fn not_found(site: &SiteMetadata) -> Markup {
    let meta = PageMeta::new(site, "Page Not Found", None).noindex();
    page(
        site,
        &meta,
        html! {
            h1 { "Page Not Found" }
            p { "We couldn't find the page you were looking for." }
            p {
                a href="/available-locations" { "Browse delivery locations" }
                " or "
                a href="/" { "go back home" }
                "."
            }
        },
    )
}
