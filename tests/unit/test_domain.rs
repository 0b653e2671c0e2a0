use bulk_chai::{
    domain::location::{DEFAULT_RELATED_COUNT, LocationDataset, default_faqs, slugify},
    infrastructure::dataset::loader,
};
use std::collections::HashSet;

fn dataset() -> LocationDataset {
    loader::load_embedded().expect("embedded dataset must load")
}

#[test]
fn every_entry_resolves_through_its_slugified_names() {
    let dataset = dataset();
    for entry in dataset.entries() {
        let hit = dataset
            .resolve(&slugify(&entry.state), &slugify(&entry.city))
            .unwrap_or_else(|| panic!("{} / {} did not resolve", entry.state, entry.city));
        assert_eq!(hit, entry);
    }
}

#[test]
fn slugs_are_url_safe_and_stable() {
    let dataset = dataset();
    for entry in dataset.entries() {
        for slug in [&entry.state_slug, &entry.city_slug] {
            assert!(!slug.is_empty());
            assert!(
                slug.chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{slug:?}"
            );
            assert_eq!(&slugify(slug), slug);
        }
    }
}

#[test]
fn enumeration_covers_each_entry_exactly_once() {
    let dataset = dataset();
    let slugs = dataset.location_slugs();
    let unique: HashSet<_> = slugs.iter().cloned().collect();

    assert_eq!(slugs.len(), dataset.city_count());
    assert_eq!(unique.len(), slugs.len());
}

#[test]
fn related_never_includes_the_city_itself() {
    let dataset = dataset();
    for entry in dataset.entries() {
        let related = dataset.related(&entry.city_slug, DEFAULT_RELATED_COUNT);
        assert!(related.len() <= DEFAULT_RELATED_COUNT);
        assert!(related.iter().all(|r| r.city_slug != entry.city_slug));

        let same_state_alternatives = dataset
            .entries()
            .iter()
            .filter(|e| e.state_slug == entry.state_slug && e.city_slug != entry.city_slug)
            .count();
        if same_state_alternatives >= DEFAULT_RELATED_COUNT {
            assert!(
                related.iter().all(|r| r.state_slug == entry.state_slug),
                "{} got cross-state links",
                entry.city
            );
        }
    }
}

#[test]
fn single_city_dataset_resolves_only_that_city() {
    let dataset = LocationDataset::from_json_str(
        r#"{"Goa": {"Panaji": {"transitDays": "5-7 days", "nearbyAreas": ["Porvorim"]}}}"#,
    )
    .unwrap();

    let panaji = dataset.resolve("goa", "panaji").expect("panaji resolves");
    assert_eq!(panaji.city, "Panaji");
    assert_eq!(panaji.nearby_areas, vec!["Porvorim".to_string()]);
    assert!(dataset.resolve("goa", "margao").is_none());
}

#[test]
fn faqs_mention_the_city_and_transit_window() {
    let dataset = dataset();
    let pune = dataset.resolve("maharashtra", "pune").unwrap();
    let faqs = default_faqs(pune);

    assert_eq!(faqs.len(), 4);
    assert!(faqs.iter().any(|f| f.question.contains("Pune")));
    assert!(faqs.iter().any(|f| f.answer.contains(&pune.transit_estimate)));
}
