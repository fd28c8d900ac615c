//! End-to-end tests over the sample site data

mod common;

use common::fixtures::{load_fixture, sample_site_config};
use groupsite_bibtex::{parse_bibliography, parse_entry};
use groupsite_core::view::{self, PresentationConfig};
use groupsite_core::{DataConfig, SelectionChange, Site, SiteConfig, SiteData, SiteError};

fn sample_site() -> Site {
    Site::from(SiteData::load(&sample_site_config()).unwrap())
}

fn visible_ids(site: &Site) -> Vec<&str> {
    site.visible().iter().map(|r| r.id.as_str()).collect()
}

// === Loading ===

#[test]
fn test_load_sample_site() {
    let data = SiteData::load(&sample_site_config()).unwrap();
    assert_eq!(data.group.name, "MULTI");
    assert_eq!(data.team.len(), 3);
    assert_eq!(data.publications.len(), 5);
}

#[test]
fn test_malformed_entry_is_dropped() {
    let parsed = parse_bibliography(&load_fixture("site/publications.bib"));
    assert_eq!(parsed.records.len(), 5);
    assert_eq!(parsed.skipped, 1);
    assert!(parsed.records.iter().all(|r| r.id != "broken-entry"));
}

#[test]
fn test_sample_order() {
    let site = sample_site();
    assert_eq!(
        visible_ids(&site),
        vec![
            "anderson2024thesis",
            "smith2023halos",
            "lee2021lensing",
            "smith2021review",
            "talk-undated",
        ]
    );
}

#[test]
fn test_sample_record_fields() {
    let site = sample_site();
    let lee = site
        .publications()
        .iter()
        .find(|r| r.id == "lee2021lensing")
        .unwrap();
    assert_eq!(lee.kind, "inproceedings");
    assert_eq!(lee.title, "Weak Lensing with {LSST}");
    assert_eq!(lee.authors, vec!["Lee, Ann", "Brandon, Sandy"]);
    assert_eq!(lee.venue, "Proceedings of the Cosmology Workshop");

    let halos = &site.publications()[1];
    assert_eq!(halos.title, "The Shapes of {Dark Matter} Halos");
    assert_eq!(halos.doi.as_deref(), Some("10.3847/1538-4357/abc123"));
}

#[test]
fn test_open_site_from_config() {
    let config = SiteConfig {
        data: sample_site_config(),
        ..SiteConfig::default()
    };
    let site = Site::open(&config).unwrap();
    assert_eq!(site.group().name, "MULTI");
    assert_eq!(site.visible_count(), 5);
}

#[test]
fn test_open_reports_missing_data_as_load_error() {
    let config = SiteConfig {
        data: DataConfig::in_dir("no/such/site"),
        ..SiteConfig::default()
    };
    match Site::open(&config) {
        Err(SiteError::Load(err)) => assert!(err.path().ends_with("group.json")),
        other => panic!("expected a load error, got {other:?}"),
    }
}

#[test]
fn test_open_validates_config_first() {
    let mut config = SiteConfig {
        data: sample_site_config(),
        ..SiteConfig::default()
    };
    config.search.debounce_ms = 0;
    assert!(matches!(Site::open(&config), Err(SiteError::Config(_))));
}

// === Filtering ===

#[test]
fn test_member_filters() {
    let mut site = sample_site();

    site.toggle_member("jsmith");
    assert_eq!(
        visible_ids(&site),
        vec!["smith2023halos", "smith2021review", "talk-undated"]
    );

    site.toggle_member("alee");
    assert_eq!(visible_ids(&site), vec!["smith2023halos"]);

    site.toggle_member("manderson");
    assert_eq!(
        visible_ids(&site),
        vec!["anderson2024thesis", "smith2023halos"]
    );
}

#[test]
fn test_member_and_search_compose() {
    let mut site = sample_site();
    site.commit_search("HALO");
    assert_eq!(
        visible_ids(&site),
        vec!["smith2023halos", "smith2021review"]
    );

    site.select_member("alee");
    assert_eq!(visible_ids(&site), vec!["smith2023halos"]);

    assert_eq!(site.toggle_member("alee"), SelectionChange::Cleared);
    assert_eq!(site.visible_count(), 5);
}

#[test]
fn test_search_by_year_and_venue() {
    let mut site = sample_site();
    site.commit_search("2021");
    assert_eq!(
        visible_ids(&site),
        vec!["lee2021lensing", "smith2021review"]
    );

    site.commit_search("physics reports");
    assert_eq!(visible_ids(&site), vec!["smith2021review"]);
}

// === Export ===

#[test]
fn test_copy_bibtex_round_trips() {
    let mut site = sample_site();
    site.toggle_member("manderson");

    let raw = site.raw_source_at(0).unwrap();
    assert!(raw.starts_with("@misc{anderson2024thesis,"));
    assert!(raw.ends_with('}'));

    let original = site.visible_at(0).unwrap();
    let reparsed = parse_entry(raw).unwrap();
    assert_eq!(reparsed.id, original.id);
    assert_eq!(reparsed.title, original.title);
    assert_eq!(reparsed.authors, original.authors);
    assert_eq!(reparsed.year, original.year);
}

// === Views ===

#[test]
fn test_multi_variant_views() {
    let mut site = sample_site();
    let config = PresentationConfig {
        class_prefix: "multi-".to_string(),
        ..PresentationConfig::default()
    };

    site.toggle_member("manderson");
    let list = view::publication_list(&site);
    assert_eq!(list[0].venue, "PhD Thesis, 2024");
    assert_eq!(view::results_count_label(list.len()), "2 publications");

    let cards = view::team_cards(&site, &config);
    assert_eq!(cards.iter().filter(|c| c.selected).count(), 1);
    // Members without a photo fall back to the placeholder
    assert_eq!(cards[2].photo, "images/team/placeholder.jpg");
    assert_eq!(config.class("team-card"), "multi-team-card");

    let detail = view::member_detail(&site, &config).unwrap();
    assert_eq!(detail.name, "Maria Anderson");
    assert!(detail.contact.is_empty());
}
