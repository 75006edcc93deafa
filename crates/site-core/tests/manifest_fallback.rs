use site_core::{
    candidate_paths, catalog_folders, loop_sequence, synthesize_project, Manifest, SiteConfig,
    FALLBACK_CANDIDATES, PLACEHOLDER_IMAGE,
};
use std::rc::Rc;

#[test]
fn every_folder_yields_images_even_when_nothing_answers() {
    let projects: Vec<_> = catalog_folders()
        .enumerate()
        .map(|(i, folder)| synthesize_project(i, folder, &[]))
        .collect();
    assert!(!projects.is_empty());
    for p in &projects {
        assert!(!p.images.is_empty(), "{} has no images", p.id);
        assert!(p.images[0].original.src.ends_with(PLACEHOLDER_IMAGE));
        assert_eq!(p.total_images, p.images.len());
    }
}

#[test]
fn found_images_become_project_images() {
    let found = vec![FALLBACK_CANDIDATES[10].to_string(), FALLBACK_CANDIDATES[0].to_string()];
    let p = synthesize_project(0, "Archan", &found);
    assert_eq!(p.images.len(), 2);
    assert_eq!(p.images[0].original.src, "Archan/IMG_0193.jpg");
    assert_eq!(p.images[1].original.alt, "Archan project image 2");
    assert!(p.images[0].is_lcp);
    assert!(!p.images[1].is_lcp);
    assert!(candidate_paths("Archan").contains(&"Archan/IMG_0193.jpg".to_string()));
}

#[test]
fn served_manifest_parses_and_fills_gaps() {
    let json = r#"{
        "version": 1717000000000,
        "projects": [
            {
                "id": "archan", "title": "Archan Residence", "folderName": "Archan",
                "description": "", "category": "Residential",
                "images": [{
                    "original": {"src": "Archan/a.jpg", "alt": "a", "width": 1600, "height": 900},
                    "variants": [
                        {"format": "avif", "width": 640, "src": "Archan/a-640.avif"},
                        {"format": "jpeg", "width": 640, "src": "Archan/a-640.jpg"}
                    ],
                    "isLCP": true
                }],
                "totalImages": 1
            },
            {"id": "sites", "title": "Sites", "images": []}
        ],
        "meta": {"totalProjects": 2, "totalImages": 1, "buildDate": "2024-05-29T10:00:00Z", "optimized": false}
    }"#;
    let projects = Manifest::from_json(json).unwrap().into_projects();
    assert_eq!(projects.len(), 2);
    assert!(projects[0].images[0].is_lcp);
    assert_eq!(
        projects[0].images[0].lcp_preload().map(|v| v.src.as_str()),
        Some("Archan/a-640.avif")
    );
    assert_eq!(projects[1].images.len(), 1);
    assert!(Manifest::from_json("{not json").is_err());
}

#[test]
fn strip_drops_excluded_and_repeats() {
    let projects: Vec<_> = ["Archan", "Manoj", "MPL"]
        .iter()
        .enumerate()
        .map(|(i, f)| Rc::new(synthesize_project(i, f, &[])))
        .collect();
    let cfg = SiteConfig::default();
    let strip = loop_sequence(&projects, &cfg.excluded_project_ids);
    let ids: Vec<&str> = strip.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["archan", "mpl", "archan", "mpl"]);
    assert!(Rc::ptr_eq(&strip[0], &strip[2]));
}

#[test]
fn strip_is_empty_when_every_project_is_excluded() {
    let only_manoj = vec![Rc::new(synthesize_project(0, "Manoj", &[]))];
    let cfg = SiteConfig::default();
    assert!(loop_sequence(&only_manoj, &cfg.excluded_project_ids).is_empty());

    let projects: Vec<_> = ["Archan", "MPL"]
        .iter()
        .enumerate()
        .map(|(i, f)| Rc::new(synthesize_project(i, f, &[])))
        .collect();
    let cfg = SiteConfig::default().with_excluded_ids("archan, mpl");
    assert!(loop_sequence(&projects, &cfg.excluded_project_ids).is_empty());
}
