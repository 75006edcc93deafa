use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use site_core::{
    project_for_folder, project_title, ImageSource, Manifest, ManifestMeta, Project, ProjectImage,
    DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH,
};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

const SUPPORTED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "avif"];

/// Folders built when none are given on the command line, in gallery order.
/// `Sites` has catalog copy but is only published on request.
pub const DEFAULT_FOLDERS: [&str; 9] = [
    "Archan",
    "Banaswadi",
    "Harsha",
    "HP Cafeteria",
    "Laggare",
    "Manoj",
    "MPL",
    "Ramu House",
    "Reshma",
];

fn extension(name: &str) -> Option<String> {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
}

pub fn is_supported_image(name: &str) -> bool {
    extension(name).is_some_and(|e| SUPPORTED_EXTENSIONS.contains(&e.as_str()))
}

/// `"<title> - <file stem with - and _ as spaces>"`
pub fn alt_text(title: &str, file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    format!("{title} - {}", stem.replace(['-', '_'], " "))
}

/// Scan one project folder. `Ok(None)` when the folder is missing or holds
/// no supported images; the reason is logged.
pub fn scan_folder(assets_dir: &Path, folder: &str, is_first: bool) -> Result<Option<Project>> {
    let dir = assets_dir.join(folder);
    let entries = match fs::read_dir(&dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Skipping {folder}: {} does not exist", dir.display());
            return Ok(None);
        }
        Err(e) => return Err(e).with_context(|| format!("reading {}", dir.display())),
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("reading {}", dir.display()))?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            files.push(name.to_string());
        }
    }
    files.sort();

    let (images, others): (Vec<String>, Vec<String>) =
        files.into_iter().partition(|f| is_supported_image(f));

    if images.is_empty() {
        log::warn!(
            "No supported images found in {folder} (found {} files)",
            others.len()
        );
        let unsupported: BTreeSet<String> = others
            .iter()
            .filter_map(|f| extension(f))
            .map(|e| format!(".{e}"))
            .collect();
        if !unsupported.is_empty() {
            let list: Vec<&str> = unsupported.iter().map(String::as_str).collect();
            log::warn!("  unsupported formats: {}", list.join(", "));
            log::warn!("  convert these files to JPG, PNG, WebP or AVIF");
            if unsupported.contains(".heic") {
                log::warn!("  HEIC photos must be converted before they can be published");
            }
        }
        return Ok(None);
    }

    let title = project_title(folder);
    let images: Vec<ProjectImage> = images
        .iter()
        .enumerate()
        .map(|(i, name)| {
            log::debug!("Added image: {folder}/{name}");
            ProjectImage {
                original: ImageSource {
                    src: format!("{folder}/{name}"),
                    alt: alt_text(&title, name),
                    width: DEFAULT_IMAGE_WIDTH,
                    height: DEFAULT_IMAGE_HEIGHT,
                },
                variants: Vec::new(),
                is_lcp: is_first && i == 0,
            }
        })
        .collect();

    log::info!("Processed {folder}: {} images", images.len());
    Ok(Some(project_for_folder(folder, images)))
}

/// Scan `folders` in order. The first listed folder supplies the LCP image
/// even if it is skipped, in which case no image is flagged.
pub fn build_manifest(
    assets_dir: &Path,
    folders: &[String],
    built_at: DateTime<Utc>,
) -> Result<Manifest> {
    let mut projects = Vec::new();
    for (i, folder) in folders.iter().enumerate() {
        if let Some(project) = scan_folder(assets_dir, folder, i == 0)? {
            projects.push(project);
        }
    }
    let total_images = projects.iter().map(|p| p.images.len()).sum();
    Ok(Manifest {
        version: u64::try_from(built_at.timestamp_millis()).unwrap_or_default(),
        meta: Some(ManifestMeta {
            total_projects: projects.len(),
            total_images,
            build_date: built_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            optimized: false,
        }),
        projects,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn touch(dir: &Path, folder: &str, names: &[&str]) {
        let d = dir.join(folder);
        fs::create_dir_all(&d).unwrap();
        for n in names {
            fs::write(d.join(n), b"x").unwrap();
        }
    }

    #[test]
    fn extensions_are_matched_case_insensitively() {
        assert!(is_supported_image("IMG_0193.JPG"));
        assert!(is_supported_image("a.jpeg"));
        assert!(is_supported_image("b.AVIF"));
        assert!(!is_supported_image("c.heic"));
        assert!(!is_supported_image("README"));
    }

    #[test]
    fn default_folders_skip_sites() {
        assert!(!DEFAULT_FOLDERS.contains(&"Sites"));
        assert_eq!(DEFAULT_FOLDERS[0], "Archan");
        for folder in DEFAULT_FOLDERS {
            assert!(site_core::catalog_entry(folder).is_some(), "{folder}");
        }
    }

    #[test]
    fn alt_text_uses_title_and_stem() {
        assert_eq!(
            alt_text("Archan Luxury Residence", "living_room-01.jpg"),
            "Archan Luxury Residence - living room 01"
        );
    }

    #[test]
    fn builds_manifest_from_asset_tree() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "Archan", &["b.jpg", "a.PNG", "notes.txt"]);
        touch(tmp.path(), "HP Cafeteria", &["IMG_1.webp"]);
        touch(tmp.path(), "Reshma", &["x.heic", "y.HEIC"]);
        fs::create_dir_all(tmp.path().join("Archan").join("nested")).unwrap();

        let folders: Vec<String> = ["Archan", "Missing", "HP Cafeteria", "Reshma"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let at = Utc.with_ymd_and_hms(2024, 5, 29, 10, 0, 0).unwrap();
        let m = build_manifest(tmp.path(), &folders, at).unwrap();

        let ids: Vec<&str> = m.projects.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["archan", "hp-cafeteria"]);

        let archan = &m.projects[0];
        assert_eq!(archan.title, "Archan Luxury Residence");
        assert_eq!(archan.folder_name, "Archan");
        assert_eq!(archan.total_images, 2);
        assert_eq!(archan.images[0].original.src, "Archan/a.PNG");
        assert!(archan.images[0].is_lcp);
        assert!(!archan.images[1].is_lcp);
        assert!(!m.projects[1].images[0].is_lcp);

        let meta = m.meta.as_ref().unwrap();
        assert_eq!(meta.total_projects, 2);
        assert_eq!(meta.total_images, 3);
        assert_eq!(meta.build_date, "2024-05-29T10:00:00.000Z");
        assert_eq!(m.version, 1_716_976_800_000);
    }

    #[test]
    fn manifest_round_trips_through_the_wire_format() {
        let tmp = TempDir::new().unwrap();
        touch(tmp.path(), "Sites", &["site-visit.jpg"]);
        let m = build_manifest(tmp.path(), &["Sites".to_string()], Utc::now()).unwrap();
        let json = serde_json::to_string_pretty(&m).unwrap();
        assert!(json.contains("\"folderName\": \"Sites\""));
        assert!(json.contains("\"isLCP\": true"));
        assert!(json.contains("\"totalImages\": 1"));
        assert_eq!(Manifest::from_json(&json).unwrap(), m);
    }
}
