//! Project manifest model and the fallback used when no manifest is served.
//!
//! The manifest is written by `manifest-builder` and read by the web
//! front-end. Image paths are relative to the assets directory, e.g.
//! `Archan/IMG_0193.jpg`.

use crate::constants::{
    DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, LCP_PRELOAD_MAX_WIDTH, PLACEHOLDER_IMAGE,
};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("malformed manifest: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub version: u64,
    pub projects: Vec<Project>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<ManifestMeta>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMeta {
    pub total_projects: usize,
    pub total_images: usize,
    pub build_date: String,
    pub optimized: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub folder_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub images: Vec<ProjectImage>,
    #[serde(default)]
    pub total_images: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub original: ImageSource,
    #[serde(default)]
    pub variants: Vec<ImageVariant>,
    #[serde(rename = "isLCP", default)]
    pub is_lcp: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    DEFAULT_IMAGE_WIDTH
}

fn default_height() -> u32 {
    DEFAULT_IMAGE_HEIGHT
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Avif,
    Webp,
    Jpeg,
    #[serde(other)]
    Other,
}

impl ImageFormat {
    pub fn mime(self) -> Option<&'static str> {
        match self {
            ImageFormat::Avif => Some("image/avif"),
            ImageFormat::Webp => Some("image/webp"),
            ImageFormat::Jpeg => Some("image/jpeg"),
            ImageFormat::Other => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageVariant {
    pub format: ImageFormat,
    pub width: u32,
    pub src: String,
}

impl Manifest {
    pub fn from_json(text: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Consume the manifest, giving any image-less project the placeholder so
    /// every card and modal has something to show.
    pub fn into_projects(self) -> Vec<Project> {
        self.projects
            .into_iter()
            .map(|mut p| {
                if p.images.is_empty() {
                    log::warn!("[manifest] project {} has no images, using placeholder", p.id);
                    p.images.push(placeholder_image(&p.folder_name, &p.title));
                }
                p.total_images = p.images.len();
                p
            })
            .collect()
    }
}

impl Project {
    pub fn cover(&self) -> Option<&ProjectImage> {
        self.images.first()
    }
}

impl ProjectImage {
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// `srcset` value for one format, or `None` when no variant has it.
    pub fn srcset(&self, format: ImageFormat, url_for: impl Fn(&str) -> String) -> Option<String> {
        let parts: Vec<String> = self
            .variants
            .iter()
            .filter(|v| v.format == format)
            .map(|v| format!("{} {}w", url_for(&v.src), v.width))
            .collect();
        (!parts.is_empty()).then(|| parts.join(", "))
    }

    /// Variant worth preloading for an LCP image: the first small enough
    /// AVIF, then WebP, then JPEG.
    pub fn lcp_preload(&self) -> Option<&ImageVariant> {
        [ImageFormat::Avif, ImageFormat::Webp, ImageFormat::Jpeg]
            .into_iter()
            .find_map(|format| {
                self.variants
                    .iter()
                    .find(|v| v.format == format && v.width <= LCP_PRELOAD_MAX_WIDTH)
            })
    }
}

/// Stable project id: lowercase, every run of non `[a-z0-9]` collapsed to `-`.
pub fn project_id(folder: &str) -> String {
    let lower = folder.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut in_gap = false;
    for ch in lower.chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            out.push(ch);
            in_gap = false;
        } else if !in_gap {
            out.push('-');
            in_gap = true;
        }
    }
    out
}

/// Marketing copy for a known asset folder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectFolder {
    pub folder: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

pub const PROJECT_CATALOG: &[ProjectFolder] = &[
    ProjectFolder {
        folder: "Archan",
        title: "Archan Luxury Residence",
        description: "Premium residential interior design featuring contemporary aesthetics with traditional Indian elements. Custom furniture and elegant color schemes create sophisticated living spaces.",
        category: "Luxury Residential",
    },
    ProjectFolder {
        folder: "Banaswadi",
        title: "Banaswadi Modern Apartment",
        description: "Stylish apartment interior design with space optimization and modern functionality. Smart storage solutions and vibrant decor enhance urban living comfort.",
        category: "Modern Apartment",
    },
    ProjectFolder {
        folder: "Harsha",
        title: "Harsha Family Home",
        description: "Warm family home interior design blending comfort with style. Child-friendly spaces and cozy living areas perfect for modern family lifestyle.",
        category: "Family Home",
    },
    ProjectFolder {
        folder: "HP Cafeteria",
        title: "HP Corporate Cafeteria",
        description: "Professional cafeteria design for HP with modern industrial aesthetics. Efficient layout and contemporary furnishing create an inviting dining environment.",
        category: "Commercial Design",
    },
    ProjectFolder {
        folder: "Laggare",
        title: "Laggare Contemporary Villa",
        description: "Luxurious villa interior design with open-concept living and premium finishes. Seamless indoor-outdoor flow and sophisticated material palette.",
        category: "Contemporary Villa",
    },
    ProjectFolder {
        folder: "Manoj",
        title: "Manoj Executive Residence",
        description: "Executive home interior design featuring rich textures and bold design elements. Professional yet comfortable spaces ideal for entertaining.",
        category: "Executive Residence",
    },
    ProjectFolder {
        folder: "MPL",
        title: "MPL Commercial Project",
        description: "Commercial interior design project showcasing professional workspace solutions. Modern office aesthetics with productivity-focused design elements.",
        category: "Commercial Design",
    },
    ProjectFolder {
        folder: "Ramu House",
        title: "Ramu Modern Residence",
        description: "Contemporary residential interior design featuring clean lines and functional elegance. Modern living spaces with thoughtful design elements and premium finishes.",
        category: "Modern Residence",
    },
    ProjectFolder {
        folder: "Reshma",
        title: "Reshma Boutique Home",
        description: "Boutique residential design with personalized touches and artistic flair. Unique color combinations and custom design elements reflect individual style.",
        category: "Boutique Residential",
    },
    ProjectFolder {
        folder: "Sites",
        title: "Construction Sites Portfolio",
        description: "Construction and renovation project documentation showcasing our design process from concept to completion. Behind-the-scenes of our design implementation.",
        category: "Construction Portfolio",
    },
];

pub fn catalog_entry(folder: &str) -> Option<&'static ProjectFolder> {
    PROJECT_CATALOG.iter().find(|f| f.folder == folder)
}

pub fn catalog_folders() -> impl Iterator<Item = &'static str> {
    PROJECT_CATALOG.iter().map(|f| f.folder)
}

/// Filenames checked with HEAD requests when the manifest is unavailable.
pub const FALLBACK_CANDIDATES: &[&str] = &[
    "PHOTO-2023-11-25-10-29-41 2.jpg",
    "PHOTO-2023-11-25-10-29-44.jpg",
    "PHOTO-2023-11-25-10-29-46.jpg",
    "PHOTO-2023-11-25-10-29-47.jpg",
    "PHOTO-2023-07-20-23-11-58.jpg",
    "PHOTO-2023-11-25-10-09-39.jpg",
    "IMG_20220429_124409.jpg",
    "IMG_20220429_124702.jpg",
    "IMG_20220502_023305.jpg",
    "IMG_20220502_023324.jpg",
    "IMG_0193.jpg",
    "PHOTO-2023-11-25-10-02-18.jpg",
];

/// Assets-relative paths to check for one folder.
pub fn candidate_paths(folder: &str) -> Vec<String> {
    FALLBACK_CANDIDATES
        .iter()
        .map(|name| format!("{folder}/{name}"))
        .collect()
}

fn placeholder_image(folder: &str, title: &str) -> ProjectImage {
    let src = if folder.is_empty() {
        PLACEHOLDER_IMAGE.to_string()
    } else {
        format!("{folder}/{PLACEHOLDER_IMAGE}")
    };
    ProjectImage {
        original: ImageSource {
            src,
            alt: format!("{title} placeholder image"),
            width: DEFAULT_IMAGE_WIDTH,
            height: DEFAULT_IMAGE_HEIGHT,
        },
        variants: Vec::new(),
        is_lcp: false,
    }
}

/// Wrap `images` in a project carrying the catalog copy for `folder`, or
/// generic copy for folders the catalog does not know.
pub fn project_for_folder(folder: &str, images: Vec<ProjectImage>) -> Project {
    let entry = catalog_entry(folder);
    Project {
        id: project_id(folder),
        title: project_title(folder),
        folder_name: folder.to_string(),
        description: entry
            .map(|e| e.description.to_string())
            .unwrap_or_else(|| format!("{folder} project showcasing our interior design expertise")),
        category: entry
            .map(|e| e.category.to_string())
            .unwrap_or_else(|| "Interior Design".to_string()),
        total_images: images.len(),
        images,
    }
}

pub fn project_title(folder: &str) -> String {
    catalog_entry(folder)
        .map(|e| e.title.to_string())
        .unwrap_or_else(|| folder.to_string())
}

/// Build a project for `folder` from the filenames that answered a HEAD check.
/// `folder_index` is the folder's position in the lookup order; image 0 of
/// folder 0 is flagged as the LCP candidate.
pub fn synthesize_project(folder_index: usize, folder: &str, found: &[String]) -> Project {
    let mut images: Vec<ProjectImage> = found
        .iter()
        .enumerate()
        .map(|(i, name)| ProjectImage {
            original: ImageSource {
                src: format!("{folder}/{name}"),
                alt: format!("{folder} project image {}", i + 1),
                width: DEFAULT_IMAGE_WIDTH,
                height: DEFAULT_IMAGE_HEIGHT,
            },
            variants: Vec::new(),
            is_lcp: folder_index == 0 && i == 0,
        })
        .collect();
    if images.is_empty() {
        images.push(placeholder_image(folder, &project_title(folder)));
    }
    project_for_folder(folder, images)
}

/// Gallery strip order: excluded ids removed, then the list repeated once so
/// the carousel can wrap without a visible gap.
pub fn loop_sequence<P>(projects: &[P], excluded: &[String]) -> Vec<P>
where
    P: Borrow<Project> + Clone,
{
    let kept: Vec<P> = projects
        .iter()
        .filter(|p| {
            let project: &Project = (*p).borrow();
            !excluded.iter().any(|id| *id == project.id)
        })
        .cloned()
        .collect();
    let mut out = Vec::with_capacity(kept.len() * 2);
    out.extend(kept.iter().cloned());
    out.extend(kept);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_id_collapses_non_alphanumerics() {
        assert_eq!(project_id("Archan"), "archan");
        assert_eq!(project_id("HP Cafeteria"), "hp-cafeteria");
        assert_eq!(project_id("Ramu  House!"), "ramu-house-");
        assert_eq!(project_id("MPL"), "mpl");
    }

    #[test]
    fn synthesized_project_uses_catalog_copy() {
        let p = synthesize_project(0, "Archan", &["IMG_0193.jpg".to_string()]);
        assert_eq!(p.id, "archan");
        assert_eq!(p.title, "Archan Luxury Residence");
        assert_eq!(p.images[0].original.src, "Archan/IMG_0193.jpg");
        assert!(p.images[0].is_lcp);
        assert!(p.images[0].variants.is_empty());
    }

    #[test]
    fn unknown_folder_gets_generic_copy() {
        let p = synthesize_project(3, "Studio", &[]);
        assert_eq!(p.title, "Studio");
        assert_eq!(p.category, "Interior Design");
        assert_eq!(p.images.len(), 1);
        assert_eq!(p.images[0].original.src, "Studio/placeholder.jpg");
        assert!(!p.images[0].is_lcp);
    }

    #[test]
    fn srcset_lists_matching_variants() {
        let img = ProjectImage {
            original: ImageSource {
                src: "A/a.jpg".into(),
                alt: String::new(),
                width: 1920,
                height: 1080,
            },
            variants: vec![
                ImageVariant { format: ImageFormat::Webp, width: 480, src: "A/a-480.webp".into() },
                ImageVariant { format: ImageFormat::Avif, width: 960, src: "A/a-960.avif".into() },
                ImageVariant { format: ImageFormat::Webp, width: 960, src: "A/a-960.webp".into() },
            ],
            is_lcp: true,
        };
        let webp = img.srcset(ImageFormat::Webp, |s| format!("assets/{s}"));
        assert_eq!(
            webp.as_deref(),
            Some("assets/A/a-480.webp 480w, assets/A/a-960.webp 960w")
        );
        assert!(img.srcset(ImageFormat::Jpeg, |s| s.to_string()).is_none());
        // the only AVIF is too wide, so WebP wins
        assert_eq!(img.lcp_preload().map(|v| v.src.as_str()), Some("A/a-480.webp"));
    }

    #[test]
    fn unknown_variant_format_is_tolerated() {
        let json = r#"{"format":"png","width":100,"src":"x.png"}"#;
        let v: ImageVariant = serde_json::from_str(json).unwrap();
        assert_eq!(v.format, ImageFormat::Other);
        assert!(v.format.mime().is_none());
    }
}
