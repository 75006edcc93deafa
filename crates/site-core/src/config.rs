use crate::carousel::CarouselConfig;

/// Page-level settings. Every field has a sensible default; the front-end
/// overrides a few of them from `data-*` attributes in the markup.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    /// Prefix joined to manifest-relative image paths.
    pub assets_base: String,
    pub manifest_url: String,
    /// Project ids never shown in the gallery strip.
    pub excluded_project_ids: Vec<String>,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            assets_base: "assets/".to_string(),
            manifest_url: "./assets/projects-manifest.json".to_string(),
            excluded_project_ids: vec!["manoj".to_string()],
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Replace the excluded ids with a comma separated list. Blank entries
    /// are dropped, so an empty attribute disables the exclusion entirely.
    pub fn with_excluded_ids(mut self, csv: &str) -> Self {
        self.excluded_project_ids = csv
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self
    }

    pub fn is_excluded(&self, project_id: &str) -> bool {
        self.excluded_project_ids.iter().any(|id| id == project_id)
    }

    pub fn asset_url(&self, relative: &str) -> String {
        let base = self.assets_base.trim_end_matches('/');
        let rel = relative.trim_start_matches('/');
        if base.is_empty() {
            rel.to_string()
        } else {
            format!("{base}/{rel}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_manoj() {
        let cfg = SiteConfig::default();
        assert!(cfg.is_excluded("manoj"));
        assert!(!cfg.is_excluded("archan"));
    }

    #[test]
    fn excluded_ids_parse_from_csv() {
        let cfg = SiteConfig::default().with_excluded_ids(" sites, ,mpl ");
        assert_eq!(cfg.excluded_project_ids, vec!["sites", "mpl"]);
        let none = SiteConfig::default().with_excluded_ids("");
        assert!(none.excluded_project_ids.is_empty());
    }

    #[test]
    fn asset_url_joins_with_single_slash() {
        let cfg = SiteConfig::default();
        assert_eq!(cfg.asset_url("Archan/a.jpg"), "assets/Archan/a.jpg");
        assert_eq!(cfg.asset_url("/Archan/a.jpg"), "assets/Archan/a.jpg");
    }
}
