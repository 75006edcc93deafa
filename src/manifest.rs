//! Fetches the projects manifest, falling back to HEAD checks on the asset folders
//! when it is missing or unreadable. A bad or absent manifest is never an
//! error: the worst case is one placeholder image per known folder.

use site_core::{candidate_paths, catalog_folders, synthesize_project, Manifest, Project, SiteConfig};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Errors only when there is no browser window to fetch from.
pub async fn load(config: &SiteConfig) -> anyhow::Result<Vec<Rc<Project>>> {
    if web::window().is_none() {
        anyhow::bail!("no window to load projects from");
    }
    let projects = match fetch_manifest(&config.manifest_url).await {
        Ok(manifest) => {
            log::info!(
                "[manifest] loaded v{} with {} projects",
                manifest.version,
                manifest.projects.len()
            );
            manifest.into_projects()
        }
        Err(e) => {
            log::warn!("[manifest] {e:#}; checking asset folders instead");
            discover_folders(config).await
        }
    };
    Ok(projects.into_iter().map(Rc::new).collect())
}

async fn fetch_manifest(url: &str) -> anyhow::Result<Manifest> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {:?}", e))?
        .dyn_into::<web::Response>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .as_string()
        .unwrap_or_default();
    Ok(Manifest::from_json(&text)?)
}

async fn discover_folders(config: &SiteConfig) -> Vec<Project> {
    let mut projects = Vec::new();
    for (i, folder) in catalog_folders().enumerate() {
        let mut found = Vec::new();
        for path in candidate_paths(folder) {
            if head_ok(&config.asset_url(&path)).await {
                if let Some((_, name)) = path.split_once('/') {
                    found.push(name.to_string());
                }
            }
        }
        log::debug!("[manifest] {folder}: {} images answered", found.len());
        projects.push(synthesize_project(i, folder, &found));
    }
    log::info!("[manifest] synthesized {} projects from HEAD checks", projects.len());
    projects
}

async fn head_ok(url: &str) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let init = web::RequestInit::new();
    init.set_method("HEAD");
    let Ok(req) = web::Request::new_with_str_and_init(url, &init) else {
        return false;
    };
    match JsFuture::from(window.fetch_with_request(&req)).await {
        Ok(v) => v
            .dyn_into::<web::Response>()
            .map(|r| r.ok())
            .unwrap_or(false),
        Err(_) => false,
    }
}
