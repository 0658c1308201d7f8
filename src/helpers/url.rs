//! URL helper functions

use crate::config::SiteConfig;

/// True for absolute URLs that should be left untouched
pub fn is_external(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//")
}

/// Generate a URL with the site root path
///
/// # Examples
/// ```ignore
/// url_for(&config, "/images/logo.png") // -> "/folio/images/logo.png"
/// ```
pub fn url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }

    let root = config.root.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        format!("{}/", root)
    } else {
        format!("{}/{}", root, path)
    }
}

/// Generate a full URL including the domain
pub fn full_url_for(config: &SiteConfig, path: &str) -> String {
    if is_external(path) {
        return path.to_string();
    }
    let base = config.url.trim_end_matches('/');
    format!("{}{}", base, url_for(config, path))
}
