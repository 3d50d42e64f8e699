use landing::{PageConfig, PageError};
use web_sys::Document;

/// `<script type="application/json" id="landing-config">{ ... }</script>`
pub(super) const CONFIG_ELEMENT_ID: &str = "landing-config";

pub(super) enum ConfigSource {
    Defaults,
    Page,
    /// The page supplied a config block that did not parse.
    Fallback(PageError),
}

pub(super) fn load_page_config(doc: &Document) -> (PageConfig, ConfigSource) {
    let Some(raw) = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content())
    else {
        return (PageConfig::default(), ConfigSource::Defaults);
    };

    if raw.trim().is_empty() {
        return (PageConfig::default(), ConfigSource::Defaults);
    }

    match PageConfig::from_json(&raw) {
        Ok(cfg) => (cfg, ConfigSource::Page),
        Err(e) => (PageConfig::default(), ConfigSource::Fallback(e)),
    }
}
