//! Document head: title, Open Graph and frame embed tags.

use mattrix_core::PageMetadata;
use tracing::warn;

pub fn apply_page_metadata(meta: &PageMetadata) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        warn!("no document, skipping page metadata");
        return;
    };
    document.set_title(&meta.title);

    let Some(head) = document.head() else {
        warn!("document has no <head>");
        return;
    };

    for (key, content) in meta.meta_tags() {
        let attr = if key.starts_with("og:") { "property" } else { "name" };
        let result = document.create_element("meta").and_then(|el| {
            el.set_attribute(attr, key)?;
            el.set_attribute("content", &content)?;
            head.append_child(&el)
        });
        if let Err(e) = result {
            warn!("failed to add meta {}: {:?}", key, e);
        }
    }
}
