//! Page Metadata
//!
//! Title, Open Graph tags and the Farcaster `fc:frame` embed that lets the
//! panel launch as a mini-app from a cast.

use serde::Serialize;

use crate::config::CrmConfig;

pub const PAGE_TITLE: &str = "Mattrix - Decentralized CRM";
pub const OG_DESCRIPTION: &str = "Conference networking CRM powered by Web3";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameEmbed {
    pub version: String,
    pub image_url: String,
    pub button: FrameButton,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameButton {
    pub title: String,
    pub action: FrameAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameAction {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub url: String,
    pub splash_image_url: String,
    pub splash_background_color: String,
}

impl FrameEmbed {
    pub fn for_app(app_url: &str) -> Self {
        let app_url = app_url.trim_end_matches('/');
        Self {
            version: "next".to_string(),
            image_url: format!("{app_url}/images/feed.png"),
            button: FrameButton {
                title: "Launch Mattrix".to_string(),
                action: FrameAction {
                    kind: "launch_frame".to_string(),
                    name: "Mattrix CRM".to_string(),
                    url: app_url.to_string(),
                    splash_image_url: format!("{app_url}/images/splash.png"),
                    splash_background_color: "#ffffff".to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageMetadata {
    pub title: String,
    pub og_title: String,
    pub og_description: String,
    pub frame: FrameEmbed,
}

impl PageMetadata {
    pub fn for_app(config: &CrmConfig) -> Self {
        Self {
            title: PAGE_TITLE.to_string(),
            og_title: PAGE_TITLE.to_string(),
            og_description: OG_DESCRIPTION.to_string(),
            frame: FrameEmbed::for_app(config.app_url.as_str()),
        }
    }

    /// `(name or property, content)` pairs for `<meta>` tags
    pub fn meta_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("og:title", self.og_title.clone()),
            ("og:description", self.og_description.clone()),
            ("fc:frame", self.frame_json()),
        ]
    }

    pub fn frame_json(&self) -> String {
        // plain strings only, serialization cannot fail
        serde_json::to_string(&self.frame).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_json_shape() {
        let frame = FrameEmbed::for_app("https://mattrix.example/");
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "version": "next",
                "imageUrl": "https://mattrix.example/images/feed.png",
                "button": {
                    "title": "Launch Mattrix",
                    "action": {
                        "type": "launch_frame",
                        "name": "Mattrix CRM",
                        "url": "https://mattrix.example",
                        "splashImageUrl": "https://mattrix.example/images/splash.png",
                        "splashBackgroundColor": "#ffffff"
                    }
                }
            })
        );
    }

    #[test]
    fn test_page_metadata_from_config() {
        let meta = PageMetadata::for_app(&CrmConfig::default());
        assert_eq!(meta.title, "Mattrix - Decentralized CRM");
        let tags = meta.meta_tags();
        assert_eq!(tags[0], ("og:title", PAGE_TITLE.to_string()));
        assert_eq!(tags[1].1, OG_DESCRIPTION);
        assert_eq!(tags[2].0, "fc:frame");
        assert!(tags[2].1.contains(r#""url":"http://localhost:3000""#));
    }
}
