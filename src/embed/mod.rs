//! Embedded browser scripts.
//!
//! The sources under `js/` are minified at build time and compiled into
//! the binary. Every site build renders them into `<output>/_js/`, where
//! the page shell references them:
//!
//! - `main.js` - module script for modern browsers
//! - `legacy.js` - classic-script fallback (`nomodule`)
//! - `twitter-widget.js` - fallback timeline for pages that embed one
//!
//! The analytics property ID from `[site] analytics` is injected as a
//! JSON string literal; an unset ID becomes `""`, which the scripts
//! treat as "analytics disabled".

mod template;

pub use template::{Template, TemplateVars};

use std::fs;

use anyhow::{Context, Result};

use crate::config::SiteConfig;

/// Variables shared by the module and legacy scripts.
pub struct ScriptVars {
    pub analytics_id: String,
}

impl ScriptVars {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            analytics_id: config.site.analytics.clone().unwrap_or_default(),
        }
    }
}

impl TemplateVars for ScriptVars {
    fn apply(&self, content: &str) -> String {
        content.replace(
            "__ANALYTICS_ID__",
            &serde_json::to_string(&self.analytics_id).unwrap_or_else(|_| "\"\"".into()),
        )
    }
}

/// Module script loaded by modern browsers.
pub const MAIN_JS: Template<ScriptVars> =
    Template::new(include_str!(concat!(env!("OUT_DIR"), "/main.min.js")));

/// Classic-script fallback for browsers without module support.
pub const LEGACY_JS: Template<ScriptVars> =
    Template::new(include_str!(concat!(env!("OUT_DIR"), "/legacy.min.js")));

/// Fallback Twitter timeline, referenced directly by pages that embed one.
pub const TWITTER_WIDGET_JS: &str =
    include_str!(concat!(env!("OUT_DIR"), "/twitter-widget.min.js"));

/// Write the rendered scripts into `<output>/_js/`.
pub fn write_embedded_assets(config: &SiteConfig) -> Result<()> {
    let vars = ScriptVars::from_config(config);
    let dir = config.build.output.join("_js");
    fs::create_dir_all(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    for (name, content) in [
        ("main.js", MAIN_JS.render(&vars)),
        ("legacy.js", LEGACY_JS.render(&vars)),
        ("twitter-widget.js", TWITTER_WIDGET_JS.to_string()),
    ] {
        let file = dir.join(name);
        fs::write(&file, content)
            .with_context(|| format!("failed to write {}", file.display()))?;
    }
    Ok(())
}
