//! Feature-support matrix expansion.
//!
//! Feature pages carry a `<feature-support chrome=".." firefox=".." …>`
//! pseudo-tag describing where a language feature is available. Before
//! Markdown parsing, each tag is expanded into a support-matrix HTML
//! fragment. Any `<feature-support` text still present afterwards is a
//! malformed tag and fails the build.

use std::borrow::Cow;
use std::fmt::Write;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Result, bail};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use regex::{Captures, Regex};

/// Characters percent-encoded in reference URLs.
///
/// Everything except alphanumerics and `;,/?:@&=+$-_.!~*'()#` is escaped,
/// so UTF-8 characters in MDN links come out encoded while the URL
/// structure survives.
const ENCODE_URI: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b';')
    .remove(b',')
    .remove(b'/')
    .remove(b'?')
    .remove(b':')
    .remove(b'@')
    .remove(b'&')
    .remove(b'=')
    .remove(b'+')
    .remove(b'$')
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'#');

/// All five attributes are required, in this order, each holding a
/// `("no"|"yes"|version) [url]` value.
static RE_FEATURE_SUPPORT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<feature-support\s+chrome="(?<chrome>[^"]+)"\s+firefox="(?<firefox>[^"]+)"\s+safari="(?<safari>[^"]+)"\s+nodejs="(?<nodejs>[^"]+)"\s+babel="(?<babel>[^"]+)"></feature-support>"#,
    )
    .unwrap()
});

/// Raw per-environment support values pulled from one pseudo-tag.
struct FeatureSupport<'a> {
    chrome: &'a str,
    firefox: &'a str,
    safari: &'a str,
    nodejs: &'a str,
    babel: &'a str,
}

impl<'a> FeatureSupport<'a> {
    fn from_captures(caps: &Captures<'a>) -> Self {
        let group = |name| caps.name(name).map_or("", |m| m.as_str());
        Self {
            chrome: group("chrome"),
            firefox: group("firefox"),
            safari: group("safari"),
            nodejs: group("nodejs"),
            babel: group("babel"),
        }
    }

    /// Entries as (icon id, display name, raw value), in display order.
    fn entries(&self) -> [(&'static str, &'static str, &'a str); 5] {
        [
            ("chrome", "Chrome", self.chrome),
            ("firefox", "Firefox", self.firefox),
            ("safari", "Safari", self.safari),
            ("nodejs", "Node.js", self.nodejs),
            ("babel", "Babel", self.babel),
        ]
    }
}

/// Expand every `<feature-support>` pseudo-tag in `input`.
///
/// `source` names the document in the error when a malformed tag (missing
/// attributes, wrong order) survives expansion.
pub fn expand<'a>(input: &'a str, source: &Path) -> Result<Cow<'a, str>> {
    let expanded =
        RE_FEATURE_SUPPORT.replace_all(input, |caps: &Captures| {
            render_matrix(&FeatureSupport::from_captures(caps))
        });

    if expanded.contains("<feature-support") {
        bail!(
            "malformed <feature-support> tag in {} (all five environment attributes are required, in order: chrome, firefox, safari, nodejs, babel)",
            source.display()
        );
    }

    Ok(expanded)
}

fn render_matrix(support: &FeatureSupport) -> String {
    let mut buf = String::from(r#"<ul class="feature-support">"#);

    for (id, name, value) in support.entries() {
        // Value grammar: version literal, optionally followed by one
        // space-separated reference URL. Anything after that is ignored.
        let mut parts = value.split(' ');
        let version = parts.next().unwrap_or_default();
        let url = parts.next();

        let support_class = if version == "no" {
            "no-support"
        } else {
            "has-support"
        };
        let link_class = if url.is_some() { " has-link" } else { "" };

        let _ = write!(
            buf,
            r#" <li class="environment {support_class}{link_class}">"#
        );
        if let Some(url) = url {
            let _ = write!(buf, r#" <a href="{}">"#, utf8_percent_encode(url, ENCODE_URI));
        }
        let _ = write!(buf, r#" <span class="icon {id}">{name}:</span> "#);
        buf.push_str(&describe_support(version));
        if url.is_some() {
            buf.push_str(" </a>");
        }
        buf.push_str(" </li>");
    }

    buf.push_str(
        r#" </ul><div class="feature-support-info"><a href="/features/support">about this feature support listing</a></div>"#,
    );
    buf
}

fn describe_support(version: &str) -> Cow<'static, str> {
    match version {
        "no" => Cow::Borrowed(r#"<span class="support">no support</span>"#),
        "yes" => Cow::Borrowed(r#"<span class="support">supported</span>"#),
        v => Cow::Owned(format!(
            r#"<span class="support">supported since version <span class="version">{v}</span></span>"#
        )),
    }
}
