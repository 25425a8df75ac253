//! Frontmatter extraction from markdown sources.

use std::borrow::Cow;

use anyhow::{Result, anyhow};
use serde_json::Value;

use crate::page::PageMeta;

/// Extracts YAML (`---`) or TOML (`+++`) frontmatter from page sources.
pub struct MarkdownMetaExtractor;

impl MarkdownMetaExtractor {
    /// Extract frontmatter and return `(metadata, body)`, or `None` when the
    /// source has no frontmatter block.
    pub fn extract_frontmatter<'a>(&self, content: &'a str) -> Result<Option<(PageMeta, &'a str)>> {
        match Self::detect_frontmatter(content) {
            Some((raw, body, is_toml)) => {
                let meta = if is_toml {
                    Self::parse_toml(raw)?
                } else {
                    Self::parse_yaml_like(raw)
                };
                Ok(Some((meta, body)))
            }
            None => Ok(None),
        }
    }

    /// Detect a frontmatter block. Returns `(frontmatter, body, is_toml)`.
    fn detect_frontmatter(content: &str) -> Option<(&str, &str, bool)> {
        let trimmed = content.trim_start();

        if trimmed.starts_with("---")
            && let Some(end) = trimmed[3..].find("\n---")
        {
            let raw = trimmed[3..3 + end].trim();
            let body = trimmed[3 + end + 4..].trim_start_matches('\n');
            return Some((raw, body, false));
        }

        if trimmed.starts_with("+++")
            && let Some(end) = trimmed[3..].find("\n+++")
        {
            let raw = trimmed[3..3 + end].trim();
            let body = trimmed[3 + end + 4..].trim_start_matches('\n');
            return Some((raw, body, true));
        }

        None
    }

    /// Parse YAML-like frontmatter: `key: value` lines plus indented
    /// `- item` block lists.
    ///
    /// This covers the subset the content tree actually uses. Known fields
    /// land in their typed slots; everything else is kept in `extra` under
    /// its original key. Quoted values stay strings, bare values get the
    /// usual scalar coercion.
    fn parse_yaml_like(content: &str) -> PageMeta {
        let mut meta = PageMeta::default();
        // Key whose value is a block list on the following lines
        let mut pending: Option<(String, Vec<String>)> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((_, items)) = &mut pending
                && let Some(item) = line.strip_prefix("- ")
            {
                items.push(unquote(item.trim()).into_owned());
                continue;
            }
            Self::flush_list(&mut meta, pending.take());

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            if value.is_empty() {
                pending = Some((key.to_string(), Vec::new()));
                continue;
            }

            match key.to_lowercase().as_str() {
                "title" => meta.title = Some(unquote(value).into_owned()),
                "description" => meta.description = Some(unquote(value).into_owned()),
                "date" => meta.date = Some(unquote(value).into_owned()),
                "author" => meta.author = Some(unquote(value).into_owned()),
                "draft" => meta.draft = value.eq_ignore_ascii_case("true"),
                "tags" => {
                    meta.tags = value
                        .split(',')
                        .map(|tag| unquote(tag.trim()).into_owned())
                        .filter(|tag| !tag.is_empty())
                        .collect();
                }
                _ => {
                    let json = match strip_quotes(value) {
                        Some(inner) => Value::String(inner),
                        None => parse_yaml_value(value),
                    };
                    meta.extra.insert(key.to_string(), json);
                }
            }
        }
        Self::flush_list(&mut meta, pending.take());

        meta
    }

    /// Assign a completed block list to its field.
    fn flush_list(meta: &mut PageMeta, pending: Option<(String, Vec<String>)>) {
        let Some((key, items)) = pending else { return };
        if key.eq_ignore_ascii_case("tags") {
            meta.tags = items;
        } else {
            let array = items.into_iter().map(Value::String).collect();
            meta.extra.insert(key, Value::Array(array));
        }
    }

    /// Parse TOML frontmatter.
    fn parse_toml(content: &str) -> Result<PageMeta> {
        toml::from_str(content).map_err(|e| anyhow!("invalid TOML frontmatter: {e}"))
    }
}

/// Strip one layer of matching quotes, unescaping doubled single quotes.
/// Returns `None` when the value is not quoted.
fn strip_quotes(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    if value.len() >= 2 {
        if bytes[0] == b'\'' && bytes[value.len() - 1] == b'\'' {
            return Some(value[1..value.len() - 1].replace("''", "'"));
        }
        if bytes[0] == b'"' && bytes[value.len() - 1] == b'"' {
            return Some(value[1..value.len() - 1].to_string());
        }
    }
    None
}

/// Quoted or bare scalar to plain text.
fn unquote(value: &str) -> Cow<'_, str> {
    match strip_quotes(value) {
        Some(inner) => Cow::Owned(inner),
        None => Cow::Borrowed(value),
    }
}

/// Coerce a bare YAML scalar to a JSON value.
fn parse_yaml_value(value: &str) -> Value {
    match value {
        "true" => return Value::Bool(true),
        "false" => return Value::Bool(false),
        "null" | "~" => return Value::Null,
        _ => {}
    }

    if let Ok(int) = value.parse::<i64>() {
        return Value::Number(int.into());
    }
    if let Ok(float) = value.parse::<f64>()
        && let Some(num) = serde_json::Number::from_f64(float)
    {
        return Value::Number(num);
    }

    // Inline comma list
    if value.contains(',') {
        let items = value
            .split(',')
            .map(|item| Value::String(unquote(item.trim()).into_owned()))
            .collect();
        return Value::Array(items);
    }

    Value::String(value.to_string())
}
