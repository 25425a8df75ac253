//! Token grammar model and the first-match tokenizer.
//!
//! A grammar is an ordered list of named rules, each holding one or more
//! regex patterns. The tokenizer applies rules in declaration order over
//! the untokenized spans of the input, so earlier rules take precedence
//! and a span claimed by one rule is never re-matched by a later one.

use regex::Regex;

/// Ordered set of token rules for one language.
pub struct Grammar {
    rules: Vec<Rule>,
}

struct Rule {
    name: &'static str,
    patterns: Vec<Pattern>,
}

/// One matchable pattern within a rule.
pub struct Pattern {
    regex: Regex,
    strip_prefix: bool,
    alias: Option<&'static str>,
    inside: Option<Grammar>,
}

impl Pattern {
    pub fn new(pattern: &str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            strip_prefix: false,
            alias: None,
            inside: None,
        }
    }

    /// Treat capture group 1 as left context: it stays untokenized and the
    /// token starts after it. Substitute for lookbehind assertions.
    pub fn strip_prefix(mut self) -> Self {
        self.strip_prefix = true;
        self
    }

    /// Additional class emitted after the rule name.
    pub fn alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Sub-grammar applied to the token's own text.
    pub fn inside(mut self, grammar: Grammar) -> Self {
        self.inside = Some(grammar);
        self
    }
}

impl Grammar {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rule(mut self, name: &'static str, patterns: Vec<Pattern>) -> Self {
        self.rules.push(Rule { name, patterns });
        self
    }

    /// Replace the patterns of an existing rule, keeping its position in
    /// the match order.
    pub fn override_rule(mut self, name: &'static str, patterns: Vec<Pattern>) -> Self {
        if let Some(rule) = self.rules.iter_mut().find(|r| r.name == name) {
            rule.patterns = patterns;
        }
        self
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}

/// A piece of tokenized input: either still-plain text or a claimed token.
pub(super) enum Span<'a, 'g> {
    Plain(&'a str),
    Token {
        name: &'static str,
        alias: Option<&'static str>,
        text: &'a str,
        inside: Option<&'g Grammar>,
    },
}

/// Tokenize `text` with every rule of `grammar`, in declaration order.
pub(super) fn tokenize<'a, 'g>(text: &'a str, grammar: &'g Grammar) -> Vec<Span<'a, 'g>> {
    let mut spans = vec![Span::Plain(text)];
    for rule in &grammar.rules {
        for pattern in &rule.patterns {
            spans = apply_pattern(spans, rule.name, pattern);
        }
    }
    spans
}

fn apply_pattern<'a, 'g>(
    spans: Vec<Span<'a, 'g>>,
    name: &'static str,
    pattern: &'g Pattern,
) -> Vec<Span<'a, 'g>> {
    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        match span {
            token @ Span::Token { .. } => out.push(token),
            Span::Plain(text) => split_matches(text, name, pattern, &mut out),
        }
    }
    out
}

/// Split one untokenized span around every match of `pattern`.
///
/// Matching uses `captures_at` so `^` keeps anchoring to the start of the
/// span (or to line starts under `(?m)`) as the scan position advances.
fn split_matches<'a, 'g>(
    text: &'a str,
    name: &'static str,
    pattern: &'g Pattern,
    out: &mut Vec<Span<'a, 'g>>,
) {
    let mut last = 0;
    let mut pos = 0;

    while pos <= text.len() {
        let Some(caps) = pattern.regex.captures_at(text, pos) else {
            break;
        };
        let Some(m) = caps.get(0) else { break };

        if m.is_empty() {
            match text[m.end()..].chars().next() {
                Some(c) => pos = m.end() + c.len_utf8(),
                None => break,
            }
            continue;
        }

        let start = if pattern.strip_prefix {
            caps.get(1).map_or(m.start(), |g| g.end())
        } else {
            m.start()
        };

        if start > last {
            out.push(Span::Plain(&text[last..start]));
        }
        out.push(Span::Token {
            name,
            alias: pattern.alias,
            text: &text[start..m.end()],
            inside: pattern.inside.as_ref(),
        });

        last = m.end();
        pos = m.end();
    }

    if last < text.len() {
        out.push(Span::Plain(&text[last..]));
    }
}
