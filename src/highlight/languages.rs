//! Grammar definitions for V8's custom languages.
//!
//! Four languages are covered:
//!
//! - `torque`: the Torque DSL used for builtins
//! - `asm`: x86/Arm assembly as emitted by `--print-code`
//! - `simulator`: the Arm simulator debugger prompt, derived from `asm`
//! - `grammar`: ES-spec and Torque grammar excerpts
//!
//! The `regex` crate has no lookbehind or backreferences, so patterns that
//! needed them are restated: left context becomes a stripped capture group,
//! and quote-matching string patterns are spelled per quote character.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::grammar::{Grammar, Pattern};

static GRAMMARS: LazyLock<FxHashMap<&'static str, Grammar>> = LazyLock::new(|| {
    let mut map = FxHashMap::default();
    map.insert("torque", torque());
    map.insert("asm", asm());
    map.insert("simulator", simulator());
    map.insert("grammar", grammar_notation());
    map
});

/// Look up the grammar for a fenced-block language tag.
pub(super) fn get(lang: &str) -> Option<&'static Grammar> {
    GRAMMARS.get(lang)
}

/// Languages with a registered grammar, for diagnostics.
pub fn supported() -> Vec<&'static str> {
    let mut langs: Vec<_> = GRAMMARS.keys().copied().collect();
    langs.sort_unstable();
    langs
}

// Follows the grammar defined at the bottom of
// https://cs.chromium.org/chromium/src/v8/src/torque/torque-parser.cc
fn torque() -> Grammar {
    Grammar::new()
        .rule(
            "comment",
            vec![Pattern::new(r"(^|[^\\:])//.*").strip_prefix()],
        )
        .rule(
            "string",
            vec![Pattern::new(
                r#""(?:\\(?s:.)|[^\\"\n])*"|'(?:\\(?s:.)|[^\\'\n])*'"#,
            )],
        )
        .rule("class-name", vec![
            // Type position after `:`, including an optional constexpr and
            // the delimiter that closes it.
            Pattern::new(r"(?i):\s+(?:\bconstexpr\b\s+)?\w+(?:\s*(?:\)|;|,|=|\{|labels))").inside(
                Grammar::new().rule("keyword", vec![Pattern::new(r"\b(?:constexpr|labels)\b")]),
            ),
            // Right-hand side of a type alias.
            Pattern::new(r"(?i)(\btype\s+\w+\s+=\s+)[\w|]+").strip_prefix(),
            Pattern::new(r"(?i)(\b(?:type|extends)\s+)\w+").strip_prefix(),
        ])
        .rule(
            "builtin",
            vec![Pattern::new(r"\b(?:UnsafeCast|Convert|Cast|check|assert)\b")],
        )
        .rule(
            "keyword",
            vec![Pattern::new(
                r"\b(?:typeswitch|javascript|generates|constexpr|otherwise|continue|implicit|operator|runtime|builtin|extends|labels|return|namespace|extern|while|macro|const|label|break|type|else|case|let|try|for|if)\b",
            )],
        )
        .rule("boolean", vec![Pattern::new(r"\b(?:[tT]rue|[fF]alse)\b")])
        .rule(
            "number",
            vec![Pattern::new(
                r"(?i)\b0x[\da-fA-F]+\b|(?:\b\d+\.?\d*|\B\.\d+)(?:e[+-]?\d+)?",
            )],
        )
        .rule(
            "operator",
            vec![Pattern::new(
                r"--?|\+\+?|!=?=?|<=?|>=?|==?=?|&&?|\|\|?|\?|\*|/|~|\^|%",
            )],
        )
        .rule("punctuation", vec![Pattern::new(r"[{}\[\];(),.:]")])
}

fn asm() -> Grammar {
    Grammar::new()
        .rule("comment", vec![Pattern::new(r"(?m);.*$")])
        .rule(
            "string",
            vec![Pattern::new(
                r#""(?:\\.|[^\\"\n])*"|'(?:\\.|[^\\'\n])*'|`(?:\\.|[^\\`\n])*`"#,
            )],
        )
        .rule(
            "label",
            vec![
                Pattern::new(r"(?m)(^\s*)[A-Za-z._?$][\w.?$@~#]*:")
                    .strip_prefix()
                    .alias("function"),
            ],
        )
        .rule("keyword", vec![
            Pattern::new(r"\b(?:mov(?:[sz]x)?|cmov(?:n?[abceglopsz]|n?[abgl]e|p[eo]))\b"),
            Pattern::new(r"(?im)(^\s*)section\s*[a-zA-Z.]+:?").strip_prefix(),
            Pattern::new(r"(?i)(?:extern|global)[^;\n]*"),
            Pattern::new(r"(?m)(?:CPU|FLOAT|DEFAULT).*$"),
        ])
        .rule("register", vec![
            // x86
            Pattern::new(
                r"(?i)\b%?(?:[abcd][hl]|[er]?[abcd]x|[er]?(?:di|si|bp|sp)|dil|sil|bpl|spl|r(?:8|9|1[0-5])[bdlw]?)\b",
            )
            .alias("variable"),
            // Arm
            Pattern::new(r"(?i)\b(?:pc|sp|fp|lr|cp|ip|xzr|wzr|[rxw][0-9][0-9]?)\b")
                .alias("variable"),
        ])
        .rule("number", vec![
            // A disassembled Arm instruction word reads as a number.
            Pattern::new(r"(?i)\b[\da-f]{8}\b"),
            // Immediates.
            Pattern::new(r"(?i)(?:#[+-]?)?\b(?:\d+|0x[\da-f]+)\b"),
        ])
        .rule("operator", vec![Pattern::new(r"[\[\]*+\-/%<>=&|$!]")])
}

// Suitable for disassembly, the simulator debugger prompt, and the output
// of --print-code.
fn simulator() -> Grammar {
    asm()
        .override_rule("comment", vec![
            Pattern::new(r"(?m)                  .*$"),
            Pattern::new(r"# .*"),
        ])
        .override_rule("keyword", vec![Pattern::new(r"sim>")])
        // Addresses print as strings to tell them apart from plain numbers;
        // 0x followed by at least 6 hex digits is assumed to be an address.
        .override_rule("string", vec![
            // A line opening with an address that also carries an offset
            // column after 4 spaces.
            Pattern::new(r"(?im)^0x[\da-f]{6}[\da-f]*    [\da-f ]{2}"),
            Pattern::new(r"(?i)\b0x[\da-f]{6}[\da-f]*\b"),
        ])
}

fn grammar_notation() -> Grammar {
    Grammar::new()
        // The `[...]` part of `ProductionName[...]`.
        .rule(
            "production-params",
            vec![Pattern::new(r"([a-z])\[.*?\]").strip_prefix()],
        )
        .rule("production-name", vec![Pattern::new(r"\b[A-Z][A-Za-z_]*\b")])
        // "but not" and "one of" are prose connectives in ECMAScript
        // grammar notation, not literals.
        .rule("skip", vec![Pattern::new(r"but not|one of")])
        // `opt` is ES grammar notation; `list+` and `list*` are Torque's.
        .rule("keyword", vec![Pattern::new(r"\bopt\b|\blist[+*]")])
        .rule("literal", vec![Pattern::new(r"\S+")])
}
