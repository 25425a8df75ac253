//! Build-time syntax highlighting for fenced code blocks.
//!
//! Declarative grammars (see [`languages`]) drive a first-match tokenizer
//! over the raw code text. Matched tokens render as
//! `<span class="token {name}[ {alias}]">…</span>` with HTML-escaped
//! contents; languages without a grammar render escaped and unhighlighted.

mod grammar;
mod languages;

pub use grammar::{Grammar, Pattern};
pub use languages::supported;

use crate::utils::html::escape;
use grammar::Span;

/// Highlight `code` as `lang`.
///
/// Returns `None` when no grammar is registered for the language, leaving
/// the caller to emit the block as plain escaped text.
pub fn highlight(code: &str, lang: &str) -> Option<String> {
    let grammar = languages::get(lang)?;
    let mut out = String::with_capacity(code.len() + code.len() / 2);
    render_tokens(code, grammar, &mut out);
    Some(out)
}

fn render_tokens(text: &str, grammar: &Grammar, out: &mut String) {
    for span in grammar::tokenize(text, grammar) {
        match span {
            Span::Plain(t) => out.push_str(&escape(t)),
            Span::Token {
                name,
                alias,
                text,
                inside,
            } => {
                out.push_str("<span class=\"token ");
                out.push_str(name);
                if let Some(alias) = alias {
                    out.push(' ');
                    out.push_str(alias);
                }
                out.push_str("\">");
                match inside {
                    Some(sub) => render_tokens(text, sub, out),
                    None => out.push_str(&escape(text)),
                }
                out.push_str("</span>");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_returns_none() {
        assert_eq!(highlight("let x = 1;", "javascript"), None);
        assert_eq!(highlight("print('hi')", "python"), None);
    }

    #[test]
    fn test_torque_keywords_and_punctuation() {
        let out = highlight("let x;", "torque").unwrap();
        assert_eq!(
            out,
            "<span class=\"token keyword\">let</span> x<span class=\"token punctuation\">;</span>"
        );
    }

    #[test]
    fn test_torque_comment_strings_and_types() {
        let code = "// allocate\nconst kMsg: constexpr string = \"hi\";";
        let out = highlight(code, "torque").unwrap();
        assert!(out.contains("<span class=\"token comment\">// allocate</span>"));
        assert!(out.contains("<span class=\"token keyword\">const</span>"));
        // The type position nests a keyword token for constexpr.
        assert!(out.contains(
            "<span class=\"token class-name\">: <span class=\"token keyword\">constexpr</span> string =</span>"
        ));
        assert!(out.contains("<span class=\"token string\">&quot;hi&quot;</span>"));
    }

    #[test]
    fn test_torque_type_alias() {
        let out = highlight("type Smi extends Tagged;", "torque").unwrap();
        assert!(out.contains("<span class=\"token keyword\">type</span>"));
        assert!(out.contains("<span class=\"token class-name\">Smi</span>"));
        // `extends Tagged` only tokenizes the name, not the keyword prefix.
        assert!(out.contains("<span class=\"token keyword\">extends</span>"));
        assert!(out.contains("<span class=\"token class-name\">Tagged</span>"));
    }

    #[test]
    fn test_torque_builtin_and_number() {
        let out = highlight("check(x == 0x1f);", "torque").unwrap();
        assert!(out.contains("<span class=\"token builtin\">check</span>"));
        assert!(out.contains("<span class=\"token number\">0x1f</span>"));
        assert!(out.contains("<span class=\"token operator\">==</span>"));
    }

    #[test]
    fn test_asm_label_registers_and_comment() {
        let code = "start:\n  mov eax, 1\n; done";
        let out = highlight(code, "asm").unwrap();
        assert!(out.contains("<span class=\"token label function\">start:</span>"));
        assert!(out.contains("<span class=\"token keyword\">mov</span>"));
        assert!(out.contains("<span class=\"token register variable\">eax</span>"));
        assert!(out.contains("<span class=\"token number\">1</span>"));
        assert!(out.contains("<span class=\"token comment\">; done</span>"));
    }

    #[test]
    fn test_asm_arm_registers_and_immediates() {
        let out = highlight("add x0, x1, #0x20", "asm").unwrap();
        assert!(out.contains("<span class=\"token register variable\">x0</span>"));
        assert!(out.contains("<span class=\"token register variable\">x1</span>"));
        assert!(out.contains("<span class=\"token number\">#0x20</span>"));
    }

    #[test]
    fn test_simulator_prompt_and_addresses() {
        let code = "sim> stepi\nadd x0, sp, 0x12345678";
        let out = highlight(code, "simulator").unwrap();
        assert!(out.contains("<span class=\"token keyword\">sim&gt;</span>"));
        assert!(out.contains("<span class=\"token string\">0x12345678</span>"));
        assert!(out.contains("<span class=\"token register variable\">sp</span>"));
        // Semicolon comments belong to asm, not the simulator grammar.
        assert!(highlight("; note", "simulator")
            .unwrap()
            .contains("; note"));
    }

    #[test]
    fn test_simulator_hash_comment() {
        let out = highlight("stepi # advance one instruction", "simulator").unwrap();
        assert!(out.contains("<span class=\"token comment\"># advance one instruction</span>"));
    }

    #[test]
    fn test_grammar_notation() {
        let code = "ArrowFunction[In] :\n  ArrowParameters opt";
        let out = highlight(code, "grammar").unwrap();
        assert!(out.contains("<span class=\"token production-name\">ArrowFunction</span>"));
        // Params tokenize without the preceding letter.
        assert!(out.contains("</span><span class=\"token production-params\">[In]</span>"));
        assert!(out.contains("<span class=\"token keyword\">opt</span>"));
        assert!(out.contains("<span class=\"token literal\">:</span>"));
    }

    #[test]
    fn test_grammar_notation_but_not() {
        let out = highlight("Identifier but not ReservedWord", "grammar").unwrap();
        assert!(out.contains("<span class=\"token skip\">but not</span>"));
        assert!(out.contains("<span class=\"token production-name\">ReservedWord</span>"));
    }

    #[test]
    fn test_output_is_escaped() {
        let out = highlight("cmp a, b ; a < b", "asm").unwrap();
        assert!(out.contains("&lt;"));
        assert!(!out.contains("; a < b"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(highlight("", "torque").unwrap(), "");
    }
}
