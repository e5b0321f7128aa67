//! The dark-mode rewrite pipeline.
//!
//! A best-effort textual transformation over raw SVG source:
//!
//! 1. extract `<style>` blocks and classify each as preservable or discarded;
//! 2. delete every `<style>` block;
//! 3. strip pre-existing `fill-dark`/`fill-light` attributes so repeated runs
//!    never accumulate companions;
//! 4. follow each remaining `fill="…"` with a `fill-dark="…"` companion;
//! 5. reinsert the preserved style content, aggregated into a single block,
//!    right after the document's first `>`.
//!
//! No step can fail: input with no fills and no styles comes back unchanged.

use crate::color::{NamedColorMap, invert_color};
use regex::Regex;
use std::sync::OnceLock;

/// A `<style>` block containing any of these (case-insensitive) is dropped
/// instead of carried through to the output.
const STYLE_DISQUALIFIERS: [&str; 3] = ["@media", "fill:", "dark"];

fn style_block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<style>(.*?)</style>").expect("valid regex"))
}

// The strip patterns also swallow the whitespace that separated the companion
// from its `fill` attribute; without that, every rerun would widen the gap by
// one space and the pipeline would no longer be a fixpoint after one pass.
fn fill_dark_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\s*fill-dark="[^"]*""#).expect("valid regex"))
}

fn fill_light_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\s*fill-light="[^"]*""#).expect("valid regex"))
}

fn fill_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"fill="([^"]*)""#).expect("valid regex"))
}

/// Rewrites SVG text, adding dark-mode companion attributes.
///
/// Holds the symbolic color table so the set of known color names can be
/// extended per instance; [`annotate`] uses the default black↔white table.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    names: NamedColorMap,
}

impl Annotator {
    pub fn new(names: NamedColorMap) -> Self {
        Self { names }
    }

    /// Run the full pipeline over one document. Never fails.
    pub fn annotate(&self, svg: &str) -> String {
        let preserved = extract_preservable_styles(svg);
        tracing::debug!(preserved = preserved.len(), "classified style blocks");

        let content = style_block_regex().replace_all(svg, "");
        let content = fill_dark_attr_regex().replace_all(&content, "");
        let content = fill_light_attr_regex().replace_all(&content, "");

        let mut content = self.add_dark_fills(&content);

        if !preserved.is_empty() {
            let block = format!("<style>{}</style>", preserved.join(" "));
            // The first `>` is assumed to close the root tag's opening marker;
            // a document without one gets the block prepended.
            let at = content.find('>').map_or(0, |i| i + 1);
            content.insert_str(at, &block);
        }
        content
    }

    /// Follow every `fill="…"` with a freshly computed `fill-dark="…"`.
    ///
    /// The `regex` crate has no lookahead, so the "already has a companion"
    /// check inspects the text after each match by hand. After the strip pass
    /// that situation cannot arise; the check is kept so a lone call to this
    /// pass is still idempotent.
    fn add_dark_fills(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        let mut last = 0usize;
        let mut rewritten = 0usize;

        for caps in fill_attr_regex().captures_iter(input) {
            let m = caps.get(0).expect("match");
            if has_dark_companion(&input[m.end()..]) {
                continue;
            }
            let fill = &caps[1];
            let dark = invert_color(fill, &self.names);
            out.push_str(&input[last..m.start()]);
            out.push_str(&format!(r#"fill="{fill}" fill-dark="{dark}""#));
            last = m.end();
            rewritten += 1;
        }
        out.push_str(&input[last..]);

        tracing::debug!(rewritten, "annotated fill attributes");
        out
    }
}

/// Convenience wrapper over [`Annotator`] with the default color table.
pub fn annotate(svg: &str) -> String {
    Annotator::default().annotate(svg)
}

fn extract_preservable_styles(svg: &str) -> Vec<String> {
    style_block_regex()
        .captures_iter(svg)
        .map(|caps| caps[1].to_string())
        .filter(|inner| is_preservable(inner))
        .collect()
}

fn is_preservable(style: &str) -> bool {
    let lower = style.to_lowercase();
    !STYLE_DISQUALIFIERS.iter().any(|kw| lower.contains(kw))
}

/// True when the attribute is already trailed by whitespace and `fill-dark`.
fn has_dark_companion(rest: &str) -> bool {
    let trimmed = rest.trim_start();
    trimmed.len() < rest.len() && trimmed.starts_with("fill-dark")
}
