use rustc_hash::FxHashMap;

/// Symbolic color table used before any hex decoding is attempted.
///
/// The set of known names is data, not logic: callers extend it with
/// [`NamedColorMap::with_pair`] without touching the rewrite code. Lookups are
/// case-insensitive; mapped values are returned as stored.
#[derive(Debug, Clone)]
pub struct NamedColorMap {
    map: FxHashMap<String, String>,
}

impl NamedColorMap {
    /// An empty table. Every named color falls through unchanged.
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Register a pair of names that invert to each other.
    pub fn with_pair(mut self, a: &str, b: &str) -> Self {
        self.map.insert(a.to_ascii_lowercase(), b.to_string());
        self.map.insert(b.to_ascii_lowercase(), a.to_string());
        self
    }

    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.map.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

impl Default for NamedColorMap {
    fn default() -> Self {
        Self::empty().with_pair("black", "white")
    }
}

/// Compute the dark-mode counterpart of a fill color.
///
/// Named colors go through `names`; `#RRGGBB` values are inverted per channel
/// (`255 - c`) and re-encoded as lowercase `#rrggbb`. Anything else — an
/// unknown name, or a `#` value that is not exactly six hex digits (`#FFF`,
/// `#GGGGGG`) — is returned unchanged rather than treated as an error.
pub fn invert_color(value: &str, names: &NamedColorMap) -> String {
    if let Some(mapped) = names.lookup(value) {
        return mapped.to_string();
    }
    if let Some((r, g, b)) = parse_hex_rgb(value) {
        return format_hex_rgb(255 - r, 255 - g, 255 - b);
    }
    value.to_string()
}

/// Parse a `#RRGGBB` value into its channels. Shorthand `#RGB` and any other
/// length are rejected.
pub(crate) fn parse_hex_rgb(value: &str) -> Option<(u8, u8, u8)> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

pub(crate) fn format_hex_rgb(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}
