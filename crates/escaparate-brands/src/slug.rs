//! Brand name to identifier slug derivation.

/// Derive a brand identifier from its display name.
///
/// Lowercase, then each space becomes a hyphen, then each `&` becomes the
/// literal `and`. No other character is treated specially; punctuation such
/// as apostrophes or periods passes through verbatim. Distinct names can
/// collide after slugification; the config file is expected to avoid that.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "-").replace('&', "and")
}
