//! Brand identity derivation.

/// Derives a brand id from its display name.
///
/// The name is lower-cased and every run of whitespace becomes a single `-`, including
/// runs at either end, so `" Acme "` yields `-acme-`. Callers trim the name first when
/// they want a clean id. The id is computed once at creation and never recomputed on rename.
#[must_use]
pub fn brand_id(name: &str) -> String {
    let mut id = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                id.push('-');
            }
            in_space = true;
        } else {
            id.extend(c.to_lowercase());
            in_space = false;
        }
    }
    id
}
