/// Lowercase ASCII slug with runs of other characters collapsed into single dashes,
/// e.g. `"Bonereaver's Edge"` becomes `"bonereavers-edge"`.
pub fn slugify(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());
    let mut pending_dash = false;

    for c in value.chars() {
        if c == '\'' {
            continue;
        }

        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}
