use crate::server::error::validation::ValidationError;

/// Maximum stored slug length.
pub const MAX_SLUG_LENGTH: usize = 255;

/// Derives a slug from a human-readable name or title.
///
/// Lower-cases the text, transliterates it to ASCII and collapses every run of
/// whitespace or punctuation into a single `-`, trimming separators at both ends.
///
/// # Arguments
/// - `source` - Name or title to derive from
/// - `source_field` - Field the text came from, reported when the result is empty
///
/// # Returns
/// - `Ok(String)` - Normalized slug, truncated to `MAX_SLUG_LENGTH`
/// - `Err(ValidationError::EmptySlug)` - Nothing slug-worthy in `source`
pub fn derive(source: &str, source_field: &'static str) -> Result<String, ValidationError> {
    let mut slug = slug::slugify(source);

    if slug.len() > MAX_SLUG_LENGTH {
        slug.truncate(MAX_SLUG_LENGTH);
        while slug.ends_with('-') {
            slug.pop();
        }
    }

    if slug.is_empty() {
        return Err(ValidationError::EmptySlug { source_field });
    }

    Ok(slug)
}

/// Checks that an explicitly supplied slug is already normalized.
///
/// Accepts `[a-z0-9]+(-[a-z0-9]+)*` up to `MAX_SLUG_LENGTH` characters.
pub fn validate(slug: &str) -> Result<(), ValidationError> {
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(ValidationError::TooLong {
            field: "slug",
            max: MAX_SLUG_LENGTH,
        });
    }

    let well_formed = !slug.is_empty()
        && slug.split('-').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        });

    if !well_formed {
        return Err(ValidationError::InvalidSlug);
    }

    Ok(())
}

/// Returns the explicit slug when given, otherwise derives one from `source`.
///
/// Runs once, at creation. Later updates never re-derive.
pub fn resolve(
    explicit: Option<String>,
    source: &str,
    source_field: &'static str,
) -> Result<String, ValidationError> {
    match explicit {
        Some(slug) => {
            validate(&slug)?;
            Ok(slug)
        }
        None => derive(source, source_field),
    }
}
