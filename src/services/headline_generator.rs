//! SEO headline generation from template strings.

use crate::services::random::RandomSource;

pub const BUSINESS_NAME_TOKEN: &str = "{business_name}";
pub const LOCATION_TOKEN: &str = "{location}";

/// Produce a headline for `name` in `location`.
///
/// One template is picked uniformly from `templates` and every placeholder token
/// is substituted. An empty pool yields the fixed sentence
/// `"<name>: Leading Excellence in <location>"`.
pub fn generate<S: AsRef<str>>(
    name: &str,
    location: &str,
    templates: &[S],
    rng: &mut dyn RandomSource,
) -> String {
    if templates.is_empty() {
        return fallback_headline(name, location);
    }

    let template = templates[rng.next_index(templates.len())].as_ref();
    fill_template(template, name, location)
}

pub fn fallback_headline(name: &str, location: &str) -> String {
    format!("{name}: Leading Excellence in {location}")
}

/// Substitute both placeholder tokens. Substituted text is never re-scanned.
pub fn fill_template(template: &str, name: &str, location: &str) -> String {
    template
        .split(BUSINESS_NAME_TOKEN)
        .map(|part| part.replace(LOCATION_TOKEN, location))
        .collect::<Vec<_>>()
        .join(name)
}
