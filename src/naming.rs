use regex::Regex;

/// Convert a CamelCase/PascalCase identifier into its lowercase,
/// underscore-separated form.
///
/// An underscore is inserted before every interior capital that follows a
/// lowercase letter or digit, acronym runs are split before their final
/// capital (`HTTPServer` becomes `http_server`), and runs of
/// non-alphanumeric separators collapse into a single underscore. The
/// transformation is idempotent: input already in underscore form passes
/// through unchanged.
pub fn underscore(name: &str) -> String {
    let acronym_boundary = Regex::new(r"([A-Z\d]+)([A-Z][a-z])").unwrap();
    let camel_boundary = Regex::new(r"([a-z\d])([A-Z])").unwrap();

    let separated = acronym_boundary.replace_all(name, "${1}_${2}");
    let separated = camel_boundary.replace_all(&separated, "${1}_${2}");

    let mut result = String::with_capacity(separated.len());
    for ch in separated.chars() {
        if ch.is_ascii_alphanumeric() {
            result.push(ch.to_ascii_lowercase());
        } else if !result.ends_with('_') && !result.is_empty() {
            result.push('_');
        }
    }
    while result.ends_with('_') {
        result.pop();
    }
    result
}
