//! Namespace prefix derivation from translation file paths.
//!
//! A fragment's merged keys are namespaced by where the file lives in the
//! source tree (`lang/`, `core/<name>/lang/`, `addon/<name...>/lang/`,
//! `assets/<name>/`). Both functions here are pure so every dispatch branch
//! is unit-testable without touching a filesystem.

/// Split a file path into the segments that identify its component.
///
/// Separators are normalized (`\` is treated like `/`), the portion up to and
/// including the first segment equal to `source_root` is stripped, and the
/// final segment (the file name itself) is dropped. If the marker segment is
/// absent the whole path is treated as already relative.
///
/// # Examples
/// - `src/lang/en.json` (marker `src`) → `["lang"]`
/// - `addon\mod_assign\lang\en.json` → `["addon", "mod_assign", "lang"]`
#[must_use]
pub fn component_segments(path: &str, source_root: &str) -> Vec<String> {
    let normalized = path.replace('\\', "/");
    let segments: Vec<&str> = normalized.split('/').filter(|s| !s.is_empty()).collect();

    let start = segments
        .iter()
        .position(|segment| *segment == source_root)
        .map_or(0, |marker| marker + 1);

    let mut relative: Vec<String> =
        segments.get(start..).unwrap_or_default().iter().map(ToString::to_string).collect();

    // The last segment is the file name (e.g. "en.json"), not a component.
    relative.pop();
    relative
}

/// Determine the namespace prefix for a fragment from its component segments.
///
/// Returns `None` for layouts that carry no translations worth merging; such
/// fragments are dropped without a diagnostic (the tree may legitimately
/// contain language files this tool does not own).
///
/// # Examples
/// - `["lang"]` → `Some("core")`
/// - `["core", "settings", "lang"]` → `Some("core.settings")`
/// - `["addon", "mod_assign", "lang"]` → `Some("addon.mod_assign")`
/// - `["assets", "countries"]` → `Some("assets.countries")`
#[must_use]
pub fn prefix_for(segments: &[String]) -> Option<String> {
    match segments.first().map(String::as_str)? {
        "lang" => Some("core".to_string()),
        "core" => match segments.get(1) {
            Some(second) if second == "lang" => Some("core".to_string()),
            Some(second) => Some(format!("core.{second}")),
            None => None,
        },
        "addon" => {
            let mut rest: Vec<&str> =
                segments.get(1..).unwrap_or_default().iter().map(String::as_str).collect();
            if rest.last() == Some(&"lang") {
                rest.pop();
            }
            if rest.is_empty() { None } else { Some(format!("addon.{}", rest.join("_"))) }
        }
        "assets" => segments.get(1).map(|second| format!("assets.{second}")),
        _ => None,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    // Marker present: everything before and including "src" is stripped
    #[case("src/lang/en.json", vec!["lang"])]
    #[case("/home/user/project/src/core/settings/lang/en.json", vec!["core", "settings", "lang"])]
    // Marker absent: the whole path is treated as relative
    #[case("lang/en.json", vec!["lang"])]
    #[case("assets/countries/en.json", vec!["assets", "countries"])]
    // Backslash separators are normalized
    #[case("src\\addon\\mod_assign\\lang\\en.json", vec!["addon", "mod_assign", "lang"])]
    // Mixed separators
    #[case("src\\core/settings\\lang/en.json", vec!["core", "settings", "lang"])]
    // A bare file name has no component segments
    #[case("en.json", Vec::<&str>::new())]
    fn test_component_segments(#[case] path: &str, #[case] expected: Vec<&str>) {
        let result = component_segments(path, "src");
        assert_eq!(result, expected);
    }

    #[rstest]
    #[case("custom/lang/en.json", "custom", vec!["lang"])]
    #[case("custom/addon/a/lang/en.json", "custom", vec!["addon", "a", "lang"])]
    fn test_component_segments_custom_marker(
        #[case] path: &str,
        #[case] marker: &str,
        #[case] expected: Vec<&str>,
    ) {
        let result = component_segments(path, marker);
        assert_eq!(result, expected);
    }

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(ToString::to_string).collect()
    }

    #[rstest]
    // Top-level lang dir is the core component
    #[case(&["lang"], Some("core"))]
    // Core subsystems
    #[case(&["core", "settings", "lang"], Some("core.settings"))]
    #[case(&["core", "lang"], Some("core"))]
    // Addons: trailing "lang" and leading "addon" dropped, rest joined with '_'
    #[case(&["addon", "mod_assign", "lang"], Some("addon.mod_assign"))]
    #[case(&["addon", "mod_assign", "feedback_comments", "lang"], Some("addon.mod_assign_feedback_comments"))]
    // Assets keep their immediate directory name
    #[case(&["assets", "countries"], Some("assets.countries"))]
    // Unrecognized roots are dropped
    #[case(&["themes", "lang"], None)]
    #[case(&["vendor"], None)]
    // Degenerate layouts
    #[case(&[], None)]
    #[case(&["core"], None)]
    #[case(&["addon", "lang"], None)]
    #[case(&["assets"], None)]
    fn test_prefix_for(#[case] parts: &[&str], #[case] expected: Option<&str>) {
        let result = prefix_for(&segments(parts));
        assert_eq!(result.as_deref(), expected);
    }
}
