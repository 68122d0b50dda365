//! README template markers and substitution.

/// Replaced with the rendered inputs table.
pub const TABLE_MARKER: &str = "<!-- table -->";

/// Replaced with the released upstream tag.
pub const VERSION_MARKER: &str = "<!-- version -->";

/// Replaced with the checkout action tag.
pub const CHECKOUT_TAG_MARKER: &str = "<!-- checkout_action_tag -->";

/// Every marker a template must contain, in reporting order.
pub const REQUIRED_MARKERS: [&str; 3] = [TABLE_MARKER, VERSION_MARKER, CHECKOUT_TAG_MARKER];

/// The texts substituted for the markers.
#[derive(Debug, Clone, Copy)]
pub struct Substitutions<'a> {
    pub table: &'a str,
    pub release_tag: &'a str,
    pub checkout_tag: &'a str,
}

/// Return the required markers absent from `template`, in reporting order.
pub fn missing_markers(template: &str) -> Vec<&'static str> {
    REQUIRED_MARKERS
        .into_iter()
        .filter(|marker| !template.contains(marker))
        .collect()
}

/// Replace every occurrence of every marker.
pub fn substitute(template: &str, subs: &Substitutions<'_>) -> String {
    template
        .replace(TABLE_MARKER, subs.table)
        .replace(VERSION_MARKER, subs.release_tag)
        .replace(CHECKOUT_TAG_MARKER, subs.checkout_tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUBS: Substitutions<'static> = Substitutions {
        table: "| a | b |",
        release_tag: "v3.11.2",
        checkout_tag: "v5",
    };

    #[test]
    fn test_missing_markers_on_a_complete_template_is_empty() {
        let template = "# Title\n<!-- checkout_action_tag -->\n<!-- version -->\n<!-- table -->\n";
        assert!(missing_markers(template).is_empty());
    }

    #[test]
    fn test_missing_markers_reports_in_canonical_order() {
        // Template order is irrelevant; reporting order is fixed.
        let template = "# Title\n<!-- version -->\n";
        assert_eq!(
            missing_markers(template),
            vec![TABLE_MARKER, CHECKOUT_TAG_MARKER]
        );
    }

    #[test]
    fn test_substitute_replaces_every_occurrence() {
        let template = "v: <!-- version --> and again <!-- version -->\n<!-- table -->\n<!-- checkout_action_tag -->";
        let result = substitute(template, &SUBS);

        assert_eq!(
            result,
            "v: v3.11.2 and again v3.11.2\n| a | b |\nv5"
        );
    }

    #[test]
    fn test_substitute_leaves_unmarked_text_alone() {
        let template = "plain text, no markers";
        assert_eq!(substitute(template, &SUBS), template);
    }
}
