//! Property tests for the pure transformation paths.

use proptest::prelude::*;

use wpdocs::docs::domain::parse_subtype_list;
use wpdocs::docs::effective_per_page;
use wpdocs::html::{html_to_markdown, html_to_text};
use wpdocs::skill::scaffold::title_case;

proptest! {
    #[test]
    fn per_page_always_lands_in_range(requested in any::<u32>()) {
        let effective = effective_per_page(requested);
        prop_assert!((1..=100).contains(&effective));
        prop_assert_eq!(effective, requested.clamp(1, 100));
    }

    #[test]
    fn converters_are_total_and_trimmed(input in ".{0,400}") {
        let text = html_to_text(&input);
        let markdown = html_to_markdown(&input);
        prop_assert_eq!(text.trim(), text.as_str());
        prop_assert_eq!(markdown.trim(), markdown.as_str());
    }

    #[test]
    fn tag_free_ascii_text_passes_through(input in "[a-zA-Z0-9 .,]{0,80}") {
        prop_assert_eq!(html_to_text(&input), input.trim());
    }

    #[test]
    fn subtype_lists_never_contain_empties(raw in "[a-z,\\- ]{0,60}") {
        let parsed = parse_subtype_list(&raw);
        prop_assert!(parsed.iter().all(|s| !s.is_empty()));
        prop_assert!(parsed.iter().all(|s| s.trim() == s));
    }

    #[test]
    fn title_case_splits_on_every_hyphen(name in "[a-z]{1,8}(-[a-z]{1,8}){0,3}") {
        let title = title_case(&name);
        prop_assert!(!title.contains('-'));
        prop_assert_eq!(title.split(' ').count(), name.split('-').count());
    }
}
