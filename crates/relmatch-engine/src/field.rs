//! Title and category matching of a resource type's aliases.
//!
//! Both matchers stop at the first alias (in knowledge-base order) that hits;
//! they never look for a better alias further down the list.

use relmatch_kb::{KnowledgeBase, ServiceEntry};

/// Title hits contribute this fraction of the mapping weight.
pub const TITLE_WEIGHT_FACTOR: f64 = 0.7;
/// Category hits contribute a flat score regardless of weight.
pub const CATEGORY_SCORE: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldMatch<'kb> {
    pub score: f64,
    pub alias: Option<&'kb str>,
}

impl FieldMatch<'static> {
    pub const NONE: FieldMatch<'static> = FieldMatch { score: 0.0, alias: None };
}

impl FieldMatch<'_> {
    pub fn is_match(&self) -> bool {
        self.alias.is_some()
    }
}

pub fn match_in_title<'kb>(kb: &'kb KnowledgeBase, title: &str, resource_type: &str) -> FieldMatch<'kb> {
    kb.service(resource_type).map_or(FieldMatch::NONE, |entry| title_match(entry, title))
}

pub fn match_in_categories<'kb>(kb: &'kb KnowledgeBase, categories: &[String], resource_type: &str) -> FieldMatch<'kb> {
    let Some(entry) = kb.service(resource_type) else {
        return FieldMatch::NONE;
    };
    let lowered: Vec<String> = categories.iter().map(|c| c.to_lowercase()).collect();
    category_match(entry, &lowered)
}

/// Whole-word, case-insensitive alias search in the title.
pub(crate) fn title_match<'kb>(entry: &'kb ServiceEntry, title: &str) -> FieldMatch<'kb> {
    entry
        .aliases()
        .iter()
        .find(|a| a.occurs_as_word(title))
        .map_or(FieldMatch::NONE, |a| FieldMatch { score: TITLE_WEIGHT_FACTOR * entry.weight(), alias: Some(a.name()) })
}

/// Substring alias search over categories that are already lowercase.
pub(crate) fn category_match<'kb>(entry: &'kb ServiceEntry, lowered_categories: &[String]) -> FieldMatch<'kb> {
    entry
        .aliases()
        .iter()
        .find(|a| lowered_categories.iter().any(|c| a.contained_in_lower(c)))
        .map_or(FieldMatch::NONE, |a| FieldMatch { score: CATEGORY_SCORE, alias: Some(a.name()) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use relmatch_kb::ServiceMapping;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new(
            vec![ServiceMapping::new("contoso.compute/virtualmachines", ["Virtual Machines", "VM"], 0.9)],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn title_match_scales_with_weight_and_reports_first_alias() {
        let kb = kb();
        let m = match_in_title(&kb, "VM and Virtual Machines news", "Contoso.Compute/VirtualMachines");
        assert_eq!(m.alias, Some("Virtual Machines"), "table order, not text order");
        assert!((m.score - 0.63).abs() < 1e-12);
    }

    #[test]
    fn title_match_requires_whole_words() {
        let kb = kb();
        assert!(!match_in_title(&kb, "VMware update", "contoso.compute/virtualmachines").is_match());
        assert!(match_in_title(&kb, "New vm sizes", "contoso.compute/virtualmachines").is_match());
    }

    #[test]
    fn category_match_is_flat_substring() {
        let kb = kb();
        let m = match_in_categories(&kb, &["Azure Virtual Machines".to_string()], "contoso.compute/virtualmachines");
        assert_eq!(m.alias, Some("Virtual Machines"));
        assert!((m.score - CATEGORY_SCORE).abs() < 1e-12);
        assert!(!match_in_categories(&kb, &["Storage".to_string()], "contoso.compute/virtualmachines").is_match());
    }

    #[test]
    fn unknown_type_never_matches() {
        let kb = kb();
        assert_eq!(match_in_title(&kb, "Virtual Machines", "contoso.other/thing"), FieldMatch::NONE);
        assert_eq!(match_in_categories(&kb, &["Virtual Machines".to_string()], "contoso.other/thing"), FieldMatch::NONE);
    }
}
