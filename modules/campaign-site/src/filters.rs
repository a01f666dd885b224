use campaign_common::Filter;

use crate::document::{hooks, Element};

/// The category a chip selects: its `data-filter` value, or `all` when it has none.
pub fn chip_value(attr: Option<&str>) -> &str {
    match attr {
        None | Some("") => Filter::All.as_str(),
        Some(value) => value,
    }
}

/// Mark every chip whose `data-filter` equals `value` selected and the rest unselected.
/// Returns how many chips ended up active.
pub fn mark_active_chip(chips: &mut [Element], value: &str) -> usize {
    let mut count = 0;
    for chip in chips.iter_mut() {
        let is_active = chip.attribute("data-filter") == Some(value);
        chip.toggle_class(hooks::ACTIVE_CLASS, is_active);
        chip.set_attribute("aria-selected", if is_active { "true" } else { "false" });
        if is_active {
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chips() -> Vec<Element> {
        Filter::CHOICES
            .iter()
            .map(|f| Element::new().with_attribute("data-filter", f.as_str()))
            .collect()
    }

    #[test]
    fn test_missing_attribute_means_all() {
        assert_eq!(chip_value(None), "all");
        assert_eq!(chip_value(Some("")), "all");
        assert_eq!(chip_value(Some("rallies")), "rallies");
    }

    #[test]
    fn test_exactly_one_chip_active() {
        let mut chips = chips();
        assert_eq!(mark_active_chip(&mut chips, "field"), 1);
        let active: Vec<_> = chips
            .iter()
            .filter(|c| c.has_class(hooks::ACTIVE_CLASS))
            .map(|c| c.attribute("data-filter"))
            .collect();
        assert_eq!(active, vec![Some("field")]);
        assert_eq!(chips[0].attribute("aria-selected"), Some("false"));
        assert_eq!(chips[2].attribute("aria-selected"), Some("true"));
    }

    #[test]
    fn test_reselect_clears_previous() {
        let mut chips = chips();
        mark_active_chip(&mut chips, "press");
        mark_active_chip(&mut chips, "all");
        assert!(chips[0].has_class(hooks::ACTIVE_CLASS));
        assert!(!chips[3].has_class(hooks::ACTIVE_CLASS));
    }

    #[test]
    fn test_chip_without_attribute_is_never_marked() {
        let mut chips = chips();
        chips.push(Element::new());
        assert_eq!(mark_active_chip(&mut chips, "all"), 1);
        assert!(!chips[4].has_class(hooks::ACTIVE_CLASS));
        assert_eq!(chips[4].attribute("aria-selected"), Some("false"));
    }

    #[test]
    fn test_unknown_value_marks_only_its_own_chip() {
        let mut chips = chips();
        chips.push(Element::new().with_attribute("data-filter", "rallies"));
        assert_eq!(mark_active_chip(&mut chips, "rallies"), 1);
        assert!(chips[4].has_class(hooks::ACTIVE_CLASS));
        assert!(!chips[0].has_class(hooks::ACTIVE_CLASS));
    }
}
