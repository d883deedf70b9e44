//! # Utilities Module
//!
//! Small helpers shared across the crate.

/// Formats an ordered sequence of item names for display.
///
/// # Examples
///
/// ```
/// use dungeon_escape::format_item_list;
///
/// assert_eq!(format_item_list(&[]), "Empty");
/// assert_eq!(
///     format_item_list(&["5 Coins".to_string(), "Armour".to_string()]),
///     "5 Coins, Armour"
/// );
/// ```
pub fn format_item_list(items: &[String]) -> String {
    if items.is_empty() {
        String::from("Empty")
    } else {
        items.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_reads_as_empty() {
        assert_eq!(format_item_list(&[]), "Empty");
    }

    #[test]
    fn test_items_join_with_commas_in_order() {
        let items = vec!["Key".to_string(), "armour".to_string()];
        assert_eq!(format_item_list(&items), "Key, armour");
    }
}
