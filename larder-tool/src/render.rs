use std::fmt::Write;

use larder_core::{GroceryCategory, GroceryItem};

pub fn render_card(item: &GroceryItem) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}  [{}]", item.name, item.category);
    let _ = writeln!(out, "  {}", item.display_description());
    let _ = writeln!(
        out,
        "  {}    Quantity: {}",
        item.formatted_price(),
        item.quantity
    );
    let _ = writeln!(out, "  Image: {}", item.display_image_url());
    out
}

/// Renders items in the order given, or an empty-state notice.
pub fn render_list<'a>(items: impl IntoIterator<Item = &'a GroceryItem>) -> String {
    let cards: Vec<String> = items.into_iter().map(render_card).collect();
    if cards.is_empty() {
        return "No Items Yet\nAdd a new grocery item using the form to see it here.\n".to_string();
    }

    cards.join("\n")
}

pub fn render_category_menu() -> String {
    let mut out = String::new();
    for (i, category) in GroceryCategory::ALL.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, category);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> GroceryItem {
        GroceryItem {
            id: "milk-1".to_string(),
            name: "Whole Milk".to_string(),
            category: GroceryCategory::DairyEggs,
            price: 3.0,
            quantity: 8,
            description: String::new(),
            image_url: None,
        }
    }

    #[test]
    fn empty_list_shows_notice() {
        let out = render_list(&[] as &[GroceryItem]);
        assert!(out.starts_with("No Items Yet"));
        assert!(out.contains("Add a new grocery item using the form to see it here."));
    }

    #[test]
    fn card_shows_all_fields() {
        let card = render_card(&milk());
        assert!(card.contains("Whole Milk  [Dairy & Eggs]"));
        assert!(card.contains("No description provided."));
        assert!(card.contains("$3.00"));
        assert!(card.contains("Quantity: 8"));
        assert!(card.contains("https://picsum.photos/seed/milk-1/400/400"));
    }

    #[test]
    fn list_keeps_given_order() {
        let mut eggs = milk();
        eggs.name = "Free-Range Eggs".to_string();

        let out = render_list(&[eggs, milk()]);
        let eggs_at = out.find("Free-Range Eggs").unwrap();
        let milk_at = out.find("Whole Milk").unwrap();
        assert!(eggs_at < milk_at);
    }

    #[test]
    fn menu_is_numbered_in_order() {
        let menu = render_category_menu();
        assert!(menu.starts_with("  1. Fruits & Vegetables\n"));
        assert!(menu.ends_with("  8. Other\n"));
    }
}
