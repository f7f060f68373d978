use crate::invoice::LineItem;

/// Sum of quantity × rate over the items. An empty list is simply 0.
pub fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(|item| item.quantity * item.rate).sum()
}

/// `subtotal + tax - discount`. Plain pass-through arithmetic: a
/// negative result is returned as-is, not clamped.
pub fn total(subtotal: f64, tax: f64, discount: f64) -> f64 {
    subtotal + tax - discount
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_sums_to_zero() {
        assert_eq!(subtotal(&[]), 0.0);
    }

    #[test]
    fn subtotal_multiplies_quantity_by_rate() {
        let items = [
            LineItem::new("Consulting", 5.0, 100.0),
            LineItem::new("Support", 2.5, 40.0),
        ];
        assert_eq!(subtotal(&items), 600.0);
    }

    #[test]
    fn total_applies_tax_and_discount() {
        assert_eq!(total(500.0, 50.0, 25.0), 525.0);
        assert_eq!(total(500.0, 0.0, 0.0), 500.0);
    }

    #[test]
    fn total_may_go_negative() {
        assert_eq!(total(100.0, 0.0, 150.0), -50.0);
    }
}
