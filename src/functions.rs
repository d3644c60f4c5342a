use chrono::NaiveDate;

use crate::models::item::LineItem;

/// Next sequential invoice number for the given day, derived from the ids
/// already stored for that day.
///
/// Ids that do not start with today's `INV-YYYYMMDD` prefix are ignored. The
/// segment after the last `-` is parsed as the sequence; unparsable segments
/// count as 0. The sequence is zero-padded to 3 digits, wider values are
/// never truncated.
///
/// Two requests reading the same snapshot of existing ids will produce the
/// same number. Creation is not serialized against the lookup, so this is
/// best effort under concurrent load.
pub fn next_invoice_number(date: &NaiveDate, existing_ids: &[String]) -> String {
    let day_part = date.format("%Y%m%d").to_string();
    let prefix = format!("INV-{}", day_part);

    let last_seq = existing_ids
        .iter()
        .filter(|id| id.starts_with(&prefix))
        .map(|id| {
            id.rsplit('-')
                .next()
                .and_then(|segment| segment.parse::<u32>().ok())
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0);

    format!("INV-{}-{:03}", day_part, last_seq + 1)
}

/// Subtotal and grand total for a set of line items.
///
/// `subtotal = Σ(qty * price + labour_charges)`,
/// `total = subtotal + subtotal * tax / 100 - discount`. No rounding; display
/// formatting is the caller's concern. Negative inputs pass through as given.
pub fn compute_totals(items: &[LineItem], tax: f64, discount: f64) -> (f64, f64) {
    let subtotal = items.iter().map(LineItem::line_total).sum::<f64>();
    let total = subtotal + subtotal * tax / 100.0 - discount;

    (subtotal, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(qty: f64, price: f64, labour_charges: f64) -> LineItem {
        LineItem {
            name: "part".to_string(),
            qty,
            price,
            labour_charges,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_invoice_of_the_day_gets_sequence_one() {
        assert_eq!(
            next_invoice_number(&day(2025, 1, 1), &[]),
            "INV-20250101-001"
        );
    }

    #[test]
    fn sequence_continues_from_the_highest_existing_id() {
        let existing = vec![
            "INV-20250101-001".to_string(),
            "INV-20250101-003".to_string(),
        ];

        assert_eq!(
            next_invoice_number(&day(2025, 1, 1), &existing),
            "INV-20250101-004"
        );
    }

    #[test]
    fn other_days_do_not_affect_the_sequence() {
        let existing = vec![
            "INV-20241231-007".to_string(),
            "INV-20250101-002".to_string(),
        ];

        assert_eq!(
            next_invoice_number(&day(2025, 1, 1), &existing),
            "INV-20250101-003"
        );
    }

    #[test]
    fn unparsable_suffix_counts_as_zero() {
        let existing = vec!["INV-20250101-abc".to_string()];

        assert_eq!(
            next_invoice_number(&day(2025, 1, 1), &existing),
            "INV-20250101-001"
        );
    }

    #[test]
    fn sequence_grows_past_three_digits_without_truncation() {
        let existing = vec!["INV-20250101-999".to_string()];

        assert_eq!(
            next_invoice_number(&day(2025, 1, 1), &existing),
            "INV-20250101-1000"
        );
    }

    #[test]
    fn empty_item_list_yields_zero_subtotal() {
        let (subtotal, total) = compute_totals(&[], 18.0, 0.0);

        assert_eq!(subtotal, 0.0);
        assert_eq!(total, 0.0);
    }

    #[test]
    fn totals_match_the_worked_example() {
        let items = vec![item(2.0, 100.0, 50.0)];
        let (subtotal, total) = compute_totals(&items, 18.0, 20.0);

        assert_eq!(subtotal, 250.0);
        assert_eq!(total, 275.0);
    }

    #[test]
    fn zero_tax_and_discount_reduce_total_to_subtotal() {
        let items = vec![item(3.0, 40.0, 10.0), item(1.0, 5.0, 0.0)];
        let (subtotal, total) = compute_totals(&items, 0.0, 0.0);

        assert_eq!(total, subtotal);
    }

    #[test]
    fn subtotal_is_order_independent() {
        let mut items = vec![item(2.0, 100.0, 50.0), item(1.0, 30.0, 0.0), item(4.0, 7.5, 2.5)];
        let (forward, _) = compute_totals(&items, 18.0, 20.0);

        items.reverse();
        let (reversed, _) = compute_totals(&items, 18.0, 20.0);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn negative_inputs_pass_through() {
        let items = vec![item(-1.0, 100.0, 0.0)];
        let (subtotal, total) = compute_totals(&items, 0.0, -50.0);

        assert_eq!(subtotal, -100.0);
        assert_eq!(total, -50.0);
    }
}
