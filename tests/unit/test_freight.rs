use bulk_chai::domain::quote::{FREIGHT_LADDER_KG, FreightEstimate, MIN_ORDER_KG, format_inr};

#[test]
fn ladder_starts_at_the_minimum_order() {
    assert_eq!(i64::from(FREIGHT_LADDER_KG[0]), i64::from(MIN_ORDER_KG));
    assert!(FREIGHT_LADDER_KG.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn one_tonne_costs_forty_two_thousand_rupees() {
    let estimate = FreightEstimate::for_quantity(1000);
    assert_eq!(estimate.total, 42_000.0);
    assert_eq!(format_inr(estimate.total), "42,000");
}

#[test]
fn quote_message_carries_quantity_place_and_amount() {
    let message = FreightEstimate::for_quantity(250).quote_message("Kochi", "Kerala");
    assert_eq!(
        message,
        "Hi, I need a quote for 250kg of bulk CTC tea for Kochi, Kerala. Expected amount: ₹10,500"
    );
}
