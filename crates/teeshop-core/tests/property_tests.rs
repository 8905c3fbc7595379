//! Property-based tests for the cart store and gradient painter
//!
//! Uses proptest to verify the cart invariants under arbitrary operation
//! sequences, plus range properties of the background gradient.

use std::collections::HashMap;

use proptest::prelude::*;
use teeshop_core::{
    paint, Cart, CartView, FrameScheduler, Money, Point, ProductId, Viewport,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// A small pool of ids so sequences revisit the same products
fn product_id_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["shirt-1", "shirt-2", "cap", "jersey", "socks"])
        .prop_map(String::from)
}

/// Prices up to 10,000 pesos, in centavos
fn price_strategy() -> impl Strategy<Value = Money> {
    (0u64..1_000_000).prop_map(Money::from_centavos)
}

/// Operations that can be performed on a Cart
#[derive(Debug, Clone)]
enum CartOp {
    Add(String, Money),
    Change(String, i64),
    Remove(String),
    Clear,
}

fn cart_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<CartOp>> {
    prop::collection::vec(
        prop_oneof![
            4 => (product_id_strategy(), price_strategy()).prop_map(|(id, p)| CartOp::Add(id, p)),
            2 => (product_id_strategy(), -5i64..5).prop_map(|(id, d)| CartOp::Change(id, d)),
            1 => product_id_strategy().prop_map(CartOp::Remove),
            1 => Just(CartOp::Clear),
        ],
        0..max_ops,
    )
}

fn apply(cart: &mut Cart, op: &CartOp) {
    match op {
        CartOp::Add(id, price) => cart.add_item(id.as_str(), format!("Product {}", id), *price),
        CartOp::Change(id, delta) => cart.change_quantity(&ProductId::from(id.as_str()), *delta),
        CartOp::Remove(id) => {
            cart.remove_item(&ProductId::from(id.as_str()));
        }
        CartOp::Clear => cart.clear(),
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Adds alone: one line per distinct id, quantity equals the number of adds
    #[test]
    fn adds_count_per_id(ids in prop::collection::vec(product_id_strategy(), 0..40)) {
        let mut cart = Cart::new();
        let mut expected: HashMap<String, u32> = HashMap::new();

        for id in &ids {
            cart.add_item(id.as_str(), "Tee", Money::from_pesos(100));
            *expected.entry(id.clone()).or_default() += 1;
        }

        prop_assert_eq!(cart.line_count(), expected.len());
        for (id, count) in &expected {
            let line = cart.get(&ProductId::from(id.as_str())).unwrap();
            prop_assert_eq!(line.quantity, *count);
        }
    }

    /// Invariants hold after any sequence of operations
    #[test]
    fn invariants_hold(ops in cart_ops_strategy(60)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);

            let mut seen = std::collections::HashSet::new();
            for line in cart.lines() {
                prop_assert!(seen.insert(line.id.clone()), "duplicate id {}", line.id);
                prop_assert!(line.quantity >= 1);
            }

            let expected_total: u64 = cart
                .lines()
                .iter()
                .map(|l| l.unit_price.centavos() * u64::from(l.quantity))
                .sum();
            prop_assert_eq!(cart.total().centavos(), expected_total);
            prop_assert_eq!(cart.total() == Money::ZERO, cart.is_empty() || expected_total == 0);

            let units: u64 = cart.lines().iter().map(|l| u64::from(l.quantity)).sum();
            prop_assert_eq!(cart.item_count(), units);
        }
    }

    /// Removal is unconditional whatever the prior quantity
    #[test]
    fn remove_always_removes(adds in 1usize..30, id in product_id_strategy()) {
        let mut cart = Cart::new();
        for _ in 0..adds {
            cart.add_item(id.as_str(), "Tee", Money::from_pesos(1));
        }
        let pid = ProductId::from(id.as_str());

        let mut by_delta = cart.clone();
        by_delta.change_quantity(&pid, i64::MIN);
        prop_assert!(by_delta.get(&pid).is_none());

        cart.remove_item(&pid);
        prop_assert!(cart.get(&pid).is_none());
    }

    /// Badge count exceeds line count exactly when some line has quantity > 1
    #[test]
    fn item_count_vs_line_count(ops in cart_ops_strategy(40)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }
        let any_multi = cart.lines().iter().any(|l| l.quantity > 1);
        prop_assert_eq!(cart.item_count() != cart.line_count() as u64, any_multi);
    }

    /// Projecting twice without mutation yields identical output
    #[test]
    fn projection_is_idempotent(ops in cart_ops_strategy(40)) {
        let mut cart = Cart::new();
        for op in &ops {
            apply(&mut cart, op);
        }
        let first = CartView::project(&cart);
        let second = CartView::project(&cart);
        prop_assert_eq!(first.to_string(), second.to_string());
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.checkout_enabled, !cart.is_empty());
        prop_assert_eq!(first.placeholder.is_some(), cart.is_empty());
    }

    /// Gradient stops stay inside their documented ranges for any pointer
    #[test]
    fn gradient_ranges(
        x in -2000.0f64..4000.0,
        y in -2000.0f64..4000.0,
        w in 1.0f64..3000.0,
        h in 1.0f64..3000.0,
    ) {
        let g = paint(Point::new(x, y), Viewport::new(w, h));
        prop_assert!(g.angle.abs() <= 180.0 + 1e-9);
        prop_assert!((216.0..=222.0).contains(&g.dark.hue));
        prop_assert!((8.0..=30.0).contains(&g.dark.saturation));
        prop_assert!((10.0..=28.0).contains(&g.bright.saturation));
        prop_assert!((12.0..=30.0).contains(&g.dark.lightness));
        prop_assert!((60.0..=85.0).contains(&g.bright.lightness));
        prop_assert!(g.bright.lightness > g.dark.lightness);
    }

    /// A burst of schedules inside one frame yields only the last value
    #[test]
    fn scheduler_last_write_wins(values in prop::collection::vec(0u32..1000, 1..50)) {
        let mut sched = FrameScheduler::new(0u32);
        let requests = values.iter().filter(|v| sched.schedule(**v)).count();
        prop_assert_eq!(requests, 1);
        prop_assert_eq!(sched.take_frame(), values.last().copied());
        prop_assert_eq!(sched.take_frame(), None);
    }
}

// ============================================================================
// Scenario Tests
// ============================================================================

#[test]
fn scenario_add_twice() {
    let mut cart = Cart::new();
    cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
    cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
    assert_eq!(cart.line_count(), 1);
    assert_eq!(cart.get(&ProductId::from("shirt-1")).unwrap().quantity, 2);
    assert_eq!(cart.total(), Money::from_pesos(500));
}

#[test]
fn scenario_add_then_decrement() {
    let mut cart = Cart::new();
    cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
    cart.change_quantity(&ProductId::from("shirt-1"), -1);
    assert!(cart.is_empty());
    assert_eq!(cart.total(), Money::ZERO);
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn scenario_clear_matches_empty() {
    let mut cart = Cart::new();
    cart.add_item("shirt-1", "Classic Tee", Money::from_pesos(250));
    cart.add_item("cap", "Gorra", Money::from_pesos(150));
    cart.clear();

    let view = CartView::project(&cart);
    assert_eq!(cart.total(), Money::ZERO);
    assert_eq!(cart.item_count(), 0);
    assert!(view.placeholder.is_some());
    assert!(!view.checkout_enabled && !view.clear_enabled);
    assert_eq!(view, CartView::project(&Cart::new()));
}
