use dioxus::prelude::*;
use teeshop_core::{Cart, OrderCalculator, ShopConfig};

use crate::components::NoticeLayer;
use crate::context::{get_shop_config, Notice};
use crate::pages::Storefront;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the shared cart, order and notice state.
#[component]
pub fn App() -> Element {
    let shop: Signal<ShopConfig> = use_signal(get_shop_config);
    let cart: Signal<Cart> = use_signal(Cart::new);
    let order: Signal<OrderCalculator> = use_signal(OrderCalculator::new);
    let notice: Signal<Option<Notice>> = use_signal(|| None);

    use_context_provider(|| shop);
    use_context_provider(|| cart);
    use_context_provider(|| order);
    use_context_provider(|| notice);

    rsx! {
        style { {GLOBAL_STYLES} }
        Storefront {}
        NoticeLayer {}
    }
}
