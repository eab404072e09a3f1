use crate::domain::a002_cart::Cart;
use crate::shared::config::OrderConfig;

/// Order text: the preamble, then `- name (weight)` per item in cart order.
///
/// Returns `None` for an empty cart.
pub fn compose_message(cart: &Cart, preamble: &str) -> Option<String> {
    if cart.is_empty() {
        return None;
    }

    let mut message = String::from(preamble);
    message.push('\n');
    for item in cart.items() {
        message.push_str(&format!("- {} ({})\n", item.name, item.weight));
    }
    Some(message)
}

/// Messaging link `<endpoint>/<recipient>?text=<percent-encoded message>`
pub fn order_url(order: &OrderConfig, message: &str) -> String {
    format!(
        "{}/{}?text={}",
        order.endpoint.trim_end_matches('/'),
        order.recipient,
        urlencoding::encode(message)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::StoreConfig;

    const PREAMBLE: &str = "مرحبا، أريد طلب التوابل التالية:";

    #[test]
    fn test_compose_in_insertion_order() {
        let mut cart = Cart::new();
        cart.push("Cumin".into(), "100".into());
        cart.push("Sumac".into(), "custom-250".into());

        let message = compose_message(&cart, PREAMBLE).unwrap();
        let lines: Vec<&str> = message.lines().collect();
        assert_eq!(lines, vec![PREAMBLE, "- Cumin (100)", "- Sumac (custom-250)"]);
    }

    #[test]
    fn test_empty_cart_has_no_message() {
        assert_eq!(compose_message(&Cart::new(), PREAMBLE), None);
    }

    #[test]
    fn test_order_url_is_encoded() {
        let order = StoreConfig::default().order;
        let url = order_url(&order, "hi there\n- Cumin (100)\n");
        assert_eq!(
            url,
            "https://wa.me/96181079758?text=hi%20there%0A-%20Cumin%20%28100%29%0A"
        );
    }

    #[test]
    fn test_order_url_trailing_slash() {
        let mut order = StoreConfig::default().order;
        order.endpoint = "https://wa.me/".to_string();
        assert!(order_url(&order, "x").starts_with("https://wa.me/96181079758?text="));
    }

    #[test]
    fn test_arabic_is_percent_encoded() {
        let order = StoreConfig::default().order;
        let url = order_url(&order, "كمون");
        assert!(url.ends_with("text=%D9%83%D9%85%D9%88%D9%86"));
    }
}
