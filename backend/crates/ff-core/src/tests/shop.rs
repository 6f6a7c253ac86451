use crate::{SHOP_PLUS_STOCK, ShopMode, ShopPrice, normal_shop_items};

use std::collections::HashSet;
use std::str::FromStr;

#[test]
fn test_shop_mode_as_str() {
    assert_eq!(ShopMode::Normal.as_str(), "normal");
    assert_eq!(ShopMode::Plus.as_str(), "plus");
}

#[test]
fn test_shop_mode_from_str() {
    assert_eq!(ShopMode::from_str("normal").unwrap(), ShopMode::Normal);
    assert_eq!(ShopMode::from_str("plus").unwrap(), ShopMode::Plus);
    assert!(ShopMode::from_str("PLUS").is_err());
}

#[test]
fn test_shop_mode_default() {
    assert_eq!(ShopMode::default(), ShopMode::Normal);
}

#[test]
fn given_points_price_when_label_then_thousands_separated() {
    assert_eq!(ShopPrice::Points(5_000).label(), "5,000 pts");
    assert_eq!(ShopPrice::Points(500).label(), "500 pts");
}

#[test]
fn given_money_price_when_label_then_pounds_with_two_decimals() {
    assert_eq!(ShopPrice::Money { pence: 750 }.label(), "£7.50");
    assert_eq!(ShopPrice::Money { pence: 100 }.label(), "£1.00");
    assert_eq!(ShopPrice::Money { pence: 1_200 }.label(), "£12.00");
}

#[test]
fn given_normal_catalog_then_twenty_items_with_unique_ids() {
    let items = normal_shop_items();
    let ids: HashSet<&str> = items.iter().map(|item| item.id).collect();

    assert_eq!(items.len(), 20);
    assert_eq!(ids.len(), items.len());
}

#[test]
fn given_normal_catalog_then_points_items_listed_before_money_items() {
    let first_money = normal_shop_items()
        .iter()
        .position(|item| matches!(item.price, ShopPrice::Money { .. }))
        .unwrap();

    assert!(
        normal_shop_items()[first_money..]
            .iter()
            .all(|item| matches!(item.price, ShopPrice::Money { .. }))
    );
}

#[test]
fn given_shop_plus_stock_then_every_entry_has_fifteen() {
    assert_eq!(SHOP_PLUS_STOCK.len(), 25);
    assert!(SHOP_PLUS_STOCK.iter().all(|(_, stock)| *stock == 15));
}
