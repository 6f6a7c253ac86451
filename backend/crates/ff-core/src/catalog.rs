//! Static shop data. Prices and descriptions are display-only.

use crate::{ShopItem, ShopPrice};

const fn points(
    id: &'static str,
    emoji: &'static str,
    name: &'static str,
    description: &'static str,
    price: u32,
) -> ShopItem {
    ShopItem {
        id,
        emoji,
        name,
        description,
        price: ShopPrice::Points(price),
    }
}

const fn money(
    id: &'static str,
    emoji: &'static str,
    name: &'static str,
    description: &'static str,
    pence: u32,
) -> ShopItem {
    ShopItem {
        id,
        emoji,
        name,
        description,
        price: ShopPrice::Money { pence },
    }
}

#[rustfmt::skip]
const NORMAL_SHOP_ITEMS: &[ShopItem] = &[
    // Buyable with points
    points("pts_bidding_voucher", "🎟️", "Bidding Voucher", "Enter a special bidding round or get a small head start.", 5_000),
    points("pts_immunity", "🔒", "Immunity from Eviction", "Protect yourself from being evicted in 1 round.", 10_000),
    points("pts_gift_1k", "💌", "Gift Points (1,000 pts)", "Send 1,000 points to another player.", 1_000),
    points("pts_gift_5k", "💌", "Gift Points (5,000 pts)", "Send 5,000 points to another player.", 5_000),
    points("pts_gift_10k", "💌", "Gift Points (10,000 pts)", "Send 10,000 points to another player.", 10_000),
    points("pts_lucky_draw", "💫", "Lucky Draw Ticket", "Grants access to the next Lucky Draw.", 2_000),
    points("pts_out_of_jail", "🕒", "Out-Of-Jail! (1 Round)", "Skip one eviction/penalty in an event.", 7_000),
    points("pts_title", "🏅", "Exclusive Title (1 week)", "Choose a fun custom title for 1 week.", 2_000),
    // Buyable with money
    money("money_immunity5", "🔒", "Immunity from Eviction (5 Rounds)", "Prismatic immunity for 5 rounds.", 1_000),
    money("money_10k", "💰", "Buy 10,000 Points", "Instantly add 10,000 points.", 200),
    money("money_box1", "🎁", "Mystery Box (Level 1)", "Random reward (500–4,999 pts or rare item).", 300),
    money("money_box2", "🎁", "Mystery Box (Level 2)", "Random reward (5,000–19,999 pts or rare item).", 500),
    money("money_box3", "🎁", "Mystery Box (Level 3)", "Random reward (20,000–40,000 pts or rare item).", 700),
    money("money_box_lux", "🎁", "Mystery Box (Luxury)", "Random reward (50,000–100,000 pts or rare item).", 1_000),
    money("money_25k", "💰", "Buy 25,000 Points", "Big value points pack.", 500),
    money("money_vouch_x3", "🧧", "Bidding Voucher Pack (x3)", "Three vouchers. All expire Nov 1st 2026.", 750),
    money("money_vouch_x5", "🧧", "Bidding Voucher Pack (x5)", "Five vouchers. All expire Dec 1st 2026.", 1_200),
    money("money_immunity2", "🛡️", "Immunity Pass (2 Events)", "Immunity from eviction for 2 events.", 800),
    money("money_vip_badge", "🎖️", "VIP Member Badge", "Access to exclusive deals and events.", 300),
    money("money_wheel", "🎲", "Lucky Wheel Spin", "Spin the wheel for random prizes.", 100),
];

/// Placeholder stock levels for Shop+, which is currently always closed.
pub const SHOP_PLUS_STOCK: &[(&str, u32)] = &[
    ("flash_10k", 15),
    ("flash_50k", 15),
    ("flash_100k", 15),
    ("flash_250k", 15),
    ("flash_500k", 15),
    ("flash_1m", 15),
    ("pts_voucher", 15),
    ("pts_immunity1", 15),
    ("pts_jail", 15),
    ("pts_doublebid", 15),
    ("pts_vip24", 15),
    ("money_immunity5", 15),
    ("money_immunity10", 15),
    ("box_lvl1", 15),
    ("box_lvl2", 15),
    ("box_lvl3", 15),
    ("box_lux", 15),
    ("box_galaxy", 15),
    ("bundle_mega", 15),
    ("vouch_x3", 15),
    ("vouch_x5", 15),
    ("vouch_x10", 15),
    ("fun_wheel", 15),
    ("fun_draw", 15),
    ("raffle_ticket", 15),
];

/// Items offered by the normal shop, in display order.
pub fn normal_shop_items() -> &'static [ShopItem] {
    NORMAL_SHOP_ITEMS
}
