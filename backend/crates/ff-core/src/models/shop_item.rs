use crate::format_thousands;

/// Price of a catalog item: either in points or in money (pence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopPrice {
    Points(u32),
    Money { pence: u32 },
}

impl ShopPrice {
    pub fn label(&self) -> String {
        match self {
            Self::Points(points) => format!("{} pts", format_thousands(u64::from(*points))),
            Self::Money { pence } => format!("£{}.{:02}", pence / 100, pence % 100),
        }
    }
}

/// A static catalog entry. There is no purchase flow behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopItem {
    pub id: &'static str,
    pub emoji: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price: ShopPrice,
}
