//! Records that only appear nested inside other records.

mod address;
mod line_item;
mod money;

pub use address::{Address, CustomerAddress};
pub use line_item::{
    DiscountAllocation, DiscountApplication, DiscountCode, LineItem, NoteAttribute, ShippingLine,
    TaxLine,
};
pub use money::{Money, MoneySet};
