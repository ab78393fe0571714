pub mod catalog;
pub mod checkout;
pub mod inventory;
pub mod order_item;
pub mod product;
pub mod product_image;
pub mod product_variant;
pub mod review;
pub mod wishlist;
