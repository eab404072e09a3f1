pub mod u001_place_order;
pub mod u002_storefront;
