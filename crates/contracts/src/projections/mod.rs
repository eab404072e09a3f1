pub mod p001_catalog_visibility;
