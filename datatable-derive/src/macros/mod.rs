pub mod data_item;
