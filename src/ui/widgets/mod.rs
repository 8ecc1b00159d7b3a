pub mod kv_table;
pub mod panel;
pub mod spinner;
