pub mod ops_disable;
pub mod ops_enable;
pub mod ops_list;
pub mod ops_resolve;
