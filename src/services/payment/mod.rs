pub mod flow;
pub mod interface;
