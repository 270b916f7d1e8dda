pub mod dir;
pub mod print;
pub mod proto;
