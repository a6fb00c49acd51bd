pub mod block;
pub mod cidr;
pub mod demand;
pub mod range;
