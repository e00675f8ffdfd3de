pub mod load;
pub mod session;
