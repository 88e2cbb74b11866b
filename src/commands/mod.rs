pub mod check;
pub mod layout;
pub mod serve;
pub mod show;
