pub mod args;
pub mod locks;
pub mod response;
