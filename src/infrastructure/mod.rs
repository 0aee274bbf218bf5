pub mod codec;
pub mod storage;
pub mod tls;
