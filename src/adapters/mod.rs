// Adapters layer: the HTTP source and the delimited-file sink.

pub mod http;
pub mod storage;
