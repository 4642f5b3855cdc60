// Adapters layer: concrete implementations facing the outside world (inbound http).

pub mod http;
