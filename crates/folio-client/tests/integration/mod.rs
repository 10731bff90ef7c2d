mod adapter;
mod admin;
mod http_source;
