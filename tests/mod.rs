mod support;
mod http_api;
