mod api;
mod service;
