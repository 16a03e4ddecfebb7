pub(crate) mod api;
pub(crate) mod event;
pub(crate) mod job;
pub(crate) mod server;
