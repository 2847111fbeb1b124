pub mod config;
pub mod logging;

pub mod bulk;
pub mod campaign;
pub mod classify;
pub mod probe;
pub mod site;
pub mod tracking;
pub mod url_model;
