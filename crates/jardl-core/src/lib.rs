pub mod config;
pub mod logging;
pub mod downloader;
pub mod locator;
pub mod manifest;
pub mod pipeline;
pub mod storage;
pub mod url_model;
