//! PDF text extractor implementations.

pub mod http;

pub use http::HttpPdfExtractor;
