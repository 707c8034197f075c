//! Report writers for resolved products: flat key/value fields for text
//! output and JSON documents for sidecar files.
pub mod report;
