//! Aggregator page rendering

pub mod aggregator;

pub use aggregator::{AggregatorRenderer, Import, escape_comment, escape_html, heading_level};
