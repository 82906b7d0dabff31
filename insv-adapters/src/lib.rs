//! Metadata sources for insv2gpx

pub mod dump;
pub mod exiftool;

pub use dump::DumpFileSource;
pub use exiftool::ExifToolSource;
