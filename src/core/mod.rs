pub mod dumper;
pub mod inspector;
pub mod scanner;

pub use dumper::BundleDumper;
pub use inspector::{BundleInspector, BundleReport};
pub use scanner::{BundleFile, BundleScanner};
