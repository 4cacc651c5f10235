pub mod asset_writer;

pub use asset_writer::open_sink;
pub use asset_writer::AssetWriter;
