//! Radar image acquisition
//!
//! Sources hand back the encoded bytes. `decode_radar_image` turns them into
//! the 3-channel image the classifier works on.

mod decode;
mod file_source;
mod http_source;
mod reader;

pub use decode::decode_radar_image;
pub use file_source::FileRadarSource;
pub use http_source::HttpRadarSource;
pub use reader::RadarImageSource;
