use crate::radar_pipeline::common::error::Result;

pub trait RadarImageSource {
    /// Fetches one encoded radar image.
    fn fetch(&self) -> Result<Vec<u8>>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;
}
