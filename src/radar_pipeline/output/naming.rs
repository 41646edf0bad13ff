use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// `radar_<YYYY>_<MM>_<DD>_<HH>_<mm>_<ss>`
pub fn timestamp_stem(at: &NaiveDateTime) -> String {
    at.format("radar_%Y_%m_%d_%H_%M_%S").to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimestampedPaths {
    pub radar: PathBuf,
    pub segmented: PathBuf,
}

pub fn timestamped_paths(dir: &Path, at: &NaiveDateTime) -> TimestampedPaths {
    let stem = timestamp_stem(at);
    TimestampedPaths {
        radar: dir.join(format!("{stem}_radar.jpg")),
        segmented: dir.join(format!("{stem}_segmented.jpg")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_zero_padded_names() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 7)
            .unwrap()
            .and_hms_opt(9, 5, 1)
            .unwrap();

        assert_eq!(timestamp_stem(&at), "radar_2024_03_07_09_05_01");

        let paths = timestamped_paths(Path::new("radar_img"), &at);
        assert_eq!(
            paths.radar,
            PathBuf::from("radar_img/radar_2024_03_07_09_05_01_radar.jpg")
        );
        assert_eq!(
            paths.segmented,
            PathBuf::from("radar_img/radar_2024_03_07_09_05_01_segmented.jpg")
        );
    }
}
