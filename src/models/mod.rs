mod video;

pub use video::{Category, VideoDetail, VideoSummary};
