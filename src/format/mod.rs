//! Display formatting for video metadata.
//!
//! - [`format_view_count`]: `1300000` → `1.3M`
//! - [`time_ago`] / [`published_label`]: `Apr 19, 2019` → `over 5 years ago`
//! - [`embed_url`]: watch URL → embeddable player URL

mod embed;
mod time_ago;
mod views;

pub use embed::{embed_url, video_id, EMBED_BASE};
pub use time_ago::{format_distance, parse_timestamp, published_label, time_ago};
pub use views::format_view_count;
