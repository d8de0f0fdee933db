//! Course video records.
//!
//! The course API names the same fields differently depending on the
//! endpoint (`video_url` or `youtube_url`, `markdown` or
//! `markdown_content`). Records are normalized to one shape on
//! deserialization so nothing downstream sees the variants.

use serde::{Deserialize, Serialize};

use crate::block::BlockSequence;

/// A course video with its lecture notes.
///
/// # Example
/// ```
/// use lecturemark::VideoRecord;
///
/// let record = VideoRecord::from_json(
///     r##"{"title": "Week 1", "youtube_url": "https://youtu.be/x", "markdown_content": "# Notes"}"##,
/// ).unwrap();
/// assert_eq!(record.video_url.as_deref(), Some("https://youtu.be/x"));
/// assert_eq!(record.notes().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video title.
    #[serde(default)]
    pub title: String,
    /// Player URL.
    #[serde(default, alias = "youtube_url")]
    pub video_url: Option<String>,
    /// Raw lecture notes.
    #[serde(default, alias = "markdown_content")]
    pub markdown: Option<String>,
}

impl VideoRecord {
    /// Parse a record from the course API's JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Render the notes. A record without notes yields no blocks.
    pub fn notes(&self) -> BlockSequence {
        crate::render_markdown_subset(self.markdown.as_deref())
    }
}
