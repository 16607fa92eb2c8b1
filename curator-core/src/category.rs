//! Coarse file-type categories derived from `file(1)` descriptions.
//!
//! Classification is a fixed ordered-rule scan over the free-text
//! description; image descriptions are refined into resolution buckets
//! by pixel area.

use std::fmt;

use regex_lite::Regex;

// Area thresholds between the image buckets (800x600 and 1920x1080).
const LOW_RES_AREA: u64 = 800 * 600;
const MEDIUM_RES_AREA: u64 = 1920 * 1080;

/// Coarse category assigned to a scanned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Video,
    LowResImage,
    MediumResImage,
    HighResImage,
    ImageUnknownRes,
    Pdf,
    Text,
    Other,
}

impl Category {
    /// All categories in summary display order.
    pub const ALL: [Category; 8] = [
        Category::Video,
        Category::LowResImage,
        Category::MediumResImage,
        Category::HighResImage,
        Category::ImageUnknownRes,
        Category::Pdf,
        Category::Text,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Video => "Video",
            Category::LowResImage => "Low-res Image",
            Category::MediumResImage => "Medium-res Image",
            Category::HighResImage => "High-res Image",
            Category::ImageUnknownRes => "Image (Resolution Unknown)",
            Category::Pdf => "PDF",
            Category::Text => "Text",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Classify a one-line type description.
///
/// Rules are checked in precedence order: video, image (refined by the
/// last `WxH` pattern in the text), PDF, text, other.
pub fn classify(description: &str) -> Category {
    if description.contains("video") || description.contains("AVI") {
        return Category::Video;
    }
    if description.contains("image") || description.contains("JPEG") {
        return match last_resolution(description) {
            Some((width, height)) => {
                let area = width * height;
                if area < LOW_RES_AREA {
                    Category::LowResImage
                } else if area < MEDIUM_RES_AREA {
                    Category::MediumResImage
                } else {
                    Category::HighResImage
                }
            }
            None => Category::ImageUnknownRes,
        };
    }
    if description.contains("PDF document") {
        return Category::Pdf;
    }
    if description.contains("ASCII text") || description.contains("text") {
        return Category::Text;
    }
    Category::Other
}

/// The last `<width>x<height>` pattern in the description, if any.
fn last_resolution(description: &str) -> Option<(u64, u64)> {
    let pattern = Regex::new(r"(\d+)x(\d+)").expect("static pattern");
    let caps = pattern.captures_iter(description).last()?;
    let width = caps[1].parse().ok()?;
    let height = caps[2].parse().ok()?;
    Some((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video() {
        assert_eq!(classify("RIFF (little-endian) data, AVI"), Category::Video);
        assert_eq!(classify("ISO Media, MP4 video"), Category::Video);
    }

    #[test]
    fn test_video_takes_precedence_over_image() {
        // "video" wins even when an image keyword also appears.
        assert_eq!(
            classify("AVI, 640x480 JPEG frames"),
            Category::Video
        );
    }

    #[test]
    fn test_image_buckets() {
        assert_eq!(
            classify("JPEG image data, baseline, 640x480, components 3"),
            Category::LowResImage
        );
        assert_eq!(
            classify("JPEG image data, baseline, 1024x768, components 3"),
            Category::MediumResImage
        );
        assert_eq!(
            classify("PNG image data, 3840x2160, 8-bit/color RGB"),
            Category::HighResImage
        );
    }

    #[test]
    fn test_image_uses_last_resolution() {
        // Thumbnail resolution first, real one last.
        assert_eq!(
            classify("JPEG image data, thumbnail 160x120, 1920x1200"),
            Category::HighResImage
        );
    }

    #[test]
    fn test_image_without_resolution() {
        assert_eq!(
            classify("GIF image data, version 89a"),
            Category::ImageUnknownRes
        );
    }

    #[test]
    fn test_pdf() {
        assert_eq!(classify("PDF document, version 1.4"), Category::Pdf);
    }

    #[test]
    fn test_text() {
        assert_eq!(classify("ASCII text, with CRLF line terminators"), Category::Text);
        assert_eq!(classify("UTF-8 Unicode text"), Category::Text);
    }

    #[test]
    fn test_other() {
        assert_eq!(classify("Zip archive data"), Category::Other);
        assert_eq!(classify("data"), Category::Other);
    }
}
