//! The built-in fallback table.
//!
//! Substituted in full whenever an external catalog cannot be loaded. The
//! values mirror the catalog file the project ships, so a missing or broken
//! file degrades to the same choices users already know.

use super::{RatioGroup, ResolutionCatalog, ResolutionEntry};

#[rustfmt::skip]
const DEFAULT_TABLE: &[(&str, &[(&str, &str)])] = &[
    ("1:1", &[
        ("64x64", "网站极小图标、favicon"),
        ("256x256", "小图标、缩略图"),
        ("512x512", "应用程序图标、中等方形图"),
        ("1024x1024", "大尺寸方形设计"),
    ]),
    ("4:3", &[
        ("640x480", "VGA标准，早期CRT显示器"),
        ("800x600", "SVGA，早期计算机显示器"),
        ("1024x768", "XGA，早期笔记本电脑、投影仪"),
        ("1280x960", "SXGA+，高端显示器"),
    ]),
    ("3:2", &[
        ("1536x1024", "iPad显示分辨率"),
        ("2400x1600", "高分辨率平板显示器"),
    ]),
    ("16:10", &[
        ("1280x800", "WXGA，笔记本电脑显示器"),
        ("1920x1200", "WUXGA，专业显示器"),
    ]),
    ("16:9", &[
        ("1280x720", "高清视频入门标准"),
        ("1920x1080", "全高清，视频、游戏主流标准"),
        ("2560x1440", "电竞显示器、高清视频制作"),
        ("3840x2160", "4K超高清，专业视频、高端显示器"),
    ]),
    ("21:9", &[
        ("2560x1080", "21:9宽屏显示器"),
        ("3440x1440", "超宽屏游戏显示器"),
    ]),
    ("3:4", &[
        ("480x640", "竖版VGA"),
        ("768x1024", "竖版XGA"),
    ]),
    ("2:3", &[
        ("1024x1536", "竖版iPad分辨率"),
        ("1600x2400", "竖版高分辨率平板"),
    ]),
    ("9:16", &[
        ("720x1280", "竖版高清视频"),
        ("1080x1920", "竖版全高清，手机屏幕、短视频"),
    ]),
    ("9:21", &[
        ("1080x2520", "超长条屏显示"),
    ]),
];

impl Default for ResolutionCatalog {
    /// The fixed built-in catalog used when loading an external source fails.
    fn default() -> Self {
        let groups = DEFAULT_TABLE
            .iter()
            .map(|(ratio, entries)| RatioGroup {
                ratio: (*ratio).to_string(),
                resolutions: entries
                    .iter()
                    .map(|(resolution, description)| {
                        ResolutionEntry::new(*resolution, *description)
                    })
                    .collect(),
            })
            .collect();
        Self::new(groups)
    }
}
