//! Display helpers for listings: permissions, sizes, dates, file subtypes.

use std::fmt;

use crate::node::NodeKind;

/// Synthesized Unix permission string.
pub fn permissions(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Folder => "drwxr-xr-x",
        NodeKind::File => "-rw-r--r--",
    }
}

/// Synthesized hard-link count.
pub fn link_count(kind: NodeKind) -> u32 {
    match kind {
        NodeKind::Folder => 2,
        NodeKind::File => 1,
    }
}

/// Render a byte count with a binary unit suffix, rounded to an integer.
///
/// `512` -> `512B`, `1536` -> `2K`, `1048576` -> `1M`.
pub fn human_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{}{}", value.round() as u64, UNITS[unit])
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Format Unix seconds the way `ls -l` does: `Jan  5 09:03` (UTC).
pub fn ls_date(secs: u64) -> String {
    let (_, month, day) = days_to_ymd(secs / 86_400);
    let time_of_day = secs % 86_400;
    let hour = time_of_day / 3600;
    let minute = (time_of_day % 3600) / 60;
    format!(
        "{} {day:>2} {hour:02}:{minute:02}",
        MONTHS[usize::from(month - 1)]
    )
}

/// Format Unix seconds as `YYYY-MM-DD HH:MM:SS` (UTC).
pub fn iso_date(secs: u64) -> String {
    let (year, month, day) = days_to_ymd(secs / 86_400);
    let time_of_day = secs % 86_400;
    format!(
        "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02}",
        time_of_day / 3600,
        (time_of_day % 3600) / 60,
        time_of_day % 60
    )
}

/// Convert days since the Unix epoch to (year, month, day).
///
/// Closed-form proleptic Gregorian conversion over 400-year eras, so any
/// `u64` timestamp maps to a date in constant time.
fn days_to_ymd(days: u64) -> (u64, u8, u8) {
    // Shift the epoch to 0000-03-01 so leap days fall at the end of a year.
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    // month is 1..=12 and day 1..=31 by construction.
    (year, month as u8, day as u8)
}

/// Display hint for `stat`, derived from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subtype {
    Directory,
    Image,
    Code,
    Document,
    Audio,
    Video,
    Archive,
    Text,
    File,
}

impl Subtype {
    pub fn classify(name: &str, kind: NodeKind) -> Self {
        if kind == NodeKind::Folder {
            return Self::Directory;
        }
        let ext = match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => ext.to_ascii_lowercase(),
            _ => return Self::File,
        };
        match ext.as_str() {
            "png" | "jpg" | "jpeg" | "gif" | "svg" | "webp" | "bmp" | "ico" => Self::Image,
            "rs" | "js" | "jsx" | "ts" | "tsx" | "py" | "go" | "c" | "h" | "cpp" | "java"
            | "rb" | "sh" | "json" | "toml" | "yaml" | "yml" | "html" | "css" => Self::Code,
            "md" | "pdf" | "doc" | "docx" | "rtf" => Self::Document,
            "mp3" | "wav" | "ogg" | "flac" => Self::Audio,
            "mp4" | "webm" | "mov" | "mkv" => Self::Video,
            "zip" | "tar" | "gz" | "tgz" | "7z" => Self::Archive,
            "txt" | "log" | "csv" => Self::Text,
            _ => Self::File,
        }
    }
}

impl fmt::Display for Subtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Directory => "directory",
            Self::Image => "image",
            Self::Code => "code",
            Self::Document => "document",
            Self::Audio => "audio",
            Self::Video => "video",
            Self::Archive => "archive",
            Self::Text => "text",
            Self::File => "file",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_size_units() {
        assert_eq!(human_size(0), "0B");
        assert_eq!(human_size(512), "512B");
        assert_eq!(human_size(1024), "1K");
        assert_eq!(human_size(1536), "2K");
        assert_eq!(human_size(4096), "4K");
        assert_eq!(human_size(5 * 1024 * 1024), "5M");
        assert_eq!(human_size(3 * 1024 * 1024 * 1024), "3G");
        assert_eq!(human_size(2 * 1024u64.pow(4)), "2T");
        assert_eq!(human_size(4096 * 1024u64.pow(4)), "4096T");
    }

    #[test]
    fn dates_from_epoch() {
        assert_eq!(ls_date(0), "Jan  1 00:00");
        assert_eq!(iso_date(0), "1970-01-01 00:00:00");
        // 2024-02-29 12:34:56 UTC
        assert_eq!(iso_date(1_709_210_096), "2024-02-29 12:34:56");
        assert_eq!(ls_date(1_709_210_096), "Feb 29 12:34");
        // Day after a century leap day.
        assert_eq!(iso_date(951_868_800), "2000-03-01 00:00:00");
    }

    #[test]
    fn far_future_dates_do_not_overflow() {
        assert_eq!(iso_date(10_000_000_000_000), "318857-05-20 17:46:40");
        assert_eq!(ls_date(10_000_000_000_000), "May 20 17:46");
        assert_eq!(iso_date(u64::MAX), "584554051223-11-09 07:00:15");
        assert_eq!(ls_date(u64::MAX), "Nov  9 07:00");
    }

    #[test]
    fn permission_strings() {
        assert_eq!(permissions(NodeKind::Folder), "drwxr-xr-x");
        assert_eq!(permissions(NodeKind::File), "-rw-r--r--");
        assert_eq!(link_count(NodeKind::Folder), 2);
    }

    #[test]
    fn subtype_by_extension() {
        assert_eq!(Subtype::classify("photo.PNG", NodeKind::File), Subtype::Image);
        assert_eq!(Subtype::classify("main.rs", NodeKind::File), Subtype::Code);
        assert_eq!(Subtype::classify("cv.pdf", NodeKind::File), Subtype::Document);
        assert_eq!(Subtype::classify("notes.txt", NodeKind::File), Subtype::Text);
        assert_eq!(Subtype::classify(".bashrc", NodeKind::File), Subtype::File);
        assert_eq!(Subtype::classify("Makefile", NodeKind::File), Subtype::File);
        assert_eq!(Subtype::classify("src", NodeKind::Folder), Subtype::Directory);
        assert_eq!(Subtype::Code.to_string(), "code");
    }
}
