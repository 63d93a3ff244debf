//! Content limit checks: advisory character budgets on the visible text of
//! the title, meta description, and description fragments.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::generation::generator::Section;

pub const TITLE_MAX_CHARS: usize = 60;
pub const META_DESCRIPTION_MAX_CHARS: usize = 155;
pub const DESCRIPTION_MIN_CHARS: usize = 500;
pub const DESCRIPTION_MAX_CHARS: usize = 700;

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("valid tag regex"));
static META_CONTENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"content\s*=\s*"([^"]*)""#).expect("valid meta regex"));

/// A fragment whose visible text falls outside its budget.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LimitViolation {
    pub section: Section,
    pub length: usize,
    pub min: usize,
    pub max: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LimitReport {
    pub violations: Vec<LimitViolation>,
}

impl LimitReport {
    pub fn passed(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Text a reader would see: tags removed. For `<meta>` the visible text is
/// its `content` attribute.
pub fn visible_text(fragment: &str) -> String {
    let trimmed = fragment.trim_start();
    if trimmed.starts_with("<meta") {
        return META_CONTENT_RE
            .captures(trimmed)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();
    }
    TAG_RE.replace_all(fragment, "").into_owned()
}

fn budget(section: Section) -> Option<(usize, usize)> {
    match section {
        Section::Title => Some((0, TITLE_MAX_CHARS)),
        Section::MetaDescription => Some((0, META_DESCRIPTION_MAX_CHARS)),
        Section::Description => Some((DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS)),
        _ => None,
    }
}

/// Checks every budgeted fragment in `fragments` (paired with their section).
pub fn check_limits<'a, I>(fragments: I) -> LimitReport
where
    I: IntoIterator<Item = (Section, &'a str)>,
{
    let violations = fragments
        .into_iter()
        .filter_map(|(section, fragment)| {
            let (min, max) = budget(section)?;
            let length = visible_text(fragment).chars().count();
            (length < min || length > max).then_some(LimitViolation {
                section,
                length,
                min,
                max,
            })
        })
        .collect();

    LimitReport { violations }
}
