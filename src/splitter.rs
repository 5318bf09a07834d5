use crate::error::{Error, Result};
use aho_corasick::{AhoCorasick, MatchKind};

/// A piece of the scanned source: either text between cuts or the delimiter that made a cut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Fragment(&'a str),
    Delimiter(&'a str),
}

impl<'a> Segment<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Segment::Fragment(s) | Segment::Delimiter(s) => s,
        }
    }
}

/// Splits strings on a fixed list of literal delimiters.
///
/// When several delimiters match at the same position the one declared
/// first wins. Empty delimiters are dropped since they would match
/// everywhere without consuming input.
#[derive(Debug, Clone)]
pub struct Splitter {
    delimiters: Vec<String>,
    matcher: Option<AhoCorasick>,
}

impl Splitter {
    pub fn new<I, S>(delimiters: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let delimiters: Vec<String> = delimiters
            .into_iter()
            .map(|d| d.as_ref().to_string())
            .filter(|d| !d.is_empty())
            .collect();

        let matcher = if delimiters.is_empty() {
            None
        } else {
            let ac = AhoCorasick::builder()
                .match_kind(MatchKind::LeftmostFirst)
                .build(&delimiters)
                .map_err(|e| Error::InvalidArgument(format!("unusable delimiter set: {}", e)))?;
            Some(ac)
        };

        Ok(Self {
            delimiters,
            matcher,
        })
    }

    /// Effective delimiters, in declaration order
    pub fn delimiters(&self) -> &[String] {
        &self.delimiters
    }

    /// Split `source` into its non-empty fragments, left to right
    pub fn split(&self, source: &str) -> Vec<String> {
        self.segments(source)
            .into_iter()
            .filter_map(|segment| match segment {
                Segment::Fragment(text) => Some(text.to_string()),
                Segment::Delimiter(_) => None,
            })
            .collect()
    }

    /// Like [`Splitter::split`] but keeps the delimiter consumed at each cut.
    ///
    /// Concatenating every segment yields `source` again. Fragments are
    /// never empty.
    pub fn segments<'a>(&self, source: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut cut = 0;

        if let Some(matcher) = &self.matcher {
            for m in matcher.find_iter(source) {
                if m.start() > cut {
                    segments.push(Segment::Fragment(&source[cut..m.start()]));
                }
                segments.push(Segment::Delimiter(&source[m.start()..m.end()]));
                cut = m.end();
            }
        }

        // Trailing text after the last cut (or the whole string if nothing matched)
        if cut < source.len() {
            segments.push(Segment::Fragment(&source[cut..]));
        }

        segments
    }
}

/// Split `source` on every delimiter in `delimiters`, dropping empty fragments
pub fn split_by_delimiters<I, S>(source: &str, delimiters: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Ok(Splitter::new(delimiters)?.split(source))
}
