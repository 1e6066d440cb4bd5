//! Shape matchers for the two marker grammars.
//!
//! Each marker shape gets its own hand-written matcher producing a tagged
//! [`MarkerShape`]; the scanner dispatches on the variant instead of on
//! capture-group positions. `find_marker` performs leftmost selection over
//! the union of both shapes, with the explicit shape winning ties.

/// What kind of marker matched, with the fields that shape carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum MarkerShape {
    /// `Breakpoint N, ... at `FILE':LINE`, naming its own file.
    Explicit { file: String, line: u32 },
    /// A stepping introducer followed by a leading line number on the
    /// next line, inheriting the last known file.
    Implicit { line: u32 },
}

/// One complete match inside a buffer. `end` is the end of the numeric
/// line-number token; trailing text on that line is not part of the match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MarkerMatch {
    pub start: usize,
    pub end: usize,
    pub shape: MarkerShape,
}

const EXPLICIT_INTRO: &str = "Breakpoint ";
const FILE_ANCHOR: &str = " at `";
const STOPPING_PHRASE: &str = "Stopping in Rule ...";
const STEP_TOKENS: [&str; 4] = ["next", "step", "n", "s"];

/// Leftmost full marker match in `buf`, if any. At equal start offsets the
/// explicit shape wins.
pub(crate) fn find_marker(buf: &str) -> Option<MarkerMatch> {
    match (find_explicit(buf), find_implicit(buf)) {
        (Some(explicit), Some(implicit)) if implicit.start < explicit.start => Some(implicit),
        (Some(explicit), _) => Some(explicit),
        (None, implicit) => implicit,
    }
}

fn find_explicit(buf: &str) -> Option<MarkerMatch> {
    let mut from = 0;
    while let Some(found) = buf[from..].find(EXPLICIT_INTRO) {
        let start = from + found;
        if let Some(m) = explicit_at(buf, start) {
            return Some(m);
        }
        from = start + 1;
    }
    None
}

/// Try the explicit shape with its introducer at `start`.
///
/// A candidate whose digit run touches the end of the buffer is NOT a
/// match: the number may still be arriving, and consuming it here would
/// report a truncated line when the input happens to split mid-number.
/// The hold-back check retains the introducer instead, so the candidate is
/// retried once more text arrives.
fn explicit_at(buf: &str, start: usize) -> Option<MarkerMatch> {
    let rest = &buf[start + EXPLICIT_INTRO.len()..];
    let ndigits = leading_digits(rest);
    if ndigits == 0 || !rest[ndigits..].starts_with(',') {
        return None;
    }
    let line_start = start + EXPLICIT_INTRO.len() + ndigits + 1;
    let tail = &buf[line_start..];
    let line_text = &tail[..tail.find('\n').unwrap_or(tail.len())];

    // Greedy anchor choice: the last ` at \`` on the line whose tail still
    // completes the shape wins, matching composite-pattern backtracking.
    let mut cut = line_text.len();
    while let Some(anchor) = line_text[..cut].rfind(FILE_ANCHOR) {
        let after = &line_text[anchor + FILE_ANCHOR.len()..];
        if let Some((file_len, num_len)) = file_and_line(after) {
            let end = line_start + anchor + FILE_ANCHOR.len() + file_len + 2 + num_len;
            if end == buf.len() {
                return None;
            }
            let file = after[..file_len].to_string();
            let line = parse_line(&after[file_len + 2..file_len + 2 + num_len]);
            return Some(MarkerMatch {
                start,
                end,
                shape: MarkerShape::Explicit { file, line },
            });
        }
        cut = anchor;
    }
    None
}

/// `FILE':LINE`: one or more non-quote characters, `':`, then digits.
/// Returns the byte lengths of the file name and the digit run.
fn file_and_line(s: &str) -> Option<(usize, usize)> {
    let quote = s.find('\'')?;
    if quote == 0 {
        return None;
    }
    let after_quote = &s[quote + 1..];
    if !after_quote.starts_with(':') {
        return None;
    }
    let ndigits = leading_digits(&after_quote[1..]);
    if ndigits == 0 {
        return None;
    }
    Some((quote, ndigits))
}

fn find_implicit(buf: &str) -> Option<MarkerMatch> {
    let mut prev: Option<char> = None;
    for (pos, ch) in buf.char_indices() {
        let at_boundary = prev.is_none_or(|p| !p.is_alphanumeric() && p != '_');
        prev = Some(ch);
        if !at_boundary || !matches!(ch, 'S' | 'n' | 's') {
            continue;
        }
        if let Some(m) = implicit_at(buf, pos) {
            return Some(m);
        }
    }
    None
}

/// Try each implicit introducer at `pos`. The required whitespace-then-
/// newline tail disambiguates between a full token and its one-letter
/// abbreviation, so at most one alternative can complete.
fn implicit_at(buf: &str, pos: usize) -> Option<MarkerMatch> {
    let rest = &buf[pos..];
    for intro in core::iter::once(STOPPING_PHRASE).chain(STEP_TOKENS) {
        if let Some(tail) = rest.strip_prefix(intro) {
            if let Some((consumed, line)) = line_on_next_line(tail) {
                return Some(MarkerMatch {
                    start: pos,
                    end: pos + intro.len() + consumed,
                    shape: MarkerShape::Implicit { line },
                });
            }
        }
    }
    None
}

/// `[ \t]*` newline, then one or more digits at the start of the next
/// line. Returns (bytes consumed, line number).
fn line_on_next_line(s: &str) -> Option<(usize, u32)> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    while bytes.get(pos).is_some_and(|b| *b == b' ' || *b == b'\t') {
        pos += 1;
    }
    if bytes.get(pos) != Some(&b'\n') {
        return None;
    }
    pos += 1;
    let ndigits = leading_digits(&s[pos..]);
    if ndigits == 0 {
        return None;
    }
    Some((pos + ndigits, parse_line(&s[pos..pos + ndigits])))
}

/// Earliest offset from which the buffer tail must be retained because it
/// could be (the start of) an explicit marker still arriving: a complete
/// `Breakpoint <digits>,` introducer anywhere in the buffer, or a buffer
/// suffix that is a prefix of one.
pub(crate) fn holdback_offset(buf: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(found) = buf[from..].find(EXPLICIT_INTRO) {
        let start = from + found;
        let rest = &buf[start + EXPLICIT_INTRO.len()..];
        let ndigits = leading_digits(rest);
        if ndigits > 0 && rest[ndigits..].starts_with(',') {
            return Some(start);
        }
        from = start + 1;
    }
    buf.char_indices()
        .filter(|&(_, ch)| ch == 'B')
        .map(|(pos, _)| pos)
        .find(|&pos| is_intro_prefix(&buf[pos..]))
}

/// Is `s` (running to the end of the buffer) a prefix of
/// `Breakpoint <digits>,` that could still complete?
fn is_intro_prefix(s: &str) -> bool {
    if s.len() <= EXPLICIT_INTRO.len() {
        EXPLICIT_INTRO.as_bytes().starts_with(s.as_bytes())
    } else {
        s.starts_with(EXPLICIT_INTRO)
            && s[EXPLICIT_INTRO.len()..].bytes().all(|b| b.is_ascii_digit())
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

/// Pathological digit runs saturate; the scanner has no error path.
fn parse_line(digits: &str) -> u32 {
    digits.bytes().fold(0u32, |n, b| {
        n.saturating_mul(10).saturating_add(u32::from(b - b'0'))
    })
}
