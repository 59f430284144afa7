//! Canonical formatting for free-text opening hours.
//!
//! Places payloads describe each weekday as free text whose punctuation
//! varies by locale: en and em dashes, thin and narrow no-break spaces, and
//! missing spaces before `AM`/`PM`. Each line is first normalised to ASCII
//! punctuation and then parsed strictly as `Day: open - close`. Lines that
//! do not fit that shape ("Closed", "Open 24 hours", split shifts) only get
//! cosmetic spacing fixes, so no text is ever dropped.
//!
//! # Examples
//! ```
//! use gastro_ranker::format_hours;
//!
//! let lines = format_hours(&["Mon: 09:00AM\u{2013}05:00PM", "Fri: closed"]);
//! assert_eq!(lines, ["- Mon: 09:00 AM - 05:00 PM", "- Fri: closed"]);
//! ```
#![forbid(unsafe_code)]

use std::fmt;

use log::trace;

/// Unicode hyphen and dash variants rewritten to ASCII `-`.
const DASHES: [char; 7] = [
    '\u{2010}', // hyphen
    '\u{2011}', // non-breaking hyphen
    '\u{2012}', // figure dash
    '\u{2013}', // en dash
    '\u{2014}', // em dash
    '\u{2015}', // horizontal bar
    '\u{2212}', // minus sign
];

/// Non-standard space characters rewritten to ASCII space.
const SPACES: [char; 5] = [
    '\u{00A0}', // no-break space
    '\u{2007}', // figure space
    '\u{2009}', // thin space
    '\u{200A}', // hair space
    '\u{202F}', // narrow no-break space
];

/// Format every line independently, preserving order.
#[must_use]
pub fn format_hours<S: AsRef<str>>(raw_lines: &[S]) -> Vec<String> {
    raw_lines
        .iter()
        .map(|line| format_line(line.as_ref()))
        .collect()
}

/// Format a single weekday line.
///
/// Always returns a non-empty string starting with `"- "`.
///
/// # Examples
/// ```
/// use gastro_ranker::format_line;
///
/// assert_eq!(
///     format_line("Wed: 08:00PM\u{2014}10:00PM"),
///     "- Wed: 08:00 PM - 10:00 PM"
/// );
/// assert_eq!(
///     format_line("Sat: 12:00PM-3:00PM, 7:00PM-11:00PM"),
///     "- Sat: 12:00 PM - 3:00 PM, 7:00 PM - 11:00 PM"
/// );
/// ```
#[must_use]
pub fn format_line(raw: &str) -> String {
    let normalised = normalise_punctuation(raw);
    let compact: String = normalised.chars().filter(|&ch| ch != ' ').collect();
    HoursRange::parse(&compact).map_or_else(
        || {
            trace!("opening hours line {raw:?} did not parse; using fallback");
            fallback_line(&normalised)
        },
        |range| range.to_string(),
    )
}

/// Replace unicode dashes with `-` and unusual spaces with ASCII space.
///
/// # Examples
/// ```
/// use gastro_ranker::hours::normalise_punctuation;
///
/// assert_eq!(
///     normalise_punctuation("10:30AM\u{2013}\u{202F}06:45PM"),
///     "10:30AM- 06:45PM"
/// );
/// ```
#[must_use]
pub fn normalise_punctuation(raw: &str) -> String {
    raw.chars()
        .map(|ch| {
            if DASHES.contains(&ch) {
                '-'
            } else if SPACES.contains(&ch) {
                ' '
            } else {
                ch
            }
        })
        .collect()
}

/// Stages of the strict `Day:open-close` parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    Day,
    DayColon,
    OpenTime,
    Separator,
    CloseTime,
    End,
}

/// A weekday line that matched the strict shape, borrowing its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HoursRange<'a> {
    day: &'a str,
    open: &'a str,
    close: &'a str,
}

impl<'a> HoursRange<'a> {
    /// Parse a space-stripped line. The whole input must be consumed.
    ///
    /// Matching only a prefix would silently drop a second shift such as
    /// `", 5:00 - 10:00 PM"`; anchored lines like that go to the fallback
    /// and are kept whole instead.
    fn parse(compact: &'a str) -> Option<Self> {
        let mut cursor = Cursor::new(compact);
        let mut state = ParseState::Day;
        let mut range = Self {
            day: "",
            open: "",
            close: "",
        };
        loop {
            state = match state {
                ParseState::Day => {
                    range.day = cursor.take_while(is_word_char)?;
                    ParseState::DayColon
                }
                ParseState::DayColon => {
                    cursor.expect(':')?;
                    ParseState::OpenTime
                }
                ParseState::OpenTime => {
                    cursor.skip_whitespace();
                    range.open = cursor.time_token()?;
                    ParseState::Separator
                }
                ParseState::Separator => {
                    cursor.skip_whitespace();
                    cursor.eat(|ch| ch == '-');
                    cursor.skip_whitespace();
                    ParseState::CloseTime
                }
                ParseState::CloseTime => {
                    range.close = cursor.time_token()?;
                    ParseState::End
                }
                ParseState::End => {
                    cursor.skip_whitespace();
                    return cursor.is_exhausted().then_some(range);
                }
            };
        }
    }
}

impl fmt::Display for HoursRange<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: {} - {}",
            self.day,
            spaced_time(self.open),
            spaced_time(self.close)
        )
    }
}

/// Byte cursor over a line that only ever advances by whole characters.
struct Cursor<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text.get(self.pos..).and_then(|rest| rest.chars().next())
    }

    fn eat(&mut self, accept: impl Fn(char) -> bool) -> bool {
        match self.peek() {
            Some(ch) if accept(ch) => {
                self.pos = self.pos.saturating_add(ch.len_utf8());
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, wanted: char) -> Option<()> {
        self.eat(|ch| ch == wanted).then_some(())
    }

    fn skip_whitespace(&mut self) {
        while self.eat(char::is_whitespace) {}
    }

    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> Option<&'a str> {
        let start = self.pos;
        while self.eat(&accept) {}
        self.text.get(start..self.pos).filter(|token| !token.is_empty())
    }

    fn eat_digits(&mut self, max: usize) -> usize {
        let mut taken = 0;
        while taken < max && self.eat(|ch| ch.is_ascii_digit()) {
            taken += 1;
        }
        taken
    }

    /// Consume `H:MM` or `HH:MM` followed by `AM`/`PM` in any case.
    fn time_token(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if self.eat_digits(2) == 0 {
            return None;
        }
        self.expect(':')?;
        if self.eat_digits(2) != 2 {
            return None;
        }
        self.skip_whitespace();
        if !(self.eat(is_meridiem_first) && self.eat(is_meridiem_second)) {
            return None;
        }
        self.text.get(start..self.pos)
    }

    const fn is_exhausted(&self) -> bool {
        self.pos >= self.text.len()
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

const fn is_meridiem_first(ch: char) -> bool {
    matches!(ch, 'A' | 'a' | 'P' | 'p')
}

const fn is_meridiem_second(ch: char) -> bool {
    matches!(ch, 'M' | 'm')
}

/// Insert a single space between the clock digits and the meridiem when
/// they touch.
fn spaced_time(token: &str) -> String {
    let split = token.len().saturating_sub(2);
    match (token.get(..split), token.get(split..)) {
        (Some(clock), Some(meridiem)) if clock.ends_with(|ch: char| ch.is_ascii_digit()) => {
            format!("{clock} {meridiem}")
        }
        _ => token.to_owned(),
    }
}

/// Cosmetic clean-up for lines the strict parse rejected.
fn fallback_line(normalised: &str) -> String {
    let separated = space_meridiems(normalised)
        .replace("AM-", "AM - ")
        .replace("PM-", "PM - ");
    format!("- {}", separated.trim())
}

/// Insert a space wherever a `digits:digits` run directly meets `AM`/`PM`.
fn space_meridiems(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut spaced = String::with_capacity(text.len());
    for (index, &current) in chars.iter().enumerate() {
        if starts_meridiem(chars.get(index..)) && closes_clock(chars.get(..index)) {
            spaced.push(' ');
        }
        spaced.push(current);
    }
    spaced
}

const fn starts_meridiem(rest: Option<&[char]>) -> bool {
    matches!(
        rest,
        Some([first, second, ..]) if is_meridiem_first(*first) && is_meridiem_second(*second)
    )
}

const fn closes_clock(before: Option<&[char]>) -> bool {
    matches!(
        before,
        Some([.., hour, ':', tens, units])
            if hour.is_ascii_digit() && tens.is_ascii_digit() && units.is_ascii_digit()
    )
}

#[cfg(test)]
mod tests {
    //! Unit coverage for the strict parse and fallback rules.

    use rstest::rstest;

    use super::{HoursRange, fallback_line, format_line, space_meridiems, spaced_time};

    #[rstest]
    #[case("Mon: 09:00AM–05:00PM", "- Mon: 09:00 AM - 05:00 PM")]
    #[case("Tue: 10:30AM\u{2013}\u{202F}06:45PM", "- Tue: 10:30 AM - 06:45 PM")]
    #[case("Wed: 08:00PM\u{2014}10:00PM", "- Wed: 08:00 PM - 10:00 PM")]
    #[case("Thu: 07:15AM-11:30AM", "- Thu: 07:15 AM - 11:30 AM")]
    #[case("Fri: closed", "- Fri: closed")]
    #[case(
        "Monday: 11:00\u{202F}AM\u{2009}\u{2013}\u{2009}10:00\u{202F}PM",
        "- Monday: 11:00 AM - 10:00 PM"
    )]
    #[case("Sun: 9:00am 5:30pm", "- Sun: 9:00 am - 5:30 pm")]
    #[case("Monday: Open 24 hours", "- Monday: Open 24 hours")]
    #[case(
        "Monday: 11:00 AM \u{2013} 2:30 PM, 5:00 \u{2013} 10:00 PM",
        "- Monday: 11:00 AM - 2:30 PM, 5:00 - 10:00 PM"
    )]
    #[case("12:00PM-3:00PM", "- 12:00 PM - 3:00 PM")]
    #[case("  Tuesday: Closed  ", "- Tuesday: Closed")]
    #[case("", "- ")]
    fn formats_lines(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_line(raw), expected);
    }

    #[rstest]
    fn strict_parse_captures_tokens_verbatim() {
        let range = HoursRange::parse("Sábado:9:05AM-11:45pm").expect("strict parse");
        assert_eq!(range.day, "Sábado");
        assert_eq!(range.open, "9:05AM");
        assert_eq!(range.close, "11:45pm");
    }

    #[rstest]
    #[case("Mon:09:00AM-05:00PM,06:00PM-09:00PM")]
    #[case("Mon:009:00AM-05:00PM")]
    #[case("Mon:09:0AM-05:00PM")]
    #[case("Mon:09:00-05:00PM")]
    #[case("Mon09:00AM-05:00PM")]
    #[case(":09:00AM-05:00PM")]
    fn strict_parse_rejects_irregular_shapes(#[case] compact: &str) {
        assert!(HoursRange::parse(compact).is_none());
    }

    #[rstest]
    #[case("09:00AM", "09:00 AM")]
    #[case("9:00pm", "9:00 pm")]
    #[case("09:00\tAM", "09:00\tAM")]
    fn spaced_time_inserts_once(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(spaced_time(token), expected);
    }

    #[rstest]
    fn fallback_keeps_split_shifts() {
        assert_eq!(
            fallback_line("Sat: 12:00PM-3:00PM, 7:00PM-11:00PM"),
            "- Sat: 12:00 PM - 3:00 PM, 7:00 PM - 11:00 PM"
        );
    }

    #[rstest]
    fn meridiem_spacing_requires_a_clock() {
        assert_eq!(space_meridiems("Open 24AM"), "Open 24AM");
        assert_eq!(space_meridiems("at 123:45PM"), "at 123:45 PM");
        assert_eq!(space_meridiems("10:00 AM"), "10:00 AM");
    }
}
