use crate::font::{FontMetrics, FontSelector};
use crate::units::Pt;

/// The outcome of wrapping one or more texts.
///
/// `max_line_count` is the number of lines of whichever entry was split the
/// most; for a single text that is simply its line count. Tables use it to
/// give every cell of a row the same height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrapResult<T> {
    pub max_line_count: usize,
    pub lines: T,
}

/// Approximate width of any single character: the em box width of the font
/// scaled to the font size. No glyph is ever measured individually.
pub fn approximate_char_width<M: FontMetrics + ?Sized>(
    metrics: &M,
    font: FontSelector,
    font_size: Pt,
) -> Pt {
    font_size * (metrics.em_box_width(font) / 1000.0)
}

/// How many characters fit on a line of `max_width`
fn max_chars_per_line(max_width: Pt, char_width: Pt) -> usize {
    if char_width <= Pt(0.0) {
        return usize::MAX;
    }
    let chars = (max_width / char_width).floor();
    if chars.is_finite() && chars > 0.0 {
        chars as usize
    } else {
        0
    }
}

/// Wraps `text` greedily at spaces so that no line holds more characters than
/// fit in `max_width`.
///
/// A line is cut after the last space inside the window of characters that
/// fits, ignoring whitespace at the very end of the window; the space stays at
/// the end of that line. A window without any space
/// (a single long word, or a width too narrow for even one character) ends
/// wrapping: the whole remainder becomes the last line. Concatenating the
/// returned lines always yields the input again.
pub fn wrap_text<M: FontMetrics + ?Sized>(
    text: &str,
    font: FontSelector,
    font_size: Pt,
    max_width: Pt,
    metrics: &M,
) -> WrapResult<Vec<String>> {
    let max_chars = max_chars_per_line(
        max_width,
        approximate_char_width(metrics, font, font_size),
    );

    let chars: Vec<char> = text.chars().collect();
    let mut lines: Vec<String> = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let remaining = &chars[start..];
        let window = &remaining[..max_chars.min(remaining.len())];
        // whitespace closing the window is not a cut point
        let trimmed = window
            .iter()
            .rposition(|ch| !ch.is_whitespace())
            .map_or(0, |last| last + 1);
        let last_space = window[..trimmed].iter().rposition(|&ch| ch == ' ');

        match last_space {
            Some(space) if remaining.len() > max_chars => {
                lines.push(remaining[..=space].iter().collect());
                start += space + 1;
            }
            _ => {
                lines.push(remaining.iter().collect());
                break;
            }
        }
    }

    WrapResult {
        max_line_count: lines.len(),
        lines,
    }
}

/// Wraps every entry of `texts` independently with [wrap_text]. The result
/// keeps the input order and count, and `max_line_count` is the largest line
/// count of any entry.
pub fn wrap_texts<S, M>(
    texts: &[S],
    font: FontSelector,
    font_size: Pt,
    max_width: Pt,
    metrics: &M,
) -> WrapResult<Vec<Vec<String>>>
where
    S: AsRef<str>,
    M: FontMetrics + ?Sized,
{
    let mut max_line_count = 0;
    let mut lines = Vec::with_capacity(texts.len());
    for text in texts {
        let wrapped = wrap_text(text.as_ref(), font, font_size, max_width, metrics);
        max_line_count = max_line_count.max(wrapped.max_line_count);
        lines.push(wrapped.lines);
    }

    WrapResult {
        max_line_count,
        lines,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontTable;

    const SHORT: &str = "Maarten Vandeperre";
    const LONG: &str = "Zolder vormt zondag het decor voor de strijd om de regenboogtrui in het veld. Volgt Mathieu van der Poel zichzelf op? Troeft Wout van Aert de Nederlandse titelverdediger af? Of is er een derde hond? Breng hier uw stem uit.";

    fn courier(text: &str, size: f32, width: f32) -> WrapResult<Vec<String>> {
        wrap_text(
            text,
            FontSelector::Courier,
            Pt(size),
            Pt(width),
            &FontTable::default(),
        )
    }

    #[test]
    fn empty_text_has_no_lines() {
        let result = courier("", 1.0, 1.0);
        assert_eq!(result.max_line_count, 0);
        assert!(result.lines.is_empty());

        let none: Option<&str> = None;
        let result = courier(none.unwrap_or_default(), 1.0, 1.0);
        assert_eq!(result.max_line_count, 0);
    }

    #[test]
    fn spaceless_text_is_a_single_line() {
        // a 1pt budget fits no character at all, and there is no space to cut at
        let result = courier("test", 1.0, 1.0);
        assert_eq!(result.max_line_count, 1);
        assert_eq!(result.lines, vec!["test"]);

        // 20 characters fit comfortably
        let result = courier("test", 10.0, 7.38 * 20.5);
        assert_eq!(result.lines, vec!["test"]);
    }

    #[test]
    fn splits_lorem_at_a_space() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit";
        // Courier at 10pt is 7.38pt per character; budget 30 characters
        let result = courier(text, 10.0, 7.38 * 30.5);
        assert_eq!(result.max_line_count, 2);
        assert_eq!(
            result.lines,
            vec!["Lorem ipsum dolor sit amet, ", "consectetur adipiscing elit"]
        );
        assert!(result.lines.iter().all(|line| line.chars().count() <= 30));
        assert!(result.lines[0].ends_with(' '));
    }

    #[test]
    fn wraps_long_text_like_the_reference_output() {
        let result = courier(LONG, 5.0, 207.43782);
        assert_eq!(result.max_line_count, 5);
        assert_eq!(
            result.lines,
            vec![
                "Zolder vormt zondag het decor voor de strijd om de ",
                "regenboogtrui in het veld. Volgt Mathieu van der Poel ",
                "zichzelf op? Troeft Wout van Aert de Nederlandse ",
                "titelverdediger af? Of is er een derde hond? Breng ",
                "hier uw stem uit.",
            ]
        );
    }

    #[test]
    fn batch_keeps_order_and_reports_global_max() {
        let input = [SHORT, SHORT, LONG, SHORT, SHORT];
        let result = wrap_texts(
            &input,
            FontSelector::Courier,
            Pt(5.0),
            Pt(207.43782),
            &FontTable::default(),
        );
        assert_eq!(result.max_line_count, 5);
        assert_eq!(result.lines.len(), 5);
        for (i, lines) in result.lines.iter().enumerate() {
            if i == 2 {
                assert_eq!(lines.len(), 5);
                assert_eq!(lines[4], "hier uw stem uit.");
            } else {
                assert_eq!(lines, &vec![SHORT.to_string()]);
            }
        }

        let empty: [&str; 0] = [];
        let result = wrap_texts(
            &empty,
            FontSelector::Courier,
            Pt(5.0),
            Pt(100.0),
            &FontTable::default(),
        );
        assert_eq!(result.max_line_count, 0);
        assert!(result.lines.is_empty());
    }

    #[test]
    fn concatenated_lines_reproduce_the_input() {
        let metrics = FontTable::default();
        let texts = [
            LONG.to_string(),
            lipsum::lipsum(120),
            "  leading and  double   spaces ".to_string(),
            "ünïcödé wörds wïth äccents everywhere in this sentence".to_string(),
        ];
        for text in texts.iter() {
            for width in [1.0, 20.0, 55.0, 120.0, 300.0, 10_000.0] {
                for font in FontSelector::ALL {
                    let result = wrap_text(text, font, Pt(8.0), Pt(width), &metrics);
                    assert_eq!(result.lines.concat(), *text);
                    assert_eq!(result.max_line_count, result.lines.len());
                }
            }
        }
    }

    #[test]
    fn lines_never_exceed_budget_when_a_space_allows_a_cut() {
        let metrics = FontTable::default();
        let text = lipsum::lipsum(80);
        let char_width = approximate_char_width(&metrics, FontSelector::Helvetica, Pt(6.0));
        let width = char_width * 24.5;
        let result = wrap_text(&text, FontSelector::Helvetica, Pt(6.0), width, &metrics);
        for line in &result.lines {
            // lipsum words are far shorter than 24 characters
            assert!(line.chars().count() <= 24, "{line:?} is too long");
        }
    }
}
