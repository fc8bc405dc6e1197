//! Modifier string parsing ("+2 Charm" -> delta and stat name)

/// A parsed stat modifier: a signed delta and the stat name it applies to
///
/// The stat name is kept verbatim; whether it matches a canonical
/// [`Stat`](crate::types::Stat) is decided by the aggregator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modifier {
    pub delta: i32,
    pub stat: String,
}

/// Parse a modifier out of a freeform attribute value
///
/// The grammar is an optional sign, one or more digits, whitespace,
/// then a word token: "+2 Charm", "-1 Grit", "3 Skill". A missing
/// sign means positive. The match is a leftmost search rather than
/// anchored, so "Worn +2 Charm" still parses. Anything without a
/// match yields `None`, never an error. Deltas saturate at the i32
/// bounds.
pub fn parse_modifier(value: &str) -> Option<Modifier> {
    let chars: Vec<char> = value.chars().collect();
    (0..chars.len()).find_map(|start| match_at(&chars, start))
}

/// Try to match the sign/digits/whitespace/word shape starting at `start`
fn match_at(chars: &[char], start: usize) -> Option<Modifier> {
    let mut i = start;

    let negative = match chars.get(i) {
        Some('+') => {
            i += 1;
            false
        }
        Some('-') => {
            i += 1;
            true
        }
        _ => false,
    };

    let digits_start = i;
    while matches!(chars.get(i), Some(c) if c.is_ascii_digit()) {
        i += 1;
    }
    if i == digits_start {
        return None;
    }
    // Saturate at the i32 bounds rather than rejecting the match
    let mut magnitude: i64 = 0;
    for &c in &chars[digits_start..i] {
        let digit = (c as u8 - b'0') as i64;
        magnitude = magnitude.saturating_mul(10).saturating_add(digit);
        magnitude = magnitude.min(i32::MAX as i64 + 1);
    }

    let ws_start = i;
    while matches!(chars.get(i), Some(c) if c.is_whitespace()) {
        i += 1;
    }
    if i == ws_start {
        return None;
    }

    let word_start = i;
    while matches!(chars.get(i), Some(c) if c.is_ascii_alphanumeric() || *c == '_') {
        i += 1;
    }
    if i == word_start {
        return None;
    }

    let signed = if negative { -magnitude } else { magnitude };
    let delta = signed.clamp(i32::MIN as i64, i32::MAX as i64) as i32;

    Some(Modifier {
        delta,
        stat: chars[word_start..i].iter().collect(),
    })
}
