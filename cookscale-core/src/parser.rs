//! Recipe markup parsing.
//!
//! Parses Cooklang-style recipe text into a [`Recipe`]:
//!
//! ```text
//! >> title: Pancakes
//! Crack @eggs{2} into a #bowl and whisk with @milk{1/2%cup}.
//! Rest for ~{10%minutes}. -- comments run to end of line
//! ```
//!
//! Every non-blank, non-metadata line is one step.

use crate::error::ParseError;
use crate::model::{Cookware, Ingredient, Part, Recipe, Step, Text, Timer};
use crate::quantity::{is_fraction_text, parse_amount};

/// Parse recipe text into the structured model.
pub fn parse(text: &str) -> Result<Recipe, ParseError> {
    let text = strip_block_comments(text)?;
    let mut recipe = Recipe::default();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = match raw_line.find("--") {
            Some(pos) => &raw_line[..pos],
            None => raw_line,
        };

        if line.trim().is_empty() {
            continue;
        }

        if let Some(meta) = line.trim_start().strip_prefix(">>") {
            let (key, value) = meta
                .split_once(':')
                .ok_or(ParseError::InvalidMetadata { line: line_no })?;
            let key = key.trim();
            if key.is_empty() {
                return Err(ParseError::InvalidMetadata { line: line_no });
            }
            recipe
                .metadata
                .insert(key.to_string(), value.trim().to_string());
            continue;
        }

        recipe.steps.push(parse_step(line.trim_end(), line_no)?);
    }

    tracing::debug!(
        steps = recipe.steps.len(),
        ingredients = recipe.ingredient_count(),
        "parsed recipe"
    );
    Ok(recipe)
}

/// Remove `[- ... -]` comments, keeping their newlines so line numbers in
/// later errors still match the source.
fn strip_block_comments(text: &str) -> Result<String, ParseError> {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find("[-") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("-]") else {
            let line = out.matches('\n').count() + 1;
            return Err(ParseError::UnterminatedComment { line });
        };
        out.extend(after[..end].chars().filter(|&c| c == '\n'));
        rest = &after[end + 2..];
    }
    out.push_str(rest);

    Ok(out)
}

#[derive(Clone, Copy)]
enum Marker {
    Ingredient,
    Cookware,
    Timer,
}

impl Marker {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '@' => Some(Marker::Ingredient),
            '#' => Some(Marker::Cookware),
            '~' => Some(Marker::Timer),
            _ => None,
        }
    }

    fn kind(self) -> &'static str {
        match self {
            Marker::Ingredient => "ingredient",
            Marker::Cookware => "cookware",
            Marker::Timer => "timer",
        }
    }
}

fn parse_step(line: &str, line_no: usize) -> Result<Step, ParseError> {
    let chars: Vec<char> = line.chars().collect();
    let mut parts = Vec::new();
    let mut text = String::new();

    let mut i = chars.iter().take_while(|c| c.is_whitespace()).count();
    while i < chars.len() {
        let c = chars[i];
        let token = match Marker::from_char(c) {
            Some(marker) => parse_token(marker, &chars, i, line_no)?,
            None => None,
        };

        match token {
            Some((part, next)) => {
                if !text.is_empty() {
                    parts.push(Part::Text(Text {
                        value: std::mem::take(&mut text),
                    }));
                }
                parts.push(part);
                i = next;
            }
            None => {
                text.push(c);
                i += 1;
            }
        }
    }

    if !text.is_empty() {
        parts.push(Part::Text(Text { value: text }));
    }

    Ok(Step { parts })
}

/// Parse the token whose marker sits at `chars[start]`.
///
/// Returns the part and the index just past it, or `None` when the marker is
/// literal text (e.g. "@ home").
fn parse_token(
    marker: Marker,
    chars: &[char],
    start: usize,
    line_no: usize,
) -> Result<Option<(Part, usize)>, ParseError> {
    let brace = chars[start + 1..]
        .iter()
        .position(|&c| c == '{' || Marker::from_char(c).is_some())
        .map(|offset| start + 1 + offset)
        .filter(|&pos| chars[pos] == '{');

    let (name, content, next) = match brace {
        Some(open) => {
            let close = chars[open + 1..]
                .iter()
                .position(|&c| c == '}')
                .map(|offset| open + 1 + offset)
                .ok_or(ParseError::UnclosedBrace {
                    line: line_no,
                    column: open + 1,
                })?;
            let name: String = chars[start + 1..open].iter().collect();
            let content: String = chars[open + 1..close].iter().collect();
            (name.trim().to_string(), Some(content), close + 1)
        }
        None => {
            let word: String = chars[start + 1..]
                .iter()
                .take_while(|c| c.is_alphanumeric() || **c == '_')
                .collect();
            if word.is_empty() {
                return Ok(None);
            }
            let next = start + 1 + word.chars().count();
            (word, None, next)
        }
    };

    let (amount, units) = match content.as_deref() {
        Some(content) => match content.split_once('%') {
            Some((amount, units)) => (amount.trim(), units.trim()),
            None => (content.trim(), ""),
        },
        None => ("", ""),
    };

    let empty_name = || ParseError::EmptyName {
        kind: marker.kind(),
        line: line_no,
        column: start + 1,
    };

    let part = match marker {
        Marker::Ingredient => {
            if name.is_empty() {
                return Err(empty_name());
            }
            let (quantity, quantity_is_fraction) = normalize_quantity(amount);
            Part::Ingredient(Ingredient {
                name,
                quantity,
                units: units.to_string(),
                quantity_is_fraction,
            })
        }
        Marker::Cookware => {
            if name.is_empty() {
                return Err(empty_name());
            }
            Part::Cookware(Cookware { name })
        }
        Marker::Timer => {
            let duration = [amount, units]
                .iter()
                .filter(|s| !s.is_empty())
                .copied()
                .collect::<Vec<_>>()
                .join(" ");
            if name.is_empty() && duration.is_empty() {
                return Err(empty_name());
            }
            Part::Timer(Timer { name, duration })
        }
    };

    Ok(Some((part, next)))
}

/// Fractions are stored as their decimal value and flagged, so scaling can
/// render them back as fractions. Everything else is kept as written.
fn normalize_quantity(amount: &str) -> (String, bool) {
    if is_fraction_text(amount) {
        if let Some(value) = parse_amount(amount) {
            return (value.to_string(), true);
        }
    }
    (amount.to_string(), false)
}
