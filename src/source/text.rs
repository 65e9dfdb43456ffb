//! Delimited text decoder.

use crate::frame::{Color, Row};

/// Parse comma separated color triples, one row per line.
///
/// Blank lines become empty rows. On failure returns the 1-based line
/// number and a description of the problem.
pub fn parse_table(text: &str) -> Result<Vec<Row>, (usize, String)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| parse_line(line).map_err(|reason| (i + 1, reason)))
        .collect()
}

fn parse_line(line: &str) -> Result<Row, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Row::new());
    }

    let fields = line
        .split(',')
        .map(|field| {
            let field = field.trim().trim_matches('"');
            field
                .parse::<u8>()
                .map_err(|_| format!("{field:?} is not a channel value (0-255)"))
        })
        .collect::<Result<Vec<u8>, String>>()?;

    if fields.len() % 3 != 0 {
        return Err(format!(
            "{} fields do not form whole r,g,b triples",
            fields.len()
        ));
    }

    Ok(fields
        .chunks_exact(3)
        .map(|c| Color::new(c[0], c[1], c[2]))
        .collect())
}
