//! Escape sequences in string and character literals.
//!
//! Recognized: `\n`, `\r`, `\t`, `\0`, `\\`, `\'`, `\"`.

/// An unknown escape inside a literal body.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid escape sequence '\\{found}'")]
pub struct EscapeError {
    /// Byte offset of the backslash within the body.
    pub offset: usize,
    pub found: char,
}

fn resolve(c: char) -> Option<char> {
    Some(match c {
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        '0' => '\0',
        '\\' => '\\',
        '\'' => '\'',
        '"' => '"',
        _ => return None,
    })
}

/// Resolve escapes in a literal body (quotes already stripped).
pub fn unescape(body: &str) -> Result<String, EscapeError> {
    let mut out = String::with_capacity(body.len());
    let mut chars = body.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        // The lexer never produces a body ending in a lone backslash.
        let found = chars.next().map_or('\\', |(_, c)| c);
        out.push(resolve(found).ok_or(EscapeError { offset, found })?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests;
