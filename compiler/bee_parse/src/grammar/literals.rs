//! Literal constants.

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{ExprId, ExprKind, Token, TokenType};
use bee_lexer::unescape;

use crate::Parser;

/// Text between the surrounding quotes.
fn quoted_body(text: &str) -> &str {
    text.get(1..text.len().saturating_sub(1)).unwrap_or_default()
}

impl Parser<'_, '_> {
    pub(crate) fn parse_char(&mut self, token: Token<'_>) -> Result<ExprId, Error> {
        let data = self.unescape(token)?;
        let value = match data.as_bytes() {
            [] => return Err(self.error(ErrorKind::Syntax, token, "empty character constant")),
            [byte] => *byte,
            _ => return Err(self.error(ErrorKind::Syntax, token, "wide character constant")),
        };
        Ok(self.push_expr(ExprKind::Char(value), token.span))
    }

    pub(crate) fn parse_str(&mut self, token: Token<'_>) -> Result<ExprId, Error> {
        let data = self.unescape(token)?;
        Ok(self.push_expr(ExprKind::Str(data), token.span))
    }

    fn unescape(&self, token: Token<'_>) -> Result<String, Error> {
        unescape(quoted_body(token.text))
            .map_err(|err| self.error(ErrorKind::Syntax, token, err.to_string()))
    }

    /// Decimal, `0b` binary or `0x` hex. Values above `u32::MAX` are 8 bytes wide.
    pub(crate) fn parse_int(&mut self, token: Token<'_>) -> Result<ExprId, Error> {
        let (digits, radix) = if token.ty == TokenType::INT_BIN {
            (strip_radix_prefix(token.text, 'b'), 2)
        } else if token.ty == TokenType::INT_HEX {
            (strip_radix_prefix(token.text, 'x'), 16)
        } else {
            (token.text, 10)
        };
        let value = u64::from_str_radix(digits, radix)
            .map_err(|_| self.error(ErrorKind::Syntax, token, "cannot parse integer constant"))?;
        let size = if value > u64::from(u32::MAX) { 8 } else { 4 };
        Ok(self.push_expr(ExprKind::Int { value, size }, token.span))
    }

    /// Values above `f32::MAX` are 8 bytes wide.
    pub(crate) fn parse_float(&mut self, token: Token<'_>) -> Result<ExprId, Error> {
        let value: f64 = token
            .text
            .parse()
            .map_err(|_| self.error(ErrorKind::Syntax, token, "cannot parse float constant"))?;
        let size = if value > f64::from(f32::MAX) { 8 } else { 4 };
        Ok(self.push_expr(ExprKind::Float { value, size }, token.span))
    }
}

fn strip_radix_prefix(text: &str, marker: char) -> &str {
    text.strip_prefix('0')
        .and_then(|rest| {
            rest.strip_prefix(marker)
                .or_else(|| rest.strip_prefix(marker.to_ascii_uppercase()))
        })
        .unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn radix_prefixes() {
        assert_eq!(strip_radix_prefix("0b101", 'b'), "101");
        assert_eq!(strip_radix_prefix("0XfF", 'x'), "fF");
        assert_eq!(strip_radix_prefix("12", 'x'), "12");
    }

    #[test]
    fn quotes_are_stripped() {
        assert_eq!(quoted_body("'a'"), "a");
        assert_eq!(quoted_body("\"\""), "");
    }
}
