//! Token types and the token list produced by the lexer.
//!
//! [`TokenType`] is a bit set: every token kind owns one bit so the parser can
//! ask "is the next token any of these?" with a single mask.

use std::fmt;

use bitflags::bitflags;

use crate::Span;

bitflags! {
    /// One bit per token kind. Composite masks group operator families.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
    pub struct TokenType: u64 {
        const NEWLINE = 1 << 0;
        const EOF = 1 << 1;

        const STRUCT = 1 << 2;
        const ENUM = 1 << 3;
        const UNION = 1 << 4;
        const BREAK = 1 << 5;
        const CASE = 1 << 6;
        const CONTINUE = 1 << 7;
        const ELSE = 1 << 8;
        const FOR = 1 << 9;
        const IF = 1 << 10;
        const RETURN = 1 << 11;
        const SWITCH = 1 << 12;
        const IN = 1 << 13;
        const AND = 1 << 14;
        const OR = 1 << 15;

        const ID = 1 << 16;

        const FLOAT = 1 << 17;
        const INT_DEC = 1 << 18;
        const INT_BIN = 1 << 19;
        const INT_HEX = 1 << 20;
        const STR = 1 << 21;
        const CHAR = 1 << 22;

        const INCREMENT = 1 << 23;
        const DECREMENT = 1 << 24;
        const NESTED_BEGIN = 1 << 25;
        const NESTED_END = 1 << 26;
        const SCOPE_BEGIN = 1 << 27;
        const SCOPE_END = 1 << 28;
        const CROCHET_BEGIN = 1 << 29;
        const CROCHET_END = 1 << 30;
        const DECLARE = 1 << 31;
        const DEFINE = 1 << 32;
        const ASSIGN = 1 << 33;
        const ARROW = 1 << 34;
        const NOT = 1 << 35;
        const ADD = 1 << 36;
        const SUB = 1 << 37;
        const MUL = 1 << 38;
        const DIV = 1 << 39;
        const MOD = 1 << 40;
        const BIN_NOT = 1 << 41;
        const BIN_AND = 1 << 42;
        const BIN_OR = 1 << 43;
        const BIN_XOR = 1 << 44;
        const SHIFT_L = 1 << 45;
        const SHIFT_R = 1 << 46;
        const EQ = 1 << 47;
        const NOT_EQ = 1 << 48;
        const LESS = 1 << 49;
        const GREATER = 1 << 50;
        const LESS_EQ = 1 << 51;
        const GREATER_EQ = 1 << 52;
        const DOT = 1 << 53;
        const COMMA = 1 << 54;
        const SEMICOLON = 1 << 55;

        const INT = Self::INT_DEC.bits() | Self::INT_BIN.bits() | Self::INT_HEX.bits();
        const LITERAL = Self::INT.bits() | Self::FLOAT.bits() | Self::STR.bits() | Self::CHAR.bits();

        /// Binary arithmetic and bitwise operators.
        const ARITHMETIC = Self::ADD.bits()
            | Self::SUB.bits()
            | Self::MUL.bits()
            | Self::DIV.bits()
            | Self::MOD.bits()
            | Self::BIN_AND.bits()
            | Self::BIN_OR.bits()
            | Self::BIN_XOR.bits()
            | Self::SHIFT_L.bits()
            | Self::SHIFT_R.bits();

        /// Operators producing `bool`.
        const LOGIC = Self::AND.bits()
            | Self::OR.bits()
            | Self::EQ.bits()
            | Self::NOT_EQ.bits()
            | Self::LESS.bits()
            | Self::LESS_EQ.bits()
            | Self::GREATER.bits()
            | Self::GREATER_EQ.bits();

        const BINARY = Self::ASSIGN.bits() | Self::ARITHMETIC.bits() | Self::LOGIC.bits();
    }
}

const NAMES: &[(TokenType, &str)] = &[
    (TokenType::NEWLINE, "<NewLine>"),
    (TokenType::EOF, "<Eof>"),
    (TokenType::STRUCT, "struct"),
    (TokenType::ENUM, "enum"),
    (TokenType::UNION, "union"),
    (TokenType::BREAK, "break"),
    (TokenType::CASE, "case"),
    (TokenType::CONTINUE, "continue"),
    (TokenType::ELSE, "else"),
    (TokenType::FOR, "for"),
    (TokenType::IF, "if"),
    (TokenType::RETURN, "return"),
    (TokenType::SWITCH, "switch"),
    (TokenType::IN, "in"),
    (TokenType::AND, "and"),
    (TokenType::OR, "or"),
    (TokenType::ID, "<Id>"),
    (TokenType::FLOAT, "<Float>"),
    (TokenType::INT_DEC, "<Int_Dec>"),
    (TokenType::INT_BIN, "<Int_Bin>"),
    (TokenType::INT_HEX, "<Int_Hex>"),
    (TokenType::STR, "<Str>"),
    (TokenType::CHAR, "<Char>"),
    (TokenType::INCREMENT, "++"),
    (TokenType::DECREMENT, "--"),
    (TokenType::NESTED_BEGIN, "("),
    (TokenType::NESTED_END, ")"),
    (TokenType::SCOPE_BEGIN, "{"),
    (TokenType::SCOPE_END, "}"),
    (TokenType::CROCHET_BEGIN, "["),
    (TokenType::CROCHET_END, "]"),
    (TokenType::DECLARE, "::"),
    (TokenType::DEFINE, ":"),
    (TokenType::ASSIGN, "="),
    (TokenType::ARROW, "->"),
    (TokenType::NOT, "!"),
    (TokenType::ADD, "+"),
    (TokenType::SUB, "-"),
    (TokenType::MUL, "*"),
    (TokenType::DIV, "/"),
    (TokenType::MOD, "%"),
    (TokenType::BIN_NOT, "~"),
    (TokenType::BIN_AND, "&"),
    (TokenType::BIN_OR, "|"),
    (TokenType::BIN_XOR, "^"),
    (TokenType::SHIFT_L, "<<"),
    (TokenType::SHIFT_R, ">>"),
    (TokenType::EQ, "=="),
    (TokenType::NOT_EQ, "!="),
    (TokenType::LESS, "<"),
    (TokenType::GREATER, ">"),
    (TokenType::LESS_EQ, "<="),
    (TokenType::GREATER_EQ, ">="),
    (TokenType::DOT, "."),
    (TokenType::COMMA, ","),
    (TokenType::SEMICOLON, ";"),
];

impl TokenType {
    /// Printable name of a single token kind; `"?"` for empty or composite sets.
    pub fn name(self) -> &'static str {
        NAMES
            .iter()
            .find(|(ty, _)| *ty == self)
            .map_or("?", |(_, name)| name)
    }

    /// Single-bit members of this set, lowest bit first.
    pub fn kinds(self) -> impl Iterator<Item = TokenType> {
        NAMES
            .iter()
            .map(|(ty, _)| *ty)
            .filter(move |ty| self.contains(*ty))
    }
}

impl fmt::Debug for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds = self.kinds().peekable();
        if kinds.peek().is_none() {
            return f.write_str("<None>");
        }
        for (i, kind) in kinds.enumerate() {
            if i > 0 {
                f.write_str(" | ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

/// A lexed token. `text` borrows the source; it is never copied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub text: &'src str,
    pub ty: TokenType,
    pub span: Span,
}

impl<'src> Token<'src> {
    pub const fn new(text: &'src str, ty: TokenType, span: Span) -> Self {
        Token { text, ty, span }
    }
}

/// Tokens of one source unit. Always ends with an `EOF` token.
#[derive(Clone, Debug)]
pub struct TokenList<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenList<'src> {
    /// Wrap `tokens`, appending the `EOF` terminator at the end of `source`.
    pub fn new(source: &'src str, mut tokens: Vec<Token<'src>>) -> Result<Self, crate::SpanError> {
        let end = Span::try_from_range(source.len()..source.len())?;
        tokens.push(Token::new("", TokenType::EOF, end));
        Ok(TokenList { source, tokens })
    }

    #[inline]
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Token at `index`, clamped to the trailing `EOF`.
    #[inline]
    pub fn get(&self, index: usize) -> Token<'src> {
        let last = self.tokens.len() - 1;
        self.tokens[index.min(last)]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
