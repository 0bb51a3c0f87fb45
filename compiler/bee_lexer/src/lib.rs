//! Lexer for Bee using logos.
//!
//! Produces a [`TokenList`] whose tokens borrow their text from the source.
//! Blanks and `//` comments are dropped; newlines are kept because they
//! separate statements.

mod escape;

use bee_diagnostic::{Error, ErrorKind};
use bee_ir::{Span, Token, TokenList, TokenType};
use logos::Logos;
use tracing::debug;

pub use escape::{unescape, EscapeError};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r]+")]
enum RawToken {
    #[regex(r"//[^\n]*")]
    LineComment,

    #[token("\n")]
    Newline,

    #[token("struct")]
    Struct,
    #[token("enum")]
    Enum,
    #[token("union")]
    Union,
    #[token("break")]
    Break,
    #[token("case")]
    Case,
    #[token("continue")]
    Continue,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("if")]
    If,
    #[token("return")]
    Return,
    #[token("switch")]
    Switch,
    #[token("in")]
    In,
    #[token("and")]
    #[token("&&")]
    And,
    #[token("or")]
    #[token("||")]
    Or,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,

    #[regex(r"([0-9]+\.[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Float,
    #[regex(r"[0-9]+")]
    IntDec,
    #[regex(r"0b[01]+")]
    IntBin,
    #[regex(r"0x[0-9a-fA-F]+")]
    IntHex,
    #[regex(r#""([^"\\\n]|\\.)*""#)]
    Str,
    #[regex(r"'([^'\\\n]|\\.)*'")]
    Char,

    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,
    #[token("(")]
    NestedBegin,
    #[token(")")]
    NestedEnd,
    #[token("{")]
    ScopeBegin,
    #[token("}")]
    ScopeEnd,
    #[token("[")]
    CrochetBegin,
    #[token("]")]
    CrochetEnd,
    #[token("::")]
    Declare,
    #[token(":")]
    Define,
    #[token("=")]
    Assign,
    #[token("->")]
    Arrow,
    #[token("!")]
    Not,
    #[token("+")]
    Add,
    #[token("-")]
    Sub,
    #[token("*")]
    Mul,
    #[token("/")]
    Div,
    #[token("%")]
    Mod,
    #[token("~")]
    BinNot,
    #[token("&")]
    BinAnd,
    #[token("|")]
    BinOr,
    #[token("^")]
    BinXor,
    #[token("<<")]
    ShiftL,
    #[token(">>")]
    ShiftR,
    #[token("==")]
    Eq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEq,
    #[token(">=")]
    GreaterEq,
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
}

impl RawToken {
    /// Token type for kept tokens; `None` for trivia.
    fn token_type(self) -> Option<TokenType> {
        let ty = match self {
            RawToken::LineComment => return None,
            RawToken::Newline => TokenType::NEWLINE,
            RawToken::Struct => TokenType::STRUCT,
            RawToken::Enum => TokenType::ENUM,
            RawToken::Union => TokenType::UNION,
            RawToken::Break => TokenType::BREAK,
            RawToken::Case => TokenType::CASE,
            RawToken::Continue => TokenType::CONTINUE,
            RawToken::Else => TokenType::ELSE,
            RawToken::For => TokenType::FOR,
            RawToken::If => TokenType::IF,
            RawToken::Return => TokenType::RETURN,
            RawToken::Switch => TokenType::SWITCH,
            RawToken::In => TokenType::IN,
            RawToken::And => TokenType::AND,
            RawToken::Or => TokenType::OR,
            RawToken::Ident => TokenType::ID,
            RawToken::Float => TokenType::FLOAT,
            RawToken::IntDec => TokenType::INT_DEC,
            RawToken::IntBin => TokenType::INT_BIN,
            RawToken::IntHex => TokenType::INT_HEX,
            RawToken::Str => TokenType::STR,
            RawToken::Char => TokenType::CHAR,
            RawToken::Increment => TokenType::INCREMENT,
            RawToken::Decrement => TokenType::DECREMENT,
            RawToken::NestedBegin => TokenType::NESTED_BEGIN,
            RawToken::NestedEnd => TokenType::NESTED_END,
            RawToken::ScopeBegin => TokenType::SCOPE_BEGIN,
            RawToken::ScopeEnd => TokenType::SCOPE_END,
            RawToken::CrochetBegin => TokenType::CROCHET_BEGIN,
            RawToken::CrochetEnd => TokenType::CROCHET_END,
            RawToken::Declare => TokenType::DECLARE,
            RawToken::Define => TokenType::DEFINE,
            RawToken::Assign => TokenType::ASSIGN,
            RawToken::Arrow => TokenType::ARROW,
            RawToken::Not => TokenType::NOT,
            RawToken::Add => TokenType::ADD,
            RawToken::Sub => TokenType::SUB,
            RawToken::Mul => TokenType::MUL,
            RawToken::Div => TokenType::DIV,
            RawToken::Mod => TokenType::MOD,
            RawToken::BinNot => TokenType::BIN_NOT,
            RawToken::BinAnd => TokenType::BIN_AND,
            RawToken::BinOr => TokenType::BIN_OR,
            RawToken::BinXor => TokenType::BIN_XOR,
            RawToken::ShiftL => TokenType::SHIFT_L,
            RawToken::ShiftR => TokenType::SHIFT_R,
            RawToken::Eq => TokenType::EQ,
            RawToken::NotEq => TokenType::NOT_EQ,
            RawToken::Less => TokenType::LESS,
            RawToken::Greater => TokenType::GREATER,
            RawToken::LessEq => TokenType::LESS_EQ,
            RawToken::GreaterEq => TokenType::GREATER_EQ,
            RawToken::Dot => TokenType::DOT,
            RawToken::Comma => TokenType::COMMA,
            RawToken::Semicolon => TokenType::SEMICOLON,
        };
        Some(ty)
    }
}

/// Lex `source` into tokens terminated by `EOF`.
///
/// The first unrecognized character is a lexical error anchored at it.
#[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
pub fn lex(source: &str) -> Result<TokenList<'_>, Error> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::try_from_range(logos.span())?;
        let Ok(raw) = result else {
            let description = format!("unrecognized token '{}'", logos.slice().escape_default());
            return Err(Error::at(
                ErrorKind::Lexical,
                Error::SCANNER,
                source,
                span,
                description,
            ));
        };
        if let Some(ty) = raw.token_type() {
            tokens.push(Token::new(logos.slice(), ty, span));
        }
    }

    debug!(tokens = tokens.len(), "lexed");
    TokenList::new(source, tokens).map_err(Error::from)
}

#[cfg(test)]
mod tests;
