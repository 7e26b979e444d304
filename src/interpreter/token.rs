/// The lexical category of a word.
///
/// Variants are declared in a fixed order and the enum is totally ordered, but
/// the order is only a stable tag. It carries no precedence meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    /// A word that matched no classification rule.
    None,
    /// `print`
    Print,
    /// `input`
    Input,
    /// `string`
    String,
    /// `int`
    Int,
    /// `=`
    Equal,
    /// A quoted string literal such as `"hello"` or `'hello'`.
    StringData,
    /// An integer literal such as `42`.
    IntData,
    /// A variable name such as `.x`.
    VarName,
    /// `float`
    Float,
    /// `bool`
    Bool,
    /// `false` or `False`
    False,
    /// `true` or `True`
    True,
    /// `func`
    Func,
    /// `return`
    Return,
    /// `break`
    Break,
    /// `stop`
    Stop,
    /// `if`
    If,
    /// `elsif`
    Elsif,
    /// `else`
    Else,
    /// `while`
    While,
    /// `until`
    Until,
    /// `not`
    Not,
    /// `?`
    Question,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// A float literal such as `3.14`, `.5` or `2.`.
    FloatData,
}

/// Reserved words and the kinds they classify as.
const KEYWORDS: [(&str, TokenKind); 20] = [("print", TokenKind::Print),
                                           ("input", TokenKind::Input),
                                           ("string", TokenKind::String),
                                           ("int", TokenKind::Int),
                                           ("float", TokenKind::Float),
                                           ("bool", TokenKind::Bool),
                                           ("true", TokenKind::True),
                                           ("True", TokenKind::True),
                                           ("false", TokenKind::False),
                                           ("False", TokenKind::False),
                                           ("func", TokenKind::Func),
                                           ("return", TokenKind::Return),
                                           ("break", TokenKind::Break),
                                           ("stop", TokenKind::Stop),
                                           ("if", TokenKind::If),
                                           ("elsif", TokenKind::Elsif),
                                           ("else", TokenKind::Else),
                                           ("while", TokenKind::While),
                                           ("until", TokenKind::Until),
                                           ("not", TokenKind::Not)];

impl TokenKind {
    /// Looks up a word in the keyword table.
    ///
    /// # Example
    /// ```
    /// use paper::interpreter::token::TokenKind;
    ///
    /// assert_eq!(TokenKind::keyword("print"), Some(TokenKind::Print));
    /// assert_eq!(TokenKind::keyword("True"), Some(TokenKind::True));
    /// assert_eq!(TokenKind::keyword("Print"), None);
    /// ```
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        KEYWORDS.iter()
                .find(|(keyword, _)| *keyword == word)
                .map(|(_, kind)| *kind)
    }

    /// Looks up a single-character punctuation word.
    ///
    /// `=` is deliberately absent: it has its own classification rule.
    #[must_use]
    pub fn punctuation(word: &str) -> Option<Self> {
        match word {
            "?" => Some(Self::Question),
            "(" => Some(Self::LeftParen),
            ")" => Some(Self::RightParen),
            ":" => Some(Self::Colon),
            ";" => Some(Self::Semicolon),
            "{" => Some(Self::LeftBrace),
            "}" => Some(Self::RightBrace),
            "[" => Some(Self::LeftBracket),
            "]" => Some(Self::RightBracket),
            _ => None,
        }
    }

    /// Returns `true` for the kinds that carry a literal value.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self,
                 Self::StringData | Self::IntData | Self::FloatData | Self::True | Self::False)
    }

    /// Returns `true` for the declaration keywords `string`, `int`, `float`
    /// and `bool`.
    #[must_use]
    pub const fn is_type_keyword(self) -> bool {
        matches!(self, Self::String | Self::Int | Self::Float | Self::Bool)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TokenKind::{self:?}")
    }
}

/// A classified word: its kind, the exact source text and the line it was
/// found on.
///
/// The lexeme keeps its original form, including the quotes of a string
/// literal and the leading dot of a variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind:   TokenKind,
    lexeme: String,
    line:   usize,
}

impl Token {
    /// Creates a token.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               line }
    }

    /// The classification of this token.
    #[must_use]
    pub const fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The source text this token was classified from.
    #[must_use]
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// The 1-based source line.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }
}

/// An ordered sequence of tokens with a single read cursor.
///
/// The cursor is the only mutable part of the stream. Lookahead is relative to
/// the cursor and never moves it; reading past the end yields `None` and is
/// turned into an error by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Creates a stream positioned at its first token.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Number of tokens in the stream.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if the stream holds no tokens.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns `true` once the cursor has moved past the last token.
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// The token under the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// The token `offset` positions after the cursor, without moving it.
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<&Token> {
        self.cursor
            .checked_add(offset)
            .and_then(|index| self.tokens.get(index))
    }

    /// Moves the cursor forward by `amount` positions.
    pub const fn advance(&mut self, amount: usize) {
        self.cursor = self.cursor.saturating_add(amount);
    }

    /// Moves the cursor back to the first token.
    pub const fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// All tokens, in source order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The kind of every token, in source order.
    pub fn kinds(&self) -> impl Iterator<Item = TokenKind> + '_ {
        self.tokens.iter().map(Token::kind)
    }

    /// The lexeme of every token, index-aligned with [`Self::kinds`].
    pub fn lexemes(&self) -> impl Iterator<Item = &str> + '_ {
        self.tokens.iter().map(Token::lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stream() -> TokenStream {
        TokenStream::new(vec![Token::new(TokenKind::Print, "print", 1),
                              Token::new(TokenKind::StringData, "\"hi\"", 1)])
    }

    #[test]
    fn peek_does_not_move_cursor() {
        let tokens = stream();

        assert_eq!(tokens.peek(1).map(Token::kind), Some(TokenKind::StringData));
        assert_eq!(tokens.cursor(), 0);
        assert!(tokens.peek(2).is_none());
    }

    #[test]
    fn advance_past_end() {
        let mut tokens = stream();
        tokens.advance(2);

        assert!(tokens.is_at_end());
        assert!(tokens.current().is_none());

        tokens.rewind();
        assert_eq!(tokens.current().map(Token::lexeme), Some("print"));
    }

    #[test]
    fn kinds_are_ordered_by_declaration() {
        assert!(TokenKind::None < TokenKind::Print);
        assert!(TokenKind::Stop > TokenKind::Func);
    }

    #[test]
    fn punctuation_excludes_equal() {
        assert_eq!(TokenKind::punctuation("="), None);
        assert_eq!(TokenKind::punctuation("]"), Some(TokenKind::RightBracket));
    }
}
