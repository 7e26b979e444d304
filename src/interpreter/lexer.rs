use logos::Logos;

use crate::{
    error::{LexError, LexWarning},
    interpreter::token::{Token, TokenKind, TokenStream},
};

/// A raw word produced by splitting a source line.
///
/// Splitting follows shell conventions: whitespace separates words, a quoted
/// run is kept whole together with its quotes, and each punctuation character
/// is split out on its own even without surrounding whitespace. No operators
/// are combined, so `==` is two words.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(extras = LexerExtras)]
enum Word {
    /// `"double quoted"` or `'single quoted'`.
    #[regex(r#""[^"\n]*""#, allow_greedy = true)]
    #[regex(r"'[^'\n]*'", allow_greedy = true)]
    Quoted,
    /// A word opened by a quote that is never closed on its line.
    #[regex(r#""[^"\n]*"#, allow_greedy = true)]
    #[regex(r"'[^'\n]*", allow_greedy = true)]
    Unterminated,
    /// `= ? ( ) : ; { } [ ]`
    #[regex(r"[=?():;{}\[\]]")]
    Punctuation,
    /// Any other run of non-blank characters. Quotes only open a quoted run
    /// at the start of a word, so `don't` stays one word.
    #[regex(r#"[^\s=?():;{}\[\]"'#][^\s=?():;{}\[\]#]*"#, allow_greedy = true)]
    Bare,
    /// `# Comments.`
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Blanks other than line breaks.
    #[regex(r"[^\S\n]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// The result of lexing a source text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexed {
    /// Every classified word, in source order, with the cursor at the start.
    pub stream:   TokenStream,
    /// One warning per word that matched no classification rule.
    pub warnings: Vec<LexWarning>,
}

/// Splits `source` into words and classifies every word.
///
/// Lexing never stops at an unrecognized word: it is recorded as a
/// [`TokenKind::None`] token and a matching [`LexWarning`] is collected. The
/// only fatal condition is a word that opens with a quote that is not closed
/// on its own line.
///
/// # Parameters
/// - `source`: The full program text.
///
/// # Returns
/// The token stream together with the warnings raised while classifying.
///
/// # Errors
/// Returns [`LexError::UnterminatedString`] for an unbalanced quote.
///
/// # Example
/// ```
/// use paper::interpreter::{lexer::tokenize, token::TokenKind};
///
/// let lexed = tokenize("print \"hello\"").unwrap();
/// let kinds: Vec<_> = lexed.stream.kinds().collect();
///
/// assert_eq!(kinds, [TokenKind::Print, TokenKind::StringData]);
/// assert!(lexed.warnings.is_empty());
/// ```
pub fn tokenize(source: &str) -> Result<Lexed, LexError> {
    let mut tokens = Vec::new();
    let mut warnings = Vec::new();
    let mut lexer = Word::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(word) = lexer.next() {
        let line = lexer.extras.line;
        if word == Ok(Word::Unterminated) {
            return Err(LexError::UnterminatedString { line });
        }

        let lexeme = lexer.slice();
        let kind = classify(lexeme);
        if kind == TokenKind::None {
            warnings.push(LexWarning::UnrecognizedToken { lexeme: lexeme.to_string(),
                                                          line });
        }
        tokens.push(Token::new(kind, lexeme, line));
    }

    Ok(Lexed { stream: TokenStream::new(tokens),
               warnings })
}

/// Assigns a [`TokenKind`] to a single word.
///
/// Rules are tried in order and the first match wins:
/// 1. keywords,
/// 2. `=` and the other punctuation characters,
/// 3. text opened and closed by the same quote character,
/// 4. digits only,
/// 5. digits with exactly one `.`,
/// 6. anything else starting with `.` is a variable name,
/// 7. everything left over is [`TokenKind::None`].
///
/// # Example
/// ```
/// use paper::interpreter::{lexer::classify, token::TokenKind};
///
/// assert_eq!(classify("42"), TokenKind::IntData);
/// assert_eq!(classify(".5"), TokenKind::FloatData);
/// assert_eq!(classify(".x"), TokenKind::VarName);
/// assert_eq!(classify("@"), TokenKind::None);
/// ```
#[must_use]
pub fn classify(word: &str) -> TokenKind {
    if let Some(kind) = TokenKind::keyword(word) {
        return kind;
    }
    if word == "=" {
        return TokenKind::Equal;
    }
    if let Some(kind) = TokenKind::punctuation(word) {
        return kind;
    }
    if is_quoted(word) {
        return TokenKind::StringData;
    }
    if word.bytes().all(|b| b.is_ascii_digit()) {
        return TokenKind::IntData;
    }
    if is_decimal(word) {
        return TokenKind::FloatData;
    }
    if word.starts_with('.') {
        return TokenKind::VarName;
    }

    TokenKind::None
}

/// `true` if the word starts and ends with the same quote character.
fn is_quoted(word: &str) -> bool {
    let mut chars = word.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first @ ('"' | '\'')), Some(last)) => first == last,
        _ => false,
    }
}

/// `true` if the word is digits around exactly one dot, either side possibly
/// empty.
fn is_decimal(word: &str) -> bool {
    word.split_once('.')
        .is_some_and(|(whole, fraction)| {
            whole.bytes().all(|b| b.is_ascii_digit())
            && fraction.bytes().all(|b| b.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<String> {
        tokenize(source).unwrap()
                        .stream
                        .lexemes()
                        .map(str::to_string)
                        .collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().stream.kinds().collect()
    }

    #[test]
    fn print_string_literal() {
        assert_eq!(kinds("print \"hello\""), [TokenKind::Print, TokenKind::StringData]);
        assert_eq!(lexemes("print \"hello\""), ["print", "\"hello\""]);
    }

    #[test]
    fn variable_name_keeps_its_dot() {
        assert_eq!(kinds(".x"), [TokenKind::VarName]);
        assert_eq!(lexemes(".x"), [".x"]);
    }

    #[test]
    fn quoted_words_keep_inner_whitespace() {
        assert_eq!(lexemes("print 'hello  there' \"a = b\""),
                   ["print", "'hello  there'", "\"a = b\""]);
    }

    #[test]
    fn punctuation_splits_without_whitespace() {
        assert_eq!(lexemes("func .f(int:.x)"),
                   ["func", ".f", "(", "int", ":", ".x", ")"]);
        assert_eq!(lexemes("string .a=\"x\";"), ["string", ".a", "=", "\"x\"", ";"]);
    }

    #[test]
    fn operators_are_not_combined() {
        assert_eq!(kinds("=="), [TokenKind::Equal, TokenKind::Equal]);
    }

    #[test]
    fn numeric_literals() {
        assert_eq!(kinds("7 3.5 .5 2. ."),
                   [TokenKind::IntData,
                    TokenKind::FloatData,
                    TokenKind::FloatData,
                    TokenKind::FloatData,
                    TokenKind::FloatData]);
        assert_eq!(classify("1.2.3"), TokenKind::None);
        assert_eq!(classify("-4"), TokenKind::None);
    }

    #[test]
    fn keywords_win_over_everything() {
        assert_eq!(kinds("True False true false stop"),
                   [TokenKind::True,
                    TokenKind::False,
                    TokenKind::True,
                    TokenKind::False,
                    TokenKind::Stop]);
    }

    #[test]
    fn reserved_vocabulary_is_lexed() {
        assert_eq!(kinds("if elsif else while until not return break ? [ ] { }"),
                   [TokenKind::If,
                    TokenKind::Elsif,
                    TokenKind::Else,
                    TokenKind::While,
                    TokenKind::Until,
                    TokenKind::Not,
                    TokenKind::Return,
                    TokenKind::Break,
                    TokenKind::Question,
                    TokenKind::LeftBracket,
                    TokenKind::RightBracket,
                    TokenKind::LeftBrace,
                    TokenKind::RightBrace]);
    }

    #[test]
    fn unrecognized_word_warns_once_and_continues() {
        let lexed = tokenize("@ print \"after\"").unwrap();

        assert_eq!(lexed.warnings,
                   [LexWarning::UnrecognizedToken { lexeme: "@".to_string(),
                                                    line:   1, }]);
        assert_eq!(lexed.stream.kinds().collect::<Vec<_>>(),
                   [TokenKind::None, TokenKind::Print, TokenKind::StringData]);
    }

    #[test]
    fn mismatched_quotes_are_not_strings() {
        assert_eq!(classify("\"abc'"), TokenKind::None);
        assert_eq!(classify("'abc'"), TokenKind::StringData);
    }

    #[test]
    fn comments_are_skipped() {
        assert_eq!(lexemes("print .x # print .y\nstop"), ["print", ".x", "stop"]);
        assert_eq!(lexemes("print \"#not a comment\""), ["print", "\"#not a comment\""]);
    }

    #[test]
    fn lines_are_tracked() {
        let lexed = tokenize("print .a\n\n  stop").unwrap();
        let lines: Vec<_> = lexed.stream.tokens().iter().map(Token::line).collect();

        assert_eq!(lines, [1, 1, 3]);
    }

    #[test]
    fn unterminated_quote_is_an_error() {
        assert_eq!(tokenize("print \"ok\"\nprint \"oops"),
                   Err(LexError::UnterminatedString { line: 2 }));
    }

    #[test]
    fn quotes_inside_a_word_do_not_open_a_string() {
        let lexed = tokenize("print \"a\"\ndon't\nprint \"b\"").unwrap();

        assert_eq!(lexed.stream.lexemes().collect::<Vec<_>>(),
                   ["print", "\"a\"", "don't", "print", "\"b\""]);
        assert_eq!(lexed.warnings,
                   [LexWarning::UnrecognizedToken { lexeme: "don't".to_string(),
                                                    line:   2, }]);

        assert_eq!(lexemes("abc\"def\""), ["abc\"def\""]);
        assert_eq!(kinds("abc\"def\""), [TokenKind::None]);
    }

    #[test]
    fn quoted_run_ends_at_its_closing_quote() {
        assert_eq!(lexemes("'ab'cd"), ["'ab'", "cd"]);
    }

    #[test]
    fn lexing_is_repeatable() {
        let source = "string .a = input \"name? \"\nprint .a";

        assert_eq!(tokenize(source), tokenize(source));
    }

    #[test]
    fn empty_source() {
        let lexed = tokenize("  \n# only a comment\n").unwrap();

        assert!(lexed.stream.is_empty());
        assert!(lexed.warnings.is_empty());
    }
}
