use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter, variable_name},
        token::{Token, TokenKind},
        value::core::Kind,
    },
};

/// One typed parameter of a declared function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Declared kind of the argument.
    pub kind: Kind,
    /// Parameter name, without its leading dot.
    pub name: String,
}

/// The header of a `func` declaration.
///
/// Function bodies are not executed; the signature is recorded so that the
/// header is validated and visible in debug output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// Function name, without its leading dot.
    pub name:       String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Number of tokens in the `{ ... }` body, braces included. Zero if the
    /// header has no body.
    pub body_len:   usize,
    /// The source line of the `func` keyword.
    pub line:       usize,
}

impl std::fmt::Display for FunctionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "func .{}(", self.name)?;
        for (index, parameter) in self.parameters.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} : .{}", parameter.kind.keyword(), parameter.name)?;
        }
        write!(f, ")")
    }
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Executes `func .name ( kind : .arg ... ) { ... }`.
    ///
    /// The header is checked for well-formedness: a variable name, `(`, zero
    /// or more `kind : .arg` triples and `)`. A `{ ... }` body directly after
    /// the header is consumed up to its matching `}` without being executed.
    /// The signature is stored under the function name, replacing any
    /// earlier declaration.
    ///
    /// # Errors
    /// - `InvalidFunctionHeader` for a malformed header, a repeated parameter
    ///   name or an unclosed body.
    /// - `UnexpectedEndOfInput` if the header is cut off.
    pub(super) fn exec_func(&mut self) -> EvalResult<Flow> {
        let line = self.lookahead(0)?.line();

        let name_token = self.lookahead(1)?;
        if name_token.kind() != TokenKind::VarName {
            return Err(invalid_header(format!("expected a function name, found '{}'",
                                              name_token.lexeme()),
                                      name_token));
        }
        let name = variable_name(name_token).to_string();

        let open = self.lookahead(2)?;
        if open.kind() != TokenKind::LeftParen {
            return Err(invalid_header(format!("expected '(', found '{}'", open.lexeme()), open));
        }

        let mut parameters: Vec<Parameter> = Vec::new();
        let mut offset = 3;
        loop {
            let token = self.lookahead(offset)?;
            if token.kind() == TokenKind::RightParen {
                break;
            }

            let parameter = self.parse_parameter(offset)?;
            if parameters.iter().any(|p| p.name == parameter.name) {
                return Err(RuntimeError::InvalidFunctionHeader { details: format!("parameter '.{}' is declared twice",
                                                                                  parameter.name),
                                                                 line:    token.line(), });
            }
            parameters.push(parameter);
            offset += 3;
        }

        let header_len = offset + 1;
        let body_len = self.body_len(header_len)?;

        self.functions.insert(name.clone(),
                              FunctionSignature { name,
                                                  parameters,
                                                  body_len,
                                                  line });

        Ok(Flow::Executed(header_len + body_len))
    }

    /// Parses `kind : .name` starting `offset` tokens after the cursor.
    fn parse_parameter(&self, offset: usize) -> EvalResult<Parameter> {
        let kind_token = self.lookahead(offset)?;
        let Some(kind) = Kind::from_token(kind_token.kind()) else {
            return Err(invalid_header(format!("expected a parameter type or ')', found '{}'",
                                              kind_token.lexeme()),
                                      kind_token));
        };

        let colon = self.lookahead(offset + 1)?;
        if colon.kind() != TokenKind::Colon {
            return Err(invalid_header(format!("expected ':' after '{}', found '{}'",
                                              kind_token.lexeme(),
                                              colon.lexeme()),
                                      colon));
        }

        let name_token = self.lookahead(offset + 2)?;
        if name_token.kind() != TokenKind::VarName {
            return Err(invalid_header(format!("expected a parameter name, found '{}'",
                                              name_token.lexeme()),
                                      name_token));
        }

        Ok(Parameter { kind,
                       name: variable_name(name_token).to_string() })
    }

    /// Length of the brace-delimited body starting `offset` tokens after the
    /// cursor, or zero if no `{` follows.
    fn body_len(&self, offset: usize) -> EvalResult<usize> {
        match self.tokens.peek(offset) {
            Some(token) if token.kind() == TokenKind::LeftBrace => {},
            _ => return Ok(0),
        }

        let mut depth = 0usize;
        let mut len = 0;
        while let Some(token) = self.tokens.peek(offset + len) {
            len += 1;
            match token.kind() {
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(len);
                    }
                },
                _ => {},
            }
        }

        let opening = self.lookahead(offset)?;
        Err(invalid_header("the function body is never closed with '}'".to_string(), opening))
    }
}

fn invalid_header(details: String, at: &Token) -> RuntimeError {
    RuntimeError::InvalidFunctionHeader { details,
                                          line: at.line() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::{
        evaluator::core::{CursorAdvance, Outcome},
        lexer::tokenize,
        run_mode::RunMode,
    };

    fn run(source: &str,
           advance: CursorAdvance)
           -> (EvalResult<Outcome>, String, Option<FunctionSignature>) {
        let lexed = tokenize(source).unwrap();
        let mut output = Vec::new();
        let mut interpreter = Interpreter::new(lexed.stream, RunMode::Normal, &b""[..], &mut output)
                                  .with_cursor_advance(advance);

        let outcome = interpreter.run();
        let signature = interpreter.functions().values().next().cloned();
        drop(interpreter);

        (outcome, String::from_utf8(output).unwrap(), signature)
    }

    #[test]
    fn header_is_recorded_without_side_effects() {
        for advance in [CursorAdvance::Single, CursorAdvance::Statement] {
            let (outcome, output, signature) = run("func .f ( int : .x )", advance);

            assert_eq!(outcome, Ok(Outcome::Completed));
            assert!(output.is_empty());
            assert_eq!(signature,
                       Some(FunctionSignature { name:       "f".to_string(),
                                                parameters: vec![Parameter { kind: Kind::Int,
                                                                             name: "x".to_string(), }],
                                                body_len:   0,
                                                line:       1, }));
        }
    }

    #[test]
    fn several_parameters_and_display() {
        let (_, _, signature) =
            run("func .add(int:.a float:.b string : .c bool : .d)", CursorAdvance::Statement);

        assert_eq!(signature.unwrap().to_string(),
                   "func .add(int : .a, float : .b, string : .c, bool : .d)");
    }

    #[test]
    fn empty_parameter_list() {
        let (outcome, _, signature) = run("func .noop ( )", CursorAdvance::Statement);

        assert_eq!(outcome, Ok(Outcome::Completed));
        assert!(signature.unwrap().parameters.is_empty());
    }

    #[test]
    fn body_is_skipped() {
        let (outcome, output, signature) =
            run("func .f ( int : .x ) {\n  print \"inside\"\n  { }\n}\nprint \"outside\"",
                CursorAdvance::Statement);

        assert_eq!(outcome, Ok(Outcome::Completed));
        assert_eq!(output, "outside\n");
        assert_eq!(signature.unwrap().body_len, 6);
    }

    #[test]
    fn malformed_headers() {
        let cases = ["func f ( )",
                     "func .f int : .x )",
                     "func .f ( .x )",
                     "func .f ( int .x )",
                     "func .f ( int : x )",
                     "func .f ( int : .x int : .x )",
                     "func .f ( ) { print \"x\""];

        for source in cases {
            let (outcome, ..) = run(source, CursorAdvance::Statement);
            assert!(matches!(outcome, Err(RuntimeError::InvalidFunctionHeader { .. })),
                    "{source} gave {outcome:?}");
        }
    }

    #[test]
    fn truncated_header() {
        let (outcome, ..) = run("func .f ( int :", CursorAdvance::Statement);

        assert_eq!(outcome, Err(RuntimeError::UnexpectedEndOfInput { line: 1 }));
    }
}
