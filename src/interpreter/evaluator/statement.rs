use std::io::{BufRead, Write};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Flow, Interpreter, variable_name},
        token::{Token, TokenKind},
        value::{
            core::{Kind, Value, unquote},
            truthiness::input_truthiness,
        },
    },
};

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// Executes `print <operand>`.
    ///
    /// A string literal is written without its quotes, any other literal in
    /// its display form, and a variable name as the display form of its
    /// current value. A line break follows. Any other operand prints nothing
    /// and only `print` itself is consumed.
    ///
    /// # Errors
    /// - `UnexpectedEndOfInput` if `print` is the last token.
    /// - `UnknownVariable` if the variable is not bound.
    pub(super) fn exec_print(&mut self) -> EvalResult<Flow> {
        let operand = self.lookahead(1)?;
        let line = operand.line();

        let text = match operand.kind() {
            TokenKind::VarName => self.resolve(operand)?.to_string(),
            kind if kind.is_literal() => Value::from_literal(operand)?.to_string(),
            _ => return Ok(Flow::Executed(1)),
        };

        self.emit(line, format_args!("{text}\n"))?;
        Ok(Flow::Executed(2))
    }

    /// Executes a declaration: `<kind> .name = <right hand side>`.
    ///
    /// The right hand side takes one of three shapes:
    /// - a literal, converted to the declared kind;
    /// - `input` and a prompt, which reads one line and converts it (a `bool`
    ///   uses the truthy input set instead of conversion);
    /// - a variable name, whose value is copied and converted to the declared
    ///   kind.
    ///
    /// A type keyword that is not followed by `.name =` does not start a
    /// declaration and is reported as unhandled; this keeps the parameter
    /// types of a `func` header inert.
    ///
    /// # Errors
    /// - `UnexpectedToken` for any other right hand side.
    /// - `TypeError` or `ValueError` when conversion fails.
    /// - `UnknownVariable` when a copied variable or prompt variable is not
    ///   bound.
    /// - `Io` when the interaction channel fails.
    pub(super) fn exec_declaration(&mut self, keyword: TokenKind) -> EvalResult<Flow> {
        let Some(kind) = Kind::from_token(keyword) else {
            return Ok(Flow::Unhandled(keyword));
        };
        let is_declaration = matches!(self.tokens.peek(1).map(Token::kind), Some(TokenKind::VarName))
                             && matches!(self.tokens.peek(2).map(Token::kind),
                                         Some(TokenKind::Equal));
        if !is_declaration {
            return Ok(Flow::Unhandled(keyword));
        }

        let name = variable_name(self.lookahead(1)?).to_string();
        let rhs = self.lookahead(3)?;
        let line = rhs.line();

        let (value, width) = match rhs.kind() {
            TokenKind::Input => (self.eval_input(kind)?, 5),
            TokenKind::VarName => (self.resolve(rhs)?.convert_to(kind, line)?, 4),
            literal if literal.is_literal() => {
                (Value::from_literal(rhs)?.convert_to(kind, line)?, 4)
            },
            _ => {
                return Err(unexpected("a literal, 'input' or a variable name after '='", rhs));
            },
        };

        self.environment.define(&name, value);
        Ok(Flow::Executed(width))
    }

    /// Evaluates `input <prompt>` for a declaration of `kind`.
    ///
    /// The prompt is a string literal, or for `string` declarations also a
    /// variable whose value is used as the prompt.
    fn eval_input(&mut self, kind: Kind) -> EvalResult<Value> {
        let prompt_token = self.lookahead(4)?;
        let line = prompt_token.line();

        let prompt = match prompt_token.kind() {
            TokenKind::StringData => unquote(prompt_token.lexeme()).to_string(),
            TokenKind::VarName if kind == Kind::String => self.resolve(prompt_token)?.to_string(),
            _ => {
                let expected = if kind == Kind::String {
                    "a string or variable prompt after 'input'"
                } else {
                    "a string prompt after 'input'"
                };
                return Err(unexpected(expected, prompt_token));
            },
        };

        let text = self.read_line(&prompt, line)?;
        match kind {
            Kind::Bool => Ok(Value::Bool(input_truthiness(&text))),
            _ => Value::from(text).convert_to(kind, line),
        }
    }

    /// Writes `prompt`, then blocks for one line of input.
    ///
    /// The returned text has its line break removed.
    ///
    /// # Errors
    /// `RuntimeError::Io` if writing fails, reading fails, or the input is
    /// exhausted.
    fn read_line(&mut self, prompt: &str, line: usize) -> EvalResult<String> {
        self.emit(line, format_args!("{prompt}"))?;
        self.flush(line)?;

        let mut buffer = String::new();
        let read = self.input
                       .read_line(&mut buffer)
                       .map_err(|e| RuntimeError::Io { details: e.to_string(),
                                                       line })?;
        if read == 0 {
            return Err(RuntimeError::Io { details: "input ended while waiting for a line".to_string(),
                                          line });
        }

        if buffer.ends_with('\n') {
            buffer.pop();
            if buffer.ends_with('\r') {
                buffer.pop();
            }
        }
        Ok(buffer)
    }
}

fn unexpected(expected: &str, found: &Token) -> RuntimeError {
    RuntimeError::UnexpectedToken { expected: expected.to_string(),
                                    found:    found.lexeme().to_string(),
                                    line:     found.line(), }
}

#[cfg(test)]
mod tests {
    use crate::{
        error::RuntimeError,
        interpreter::{
            evaluator::core::{EvalResult, Interpreter, Outcome},
            lexer::tokenize,
            run_mode::RunMode,
            value::core::Value,
        },
    };

    fn run(source: &str, input: &str) -> (EvalResult<Outcome>, String, Vec<(String, Value)>) {
        let lexed = tokenize(source).unwrap();
        let mut output = Vec::new();
        let mut interpreter =
            Interpreter::new(lexed.stream, RunMode::Normal, input.as_bytes(), &mut output);

        let outcome = interpreter.run();
        let bindings = interpreter.environment()
                                  .sorted()
                                  .into_iter()
                                  .map(|(name, value)| (name.to_string(), value.clone()))
                                  .collect();
        drop(interpreter);

        (outcome, String::from_utf8(output).unwrap(), bindings)
    }

    #[test]
    fn print_literals() {
        let (outcome, output, _) = run("print \"hello\" print 'single' print 12 print 1.50 print True",
                                       "");

        assert_eq!(outcome, Ok(Outcome::Completed));
        assert_eq!(output, "hello\nsingle\n12\n1.5\ntrue\n");
    }

    #[test]
    fn print_unbound_variable() {
        let (outcome, output, _) = run("print .ghost\nprint \"never\"", "");

        assert_eq!(outcome,
                   Err(RuntimeError::UnknownVariable { name: "ghost".to_string(),
                                                       line: 1, }));
        assert!(output.is_empty());
    }

    #[test]
    fn print_needs_an_operand() {
        let (outcome, ..) = run("print", "");
        assert_eq!(outcome, Err(RuntimeError::UnexpectedEndOfInput { line: 1 }));

    }

    #[test]
    fn print_ignores_other_operands() {
        let (outcome, output, _) = run("print @\nprint \"after\"\nprint = print ;", "");

        assert_eq!(outcome, Ok(Outcome::Completed));
        assert_eq!(output, "after\n");
    }

    #[test]
    fn declarations_from_literals() {
        let (_, _, bindings) = run("string .s = \"hi\"\nint .i = 4\nfloat .f = 2.5\nbool .b = False",
                                   "");

        assert_eq!(bindings,
                   [("b".to_string(), Value::Bool(false)),
                    ("f".to_string(), Value::from(2.5)),
                    ("i".to_string(), Value::Int(4)),
                    ("s".to_string(), Value::from("hi"))]);
    }

    #[test]
    fn literals_convert_to_the_declared_kind() {
        let (_, _, bindings) = run("float .f = 3\nint .i = \"12\"\nstring .s = 7", "");

        assert_eq!(bindings,
                   [("f".to_string(), Value::from(3.0)),
                    ("i".to_string(), Value::Int(12)),
                    ("s".to_string(), Value::from("7"))]);
    }

    #[test]
    fn copy_converts_to_the_declared_kind() {
        let (outcome, output, bindings) = run("int .n = 5\nstring .m = .n\nint .k = .n\nprint .m", "");

        assert_eq!(outcome, Ok(Outcome::Completed));
        assert_eq!(output, "5\n");
        assert_eq!(bindings[1], ("m".to_string(), Value::from("5")));
        assert_eq!(bindings[0], ("k".to_string(), Value::Int(5)));
    }

    #[test]
    fn copy_is_independent_of_its_source() {
        let (_, output, _) = run("int .x = 1\nint .y = .x\nint .x = 2\nprint .y\nprint .x", "");

        assert_eq!(output, "1\n2\n");
    }

    #[test]
    fn failed_copy_conversion() {
        let (outcome, ..) = run("string .s = \"abc\"\nfloat .f = .s", "");

        assert!(matches!(outcome, Err(RuntimeError::TypeError { line: 2, .. })));
    }

    #[test]
    fn type_error_stops_the_run() {
        let (outcome, output, bindings) = run("int .bad = \"notanumber\"\nprint \"after\"", "");

        assert!(matches!(outcome, Err(RuntimeError::TypeError { line: 1, .. })));
        assert!(output.is_empty());
        assert!(bindings.is_empty());
    }

    #[test]
    fn string_input_with_literal_and_variable_prompts() {
        let (_, output, bindings) = run("string .q = \"Name? \"\nstring .a = input .q\nstring .b = input \"Again: \"",
                                        "Ada\r\nLovelace\n");

        assert_eq!(output, "Name? Again: ");
        assert_eq!(bindings[0], ("a".to_string(), Value::from("Ada")));
        assert_eq!(bindings[1], ("b".to_string(), Value::from("Lovelace")));
    }

    #[test]
    fn numeric_input() {
        let (_, _, bindings) = run("int .i = input \"i: \"\nfloat .f = input \"f: \"", " 42 \n0.5\n");

        assert_eq!(bindings,
                   [("f".to_string(), Value::from(0.5)), ("i".to_string(), Value::Int(42))]);
    }

    #[test]
    fn numeric_input_must_parse() {
        let (outcome, ..) = run("int .i = input \"i: \"", "many\n");

        assert!(matches!(outcome, Err(RuntimeError::TypeError { .. })));
    }

    #[test]
    fn numeric_input_rejects_variable_prompt() {
        let (outcome, ..) = run("string .p = \"?\"\nint .i = input .p", "1\n");

        assert!(matches!(outcome, Err(RuntimeError::UnexpectedToken { line: 2, .. })));
    }

    #[test]
    fn bool_literal_and_input_rules() {
        let (_, _, bindings) =
            run("bool .b = True\nbool .c = input \"c? \"\nbool .d = input \"d? \"\nbool .e = input \"e? \"",
                "T\ntrue\n1\n");

        assert_eq!(bindings,
                   [("b".to_string(), Value::Bool(true)),
                    ("c".to_string(), Value::Bool(true)),
                    ("d".to_string(), Value::Bool(false)),
                    ("e".to_string(), Value::Bool(true))]);
    }

    #[test]
    fn input_exhausted() {
        let (outcome, ..) = run("string .s = input \"> \"", "");

        assert!(matches!(outcome, Err(RuntimeError::Io { .. })));
    }

    #[test]
    fn malformed_right_hand_side() {
        let (outcome, ..) = run("int .x = print", "");

        assert!(matches!(outcome, Err(RuntimeError::UnexpectedToken { .. })));
    }

    #[test]
    fn missing_right_hand_side() {
        let (outcome, ..) = run("int .x =", "");

        assert_eq!(outcome, Err(RuntimeError::UnexpectedEndOfInput { line: 1 }));
    }

    #[test]
    fn incomplete_declaration_is_not_a_statement() {
        let (outcome, output, bindings) = run("int 5\nstring .s \"x\"\nprint \"ok\"", "");

        assert_eq!(outcome, Ok(Outcome::Completed));
        assert_eq!(output, "ok\n");
        assert!(bindings.is_empty());
    }
}
