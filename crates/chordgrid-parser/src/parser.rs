//! Line parser for the chord notation.
//!
//! Each line is a keyword followed by space-separated arguments, optionally
//! followed by a `#` comment:
//!
//! ```text
//! name "C major"   # quoted display name
//! start 3
//! mute E B
//! dot A 3
//! barre 1 E..B
//! ```
//!
//! The entry point is [`parse_statements`], which recovers at the next line
//! after an error so every bad line is reported in one pass.

use log::trace;
use winnow::{
    Parser as _,
    ascii::{line_ending, space0, space1},
    combinator::{alt, cut_err, eof, opt, preceded, repeat, terminated},
    error::{AddContext, ContextError, ErrMode, ModalResult},
    stream::{LocatingSlice, Location, Stream},
    token::{take_till, take_while},
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    parser_types::{Argument, Keyword, Statement},
    span::{Span, Spanned},
};

/// Diagnostic details attached to winnow errors via `.context()`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ParserDiagnostic {
    code: ErrorCode,
    message: &'static str,
    help: Option<&'static str>,
    /// The error span covers from `start` to the error position.
    start: usize,
}

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = ModalResult<O, ContextError<ParserDiagnostic>>;

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && c != '#' && c != '"'
}

/// Parse a bare word such as `dot`, `3` or `E..B`
fn word<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    take_while(1.., is_word_char).parse_next(input)
}

/// Parse a double-quoted string, returning its contents.
///
/// Commits after the opening quote; the error span runs from the quote to
/// the end of the line.
fn quoted<'a>(input: &mut Input<'a>) -> IResult<&'a str> {
    let start = input.current_token_start();

    preceded(
        '"',
        cut_err(terminated(take_till(0.., ['"', '\n', '\r']), '"')).context(
            ParserDiagnostic {
                code: ErrorCode::E100,
                message: "unterminated quoted name",
                help: Some("add a closing `\"`"),
                start,
            },
        ),
    )
    .parse_next(input)
}

fn argument<'a>(input: &mut Input<'a>) -> IResult<Spanned<Argument<'a>>> {
    alt((quoted.map(Argument::Quoted), word.map(Argument::Word)))
        .with_span()
        .map(|(argument, range)| Spanned::new(argument, Span::new(range)))
        .parse_next(input)
}

/// Parse a statement keyword.
///
/// Backtracks on a line with no word at all; a word that is not a keyword
/// is a committed error.
fn keyword(input: &mut Input<'_>) -> IResult<Spanned<Keyword>> {
    let start = input.current_token_start();
    let text = word.parse_next(input)?;
    let end = input.current_token_start();

    match Keyword::from_word(text) {
        Some(keyword) => Ok(Spanned::new(keyword, Span::new(start..end))),
        None => Err(ErrMode::Cut(ContextError::new().add_context(
            input,
            &input.checkpoint(),
            ParserDiagnostic {
                code: ErrorCode::E100,
                message: "unknown statement",
                help: Some("statements start with `name`, `start`, `mute`, `dot` or `barre`"),
                start,
            },
        ))),
    }
}

fn statement<'a>(input: &mut Input<'a>) -> IResult<Statement<'a>> {
    let start = input.current_token_start();
    let keyword = keyword.parse_next(input)?;
    let args: Vec<_> = repeat(0.., preceded(space1, argument)).parse_next(input)?;
    let end = input.current_token_start();

    Ok(Statement {
        keyword,
        args,
        span: Span::new(start..end),
    })
}

/// Parse a `#` comment up to (not including) the line break
fn comment(input: &mut Input<'_>) -> IResult<()> {
    ('#', take_till(0.., '\n')).void().parse_next(input)
}

/// Parse one full line, including its line break.
///
/// Blank and comment-only lines yield `None`.
fn line<'a>(input: &mut Input<'a>) -> IResult<Option<Statement<'a>>> {
    space0.parse_next(input)?;
    let statement = opt(statement).parse_next(input)?;
    (space0, opt(comment)).void().parse_next(input)?;

    let start = input.current_token_start();
    cut_err(alt((line_ending.void(), eof.void())))
        .context(ParserDiagnostic {
            code: ErrorCode::E100,
            message: "unexpected input",
            help: Some("a statement is a keyword followed by space-separated arguments"),
            start,
        })
        .parse_next(input)?;

    Ok(statement)
}

/// Skip the rest of the current line, including its line break
fn skip_line(input: &mut Input<'_>) -> IResult<()> {
    (take_till(0.., '\n'), opt('\n')).void().parse_next(input)
}

/// Accumulates statements and diagnostics while parsing.
struct LineParser<'a> {
    source: &'a str,
    statements: Vec<Statement<'a>>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> LineParser<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            statements: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Parse every line, recovering at the next line after an error.
    fn parse(&mut self, mut input: Input<'a>) {
        while !input.is_empty() {
            let line_start = input.checkpoint();
            match line(&mut input) {
                Ok(Some(statement)) => {
                    trace!(keyword = statement.keyword.as_str(); "Parsed statement");
                    self.statements.push(statement);
                }
                Ok(None) => {}
                Err(e) => {
                    let error_pos = input.current_token_start();
                    let diagnostic = self.convert_err_mode(e, error_pos);
                    self.diagnostics.push(diagnostic);

                    input.reset(&line_start);
                    let _ = skip_line(&mut input);
                }
            }
        }
    }

    fn finish(self) -> Result<Vec<Statement<'a>>, ParseError> {
        ParseError::check(self.diagnostics).map(|()| self.statements)
    }

    /// Convert an ErrMode and error position to a Diagnostic.
    ///
    /// Falls back to E100 (unexpected input) if no diagnostic context is found.
    fn convert_err_mode(
        &self,
        err: ErrMode<ContextError<ParserDiagnostic>>,
        error_pos: usize,
    ) -> Diagnostic {
        let context_error = match err {
            ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => ctx,
            ErrMode::Incomplete(_) => ContextError::new(),
        };

        if let Some(ParserDiagnostic {
            code,
            message,
            help,
            start,
        }) = context_error.context().next()
        {
            let end = if error_pos > *start {
                error_pos
            } else {
                self.token_end(*start)
            };

            let mut diag = Diagnostic::new(*code, *message)
                .with_label(Span::new(*start..end), code.description());
            if let Some(h) = help {
                diag = diag.with_help(*h);
            }
            return diag;
        }

        let span = Span::new(error_pos..self.token_end(error_pos));
        Diagnostic::new(ErrorCode::E100, "unexpected input")
            .with_label(span, ErrorCode::E100.description())
    }

    /// End of the whitespace-delimited token starting at `start`, at least one
    /// character long when the source allows it.
    fn token_end(&self, start: usize) -> usize {
        let rest = self.source.get(start..).unwrap_or_default();
        let len = rest
            .char_indices()
            .find(|(i, c)| *i > 0 && c.is_whitespace())
            .map_or(rest.len(), |(i, _)| i);
        start + len
    }
}

/// Split notation source into statements, collecting one diagnostic per bad line.
///
/// # Returns
///
/// - `Ok(statements)` - Every line parsed
/// - `Err(ParseError)` - One or more lines failed; contains all diagnostics
pub fn parse_statements(source: &str) -> Result<Vec<Statement<'_>>, ParseError> {
    let mut parser = LineParser::new(source);
    parser.parse(LocatingSlice::new(source));
    parser.finish()
}
