//! Elaboration phase: parsed statements to a validated [`Shape`].
//!
//! Arguments are interpreted here: numbers, string names and barre ranges.
//! Each statement reports at most one diagnostic and elaboration carries on
//! with the next statement, so a file with several mistakes reports all of
//! them at once.

use log::{debug, info, trace};

use chordgrid_core::{
    error::{ConstructionError, ShapeError, ValidationError},
    shape::{Barre, FretNumber, Position, Shape, StringIndex},
    string_name::StringName,
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, Result},
    parser_types::{Argument, Keyword, Statement},
    span::{Span, Spanned},
};

/// Configuration for the elaboration phase.
#[derive(Debug, Clone)]
pub struct ElaborateConfig {
    strict: bool,
}

impl ElaborateConfig {
    /// Create a config.
    ///
    /// With `strict` set, a string that is both muted and fretted is an error.
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    /// Returns whether muted-and-fretted strings are rejected.
    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for ElaborateConfig {
    fn default() -> Self {
        Self::new(true)
    }
}

pub struct Builder {
    cfg: ElaborateConfig,
    diagnostics: Vec<Diagnostic>,
    name: Option<Spanned<String>>,
    starting_fret: Option<Spanned<i64>>,
    muted: Vec<Spanned<StringIndex>>,
    positions: Vec<Spanned<Position>>,
    barre: Option<Spanned<Barre>>,
}

impl Builder {
    pub fn new(cfg: ElaborateConfig) -> Self {
        Self {
            cfg,
            diagnostics: Vec::new(),
            name: None,
            starting_fret: None,
            muted: Vec::new(),
            positions: Vec::new(),
            barre: None,
        }
    }

    // ============================================================================
    // Main Entry Method
    // ============================================================================

    pub fn build(mut self, statements: &[Statement<'_>]) -> std::result::Result<Shape, ParseError> {
        debug!(statements = statements.len(), strict = self.cfg.strict; "Elaborating chord shape");

        for statement in statements {
            trace!(keyword = statement.keyword.as_str(); "Elaborating statement");
            if let Err(diagnostic) = self.statement(statement) {
                self.diagnostics.push(diagnostic);
            }
        }

        if self.cfg.strict {
            self.check_conflicts();
        }

        let Self {
            diagnostics,
            name,
            starting_fret,
            muted,
            positions,
            barre,
            ..
        } = self;
        ParseError::check(diagnostics)?;

        let shape = Shape::new(
            muted.iter().map(|string| *string.inner()),
            starting_fret.map_or(1, Spanned::into_inner),
            positions.iter().map(|position| *position.inner()).collect(),
            barre.map(Spanned::into_inner),
        )
        .map_err(|err| {
            let span = match &err {
                ShapeError::Construction(_) => starting_fret.map(|fret| fret.span()),
                ShapeError::Validation(ValidationError::DuplicateString { string }) => positions
                    .iter()
                    .rev()
                    .find(|position| position.string().value() == *string)
                    .map(|position| position.span()),
                ShapeError::Validation(_) => None,
            };
            let diagnostic = Diagnostic::new(ErrorCode::E200, err.to_string());
            match span {
                Some(span) => diagnostic.with_label(span, "rejected by the chord shape"),
                None => diagnostic,
            }
        })?;

        info!(
            positions = shape.positions().len(),
            muted = shape.muted_strings().len(),
            starting_fret = shape.starting_fret();
            "Chord shape elaborated",
        );

        Ok(match name {
            Some(name) => shape.with_name(name.into_inner()),
            None => shape,
        })
    }

    fn statement(&mut self, statement: &Statement<'_>) -> Result<()> {
        match *statement.keyword {
            Keyword::Name => self.name_statement(statement),
            Keyword::Start => self.start_statement(statement),
            Keyword::Mute => self.mute_statement(statement),
            Keyword::Dot => self.dot_statement(statement),
            Keyword::Barre => self.barre_statement(statement),
        }
    }

    // ============================================================================
    // Statements
    // ============================================================================

    fn name_statement(&mut self, statement: &Statement<'_>) -> Result<()> {
        Self::reject_duplicate(statement, self.name.as_ref().map(Spanned::span))?;
        let [arg] = Self::arguments::<1>(statement)?;

        let Argument::Quoted(name) = *arg.inner() else {
            return Err(Diagnostic::new(ErrorCode::E100, "chord name must be quoted")
                .with_label(arg.span(), "unquoted name")
                .with_help(format!("usage: `{}`", Keyword::Name.usage())));
        };

        self.name = Some(Spanned::new(name.to_string(), statement.span));
        Ok(())
    }

    fn start_statement(&mut self, statement: &Statement<'_>) -> Result<()> {
        Self::reject_duplicate(statement, self.starting_fret.map(|fret| fret.span()))?;
        let [arg] = Self::arguments::<1>(statement)?;
        let fret = Self::number(arg)?;

        if *fret < 1 {
            let err = ConstructionError::InvalidStartingFret { value: *fret };
            return Err(Diagnostic::new(ErrorCode::E200, err.to_string())
                .with_label(fret.span(), "invalid starting fret")
                .with_help("the starting fret is an absolute fret number, 1 for the nut"));
        }

        self.starting_fret = Some(Spanned::new(*fret, statement.span));
        Ok(())
    }

    fn mute_statement(&mut self, statement: &Statement<'_>) -> Result<()> {
        if statement.args.is_empty() {
            return Err(Self::missing_arguments(statement, 1));
        }

        for arg in &statement.args {
            let string = Self::string(arg)?;
            if !self.muted.iter().any(|muted| muted.inner() == string.inner()) {
                self.muted.push(string);
            }
        }
        Ok(())
    }

    fn dot_statement(&mut self, statement: &Statement<'_>) -> Result<()> {
        let [string_arg, fret_arg] = Self::arguments::<2>(statement)?;
        let string = Self::string(string_arg)?;
        let fret = Self::fret(fret_arg)?;

        if let Some(first) = self
            .positions
            .iter()
            .find(|position| position.string() == *string)
        {
            return Err(Diagnostic::new(
                ErrorCode::E201,
                format!("string {} is fretted more than once", string.inner()),
            )
            .with_label(string.span(), "fretted again")
            .with_secondary_label(first.span(), "first fretted here")
            .with_help("keep a single `dot` per string"));
        }

        self.positions
            .push(Spanned::new(Position::new(*string, *fret), string.span()));
        Ok(())
    }

    fn barre_statement(&mut self, statement: &Statement<'_>) -> Result<()> {
        Self::reject_duplicate(statement, self.barre.map(|barre| barre.span()))?;
        let [fret_arg, range_arg] = Self::arguments::<2>(statement)?;
        let fret = Self::fret(fret_arg)?;
        let range = Self::word(range_arg, "a string range")?;

        let Some((start_text, end_text)) = range.split_once("..") else {
            return Err(Diagnostic::new(
                ErrorCode::E100,
                format!("invalid string range `{range}`"),
            )
                .with_label(range_arg.span(), "expected `start..end`")
                .with_help(format!("usage: `{}`", Keyword::Barre.usage())));
        };

        let offset = range_arg.span().start();
        let start_span = Span::new(offset..offset + start_text.len());
        let end_span = Span::new(offset + start_text.len() + 2..range_arg.span().end());
        let string_start = Self::string_name(start_text, start_span)?;
        let string_end = Self::string_name(end_text, end_span)?;

        let barre = Barre::new(*fret, *string_start, *string_end).map_err(|err| {
            Diagnostic::new(ErrorCode::E200, err.to_string())
                .with_label(range_arg.span(), "strings in the wrong order")
                .with_help("a barre runs from the lower-pitched string to the higher-pitched one, as in `E..B`")
        })?;

        self.barre = Some(Spanned::new(barre, statement.span));
        Ok(())
    }

    /// Emits one diagnostic per string that is both muted and fretted.
    fn check_conflicts(&mut self) {
        for position in &self.positions {
            let Some(mute) = self
                .muted
                .iter()
                .find(|muted| *muted.inner() == position.string())
            else {
                continue;
            };

            self.diagnostics.push(
                Diagnostic::new(
                    ErrorCode::E202,
                    format!("string {} is both muted and fretted", position.string()),
                )
                .with_label(position.span(), "fretted here")
                .with_secondary_label(mute.span(), "muted here")
                .with_help("remove the `mute` or the `dot`, or turn off strict validation"),
            );
        }
    }

    // ============================================================================
    // Argument Helpers
    // ============================================================================

    /// Returns exactly `N` arguments or an arity diagnostic.
    fn arguments<'s, 'a, const N: usize>(
        statement: &'s Statement<'a>,
    ) -> Result<&'s [Spanned<Argument<'a>>; N]> {
        if let Some(extra) = statement.args.get(N) {
            return Err(Diagnostic::new(
                ErrorCode::E100,
                format!("too many arguments for `{}`", statement.keyword.inner()),
            )
            .with_label(extra.span(), "unexpected argument")
            .with_help(format!("usage: `{}`", statement.keyword.usage())));
        }

        statement
            .args
            .as_slice()
            .try_into()
            .map_err(|_| Self::missing_arguments(statement, N))
    }

    fn missing_arguments(statement: &Statement<'_>, expected: usize) -> Diagnostic {
        let noun = if expected == 1 { "argument" } else { "arguments" };
        Diagnostic::new(
            ErrorCode::E100,
            format!("missing arguments for `{}`", statement.keyword.inner()),
        )
        .with_label(statement.span, format!("expected {expected} {noun}"))
        .with_help(format!("usage: `{}`", statement.keyword.usage()))
    }

    fn reject_duplicate(statement: &Statement<'_>, first: Option<Span>) -> Result<()> {
        match first {
            Some(first) => Err(Diagnostic::new(
                ErrorCode::E201,
                format!("duplicate `{}` statement", statement.keyword.inner()),
            )
            .with_label(statement.span, "duplicate")
            .with_secondary_label(first, "first defined here")
            .with_help(format!("keep a single `{}` statement", statement.keyword.inner()))),
            None => Ok(()),
        }
    }

    fn word<'a>(arg: &Spanned<Argument<'a>>, expected: &str) -> Result<&'a str> {
        match *arg.inner() {
            Argument::Word(word) => Ok(word),
            Argument::Quoted(_) => Err(Diagnostic::new(
                ErrorCode::E100,
                format!("expected {expected}, found a quoted string"),
            )
            .with_label(arg.span(), "unexpected quoted string")),
        }
    }

    fn number(arg: &Spanned<Argument<'_>>) -> Result<Spanned<i64>> {
        let text = Self::word(arg, "a number")?;
        text.parse::<i64>()
            .map(|value| Spanned::new(value, arg.span()))
            .map_err(|_| {
                Diagnostic::new(ErrorCode::E101, format!("invalid number `{text}`"))
                    .with_label(arg.span(), "expected an integer")
            })
    }

    fn fret(arg: &Spanned<Argument<'_>>) -> Result<Spanned<FretNumber>> {
        let value = Self::number(arg)?;
        FretNumber::new(*value)
            .map(|fret| Spanned::new(fret, value.span()))
            .map_err(|err| {
                Diagnostic::new(ErrorCode::E200, err.to_string())
                    .with_label(value.span(), "outside the diagram")
                    .with_help("frets are counted from the starting fret, from 1 to 5")
            })
    }

    fn string(arg: &Spanned<Argument<'_>>) -> Result<Spanned<StringIndex>> {
        let text = Self::word(arg, "a string")?;
        Self::string_name(text, arg.span())
    }

    /// Resolves a string given as a letter (`E A D G B e`) or a number.
    fn string_name(text: &str, span: Span) -> Result<Spanned<StringIndex>> {
        if let Ok(value) = text.parse::<i64>() {
            return StringIndex::new(value)
                .map(|string| Spanned::new(string, span))
                .map_err(|err| {
                    Diagnostic::new(ErrorCode::E200, err.to_string())
                        .with_label(span, "no such string")
                        .with_help("strings are numbered 1 (high e) to 6 (low E)")
                });
        }

        text.parse::<StringName>()
            .map(|name| Spanned::new(name.index(), span))
            .map_err(|err| {
                Diagnostic::new(ErrorCode::E102, err.to_string())
                    .with_label(span, "unknown string name")
                    .with_help("use one of `E A D G B e` or a number from 1 to 6")
            })
    }
}
