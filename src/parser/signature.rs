//! Parses `[modifier] returnType methodName(argType argName, ...)`.
//!
//! The header (everything before the first `(`) is split into whitespace-delimited tokens and
//! classified from the end: the last token is the method name, the one before it the return
//! type, and a third, leading token must be an access modifier. Arguments are separated by
//! exactly `", "` and each one is a `type name` pair.

use std::str::FromStr;

use nom::bytes::complete::{take_till, take_till1, take_while1};
use nom::character::complete::char;
use nom::combinator::{all_consuming, eof, map};
use nom::error::{ErrorKind, ParseError};
use nom::multi::separated_list1;
use nom::sequence::{separated_pair, terminated};
use nom::{Finish, IResult};

use crate::model::{AccessModifier, Argument, MethodSignature};
use crate::parser::nom_support::{p_cut, p_fail};

pub type Input<'a> = &'a str;
pub type ParseResult<'a, O> = IResult<Input<'a>, O, Error>;

/// Optional modifier, return type and method name.
type Header<'a> = (Option<AccessModifier>, Input<'a>, Input<'a>);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("empty method signature")]
    Empty,
    #[error("missing `(` after the method name")]
    MissingOpenParen,
    #[error("missing `)` at the end of the parameter list")]
    MissingCloseParen,
    #[error("missing return type before the method name")]
    MissingReturnType,
    #[error("`{token}` is not an access modifier (expected public, private or protected)")]
    UnexpectedModifier { token: String },
    #[error("expected at most three tokens before `(`, found {count}")]
    TooManyHeaderTokens { count: usize },
    #[error("malformed argument `{argument}`, expected `type name`")]
    MalformedArgument { argument: String },
    #[error("unexpected input after `)`: `{rest}`")]
    TrailingInput { rest: String },
    #[error("unexpected input ({kind:?})")]
    Nom { kind: ErrorKind },
}

impl<'a> ParseError<Input<'a>> for Error {
    fn from_error_kind(_: Input<'a>, kind: ErrorKind) -> Self {
        Error::Nom { kind: kind }
    }

    fn append(_: Input<'a>, _: ErrorKind, other: Self) -> Self {
        other
    }
}

/// A run of non-whitespace characters. Identifier syntax is not checked.
fn token(i: Input) -> ParseResult<Input> {
    take_till1(|c: char| c.is_whitespace())(i)
}

fn whitespace(i: Input) -> ParseResult<Input> {
    take_while1(|c: char| c.is_whitespace())(i)
}

fn typed_name(i: Input) -> ParseResult<Argument> {
    map(separated_pair(token, whitespace, token), |(ty, name)| Argument::new(ty, name))(i)
}

/// Everything up to the closing `)`. An empty (or blank) list yields no arguments. Whitespace
/// around each argument is ignored, as it is around header tokens.
fn argument_list(i: Input) -> ParseResult<Vec<Argument>> {
    let (i, inner) = take_till(|c: char| c == ')')(i)?;
    if inner.trim().is_empty() {
        return Ok((i, Vec::new()));
    }

    let mut arguments = Vec::new();
    for segment in inner.split(", ").map(str::trim) {
        let (_, argument) = p_cut(|_| Error::MalformedArgument { argument: segment.to_owned() },
                                  all_consuming(typed_name))(segment)?;
        arguments.push(argument);
    }
    Ok((i, arguments))
}

fn parameter_list(i: Input) -> ParseResult<Vec<Argument>> {
    let (i, _) = p_cut(|_| Error::MissingOpenParen, char('('))(i)?;
    let (i, arguments) = argument_list(i)?;
    let (i, _) = p_cut(|_| Error::MissingCloseParen, char(')'))(i)?;
    Ok((i, arguments))
}

fn end_of_signature(i: Input) -> ParseResult<Input> {
    p_cut(|rest: Input| Error::TrailingInput { rest: rest.to_owned() }, eof)(i)
}

fn header(text: Input) -> ParseResult<Header> {
    let (i, tokens) = all_consuming(separated_list1(whitespace, token))(text.trim_end())?;
    let header = match tokens[..] {
        [_] => return p_fail(Error::MissingReturnType),
        [return_type, method_name] => (None, return_type, method_name),
        [modifier, return_type, method_name] => match AccessModifier::from_str(modifier) {
            Ok(modifier) => (Some(modifier), return_type, method_name),
            Err(()) => return p_fail(Error::UnexpectedModifier { token: modifier.to_owned() }),
        },
        _ => return p_fail(Error::TooManyHeaderTokens { count: tokens.len() }),
    };

    // `public foo()` names no return type.
    if AccessModifier::from_str(header.1).is_ok() {
        return p_fail(Error::MissingReturnType);
    }
    Ok((i, header))
}

/// The parameter list is delimited before the header tokens are classified, so a signature
/// without `(` reports `MissingOpenParen` rather than a header error.
fn method_signature(i: Input) -> ParseResult<MethodSignature> {
    let (i, header_text) = p_cut(|_| Error::MissingReturnType, take_till1(|c: char| c == '('))(i)?;
    let (i, arguments) = terminated(parameter_list, end_of_signature)(i)?;
    let (_, (access_modifier, return_type, method_name)) = header(header_text)?;
    Ok((i, MethodSignature::new(access_modifier, return_type, method_name, arguments)))
}

/// Parses one method signature. Leading and trailing whitespace is ignored; anything else
/// outside the grammar is rejected with a descriptive `Error`.
pub fn parse(signature: &str) -> Result<MethodSignature, Error> {
    trace!("parsing method signature {:?}", signature);
    let input = signature.trim();
    if input.is_empty() {
        return Err(Error::Empty);
    }

    let (_, parsed) = method_signature(input).finish()?;
    debug!("parsed {:?} into {:?}", signature, parsed);
    Ok(parsed)
}

/// Parses a bare parameter list such as `(int x, float magnitude)`.
pub fn parse_arguments(list: &str) -> Result<Vec<Argument>, Error> {
    let (_, arguments) = terminated(parameter_list, end_of_signature)(list.trim()).finish()?;
    Ok(arguments)
}

/// True iff the first whitespace-delimited token is exactly `public`, `private` or `protected`.
pub fn has_access_modifier(signature: &str) -> bool {
    signature.split_whitespace()
        .next()
        .map_or(false, |first| AccessModifier::from_str(first).is_ok())
}

impl FromStr for MethodSignature {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(pairs: &[(&str, &str)]) -> Vec<Argument> {
        pairs.iter().map(|&(ty, name)| Argument::new(ty, name)).collect()
    }

    #[test]
    fn test_private_single_argument() {
        let sig = parse("private void log(String value)").unwrap();
        assert_eq!(sig.access_modifier(), Some(AccessModifier::Private));
        assert_eq!(sig.return_type(), "void");
        assert_eq!(sig.method_name(), "log");
        assert_eq!(sig.arguments(), &args(&[("String", "value")])[..]);
    }

    #[test]
    fn test_no_modifier_many_arguments() {
        let sig = parse("Vector3 distort(int x, int y, int z, float magnitude)").unwrap();
        assert_eq!(sig.access_modifier(), None);
        assert_eq!(sig.return_type(), "Vector3");
        assert_eq!(sig.method_name(), "distort");
        assert_eq!(sig.arguments(),
                   &args(&[("int", "x"), ("int", "y"), ("int", "z"), ("float", "magnitude")])[..]);
    }

    #[test]
    fn test_empty_parameter_list() {
        let sig = parse("public DateTime getCurrentDateTime()").unwrap();
        assert_eq!(sig.access_modifier(), Some(AccessModifier::Public));
        assert_eq!(sig.return_type(), "DateTime");
        assert_eq!(sig.method_name(), "getCurrentDateTime");
        assert!(sig.arguments().is_empty());
    }

    #[test]
    fn test_modifier_keyword_inside_names() {
        let sig = parse("int publicCount(boolean privateOnly)").unwrap();
        assert_eq!(sig.access_modifier(), None);
        assert_eq!(sig.return_type(), "int");
        assert_eq!(sig.method_name(), "publicCount");

        let sig = parse("protectedType run()").unwrap();
        assert_eq!(sig.access_modifier(), None);
        assert_eq!(sig.return_type(), "protectedType");
    }

    #[test]
    fn test_duplicate_arguments_are_kept() {
        let sig = parse("void f(int a, int a)").unwrap();
        assert_eq!(sig.arguments(), &args(&[("int", "a"), ("int", "a")])[..]);
    }

    #[test]
    fn test_surrounding_whitespace() {
        let sig = parse("  protected   long   size (  )\n").unwrap();
        assert_eq!(sig.access_modifier(), Some(AccessModifier::Protected));
        assert_eq!(sig.return_type(), "long");
        assert_eq!(sig.method_name(), "size");
        assert!(sig.arguments().is_empty());
    }

    #[test]
    fn test_whitespace_around_arguments() {
        let expected = args(&[("int", "a"), ("String", "b")]);
        assert_eq!(parse("void f(int a )").unwrap().arguments(), &expected[..1]);
        assert_eq!(parse("void f( int a)").unwrap().arguments(), &expected[..1]);
        assert_eq!(parse("void f( int a,  String\tb )").unwrap().arguments(), &expected[..]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse("   "), Err(Error::Empty));
        assert_eq!(parse("void run"), Err(Error::MissingOpenParen));
        assert_eq!(parse("void run(int a"), Err(Error::MissingCloseParen));
        assert_eq!(parse("run()"), Err(Error::MissingReturnType));
        assert_eq!(parse("(int a)"), Err(Error::MissingReturnType));
        assert_eq!(parse("public run()"), Err(Error::MissingReturnType));
        assert_eq!(parse("static void run()"),
                   Err(Error::UnexpectedModifier { token: "static".to_owned() }));
        assert_eq!(parse("public static void run()"),
                   Err(Error::TooManyHeaderTokens { count: 4 }));
        assert_eq!(parse("void run(int a) throws"),
                   Err(Error::TrailingInput { rest: " throws".to_owned() }));
    }

    #[test]
    fn test_malformed_arguments() {
        assert_eq!(parse("void f(int a,int b)"),
                   Err(Error::MalformedArgument { argument: "int a,int b".to_owned() }));
        assert_eq!(parse("void f(int a, b)"),
                   Err(Error::MalformedArgument { argument: "b".to_owned() }));
        assert_eq!(parse("void f(int a, , int b)"),
                   Err(Error::MalformedArgument { argument: "".to_owned() }));
        assert_eq!(parse("void f(int a, )"),
                   Err(Error::MalformedArgument { argument: "".to_owned() }));
        assert_eq!(parse("void f(final int a)"),
                   Err(Error::MalformedArgument { argument: "final int a".to_owned() }));
    }

    #[test]
    fn test_parse_arguments() {
        assert_eq!(parse_arguments("()"), Ok(vec![]));
        assert_eq!(parse_arguments("(String s, Object o)"),
                   Ok(args(&[("String", "s"), ("Object", "o")])));
        assert_eq!(parse_arguments("String s"), Err(Error::MissingOpenParen));
        assert_eq!(parse_arguments("(String s"), Err(Error::MissingCloseParen));
    }

    #[test]
    fn test_has_access_modifier() {
        assert!(has_access_modifier("private void log(String value)"));
        assert!(has_access_modifier("  protected int size()"));
        assert!(!has_access_modifier("int publicCount()"));
        assert!(!has_access_modifier("void setPrivate(boolean private)"));
        assert!(!has_access_modifier(""));
    }

    #[test]
    fn test_from_str() {
        let sig: MethodSignature = "int sum(int a, int b)".parse().unwrap();
        assert_eq!(sig.method_name(), "sum");
        assert_eq!("sum".parse::<MethodSignature>(), Err(Error::MissingOpenParen));
    }
}
