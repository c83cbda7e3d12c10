//! Command-line lexer
//!
//! Splits one line of input into words the way a POSIX shell would for the
//! subset users actually type: whitespace separates words, single quotes are
//! literal, double quotes only treat `\"` and `\\` as escapes, a bare
//! backslash escapes the next character, and adjacent fragments join into
//! one word.

use crate::error::{Error, Result};
use nom::branch::alt;
use nom::bytes::complete::take_till;
use nom::character::complete::{anychar, char, multispace0, multispace1, none_of, one_of};
use nom::combinator::{all_consuming, map};
use nom::multi::{fold_many0, fold_many1, separated_list0};
use nom::sequence::{delimited, preceded};
use nom::IResult;

/// Split a line into words
pub fn split_words(line: &str) -> Result<Vec<String>> {
    match all_consuming(delimited(multispace0, words, multispace0))(line) {
        Ok((_, words)) => Ok(words),
        Err(_) if line.ends_with('\\') => Err(Error::Syntax("No escaped character".to_string())),
        Err(_) => Err(Error::Syntax("No closing quotation".to_string())),
    }
}

fn words(i: &str) -> IResult<&str, Vec<String>> {
    separated_list0(multispace1, word)(i)
}

fn word(i: &str) -> IResult<&str, String> {
    fold_many1(
        alt((single_quoted, double_quoted, bare)),
        String::new,
        |mut acc: String, part: String| {
            acc.push_str(&part);
            acc
        },
    )(i)
}

fn single_quoted(i: &str) -> IResult<&str, String> {
    map(
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        String::from,
    )(i)
}

fn double_quoted(i: &str) -> IResult<&str, String> {
    delimited(
        char('"'),
        fold_many0(
            alt((preceded(char('\\'), one_of("\"\\")), none_of("\""))),
            String::new,
            push_char,
        ),
        char('"'),
    )(i)
}

fn bare(i: &str) -> IResult<&str, String> {
    fold_many1(
        alt((preceded(char('\\'), anychar), none_of(" \t\r\n'\"\\"))),
        String::new,
        push_char,
    )(i)
}

fn push_char(mut acc: String, c: char) -> String {
    acc.push(c);
    acc
}
