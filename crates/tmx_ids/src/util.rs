use std::borrow::Cow;

use nom::{
    bytes::complete::take_till,
    character::complete::{char, digit1},
    combinator::all_consuming,
    error::{Error, ParseError},
    multi::separated_list1,
    IResult,
};

use crate::data_types::Gid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Tile(Gid),
    /// Blank field or an explicit `0`.
    Empty,
    Malformed,
}

fn csv_fields<'a, E: ParseError<&'a str>>(i: &'a str) -> IResult<&'a str, Vec<&'a str>, E> {
    separated_list1(char(','), take_till(|c| c == ','))(i)
}

/// Splits the text of a `<data>` block into its comma separated fields.
///
/// Line breaks are removed before splitting, so a row break without a
/// separating comma joins the digits on either side of it. Each field is
/// trimmed.
pub fn csv_tokens(text: &str) -> Vec<Cow<'_, str>> {
    let fields = match csv_fields::<Error<&str>>(text.trim()) {
        Ok((_, fields)) => fields,
        // `take_till` accepts empty input, so this can't be reached.
        Err(_) => return Vec::new(),
    };

    fields
        .into_iter()
        .map(|f| {
            if f.contains('\n') {
                Cow::Owned(f.replace('\n', "").trim().to_owned())
            } else {
                Cow::Borrowed(f.trim())
            }
        })
        .collect()
}

pub fn classify_token(token: &str) -> Token {
    let token = token.trim();
    if token.is_empty() {
        return Token::Empty;
    }

    if all_consuming(digit1::<&str, Error<&str>>)(token).is_err() {
        return Token::Malformed;
    }

    // All digits, but wider than 64 bits.
    match token.parse::<Gid>() {
        Ok(gid) if gid.is_empty() => Token::Empty,
        Ok(gid) => Token::Tile(gid),
        Err(_) => Token::Malformed,
    }
}
