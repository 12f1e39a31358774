use std::{
    collections::HashSet,
    error::Error,
    fs,
    str::{Chars, FromStr},
};

use anyhow::Context;

type AError = anyhow::Error;
type Delimiter = char;

/// Run a day's pipeline over the named input file.
///
/// The file is read in full before any parsing starts; each line (trailing
/// whitespace stripped) is folded through parse_line in order, then the
/// remaining stages run on the folded state. The first error aborts the run.
pub fn process<LoadState, State, ProcessedState, FinalResult>(
    file_name: &str,
    initial_state: LoadState,
    parse_line: fn(LoadState, String) -> Result<LoadState, AError>,
    finalise_state: fn(LoadState) -> Result<State, AError>,
    perform_processing: fn(State) -> Result<ProcessedState, AError>,
    calc_result: fn(ProcessedState) -> Result<FinalResult, AError>,
) -> Result<FinalResult, AError> {
    let contents = fs::read_to_string(file_name)
        .with_context(|| format!("Failed to read input file '{}'", file_name))?;
    let loaded_state = contents.lines().try_fold(initial_state, |state, line| {
        parse_line(state, line.trim_end().to_string())
    })?;
    let finalised_state = finalise_state(loaded_state)?;
    let processed_state = perform_processing(finalised_state)?;
    calc_result(processed_state)
}

pub fn ok_identity<T>(t: T) -> Result<T, AError> {
    Ok(t)
}

/// Skip any leading delimiters then read a word, returning it together with the
/// delimiter that ended it (None when the input ran out).
pub fn next_word(
    chars: &mut Chars<'_>,
    delimiters: &HashSet<Delimiter>,
) -> Option<(String, Option<Delimiter>)> {
    let mut word = String::new();
    for c in chars.by_ref() {
        if delimiters.contains(&c) {
            if word.is_empty() {
                continue;
            }
            return Some((word, Some(c)));
        }
        word.push(c);
    }
    if word.is_empty() {
        None
    } else {
        Some((word, None))
    }
}

/// Read the next word and parse it to a type implementing FromStr
pub fn next_value<T>(
    chars: &mut Chars<'_>,
    delimiters: &HashSet<Delimiter>,
) -> Result<(T, Option<Delimiter>), AError>
where
    T: FromStr,
    T::Err: Error + Send + Sync + 'static,
{
    let (word, delimiter) =
        next_word(chars, delimiters).ok_or_else(|| AError::msg("No word left to read"))?;
    word.parse::<T>()
        .map(|value| (value, delimiter))
        .with_context(|| format!("Failed parsing word: '{}'", word))
}
