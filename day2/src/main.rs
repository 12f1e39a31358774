use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use runner::{next_word, ok_identity, process};
use thiserror::Error;

type AError = anyhow::Error;
type InitialState = Vec<Record>;
type LoadedState = InitialState;
type ProcessedState = i64;

//colour -> number of cubes shown in one semicolon-delimited draw
type Round = HashMap<String, i64>;

#[derive(Debug, PartialEq, Eq)]
struct Record {
    id: i64,
    rounds: Vec<Round>,
}

#[derive(Debug, Error)]
enum RecordError {
    #[error("malformed record '{line}': {reason}")]
    Malformed { line: String, reason: String },
    #[error("unknown colour '{colour}'")]
    UnknownColour { colour: String },
}

fn main() {
    //let file = "test-input.txt";
    let file = "input.txt";

    match solve_part1(file) {
        Ok(res) => println!("Result 1: {:?}", res),
        Err(e) => println!("Error on 1: {}", e),
    }

    match solve_part2(file) {
        Ok(res) => println!("Result 2: {:?}", res),
        Err(e) => println!("Error on 2: {}", e),
    }
}

fn solve_part1(file: &str) -> Result<i64, AError> {
    process(
        file,
        Vec::new(),
        parse_line,
        ok_identity,
        perform_processing_1,
        ok_identity,
    )
}

fn solve_part2(file: &str) -> Result<i64, AError> {
    process(
        file,
        Vec::new(),
        parse_line,
        ok_identity,
        perform_processing_2,
        ok_identity,
    )
}

static DELIMITERS: Lazy<HashSet<char>> = Lazy::new(|| HashSet::from([' ', ':', ',', ';']));

static GAME_LIMITS: Lazy<HashMap<String, i64>> = Lazy::new(|| {
    HashMap::from([
        ("red".to_string(), 12),
        ("green".to_string(), 13),
        ("blue".to_string(), 14),
    ])
});

fn parse_line(mut state: InitialState, line: String) -> Result<InitialState, AError> {
    //Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
    let (_prefix, body) = line.split_once(':').ok_or_else(|| RecordError::Malformed {
        line: line.clone(),
        reason: "no ':' after the game prefix".to_string(),
    })?;

    //The printed game number is not trusted: ids follow line order.
    let id = state.len() as i64 + 1;

    let mut rounds: Vec<Round> = Vec::new();
    let mut observations = Round::new();

    let mut chars = body.chars();
    while let Some((count_word, _)) = next_word(&mut chars, &DELIMITERS) {
        let count: i64 = count_word.parse().map_err(|_| RecordError::Malformed {
            line: line.clone(),
            reason: format!("'{}' is not a count", count_word),
        })?;
        let (colour, delimiter) =
            next_word(&mut chars, &DELIMITERS).ok_or_else(|| RecordError::Malformed {
                line: line.clone(),
                reason: format!("no colour after count {}", count),
            })?;
        observations.insert(colour.to_lowercase(), count);
        let end_of_round = delimiter.map(|c| c == ';').unwrap_or(true);
        if end_of_round {
            rounds.push(observations);
            observations = Round::new();
        }
    }

    state.push(Record { id, rounds });
    Ok(state)
}

fn record_is_feasible(record: &Record, limits: &HashMap<String, i64>) -> Result<bool, AError> {
    for round in record.rounds.iter() {
        for (colour, count) in round.iter() {
            let limit = limits
                .get(colour)
                .ok_or_else(|| RecordError::UnknownColour {
                    colour: colour.clone(),
                })?;
            if *count < 0 || *count > *limit {
                return Ok(false);
            }
        }
    }
    Ok(true)
}

//largest count seen per colour across all rounds, starting from 0
fn colour_maxima(record: &Record) -> Result<HashMap<String, i64>, AError> {
    let mut maxima: HashMap<String, i64> = HashMap::from([
        ("red".to_string(), 0),
        ("green".to_string(), 0),
        ("blue".to_string(), 0),
    ]);
    for round in record.rounds.iter() {
        for (colour, count) in round.iter() {
            let maximum = maxima
                .get_mut(colour)
                .ok_or_else(|| RecordError::UnknownColour {
                    colour: colour.clone(),
                })?;
            if *count > *maximum {
                *maximum = *count;
            }
        }
    }
    Ok(maxima)
}

fn minimal_power(record: &Record) -> Result<i64, AError> {
    let maxima = colour_maxima(record)?;
    Ok(maxima.values().product())
}

fn perform_processing_1(state: LoadedState) -> Result<ProcessedState, AError> {
    let mut sum_of_ids = 0;
    for record in state.iter() {
        if record_is_feasible(record, &GAME_LIMITS)? {
            //println!("Feasible: {:?}", record);
            sum_of_ids += record.id;
        }
    }
    Ok(sum_of_ids)
}

fn perform_processing_2(state: LoadedState) -> Result<ProcessedState, AError> {
    let mut sum_of_powers = 0;
    for record in state.iter() {
        sum_of_powers += minimal_power(record)?;
    }
    Ok(sum_of_powers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(line: &str) -> Record {
        let mut state = parse_line(Vec::new(), line.to_string()).unwrap();
        state.pop().unwrap()
    }

    #[test]
    fn parsing_is_idempotent() {
        let line = "Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green";
        assert_eq!(parse_one(line), parse_one(line));
    }

    #[test]
    fn ids_follow_line_position() {
        let state = parse_line(Vec::new(), "Game 7: 1 red".to_string()).unwrap();
        let state = parse_line(state, "Game 9: 2 blue".to_string()).unwrap();
        let ids: Vec<i64> = state.iter().map(|record| record.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn colours_are_normalised_to_lowercase() {
        let record = parse_one("Game 1: 3 Blue, 4 RED");
        assert_eq!(record.rounds.len(), 1);
        assert_eq!(record.rounds[0].get("blue"), Some(&3));
        assert_eq!(record.rounds[0].get("red"), Some(&4));
    }

    #[test]
    fn duplicate_colour_keeps_last_value() {
        let record = parse_one("Game 1: 1 red, 2 red");
        assert_eq!(record.rounds.len(), 1);
        assert_eq!(record.rounds[0].get("red"), Some(&2));
    }

    #[test]
    fn empty_record_is_feasible_with_zero_power() {
        let record = parse_one("Game 5:");
        assert!(record.rounds.is_empty());
        assert!(record_is_feasible(&record, &GAME_LIMITS).unwrap());
        assert_eq!(minimal_power(&record).unwrap(), 0);
    }

    #[test]
    fn example_record_power_is_48() {
        let record = parse_one("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green");
        assert_eq!(minimal_power(&record).unwrap(), 48);
    }

    #[test]
    fn within_limits_record_is_feasible() {
        let record = parse_one("Game 1: 1 green, 3 red; 6 red, 1 blue, 2 green");
        assert!(record_is_feasible(&record, &GAME_LIMITS).unwrap());
    }

    #[test]
    fn count_over_limit_is_infeasible() {
        let record = parse_one("Game 2: 20 red, 8 blue");
        assert!(!record_is_feasible(&record, &GAME_LIMITS).unwrap());
    }

    #[test]
    fn negative_count_is_infeasible() {
        let record = parse_one("Game 1: -3 red");
        assert!(!record_is_feasible(&record, &GAME_LIMITS).unwrap());
    }

    #[test]
    fn colour_maxima_never_decrease() {
        let full = parse_one("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green");
        let mut record = Record {
            id: 1,
            rounds: Vec::new(),
        };
        let mut previous = colour_maxima(&record).unwrap();
        for round in full.rounds {
            record.rounds.push(round);
            let current = colour_maxima(&record).unwrap();
            for (colour, max) in previous.iter() {
                assert!(current[colour] >= *max);
            }
            previous = current;
        }
    }

    #[test]
    fn unknown_colour_is_an_error() {
        let record = parse_one("Game 1: 3 yellow");
        let feasibility = record_is_feasible(&record, &GAME_LIMITS);
        assert!(format!("{}", feasibility.unwrap_err()).contains("yellow"));
        let power = minimal_power(&record);
        assert!(format!("{}", power.unwrap_err()).contains("yellow"));
    }

    #[test]
    fn malformed_record_is_an_error() {
        assert!(parse_line(Vec::new(), "no colon here".to_string()).is_err());
        assert!(parse_line(Vec::new(), "Game 1: x red".to_string()).is_err());
        assert!(parse_line(Vec::new(), "Game 1: 3".to_string()).is_err());
    }

    #[test]
    fn part1_sums_feasible_game_ids() {
        assert_eq!(solve_part1("test-input.txt").unwrap(), 8);
    }

    #[test]
    fn part2_sums_minimal_powers() {
        assert_eq!(solve_part2("test-input.txt").unwrap(), 2286);
    }
}
