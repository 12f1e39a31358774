use runner::{ok_identity, process};

type AError = anyhow::Error;
type InitialState = Vec<String>;
type LoadedState = InitialState;
type ProcessedState = i64;

fn main() {
    let file = "test-input.txt";
    //let file = "input.txt";

    let result1 = process(
        file,
        Vec::new(),
        parse_line,
        ok_identity,
        perform_processing_1,
        ok_identity,
    );
    match result1 {
        Ok(res) => println!("Result 1: {:?}", res),
        Err(e) => println!("Error on 1: {}", e),
    }

    let result2 = process(
        file,
        Vec::new(),
        parse_line,
        ok_identity,
        perform_processing_2,
        ok_identity,
    );
    match result2 {
        Ok(res) => println!("Result 2: {:?}", res),
        Err(e) => println!("Error on 2: {}", e),
    }
}

fn parse_line(mut state: InitialState, line: String) -> Result<InitialState, AError> {
    state.push(line);
    Ok(state)
}

fn perform_processing_1(state: LoadedState) -> Result<ProcessedState, AError> {
    Ok(state.len() as i64)
}

fn perform_processing_2(state: LoadedState) -> Result<ProcessedState, AError> {
    Ok(state.len() as i64)
}
