use seabattle::{parse_command, parse_coordinates, Command, InputError};

#[test]
fn test_parse_coordinates_separators() {
    assert_eq!(parse_coordinates("3,4"), Ok((3, 4)));
    assert_eq!(parse_coordinates("3 4"), Ok((3, 4)));
    assert_eq!(parse_coordinates("  0 ,  9 "), Ok((0, 9)));
    assert_eq!(parse_coordinates("9\t9"), Ok((9, 9)));
}

#[test]
fn test_parse_coordinates_errors() {
    assert_eq!(parse_coordinates(""), Err(InputError::Empty));
    assert_eq!(parse_coordinates(" , "), Err(InputError::Empty));
    assert_eq!(parse_coordinates("5"), Err(InputError::WrongArity(1)));
    assert_eq!(parse_coordinates("1 2 3"), Err(InputError::WrongArity(3)));
    assert_eq!(parse_coordinates("a,b"), Err(InputError::NotANumber));
    assert_eq!(parse_coordinates("1,x"), Err(InputError::NotANumber));
    assert_eq!(parse_coordinates("10,0"), Err(InputError::OutOfRange(10)));
    assert_eq!(parse_coordinates("0,-1"), Err(InputError::OutOfRange(-1)));
}

#[test]
fn test_parse_command() {
    assert_eq!(parse_command("q\n"), Ok(Command::Quit));
    assert_eq!(parse_command("quit"), Ok(Command::Quit));
    assert_eq!(parse_command("h"), Ok(Command::Help));
    assert_eq!(parse_command("?"), Ok(Command::Help));
    assert_eq!(parse_command(" p "), Ok(Command::Print));
    assert_eq!(parse_command("2, 7\n"), Ok(Command::Shoot { row: 2, col: 7 }));
    assert_eq!(parse_command("x"), Err(InputError::WrongArity(1)));
}

#[test]
fn test_error_messages() {
    assert!(InputError::OutOfRange(12).to_string().starts_with("Incorrect coordinates"));
    assert!(InputError::WrongArity(1).to_string().ends_with("Try again!"));
}
