use std::io::{BufRead, Write};
use crate::error::LookupError;

/// Trims the city and rejects empty or whitespace-only input.
pub fn validate_city(city: &str) -> Result<&str, LookupError> {
    let city = city.trim();
    if city.is_empty() {
        return Err(LookupError::Input("city name must not be empty".to_string()));
    }
    Ok(city)
}

pub fn prompt_for_city<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<String, LookupError> {
    write!(output, "Enter a city name: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(LookupError::Input("no city entered".to_string()));
    }

    validate_city(&line).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_and_trims_city() {
        let mut input = Cursor::new("  Penang \n");
        let mut output = Vec::new();

        let city = prompt_for_city(&mut input, &mut output).unwrap();

        assert_eq!(city, "Penang");
        assert_eq!(String::from_utf8(output).unwrap(), "Enter a city name: ");
    }

    #[test]
    fn whitespace_only_is_an_input_error() {
        let mut input = Cursor::new(" \t\n");
        let res = prompt_for_city(&mut input, &mut Vec::new());
        assert!(matches!(res, Err(LookupError::Input(_))));
    }

    struct BrokenStdin;

    impl std::io::Read for BrokenStdin {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "stdin closed"))
        }
    }

    #[test]
    fn read_failure_is_not_reported_as_a_file_write() {
        let mut input = std::io::BufReader::new(BrokenStdin);
        let err = prompt_for_city(&mut input, &mut Vec::new()).unwrap_err();

        assert!(matches!(err, LookupError::Io(_)));
        let message = err.to_string();
        assert!(message.contains("stdin closed"));
        assert!(!message.contains("output file"));
    }

    #[test]
    fn eof_is_an_input_error() {
        let mut input = Cursor::new("");
        let res = prompt_for_city(&mut input, &mut Vec::new());
        assert!(matches!(res, Err(LookupError::Input(_))));
    }
}
