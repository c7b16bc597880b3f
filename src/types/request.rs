use std::fmt;
use std::fmt::Display;

use crate::validation::request_errors;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn flipped(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}

impl TryFrom<&str> for Direction {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            other => anyhow::bail!("unknown direction: '{other}'"),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
        }
    }
}

/// A triple as it came off the wire, before any field checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRequest {
    pub floor: i32,
    pub direction: String,
    pub destination: i32,
    /// The triple exactly as it was typed, braces included.
    pub source: String,
}

impl RawRequest {
    pub fn new(floor: i32, direction: &str, destination: i32) -> Self {
        RawRequest {
            floor,
            direction: direction.to_string(),
            destination,
            source: format!("{{{floor},'{direction}',{destination}}}"),
        }
    }

    pub fn validate(&self) -> Result<Request, Vec<FieldError>> {
        let errors = request_errors(self.floor, self.destination, &self.direction);
        if !errors.is_empty() {
            return Err(errors);
        }
        // every check passed, so both floors are in range and the word is known
        let direction = Direction::try_from(self.direction.as_str())
            .map_err(|_| vec![FieldError::UnknownDirection])?;
        Ok(Request {
            origin: self.floor as u8,
            direction,
            destination: self.destination as u8,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub origin: u8,
    pub direction: Direction,
    pub destination: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    FloorOutOfRange,
    DestinationOutOfRange,
    SameFloor,
    UnknownDirection,
    UpDestinationBelow,
    DownDestinationAbove,
}

impl Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::FloorOutOfRange => write!(f, "Floor must be between 0 and 10"),
            FieldError::DestinationOutOfRange => write!(f, "Destination must be between 0 and 10"),
            FieldError::SameFloor => write!(f, "Floor and destination must be different"),
            FieldError::UnknownDirection => write!(f, "Direction must be 'up' or 'down'"),
            FieldError::UpDestinationBelow => write!(
                f,
                "Destination must be above the onboarding floor for 'up' requests"
            ),
            FieldError::DownDestinationAbove => write!(
                f,
                "Destination must be below the onboarding floor for 'down' requests"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_words() {
        assert_eq!(Direction::try_from("up").unwrap(), Direction::Up);
        assert_eq!(Direction::try_from("down").unwrap(), Direction::Down);
        assert!(Direction::try_from("Up").is_err());
        assert_eq!(Direction::Up.flipped(), Direction::Down);
    }

    #[test]
    fn validate_builds_typed_request() {
        let request = RawRequest::new(2, "down", 1).validate().unwrap();
        assert_eq!(
            request,
            Request {
                origin: 2,
                direction: Direction::Down,
                destination: 1
            }
        );
    }

    #[test]
    fn validate_returns_every_error() {
        let errors = RawRequest::new(13, "middle", 13).validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::FloorOutOfRange,
                FieldError::DestinationOutOfRange,
                FieldError::SameFloor,
                FieldError::UnknownDirection,
            ]
        );
    }

    #[test]
    fn raw_request_source_text() {
        assert_eq!(RawRequest::new(0, "up", 3).source, "{0,'up',3}");
    }
}
