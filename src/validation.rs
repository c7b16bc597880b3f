use crate::config::{MAX_FLOOR, MIN_FLOOR};
use crate::types::request::FieldError;

fn in_range(floor: i32) -> bool {
    (MIN_FLOOR as i32..=MAX_FLOOR as i32).contains(&floor)
}

/// Runs every field rule against a triple. All rules are evaluated, so a
/// single triple can report several problems at once.
pub fn request_errors(floor: i32, destination: i32, direction: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if !in_range(floor) {
        errors.push(FieldError::FloorOutOfRange);
    }
    if !in_range(destination) {
        errors.push(FieldError::DestinationOutOfRange);
    }
    if floor == destination {
        errors.push(FieldError::SameFloor);
    }
    if direction != "up" && direction != "down" {
        errors.push(FieldError::UnknownDirection);
    }
    if direction == "up" && destination < floor {
        errors.push(FieldError::UpDestinationBelow);
    }
    if direction == "down" && destination > floor {
        errors.push(FieldError::DownDestinationAbove);
    }
    errors
}

/// Renders the diagnostic line recorded for a rejected triple.
pub fn describe(source: &str, errors: &[FieldError]) -> String {
    let joined = errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Error for {source}: {joined}")
}
