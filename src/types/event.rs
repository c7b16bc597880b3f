use std::fmt;
use std::fmt::Display;

/// Human label for a floor as used in event text.
pub fn floor_label(floor: u8) -> String {
    match floor {
        0 => "ground".to_string(),
        1 => "1st".to_string(),
        2 => "2nd".to_string(),
        3 => "3rd".to_string(),
        n => format!("{n}th"),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepEvent {
    Move { from: u8, to: u8 },
    DoorsOpen(u8),
}

impl Display for SweepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SweepEvent::Move { from, to } => write!(
                f,
                "Elevator moving from the {} floor to the {} floor.",
                floor_label(*from),
                floor_label(*to)
            ),
            SweepEvent::DoorsOpen(floor) => {
                write!(f, "Opening doors on the {} floor.", floor_label(*floor))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels() {
        let labels: Vec<_> = (0..=10).map(floor_label).collect();
        assert_eq!(
            labels,
            [
                "ground", "1st", "2nd", "3rd", "4th", "5th", "6th", "7th", "8th", "9th", "10th"
            ]
        );
    }

    #[test]
    fn event_text() {
        assert_eq!(
            SweepEvent::Move { from: 0, to: 3 }.to_string(),
            "Elevator moving from the ground floor to the 3rd floor."
        );
        assert_eq!(
            SweepEvent::DoorsOpen(10).to_string(),
            "Opening doors on the 10th floor."
        );
    }
}
