// Rotation module
// Role-to-person assignments that repeat week after week

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// People on the roster.
pub const ROSTER: [&str; 3] = ["Ahmed", "Yousef", "Omar"];

/// Who holds which shift for one week.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftAssignment {
    pub first: String,
    pub second: String,
    pub third: String,
}

impl ShiftAssignment {
    pub fn new(
        first: impl Into<String>,
        second: impl Into<String>,
        third: impl Into<String>,
    ) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            third: third.into(),
        }
    }

    /// Names in slot order.
    pub fn people(&self) -> [&str; 3] {
        [&self.first, &self.second, &self.third]
    }

    /// True if `person` holds any of the three slots.
    pub fn involves(&self, person: &str) -> bool {
        self.people().contains(&person)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RotationError {
    #[error("rotation cycle must contain at least one assignment")]
    Empty,
    #[error("assignment {index} names the same person in more than one slot")]
    DuplicatePerson { index: usize },
    #[error("assignment {index} has an empty name")]
    EmptyName { index: usize },
}

/// Repeating pattern of assignments; week `i` uses `cycle[i % len]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationCycle {
    assignments: Vec<ShiftAssignment>,
}

impl RotationCycle {
    pub fn new(assignments: Vec<ShiftAssignment>) -> Result<Self, RotationError> {
        if assignments.is_empty() {
            return Err(RotationError::Empty);
        }

        for (index, assignment) in assignments.iter().enumerate() {
            let [a, b, c] = assignment.people();
            if a.trim().is_empty() || b.trim().is_empty() || c.trim().is_empty() {
                return Err(RotationError::EmptyName { index });
            }
            if a == b || b == c || a == c {
                return Err(RotationError::DuplicatePerson { index });
            }
        }

        Ok(Self { assignments })
    }

    /// Assignment for the zero-based week index.
    pub fn assignment_for(&self, week_index: usize) -> &ShiftAssignment {
        &self.assignments[week_index % self.assignments.len()]
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn assignments(&self) -> &[ShiftAssignment] {
        &self.assignments
    }
}

impl Default for RotationCycle {
    fn default() -> Self {
        let [ahmed, yousef, omar] = ROSTER;
        Self {
            assignments: vec![
                ShiftAssignment::new(ahmed, yousef, omar),
                ShiftAssignment::new(yousef, omar, ahmed),
                ShiftAssignment::new(omar, ahmed, yousef),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cycle_rotates_every_slot() {
        let cycle = RotationCycle::default();
        assert_eq!(cycle.len(), 3);
        assert_eq!(cycle.assignment_for(0).first, "Ahmed");
        assert_eq!(cycle.assignment_for(1).first, "Yousef");
        assert_eq!(cycle.assignment_for(2).first, "Omar");
        assert_eq!(cycle.assignment_for(3), cycle.assignment_for(0));
    }

    #[test]
    fn test_default_cycle_gives_everyone_every_role_once() {
        let cycle = RotationCycle::default();
        for person in ROSTER {
            let firsts = cycle.assignments().iter().filter(|a| a.first == person).count();
            let seconds = cycle.assignments().iter().filter(|a| a.second == person).count();
            let thirds = cycle.assignments().iter().filter(|a| a.third == person).count();
            assert_eq!((firsts, seconds, thirds), (1, 1, 1), "{person}");
        }
    }

    #[test]
    fn test_new_rejects_empty_cycle() {
        assert_eq!(RotationCycle::new(vec![]), Err(RotationError::Empty));
    }

    #[test]
    fn test_new_rejects_duplicate_person() {
        let result = RotationCycle::new(vec![
            ShiftAssignment::new("A", "B", "C"),
            ShiftAssignment::new("A", "A", "C"),
        ]);
        assert_eq!(result, Err(RotationError::DuplicatePerson { index: 1 }));
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let result = RotationCycle::new(vec![ShiftAssignment::new("A", " ", "C")]);
        assert_eq!(result, Err(RotationError::EmptyName { index: 0 }));
    }

    #[test]
    fn test_involves_is_exact_match() {
        let assignment = ShiftAssignment::new("Ahmed", "Yousef", "Omar");
        assert!(assignment.involves("Omar"));
        assert!(!assignment.involves("omar"));
        assert!(!assignment.involves("Om"));
    }
}
