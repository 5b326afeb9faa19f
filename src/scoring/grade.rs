//! Letter grades derived from the objectivity score.

use serde::Serialize;
use std::fmt;

/// Grade bands: (max score, letter, label, display color).
const GRADE_BANDS: &[(i32, &str, &str, &str)] = &[
    (24, "F", "Slop", "#e74c3c"),
    (44, "D", "Noise", "#e67e22"),
    (64, "C", "Weak", "#f1c40f"),
    (84, "B", "Passable", "#2ecc71"),
    (100, "A", "Solid", "#27ae60"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArticleGrade {
    pub letter: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

impl ArticleGrade {
    /// Grade for a clamped score.
    pub fn for_score(score: i32) -> Self {
        for (max, letter, label, color) in GRADE_BANDS {
            if score <= *max {
                return ArticleGrade {
                    letter,
                    label,
                    color,
                };
            }
        }
        ArticleGrade {
            letter: "A",
            label: "Solid",
            color: "#27ae60",
        }
    }
}

impl fmt::Display for ArticleGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.letter, self.label)
    }
}
