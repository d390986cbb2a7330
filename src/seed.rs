//! Reference catalog: the 17 SDG goals and the illustrative synergy graph
//! between them. Strength values are directional and application-specific;
//! goal 17 (Partnerships) radiates a weak positive influence to every other
//! goal.

use crate::types::catalog::{Category, Relationship};

const GOALS: [(i64, &str, &str); 17] = [
    (1, "No Poverty", "#e5243b"),
    (2, "Zero Hunger", "#dda63a"),
    (3, "Good Health and Well-being", "#4c9f38"),
    (4, "Quality Education", "#c5192d"),
    (5, "Gender Equality", "#ff3a21"),
    (6, "Clean Water and Sanitation", "#26bde2"),
    (7, "Affordable and Clean Energy", "#fcc30b"),
    (8, "Decent Work and Economic Growth", "#a21942"),
    (9, "Industry, Innovation and Infrastructure", "#fd6925"),
    (10, "Reduced Inequalities", "#dd1367"),
    (11, "Sustainable Cities and Communities", "#fd9d24"),
    (12, "Responsible Consumption and Production", "#bf8b2e"),
    (13, "Climate Action", "#3f7e44"),
    (14, "Life Below Water", "#0a97d9"),
    (15, "Life on Land", "#56c02b"),
    (16, "Peace, Justice and Strong Institutions", "#00689d"),
    (17, "Partnerships for the Goals", "#19486a"),
];

const SYNERGIES: [(i64, i64, f64); 60] = [
    (1, 2, 0.8),
    (1, 3, 0.7),
    (1, 4, 0.7),
    (1, 5, 0.6),
    (1, 6, 0.5),
    (1, 8, 0.9),
    (1, 10, 0.9),
    (1, 16, 0.5),
    (2, 1, 0.8),
    (2, 3, 0.9),
    (2, 4, 0.6),
    (2, 15, 0.5),
    (3, 1, 0.7),
    (3, 2, 0.9),
    (3, 4, 0.7),
    (3, 5, 0.6),
    (3, 6, 0.8),
    (3, 8, 0.6),
    (4, 1, 0.7),
    (4, 3, 0.7),
    (4, 5, 0.8),
    (4, 8, 0.8),
    (4, 10, 0.7),
    (4, 16, 0.6),
    (5, 1, 0.6),
    (5, 3, 0.6),
    (5, 4, 0.8),
    (5, 8, 0.7),
    (5, 10, 0.8),
    (6, 3, 0.8),
    (6, 11, 0.5),
    (6, 14, 0.6),
    (6, 15, 0.6),
    (7, 8, 0.7),
    (7, 9, 0.8),
    (7, 11, 0.6),
    (7, 12, 0.5),
    (7, 13, 0.8),
    (8, 1, 0.9),
    (8, 9, 0.7),
    (8, 10, 0.7),
    (9, 7, 0.6),
    (9, 8, 0.7),
    (9, 11, 0.8),
    (11, 1, 0.6),
    (11, 6, 0.5),
    (11, 7, 0.6),
    (11, 9, 0.8),
    (11, 12, 0.7),
    (12, 6, 0.5),
    (12, 7, 0.5),
    (12, 13, 0.7),
    (12, 14, 0.6),
    (12, 15, 0.6),
    (13, 7, 0.7),
    (13, 11, 0.5),
    (13, 14, 0.8),
    (13, 15, 0.8),
    (16, 1, 0.5),
    (16, 8, 0.6),
];

/// Strength of the partnerships goal's broadcast edge to every other goal.
const PARTNERSHIP_STRENGTH: f64 = 0.2;

pub fn categories() -> Vec<Category> {
    GOALS
        .iter()
        .map(|(id, name, color)| Category {
            id: *id,
            number: *id as u32,
            name: (*name).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

pub fn relationships() -> Vec<Relationship> {
    let mut edges: Vec<Relationship> = SYNERGIES
        .iter()
        .map(|(source, target, strength)| Relationship {
            source: *source,
            target: *target,
            strength: *strength,
        })
        .collect();
    for (target, _, _) in GOALS.iter().take(16) {
        edges.push(Relationship {
            source: 17,
            target: *target,
            strength: PARTNERSHIP_STRENGTH,
        });
    }
    edges
}
