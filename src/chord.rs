use crate::pitch::{LookupError, PitchClass};
use crate::scale::ScaleDegree;

/// Chord qualities buildable from major-scale degrees by picking and
/// flattening. `All` is a pseudo-kind meaning "every quality below".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ChordKind {
    Major,
    Minor,
    Sus2,
    Sus4,
    Diminished,
    MajorSixth,
    MinorSixth,
    MajorSeventh,
    DominantSeventh,
    MinorSeventh,
    MinorMajorSeventh,
    HalfDiminishedSeventh,
    All,
}

/// The resolvable chord kinds in stable catalog order.
pub const ALL_KINDS: [ChordKind; 12] = [
    ChordKind::Major,
    ChordKind::Minor,
    ChordKind::Sus2,
    ChordKind::Sus4,
    ChordKind::Diminished,
    ChordKind::MajorSixth,
    ChordKind::MinorSixth,
    ChordKind::MajorSeventh,
    ChordKind::DominantSeventh,
    ChordKind::MinorSeventh,
    ChordKind::MinorMajorSeventh,
    ChordKind::HalfDiminishedSeventh,
];

/// Static description of one chord quality. `picks` lists which scale
/// degrees the chord uses (0-based position into the 7-degree list) and
/// whether the picked note is flattened after lookup.
#[derive(Debug, Clone, Copy)]
pub struct ChordDefinition {
    pub description: &'static str,
    pub suffix: &'static str,
    pub picks: &'static [(usize, bool)],
}

/// A chord resolved against a concrete scale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordResult {
    pub symbol: String,
    pub description: &'static str,
    pub notes: Vec<&'static PitchClass>,
}

impl ChordKind {
    /// Display name, as shown in the selection list.
    pub fn name(&self) -> &'static str {
        match self {
            ChordKind::Major => "Major",
            ChordKind::Minor => "Minor",
            ChordKind::Sus2 => "Sus2",
            ChordKind::Sus4 => "Sus4",
            ChordKind::Diminished => "Diminished",
            ChordKind::MajorSixth => "Major Sixth",
            ChordKind::MinorSixth => "Minor Sixth",
            ChordKind::MajorSeventh => "Major Seventh",
            ChordKind::DominantSeventh => "Dominant Seventh",
            ChordKind::MinorSeventh => "Minor Seventh",
            ChordKind::MinorMajorSeventh => "Minor Major Seventh",
            ChordKind::HalfDiminishedSeventh => "Half-diminished Seventh",
            ChordKind::All => "All",
        }
    }

    /// Parse a kind from its display name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<ChordKind, LookupError> {
        ALL_KINDS
            .iter()
            .chain(std::iter::once(&ChordKind::All))
            .find(|k| k.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| LookupError::NotFound(name.to_string()))
    }

    /// The static definition behind a resolvable kind. `All` has no
    /// definition of its own; callers expand it via [`ALL_KINDS`].
    pub fn definition(&self) -> &'static ChordDefinition {
        match self {
            ChordKind::Major => &ChordDefinition {
                description: "1 - 3 - 5",
                suffix: "",
                picks: &[(0, false), (2, false), (4, false)],
            },
            ChordKind::Minor => &ChordDefinition {
                description: "1 - b3 - 5",
                suffix: "m",
                picks: &[(0, false), (2, true), (4, false)],
            },
            ChordKind::Sus2 => &ChordDefinition {
                description: "1 - 2 - 5",
                suffix: "sus2",
                picks: &[(0, false), (1, false), (4, false)],
            },
            ChordKind::Sus4 => &ChordDefinition {
                description: "1 - 4 - 5",
                suffix: "sus4",
                picks: &[(0, false), (3, false), (4, false)],
            },
            ChordKind::Diminished => &ChordDefinition {
                description: "1 - b3 - b5",
                suffix: "dim",
                picks: &[(0, false), (2, true), (4, true)],
            },
            ChordKind::MajorSixth => &ChordDefinition {
                description: "1 - 3 - 5 - 6",
                suffix: "6",
                picks: &[(0, false), (2, false), (4, false), (5, false)],
            },
            ChordKind::MinorSixth => &ChordDefinition {
                description: "1 - b3 - 5 - 6",
                suffix: "m6",
                picks: &[(0, false), (2, true), (4, false), (5, false)],
            },
            ChordKind::MajorSeventh => &ChordDefinition {
                description: "1 - 3 - 5 - 7",
                suffix: "maj7",
                picks: &[(0, false), (2, false), (4, false), (6, false)],
            },
            ChordKind::DominantSeventh => &ChordDefinition {
                description: "1 - 3 - 5 - b7",
                suffix: "7",
                picks: &[(0, false), (2, false), (4, false), (6, true)],
            },
            ChordKind::MinorSeventh => &ChordDefinition {
                description: "1 - b3 - 5 - b7",
                suffix: "m7",
                picks: &[(0, false), (2, true), (4, false), (6, true)],
            },
            ChordKind::MinorMajorSeventh => &ChordDefinition {
                description: "1 - b3 - 5 - 7",
                suffix: "mM7",
                picks: &[(0, false), (2, true), (4, false), (6, false)],
            },
            ChordKind::HalfDiminishedSeventh => &ChordDefinition {
                description: "1 - b3 - b5 - b7",
                suffix: "m7b5",
                picks: &[(0, false), (2, true), (4, true), (6, true)],
            },
            ChordKind::All => &ChordDefinition {
                description: "",
                suffix: "",
                picks: &[],
            },
        }
    }
}

/// Resolve a chord kind against a generated scale. Notes come out in
/// pick order; flattening applies to the resolved note, not the degree.
pub fn resolve(
    kind: ChordKind,
    degrees: &[ScaleDegree; 7],
    tonic: &PitchClass,
) -> ChordResult {
    let def = kind.definition();
    let notes = def
        .picks
        .iter()
        .map(|&(pos, flatten)| {
            let note = degrees[pos].note;
            if flatten { note.flat() } else { note }
        })
        .collect();
    ChordResult {
        symbol: format!("{}{}", tonic.full_name(), def.suffix),
        description: def.description,
        notes,
    }
}

/// Interval between two notes in whole steps, ascending (wraps the
/// octave). A minor third comes out as 1.5.
pub fn interval(from: &PitchClass, to: &PitchClass) -> f64 {
    ((to.index as i32 - from.index as i32).rem_euclid(12)) as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch;
    use crate::scale::major_scale;

    fn c_major_degrees() -> [ScaleDegree; 7] {
        major_scale(pitch::by_name("C").unwrap())
    }

    #[test]
    fn test_catalog_invariants() {
        for kind in ALL_KINDS {
            let def = kind.definition();
            assert!(
                def.picks.len() == 3 || def.picks.len() == 4,
                "{:?} has {} picks",
                kind,
                def.picks.len()
            );
            for &(pos, _) in def.picks {
                assert!(pos < 7, "{:?} picks degree position {}", kind, pos);
            }
            assert!(!def.description.is_empty());
        }
    }

    #[test]
    fn test_catalog_order_is_stable() {
        let first: Vec<&str> = ALL_KINDS.iter().map(|k| k.name()).collect();
        let second: Vec<&str> = ALL_KINDS.iter().map(|k| k.name()).collect();
        assert_eq!(first, second);
        assert_eq!(first[0], "Major");
        assert_eq!(ALL_KINDS.len(), 12);
    }

    #[test]
    fn test_c_major_chord() {
        let tonic = pitch::by_name("C").unwrap();
        let result = resolve(ChordKind::Major, &c_major_degrees(), tonic);
        let names: Vec<&str> = result.notes.iter().map(|n| n.name).collect();
        assert_eq!(names, ["C", "E", "G"]);
        assert_eq!(result.symbol, "C");
        assert_eq!(result.description, "1 - 3 - 5");
    }

    #[test]
    fn test_c_minor_chord() {
        let tonic = pitch::by_name("C").unwrap();
        let result = resolve(ChordKind::Minor, &c_major_degrees(), tonic);
        let names: Vec<String> = result.notes.iter().map(|n| n.full_name()).collect();
        assert_eq!(names, ["C", "D#/Eb", "G"]);
        assert_eq!(result.symbol, "Cm");
        assert_eq!(result.description, "1 - b3 - 5");
    }

    #[test]
    fn test_c_dominant_seventh_chord() {
        let tonic = pitch::by_name("C").unwrap();
        let result = resolve(ChordKind::DominantSeventh, &c_major_degrees(), tonic);
        let names: Vec<String> = result.notes.iter().map(|n| n.full_name()).collect();
        assert_eq!(names, ["C", "E", "G", "A#/Bb"]);
        assert_eq!(result.symbol, "C7");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let tonic = pitch::by_name("F#").unwrap();
        let degrees = major_scale(tonic);
        let a = resolve(ChordKind::HalfDiminishedSeventh, &degrees, tonic);
        let b = resolve(ChordKind::HalfDiminishedSeventh, &degrees, tonic);
        assert_eq!(a, b);
    }

    #[test]
    fn test_intervals() {
        let c = pitch::by_name("C").unwrap();
        let e = pitch::by_name("E").unwrap();
        let g = pitch::by_name("G").unwrap();
        assert_eq!(interval(c, e), 2.0);
        assert_eq!(interval(e, g), 1.5);
        // Wraps upward across the octave
        assert_eq!(interval(pitch::by_name("B").unwrap(), c), 0.5);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(ChordKind::from_name("Major").unwrap(), ChordKind::Major);
        assert_eq!(ChordKind::from_name("all").unwrap(), ChordKind::All);
        assert_eq!(
            ChordKind::from_name("Power"),
            Err(crate::pitch::LookupError::NotFound("Power".to_string()))
        );
    }
}
