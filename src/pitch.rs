use thiserror::Error;

/// A pitch class in the 12-tone chromatic scale, with its canonical
/// name and, for the black keys, the enharmonic alternate spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PitchClass {
    pub index: u8,
    pub name: &'static str,
    pub alternate: Option<&'static str>,
}

/// The chromatic scale, ordered by semitone index from C.
pub static PITCH_CLASSES: [PitchClass; 12] = [
    pc(0, "C", None),
    pc(1, "C#", Some("Db")),
    pc(2, "D", None),
    pc(3, "D#", Some("Eb")),
    pc(4, "E", None),
    pc(5, "F", None),
    pc(6, "F#", Some("Gb")),
    pc(7, "G", None),
    pc(8, "G#", Some("Ab")),
    pc(9, "A", None),
    pc(10, "A#", Some("Bb")),
    pc(11, "B", None),
];

const fn pc(index: u8, name: &'static str, alternate: Option<&'static str>) -> PitchClass {
    PitchClass {
        index,
        name,
        alternate,
    }
}

/// Failure of a name lookup against a fixed catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no such name: {0}")]
    NotFound(String),
}

impl PitchClass {
    /// Display name: "C" for naturals, "C#/Db" for the black keys.
    pub fn full_name(&self) -> String {
        match self.alternate {
            Some(alt) => format!("{}/{}", self.name, alt),
            None => self.name.to_string(),
        }
    }

    /// The pitch class one semitone down. Always defined (wraps C to B).
    pub fn flat(&self) -> &'static PitchClass {
        by_index(self.index as i32 + 11)
    }
}

/// All 12 pitch classes in index order.
pub fn all() -> &'static [PitchClass; 12] {
    &PITCH_CLASSES
}

/// Pitch class for a semitone index, total over any integer (mod 12).
pub fn by_index(index: i32) -> &'static PitchClass {
    &PITCH_CLASSES[index.rem_euclid(12) as usize]
}

/// Look up a pitch class by its primary or alternate spelling.
/// Case-sensitive; unknown names are a recoverable error.
pub fn by_name(name: &str) -> Result<&'static PitchClass, LookupError> {
    PITCH_CLASSES
        .iter()
        .find(|p| p.name == name || p.alternate == Some(name))
        .ok_or_else(|| LookupError::NotFound(name.to_string()))
}
