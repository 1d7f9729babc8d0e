use crate::pitch::{self, PitchClass};

/// Major-scale step pattern in semitones: whole, whole, half, whole,
/// whole, whole, half. Sums to one octave.
pub const STEPS: [u8; 7] = [2, 2, 1, 2, 2, 2, 1];

/// Number of cells in a scale display row: 8 note slots (degrees 1-7
/// plus the octave) interleaved with 7 step-gap slots.
pub const ROW_LEN: usize = 15;

/// A note of a scale tagged with its 1-based degree ("function").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleDegree {
    pub function: u8,
    pub note: &'static PitchClass,
}

/// Derive the 7 degrees of the major scale on the given tonic.
pub fn major_scale(tonic: &PitchClass) -> [ScaleDegree; 7] {
    let mut offset: u8 = 0;
    std::array::from_fn(|i| {
        if i > 0 {
            offset += STEPS[i - 1];
        }
        ScaleDegree {
            function: i as u8 + 1,
            note: pitch::by_index(tonic.index as i32 + offset as i32),
        }
    })
}

/// Contents of the "Steps" display row. Even slots sit under notes and
/// stay blank; odd slots carry the step size between neighbours.
pub fn steps_row() -> [&'static str; ROW_LEN] {
    std::array::from_fn(|i| {
        if i % 2 == 0 {
            ""
        } else if i == 5 || i == 13 {
            "1/2"
        } else {
            "1"
        }
    })
}

/// Contents of the "Notes" display row for a scale. The final slot
/// repeats the tonic an octave up.
pub fn notes_row(degrees: &[ScaleDegree; 7]) -> [String; ROW_LEN] {
    std::array::from_fn(|i| {
        if i % 2 != 0 {
            return String::new();
        }
        let function = i / 2;
        degrees[function % 7].note.full_name()
    })
}

/// Contents of the "Function" display row: degree numbers, with the
/// octave slot labelled "8/1".
pub fn function_row() -> [String; ROW_LEN] {
    std::array::from_fn(|i| {
        if i % 2 != 0 {
            return String::new();
        }
        let function = i / 2 + 1;
        if function == 8 {
            "8/1".to_string()
        } else {
            function.to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_close_the_octave() {
        assert_eq!(STEPS.iter().map(|&s| s as u32).sum::<u32>(), 12);
    }

    #[test]
    fn test_c_major_scale() {
        let tonic = pitch::by_name("C").unwrap();
        let names: Vec<&str> = major_scale(tonic).iter().map(|d| d.note.name).collect();
        assert_eq!(names, ["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn test_every_tonic_yields_seven_distinct_degrees() {
        for tonic in pitch::all() {
            let degrees = major_scale(tonic);
            assert_eq!(degrees[0].note.index, tonic.index);
            for (i, d) in degrees.iter().enumerate() {
                assert_eq!(d.function as usize, i + 1);
                for other in &degrees[i + 1..] {
                    assert_ne!(d.note.index, other.note.index);
                }
            }
        }
    }

    #[test]
    fn test_steps_row_marks_half_steps() {
        let row = steps_row();
        for (i, cell) in row.iter().enumerate() {
            if i % 2 == 0 {
                assert_eq!(*cell, "");
            } else if i == 5 || i == 13 {
                assert_eq!(*cell, "1/2");
            } else {
                assert_eq!(*cell, "1");
            }
        }
    }

    #[test]
    fn test_notes_row_repeats_tonic_at_octave() {
        let tonic = pitch::by_name("D").unwrap();
        let row = notes_row(&major_scale(tonic));
        assert_eq!(row[0], "D");
        assert_eq!(row[14], "D");
        assert_eq!(row[1], "");
    }

    #[test]
    fn test_function_row_labels_octave() {
        let row = function_row();
        assert_eq!(row[0], "1");
        assert_eq!(row[12], "7");
        assert_eq!(row[14], "8/1");
    }
}
