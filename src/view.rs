use crate::chord::{self, ChordKind, ALL_KINDS};
use crate::pitch::PitchClass;
use crate::scale::{self, ScaleDegree, ROW_LEN};

const STEPS_ROW_NAME: &str = "Steps";
const NOTES_ROW_NAME: &str = "Notes";
const FUNCTION_ROW_NAME: &str = "Function";

/// Render the 3-row scale table (steps / notes / function) as
/// fixed-width text with separators between rows.
pub fn scale_table(degrees: &[ScaleDegree; 7]) -> String {
    let steps = scale::steps_row();
    let notes = scale::notes_row(degrees);
    let functions = scale::function_row();

    let name_width = FUNCTION_ROW_NAME.len();
    let widths: [usize; ROW_LEN] = std::array::from_fn(|i| {
        steps[i]
            .len()
            .max(notes[i].len())
            .max(functions[i].len())
            .max(1)
    });

    let separator = make_separator(name_width, &widths);
    let mut out = String::new();
    out.push_str(&separator);
    out.push_str(&make_row(STEPS_ROW_NAME, name_width, &steps, &widths));
    out.push_str(&separator);
    let note_cells: Vec<&str> = notes.iter().map(String::as_str).collect();
    out.push_str(&make_row(NOTES_ROW_NAME, name_width, &note_cells, &widths));
    out.push_str(&separator);
    let function_cells: Vec<&str> = functions.iter().map(String::as_str).collect();
    out.push_str(&make_row(
        FUNCTION_ROW_NAME,
        name_width,
        &function_cells,
        &widths,
    ));
    out.push_str(&separator);
    out
}

fn make_separator(name_width: usize, widths: &[usize; ROW_LEN]) -> String {
    let mut line = format!("+{}", "-".repeat(name_width + 2));
    for &w in widths {
        line.push('+');
        line.push_str(&"-".repeat(w + 2));
    }
    line.push_str("+\n");
    line
}

fn make_row(name: &str, name_width: usize, cells: &[&str], widths: &[usize; ROW_LEN]) -> String {
    let mut line = format!("| {:<name_width$} ", name);
    for (cell, &w) in cells.iter().zip(widths) {
        line.push_str(&format!("| {} ", center(cell, w)));
    }
    line.push_str("|\n");
    line
}

fn center(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.len());
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(pad - left))
}

/// Scale heading plus table, as shown atop every detail view.
pub fn scale_view(tonic: &PitchClass, degrees: &[ScaleDegree; 7]) -> String {
    format!("{} Major Scale:\n{}", tonic.full_name(), scale_table(degrees))
}

/// The four detail lines for one resolved chord.
pub fn chord_block(tonic: &PitchClass, kind: ChordKind, degrees: &[ScaleDegree; 7]) -> String {
    let result = chord::resolve(kind, degrees, tonic);
    format!(
        "Symbol: {}\nChord: {}\nNotes: {}\nIntervals: {}\n",
        result.symbol,
        result.description,
        notes_line(&result.notes),
        intervals_line(&result.notes),
    )
}

fn notes_line(notes: &[&'static PitchClass]) -> String {
    notes
        .iter()
        .map(|n| n.full_name())
        .collect::<Vec<_>>()
        .join(" - ")
}

fn intervals_line(notes: &[&'static PitchClass]) -> String {
    let mut parts = Vec::with_capacity(notes.len() * 2);
    for (i, note) in notes.iter().enumerate() {
        if i > 0 {
            parts.push(format!("[{}]", chord::interval(notes[i - 1], note)));
        }
        parts.push(note.full_name());
    }
    parts.join(" - ")
}

/// Detail view for one chosen chord kind.
pub fn single_chord_view(tonic: &'static PitchClass, kind: ChordKind) -> String {
    let degrees = scale::major_scale(tonic);
    format!(
        "{}\n{}",
        scale_view(tonic, &degrees),
        chord_block(tonic, kind, &degrees)
    )
}

/// Detail view resolving every catalog kind in order.
pub fn all_chords_view(tonic: &'static PitchClass) -> String {
    let degrees = scale::major_scale(tonic);
    let mut out = scale_view(tonic, &degrees);
    out.push('\n');
    for kind in ALL_KINDS {
        out.push_str(&chord_block(tonic, kind, &degrees));
        out.push('\n');
    }
    out
}

/// Detail view for a selection, expanding the `All` pseudo-kind.
pub fn detail_view(tonic: &'static PitchClass, kind: ChordKind) -> String {
    if kind == ChordKind::All {
        all_chords_view(tonic)
    } else {
        single_chord_view(tonic, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pitch;
    use crate::scale::major_scale;

    #[test]
    fn test_table_has_three_content_rows() {
        let tonic = pitch::by_name("C").unwrap();
        let table = scale_table(&major_scale(tonic));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[1].starts_with("| Steps"));
        assert!(lines[3].starts_with("| Notes"));
        assert!(lines[5].starts_with("| Function"));
        for i in [0, 2, 4, 6] {
            assert!(lines[i].starts_with("+-"));
        }
    }

    #[test]
    fn test_table_rows_align() {
        let tonic = pitch::by_name("F#").unwrap();
        let table = scale_table(&major_scale(tonic));
        let mut widths: Vec<usize> = table.lines().map(|l| l.len()).collect();
        widths.dedup();
        assert_eq!(widths.len(), 1);
    }

    #[test]
    fn test_single_chord_view_contents() {
        let tonic = pitch::by_name("C").unwrap();
        let view = single_chord_view(tonic, ChordKind::DominantSeventh);
        assert!(view.starts_with("C Major Scale:\n"));
        assert!(view.contains("Symbol: C7\n"));
        assert!(view.contains("Chord: 1 - 3 - 5 - b7\n"));
        assert!(view.contains("Notes: C - E - G - A#/Bb\n"));
        assert!(view.contains("Intervals: C - [2] - E - [1.5] - G - [1.5] - A#/Bb\n"));
    }

    #[test]
    fn test_all_chords_view_has_every_symbol() {
        let tonic = pitch::by_name("D").unwrap();
        let view = all_chords_view(tonic);
        for kind in ALL_KINDS {
            let suffix = kind.definition().suffix;
            assert!(
                view.contains(&format!("Symbol: D{}\n", suffix)),
                "missing {:?}",
                kind
            );
        }
    }

    #[test]
    fn test_detail_view_expands_all() {
        let tonic = pitch::by_name("C").unwrap();
        assert_eq!(detail_view(tonic, ChordKind::All), all_chords_view(tonic));
        assert_eq!(
            detail_view(tonic, ChordKind::Minor),
            single_chord_view(tonic, ChordKind::Minor)
        );
    }
}
