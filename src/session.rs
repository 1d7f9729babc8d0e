use crate::chord::ChordKind;
use crate::pitch::{self, PitchClass};
use crate::view;

/// Screens of the interactive flow, in the order the user visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    SelectTonic,
    SelectChordKind,
    ShowDetail,
    Quitting,
}

/// Inputs the session reacts to. Terminal keys and resize notifications
/// are mapped to these by the event loop; anything else never reaches
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Up,
    Down,
    PageUp,
    PageDown,
    Confirm,
    Cancel,
    Resize(u16, u16),
}

/// Entries of the chord-kind selection list: every resolvable kind in
/// catalog order, with the `All` pseudo-kind last.
pub const KIND_LIST: [ChordKind; 13] = [
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
    ChordKind::All,
];

/// Lines reserved above and below the detail viewport (header, footer).
const DETAIL_CHROME_HEIGHT: u16 = 2;

/// State of one interactive run. Mutated only by [`Session::handle`],
/// one event at a time.
pub struct Session {
    pub state: State,
    pub tonic_cursor: usize,
    pub chord_cursor: usize,
    pub selected_tonic: Option<&'static PitchClass>,
    pub selected_kind: Option<ChordKind>,
    pub detail: String,
    pub scroll: u16,
    pub width: u16,
    pub height: u16,
}

impl Session {
    /// A fresh session on the tonic screen, highlighting C.
    pub fn new() -> Self {
        Session {
            state: State::SelectTonic,
            tonic_cursor: 0,
            chord_cursor: 0,
            selected_tonic: None,
            selected_kind: None,
            detail: String::new(),
            scroll: 0,
            width: 0,
            height: 0,
        }
    }

    /// Apply one input event. Events with no meaning in the current
    /// state are no-ops.
    pub fn handle(&mut self, event: Event) {
        // Cancel and resize are global: same handling in every state.
        match event {
            Event::Cancel => {
                self.state = State::Quitting;
                return;
            }
            Event::Resize(width, height) => {
                self.width = width;
                self.height = height;
                self.scroll = self.scroll.min(self.max_scroll());
                return;
            }
            _ => {}
        }

        match self.state {
            State::SelectTonic => match event {
                Event::Up => self.tonic_cursor = self.tonic_cursor.saturating_sub(1),
                Event::Down => {
                    self.tonic_cursor = (self.tonic_cursor + 1).min(pitch::all().len() - 1)
                }
                Event::Confirm => {
                    self.selected_tonic = Some(&pitch::all()[self.tonic_cursor]);
                    self.state = State::SelectChordKind;
                }
                _ => {}
            },
            State::SelectChordKind => match event {
                Event::Up => self.chord_cursor = self.chord_cursor.saturating_sub(1),
                Event::Down => {
                    self.chord_cursor = (self.chord_cursor + 1).min(KIND_LIST.len() - 1)
                }
                Event::Confirm => {
                    let kind = KIND_LIST[self.chord_cursor];
                    // A confirmed kind implies a confirmed tonic.
                    let tonic = self.selected_tonic.unwrap_or(&pitch::all()[0]);
                    self.selected_kind = Some(kind);
                    self.detail = view::detail_view(tonic, kind);
                    self.scroll = 0;
                    self.state = State::ShowDetail;
                }
                _ => {}
            },
            State::ShowDetail => match event {
                Event::Confirm => {
                    self.tonic_cursor = 0;
                    self.chord_cursor = 0;
                    self.state = State::SelectTonic;
                }
                Event::Up => self.scroll = self.scroll.saturating_sub(1),
                Event::Down => self.scroll = (self.scroll + 1).min(self.max_scroll()),
                Event::PageUp => {
                    self.scroll = self.scroll.saturating_sub(self.viewport_height())
                }
                Event::PageDown => {
                    self.scroll = self
                        .scroll
                        .saturating_add(self.viewport_height())
                        .min(self.max_scroll())
                }
                _ => {}
            },
            State::Quitting => {}
        }
    }

    /// Detail-list title shown on the chord-kind screen.
    pub fn chord_list_title(&self) -> String {
        match self.selected_tonic {
            Some(tonic) => format!("Chords in {} Major", tonic.full_name()),
            None => "Chords".to_string(),
        }
    }

    /// Header above the detail viewport.
    pub fn header_text(&self) -> &'static str {
        match self.selected_kind {
            Some(ChordKind::All) => "Chords",
            _ => "Chord",
        }
    }

    /// Rows available to the detail viewport under the current geometry.
    pub fn viewport_height(&self) -> u16 {
        self.height.saturating_sub(DETAIL_CHROME_HEIGHT)
    }

    /// How far the detail content can scroll before its last line shows.
    pub fn max_scroll(&self) -> u16 {
        let lines = self.detail.lines().count() as u16;
        lines.saturating_sub(self.viewport_height())
    }

    /// Fraction of the scrollable range consumed, for the footer.
    pub fn scroll_percent(&self) -> f64 {
        let max = self.max_scroll();
        if max == 0 {
            1.0
        } else {
            self.scroll as f64 / max as f64
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
