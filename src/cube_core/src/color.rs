use std::fmt::{self, Display};

/// One of the six faces of the cube. Faces are never created or destroyed;
/// the discriminant doubles as the index into per-face tables.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    U,
    D,
    L,
    R,
    F,
    B,
}

/// The color of a single sticker.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    W,
    Y,
    O,
    R,
    G,
    B,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [U, D, L, R, F, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The color every sticker of this face has when the cube is solved.
    #[must_use]
    pub const fn solved_color(self) -> Color {
        match self {
            Face::U => Color::W,
            Face::D => Color::Y,
            Face::L => Color::O,
            Face::R => Color::R,
            Face::F => Color::G,
            Face::B => Color::B,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::L => 'L',
            Face::R => 'R',
            Face::F => 'F',
            Face::B => 'B',
        }
    }

    /// Parse a face letter. Only uppercase letters are accepted.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            _ => None,
        }
    }
}

impl Color {
    pub const ALL: [Self; 6] = {
        use Color::*;
        let v = [W, Y, O, R, G, B];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face whose solved color is `self`. This is the inverse of
    /// [`Face::solved_color`] and is how stickers are named in the facelet
    /// format: after the face they belong to, not the face they sit on.
    #[must_use]
    pub const fn canonical_face(self) -> Face {
        match self {
            Color::W => Face::U,
            Color::Y => Face::D,
            Color::O => Face::L,
            Color::R => Face::R,
            Color::G => Face::F,
            Color::B => Face::B,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Color::W => 'W',
            Color::Y => 'Y',
            Color::O => 'O',
            Color::R => 'R',
            Color::G => 'G',
            Color::B => 'B',
        }
    }

    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'W' => Some(Color::W),
            'Y' => Some(Color::Y),
            'O' => Some(Color::O),
            'R' => Some(Color::R),
            'G' => Some(Color::G),
            'B' => Some(Color::B),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::W => "White",
            Color::Y => "Yellow",
            Color::O => "Orange",
            Color::R => "Red",
            Color::G => "Green",
            Color::B => "Blue",
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
