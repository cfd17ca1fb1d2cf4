use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
};

/// One of the six faces of the cube.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Down,
    Front,
    Back,
    Left,
    Right,
}

impl Face {
    pub const ALL: [Self; 6] = {
        use Face::*;
        let v = [Up, Down, Front, Back, Left, Right];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    /// The face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
        }
    }

    /// The color every sticker of this face holds when the cube is solved.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Front => 'F',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Right => 'R',
        }
    }
}

impl Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// The six sticker colors. Each face owns exactly one.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Orange,
    Red,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// The face whose solved stickers carry this color.
    #[must_use]
    pub const fn home_face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Yellow => Face::Down,
            Color::Green => Face::Front,
            Color::Blue => Face::Back,
            Color::Orange => Face::Left,
            Color::Red => Face::Right,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Orange => "orange",
            Color::Red => "red",
        };
        f.write_str(name)
    }
}

/// A value for every face, stored inline and indexed by [`Face`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceMap<T>([T; 6]);

impl<T> FaceMap<T> {
    pub fn from_fn(f: impl FnMut(Face) -> T) -> Self {
        FaceMap(Face::ALL.map(f))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(&self.0)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, index: Face) -> &Self::Output {
        &self.0[index as usize]
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, index: Face) -> &mut Self::Output {
        &mut self.0[index as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposites_are_involutions() {
        for face in Face::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
    }

    #[test]
    fn test_palette_is_a_bijection() {
        for face in Face::ALL {
            assert_eq!(face.color().home_face(), face);
        }
        for color in Color::ALL {
            assert_eq!(color.home_face().color(), color);
        }
    }

    #[test]
    fn test_face_map_indexing() {
        let mut map = FaceMap::from_fn(Face::letter);
        assert_eq!(map[Face::Back], 'B');
        map[Face::Back] = 'x';
        assert_eq!(map.iter().map(|(_, &c)| c).collect::<String>(), "UDFxLR");
    }
}
