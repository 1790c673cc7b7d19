use super::board::Cell;

/// The two disc colors. Red belongs to the first player and always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    Red,
    Yellow,
}

impl Disc {
    /// Get the other color
    pub fn other(self) -> Disc {
        match self {
            Disc::Red => Disc::Yellow,
            Disc::Yellow => Disc::Red,
        }
    }

    /// Convert disc to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Disc::Red => Cell::Red,
            Disc::Yellow => Cell::Yellow,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Disc::Red => "Red",
            Disc::Yellow => "Yellow",
        }
    }
}

/// A named participant with a fixed disc and a running point total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    disc: Disc,
    points: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, disc: Disc) -> Self {
        Player {
            name: name.into(),
            disc,
            points: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn disc(&self) -> Disc {
        self.disc
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub(crate) fn award(&mut self, points: u32) {
        self.points += points;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_disc() {
        assert_eq!(Disc::Red.other(), Disc::Yellow);
        assert_eq!(Disc::Yellow.other(), Disc::Red);
    }

    #[test]
    fn test_disc_name() {
        assert_eq!(Disc::Red.name(), "Red");
        assert_eq!(Disc::Yellow.name(), "Yellow");
    }

    #[test]
    fn test_disc_to_cell() {
        assert_eq!(Disc::Red.to_cell(), Cell::Red);
        assert_eq!(Disc::Yellow.to_cell(), Cell::Yellow);
    }

    #[test]
    fn test_player_points_accumulate() {
        let mut player = Player::new("Ada", Disc::Red);
        assert_eq!(player.points(), 0);
        player.award(2);
        player.award(1);
        assert_eq!(player.points(), 3);
        assert_eq!(player.name(), "Ada");
        assert_eq!(player.disc(), Disc::Red);
    }
}
