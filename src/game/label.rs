use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    Row,
    Column,
}

impl PlayerId {
    pub const ALL: [PlayerId; 2] = [PlayerId::Row, PlayerId::Column];

    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::Row => PlayerId::Column,
            PlayerId::Column => PlayerId::Row,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::Row => write!(f, "row"),
            PlayerId::Column => write!(f, "column"),
        }
    }
}

/// A pure strategy of either player, also used to tag basic variables.
///
/// Stored 0-based: the row player's strategies take `0..m` and the column
/// player's take `m..m+n`. The label doubles as the tableau column of the
/// variable it names. Displayed 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Label(usize);

impl Label {
    /// Label from its conventional 1-based number.
    pub fn from_number(number: usize) -> Option<Label> {
        number.checked_sub(1).map(Label)
    }

    pub fn number(self) -> usize {
        self.0 + 1
    }

    pub fn column(self) -> usize {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Mapping between label space and each player's strategy indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelSpace {
    m: usize,
    n: usize,
}

impl LabelSpace {
    pub fn new(m: usize, n: usize) -> Self {
        Self { m, n }
    }

    pub fn num_strategies(&self, player: PlayerId) -> usize {
        match player {
            PlayerId::Row => self.m,
            PlayerId::Column => self.n,
        }
    }

    pub fn num_labels(&self) -> usize {
        self.m + self.n
    }

    /// Tableau column holding the value of the basic variables.
    pub fn value_column(&self) -> usize {
        self.m + self.n
    }

    pub fn contains(&self, label: Label) -> bool {
        label.0 < self.num_labels()
    }

    pub fn owner(&self, label: Label) -> PlayerId {
        if label.0 < self.m {
            PlayerId::Row
        } else {
            PlayerId::Column
        }
    }

    pub fn strategy(&self, label: Label) -> (PlayerId, usize) {
        match self.owner(label) {
            PlayerId::Row => (PlayerId::Row, label.0),
            PlayerId::Column => (PlayerId::Column, label.0 - self.m),
        }
    }

    pub fn label(&self, player: PlayerId, strategy: usize) -> Label {
        match player {
            PlayerId::Row => Label(strategy),
            PlayerId::Column => Label(self.m + strategy),
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = Label> + use<> {
        (0..self.num_labels()).map(Label)
    }

    pub fn player_labels(&self, player: PlayerId) -> impl Iterator<Item = Label> + use<> {
        let space = *self;
        (0..self.num_strategies(player)).map(move |i| space.label(player, i))
    }
}
