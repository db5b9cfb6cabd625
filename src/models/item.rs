use serde::{Deserialize, Serialize};

/// A primitive filling pick for one skewer half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Filling {
    Sausage,
    Cheese,
}

impl Filling {
    pub const ALL: [Filling; 2] = [Filling::Sausage, Filling::Cheese];

    pub fn label(self) -> &'static str {
        match self {
            Filling::Sausage => "sausage",
            Filling::Cheese => "cheese",
        }
    }
}

/// A sauce on the stand. Presence only; amounts are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SauceKind {
    Ketchup,
    Mustard,
    Mayo,
}

impl SauceKind {
    pub const ALL: [SauceKind; 3] = [SauceKind::Ketchup, SauceKind::Mustard, SauceKind::Mayo];

    pub fn label(self) -> &'static str {
        match self {
            SauceKind::Ketchup => "ketchup",
            SauceKind::Mustard => "mustard",
            SauceKind::Mayo => "mayo",
        }
    }
}

/// What ended up inside the corn dog, derived from the two picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillingStyle {
    SausageOnly,
    CheeseOnly,
    HalfHalf,
}

impl FillingStyle {
    /// Resolve two picks into a style. Pick order never matters.
    pub fn from_picks(a: Filling, b: Filling) -> Self {
        match (a, b) {
            (Filling::Sausage, Filling::Sausage) => FillingStyle::SausageOnly,
            (Filling::Cheese, Filling::Cheese) => FillingStyle::CheeseOnly,
            _ => FillingStyle::HalfHalf,
        }
    }
}

/// How far along the fry got. Ordering follows time in the oil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Doneness {
    Raw,
    Undercooked,
    Perfect,
    Overcooked,
    Burnt,
}

impl Doneness {
    pub const ALL: [Doneness; 5] = [
        Doneness::Raw,
        Doneness::Undercooked,
        Doneness::Perfect,
        Doneness::Overcooked,
        Doneness::Burnt,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Doneness::Raw => "raw",
            Doneness::Undercooked => "undercooked",
            Doneness::Perfect => "perfect",
            Doneness::Overcooked => "overcooked",
            Doneness::Burnt => "burnt",
        }
    }
}

/// The corn dog under construction during one preparation cycle.
///
/// Owned by the session for the whole cycle; stages write into it one field
/// group at a time. A fresh record starts with nothing decided.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRecord {
    /// The two skewer halves, in the order they were picked.
    pub picks: Option<(Filling, Filling)>,

    /// Derived from `picks`; kept alongside so consumers never re-derive.
    pub style: Option<FillingStyle>,

    /// Batter coverage, 0..=100.
    pub batter_percent: f64,

    /// Set once when the corn dog leaves the fryer.
    pub doneness: Option<Doneness>,

    pub sugar_coated: bool,

    /// Sauces applied, deduplicated.
    pub sauces: Vec<SauceKind>,
}

impl ItemRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record both picks and resolve the filling style.
    pub fn set_picks(&mut self, a: Filling, b: Filling) {
        self.picks = Some((a, b));
        self.style = Some(FillingStyle::from_picks(a, b));
    }

    /// Apply a sauce. Applying the same sauce twice is a no-op.
    pub fn add_sauce(&mut self, sauce: SauceKind) {
        if !self.sauces.contains(&sauce) {
            self.sauces.push(sauce);
        }
    }

    pub fn has_sauce(&self, sauce: SauceKind) -> bool {
        self.sauces.contains(&sauce)
    }
}
