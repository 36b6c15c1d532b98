//! Nuclear species definitions.

/// Nuclei carried in atmosphere compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Species {
    /// Hydrogen-1
    H1,
    /// Helium-3
    He3,
    /// Helium-4
    He4,
    /// Carbon-12
    C12,
    /// Nitrogen-14
    N14,
    /// Oxygen-16
    O16,
    /// Neon-20
    Ne20,
    /// Magnesium-24
    Mg24,
    /// Silicon-28
    Si28,
    /// Iron-56
    Fe56,
}

impl Species {
    pub const ALL: [Species; 10] = [
        Species::H1,
        Species::He3,
        Species::He4,
        Species::C12,
        Species::N14,
        Species::O16,
        Species::Ne20,
        Species::Mg24,
        Species::Si28,
        Species::Fe56,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Species::H1 => "H1",
            Species::He3 => "He3",
            Species::He4 => "He4",
            Species::C12 => "C12",
            Species::N14 => "N14",
            Species::O16 => "O16",
            Species::Ne20 => "Ne20",
            Species::Mg24 => "Mg24",
            Species::Si28 => "Si28",
            Species::Fe56 => "Fe56",
        }
    }

    /// Mass number A.
    pub fn mass_number(&self) -> f64 {
        match self {
            Species::H1 => 1.0,
            Species::He3 => 3.0,
            Species::He4 => 4.0,
            Species::C12 => 12.0,
            Species::N14 => 14.0,
            Species::O16 => 16.0,
            Species::Ne20 => 20.0,
            Species::Mg24 => 24.0,
            Species::Si28 => 28.0,
            Species::Fe56 => 56.0,
        }
    }

    /// Nuclear charge Z.
    pub fn charge(&self) -> f64 {
        match self {
            Species::H1 => 1.0,
            Species::He3 | Species::He4 => 2.0,
            Species::C12 => 6.0,
            Species::N14 => 7.0,
            Species::O16 => 8.0,
            Species::Ne20 => 10.0,
            Species::Mg24 => 12.0,
            Species::Si28 => 14.0,
            Species::Fe56 => 26.0,
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for Species {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('-', "").to_lowercase();
        match wanted.as_str() {
            "hydrogen1" | "p" => return Ok(Species::H1),
            "helium3" => return Ok(Species::He3),
            "helium4" | "alpha" => return Ok(Species::He4),
            _ => {}
        }
        Species::ALL
            .into_iter()
            .find(|sp| sp.key().to_lowercase() == wanted)
            .ok_or("unknown species")
    }
}
