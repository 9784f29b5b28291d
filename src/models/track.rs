use clap::ValueEnum;
use std::fmt;

/// The two independent maintenance cycles tracked for every piece of gear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Track {
    Trtr,
    Mntt,
}

impl Track {
    /// Both tracks in the order they appear in the store and in reminder emails.
    pub const ALL: [Track; 2] = [Track::Trtr, Track::Mntt];

    pub fn as_str(&self) -> &'static str {
        match self {
            Track::Trtr => "TRTR",
            Track::Mntt => "MNTT",
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
