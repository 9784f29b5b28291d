use crate::core::schedule::next_due_for;
use crate::models::reminder::ReminderState;
use crate::models::track::Track;
use chrono::NaiveDate;

/// State of one maintenance track.
///
/// Fields are private: the only way to set a date is [`TrackState::opened`],
/// which always derives the next due date and re-arms the reminder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrackState {
    last_opened: Option<NaiveDate>,
    reminder: ReminderState,
}

impl TrackState {
    /// A track that was never opened.
    pub fn blank() -> Self {
        Self::default()
    }

    /// A freshly opened track: next due in 14 days, reminder pending.
    pub fn opened(date: NaiveDate) -> Self {
        Self {
            last_opened: Some(date),
            reminder: ReminderState::Pending,
        }
    }

    /// Rebuild a track from stored values.
    ///
    /// A missing date always yields a blank track, and a date without a flag is
    /// treated as pending.
    pub fn from_parts(last_opened: Option<NaiveDate>, reminder: ReminderState) -> Self {
        match last_opened {
            None => Self::blank(),
            Some(date) => Self {
                last_opened: Some(date),
                reminder: match reminder {
                    ReminderState::Unset => ReminderState::Pending,
                    other => other,
                },
            },
        }
    }

    pub fn last_opened(&self) -> Option<NaiveDate> {
        self.last_opened
    }

    pub fn next_due(&self) -> Option<NaiveDate> {
        self.last_opened.map(next_due_for)
    }

    pub fn reminder(&self) -> ReminderState {
        self.reminder
    }

    pub fn is_blank(&self) -> bool {
        self.last_opened.is_none()
    }

    /// Record that the reminder for the current due date went out.
    /// No-op on a blank track.
    pub(crate) fn mark_notified(&mut self) {
        if self.last_opened.is_some() {
            self.reminder = ReminderState::Notified;
        }
    }
}

/// One named piece of gear with its two maintenance tracks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EquipmentRecord {
    pub name: String,
    pub trtr: TrackState,
    pub mntt: TrackState,
}

impl EquipmentRecord {
    /// A record with both tracks blank.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trtr: TrackState::blank(),
            mntt: TrackState::blank(),
        }
    }

    pub fn track(&self, track: Track) -> &TrackState {
        match track {
            Track::Trtr => &self.trtr,
            Track::Mntt => &self.mntt,
        }
    }

    pub fn track_mut(&mut self, track: Track) -> &mut TrackState {
        match track {
            Track::Trtr => &mut self.trtr,
            Track::Mntt => &mut self.mntt,
        }
    }

    /// Set `track` as opened on `date` (in place).
    pub fn open(&mut self, track: Track, date: NaiveDate) {
        *self.track_mut(track) = TrackState::opened(date);
    }

    /// Builder-style variant of [`EquipmentRecord::open`].
    pub fn with_opened(mut self, track: Track, date: NaiveDate) -> Self {
        self.open(track, date);
        self
    }
}
