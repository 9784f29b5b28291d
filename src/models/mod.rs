pub mod equipment;
pub mod reminder;
pub mod table;
pub mod track;

pub use equipment::{EquipmentRecord, TrackState};
pub use reminder::ReminderState;
pub use table::{AddOutcome, GearTable};
pub use track::Track;
