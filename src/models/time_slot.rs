/// Symptom-report time slot, as stored in `symptomreport.time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    AfterGettingUp,
    AfterBreakfast,
    AfterLunch,
    AfterDinner,
    Unknown,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::AfterGettingUp,
        TimeSlot::AfterBreakfast,
        TimeSlot::AfterLunch,
        TimeSlot::AfterDinner,
        TimeSlot::Unknown,
    ];

    /// Rank for values outside the known vocabulary.
    pub const OTHER_RANK: u8 = 9;

    pub fn to_db_str(&self) -> &'static str {
        match self {
            TimeSlot::AfterGettingUp => "AFTER_GETTING_UP",
            TimeSlot::AfterBreakfast => "AFTER_BREAKFAST",
            TimeSlot::AfterLunch => "AFTER_LUNCH",
            TimeSlot::AfterDinner => "AFTER_DINNER",
            TimeSlot::Unknown => "UNKNOWN",
        }
    }

    pub fn rank(&self) -> u8 {
        match self {
            TimeSlot::AfterGettingUp => 1,
            TimeSlot::AfterBreakfast => 2,
            TimeSlot::AfterLunch => 3,
            TimeSlot::AfterDinner => 4,
            TimeSlot::Unknown => 5,
        }
    }
}
