use serde::Serialize;

/// Meal-log category of an eating event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Daytime {
    Breakfast,
    Lunch,
    Dinner,
}

impl Daytime {
    /// Canonical meal order; selector options slice this list by position.
    pub const ALL: [Daytime; 3] = [Daytime::Breakfast, Daytime::Lunch, Daytime::Dinner];

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Daytime::Breakfast => "BREAKFAST",
            Daytime::Lunch => "LUNCH",
            Daytime::Dinner => "DINNER",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "BREAKFAST" => Some(Daytime::Breakfast),
            "LUNCH" => Some(Daytime::Lunch),
            "DINNER" => Some(Daytime::Dinner),
            _ => None,
        }
    }

    /// Sort rank used by the eating query; anything else ranks 4.
    pub fn rank(&self) -> u8 {
        match self {
            Daytime::Breakfast => 1,
            Daytime::Lunch => 2,
            Daytime::Dinner => 3,
        }
    }
}
