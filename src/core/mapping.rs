//! Symptom time slot → meal daytime reconciliation.

use crate::models::daytime::Daytime;
use std::collections::HashMap;

/// Many-to-one mapping from symptom time-slot labels onto meal slots.
/// Labels without an entry (e.g. `AFTER_GETTING_UP`) belong to no meal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaytimeMapping(HashMap<String, Daytime>);

impl DaytimeMapping {
    /// Static table used when the observed vocabulary cannot be mapped.
    pub fn fallback() -> Self {
        DaytimeMapping(
            [
                ("AFTER_BREAKFAST", Daytime::Breakfast),
                ("AFTER_LUNCH", Daytime::Lunch),
                ("AFTER_DINNER", Daytime::Dinner),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        )
    }

    /// Infer the mapping from the time-slot labels present in the data.
    ///
    /// For each meal (alphabetical order), the first observed label that
    /// contains the meal's name, case-insensitively, maps to that meal.
    /// Returns `None` if any meal finds no label; the caller decides what
    /// to fall back to.
    pub fn infer<'a>(observed: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let observed: Vec<String> = observed.into_iter().map(str::to_string).collect();

        let mut meals = Daytime::ALL;
        meals.sort_by_key(|d| d.to_db_str());

        let mut map = HashMap::with_capacity(meals.len());
        for meal in meals {
            let needle = meal.to_db_str().to_lowercase();
            let label = observed
                .iter()
                .find(|label| label.to_lowercase().contains(&needle))?;
            map.insert(label.clone(), meal);
        }

        Some(DaytimeMapping(map))
    }

    pub fn get(&self, time_slot: &str) -> Option<Daytime> {
        self.0.get(time_slot).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
