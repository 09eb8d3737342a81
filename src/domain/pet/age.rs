// Short age labels for list cards and the detail header.

const DAYS_PER_MONTH: f64 = 30.417;

/// A pet's age, kept in days and rendered with the coarsest useful unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PetAge {
    days: u32,
}

impl PetAge {
    pub fn from_days(days: u32) -> Self {
        Self { days }
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Short label: days up to two weeks, then weeks, months, and years
    pub fn short_label(&self) -> String {
        let days = self.days;
        match days {
            0..=14 => format!("{}d", days),
            15..=70 => format!("{}w", days / 7),
            71..=400 => format!("{}m", months_in(days)),
            _ => {
                let years = days / 365;
                let months = months_in(days % 365);
                if months > 0 {
                    format!("{}y {}m", years, months)
                } else {
                    format!("{}y", years)
                }
            }
        }
    }
}

fn months_in(days: u32) -> u32 {
    (f64::from(days) / DAYS_PER_MONTH).round() as u32
}

impl std::fmt::Display for PetAge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.short_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_label_boundaries() {
        assert_eq!(PetAge::from_days(0).short_label(), "0d");
        assert_eq!(PetAge::from_days(14).short_label(), "14d");
        assert_eq!(PetAge::from_days(15).short_label(), "2w");
        assert_eq!(PetAge::from_days(70).short_label(), "10w");
        assert_eq!(PetAge::from_days(71).short_label(), "2m");
        assert_eq!(PetAge::from_days(400).short_label(), "13m");
    }

    #[test]
    fn test_age_label_years() {
        assert_eq!(PetAge::from_days(730).short_label(), "2y");
        assert_eq!(PetAge::from_days(365 + 91).short_label(), "1y 3m");
        assert_eq!(PetAge::from_days(401).to_string(), "1y 1m");
    }
}
