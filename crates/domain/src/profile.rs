use crate::{GenderBias, Name, Routine};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: Name,
    pub gender: Gender,
}

impl Profile {
    #[must_use]
    pub fn gender_bias(&self) -> GenderBias {
        self.gender.into()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
    #[default]
    Unspecified,
}

impl From<u8> for Gender {
    fn from(value: u8) -> Self {
        match value {
            0 => Gender::Female,
            1 => Gender::Male,
            _ => Gender::Unspecified,
        }
    }
}

impl From<Gender> for GenderBias {
    fn from(value: Gender) -> Self {
        match value {
            Gender::Female => GenderBias::Female,
            Gender::Male => GenderBias::Male,
            Gender::Unspecified => GenderBias::Unisex,
        }
    }
}

/// Orders routines by how well they suit the given bias.
///
/// Routines with the same bias come first, followed by unisex routines and
/// then all others. No routine is removed and the order within each group is
/// kept.
#[must_use]
pub fn curate(routines: &[Routine], bias: GenderBias) -> Vec<&Routine> {
    let mut result = routines.iter().collect::<Vec<_>>();
    result.sort_by_key(|r| affinity(r.gender_bias, bias));
    result
}

fn affinity(routine: GenderBias, user: GenderBias) -> u8 {
    if routine == user {
        0
    } else if routine == GenderBias::Unisex {
        1
    } else {
        2
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Goal, RoutineID};

    fn routine(name: &str, gender_bias: GenderBias) -> Routine {
        Routine {
            id: RoutineID::derive(name),
            name: Name::new(name).unwrap(),
            gender_bias,
            goal: Goal::Toning,
            duration_minutes: 30,
            calories: 100,
            steps: vec![],
        }
    }

    #[rstest]
    #[case(0, Gender::Female)]
    #[case(1, Gender::Male)]
    #[case(2, Gender::Unspecified)]
    fn test_gender_from_u8(#[case] value: u8, #[case] expected: Gender) {
        assert_eq!(Gender::from(value), expected);
    }

    #[test]
    fn test_profile_gender_bias() {
        let profile = Profile {
            name: Name::new("Alex").unwrap(),
            gender: Gender::Unspecified,
        };

        assert_eq!(profile.gender_bias(), GenderBias::Unisex);
    }

    #[rstest]
    #[case(GenderBias::Female, vec!["Glutes A", "Glutes B", "Core", "Chest"])]
    #[case(GenderBias::Male, vec!["Chest", "Core", "Glutes A", "Glutes B"])]
    #[case(GenderBias::Unisex, vec!["Core", "Glutes A", "Chest", "Glutes B"])]
    fn test_curate(#[case] bias: GenderBias, #[case] expected: Vec<&str>) {
        let routines = vec![
            routine("Glutes A", GenderBias::Female),
            routine("Core", GenderBias::Unisex),
            routine("Chest", GenderBias::Male),
            routine("Glutes B", GenderBias::Female),
        ];

        assert_eq!(
            curate(&routines, bias)
                .into_iter()
                .map(|r| r.name.as_str())
                .collect::<Vec<_>>(),
            expected
        );
    }
}
