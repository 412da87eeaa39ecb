use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const NO_DEFICIENCY: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(alias = "male", alias = "MALE")]
    Male,
    #[serde(alias = "female", alias = "FEMALE")]
    Female,
    #[serde(alias = "other", alias = "OTHER")]
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserProfile {
    pub age: u32,
    pub gender: Gender,
    pub weight_kg: f64,
    pub height_feet: f64,
    pub health_issues: String,
}

/// Weekly intake frequencies plus a free-text deficiency note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DietaryHabits {
    pub fruits: u32,
    pub vegetables: u32,
    pub protein_sources: u32,
    pub whole_grains: u32,
    pub micronutrient_deficiency: String,
}

impl DietaryHabits {
    pub fn has_deficiency(&self) -> bool {
        !self
            .micronutrient_deficiency
            .eq_ignore_ascii_case(NO_DEFICIENCY)
    }
}

impl fmt::Display for DietaryHabits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fruits {} times per week, vegetables {} times per week, protein sources {} times per week, whole grains {} times per week, micronutrient deficiency: {}",
            self.fruits,
            self.vegetables,
            self.protein_sources,
            self.whole_grains,
            self.micronutrient_deficiency
        )
    }
}

/// Body-mass index rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct Bmi(f64);

impl Bmi {
    /// Rounds half away from zero; BMI values are always positive here.
    pub fn from_raw(value: f64) -> Self {
        Self((value * 100.0).round() / 100.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Always shows a decimal point, so a whole value reads `22.0`.
impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Undecorated category label, used as the key for prompt templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    MalnutritionUnderweight,
    HealthyWeight,
    Overweight,
    Obesity,
    PotentialAgeRelatedMalnutrition,
    PoorDietaryDiversity,
    PossibleMicronutrientDeficiency,
    BalancedDiet,
    Undetermined,
}

impl CategoryKind {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKind::MalnutritionUnderweight => "Malnutrition (underweight)",
            CategoryKind::HealthyWeight => "Healthy weight",
            CategoryKind::Overweight => "Overweight",
            CategoryKind::Obesity => "Obesity",
            CategoryKind::PotentialAgeRelatedMalnutrition => "Potential age-related malnutrition",
            CategoryKind::PoorDietaryDiversity => "Poor dietary diversity",
            CategoryKind::PossibleMicronutrientDeficiency => "Possible micronutrient deficiency",
            CategoryKind::BalancedDiet => "Balanced diet",
            CategoryKind::Undetermined => "Undetermined nutrition problem",
        }
    }
}

/// The primary nutrition concern produced by one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NutritionCategory {
    MalnutritionUnderweight,
    HealthyWeight,
    Overweight,
    Obesity,
    PotentialAgeRelatedMalnutrition,
    PoorDietaryDiversity,
    PossibleMicronutrientDeficiency { deficiency: String },
    BalancedDiet,
    Undetermined,
}

impl NutritionCategory {
    pub fn kind(&self) -> CategoryKind {
        match self {
            NutritionCategory::MalnutritionUnderweight => CategoryKind::MalnutritionUnderweight,
            NutritionCategory::HealthyWeight => CategoryKind::HealthyWeight,
            NutritionCategory::Overweight => CategoryKind::Overweight,
            NutritionCategory::Obesity => CategoryKind::Obesity,
            NutritionCategory::PotentialAgeRelatedMalnutrition => {
                CategoryKind::PotentialAgeRelatedMalnutrition
            }
            NutritionCategory::PoorDietaryDiversity => CategoryKind::PoorDietaryDiversity,
            NutritionCategory::PossibleMicronutrientDeficiency { .. } => {
                CategoryKind::PossibleMicronutrientDeficiency
            }
            NutritionCategory::BalancedDiet => CategoryKind::BalancedDiet,
            NutritionCategory::Undetermined => CategoryKind::Undetermined,
        }
    }
}

impl fmt::Display for NutritionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutritionCategory::PossibleMicronutrientDeficiency { deficiency } => {
                write!(f, "{} (e.g., {})", self.kind().label(), deficiency)
            }
            other => f.write_str(other.kind().label()),
        }
    }
}

/// Serialized form of a category: the display label alongside its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryView {
    pub kind: CategoryKind,
    pub label: String,
}

impl From<&NutritionCategory> for CategoryView {
    fn from(category: &NutritionCategory) -> Self {
        Self {
            kind: category.kind(),
            label: category.to_string(),
        }
    }
}
