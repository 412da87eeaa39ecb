pub mod classify_nutrition;
pub mod get_nutrition_advice;
