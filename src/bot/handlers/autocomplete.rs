//! Autocomplete handlers for Discord slash command parameters.
//!
//! Suggestions are computed from the invoking user's own data, so one user never sees
//! another user's cars.

use crate::{
    bot::BotData,
    core::{car, car::EngineType, fuel::FuelType, maintenance},
    errors::Error,
};

/// Discord accepts at most 25 autocomplete choices
const MAX_CHOICES: usize = 25;

fn matches_partial(candidate: &str, partial: &str) -> bool {
    candidate.to_lowercase().contains(&partial.to_lowercase())
}

/// Suggests the author's cars as `#id brand model year` labels.
///
/// The label is parsed back by [`car::find_owned_car_by_label`].
pub async fn autocomplete_car(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;
    let owner_id = ctx.author().id.to_string();

    let Ok(cars) = car::list_cars(db, &owner_id).await else {
        return Vec::new();
    };

    cars.iter()
        .map(crate::entities::car::Model::label)
        .filter(|label| matches_partial(label, partial))
        .take(MAX_CHOICES)
        .collect()
}

/// Suggests maintenance type names.
pub async fn autocomplete_maintenance_type(
    ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    let db = &ctx.data().database;

    let Ok(types) = maintenance::list_maintenance_types(db).await else {
        return Vec::new();
    };

    types
        .into_iter()
        .map(|t| t.name)
        .filter(|name| matches_partial(name, partial))
        .take(MAX_CHOICES)
        .collect()
}

/// Suggests fuel types for a fill-up.
pub async fn autocomplete_fuel_type(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    FuelType::ALL
        .iter()
        .map(|fuel| fuel.as_str().to_string())
        .filter(|name| matches_partial(name, partial))
        .collect()
}

/// Suggests engine types for a car.
pub async fn autocomplete_engine_type(
    _ctx: poise::Context<'_, BotData, Error>,
    partial: &str,
) -> Vec<String> {
    EngineType::ALL
        .iter()
        .map(|engine| engine.as_str().to_string())
        .filter(|name| matches_partial(name, partial))
        .collect()
}
