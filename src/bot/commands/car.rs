//! Car Discord commands - list, register, edit and remove cars.
//!
//! Every command works on the invoking user's own cars only. After a change the
//! refreshed list returned by the store is shown back to the user.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            commands::utils::{describe_car, format_mileage},
            handlers::autocomplete,
        },
        core::car::{self, CarChanges, NewCar},
        entities,
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Discord rejects messages above 2000 characters
    const MESSAGE_LIMIT: usize = 2000;
    /// Cars listed per reply
    const CAR_LIST_LIMIT: usize = 20;
    /// Room kept free for the "and N more" line
    const FOOTER_RESERVE: usize = 40;

    fn render_car_list(title: &str, cars: &[entities::car::Model]) -> Result<String> {
        let mut response = String::new();
        writeln!(&mut response, "{title}")?;
        if cars.is_empty() {
            writeln!(
                &mut response,
                "Nenhum carro cadastrado. Use `/add_car` para cadastrar o primeiro."
            )?;
        }

        let mut written = 0;
        for car in cars.iter().take(CAR_LIST_LIMIT) {
            let line = format!("• {}\n", describe_car(car));
            if response.len() + line.len() + FOOTER_RESERVE > MESSAGE_LIMIT {
                break;
            }
            response.push_str(&line);
            written += 1;
        }
        if written < cars.len() {
            writeln!(
                &mut response,
                "_... e mais {} carro(s)._",
                cars.len() - written
            )?;
        }
        Ok(response)
    }

    /// Lists your registered cars.
    #[poise::command(slash_command, prefix_command)]
    pub async fn cars(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        let cars = car::list_cars(db, &owner_id).await?;
        ctx.say(render_car_list("🚗 **Seus carros**", &cars)?)
            .await?;
        Ok(())
    }

    /// Registers a new car.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn add_car(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Brand (e.g., 'Fiat')"] brand: String,
        #[description = "Model (e.g., 'Uno')"] model: String,
        #[description = "Model year"] year: i32,
        #[description = "Current odometer reading in km"] mileage: i64,
        #[description = "License plate (optional)"] license_plate: Option<String>,
        #[description = "Color (optional)"] color: Option<String>,
        #[description = "Engine type (optional)"]
        #[autocomplete = "autocomplete::autocomplete_engine_type"]
        engine_type: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        ctx.defer().await?;

        let new_car = NewCar {
            brand,
            model,
            year,
            license_plate,
            color,
            engine_type,
            mileage,
        };
        let cars = car::create_car(db, &owner_id, new_car).await?;

        ctx.say(render_car_list("✅ **Carro cadastrado!**", &cars)?)
            .await?;
        Ok(())
    }

    /// Edits one of your cars. Only the options you fill in are changed.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn update_car(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Car to edit"]
        #[autocomplete = "autocomplete::autocomplete_car"]
        car: String,
        #[description = "New odometer reading in km"] mileage: Option<i64>,
        #[description = "New brand"] brand: Option<String>,
        #[description = "New model"] model: Option<String>,
        #[description = "New model year"] year: Option<i32>,
        #[description = "New license plate"] license_plate: Option<String>,
        #[description = "New color"] color: Option<String>,
        #[description = "New engine type"]
        #[autocomplete = "autocomplete::autocomplete_engine_type"]
        engine_type: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        ctx.defer().await?;

        let target = car::find_owned_car_by_label(db, &owner_id, &car).await?;
        let changes = CarChanges {
            brand,
            model,
            year,
            license_plate,
            color,
            engine_type,
            mileage,
        };

        if changes.is_empty() {
            ctx.say("❌ Informe ao menos um campo para alterar.").await?;
            return Ok(());
        }

        // Lower readings are accepted, only flagged
        if let Some(new_mileage) = mileage.filter(|km| *km < target.mileage) {
            ctx.say(format!(
                "⚠️ A nova quilometragem ({}) é menor que a anterior ({}).",
                format_mileage(new_mileage),
                format_mileage(target.mileage)
            ))
            .await?;
        }

        let cars = car::update_car(db, &owner_id, target.id, changes).await?;
        ctx.say(render_car_list("✅ **Carro atualizado!**", &cars)?)
            .await?;
        Ok(())
    }

    /// Removes one of your cars together with all of its service and fuel history.
    #[poise::command(slash_command, prefix_command)]
    pub async fn delete_car(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Car to remove"]
        #[autocomplete = "autocomplete::autocomplete_car"]
        car: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        ctx.defer().await?;

        let target = car::find_owned_car_by_label(db, &owner_id, &car).await?;
        let cars = car::delete_car(db, &owner_id, target.id).await?;

        let title = format!("🗑️ **{} removido**, junto com seu histórico.", target.label());
        ctx.say(render_car_list(&title, &cars)?).await?;
        Ok(())
    }

}

// Re-export all commands
pub use inner::*;
