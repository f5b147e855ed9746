//! Fuel Discord commands - log fill-ups and show consumption statistics.

// Inner module to suppress missing_docs warnings for poise macro-generated code
mod inner {
    #![allow(missing_docs)]

    use crate::{
        bot::{
            BotData,
            commands::utils::{self, format_brl, format_date, format_mileage},
            handlers::autocomplete,
        },
        core::{
            car, economy,
            fuel::{self, FuelType, NewFuelRecord},
            fuel_draft::FuelDraft,
        },
        entities,
        errors::{Error, Result},
    };
    use std::fmt::Write;

    /// Fill-ups listed under the statistics
    const RECENT_LIMIT: usize = 5;

    fn render_summary(
        response: &mut String,
        records: &[entities::fuel_record::Model],
    ) -> Result<()> {
        let summary = economy::summarize(records);

        match summary.latest {
            Some(latest) => writeln!(
                response,
                "**Último consumo:** {:.2} km/l ({} com {:.2} l)",
                latest.km_per_liter,
                format_mileage(latest.km_driven),
                latest.liters_used
            )?,
            None => writeln!(
                response,
                "**Último consumo:** são necessários dois tanques cheios"
            )?,
        }
        match summary.average_km_per_liter {
            Some(average) => writeln!(response, "**Consumo médio:** {average:.2} km/l")?,
            None => writeln!(response, "**Consumo médio:** -")?,
        }
        writeln!(
            response,
            "**Gasto total:** {} em {} abastecimento(s)\n",
            format_brl(summary.total_spent),
            summary.fill_ups
        )?;

        for record in records.iter().take(RECENT_LIMIT) {
            writeln!(
                response,
                "• {} - {} - {:.2} l de {} a {} = {}{}",
                format_date(record.date_filled),
                format_mileage(record.mileage),
                record.liters,
                record.fuel_type,
                format_brl(record.cost_per_liter),
                format_brl(record.total_cost),
                if record.is_full_tank { "" } else { " (parcial)" }
            )?;
        }
        Ok(())
    }

    /// Logs a fill-up. Give the price per liter or the total; the other is calculated.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn refuel(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Car that was filled up"]
        #[autocomplete = "autocomplete::autocomplete_car"]
        car: String,
        #[description = "Liters filled"] liters: f64,
        #[description = "Price per liter (e.g., 5.79)"] cost_per_liter: Option<f64>,
        #[description = "Total paid (e.g., 231.60)"] total_cost: Option<f64>,
        #[description = "Odometer reading (default: car's current km)"] mileage: Option<i64>,
        #[description = "Fuel type (default: gasolina)"]
        #[autocomplete = "autocomplete::autocomplete_fuel_type"]
        fuel_type: Option<String>,
        #[description = "Was the tank filled completely? (default: true)"] full_tank: Option<
            bool,
        >,
        #[description = "Fill-up date, AAAA-MM-DD or DD/MM/AAAA (default: today)"] date: Option<
            String,
        >,
        #[description = "Gas station (optional)"] station: Option<String>,
        #[description = "Notes (optional)"] notes: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        if !liters.is_finite() || liters <= 0.0 {
            ctx.say("❌ A quantidade de litros deve ser maior que zero.")
                .await?;
            return Ok(());
        }
        if cost_per_liter.is_none() && total_cost.is_none() {
            ctx.say("❌ Informe o preço por litro ou o valor total.")
                .await?;
            return Ok(());
        }
        let fuel_type = match fuel_type.as_deref().map(str::parse::<FuelType>) {
            Some(Ok(parsed)) => parsed,
            Some(Err(e)) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
            None => FuelType::default(),
        };
        let date_filled = match utils::parse_date(date.as_deref(), utils::today()) {
            Ok(parsed) => parsed,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };

        ctx.defer().await?;

        let target = car::find_owned_car_by_label(db, &owner_id, &car).await?;
        let new_record = NewFuelRecord {
            date_filled,
            mileage: mileage.unwrap_or(target.mileage),
            fuel_type,
            draft: FuelDraft::from_inputs(liters, cost_per_liter, total_cost),
            gas_station: station,
            is_full_tank: full_tank.unwrap_or(true),
            notes,
        };
        let records = fuel::create_fuel_record(db, &owner_id, target.id, new_record).await?;

        let mut response = String::new();
        writeln!(
            &mut response,
            "⛽ **Abastecimento registrado para {}!**\n",
            target.label()
        )?;
        render_summary(&mut response, &records)?;

        ctx.say(response).await?;
        Ok(())
    }

    /// Shows fuel consumption and spending for one of your cars.
    #[poise::command(slash_command, prefix_command)]
    pub async fn fuel(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Car to show"]
        #[autocomplete = "autocomplete::autocomplete_car"]
        car: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        ctx.defer().await?;

        let target = car::find_owned_car_by_label(db, &owner_id, &car).await?;
        let records = fuel::list_fuel_records(db, target.id).await?;

        let mut response = String::new();
        writeln!(&mut response, "⛽ **Combustível de {}**\n", target.label())?;
        if records.is_empty() {
            writeln!(
                &mut response,
                "Nenhum abastecimento registrado. Use `/refuel` para começar."
            )?;
        } else {
            render_summary(&mut response, &records)?;
        }

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
