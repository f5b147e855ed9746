//! Maintenance Discord commands - reference types, service logging and history.

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
            car,
            due_status::assess_record,
            maintenance::{self, NewServiceRecord, ServiceEntry},
        },
        entities,
        errors::{Error, Result},
    };
    use chrono::NaiveDate;
    use std::fmt::Write;

    /// Services listed by `/services` and shown after `/log_service`
    const HISTORY_LIMIT: usize = 10;

    fn interval_text(kind: &entities::maintenance_type::Model) -> String {
        let km = kind.default_interval_km.map(format_mileage);
        let months = kind
            .default_interval_months
            .map(|m| if m == 1 { "1 mês".to_string() } else { format!("{m} meses") });

        match (km, months) {
            (Some(km), Some(months)) => format!("a cada {km} ou {months}"),
            (Some(km), None) => format!("a cada {km}"),
            (None, Some(months)) => format!("a cada {months}"),
            (None, None) => "sem intervalo padrão".to_string(),
        }
    }

    fn render_history(
        response: &mut String,
        car: &entities::car::Model,
        entries: &[ServiceEntry],
        today: NaiveDate,
    ) -> Result<()> {
        if entries.is_empty() {
            writeln!(response, "Nenhuma manutenção registrada.")?;
            return Ok(());
        }

        for entry in entries.iter().take(HISTORY_LIMIT) {
            let record = &entry.record;
            writeln!(
                response,
                "• **{}** em {} com {} - {}",
                entry.type_name(),
                format_date(record.date_performed),
                format_mileage(record.mileage_at_service),
                format_brl(record.cost)
            )?;

            let mut next = Vec::new();
            if let Some(km) = record.next_service_km {
                next.push(format_mileage(km));
            }
            if let Some(date) = record.next_service_date {
                next.push(format_date(date));
            }
            if !next.is_empty() {
                let assessment = assess_record(record, car.mileage, today);
                writeln!(
                    response,
                    "  Próxima: {} - {} {} ({})",
                    next.join(" ou "),
                    assessment.status.emoji(),
                    assessment.status,
                    assessment.remaining_text()
                )?;
            }
        }

        if entries.len() > HISTORY_LIMIT {
            writeln!(
                response,
                "_... e mais {} registro(s)._",
                entries.len() - HISTORY_LIMIT
            )?;
        }
        Ok(())
    }

    /// Lists the maintenance types and their default intervals.
    #[poise::command(slash_command, prefix_command)]
    pub async fn maintenance_types(ctx: poise::Context<'_, BotData, Error>) -> Result<()> {
        let db = &ctx.data().database;
        let types = maintenance::list_maintenance_types(db).await?;

        if types.is_empty() {
            ctx.say("📋 Nenhum tipo de manutenção configurado.").await?;
            return Ok(());
        }

        let mut response = String::new();
        writeln!(&mut response, "📋 **Tipos de manutenção**")?;
        for kind in &types {
            writeln!(
                &mut response,
                "• **{}** [{}] - {}",
                kind.name,
                kind.category,
                interval_text(kind)
            )?;
        }

        ctx.say(response).await?;
        Ok(())
    }

    /// Logs a service performed on one of your cars.
    ///
    /// The next service is scheduled from the type's default interval unless you
    /// give an explicit km or date.
    #[poise::command(slash_command, prefix_command)]
    #[allow(clippy::too_many_arguments)]
    pub async fn log_service(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Car that was serviced"]
        #[autocomplete = "autocomplete::autocomplete_car"]
        car: String,
        #[description = "Type of service"]
        #[autocomplete = "autocomplete::autocomplete_maintenance_type"]
        service: String,
        #[description = "Amount paid (e.g., 250.00)"] cost: f64,
        #[description = "Odometer at service time (default: car's current km)"] mileage: Option<
            i64,
        >,
        #[description = "Service date, AAAA-MM-DD or DD/MM/AAAA (default: today)"] date: Option<
            String,
        >,
        #[description = "Workshop (optional)"] provider: Option<String>,
        #[description = "Notes (optional)"] notes: Option<String>,
        #[description = "Override the next service km"] next_km: Option<i64>,
        #[description = "Override the next service date"] next_date: Option<String>,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        let today = utils::today();
        let date_performed = match utils::parse_date(date.as_deref(), today) {
            Ok(parsed) => parsed,
            Err(e) => {
                ctx.say(format!("❌ {e}")).await?;
                return Ok(());
            }
        };
        let next_service_date = match next_date.as_deref() {
            Some(raw) => match utils::parse_date(Some(raw), today) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    ctx.say(format!("❌ {e}")).await?;
                    return Ok(());
                }
            },
            None => None,
        };
        if utils::non_negative("cost", cost).is_err() {
            ctx.say("❌ O custo deve ser um valor positivo.").await?;
            return Ok(());
        }

        ctx.defer().await?;

        let target = car::find_owned_car_by_label(db, &owner_id, &car).await?;
        let kind = maintenance::get_maintenance_type_by_name(db, &service)
            .await?
            .ok_or_else(|| Error::MaintenanceTypeNotFound {
                maintenance_type: service.clone(),
            })?;

        let new_record = NewServiceRecord {
            maintenance_type_id: kind.id,
            date_performed,
            mileage_at_service: mileage.unwrap_or(target.mileage),
            cost,
            service_provider: provider,
            notes,
            next_service_km: next_km,
            next_service_date,
        };
        let history = maintenance::create_record(db, &owner_id, target.id, new_record).await?;

        let mut response = String::new();
        writeln!(
            &mut response,
            "✅ **{}** registrada para {}!\n",
            kind.name,
            target.label()
        )?;
        render_history(&mut response, &target, &history, today)?;

        ctx.say(response).await?;
        Ok(())
    }

    /// Shows the service history of one of your cars with the status of each next service.
    #[poise::command(slash_command, prefix_command)]
    pub async fn services(
        ctx: poise::Context<'_, BotData, Error>,
        #[description = "Car to show"]
        #[autocomplete = "autocomplete::autocomplete_car"]
        car: String,
    ) -> Result<()> {
        let db = &ctx.data().database;
        let owner_id = ctx.author().id.to_string();

        ctx.defer().await?;

        let target = car::find_owned_car_by_label(db, &owner_id, &car).await?;
        let history = maintenance::list_records_for_car(db, target.id).await?;

        let mut response = String::new();
        writeln!(
            &mut response,
            "🔧 **Manutenções de {}** ({})\n",
            target.label(),
            format_mileage(target.mileage)
        )?;
        render_history(&mut response, &target, &history, utils::today())?;

        ctx.say(response).await?;
        Ok(())
    }
}

// Re-export all commands
pub use inner::*;
